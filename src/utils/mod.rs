//! Utility functions shared across layers.
//!
//! - [`base62`] - Base62 encoding and decoding of identifiers
//! - [`short_url`] - Short URL construction and identifier extraction

pub mod base62;
pub mod short_url;
