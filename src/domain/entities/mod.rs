//! Core domain entities.
//!
//! - [`ShortUrl`] - A long URL mapped to a short identifier, with expiry and
//!   active-state rules

pub mod short_url;

pub use short_url::{EntityError, Metadata, ShortUrl};
