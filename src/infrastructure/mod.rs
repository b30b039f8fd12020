//! Infrastructure layer for concrete implementations of domain contracts.
//!
//! # Modules
//!
//! - [`analytics`] - Analytics sinks (queued and logging)
//! - [`keygen`] - Base62 identifier generation
//! - [`persistence`] - In-memory repository implementation

pub mod analytics;
pub mod keygen;
pub mod persistence;
