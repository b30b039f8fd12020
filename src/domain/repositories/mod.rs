//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for unit tests.

pub mod short_url_repository;

pub use short_url_repository::{ShortUrlRepository, StoreError};

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
