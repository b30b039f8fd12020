//! Application layer implementing the short URL use cases.
//!
//! Services consume the domain traits (store, identifier generator, analytics
//! sink) and expose request/response DTOs to the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - create, resolve, list,
//!   deactivate and delete short URLs

pub mod dto;
pub mod error;
pub mod services;

pub use error::ServiceError;
