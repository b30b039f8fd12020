//! # Short URL
//!
//! A URL shortening service built with Axum around a collision-resistant
//! Base62 key generator.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Short URL entity, store, generator and analytics traits
//! - **Application Layer** ([`application`]) - Short URL lifecycle service and DTOs
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store, key generator, analytics sinks
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - 7-character Base62 identifiers from a scrambled, randomly seeded counter
//! - Pre-generated identifier buffer refilled in the background
//! - Custom identifiers, expiry and deactivation
//! - Fire-and-forget analytics through a bounded queue
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://sho.rt"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::ServiceError;
    pub use crate::application::dto::{
        CreateShortUrlRequest, CreateShortUrlResponse, ResolveRequest, ShortUrlResponse,
    };
    pub use crate::application::services::ShortUrlService;
    pub use crate::domain::entities::{Metadata, ShortUrl};
    pub use crate::domain::id_generator::IdGenerator;
    pub use crate::domain::repositories::ShortUrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
