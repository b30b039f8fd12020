//! Errors returned by the lifecycle service.

use crate::domain::entities::EntityError;
use crate::domain::id_generator::GenerationError;
use crate::domain::repositories::StoreError;

/// Failures of the short URL use cases.
///
/// Validation variants are raised before any side effect. Store errors pass
/// through unchanged. [`ServiceError::NotActiveOrExpired`] deliberately does
/// not say which of the two applies.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("longUrl is required")]
    LongUrlRequired,

    #[error("shortUrl is required")]
    ShortUrlRequired,

    #[error("ID is required")]
    IdRequired,

    #[error("custom URL already exists")]
    CustomUrlExists,

    #[error("short URL not found")]
    NotFound,

    #[error("short URL is not active or expired")]
    NotActiveOrExpired,

    #[error("failed to generate unique ID: {0}")]
    GenerationFailed(#[source] GenerationError),

    #[error(transparent)]
    InvalidEntity(#[from] EntityError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
