//! Repository trait for short URL storage.

use async_trait::async_trait;

use crate::domain::entities::ShortUrl;

/// Errors returned by short URL repositories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("short URL not found: {0}")]
    NotFound(String),

    #[error("short URL already exists: {0}")]
    AlreadyExists(String),

    /// Backend failure from a durable store. The in-memory store never returns it.
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Storage contract for [`ShortUrl`] entities.
///
/// Implementations must be safe under concurrent use. A write must either
/// fully precede or fully follow any overlapping read or write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryShortUrlRepository`] - in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts or replaces the entity keyed by its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] on backend failures.
    async fn save(&self, short_url: ShortUrl) -> Result<(), StoreError>;

    /// Inserts the entity only if its id is not taken yet.
    ///
    /// The existence check and the write happen atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the id is already stored.
    async fn insert(&self, short_url: ShortUrl) -> Result<(), StoreError>;

    /// Finds an entity by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, StoreError>;

    /// Returns every stored entity. Order is unspecified.
    async fn find_all(&self) -> Result<Vec<ShortUrl>, StoreError>;

    /// Removes the entity with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entity has this id.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Counts stored entities.
    async fn count(&self) -> Result<usize, StoreError>;
}
