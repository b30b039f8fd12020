//! Short URL entity mapping an identifier to its long URL.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Opaque caller-supplied metadata, carried verbatim through the service.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Validation errors raised while constructing a [`ShortUrl`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error("long URL cannot be empty")]
    EmptyLongUrl,

    #[error("short URL cannot be empty")]
    EmptyShortUrl,

    #[error("custom URL cannot be empty")]
    EmptyCustomId,
}

/// A shortened URL and its lifecycle state.
///
/// Fields are private: the only permitted mutation is [`ShortUrl::deactivate`],
/// which is one-way. Expiry is never cached; [`ShortUrl::is_expired`] compares
/// against the wall clock on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    id: String,
    long_url: String,
    short_url: String,
    created_at: DateTime<Utc>,
    expiry: Option<DateTime<Utc>>,
    is_active: bool,
    metadata: Option<Metadata>,
}

impl ShortUrl {
    /// Creates an entity for a generated identifier.
    ///
    /// `short_url` is the full external representation (base URL plus `id`).
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::EmptyLongUrl`] if `long_url` is empty, otherwise
    /// [`EntityError::EmptyShortUrl`] if `short_url` is empty.
    pub fn new(
        id: impl Into<String>,
        long_url: impl Into<String>,
        short_url: impl Into<String>,
        expiry: Option<DateTime<Utc>>,
        metadata: Option<Metadata>,
    ) -> Result<Self, EntityError> {
        let long_url = long_url.into();
        let short_url = short_url.into();

        if long_url.is_empty() {
            return Err(EntityError::EmptyLongUrl);
        }
        if short_url.is_empty() {
            return Err(EntityError::EmptyShortUrl);
        }

        Ok(Self {
            id: id.into(),
            long_url,
            short_url,
            created_at: Utc::now(),
            expiry,
            is_active: true,
            metadata,
        })
    }

    /// Creates an entity for a caller-chosen identifier.
    ///
    /// The custom identifier doubles as the short URL.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::EmptyLongUrl`] if `long_url` is empty, otherwise
    /// [`EntityError::EmptyCustomId`] if `custom_id` is empty.
    pub fn new_custom(
        custom_id: impl Into<String>,
        long_url: impl Into<String>,
        expiry: Option<DateTime<Utc>>,
        metadata: Option<Metadata>,
    ) -> Result<Self, EntityError> {
        let custom_id = custom_id.into();
        let long_url = long_url.into();

        if long_url.is_empty() {
            return Err(EntityError::EmptyLongUrl);
        }
        if custom_id.is_empty() {
            return Err(EntityError::EmptyCustomId);
        }

        Ok(Self {
            id: custom_id.clone(),
            long_url,
            short_url: custom_id,
            created_at: Utc::now(),
            expiry,
            is_active: true,
            metadata,
        })
    }

    /// Rebuilds an entity from previously validated stored state.
    ///
    /// Performs no validation. Only storage backends should call this.
    pub fn reconstruct(
        id: String,
        long_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
        expiry: Option<DateTime<Utc>>,
        is_active: bool,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            id,
            long_url,
            short_url,
            created_at,
            expiry,
            is_active,
            metadata,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expiry
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Returns true if the expiry lies strictly before the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true if the expiry lies strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_some_and(|expiry| now > expiry)
    }

    /// Returns true if the short URL may be resolved: active and not expired.
    pub fn is_available(&self) -> bool {
        self.is_active && !self.is_expired()
    }

    /// Marks the short URL inactive. Calling it again is a no-op.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
