//! Short URL lifecycle service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::application::dto::{
    CreateShortUrlRequest, CreateShortUrlResponse, ResolveRequest, ShortUrlResponse,
};
use crate::application::error::ServiceError;
use crate::domain::analytics::{AnalyticsEvent, AnalyticsSink, EventType};
use crate::domain::entities::{Metadata, ShortUrl};
use crate::domain::id_generator::{GenerationError, IdGenerator};
use crate::domain::repositories::{ShortUrlRepository, StoreError};
use crate::utils::short_url::{build_short_url, extract_id};

/// Upper bound on identifiers tried when generated ids collide in the store.
const MAX_ATTEMPTS: usize = 10;

/// Creates, resolves, lists and deactivates short URLs.
///
/// Owns no mutable state; every operation goes through the store, so a single
/// instance can be shared across request handlers.
pub struct ShortUrlService {
    repository: Arc<dyn ShortUrlRepository>,
    key_generator: Arc<dyn IdGenerator>,
    analytics: Arc<dyn AnalyticsSink>,
    base_url: String,
}

impl ShortUrlService {
    /// Creates a new service.
    ///
    /// `base_url` prefixes generated identifiers, e.g. `http://localhost:8080`.
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        key_generator: Arc<dyn IdGenerator>,
        analytics: Arc<dyn AnalyticsSink>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            key_generator,
            analytics,
            base_url: base_url.into(),
        }
    }

    /// Creates a short URL.
    ///
    /// # Custom identifiers
    ///
    /// A non-empty `custom_url` is stored as both id and short URL. It is
    /// rejected with [`ServiceError::CustomUrlExists`] if the key is taken,
    /// including when another request claims it between the check and the write.
    ///
    /// # Generated identifiers
    ///
    /// Otherwise an identifier is drawn from the generator and appended to the
    /// base URL. Store collisions are retried with a fresh identifier up to 10
    /// times.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::LongUrlRequired`] if `long_url` is empty
    /// - [`ServiceError::CustomUrlExists`] on custom key conflict
    /// - [`ServiceError::GenerationFailed`] if the generator fails or retries run out
    /// - [`ServiceError::Store`] on store failures
    pub async fn create(
        &self,
        req: CreateShortUrlRequest,
    ) -> Result<CreateShortUrlResponse, ServiceError> {
        if req.long_url.is_empty() {
            return Err(ServiceError::LongUrlRequired);
        }

        let custom_url = req.custom_url.filter(|custom| !custom.is_empty());

        let short_url = match custom_url {
            Some(custom) => {
                self.create_custom(custom, req.long_url, req.expiry, req.user_metadata)
                    .await?
            }
            None => {
                self.create_generated(req.long_url, req.expiry, req.user_metadata)
                    .await?
            }
        };

        info!(
            id = %short_url.id(),
            short_url = %short_url.short_url(),
            "Short URL created"
        );
        self.emit(AnalyticsEvent::new(
            EventType::UrlCreated,
            &short_url,
            short_url.metadata().cloned(),
        ));

        Ok(CreateShortUrlResponse {
            short_url: short_url.short_url().to_string(),
        })
    }

    /// Resolves a short URL (full URL or bare id) to its long URL.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::ShortUrlRequired`] if `short_url` is empty
    /// - [`ServiceError::NotFound`] if no entry matches
    /// - [`ServiceError::NotActiveOrExpired`] if the entry is deactivated or expired
    pub async fn resolve(&self, req: ResolveRequest) -> Result<String, ServiceError> {
        if req.short_url.is_empty() {
            return Err(ServiceError::ShortUrlRequired);
        }

        let id = extract_id(&req.short_url);
        let short_url = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        if !short_url.is_available() {
            debug!(id = %id, "Resolve refused, short URL unavailable");
            return Err(ServiceError::NotActiveOrExpired);
        }

        self.emit(AnalyticsEvent::new(
            EventType::UrlAccessed,
            &short_url,
            req.user_metadata,
        ));

        Ok(short_url.long_url().to_string())
    }

    /// Lists every stored short URL, in no particular order.
    pub async fn list(&self) -> Result<Vec<ShortUrlResponse>, ServiceError> {
        let urls = self.repository.find_all().await?;
        Ok(urls.iter().map(ShortUrlResponse::from).collect())
    }

    /// Deactivates a short URL. Deactivating twice is allowed.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::IdRequired`] if `id` is empty
    /// - [`ServiceError::NotFound`] if no entry matches
    pub async fn deactivate(&self, id: &str) -> Result<(), ServiceError> {
        if id.is_empty() {
            return Err(ServiceError::IdRequired);
        }

        let mut short_url = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        short_url.deactivate();
        self.repository.save(short_url.clone()).await?;

        info!(id = %id, "Short URL deactivated");
        self.emit(AnalyticsEvent::new(
            EventType::UrlDeactivated,
            &short_url,
            short_url.metadata().cloned(),
        ));

        Ok(())
    }

    /// Permanently removes a short URL.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::IdRequired`] if `id` is empty
    /// - [`ServiceError::NotFound`] if no entry matches
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if id.is_empty() {
            return Err(ServiceError::IdRequired);
        }

        match self.repository.delete(id).await {
            Ok(()) => {
                info!(id = %id, "Short URL deleted");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => Err(ServiceError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn create_custom(
        &self,
        custom: String,
        long_url: String,
        expiry: Option<DateTime<Utc>>,
        metadata: Option<Metadata>,
    ) -> Result<ShortUrl, ServiceError> {
        if self.repository.find_by_id(&custom).await?.is_some() {
            return Err(ServiceError::CustomUrlExists);
        }

        let short_url = ShortUrl::new_custom(custom, long_url, expiry, metadata)?;

        match self.repository.insert(short_url.clone()).await {
            Ok(()) => Ok(short_url),
            Err(StoreError::AlreadyExists(_)) => Err(ServiceError::CustomUrlExists),
            Err(e) => Err(e.into()),
        }
    }

    async fn create_generated(
        &self,
        long_url: String,
        expiry: Option<DateTime<Utc>>,
        metadata: Option<Metadata>,
    ) -> Result<ShortUrl, ServiceError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let id = self
                .key_generator
                .generate_one()
                .map_err(ServiceError::GenerationFailed)?;

            let full = build_short_url(&self.base_url, &id);
            let short_url = ShortUrl::new(id, long_url.clone(), full, expiry, metadata.clone())?;

            match self.repository.insert(short_url.clone()).await {
                Ok(()) => return Ok(short_url),
                Err(StoreError::AlreadyExists(id)) => {
                    debug!(attempt, id = %id, "Generated id already taken, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::GenerationFailed(GenerationError::Exhausted {
            attempts: MAX_ATTEMPTS,
        }))
    }

    fn emit(&self, event: AnalyticsEvent) {
        let event_type = event.event_type;
        if let Err(e) = self.analytics.send(event) {
            warn!(
                error = %e,
                event_type = event_type.as_str(),
                "Failed to send analytics event"
            );
        }
    }
}
