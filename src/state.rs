//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::domain::id_generator::IdGenerator;
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::analytics::ChannelAnalyticsSink;

#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService>,
    pub repository: Arc<dyn ShortUrlRepository>,
    pub key_generator: Arc<dyn IdGenerator>,
    pub analytics: ChannelAnalyticsSink,
}

impl AppState {
    /// Wires the lifecycle service from its collaborators.
    ///
    /// The store and generator handles are kept alongside the service for
    /// health reporting.
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        key_generator: Arc<dyn IdGenerator>,
        analytics: ChannelAnalyticsSink,
        base_url: impl Into<String>,
    ) -> Self {
        let short_url_service = Arc::new(ShortUrlService::new(
            repository.clone(),
            key_generator.clone(),
            Arc::new(analytics.clone()),
            base_url,
        ));

        Self {
            short_url_service,
            repository,
            key_generator,
            analytics,
        }
    }
}
