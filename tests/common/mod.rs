#![allow(dead_code)]

use axum::extract::ConnectInfo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::Layer;

use short_url::application::services::ShortUrlService;
use short_url::domain::analytics::AnalyticsEvent;
use short_url::domain::id_generator::IdGenerator;
use short_url::domain::repositories::ShortUrlRepository;
use short_url::infrastructure::analytics::{ChannelAnalyticsSink, LogAnalyticsSink};
use short_url::infrastructure::keygen::Base62KeyGenerator;
use short_url::infrastructure::persistence::MemoryShortUrlRepository;
use short_url::state::AppState;

pub const TEST_BASE_URL: &str = "http://test.com";

/// Service over a fresh in-memory store and generator, logging analytics.
pub fn create_test_service() -> ShortUrlService {
    ShortUrlService::new(
        Arc::new(MemoryShortUrlRepository::new()),
        Arc::new(Base62KeyGenerator::new().unwrap()),
        Arc::new(LogAnalyticsSink::new()),
        TEST_BASE_URL,
    )
}

/// Service whose analytics events can be inspected through the receiver.
pub fn create_observed_service(
    capacity: usize,
) -> (ShortUrlService, mpsc::Receiver<AnalyticsEvent>) {
    let (sink, rx) = ChannelAnalyticsSink::channel(capacity);
    let service = ShortUrlService::new(
        Arc::new(MemoryShortUrlRepository::new()),
        Arc::new(Base62KeyGenerator::new().unwrap()),
        Arc::new(sink),
        TEST_BASE_URL,
    );
    (service, rx)
}

pub fn create_test_state() -> (AppState, mpsc::Receiver<AnalyticsEvent>) {
    let repository: Arc<dyn ShortUrlRepository> = Arc::new(MemoryShortUrlRepository::new());
    let key_generator: Arc<dyn IdGenerator> = Arc::new(Base62KeyGenerator::new().unwrap());
    let (analytics, rx) = ChannelAnalyticsSink::channel(100);

    let state = AppState::new(repository, key_generator, analytics, TEST_BASE_URL);

    (state, rx)
}

/// Drains every event currently queued.
pub fn drain_events(rx: &mut mpsc::Receiver<AnalyticsEvent>) -> Vec<AnalyticsEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Injects a fixed peer address so handlers extracting `ConnectInfo` work
/// without a real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
