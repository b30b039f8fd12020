//! HTTP server initialization and runtime setup.
//!
//! Wires the store, key generator and analytics pipeline, spawns the
//! background tasks and runs the Axum server until shutdown.

use crate::config::Config;
use crate::domain::analytics_worker::run_analytics_worker;
use crate::domain::id_generator::IdGenerator;
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::analytics::ChannelAnalyticsSink;
use crate::infrastructure::keygen::Base62KeyGenerator;
use crate::infrastructure::persistence::MemoryShortUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// How long shutdown waits for queued analytics events to drain.
const ANALYTICS_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory short URL store
/// - Key generator with a pre-filled buffer
/// - Analytics queue and its background worker
/// - Periodic key buffer refill
/// - Axum HTTP server
///
/// On Ctrl-C or SIGTERM the server stops accepting connections, the refill
/// task is cancelled and pending analytics events are drained.
///
/// # Errors
///
/// Returns an error if:
/// - The key generator cannot be seeded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn ShortUrlRepository> = Arc::new(MemoryShortUrlRepository::new());

    let key_generator: Arc<dyn IdGenerator> =
        Arc::new(Base62KeyGenerator::new().context("Failed to seed key generator")?);
    key_generator
        .refill_buffer()
        .context("Failed to pre-fill key buffer")?;
    tracing::info!(buffered = key_generator.buffered(), "Key generator ready");

    let (analytics, analytics_rx) = ChannelAnalyticsSink::channel(config.analytics_queue_capacity);
    let worker = tokio::spawn(run_analytics_worker(analytics_rx));
    tracing::info!("Analytics worker started");

    let refill = spawn_key_refill(
        key_generator.clone(),
        Duration::from_secs(config.id_refill_interval_secs),
    );

    let state = AppState::new(repository, key_generator, analytics, config.base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    refill.abort();

    match tokio::time::timeout(ANALYTICS_DRAIN_TIMEOUT, worker).await {
        Ok(Ok(processed)) => tracing::info!(processed, "Analytics drained"),
        Ok(Err(e)) => tracing::warn!(error = %e, "Analytics worker failed"),
        Err(_) => tracing::warn!("Analytics drain timed out"),
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Spawns a task that tops up the key buffer every `period`.
///
/// The first refill runs immediately. Refill failures are logged and retried
/// on the next tick.
pub fn spawn_key_refill(key_generator: Arc<dyn IdGenerator>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = key_generator.refill_buffer() {
                tracing::warn!(error = %e, "Key buffer refill failed");
            }
        }
    })
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::keygen::{LOW_WATER_MARK, REFILL_BATCH};

    #[tokio::test(start_paused = true)]
    async fn test_key_refill_tops_up_buffer() {
        let key_generator: Arc<dyn IdGenerator> = Arc::new(Base62KeyGenerator::new().unwrap());
        assert_eq!(key_generator.buffered(), 0);

        let handle = spawn_key_refill(key_generator.clone(), Duration::from_secs(5));
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(key_generator.buffered(), REFILL_BATCH);

        // Drain below the low-water mark, then wait for the next tick.
        let drain = REFILL_BATCH - LOW_WATER_MARK + 1;
        for _ in 0..drain {
            key_generator.generate_one().unwrap();
        }
        assert!(key_generator.buffered() < LOW_WATER_MARK);

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(key_generator.buffered(), LOW_WATER_MARK - 1 + REFILL_BATCH);

        handle.abort();
    }
}
