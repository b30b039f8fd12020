//! Background consumer for queued analytics events.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::domain::analytics::AnalyticsEvent;

/// Drains the analytics queue until every sender is dropped.
///
/// Each event is emitted as a structured log record carrying its JSON body.
/// Returns the number of events processed.
pub async fn run_analytics_worker(mut rx: mpsc::Receiver<AnalyticsEvent>) -> u64 {
    let mut processed = 0;

    while let Some(event) = rx.recv().await {
        match serde_json::to_string(&event) {
            Ok(body) => info!(
                target: "analytics",
                event_type = event.event_type.as_str(),
                short_url = %event.short_url,
                %body,
                "Analytics event"
            ),
            Err(e) => warn!(
                target: "analytics",
                error = %e,
                event_type = event.event_type.as_str(),
                "Failed to serialize analytics event"
            ),
        }
        processed += 1;
    }

    info!("Analytics worker stopped after {} events", processed);
    processed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::EventType;
    use crate::domain::entities::ShortUrl;

    #[tokio::test]
    async fn test_worker_drains_queue_and_stops() {
        let (tx, rx) = mpsc::channel(8);
        let url = ShortUrl::new_custom("promo", "https://example.com", None, None).unwrap();

        tx.send(AnalyticsEvent::new(EventType::UrlCreated, &url, None))
            .await
            .unwrap();
        tx.send(AnalyticsEvent::new(EventType::UrlAccessed, &url, None))
            .await
            .unwrap();
        drop(tx);

        assert_eq!(run_analytics_worker(rx).await, 2);
    }

    #[tokio::test]
    async fn test_worker_with_no_events() {
        let (tx, rx) = mpsc::channel::<AnalyticsEvent>(1);
        drop(tx);

        assert_eq!(run_analytics_worker(rx).await, 0);
    }
}
