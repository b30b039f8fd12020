//! Analytics event model and sink contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Metadata, ShortUrl};

/// Lifecycle events reported to analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    UrlCreated,
    UrlAccessed,
    UrlDeactivated,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::UrlCreated => "url_created",
            EventType::UrlAccessed => "url_accessed",
            EventType::UrlDeactivated => "url_deactivated",
        }
    }
}

/// An analytics event describing something that happened to a short URL.
///
/// Serialized with camelCase keys; `userMetadata` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub event_type: EventType,
    pub short_url: String,
    pub long_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<Metadata>,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Creates an event for `short_url`, stamped with the current time.
    pub fn new(event_type: EventType, short_url: &ShortUrl, user_metadata: Option<Metadata>) -> Self {
        Self {
            event_type,
            short_url: short_url.short_url().to_string(),
            long_url: short_url.long_url().to_string(),
            user_metadata,
            timestamp: Utc::now(),
        }
    }
}

/// Errors a sink may report. Callers log and discard them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics queue is full")]
    QueueFull,

    #[error("analytics queue is closed")]
    QueueClosed,

    #[error("analytics delivery failed: {0}")]
    Delivery(String),
}

/// Fire-and-forget destination for analytics events.
///
/// # Implementations
///
/// - [`crate::infrastructure::analytics::ChannelAnalyticsSink`] - bounded queue
///   drained by [`crate::domain::analytics_worker::run_analytics_worker`]
/// - [`crate::infrastructure::analytics::LogAnalyticsSink`] - logs synchronously
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsSink: Send + Sync {
    /// Hands an event to the analytics pipeline without blocking.
    ///
    /// # Errors
    ///
    /// Returns an [`AnalyticsError`] if the event could not be accepted.
    fn send(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_event_type_strings() {
        assert_eq!(EventType::UrlCreated.as_str(), "url_created");
        assert_eq!(EventType::UrlAccessed.as_str(), "url_accessed");
        assert_eq!(EventType::UrlDeactivated.as_str(), "url_deactivated");
    }

    #[test]
    fn test_event_from_entity() {
        let url = ShortUrl::new("abc1234", "https://example.com", "http://t.com/abc1234", None, None)
            .unwrap();
        let event = AnalyticsEvent::new(EventType::UrlCreated, &url, None);

        assert_eq!(event.event_type, EventType::UrlCreated);
        assert_eq!(event.short_url, "http://t.com/abc1234");
        assert_eq!(event.long_url, "https://example.com");
        assert!(event.user_metadata.is_none());
    }

    #[test]
    fn test_event_json_shape() {
        let url = ShortUrl::new_custom("promo", "https://example.com", None, None).unwrap();
        let metadata = HashMap::from([("campaign".to_string(), json!("summer"))]);
        let event = AnalyticsEvent::new(EventType::UrlAccessed, &url, Some(metadata));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["eventType"], "url_accessed");
        assert_eq!(value["shortUrl"], "promo");
        assert_eq!(value["longUrl"], "https://example.com");
        assert_eq!(value["userMetadata"]["campaign"], "summer");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_event_json_omits_missing_metadata() {
        let url = ShortUrl::new_custom("promo", "https://example.com", None, None).unwrap();
        let event = AnalyticsEvent::new(EventType::UrlDeactivated, &url, None);

        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("userMetadata").is_none());
    }
}
