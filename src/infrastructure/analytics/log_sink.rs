//! Logging analytics sink.

use tracing::info;

use crate::domain::analytics::{AnalyticsError, AnalyticsEvent, AnalyticsSink};

/// Writes each event to the log immediately. Never fails.
///
/// Useful for tools and tests that run without a background worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnalyticsSink;

impl LogAnalyticsSink {
    pub fn new() -> Self {
        Self
    }
}

impl AnalyticsSink for LogAnalyticsSink {
    fn send(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        info!(
            target: "analytics",
            event_type = event.event_type.as_str(),
            short_url = %event.short_url,
            long_url = %event.long_url,
            timestamp = %event.timestamp,
            "Analytics event"
        );
        Ok(())
    }
}
