//! Queue-backed analytics sink.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::domain::analytics::{AnalyticsError, AnalyticsEvent, AnalyticsSink};

/// Pushes events into a bounded channel without waiting.
///
/// When the queue is full the event is rejected with
/// [`AnalyticsError::QueueFull`] rather than blocking the request.
#[derive(Debug, Clone)]
pub struct ChannelAnalyticsSink {
    sender: mpsc::Sender<AnalyticsEvent>,
}

impl ChannelAnalyticsSink {
    pub fn new(sender: mpsc::Sender<AnalyticsEvent>) -> Self {
        Self { sender }
    }

    /// Creates a sink and the receiver its worker should drain.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<AnalyticsEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Remaining free slots in the queue.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}

impl AnalyticsSink for ChannelAnalyticsSink {
    fn send(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.sender.try_send(event).map_err(|e| match e {
            TrySendError::Full(_) => AnalyticsError::QueueFull,
            TrySendError::Closed(_) => AnalyticsError::QueueClosed,
        })
    }
}
