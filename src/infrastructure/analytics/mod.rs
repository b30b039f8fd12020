//! Analytics sinks.
//!
//! Provides two [`AnalyticsSink`](crate::domain::analytics::AnalyticsSink) implementations:
//! - [`ChannelAnalyticsSink`] - Bounded queue drained by a background worker
//! - [`LogAnalyticsSink`] - Logs each event synchronously

mod channel_sink;
mod log_sink;

pub use channel_sink::ChannelAnalyticsSink;
pub use log_sink::LogAnalyticsSink;
