//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Prefix for generated short URLs (default: `http://localhost:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ANALYTICS_QUEUE_CAPACITY` - Analytics event buffer size (default: 10000, min: 100)
//! - `ID_REFILL_INTERVAL_SECS` - Key buffer refill period in seconds (default: 5)
//!
//! A `.env` file in the working directory is honored (loaded by `main.rs`).

use anyhow::Result;
use std::env;
use std::str::FromStr;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Scheme and host prepended to generated ids, e.g. `https://sho.rt`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub analytics_queue_capacity: usize,
    /// How often the background task tops up the identifier buffer.
    pub id_refill_interval_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to defaults. Variables that are set but
    /// cannot be parsed are reported as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is not a valid number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let analytics_queue_capacity = parse_var("ANALYTICS_QUEUE_CAPACITY", 10_000)?;
        let id_refill_interval_secs = parse_var("ID_REFILL_INTERVAL_SECS", 5)?;

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            analytics_queue_capacity,
            id_refill_interval_secs,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `analytics_queue_capacity` is outside `100..=1_000_000`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `base_url` is not an http(s) URL
    /// - `id_refill_interval_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.analytics_queue_capacity < 100 {
            anyhow::bail!(
                "ANALYTICS_QUEUE_CAPACITY must be at least 100, got {}",
                self.analytics_queue_capacity
            );
        }

        if self.analytics_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "ANALYTICS_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.analytics_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.id_refill_interval_secs == 0 {
            anyhow::bail!("ID_REFILL_INTERVAL_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Analytics queue capacity: {}", self.analytics_queue_capacity);
        tracing::info!("  Key refill interval: {}s", self.id_refill_interval_secs);
    }
}

/// Reads `name` and parses it, returning `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{name} must be a number, got '{raw}': {e}")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
