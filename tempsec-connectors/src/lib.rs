//! Reading sources and live monitoring for TempSec
//!
//! ## Overview
//!
//! The core crate is pure. This crate supplies the I/O around it:
//!
//! - **Sources** fetch raw `{ data, valor }` rows from wherever readings live.
//!   [`http::HttpReadingSource`] talks to the sensor REST endpoint;
//!   [`memory::MemorySource`] replays scripted rows for tests and demos.
//! - **[`monitor::Monitor`]** polls a source once, drops repeats of the reading
//!   it already saw, classifies new readings and asks the alert gate whether
//!   to notify.
//! - **[`polling::spawn_polling`]** drives a monitor on a tokio interval. The
//!   host starts it explicitly and owns the returned handle; nothing is
//!   registered in the background on its own.
//!
//! ## Endpoint
//!
//! | path | body |
//! |------|------|
//! | `GET /temperatura/ultima` | one row, or `null` before the first reading |
//! | `GET /temperatura` | array of rows |
//!
//! Rows look like `{ "data": "2024-05-01T08:00:00Z", "valor": 37.2 }`.
//!
//! ## Retry Logic
//!
//! Transport failures, 5xx and 429 responses are retried with exponential
//! backoff:
//! ```text
//! retry_delay = base * 2^attempt
//! ```
//! Any other status fails the request immediately.
//!
//! ## Example Usage
//!
//! ```no_run
//! use tempsec_connectors::{http::{HttpConfig, HttpReadingSource}, monitor::Monitor, PollOutcome};
//! use tempsec_core::MonitorSettings;
//!
//! let config = HttpConfig::new("http://sensor.local:5000").bearer_token("token");
//! let source = HttpReadingSource::new(config)?;
//! let mut monitor = Monitor::new(source, &MonitorSettings::default())?;
//!
//! if let PollOutcome::Fresh { classification, alert, .. } = monitor.poll_once()? {
//!     println!("{}", classification.message());
//!     if let Some(alert) = alert {
//!         println!("notify on {}: {}", alert.channel.as_str(), alert.title);
//!     }
//! }
//! # Ok::<(), tempsec_connectors::ConnectorError>(())
//! ```

#[cfg(feature = "http")]
pub mod http;

pub mod memory;
pub mod monitor;

#[cfg(feature = "std")]
pub mod polling;

// Re-export common types
pub use memory::MemorySource;
pub use monitor::{Monitor, PollOutcome};

#[cfg(feature = "http")]
pub use http::{AuthMethod, HttpConfig, HttpReadingSource};

#[cfg(feature = "std")]
pub use polling::{spawn_polling, PollingHandle};

use tempsec_core::{CoreError, RawReading};
use thiserror::Error;

/// Result type for connector operations
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Network or transport failure
    #[error("Request failed: {0}")]
    Request(String),

    /// Endpoint answered with a non-success status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Body could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid connector or monitor configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A row from the endpoint failed ingestion
    #[error("Ingest error: {0}")]
    Ingest(CoreError),

    /// Every retry failed
    #[error("Giving up after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: String },

    /// The polling driver or its channel has shut down
    #[error("Polling closed")]
    Closed,
}

impl From<CoreError> for ConnectorError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidConfig { reason } => ConnectorError::Config(reason.to_string()),
            CoreError::InvalidInput { .. } => ConnectorError::Ingest(error),
        }
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(error: serde_json::Error) -> Self {
        ConnectorError::Serialization(error.to_string())
    }
}

impl ConnectorError {
    /// True when a later attempt may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ConnectorError::Request(_) | ConnectorError::Exhausted { .. } => true,
            ConnectorError::ServerError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Anything that can hand out sensor rows
///
/// Implementations return rows exactly as delivered; validation happens in
/// the monitor through `tempsec_core::ingest`.
pub trait ReadingSource: Send {
    /// Most recent row, `None` when the sensor has not reported yet
    fn latest(&mut self) -> ConnectorResult<Option<RawReading>>;

    /// Every stored row, in whatever order the source keeps them
    fn history(&mut self) -> ConnectorResult<Vec<RawReading>>;

    /// Request counters
    fn stats(&self) -> SourceStats {
        SourceStats::default()
    }
}

/// Request statistics common to all sources
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SourceStats {
    /// Requests that returned a usable body
    pub requests_ok: u64,
    /// Requests that finally failed
    pub requests_failed: u64,
    /// Extra attempts spent on retries
    pub retries: u64,
    /// Last error message
    pub last_error: Option<String>,
}
