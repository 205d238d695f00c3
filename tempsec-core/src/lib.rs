//! Core logic for TempSec
//!
//! Turns raw temperature readings from a drying/roasting sensor into the
//! information the monitoring application shows: a status tier for the latest
//! reading and the list of drying sessions found in the history.
//!
//! Everything in this crate is pure and synchronous. Nothing here performs I/O,
//! schedules work or keeps global state; the host decides when to call it.
//!
//! ```
//! use tempsec_core::{Classifier, DisplayUnit, Status, ThresholdConfig};
//!
//! let classifier = Classifier::new(ThresholdConfig::drying())?;
//! let result = classifier.classify(37.5, DisplayUnit::Celsius)?;
//! assert_eq!(result.status, Status::Ideal);
//! # Ok::<(), tempsec_core::CoreError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod alerts;
pub mod classifier;
pub mod constants;
pub mod errors;
pub mod reading;
pub mod segmentation;
pub mod settings;
pub mod stats;
pub mod thresholds;
pub mod time;
pub mod traits;
pub mod units;

// Public API
pub use alerts::{
    Alert, AlertChannel, AlertGate, AlertKind, AlertLog, AlertPreferences, LoggedAlert,
};
pub use classifier::{classify, Classification, Classifier, Severity, Status};
pub use errors::{CoreError, CoreResult};
pub use reading::{ingest, parse_timestamp, Ingested, RawReading, Reading, Rejected};
pub use segmentation::{segment_sessions, SegmentationConfig, Segmenter, Session, SessionStatus};
pub use settings::MonitorSettings;
pub use stats::{ReadingStats, SessionSummary};
pub use thresholds::ThresholdConfig;
pub use time::{FixedTime, TimeSource, Timestamp};
pub use units::DisplayUnit;

#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version, reported by connectors in their user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
