//! Constants for TempSec Core
//!
//! Centralized defaults used by the classifier, the segmenter and the alert
//! logic. Every default that an operator can override through
//! `MonitorSettings` starts from a value defined here.
//!
//! ## Organization
//!
//! - **Thresholds**: default classification bounds and display tokens
//! - **Sessions**: segmentation defaults (gap, minimum size, duration)
//! - **Time**: unit conversions, polling and debounce intervals
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Include the unit in every name (`_C`, `_MS`, `_HOURS`, `_MINUTES`)
//! 3. Note where a value came from when it is not obvious

/// Default classification bounds and presentation tokens.
pub mod thresholds;

/// Session segmentation defaults.
pub mod sessions;

/// Time-related constants for conversions and intervals.
pub mod time;

// Re-export commonly used constants for convenience
pub use thresholds::{
    DRYING_MIN_C, DRYING_IDEAL_MIN_C, DRYING_IDEAL_MAX_C, DRYING_MAX_C,
    AMBIENT_MIN_C, AMBIENT_IDEAL_MIN_C, AMBIENT_IDEAL_MAX_C, AMBIENT_MAX_C,
};

pub use sessions::{
    DEFAULT_GAP_THRESHOLD_HOURS, DEFAULT_MIN_READINGS_PER_SESSION,
    DEFAULT_MIN_SESSION_DURATION_MINUTES, LEGACY_MIN_SESSION_DURATION_MINUTES,
};

pub use time::{
    MS_PER_SECOND, MS_PER_MINUTE, MS_PER_HOUR,
    DEFAULT_READING_INTERVAL_MS, ALERT_DEBOUNCE_MS,
};
