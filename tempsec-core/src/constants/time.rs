//! Time-Related Constants
//!
//! Conversion factors and the intervals used for polling and alert debounce.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = MS_PER_MINUTE * MINUTES_PER_HOUR;

/// Nanoseconds per hour.
pub const NS_PER_HOUR: i64 = MS_PER_HOUR * 1_000_000;

// ===== POLLING =====

/// Default interval between polls of the sensor endpoint (milliseconds).
///
/// The sensor itself reports less often than this, so most polls return the
/// reading already seen and are discarded as unchanged.
pub const DEFAULT_READING_INTERVAL_MS: u64 = 30_000;

/// Shortest polling interval an operator may configure (milliseconds).
pub const MIN_READING_INTERVAL_MS: u64 = 5_000;

// ===== ALERTS =====

/// Minimum spacing between two notified readings (milliseconds).
///
/// A reading whose timestamp is not more than this after the last notified
/// reading is treated as a duplicate delivery of the same sample.
pub const ALERT_DEBOUNCE_MS: i64 = 5_000;

/// Number of alerts kept in the in-memory alert log.
pub const ALERT_LOG_CAPACITY: usize = 50;
