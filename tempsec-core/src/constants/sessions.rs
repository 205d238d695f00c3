//! Session Segmentation Defaults
//!
//! The sensor posts a reading every few minutes while the dryer runs and
//! stays silent when it is off. A silence longer than the gap threshold ends
//! a session.

/// Maximum silence between two readings of the same session (hours).
///
/// Readings further apart than this belong to different sessions.
pub const DEFAULT_GAP_THRESHOLD_HOURS: f64 = 2.0;

/// Minimum number of readings for a run to count as a session.
///
/// Runs of three or fewer readings are sensor blips (power-on checks,
/// a manual test) rather than drying batches.
pub const DEFAULT_MIN_READINGS_PER_SESSION: usize = 4;

/// Minimum session duration for a Completed outcome (minutes).
///
/// Shorter sessions are reported as Interrupted.
pub const DEFAULT_MIN_SESSION_DURATION_MINUTES: i64 = 120;

/// Completed threshold used by older history views (minutes).
///
/// Kept so deployments that standardized on three-hour batches can keep
/// their reports comparable.
pub const LEGACY_MIN_SESSION_DURATION_MINUTES: i64 = 180;
