#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sessions::*,
    errors::{CoreError, CoreResult},
    traits::{Validatable, Validate},
};

/// Tunable segmentation thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SegmentationConfig {
    /// Silence longer than this (hours) splits two sessions
    pub gap_threshold_hours: f64,

    /// Runs with fewer readings are discarded
    pub min_readings_per_session: usize,

    /// Sessions at least this long (minutes) are Completed, shorter ones Interrupted
    pub min_session_duration_minutes: i64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            gap_threshold_hours: DEFAULT_GAP_THRESHOLD_HOURS,
            min_readings_per_session: DEFAULT_MIN_READINGS_PER_SESSION,
            min_session_duration_minutes: DEFAULT_MIN_SESSION_DURATION_MINUTES,
        }
    }
}

impl SegmentationConfig {
    /// Defaults with the three-hour Completed threshold of older reports
    pub fn legacy_three_hour() -> Self {
        Self {
            min_session_duration_minutes: LEGACY_MIN_SESSION_DURATION_MINUTES,
            ..Self::default()
        }
    }

    /// Set the gap threshold in hours
    pub fn gap_hours(mut self, hours: f64) -> Self {
        self.gap_threshold_hours = hours;
        self
    }

    /// Set the minimum number of readings per session
    pub fn min_readings(mut self, count: usize) -> Self {
        self.min_readings_per_session = count;
        self
    }

    /// Set the Completed threshold in minutes
    pub fn min_duration_minutes(mut self, minutes: i64) -> Self {
        self.min_session_duration_minutes = minutes;
        self
    }
}

impl Validate for SegmentationConfig {
    fn validate(&self) -> CoreResult<()> {
        if !self.gap_threshold_hours.is_valid() || self.gap_threshold_hours <= 0.0 {
            return Err(CoreError::config("gap threshold must be a positive number of hours"));
        }
        if self.min_readings_per_session == 0 {
            return Err(CoreError::config("a session needs at least one reading"));
        }
        if self.min_session_duration_minutes < 0 {
            return Err(CoreError::config("minimum session duration cannot be negative"));
        }
        Ok(())
    }
}
