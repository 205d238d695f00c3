use chrono::Duration;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::time::MS_PER_MINUTE,
    reading::Reading,
    time::Timestamp,
    units::round_one_decimal,
};

/// Outcome of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SessionStatus {
    /// Ran for at least the minimum duration
    Completed,
    /// Stopped before the minimum duration
    Interrupted,
    /// Most recent session, still receiving readings (live view only)
    Ongoing,
}

impl SessionStatus {
    /// Lowercase name used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Completed => "completed",
            SessionStatus::Interrupted => "interrupted",
            SessionStatus::Ongoing => "ongoing",
        }
    }
}

/// A contiguous run of readings with no gap above the threshold
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Session {
    /// 1-based position in chronological order
    pub id: u32,
    /// Timestamp of the first reading
    pub start_time: Timestamp,
    /// Timestamp of the last reading
    pub end_time: Timestamp,
    /// Number of readings in the run
    pub reading_count: usize,
    /// Mean temperature (°C), one decimal
    pub avg_value: f64,
    /// Highest temperature (°C)
    pub max_value: f64,
    /// Lowest temperature (°C)
    pub min_value: f64,
    /// `end_time - start_time`, rounded to whole minutes
    pub duration_minutes: i64,
    /// Outcome
    pub status: SessionStatus,
}

impl Session {
    /// Aggregate a non-empty, time-sorted run
    pub(crate) fn from_run(id: u32, run: &[Reading], min_duration_minutes: i64) -> Option<Self> {
        let first = run.first()?;
        let last = run.last()?;

        let mut sum = 0.0;
        let mut max_value = f64::NEG_INFINITY;
        let mut min_value = f64::INFINITY;
        for reading in run {
            sum += reading.value;
            max_value = max_value.max(reading.value);
            min_value = min_value.min(reading.value);
        }

        let elapsed_ms = (last.timestamp - first.timestamp).num_milliseconds();
        let duration_minutes = libm::round(elapsed_ms as f64 / MS_PER_MINUTE as f64) as i64;

        let status = if duration_minutes >= min_duration_minutes {
            SessionStatus::Completed
        } else {
            SessionStatus::Interrupted
        };

        Some(Self {
            id,
            start_time: first.timestamp,
            end_time: last.timestamp,
            reading_count: run.len(),
            avg_value: round_one_decimal(sum / run.len() as f64),
            max_value,
            min_value,
            duration_minutes,
            status,
        })
    }

    /// Duration as a chrono span
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_minutes)
    }

    /// True when `at` falls inside the session
    pub fn contains(&self, at: Timestamp) -> bool {
        at >= self.start_time && at <= self.end_time
    }
}
