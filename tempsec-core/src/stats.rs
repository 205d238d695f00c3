//! Summary statistics for readings and sessions
//!
//! These feed the summary cards of the host: today's min/max/average, the
//! latest value, and totals over the session history.

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    reading::Reading,
    segmentation::{Session, SessionStatus},
    time::Timestamp,
    units::round_one_decimal,
};

/// Aggregates over a set of readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReadingStats {
    /// Number of readings
    pub count: usize,
    /// Lowest value (°C)
    pub min: f64,
    /// Highest value (°C)
    pub max: f64,
    /// Mean, one decimal
    pub avg: f64,
    /// Earliest timestamp
    pub first_timestamp: Timestamp,
    /// Latest timestamp
    pub last_timestamp: Timestamp,
    /// Value of the reading with the latest timestamp
    pub latest: f64,
}

impl ReadingStats {
    /// Aggregate `readings` in any order; `None` when empty
    pub fn from_readings(readings: &[Reading]) -> Option<Self> {
        Self::accumulate(readings.iter())
    }

    /// Aggregate only the readings taken on `day` (UTC)
    pub fn for_day(readings: &[Reading], day: NaiveDate) -> Option<Self> {
        Self::accumulate(readings.iter().filter(|r| r.timestamp.date_naive() == day))
    }

    fn accumulate<'a>(mut readings: impl Iterator<Item = &'a Reading>) -> Option<Self> {
        let first = readings.next()?;
        let mut stats = Self {
            count: 1,
            min: first.value,
            max: first.value,
            avg: 0.0,
            first_timestamp: first.timestamp,
            last_timestamp: first.timestamp,
            latest: first.value,
        };
        let mut sum = first.value;

        for reading in readings {
            stats.count += 1;
            sum += reading.value;
            stats.min = stats.min.min(reading.value);
            stats.max = stats.max.max(reading.value);
            if reading.timestamp < stats.first_timestamp {
                stats.first_timestamp = reading.timestamp;
            }
            // ties keep the later one in input order
            if reading.timestamp >= stats.last_timestamp {
                stats.last_timestamp = reading.timestamp;
                stats.latest = reading.value;
            }
        }

        stats.avg = round_one_decimal(sum / stats.count as f64);
        Some(stats)
    }
}

/// Totals over a session list
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SessionSummary {
    /// Number of sessions
    pub total: usize,
    /// Sessions that reached the minimum duration
    pub completed: usize,
    /// Sessions that stopped early
    pub interrupted: usize,
    /// Sessions still running (live view only)
    pub ongoing: usize,
    /// Mean of the session averages, one decimal; 0.0 without sessions
    pub avg_value: f64,
    /// Sum of session durations
    pub total_duration_minutes: i64,
}

impl SessionSummary {
    /// Count and average `sessions`
    pub fn from_sessions(sessions: &[Session]) -> Self {
        let mut summary = Self::default();
        let mut sum = 0.0;

        for session in sessions {
            summary.total += 1;
            match session.status {
                SessionStatus::Completed => summary.completed += 1,
                SessionStatus::Interrupted => summary.interrupted += 1,
                SessionStatus::Ongoing => summary.ongoing += 1,
            }
            sum += session.avg_value;
            summary.total_duration_minutes += session.duration_minutes;
        }

        if summary.total > 0 {
            summary.avg_value = round_one_decimal(sum / summary.total as f64);
        }
        summary
    }

    /// Share of finished sessions that completed, in `[0, 1]`
    pub fn completion_rate(&self) -> f64 {
        let finished = self.completed + self.interrupted;
        if finished == 0 {
            0.0
        } else {
            self.completed as f64 / finished as f64
        }
    }
}
