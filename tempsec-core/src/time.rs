//! Time sources
//!
//! Readings carry wall-clock instants from the sensor. The only place the core
//! needs "now" is the live session view, which asks whether the newest
//! session could still be running. That question goes through `TimeSource`
//! so tests and replays can pin the clock.

use chrono::{DateTime, Utc};

use crate::constants::time::{MS_PER_HOUR, NS_PER_HOUR};

/// A UTC instant
pub type Timestamp = DateTime<Utc>;

/// Source of the current time
pub trait TimeSource {
    /// Current instant
    fn now(&self) -> Timestamp;
}

/// Wall clock (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Fixed time source for testing and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Pin the clock at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward by `ms` milliseconds
    pub fn advance_ms(&mut self, ms: i64) {
        self.timestamp += chrono::Duration::milliseconds(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Hours elapsed from `from` to `to`; negative when `to` is earlier
///
/// Keeps sub-millisecond precision, so a gap a fraction of a millisecond
/// over a threshold still compares as over it.
pub fn hours_between(from: Timestamp, to: Timestamp) -> f64 {
    let delta = to - from;
    match delta.num_nanoseconds() {
        Some(ns) => ns as f64 / NS_PER_HOUR as f64,
        // spans beyond ~292 years
        None => delta.num_milliseconds() as f64 / MS_PER_HOUR as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_time_advances() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut clock = FixedTime::new(start);
        assert_eq!(clock.now(), start);

        clock.advance_ms(90 * 60 * 1000);
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn hours_between_is_signed() {
        let a = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        assert_eq!(hours_between(a, b), 2.5);
        assert_eq!(hours_between(b, a), -2.5);
    }

    #[test]
    fn hours_between_keeps_sub_millisecond_overshoot() {
        let a = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let b = a + chrono::Duration::hours(2) + chrono::Duration::microseconds(500);
        assert!(hours_between(a, b) > 2.0);
        assert_eq!(hours_between(a, a + chrono::Duration::hours(2)), 2.0);
    }
}
