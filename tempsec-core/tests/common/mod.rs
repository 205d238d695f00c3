//! Common test utilities for integration tests
//!
//! - Reading builders anchored at a fixed day
//! - A drying-run generator that lays out sessions separated by gaps
//! - Pre-built scenarios with their expected sessions

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use tempsec_core::{Reading, Timestamp};

pub mod scenarios;

/// 2024-05-01T00:00:00Z
pub fn day_start() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
}

/// Instant at `hh:mm` on the test day
pub fn at(hh: u32, mm: u32) -> Timestamp {
    day_start() + Duration::minutes(i64::from(hh * 60 + mm))
}

/// Reading at `hh:mm` on the test day
pub fn reading(hh: u32, mm: u32, value: f64) -> Reading {
    Reading::new(at(hh, mm), value).unwrap()
}

/// One planned drying run
#[derive(Debug, Clone, Copy)]
pub struct RunPlan {
    /// Minutes after midnight of the first reading
    pub start_minute: i64,
    /// Number of readings
    pub readings: usize,
    /// Minutes between readings
    pub interval_minutes: i64,
    /// Temperature of the run, varied slightly per reading
    pub base_value: f64,
}

impl RunPlan {
    pub fn new(start_minute: i64, readings: usize, interval_minutes: i64) -> Self {
        Self {
            start_minute,
            readings,
            interval_minutes,
            base_value: 37.0,
        }
    }

    pub fn value(mut self, base_value: f64) -> Self {
        self.base_value = base_value;
        self
    }

    pub fn end_minute(&self) -> i64 {
        self.start_minute + self.interval_minutes * (self.readings.saturating_sub(1) as i64)
    }
}

/// Deterministic generator for drying histories
pub struct DryingGenerator {
    seed: u32,
}

impl DryingGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Small deterministic jitter in [-0.5, 0.5]
    fn jitter(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        f64::from((self.seed >> 16) % 11) / 10.0 - 0.5
    }

    /// Readings for every run, in chronological order
    pub fn generate(&mut self, runs: &[RunPlan]) -> Vec<Reading> {
        let mut readings = Vec::new();
        for run in runs {
            for i in 0..run.readings {
                let minute = run.start_minute + run.interval_minutes * i as i64;
                let value = run.base_value + self.jitter();
                readings.push(Reading::new(day_start() + Duration::minutes(minute), value).unwrap());
            }
        }
        readings
    }
}

/// Deterministic Fisher-Yates shuffle
pub fn shuffled(mut readings: Vec<Reading>, seed: u64) -> Vec<Reading> {
    let mut state = seed.max(1);
    for i in (1..readings.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = (state % (i as u64 + 1)) as usize;
        readings.swap(i, j);
    }
    readings
}
