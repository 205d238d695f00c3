//! In-memory reading source
//!
//! Holds rows in a vector and hands them out as if they came from the
//! endpoint. `latest()` walks forward one row per call, which makes polling
//! behavior easy to script in tests and demos.

use std::collections::VecDeque;

use tempsec_core::{RawReading, Reading};

use crate::{ConnectorError, ConnectorResult, ReadingSource, SourceStats};

/// Scripted reading source
#[derive(Debug, Default)]
pub struct MemorySource {
    history: Vec<RawReading>,
    pending: VecDeque<RawReading>,
    current: Option<RawReading>,
    failures: VecDeque<ConnectorError>,
    stats: SourceStats,
}

impl MemorySource {
    /// Empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Source whose rows will be released in order by `latest()`
    pub fn with_rows(rows: impl IntoIterator<Item = RawReading>) -> Self {
        let mut source = Self::new();
        for row in rows {
            source.push(row);
        }
        source
    }

    /// Source built from validated readings
    pub fn from_readings(readings: &[Reading]) -> Self {
        Self::with_rows(readings.iter().map(RawReading::from_reading))
    }

    /// Queue a row for a later `latest()` call
    pub fn push(&mut self, row: RawReading) {
        self.pending.push_back(row);
    }

    /// Make the next request fail with `error`
    pub fn fail_next(&mut self, error: ConnectorError) {
        self.failures.push_back(error);
    }

    /// Rows not yet released
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn take_failure(&mut self) -> ConnectorResult<()> {
        match self.failures.pop_front() {
            Some(error) => {
                self.stats.requests_failed += 1;
                self.stats.last_error = Some(error.to_string());
                Err(error)
            }
            None => {
                self.stats.requests_ok += 1;
                Ok(())
            }
        }
    }
}

impl ReadingSource for MemorySource {
    /// Release the next queued row; once the queue is empty keep returning
    /// the last one, as the real endpoint does between sensor reports
    fn latest(&mut self) -> ConnectorResult<Option<RawReading>> {
        self.take_failure()?;
        if let Some(row) = self.pending.pop_front() {
            self.history.push(row.clone());
            self.current = Some(row);
        }
        Ok(self.current.clone())
    }

    /// Every row released so far plus every row still queued
    fn history(&mut self) -> ConnectorResult<Vec<RawReading>> {
        self.take_failure()?;
        Ok(self
            .history
            .iter()
            .chain(self.pending.iter())
            .cloned()
            .collect())
    }

    fn stats(&self) -> SourceStats {
        self.stats.clone()
    }
}
