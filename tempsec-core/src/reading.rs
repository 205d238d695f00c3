//! Readings and ingestion
//!
//! The sensor endpoint returns objects shaped `{ "data": "<timestamp>", "valor": <number> }`.
//! Those arrive as [`RawReading`] and become [`Reading`] only after the
//! timestamp parses and the value is finite. Everything past this module can
//! rely on readings being well formed.
//!
//! Accepted timestamp forms:
//!
//! - RFC 3339 with `Z` or an offset: `2024-05-01T08:00:00Z`, `2024-05-01T05:00:00-03:00`
//! - Naive ISO 8601, taken as UTC: `2024-05-01T08:00:00`, `2024-05-01T08:00:00.250`
//! - Space-separated, taken as UTC: `2024-05-01 08:00:00`

use alloc::{string::String, vec::Vec};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{CoreError, CoreResult},
    time::Timestamp,
    traits::Validatable,
};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A single sensor sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// When the sample was taken
    pub timestamp: Timestamp,
    /// Temperature in °C
    pub value: f64,
}

impl Reading {
    /// Build a reading, rejecting non-finite values
    pub fn new(timestamp: Timestamp, value: f64) -> CoreResult<Self> {
        if !value.is_valid() {
            return Err(CoreError::input("temperature must be a finite number"));
        }
        Ok(Self { timestamp, value })
    }

    /// Parse a timestamp string and build a reading
    pub fn parse(timestamp: &str, value: f64) -> CoreResult<Self> {
        Self::new(parse_timestamp(timestamp)?, value)
    }
}

/// Reading as delivered by the sensor endpoint
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawReading {
    /// Timestamp string
    pub data: String,
    /// Temperature in °C
    pub valor: f64,
}

impl RawReading {
    /// Wire representation of `reading`, timestamp in RFC 3339
    pub fn from_reading(reading: &Reading) -> Self {
        Self {
            data: reading.timestamp.to_rfc3339(),
            valor: reading.value,
        }
    }
}

impl TryFrom<&RawReading> for Reading {
    type Error = CoreError;

    fn try_from(raw: &RawReading) -> CoreResult<Self> {
        Reading::parse(&raw.data, raw.valor)
    }
}

impl TryFrom<RawReading> for Reading {
    type Error = CoreError;

    fn try_from(raw: RawReading) -> CoreResult<Self> {
        Reading::try_from(&raw)
    }
}

/// Parse one of the accepted timestamp forms into a UTC instant
pub fn parse_timestamp(input: &str) -> CoreResult<Timestamp> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::input("timestamp is empty"));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or(CoreError::input("timestamp is not a recognized date-time"))
}

/// A raw row that failed ingestion
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    /// Position of the row in the input batch
    pub index: usize,
    /// Why it was rejected
    pub error: CoreError,
}

/// Outcome of ingesting a batch of raw rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingested {
    /// Rows that became readings, in input order
    pub readings: Vec<Reading>,
    /// Rows that were dropped
    pub rejected: Vec<Rejected>,
}

impl Ingested {
    /// True when every row was accepted
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Convert a batch of raw rows, keeping the good ones
///
/// A bad row never aborts the batch; it is reported in `rejected` instead.
pub fn ingest<'a, I>(raws: I) -> Ingested
where
    I: IntoIterator<Item = &'a RawReading>,
{
    let mut out = Ingested::default();
    for (index, raw) in raws.into_iter().enumerate() {
        match Reading::try_from(raw) {
            Ok(reading) => out.readings.push(reading),
            Err(error) => {
                log_warn!("dropping reading #{} ({:?}): {}", index, raw.data, error);
                out.rejected.push(Rejected { index, error });
            }
        }
    }
    log_debug!(
        "ingested {} readings, rejected {}",
        out.readings.len(),
        out.rejected.len()
    );
    out
}
