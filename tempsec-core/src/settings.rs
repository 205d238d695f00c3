//! Operator settings
//!
//! `MonitorSettings` is the payload the host keeps in its configuration store.
//! Its serde shape is camelCase JSON:
//!
//! ```json
//! {
//!   "thresholds": { "min": 15, "idealMin": 35, "idealMax": 40, "max": 45 },
//!   "unit": "°C",
//!   "readingIntervalMs": 30000,
//!   "segmentation": { "gapThresholdHours": 2, "minReadingsPerSession": 4, "minSessionDurationMinutes": 120 },
//!   "alerts": { "highTempAlert": true, "lowTempAlert": true, "normalTempAlert": false,
//!               "sound": true, "vibration": true, "popup": true }
//! }
//! ```
//!
//! Setters validate before applying. A rejected update leaves the previous
//! value in place.

use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    alerts::{AlertGate, AlertPreferences},
    classifier::Classifier,
    constants::time::{DEFAULT_READING_INTERVAL_MS, MIN_READING_INTERVAL_MS},
    errors::{CoreError, CoreResult},
    segmentation::{SegmentationConfig, Segmenter},
    thresholds::ThresholdConfig,
    traits::Validate,
    units::DisplayUnit,
};

/// Everything an operator can configure
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct MonitorSettings {
    thresholds: ThresholdConfig,
    unit: DisplayUnit,
    reading_interval_ms: u64,
    segmentation: SegmentationConfig,
    alerts: AlertPreferences,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::default(),
            unit: DisplayUnit::default(),
            reading_interval_ms: DEFAULT_READING_INTERVAL_MS,
            segmentation: SegmentationConfig::default(),
            alerts: AlertPreferences::default(),
        }
    }
}

impl MonitorSettings {
    /// Classification bounds
    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Display unit
    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    /// Polling interval in milliseconds
    pub fn reading_interval_ms(&self) -> u64 {
        self.reading_interval_ms
    }

    /// Polling interval
    pub fn reading_interval(&self) -> Duration {
        Duration::from_millis(self.reading_interval_ms)
    }

    /// Segmentation parameters
    pub fn segmentation(&self) -> &SegmentationConfig {
        &self.segmentation
    }

    /// Alert preferences
    pub fn alerts(&self) -> &AlertPreferences {
        &self.alerts
    }

    /// Replace the bounds if they are valid
    pub fn set_thresholds(&mut self, thresholds: ThresholdConfig) -> CoreResult<()> {
        thresholds.validate()?;
        self.thresholds = thresholds;
        Ok(())
    }

    /// Restore the drying-chamber bounds
    pub fn reset_thresholds(&mut self) {
        self.thresholds = ThresholdConfig::default();
    }

    /// Change the display unit
    pub fn set_unit(&mut self, unit: DisplayUnit) {
        self.unit = unit;
    }

    /// Change the polling interval; shorter than the minimum is rejected
    pub fn set_reading_interval_ms(&mut self, interval_ms: u64) -> CoreResult<()> {
        check_interval(interval_ms)?;
        self.reading_interval_ms = interval_ms;
        Ok(())
    }

    /// Replace the segmentation parameters if they are valid
    pub fn set_segmentation(&mut self, segmentation: SegmentationConfig) -> CoreResult<()> {
        segmentation.validate()?;
        self.segmentation = segmentation;
        Ok(())
    }

    /// Replace the alert preferences
    pub fn set_alerts(&mut self, alerts: AlertPreferences) {
        self.alerts = alerts;
    }

    /// Classifier for the current bounds
    pub fn classifier(&self) -> CoreResult<Classifier> {
        Classifier::new(self.thresholds)
    }

    /// Segmenter for the current parameters
    pub fn segmenter(&self) -> CoreResult<Segmenter> {
        Segmenter::new(self.segmentation)
    }

    /// Alert gate for the current preferences
    pub fn alert_gate(&self) -> AlertGate {
        AlertGate::new(self.alerts)
    }
}

impl Validate for MonitorSettings {
    /// Loaded payloads bypass the setters, so check every part
    fn validate(&self) -> CoreResult<()> {
        self.thresholds.validate()?;
        check_interval(self.reading_interval_ms)?;
        self.segmentation.validate()
    }
}

fn check_interval(interval_ms: u64) -> CoreResult<()> {
    if interval_ms < MIN_READING_INTERVAL_MS {
        return Err(CoreError::config("reading interval is shorter than 5 seconds"));
    }
    Ok(())
}
