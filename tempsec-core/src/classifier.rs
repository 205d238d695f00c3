//! Temperature classifier
//!
//! Maps one Celsius reading onto a status tier using a `ThresholdConfig`.
//!
//! ## Decision Rule
//!
//! Evaluated in this order on the unconverted Celsius value:
//!
//! 1. `value <= min` → `CriticalLow`
//! 2. `value >= max` → `CriticalHigh`
//! 3. `idealMin <= value <= idealMax` → `Ideal`
//! 4. `value < idealMin` → `Low`
//! 5. otherwise → `High`
//!
//! Critical wins at the outer bounds and Ideal includes both of its bounds.
//! The display unit is applied after the decision, so switching to Fahrenheit
//! can never move a reading into a different tier.
//!
//! ## Usage
//!
//! ```rust
//! use tempsec_core::{Classifier, DisplayUnit, Status, ThresholdConfig};
//!
//! let classifier = Classifier::new(ThresholdConfig::ambient())?;
//!
//! let reading = classifier.classify(29.9, DisplayUnit::Fahrenheit)?;
//! assert_eq!(reading.status, Status::High);
//! assert_eq!(reading.display_value, 85.8);
//! assert_eq!(reading.message(), "Temperature above the ideal range: 85.8°F");
//! # Ok::<(), tempsec_core::CoreError>(())
//! ```

use alloc::{format, string::String};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::thresholds::{COLOR_CRITICAL, COLOR_IDEAL, COLOR_WARNING},
    errors::{CoreError, CoreResult},
    thresholds::ThresholdConfig,
    traits::{Validatable, Validate},
    units::DisplayUnit,
};

/// Classification tier of a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Status {
    /// At or below the lower safe bound
    CriticalLow,
    /// Between the lower safe bound and the ideal band
    Low,
    /// Inside the ideal band
    Ideal,
    /// Between the ideal band and the upper safe bound
    High,
    /// At or above the upper safe bound
    CriticalHigh,
}

/// How urgently a status needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Severity {
    /// Nothing to do
    Normal,
    /// Keep an eye on the process
    Warning,
    /// Act now
    Critical,
}

impl Status {
    /// All tiers from coldest to hottest
    pub const ALL: [Status; 5] = [
        Status::CriticalLow,
        Status::Low,
        Status::Ideal,
        Status::High,
        Status::CriticalHigh,
    ];

    /// Severity tier of this status
    pub fn severity(&self) -> Severity {
        match self {
            Status::CriticalLow | Status::CriticalHigh => Severity::Critical,
            Status::Low | Status::High => Severity::Warning,
            Status::Ideal => Severity::Normal,
        }
    }

    /// Color token for this status
    pub fn color(&self) -> &'static str {
        match self.severity() {
            Severity::Critical => COLOR_CRITICAL,
            Severity::Warning => COLOR_WARNING,
            Severity::Normal => COLOR_IDEAL,
        }
    }

    /// Short label
    pub fn label(&self) -> &'static str {
        match self {
            Status::CriticalLow => "Critical low",
            Status::Low => "Low",
            Status::Ideal => "Ideal",
            Status::High => "High",
            Status::CriticalHigh => "Critical high",
        }
    }

    /// Sentence used as the prefix of the display message
    pub fn description(&self) -> &'static str {
        match self {
            Status::CriticalLow => "Temperature at or below the safe minimum",
            Status::Low => "Temperature below the ideal range",
            Status::Ideal => "Temperature within the ideal range",
            Status::High => "Temperature above the ideal range",
            Status::CriticalHigh => "Temperature at or above the safe maximum",
        }
    }

    /// True for `CriticalLow` and `CriticalHigh`
    pub fn is_critical(&self) -> bool {
        self.severity() == Severity::Critical
    }
}

/// Result of classifying one reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Classification {
    /// Tier of the reading
    pub status: Status,
    /// Severity of the tier
    pub severity: Severity,
    /// Reading converted to `unit`, rounded to one decimal
    pub display_value: f64,
    /// Unit of `display_value`
    pub unit: DisplayUnit,
}

impl Classification {
    /// Color token for the status
    pub fn color(&self) -> &'static str {
        self.status.color()
    }

    /// Human readable message, e.g. `"Temperature within the ideal range: 37.5°C"`
    pub fn message(&self) -> String {
        format!(
            "{}: {:.1}{}",
            self.status.description(),
            self.display_value,
            self.unit.symbol()
        )
    }
}

/// Classifier bound to one validated threshold configuration
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ThresholdConfig,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            config: ThresholdConfig::default(),
        }
    }
}

impl Classifier {
    /// Validate `config` once and keep it for every classification
    pub fn new(config: ThresholdConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Classifier using the drying-chamber bounds
    pub fn drying() -> Self {
        Self {
            config: ThresholdConfig::drying(),
        }
    }

    /// Classifier using the ambient room bounds
    pub fn ambient() -> Self {
        Self {
            config: ThresholdConfig::ambient(),
        }
    }

    /// Bounds in use
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Tier of `value` (°C)
    pub fn status(&self, value: f64) -> CoreResult<Status> {
        if !value.is_valid() {
            return Err(CoreError::input("temperature must be a finite number"));
        }
        Ok(decide(value, &self.config))
    }

    /// Classify `value` (°C) and prepare it for display in `unit`
    pub fn classify(&self, value: f64, unit: DisplayUnit) -> CoreResult<Classification> {
        let status = self.status(value)?;
        Ok(Classification {
            status,
            severity: status.severity(),
            display_value: unit.display_value(value),
            unit,
        })
    }
}

/// Classify `value` (°C) against `config`, validating the config on every call
///
/// Prefer [`Classifier`] when the same bounds are used repeatedly.
pub fn classify(value: f64, config: &ThresholdConfig, unit: DisplayUnit) -> CoreResult<Classification> {
    Classifier::new(*config)?.classify(value, unit)
}

fn decide(value: f64, config: &ThresholdConfig) -> Status {
    if value <= config.min {
        Status::CriticalLow
    } else if value >= config.max {
        Status::CriticalHigh
    } else if value >= config.ideal_min && value <= config.ideal_max {
        Status::Ideal
    } else if value < config.ideal_min {
        Status::Low
    } else {
        Status::High
    }
}
