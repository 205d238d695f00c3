//! Threshold configuration
//!
//! Four bounds split the temperature axis into five bands:
//!
//! ```text
//!  CriticalLow |   Low   |  Ideal  |  High   | CriticalHigh
//! ------------min------idealMin--idealMax-----max------------
//! ```
//!
//! `min` and `max` are inclusive on the critical side; `idealMin` and
//! `idealMax` are inclusive on the ideal side. The ordering
//! `min < idealMin <= idealMax < max` is checked whenever a configuration is
//! built or applied. A configuration that breaks it is rejected, never
//! reordered.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::thresholds::*,
    errors::{CoreError, CoreResult},
    traits::{Validatable, Validate},
};

/// Operator-supplied classification bounds, all in °C
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ThresholdConfig {
    /// At or below this the reading is critical
    pub min: f64,
    /// Start of the ideal band (inclusive)
    pub ideal_min: f64,
    /// End of the ideal band (inclusive)
    pub ideal_max: f64,
    /// At or above this the reading is critical
    pub max: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::drying()
    }
}

impl ThresholdConfig {
    /// Build and validate a configuration
    pub fn new(min: f64, ideal_min: f64, ideal_max: f64, max: f64) -> CoreResult<Self> {
        let config = Self { min, ideal_min, ideal_max, max };
        config.validate()?;
        Ok(config)
    }

    /// Bounds for a drying chamber
    pub fn drying() -> Self {
        Self {
            min: DRYING_MIN_C,
            ideal_min: DRYING_IDEAL_MIN_C,
            ideal_max: DRYING_IDEAL_MAX_C,
            max: DRYING_MAX_C,
        }
    }

    /// Bounds for an ambient room sensor
    pub fn ambient() -> Self {
        Self {
            min: AMBIENT_MIN_C,
            ideal_min: AMBIENT_IDEAL_MIN_C,
            ideal_max: AMBIENT_IDEAL_MAX_C,
            max: AMBIENT_MAX_C,
        }
    }

    /// True when `value` lies in the ideal band
    pub fn is_ideal(&self, value: f64) -> bool {
        value >= self.ideal_min && value <= self.ideal_max
    }

    /// True when `value` is at or beyond either safe bound
    pub fn is_critical(&self, value: f64) -> bool {
        value <= self.min || value >= self.max
    }
}

impl Validate for ThresholdConfig {
    fn validate(&self) -> CoreResult<()> {
        if !(self.min.is_valid()
            && self.ideal_min.is_valid()
            && self.ideal_max.is_valid()
            && self.max.is_valid())
        {
            return Err(CoreError::config("threshold bounds must be finite numbers"));
        }
        if self.min >= self.ideal_min {
            return Err(CoreError::config("min must be below idealMin"));
        }
        if self.ideal_min > self.ideal_max {
            return Err(CoreError::config("idealMin must not exceed idealMax"));
        }
        if self.ideal_max >= self.max {
            return Err(CoreError::config("idealMax must be below max"));
        }
        Ok(())
    }
}
