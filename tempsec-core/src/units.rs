//! Display units
//!
//! Readings are stored and compared in Celsius. The unit chosen by the
//! operator only changes how a value is shown.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit used to present temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayUnit {
    /// Degrees Celsius (storage unit)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "°C", alias = "C", alias = "celsius"))]
    Celsius,
    /// Degrees Fahrenheit
    #[cfg_attr(feature = "serde", serde(rename = "°F", alias = "F", alias = "fahrenheit"))]
    Fahrenheit,
}

impl DisplayUnit {
    /// Unit symbol as shown next to a value
    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayUnit::Celsius => "°C",
            DisplayUnit::Fahrenheit => "°F",
        }
    }

    /// Convert a Celsius value into this unit
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            DisplayUnit::Celsius => celsius,
            DisplayUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    /// Convert a value in this unit back to Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            DisplayUnit::Celsius => value,
            DisplayUnit::Fahrenheit => fahrenheit_to_celsius(value),
        }
    }

    /// Convert to this unit and round to one decimal for display
    pub fn display_value(&self, celsius: f64) -> f64 {
        round_one_decimal(self.from_celsius(celsius))
    }
}

/// °F = °C × 9/5 + 32
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// °C = (°F − 32) × 5/9
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Round half away from zero to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    libm::round(value * 10.0) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_conversions() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
    }

    #[test]
    fn celsius_is_identity() {
        assert_eq!(DisplayUnit::Celsius.from_celsius(37.25), 37.25);
        assert_eq!(DisplayUnit::Celsius.to_celsius(37.25), 37.25);
    }

    #[test]
    fn display_rounds_to_one_decimal() {
        assert_eq!(DisplayUnit::Celsius.display_value(37.26), 37.3);
        assert_eq!(DisplayUnit::Fahrenheit.display_value(37.0), 98.6);
        assert_eq!(round_one_decimal(-2.25), -2.3);
    }

    #[test]
    fn symbols() {
        assert_eq!(DisplayUnit::Celsius.symbol(), "°C");
        assert_eq!(DisplayUnit::Fahrenheit.symbol(), "°F");
        assert_eq!(DisplayUnit::default(), DisplayUnit::Celsius);
    }
}
