//! Core traits
//!
//! Small on purpose: one trait for values that can be checked for basic
//! numeric sanity, one for configuration that must be checked before use.

use crate::errors::CoreResult;

/// Values that can be checked for numeric sanity
pub trait Validatable {
    /// False for NaN and infinities
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Configuration that must be validated before it is applied
///
/// Implementations return `CoreError::InvalidConfig` naming the first rule
/// that is broken. They never repair the configuration.
pub trait Validate {
    /// Check every rule of this configuration
    fn validate(&self) -> CoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(22.5f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
    }
}
