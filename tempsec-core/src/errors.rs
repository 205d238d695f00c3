//! Error Types for Classification and Segmentation
//!
//! ## Design
//!
//! The core has exactly two ways to fail, both raised at the boundary where
//! data or configuration enters:
//!
//! - `InvalidInput`: a reading is unusable (non-finite value, unparseable
//!   timestamp). Raised at ingestion, never deep inside aggregation. Callers
//!   drop or flag the offending reading instead of aborting the whole batch.
//! - `InvalidConfig`: bounds or segmentation parameters break their ordering
//!   rules. Raised when configuration is applied, before it is ever used. Bad
//!   bounds are never clamped or reordered.
//!
//! Empty or tiny inputs are not errors; segmentation simply yields nothing.
//!
//! Errors carry `&'static str` reasons only, so they stay `Copy` and need no
//! allocation, which keeps them usable on `no_std` targets.
//!
//! ```rust
//! use tempsec_core::{CoreError, ThresholdConfig};
//!
//! match ThresholdConfig::new(30.0, 20.0, 25.0, 10.0) {
//!     Err(CoreError::InvalidConfig { reason }) => {
//!         // Surface `reason` to the operator and keep the previous config
//!         assert!(!reason.is_empty());
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A reading (or a value handed to the classifier) is unusable
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: &'static str,
    },

    /// Configuration violates its ordering or range rules
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Which rule was broken
        reason: &'static str,
    },
}

impl CoreError {
    pub(crate) const fn input(reason: &'static str) -> Self {
        Self::InvalidInput { reason }
    }

    pub(crate) const fn config(reason: &'static str) -> Self {
        Self::InvalidConfig { reason }
    }
}
