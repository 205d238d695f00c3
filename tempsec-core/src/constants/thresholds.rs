//! Classification Bounds and Display Tokens
//!
//! Two bound sets ship with the crate. The drying profile is what operators
//! start from in the settings screen; the ambient profile matches a room
//! sensor and is mostly useful for bench testing the hardware.
//!
//! All bounds are in °C. Ordering for every profile:
//! `MIN < IDEAL_MIN <= IDEAL_MAX < MAX`.

// ===== DRYING PROFILE =====

/// Lower safe bound for the drying chamber (°C).
///
/// At or below this value the batch is no longer drying and the reading is
/// reported as critical.
pub const DRYING_MIN_C: f64 = 15.0;

/// Start of the ideal drying band (°C).
pub const DRYING_IDEAL_MIN_C: f64 = 35.0;

/// End of the ideal drying band (°C).
pub const DRYING_IDEAL_MAX_C: f64 = 40.0;

/// Upper safe bound for the drying chamber (°C).
///
/// At or above this value the product risks scorching.
pub const DRYING_MAX_C: f64 = 45.0;

// ===== AMBIENT PROFILE =====

/// Lower safe bound for an ambient room sensor (°C).
pub const AMBIENT_MIN_C: f64 = 10.0;

/// Start of the comfortable ambient band (°C).
pub const AMBIENT_IDEAL_MIN_C: f64 = 20.0;

/// End of the comfortable ambient band (°C).
pub const AMBIENT_IDEAL_MAX_C: f64 = 25.0;

/// Upper safe bound for an ambient room sensor (°C).
pub const AMBIENT_MAX_C: f64 = 30.0;

// ===== COLOR TOKENS =====

/// Color token for critical readings (outside the safe bounds).
pub const COLOR_CRITICAL: &str = "#FF6B6B";

/// Color token for readings inside the safe bounds but outside the ideal band.
pub const COLOR_WARNING: &str = "#FFD93D";

/// Color token for readings inside the ideal band.
pub const COLOR_IDEAL: &str = "#4ECDC4";
