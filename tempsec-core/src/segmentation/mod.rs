//! Session segmentation
//!
//! ## Overview
//!
//! The dryer runs in batches. While a batch runs the sensor reports every few
//! minutes; between batches it is silent. Segmentation recovers the batches
//! ("sessions") from the flat reading history by cutting wherever two
//! consecutive readings are further apart than the gap threshold.
//!
//! ```text
//! readings:  ●●●●●●●●            ●●●●●●●●●●●●●         ●●
//!            |--session 1--| gap |---session 2---| gap  too short, dropped
//! ```
//!
//! ## Rules
//!
//! - Input order does not matter; readings are stably sorted by timestamp.
//! - A gap strictly greater than `gap_threshold_hours` closes the current run.
//! - A run becomes a session only with at least `min_readings_per_session`
//!   readings.
//! - A session is `Completed` when it lasted at least
//!   `min_session_duration_minutes`, otherwise `Interrupted`.
//! - Output is most-recent-first, ready to render as a list.
//!
//! Sessions are derived views. They are recomputed from the readings on every
//! call and never stored or edited on their own.
//!
//! ## Usage
//!
//! ```rust
//! use tempsec_core::{Reading, Segmenter, SegmentationConfig};
//!
//! let readings: Vec<Reading> = ["08:00", "08:30", "09:00", "09:30"]
//!     .iter()
//!     .map(|t| Reading::parse(&format!("2024-05-01T{t}:00Z"), 37.0))
//!     .collect::<Result<_, _>>()?;
//!
//! let segmenter = Segmenter::new(SegmentationConfig::default())?;
//! let sessions = segmenter.segment(&readings);
//! assert_eq!(sessions.len(), 1);
//! assert_eq!(sessions[0].duration_minutes, 90);
//! # Ok::<(), tempsec_core::CoreError>(())
//! ```

mod algorithm;
mod config;
mod session;

pub use algorithm::{segment_sessions, Segmenter};
pub use config::SegmentationConfig;
pub use session::{Session, SessionStatus};
