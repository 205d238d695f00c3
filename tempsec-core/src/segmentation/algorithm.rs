use alloc::vec::Vec;

use super::{SegmentationConfig, Session, SessionStatus};
use crate::{
    errors::CoreResult,
    reading::Reading,
    time::{hours_between, TimeSource},
    traits::Validate,
};

/// Split `readings` into sessions, most recent first
///
/// The input may be in any order and is not modified. `config` is used as
/// given; a `min_readings_per_session` of zero behaves like one. Use
/// [`Segmenter`] to have the config validated up front.
pub fn segment_sessions(readings: &[Reading], config: &SegmentationConfig) -> Vec<Session> {
    let min_len = config.min_readings_per_session.max(1);
    if readings.len() < min_len {
        return Vec::new();
    }

    let mut sorted = readings.to_vec();
    // stable: equal timestamps keep their input order
    sorted.sort_by_key(|r| r.timestamp);

    let mut sessions = Vec::new();
    let mut run_start = 0;
    for i in 1..=sorted.len() {
        let closes = match sorted.get(i) {
            Some(current) => {
                hours_between(sorted[i - 1].timestamp, current.timestamp) > config.gap_threshold_hours
            }
            None => true,
        };
        if !closes {
            continue;
        }

        let run = &sorted[run_start..i];
        if run.len() >= min_len {
            let id = sessions.len() as u32 + 1;
            if let Some(session) = Session::from_run(id, run, config.min_session_duration_minutes) {
                sessions.push(session);
            }
        } else {
            log_debug!("discarding run of {} readings", run.len());
        }
        run_start = i;
    }

    sessions.reverse();
    sessions
}

/// Segmenter bound to one validated configuration
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmentationConfig,
}

impl Segmenter {
    /// Validate `config` and build a segmenter
    pub fn new(config: SegmentationConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Closed-history view: every session is Completed or Interrupted
    pub fn segment(&self, readings: &[Reading]) -> Vec<Session> {
        segment_sessions(readings, &self.config)
    }

    /// Live view: the most recent session becomes `Ongoing` while its last
    /// reading is no older than the gap threshold
    pub fn segment_live(&self, readings: &[Reading], clock: &dyn TimeSource) -> Vec<Session> {
        let mut sessions = self.segment(readings);
        let now = clock.now();
        if let Some(latest) = sessions.first_mut() {
            let idle = hours_between(latest.end_time, now);
            if idle <= self.config.gap_threshold_hours {
                latest.status = SessionStatus::Ongoing;
            }
        }
        sessions
    }
}
