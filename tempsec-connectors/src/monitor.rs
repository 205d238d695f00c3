//! Live monitor
//!
//! One `poll_once` call is one refresh of the home screen:
//!
//! ```text
//! source.latest() ─► Reading ─► same timestamp as last poll? ─► Unchanged
//!                                   │ no
//!                                   ▼
//!                              Classifier ─► AlertGate ─► Fresh { .., alert }
//! ```
//!
//! The monitor itself never sleeps or spawns; call it from a timer, a
//! background job or [`crate::polling::spawn_polling`].

use log::{debug, info, warn};
use tempsec_core::{
    ingest, Alert, AlertGate, AlertLog, Classification, Classifier, DisplayUnit, MonitorSettings,
    Reading, Segmenter, Session, TimeSource, Timestamp, traits::Validate,
};

use crate::{ConnectorResult, ReadingSource};

/// Result of one poll
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The source has no reading yet
    NoReading,
    /// Same reading as the previous poll
    Unchanged,
    /// A reading not seen before
    Fresh {
        reading: Reading,
        classification: Classification,
        /// Alert to deliver, if the gate and preferences allow one
        alert: Option<Alert>,
    },
}

impl PollOutcome {
    /// True for `Fresh`
    pub fn is_fresh(&self) -> bool {
        matches!(self, PollOutcome::Fresh { .. })
    }
}

/// History fetched from the source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedHistory {
    /// Readings that passed ingestion, in source order
    pub readings: Vec<Reading>,
    /// Rows dropped as malformed
    pub rejected: usize,
}

/// Polls a source, classifies new readings and decides alerts
pub struct Monitor<S> {
    source: S,
    classifier: Classifier,
    segmenter: Segmenter,
    gate: AlertGate,
    alerts: AlertLog,
    unit: DisplayUnit,
    last_timestamp: Option<Timestamp>,
    last_fresh: Option<(Reading, Classification)>,
}

impl<S: ReadingSource> Monitor<S> {
    /// Build a monitor from validated settings
    pub fn new(source: S, settings: &MonitorSettings) -> ConnectorResult<Self> {
        settings.validate()?;
        Ok(Self {
            source,
            classifier: settings.classifier()?,
            segmenter: settings.segmenter()?,
            gate: settings.alert_gate(),
            alerts: AlertLog::new(),
            unit: settings.unit(),
            last_timestamp: None,
            last_fresh: None,
        })
    }

    /// Apply new settings; on error the current ones stay in place
    pub fn apply_settings(&mut self, settings: &MonitorSettings) -> ConnectorResult<()> {
        settings.validate()?;
        self.classifier = settings.classifier()?;
        self.segmenter = settings.segmenter()?;
        self.gate.set_preferences(*settings.alerts());
        self.unit = settings.unit();
        info!("monitor settings updated");
        Ok(())
    }

    /// Fetch the latest reading and process it if it is new
    pub fn poll_once(&mut self) -> ConnectorResult<PollOutcome> {
        let raw = match self.source.latest()? {
            Some(raw) => raw,
            None => return Ok(PollOutcome::NoReading),
        };

        let reading = Reading::try_from(&raw).map_err(|error| {
            warn!("latest reading {:?} rejected: {}", raw.data, error);
            error
        })?;

        if self.last_timestamp == Some(reading.timestamp) {
            debug!("reading at {} unchanged", reading.timestamp);
            return Ok(PollOutcome::Unchanged);
        }
        self.last_timestamp = Some(reading.timestamp);

        let classification = self.classifier.classify(reading.value, self.unit)?;
        let alert = self.gate.observe(&reading, &classification);
        if let Some(alert) = &alert {
            info!("{} alert: {}", alert.channel.as_str(), alert.message);
            self.alerts.push(alert.clone());
        }
        self.last_fresh = Some((reading, classification));

        Ok(PollOutcome::Fresh {
            reading,
            classification,
            alert,
        })
    }

    /// Fetch and ingest the full history, dropping malformed rows
    pub fn load_history(&mut self) -> ConnectorResult<LoadedHistory> {
        let rows = self.source.history()?;
        let ingested = ingest(&rows);
        if !ingested.is_clean() {
            warn!(
                "history: {} of {} rows rejected",
                ingested.rejected.len(),
                rows.len()
            );
        }
        Ok(LoadedHistory {
            rejected: ingested.rejected.len(),
            readings: ingested.readings,
        })
    }

    /// Sessions of the full history with the newest one marked live when
    /// it could still be running at `clock.now()`
    pub fn sessions(&mut self, clock: &dyn TimeSource) -> ConnectorResult<Vec<Session>> {
        let history = self.load_history()?;
        Ok(self.segmenter.segment_live(&history.readings, clock))
    }

    /// Last fresh reading and its classification
    pub fn current(&self) -> Option<&(Reading, Classification)> {
        self.last_fresh.as_ref()
    }

    /// Alerts produced so far, most recent first
    pub fn alerts(&self) -> &AlertLog {
        &self.alerts
    }

    /// Mutable access for read flags and clearing
    pub fn alerts_mut(&mut self) -> &mut AlertLog {
        &mut self.alerts
    }

    /// Display unit in use
    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    /// The underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
