//! Alert decisions
//!
//! The core decides *whether* a classified reading deserves a notification and
//! on which channel. Delivery belongs to the host.
//!
//! ```text
//! Reading + Classification
//!        │
//!        ▼
//!   AlertGate ── duplicate of the last notified reading? ──► ignored
//!        │
//!        ▼ new reading
//!   AlertPreferences ── kind disabled? ──► None
//!        │
//!        ▼
//!      Alert ──► host delivery, AlertLog
//! ```

use alloc::string::String;

use heapless::Deque;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    classifier::{Classification, Severity, Status},
    constants::time::{ALERT_DEBOUNCE_MS, ALERT_LOG_CAPACITY},
    reading::Reading,
    time::Timestamp,
};

/// What an alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AlertKind {
    /// High or CriticalHigh reading
    HighTemperature,
    /// Low or CriticalLow reading
    LowTemperature,
    /// Reading back in the ideal band
    NormalTemperature,
}

impl AlertKind {
    /// Kind matching a status tier
    pub fn from_status(status: Status) -> Self {
        match status {
            Status::CriticalHigh | Status::High => AlertKind::HighTemperature,
            Status::CriticalLow | Status::Low => AlertKind::LowTemperature,
            Status::Ideal => AlertKind::NormalTemperature,
        }
    }

    /// Notification title
    pub fn title(&self) -> &'static str {
        match self {
            AlertKind::HighTemperature => "High temperature",
            AlertKind::LowTemperature => "Low temperature",
            AlertKind::NormalTemperature => "Temperature normal",
        }
    }
}

impl From<Status> for AlertKind {
    fn from(status: Status) -> Self {
        Self::from_status(status)
    }
}

/// Delivery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlertChannel {
    /// `critical-alerts`
    CriticalAlerts,
    /// `temperature-alerts`
    TemperatureAlerts,
}

impl AlertChannel {
    /// Channel for a severity
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => AlertChannel::CriticalAlerts,
            Severity::Warning | Severity::Normal => AlertChannel::TemperatureAlerts,
        }
    }

    /// Channel identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertChannel::CriticalAlerts => "critical-alerts",
            AlertChannel::TemperatureAlerts => "temperature-alerts",
        }
    }
}

/// Which alerts the operator wants and how they should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AlertPreferences {
    /// Alert on High and CriticalHigh
    pub high_temp_alert: bool,
    /// Alert on Low and CriticalLow
    pub low_temp_alert: bool,
    /// Alert when the temperature is back in the ideal band
    pub normal_temp_alert: bool,
    /// Play a sound
    pub sound: bool,
    /// Vibrate
    pub vibration: bool,
    /// Show a popup
    pub popup: bool,
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            high_temp_alert: true,
            low_temp_alert: true,
            normal_temp_alert: false,
            sound: true,
            vibration: true,
            popup: true,
        }
    }
}

impl AlertPreferences {
    /// Everything off
    pub fn muted() -> Self {
        Self {
            high_temp_alert: false,
            low_temp_alert: false,
            normal_temp_alert: false,
            sound: false,
            vibration: false,
            popup: false,
        }
    }

    /// True when alerts of `kind` are enabled
    pub fn allows(&self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::HighTemperature => self.high_temp_alert,
            AlertKind::LowTemperature => self.low_temp_alert,
            AlertKind::NormalTemperature => self.normal_temp_alert,
        }
    }
}

/// An alert ready to hand to the notification collaborator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Alert {
    /// What the alert is about
    pub kind: AlertKind,
    /// Where to deliver it
    pub channel: AlertChannel,
    /// Reading that triggered the alert
    pub reading: Reading,
    /// Classification of `reading`
    pub classification: Classification,
    /// Notification title
    pub title: String,
    /// Notification body
    pub message: String,
}

impl Alert {
    /// Build the alert for a classified reading, ignoring preferences
    pub fn new(reading: Reading, classification: Classification) -> Self {
        let kind = AlertKind::from_status(classification.status);
        Self {
            kind,
            channel: AlertChannel::for_severity(classification.severity),
            reading,
            classification,
            title: kind.title().into(),
            message: classification.message(),
        }
    }

    /// When the triggering reading was taken
    pub fn timestamp(&self) -> Timestamp {
        self.reading.timestamp
    }

    /// True when delivered on the critical channel
    pub fn is_critical(&self) -> bool {
        self.channel == AlertChannel::CriticalAlerts
    }
}

/// Decides which readings produce alerts
///
/// A reading counts as new when no reading has been seen yet or its timestamp
/// is more than the debounce window after the last new one. Repeated
/// deliveries of the same sample are ignored.
#[derive(Debug, Clone)]
pub struct AlertGate {
    preferences: AlertPreferences,
    debounce_ms: i64,
    last_seen: Option<Timestamp>,
}

impl Default for AlertGate {
    fn default() -> Self {
        Self::new(AlertPreferences::default())
    }
}

impl AlertGate {
    /// Gate with the default debounce window
    pub fn new(preferences: AlertPreferences) -> Self {
        Self {
            preferences,
            debounce_ms: ALERT_DEBOUNCE_MS,
            last_seen: None,
        }
    }

    /// Override the debounce window
    pub fn with_debounce_ms(mut self, debounce_ms: i64) -> Self {
        self.debounce_ms = debounce_ms.max(0);
        self
    }

    /// Preferences in use
    pub fn preferences(&self) -> &AlertPreferences {
        &self.preferences
    }

    /// Replace the preferences; the debounce state is kept
    pub fn set_preferences(&mut self, preferences: AlertPreferences) {
        self.preferences = preferences;
    }

    /// Timestamp of the last new reading
    pub fn last_seen(&self) -> Option<Timestamp> {
        self.last_seen
    }

    /// True when `timestamp` would count as a new reading
    pub fn is_new(&self, timestamp: Timestamp) -> bool {
        match self.last_seen {
            None => true,
            Some(last) => (timestamp - last).num_milliseconds() > self.debounce_ms,
        }
    }

    /// Feed one classified reading, returning the alert to deliver, if any
    pub fn observe(&mut self, reading: &Reading, classification: &Classification) -> Option<Alert> {
        if !self.is_new(reading.timestamp) {
            log_debug!("alert gate: reading at {} already seen", reading.timestamp);
            return None;
        }
        self.last_seen = Some(reading.timestamp);

        let kind = AlertKind::from_status(classification.status);
        if !self.preferences.allows(kind) {
            return None;
        }
        Some(Alert::new(*reading, *classification))
    }

    /// Forget the last seen reading
    pub fn reset(&mut self) {
        self.last_seen = None;
    }
}

/// An alert in the log with its read flag
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LoggedAlert {
    /// The alert
    pub alert: Alert,
    /// Whether the operator has seen it
    pub read: bool,
}

/// Bounded history of alerts, most recent first
///
/// Holds at most `ALERT_LOG_CAPACITY` entries; pushing onto a full log drops
/// the oldest one.
#[derive(Debug, Clone)]
pub struct AlertLog {
    entries: Deque<LoggedAlert, ALERT_LOG_CAPACITY>,
}

impl Default for AlertLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertLog {
    /// Empty log
    pub fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }

    /// Record `alert` as unread
    pub fn push(&mut self, alert: Alert) {
        if self.entries.is_full() {
            self.entries.pop_back();
        }
        let entry = LoggedAlert { alert, read: false };
        if self.entries.push_front(entry).is_err() {
            log_warn!("alert log rejected an entry");
        }
    }

    /// Entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &LoggedAlert> {
        self.entries.iter()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&LoggedAlert> {
        self.entries.front()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the log holds nothing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries not yet marked read
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.read).count()
    }

    /// Mark the entry at `index` (0 = most recent) read; false when out of range
    pub fn mark_read(&mut self, index: usize) -> bool {
        match self.entries.iter_mut().nth(index) {
            Some(entry) => {
                entry.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every entry read
    pub fn mark_all_read(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.read = true;
        }
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
