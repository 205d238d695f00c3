//! Integration tests for ingestion, classification and alert decisions
//!
//! Runs raw endpoint rows through the same path the monitor uses:
//! ingest → classify → alert gate → alert log.

mod common;

use tempsec_core::{
    ingest, AlertChannel, AlertKind, AlertLog, DisplayUnit, MonitorSettings, RawReading, Status,
    ThresholdConfig,
};

fn raw(data: &str, valor: f64) -> RawReading {
    RawReading {
        data: data.to_string(),
        valor,
    }
}

#[test]
fn test_ambient_bounds_scenario() {
    let mut settings = MonitorSettings::default();
    settings.set_thresholds(ThresholdConfig::ambient()).unwrap();
    let classifier = settings.classifier().unwrap();

    let expected = [
        (10.0, Status::CriticalLow),
        (29.9, Status::High),
        (22.0, Status::Ideal),
        (30.0, Status::CriticalHigh),
    ];
    for (value, status) in expected {
        assert_eq!(classifier.status(value).unwrap(), status, "value {value}");
    }
}

#[test]
fn test_fahrenheit_display_keeps_tier() {
    let classifier = MonitorSettings::default().classifier().unwrap();

    let c = classifier.classify(40.0, DisplayUnit::Celsius).unwrap();
    let f = classifier.classify(40.0, DisplayUnit::Fahrenheit).unwrap();
    assert_eq!(c.status, Status::Ideal);
    assert_eq!(f.status, Status::Ideal);
    assert_eq!(f.display_value, 104.0);
    assert_eq!(f.message(), "Temperature within the ideal range: 104.0°F");
}

#[test]
fn test_endpoint_rows_to_alerts() {
    let rows = vec![
        raw("2024-05-01T08:00:00Z", 37.0),
        raw("2024-05-01T08:00:03Z", 46.0),
        raw("garbage", 46.0),
        raw("2024-05-01T08:05:00Z", 46.0),
        raw("2024-05-01 08:10:00", 12.0),
        raw("2024-05-01T08:15:00", 38.0),
    ];
    let ingested = ingest(&rows);
    assert_eq!(ingested.readings.len(), 5);
    assert_eq!(ingested.rejected.len(), 1);
    assert_eq!(ingested.rejected[0].index, 2);

    let settings = MonitorSettings::default();
    let classifier = settings.classifier().unwrap();
    let mut gate = settings.alert_gate();
    let mut log = AlertLog::new();

    for reading in &ingested.readings {
        let classification = classifier.classify(reading.value, settings.unit()).unwrap();
        if let Some(alert) = gate.observe(reading, &classification) {
            log.push(alert);
        }
    }

    // 08:00 ideal (normal alerts off), 08:00:03 debounced, 08:05 critical high,
    // 08:10 critical low, 08:15 ideal
    assert_eq!(log.len(), 2);
    let kinds: Vec<_> = log.iter().map(|e| e.alert.kind).collect();
    assert_eq!(kinds, vec![AlertKind::LowTemperature, AlertKind::HighTemperature]);
    assert!(log.iter().all(|e| e.alert.channel == AlertChannel::CriticalAlerts));
    assert_eq!(log.unread_count(), 2);
}

#[test]
fn test_warning_alerts_use_temperature_channel() {
    let settings = MonitorSettings::default();
    let classifier = settings.classifier().unwrap();
    let mut gate = settings.alert_gate();

    let reading = common::reading(9, 0, 42.0);
    let classification = classifier.classify(reading.value, DisplayUnit::Celsius).unwrap();
    let alert = gate.observe(&reading, &classification).unwrap();

    assert_eq!(classification.status, Status::High);
    assert_eq!(alert.channel, AlertChannel::TemperatureAlerts);
    assert_eq!(alert.channel.as_str(), "temperature-alerts");
}
