//! Benchmarks for segmentation and classification
//!
//! Run with: cargo bench --package tempsec-core

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempsec_core::{segment_sessions, Classifier, DisplayUnit, Reading, SegmentationConfig};

/// A history of `days` days with two drying batches per day, one reading every 5 minutes
fn history(days: i64) -> Vec<Reading> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut readings = Vec::new();
    for day in 0..days {
        for batch_start in [6 * 60, 15 * 60] {
            for i in 0..48 {
                let at = start + Duration::days(day) + Duration::minutes(batch_start + i * 5);
                let value = 36.0 + ((day + i) % 9) as f64 * 0.5;
                readings.push(Reading::new(at, value).unwrap());
            }
        }
    }
    readings
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Segmentation");
    let config = SegmentationConfig::default();

    for &days in &[1i64, 30, 365] {
        let sorted = history(days);
        let mut reversed = sorted.clone();
        reversed.reverse();

        group.throughput(Throughput::Elements(sorted.len() as u64));
        group.bench_with_input(BenchmarkId::new("sorted", days), &sorted, |b, readings| {
            b.iter(|| segment_sessions(black_box(readings), &config))
        });
        group.bench_with_input(BenchmarkId::new("reversed", days), &reversed, |b, readings| {
            b.iter(|| segment_sessions(black_box(readings), &config))
        });
    }

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let classifier = Classifier::drying();
    let values: Vec<f64> = (0..1_000).map(|i| 10.0 + (i % 400) as f64 * 0.1).collect();

    c.bench_function("classify_1000", |b| {
        b.iter(|| {
            for value in &values {
                black_box(classifier.classify(black_box(*value), DisplayUnit::Fahrenheit).ok());
            }
        })
    });
}

criterion_group!(benches, bench_segmentation, bench_classification);
criterion_main!(benches);
