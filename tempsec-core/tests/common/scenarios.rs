//! Pre-built drying histories with their expected sessions

use tempsec_core::{Reading, SessionStatus};

use super::{reading, DryingGenerator, RunPlan};

/// Expected shape of one session
#[derive(Debug, Clone, Copy)]
pub struct ExpectedSession {
    pub start_minute: i64,
    pub end_minute: i64,
    pub reading_count: usize,
    pub status: SessionStatus,
}

/// A history and the sessions it should produce, most recent first
pub struct Scenario {
    pub name: &'static str,
    pub readings: Vec<Reading>,
    pub expected: Vec<ExpectedSession>,
}

pub struct Scenarios;

impl Scenarios {
    /// 08:00-09:30 every 30 minutes
    pub fn single_morning_run() -> Vec<Reading> {
        vec![
            reading(8, 0, 36.0),
            reading(8, 30, 37.0),
            reading(9, 0, 38.0),
            reading(9, 30, 37.0),
        ]
    }

    /// Morning run, gap, afternoon run
    pub fn morning_and_afternoon() -> Vec<Reading> {
        let mut readings = Self::single_morning_run();
        readings.extend([
            reading(14, 0, 39.0),
            reading(14, 30, 40.0),
            reading(15, 0, 41.0),
            reading(15, 30, 40.0),
        ]);
        readings
    }

    /// A full day: one long completed batch, a stray blip, a short batch
    pub fn working_day() -> Scenario {
        let runs = [
            RunPlan::new(6 * 60, 49, 5).value(38.0),
            RunPlan::new(12 * 60 + 30, 2, 10).value(25.0),
            RunPlan::new(16 * 60, 10, 6).value(41.0),
        ];
        let readings = DryingGenerator::new(7).generate(&runs);

        Scenario {
            name: "working_day",
            readings,
            expected: vec![
                ExpectedSession {
                    start_minute: runs[2].start_minute,
                    end_minute: runs[2].end_minute(),
                    reading_count: 10,
                    status: SessionStatus::Interrupted,
                },
                ExpectedSession {
                    start_minute: runs[0].start_minute,
                    end_minute: runs[0].end_minute(),
                    reading_count: 49,
                    status: SessionStatus::Completed,
                },
            ],
        }
    }

    /// Readings exactly two hours apart stay together
    pub fn sparse_but_connected() -> Scenario {
        let runs = [RunPlan::new(0, 6, 120)];
        Scenario {
            name: "sparse_but_connected",
            readings: DryingGenerator::new(3).generate(&runs),
            expected: vec![ExpectedSession {
                start_minute: 0,
                end_minute: 600,
                reading_count: 6,
                status: SessionStatus::Completed,
            }],
        }
    }

    /// Two minutes over the gap splits a steady run in two
    pub fn just_over_the_gap() -> Scenario {
        let runs = [RunPlan::new(0, 4, 30), RunPlan::new(90 + 122, 4, 30)];
        Scenario {
            name: "just_over_the_gap",
            readings: DryingGenerator::new(11).generate(&runs),
            expected: vec![
                ExpectedSession {
                    start_minute: 212,
                    end_minute: 302,
                    reading_count: 4,
                    status: SessionStatus::Interrupted,
                },
                ExpectedSession {
                    start_minute: 0,
                    end_minute: 90,
                    reading_count: 4,
                    status: SessionStatus::Interrupted,
                },
            ],
        }
    }

    pub fn all() -> Vec<Scenario> {
        vec![
            Self::working_day(),
            Self::sparse_but_connected(),
            Self::just_over_the_gap(),
        ]
    }
}
