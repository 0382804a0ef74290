// ABOUTME: Shared test utilities for the analytics integration tests
// ABOUTME: Quiet logging setup and activity fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use qtrun::qtrun_core::models::{ActivityMetrics, ActivityMetricsBuilder, RaceCandidate};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed timestamp so results do not depend on the clock
pub fn race_day() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 15, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Run with average HR over `minutes`
pub fn run_with_hr(minutes: u64, average_hr: u32) -> ActivityMetrics {
    ActivityMetricsBuilder::new(race_day(), minutes * 60)
        .average_heart_rate(average_hr)
        .distance(10_000.0)
        .build()
}

/// Race detection input with the fixed race day
pub fn candidate(id: &str, name: &str, distance: Option<f64>) -> RaceCandidate {
    RaceCandidate::new(id, name, race_day(), distance)
}
