// ABOUTME: Derived training-metrics and endurance-analytics engine
// ABOUTME: Pure calculations over caller-supplied activity data, safe to call from any thread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

#![deny(unsafe_code)]

//! # QT.run Intelligence
//!
//! Stateless metric calculations behind the dashboards:
//!
//! - **units**: metric/imperial distance, speed, elevation, pace and duration
//! - **`heart_rate_zones`**: five-zone model, zone lookup, time in zones
//! - **algorithms**: max HR formulas and TRIMP
//! - **`hr_drift`**: cardiovascular drift from a HR stream
//! - **eddington**: Eddington number with progress toward the next value
//! - **`race_detection`**: keyword and distance based race classification
//! - **analysis**: per-activity bundle and batch training load
//!
//! No function here performs I/O or fails. Degenerate input (missing heart
//! rate, empty streams, zero max HR) yields a defined fallback; malformed
//! numbers such as negative distances or NaN are not validated.

/// Max HR estimation and TRIMP
pub mod algorithms;

/// Per-activity analysis bundle
pub mod analysis;

/// Eddington number
pub mod eddington;

/// Heart rate zone model
pub mod heart_rate_zones;

/// Heart rate drift
pub mod hr_drift;

/// Race detection rules and detector
pub mod race_detection;

/// Unit conversion and display formatting
pub mod units;

pub use algorithms::{calculate_max_heart_rate, calculate_trimp};
pub use analysis::{analyze_activity, calculate_training_loads, ActivityAnalysis};
pub use eddington::{calculate_eddington, calculate_eddington_for_activities, EddingtonResult};
pub use heart_rate_zones::{
    calculate_heart_rate_zones, calculate_time_in_zones, get_heart_rate_zone, HeartRateZone,
    ZoneTime,
};
pub use hr_drift::calculate_hr_drift;
pub use race_detection::{detect_race, RaceDetectionResult, RaceDetector};
