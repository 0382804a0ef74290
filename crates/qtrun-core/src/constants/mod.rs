// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Unit conversion factors and physiological model parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

/// Unit conversion factors for distance, speed, elevation and time
pub mod units;

/// Heart-rate and training-load model parameters
pub mod physiology;

/// Environment variable names consumed by the configuration layer
pub mod env_config {
    /// Preferred measurement system (`metric` or `imperial`)
    pub const UNIT_SYSTEM: &str = "QTRUN_UNIT_SYSTEM";
    /// Athlete maximum heart rate override in bpm
    pub const ATHLETE_MAX_HR: &str = "QTRUN_ATHLETE_MAX_HR";
    /// Athlete age in years, used for max HR estimation
    pub const ATHLETE_AGE: &str = "QTRUN_ATHLETE_AGE";
    /// Formula used to estimate max HR from age
    pub const MAX_HR_FORMULA: &str = "QTRUN_MAX_HR_FORMULA";
    /// Minimum confidence for an activity to be reported as a race
    pub const RACE_CONFIDENCE_THRESHOLD: &str = "QTRUN_RACE_CONFIDENCE_THRESHOLD";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level filter
    pub const LOG_LEVEL: &str = "RUST_LOG";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Defaults applied when configuration is absent
pub mod defaults {
    /// Max HR used when neither a max HR nor an age is configured
    pub const ATHLETE_MAX_HR: u32 = 190;
    /// Default race reporting threshold
    pub const RACE_CONFIDENCE_THRESHOLD: f64 = 0.5;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the analytics service
    pub const QTRUN_ANALYTICS: &str = "qtrun-analytics";
}
