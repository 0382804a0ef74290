// ABOUTME: Physiological model parameters for heart-rate zones and training load
// ABOUTME: Zone boundary fractions, Tanaka coefficients and Banister TRIMP weighting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

/// Zone boundaries as fractions of max HR: zone N spans `[N-1, N]`
pub const HR_ZONE_BOUNDARIES: [f64; 6] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Zone display names, zone 1 first
pub const HR_ZONE_NAMES: [&str; 5] = ["Recovery", "Aerobic", "Tempo", "Threshold", "VO2 Max"];

/// Reference midpoint (% of max HR) reported for each zone
pub const HR_ZONE_MIDPOINTS: [u8; 5] = [55, 65, 75, 85, 95];

/// Tanaka intercept
pub const TANAKA_INTERCEPT: f64 = 208.0;

/// Tanaka age coefficient
pub const TANAKA_AGE_FACTOR: f64 = 0.7;

/// Banister exponential weighting factor
pub const TRIMP_EXPONENTIAL_FACTOR: f64 = 1.92;

/// Minimum HR samples before drift is reported
pub const MIN_DRIFT_SAMPLES: usize = 10;
