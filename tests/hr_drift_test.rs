// ABOUTME: Integration tests for heart rate drift analysis
// ABOUTME: Tests sample thresholds, drift direction and the zero-baseline guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use qtrun::qtrun_intelligence::hr_drift::calculate_hr_drift;

#[test]
fn test_too_few_samples() {
    assert!(calculate_hr_drift(&[]).abs() < f64::EPSILON);
    let nine = [140, 150, 160, 170, 180, 190, 200, 210, 220];
    assert!(calculate_hr_drift(&nine).abs() < f64::EPSILON);
}

#[test]
fn test_increasing_series_drifts_up() {
    let samples: Vec<i32> = (140..=159).collect();
    // first 2 samples average 140.5, last 2 average 158.5
    let drift = calculate_hr_drift(&samples);
    assert!((drift - 18.0 / 140.5 * 100.0).abs() < 1e-9);
}

#[test]
fn test_flat_and_decreasing_series() {
    assert!(calculate_hr_drift(&[150; 100]).abs() < f64::EPSILON);

    let falling: Vec<i32> = (100..200).rev().collect();
    assert!(calculate_hr_drift(&falling) < 0.0);
}

#[test]
fn test_zero_opening_mean() {
    let mut samples = vec![0; 10];
    samples.extend([150; 90]);
    assert!(calculate_hr_drift(&samples).abs() < f64::EPSILON);
}
