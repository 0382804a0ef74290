// ABOUTME: Integration tests for the five-zone heart rate model
// ABOUTME: Tests zone tables, zone lookup clamping and time-in-zone distributions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use qtrun::qtrun_intelligence::algorithms::{calculate_max_heart_rate, MaxHrFormula};
use qtrun::qtrun_intelligence::heart_rate_zones::{
    calculate_heart_rate_zones, calculate_time_in_zones, get_heart_rate_zone,
};

#[test]
fn test_zone_table_for_max_190() {
    let zones = calculate_heart_rate_zones(190);

    assert_eq!(zones.len(), 5);
    assert_eq!(zones[0].min_hr, 95);
    assert_eq!(zones[4].min_hr, 171);
    assert_eq!(zones[4].max_hr, 190);
    assert_eq!(
        zones.iter().map(|z| z.zone).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert_eq!(
        zones.iter().map(|z| z.percentage).collect::<Vec<_>>(),
        vec![55, 65, 75, 85, 95]
    );
    assert!(zones.windows(2).all(|pair| pair[0].min_hr <= pair[1].min_hr));
}

#[test]
fn test_zone_lookup_clamps() {
    assert_eq!(get_heart_rate_zone(195, 190), 5);
    assert_eq!(get_heart_rate_zone(100, 190), 1);
    assert_eq!(get_heart_rate_zone(40, 190), 1);
    assert_eq!(get_heart_rate_zone(160, 190), 4);
    assert_eq!(get_heart_rate_zone(190, 190), 5);
}

#[test]
fn test_time_in_zones_skips_dropouts() {
    common::init_test_logging();

    // 2 samples in zone 1, 2 in zone 5, 2 dropouts
    let samples = [100, 100, 0, -1, 180, 185];
    let distribution = calculate_time_in_zones(&samples, 190);

    assert_eq!(distribution.len(), 5);
    assert_eq!(distribution[0].seconds, 2);
    assert_eq!(distribution[4].seconds, 2);
    let total_seconds: u32 = distribution.iter().map(|z| z.seconds).sum();
    assert_eq!(total_seconds, 4);
    assert!((distribution[0].percentage - 50.0).abs() < 1e-9);
    let total_percent: f64 = distribution.iter().map(|z| z.percentage).sum();
    assert!((total_percent - 100.0).abs() < 1e-9);
}

#[test]
fn test_time_in_zones_without_samples() {
    let distribution = calculate_time_in_zones(&[], 190);
    assert_eq!(distribution.len(), 5);
    assert!(distribution
        .iter()
        .all(|z| z.seconds == 0 && z.percentage.abs() < f64::EPSILON));
}

#[test]
fn test_max_hr_estimates() {
    assert_eq!(calculate_max_heart_rate(30), 187);
    assert_eq!(calculate_max_heart_rate(40), 180);
    assert!((MaxHrFormula::Fox.estimate(40) - 180.0).abs() < 1e-9);
    assert_eq!("gulati".parse::<MaxHrFormula>().unwrap(), MaxHrFormula::Gulati);
    assert!("astrology".parse::<MaxHrFormula>().is_err());
}
