// ABOUTME: Five-zone heart rate model derived from an athlete's maximum heart rate
// ABOUTME: Zone table construction, zone lookup with clamping, and time-in-zone distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

//! Heart rate zones
//!
//! Zones are built from fixed fractions of max HR (50/60/70/80/90/100%),
//! each boundary rounded to whole bpm. Adjacent zones share their boundary
//! value; lookups take the lowest zone that contains the heart rate.

use qtrun_core::constants::physiology::{HR_ZONE_BOUNDARIES, HR_ZONE_MIDPOINTS, HR_ZONE_NAMES};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of zones in the model
pub const ZONE_COUNT: usize = 5;

/// One heart rate training zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZone {
    /// Zone number, 1-5
    pub zone: u8,
    /// Recovery, Aerobic, Tempo, Threshold or VO2 Max
    pub name: String,
    /// Lower bound in bpm (inclusive)
    pub min_hr: u32,
    /// Upper bound in bpm (inclusive)
    pub max_hr: u32,
    /// Reference midpoint as % of max HR
    pub percentage: u8,
}

impl HeartRateZone {
    /// Whether `hr` lies within this zone's bounds
    #[must_use]
    pub const fn contains(&self, hr: u32) -> bool {
        hr >= self.min_hr && hr <= self.max_hr
    }
}

/// Time spent in one zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneTime {
    /// Zone number, 1-5
    pub zone: u8,
    /// Seconds in the zone (one sample per second)
    pub seconds: u32,
    /// Share of valid samples, 0-100
    pub percentage: f64,
}

fn boundary(max_hr: u32, fraction: f64) -> u32 {
    (f64::from(max_hr) * fraction).round() as u32
}

/// Build the five-zone table for a maximum heart rate
///
/// Zone 5's upper bound is `max_hr` itself rather than a rounded fraction.
#[must_use]
pub fn calculate_heart_rate_zones(max_hr: u32) -> Vec<HeartRateZone> {
    (0..ZONE_COUNT)
        .map(|index| {
            let upper = if index == ZONE_COUNT - 1 {
                max_hr
            } else {
                boundary(max_hr, HR_ZONE_BOUNDARIES[index + 1])
            };
            HeartRateZone {
                zone: index as u8 + 1,
                name: HR_ZONE_NAMES[index].to_owned(),
                min_hr: boundary(max_hr, HR_ZONE_BOUNDARIES[index]),
                max_hr: upper,
                percentage: HR_ZONE_MIDPOINTS[index],
            }
        })
        .collect()
}

fn zone_in(zones: &[HeartRateZone], hr: u32) -> u8 {
    if let Some(zone) = zones.iter().find(|zone| zone.contains(hr)) {
        return zone.zone;
    }
    match zones.last() {
        Some(top) if hr > top.max_hr => top.zone,
        _ => 1,
    }
}

/// Zone number (1-5) for a heart rate
///
/// Never signals out of range: rates above zone 5 report 5, rates below
/// zone 1 report 1.
#[must_use]
pub fn get_heart_rate_zone(hr: u32, max_hr: u32) -> u8 {
    zone_in(&calculate_heart_rate_zones(max_hr), hr)
}

/// Distribution of heart rate samples across the five zones
///
/// Samples at or below zero are treated as sensor dropouts and skipped. With
/// no valid samples every percentage is 0.
#[must_use]
pub fn calculate_time_in_zones(hr_samples: &[i32], max_hr: u32) -> Vec<ZoneTime> {
    let zones = calculate_heart_rate_zones(max_hr);
    let mut counts = [0_u32; ZONE_COUNT];

    for &sample in hr_samples.iter().filter(|sample| **sample > 0) {
        let zone = zone_in(&zones, sample.unsigned_abs());
        counts[usize::from(zone) - 1] += 1;
    }

    let total: u32 = counts.iter().sum();
    debug!(
        samples = hr_samples.len(),
        valid = total,
        max_hr,
        "Calculated time in heart rate zones"
    );

    counts
        .iter()
        .enumerate()
        .map(|(index, &seconds)| ZoneTime {
            zone: index as u8 + 1,
            seconds,
            percentage: if total == 0 {
                0.0
            } else {
                f64::from(seconds) / f64::from(total) * 100.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_table_for_190() {
        let zones = calculate_heart_rate_zones(190);

        assert_eq!(zones.len(), 5);
        assert_eq!(zones[0].min_hr, 95);
        assert_eq!(zones[0].max_hr, 114);
        assert_eq!(zones[4].name, "VO2 Max");
        assert_eq!(zones[4].min_hr, 171);
        assert_eq!(zones[4].max_hr, 190);
        for pair in zones.windows(2) {
            assert_eq!(pair[0].max_hr, pair[1].min_hr);
        }
    }

    #[test]
    fn test_shared_boundary_goes_to_lower_zone() {
        // 114 is both zone 1 max and zone 2 min
        assert_eq!(get_heart_rate_zone(114, 190), 1);
        assert_eq!(get_heart_rate_zone(115, 190), 2);
    }

    #[test]
    fn test_zone_clamping() {
        assert_eq!(get_heart_rate_zone(195, 190), 5);
        assert_eq!(get_heart_rate_zone(60, 190), 1);
    }

    #[test]
    fn test_time_in_zones_skips_dropouts() {
        let samples = [0, -1, 100, 120, 140, 160, 180];
        let distribution = calculate_time_in_zones(&samples, 190);

        let seconds: Vec<u32> = distribution.iter().map(|zone| zone.seconds).collect();
        assert_eq!(seconds, vec![1, 1, 1, 1, 1]);
        assert!((distribution[0].percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_in_zones_empty() {
        let distribution = calculate_time_in_zones(&[0, 0], 190);
        assert!(distribution.iter().all(|zone| zone.seconds == 0));
        assert!(distribution.iter().all(|zone| zone.percentage.abs() < f64::EPSILON));
    }
}
