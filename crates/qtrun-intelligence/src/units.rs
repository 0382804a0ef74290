// ABOUTME: Distance, speed, elevation, pace and duration conversions for display
// ABOUTME: Converts SI values into the user's metric or imperial preference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

//! Unit conversion
//!
//! All functions are total: nothing is validated and nothing is rounded
//! except where a function produces a display string. Negative input passes
//! through arithmetically.

use qtrun_core::config::UnitSystem;
use qtrun_core::constants::units::{
    FEET_PER_METER, KMH_PER_MPS, KM_PER_METER, METERS_PER_KM, METERS_PER_MILE, MILES_PER_METER,
    MPH_PER_MPS, SECONDS_PER_HOUR,
};
use serde::Serialize;
use std::fmt;

/// A speed converted into display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormattedSpeed {
    /// Speed in `unit`
    pub value: f64,
    /// `"km/h"` or `"mph"`
    pub unit: &'static str,
}

impl fmt::Display for FormattedSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.value, self.unit)
    }
}

/// Convert meters into kilometers (metric) or miles (imperial)
#[must_use]
pub fn convert_distance(meters: f64, unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Metric => meters * KM_PER_METER,
        UnitSystem::Imperial => meters * MILES_PER_METER,
    }
}

/// Distance unit label for a unit system
#[must_use]
pub const fn get_distance_unit(unit: UnitSystem) -> &'static str {
    match unit {
        UnitSystem::Metric => "km",
        UnitSystem::Imperial => "mi",
    }
}

/// Convert a speed in m/s into km/h or mph
#[must_use]
pub fn format_speed(meters_per_second: f64, unit: UnitSystem) -> FormattedSpeed {
    match unit {
        UnitSystem::Imperial => FormattedSpeed {
            value: meters_per_second * MPH_PER_MPS,
            unit: "mph",
        },
        UnitSystem::Metric => FormattedSpeed {
            value: meters_per_second * KMH_PER_MPS,
            unit: "km/h",
        },
    }
}

/// Convert elevation in meters into meters or feet
#[must_use]
pub fn convert_elevation(meters: f64, unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Metric => meters,
        UnitSystem::Imperial => meters * FEET_PER_METER,
    }
}

/// Elevation unit label for a unit system
#[must_use]
pub const fn get_elevation_unit(unit: UnitSystem) -> &'static str {
    match unit {
        UnitSystem::Metric => "m",
        UnitSystem::Imperial => "ft",
    }
}

/// Pace as `m:ss /km` or `m:ss /mi`
///
/// Returns `--:--` when the speed is zero, negative or not finite.
#[must_use]
pub fn format_pace(meters_per_second: f64, unit: UnitSystem) -> String {
    if !meters_per_second.is_finite() || meters_per_second <= 0.0 {
        return "--:--".to_owned();
    }

    let unit_meters = match unit {
        UnitSystem::Metric => METERS_PER_KM,
        UnitSystem::Imperial => METERS_PER_MILE,
    };
    let total_seconds = (unit_meters / meters_per_second).round() as u64;

    format!(
        "{}:{:02} /{}",
        total_seconds / 60,
        total_seconds % 60,
        get_distance_unit(unit)
    )
}

/// Duration as `h:mm:ss`, or `m:ss` below one hour
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
