// ABOUTME: Unit conversion constants for distance, speed, elevation and time
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

/// Kilometers per meter
pub const KM_PER_METER: f64 = 0.001;

/// Miles per meter
pub const MILES_PER_METER: f64 = 0.000_621_371;

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Meters per mile
pub const METERS_PER_MILE: f64 = 1609.34;

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.280_84;

/// Miles per hour for one meter per second
pub const MPH_PER_MPS: f64 = 2.236_94;

/// Kilometers per hour for one meter per second
pub const KMH_PER_MPS: f64 = 3.6;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: u64 = 3600;
