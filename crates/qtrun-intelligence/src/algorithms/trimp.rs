// ABOUTME: Training Impulse (TRIMP) calculation from average heart rate and moving time
// ABOUTME: Banister-style exponential TRIMP plus the Edwards zone-weighted variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use crate::heart_rate_zones::ZoneTime;
use qtrun_core::constants::physiology::TRIMP_EXPONENTIAL_FACTOR;
use qtrun_core::constants::units::SECONDS_PER_MINUTE;
use qtrun_core::models::ActivityMetrics;

/// Banister-style TRIMP for one activity
///
/// `hr_ratio = average_hr / athlete_max_hr`, weighted by `exp(1.92 × hr_ratio)`
/// and scaled to minutes. Returns 0 without an average heart rate or with a
/// zero max HR. A ratio above 1 is not clamped.
///
/// Banister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
#[must_use]
pub fn calculate_trimp(activity: &ActivityMetrics, athlete_max_hr: u32) -> f64 {
    let Some(average_hr) = activity.average_heart_rate.filter(|hr| *hr > 0) else {
        return 0.0;
    };
    if athlete_max_hr == 0 {
        return 0.0;
    }

    let hr_ratio = f64::from(average_hr) / f64::from(athlete_max_hr);
    let intensity_factor = (TRIMP_EXPONENTIAL_FACTOR * hr_ratio).exp();

    activity.moving_time_seconds as f64 * hr_ratio * intensity_factor / SECONDS_PER_MINUTE
}

/// Edwards TRIMP from a time-in-zones distribution: Σ(zone minutes × zone number)
///
/// Edwards, S. (1993). "The Heart Rate Monitor Book." Polar Electro Oy.
#[must_use]
pub fn calculate_edwards_trimp(zone_times: &[ZoneTime]) -> f64 {
    zone_times
        .iter()
        .map(|zone| f64::from(zone.seconds) / SECONDS_PER_MINUTE * f64::from(zone.zone))
        .sum()
}
