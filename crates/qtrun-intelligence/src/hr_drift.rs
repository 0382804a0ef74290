// ABOUTME: Cardiovascular drift from a heart rate stream
// ABOUTME: Compares mean HR of the first and last tenth of the activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use qtrun_core::constants::physiology::MIN_DRIFT_SAMPLES;
use tracing::debug;

fn mean(samples: &[i32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&hr| f64::from(hr)).sum();
    sum / samples.len() as f64
}

/// Heart rate drift in percent
///
/// Mean of the last 10% of samples relative to the mean of the first 10%.
/// Positive values mean HR rose over the activity. Returns 0 with fewer than
/// 10 samples or when the opening mean is 0.
#[must_use]
pub fn calculate_hr_drift(hr_samples: &[i32]) -> f64 {
    let n = hr_samples.len();
    if n < MIN_DRIFT_SAMPLES {
        return 0.0;
    }

    let first = mean(&hr_samples[..n / 10]);
    let last = mean(&hr_samples[n * 9 / 10..]);

    if first.abs() < f64::EPSILON {
        return 0.0;
    }

    let drift = (last - first) / first * 100.0;
    debug!(samples = n, first, last, drift, "Calculated HR drift");
    drift
}
