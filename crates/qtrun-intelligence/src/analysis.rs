// ABOUTME: Per-activity analysis bundling TRIMP, zones and drift into one result
// ABOUTME: Includes a rayon-parallel batch TRIMP entry point for activity histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use crate::algorithms::{calculate_edwards_trimp, calculate_trimp};
use crate::heart_rate_zones::{calculate_time_in_zones, get_heart_rate_zone, ZoneTime};
use crate::hr_drift::calculate_hr_drift;
use qtrun_core::models::ActivityMetrics;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Derived metrics for a single activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityAnalysis {
    /// Banister TRIMP from average heart rate
    pub trimp: f64,
    /// Zone of the average heart rate; `None` without average HR or max HR
    pub average_hr_zone: Option<u8>,
    /// HR drift in percent; 0 with fewer than 10 samples
    pub hr_drift_percent: f64,
    /// Time-in-zone distribution of the HR stream
    pub time_in_zones: Vec<ZoneTime>,
    /// Zone-weighted TRIMP of the HR stream
    pub edwards_trimp: f64,
}

/// Analyze one activity against an athlete's max HR
///
/// `hr_samples` may be empty when no stream was synced; stream-derived
/// metrics are then 0.
#[must_use]
pub fn analyze_activity(
    activity: &ActivityMetrics,
    athlete_max_hr: u32,
    hr_samples: &[i32],
) -> ActivityAnalysis {
    let time_in_zones = calculate_time_in_zones(hr_samples, athlete_max_hr);
    let average_hr_zone = activity
        .average_heart_rate
        .filter(|hr| *hr > 0 && athlete_max_hr > 0)
        .map(|hr| get_heart_rate_zone(hr, athlete_max_hr));

    ActivityAnalysis {
        trimp: calculate_trimp(activity, athlete_max_hr),
        average_hr_zone,
        hr_drift_percent: calculate_hr_drift(hr_samples),
        edwards_trimp: calculate_edwards_trimp(&time_in_zones),
        time_in_zones,
    }
}

/// TRIMP for each activity, computed in parallel, in input order
#[must_use]
pub fn calculate_training_loads(activities: &[ActivityMetrics], athlete_max_hr: u32) -> Vec<f64> {
    let loads: Vec<f64> = activities
        .par_iter()
        .map(|activity| calculate_trimp(activity, athlete_max_hr))
        .collect();

    debug!(
        activities = activities.len(),
        total_trimp = loads.iter().sum::<f64>(),
        "Calculated training loads"
    );
    loads
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use qtrun_core::models::ActivityMetricsBuilder;

    #[test]
    fn test_analysis_without_stream() {
        let activity = ActivityMetricsBuilder::new(Utc::now(), 1800)
            .average_heart_rate(160)
            .build();

        let analysis = analyze_activity(&activity, 190, &[]);
        assert!(analysis.trimp > 0.0);
        assert_eq!(analysis.average_hr_zone, Some(4));
        assert!(analysis.hr_drift_percent.abs() < f64::EPSILON);
        assert!(analysis.edwards_trimp.abs() < f64::EPSILON);
    }

    #[test]
    fn test_training_loads_preserve_order() {
        let activities: Vec<ActivityMetrics> = [120, 0, 170]
            .iter()
            .map(|&hr| {
                ActivityMetricsBuilder::new(Utc::now(), 3600)
                    .average_heart_rate_opt((hr > 0).then_some(hr))
                    .build()
            })
            .collect();

        let loads = calculate_training_loads(&activities, 190);
        assert_eq!(loads.len(), 3);
        assert!(loads[1].abs() < f64::EPSILON);
        assert!(loads[2] > loads[0]);
    }
}
