// ABOUTME: Assembles display-ready reports from provider records and analytics results
// ABOUTME: Applies the unit preference at the output boundary for the CLI and callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use crate::config::AnalyticsConfig;
use chrono::{DateTime, Utc};
use qtrun_core::config::UnitSystem;
use qtrun_core::models::{ActivityMetrics, ActivityRecord, RaceCandidate};
use qtrun_intelligence::analysis::{analyze_activity, ActivityAnalysis};
use qtrun_intelligence::eddington::{calculate_eddington_for_activities, EddingtonResult};
use qtrun_intelligence::heart_rate_zones::{calculate_heart_rate_zones, HeartRateZone};
use qtrun_intelligence::race_detection::{default_race_detector, RaceDetectionResult};
use qtrun_intelligence::units::{
    convert_distance, convert_elevation, format_duration, format_pace, format_speed,
    get_distance_unit, get_elevation_unit, FormattedSpeed,
};
use serde::Serialize;
use tracing::info;

/// One analyzed activity in the user's units
#[derive(Debug, Clone, Serialize)]
pub struct ActivityReport {
    /// Provider activity ID
    pub activity_id: String,
    /// Activity title
    pub name: String,
    /// Start time
    pub start_date: DateTime<Utc>,
    /// Distance in `distance_unit`
    pub distance: Option<f64>,
    /// `km` or `mi`
    pub distance_unit: &'static str,
    /// Elevation gain in `elevation_unit`
    pub elevation: Option<f64>,
    /// `m` or `ft`
    pub elevation_unit: &'static str,
    /// Moving time as `h:mm:ss`
    pub moving_time: String,
    /// Average pace per distance unit
    pub pace: Option<String>,
    /// Average speed
    pub average_speed: Option<FormattedSpeed>,
    /// Derived heart rate metrics
    #[serde(flatten)]
    pub analysis: ActivityAnalysis,
}

/// Eddington number with the unit it was computed in
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EddingtonReport {
    /// `km` or `mi`
    pub unit: &'static str,
    /// Number of activities considered
    pub activities: usize,
    /// Result
    #[serde(flatten)]
    pub result: EddingtonResult,
}

/// Zone table for a max heart rate
#[derive(Debug, Clone, Serialize)]
pub struct ZoneReport {
    /// Max heart rate the zones derive from
    pub max_hr: u32,
    /// Zones 1 through 5
    pub zones: Vec<HeartRateZone>,
}

/// Build the report for one record
#[must_use]
pub fn build_activity_report(
    record: &ActivityRecord,
    unit: UnitSystem,
    athlete_max_hr: u32,
) -> ActivityReport {
    let metrics = record.to_metrics();
    let speed = metrics.average_speed();

    ActivityReport {
        activity_id: record.id.to_string(),
        name: record.name.clone().unwrap_or_default(),
        start_date: metrics.start_date_time,
        distance: metrics.distance.map(|meters| convert_distance(meters, unit)),
        distance_unit: get_distance_unit(unit),
        elevation: metrics.elevation.map(|meters| convert_elevation(meters, unit)),
        elevation_unit: get_elevation_unit(unit),
        moving_time: format_duration(metrics.moving_time_seconds),
        pace: speed.map(|mps| format_pace(mps, unit)),
        average_speed: speed.map(|mps| format_speed(mps, unit)),
        analysis: analyze_activity(&metrics, athlete_max_hr, record.heart_rate_samples()),
    }
}

/// Build reports for every record using the configured units and athlete
#[must_use]
pub fn build_activity_reports(
    records: &[ActivityRecord],
    config: &AnalyticsConfig,
) -> Vec<ActivityReport> {
    let max_hr = config.athlete.effective_max_hr();
    info!(activities = records.len(), max_hr, "Analyzing activities");
    records
        .iter()
        .map(|record| build_activity_report(record, config.unit_system, max_hr))
        .collect()
}

/// Eddington number over all records in the given units
#[must_use]
pub fn build_eddington_report(records: &[ActivityRecord], unit: UnitSystem) -> EddingtonReport {
    let metrics: Vec<ActivityMetrics> = records.iter().map(ActivityRecord::to_metrics).collect();
    EddingtonReport {
        unit: get_distance_unit(unit),
        activities: metrics.len(),
        result: calculate_eddington_for_activities(&metrics, unit),
    }
}

/// Likely races among the records, at or above `threshold`
#[must_use]
pub fn build_race_report(records: &[ActivityRecord], threshold: f64) -> Vec<RaceDetectionResult> {
    let candidates: Vec<RaceCandidate> = records
        .iter()
        .map(ActivityRecord::to_race_candidate)
        .collect();
    let races = default_race_detector().detect_races(&candidates, threshold);
    info!(
        activities = candidates.len(),
        races = races.len(),
        threshold,
        "Race detection complete"
    );
    races
}

/// Heart rate zone table for `max_hr`
#[must_use]
pub fn build_zone_report(max_hr: u32) -> ZoneReport {
    ZoneReport {
        max_hr,
        zones: calculate_heart_rate_zones(max_hr),
    }
}
