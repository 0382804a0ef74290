// ABOUTME: Loosely-typed provider activity record as synced from Strava-style APIs
// ABOUTME: Converts raw records into ActivityMetrics and RaceCandidate at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use super::{ActivityMetrics, RaceCandidate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider activity identifier; Strava sends integers, other providers strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityId {
    /// Numeric identifier
    Number(u64),
    /// Opaque string identifier
    Text(String),
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Raw activity record with provider field names
///
/// Every field except `id` may be missing. All defaulting happens in
/// [`ActivityRecord::to_metrics`] so the calculators never see partial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Provider activity ID
    pub id: ActivityId,
    /// Activity title
    #[serde(default)]
    pub name: Option<String>,
    /// Start time (RFC 3339)
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: Option<f64>,
    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: Option<f64>,
    /// Average heart rate in bpm (fractional on Strava)
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    /// Max heart rate in bpm
    #[serde(default)]
    pub max_heartrate: Option<f64>,
    /// Average power in watts
    #[serde(default)]
    pub average_watts: Option<f64>,
    /// Provider workout type code
    #[serde(default)]
    pub workout_type: Option<u32>,
    /// Heart rate stream, one sample per second
    #[serde(default)]
    pub heartrate: Option<Vec<i32>>,
}

impl ActivityRecord {
    /// Convert into the strict metrics type
    ///
    /// Missing moving time becomes 0, a missing start date becomes the Unix
    /// epoch, and heart rates are rounded to whole bpm and dropped unless positive.
    #[must_use]
    pub fn to_metrics(&self) -> ActivityMetrics {
        ActivityMetrics {
            start_date_time: self.start_date.unwrap_or_default(),
            moving_time_seconds: self
                .moving_time
                .filter(|seconds| seconds.is_finite() && *seconds > 0.0)
                .map_or(0, |seconds| seconds.round() as u64),
            average_heart_rate: positive_bpm(self.average_heartrate),
            max_heart_rate: positive_bpm(self.max_heartrate),
            average_power: self.average_watts,
            distance: self.distance,
            elevation: self.total_elevation_gain,
        }
    }

    /// Build the race detection input for this record
    #[must_use]
    pub fn to_race_candidate(&self) -> RaceCandidate {
        RaceCandidate {
            activity_id: self.id.to_string(),
            activity_name: self.name.clone().unwrap_or_default(),
            date: self.start_date.unwrap_or_default(),
            distance: self.distance,
            workout_type: self.workout_type,
        }
    }

    /// Heart rate samples, empty when no stream was synced
    #[must_use]
    pub fn heart_rate_samples(&self) -> &[i32] {
        self.heartrate.as_deref().unwrap_or_default()
    }
}

fn positive_bpm(value: Option<f64>) -> Option<u32> {
    value
        .filter(|bpm| bpm.is_finite() && *bpm > 0.0)
        .map(|bpm| bpm.round() as u32)
        .filter(|bpm| *bpm > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strava_record_maps_to_metrics() {
        let record: ActivityRecord = serde_json::from_value(serde_json::json!({
            "id": 12_345_678,
            "name": "Lunch Run",
            "start_date": "2024-04-15T14:00:00Z",
            "moving_time": 1800,
            "distance": 5012.3,
            "total_elevation_gain": 42.0,
            "average_heartrate": 151.6,
            "max_heartrate": 178.0
        }))
        .unwrap();

        let metrics = record.to_metrics();
        assert_eq!(metrics.moving_time_seconds, 1800);
        assert_eq!(metrics.average_heart_rate, Some(152));
        assert_eq!(metrics.max_heart_rate, Some(178));
        assert_eq!(metrics.distance, Some(5012.3));
        assert_eq!(record.id.to_string(), "12345678");
    }

    #[test]
    fn test_missing_fields_default_at_boundary() {
        let record: ActivityRecord =
            serde_json::from_value(serde_json::json!({ "id": "garmin-1", "average_heartrate": 0 }))
                .unwrap();

        let metrics = record.to_metrics();
        assert_eq!(metrics.moving_time_seconds, 0);
        assert_eq!(metrics.average_heart_rate, None);
        assert_eq!(metrics.start_date_time, DateTime::<Utc>::default());
        assert!(record.heart_rate_samples().is_empty());

        let candidate = record.to_race_candidate();
        assert_eq!(candidate.activity_id, "garmin-1");
        assert!(candidate.activity_name.is_empty());
    }
}
