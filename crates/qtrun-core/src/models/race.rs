// ABOUTME: Input record for race detection
// ABOUTME: Carries title, distance and provider metadata of one activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An activity to be checked for race characteristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceCandidate {
    /// Provider activity ID
    pub activity_id: String,
    /// Activity title as entered by the athlete
    pub activity_name: String,
    /// Activity start time
    pub date: DateTime<Utc>,
    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Provider workout type code (Strava: 1 = run race, 11 = ride race)
    #[serde(default)]
    pub workout_type: Option<u32>,
}

impl RaceCandidate {
    /// Create a candidate from its title and distance
    pub fn new(
        activity_id: impl Into<String>,
        activity_name: impl Into<String>,
        date: DateTime<Utc>,
        distance: Option<f64>,
    ) -> Self {
        Self {
            activity_id: activity_id.into(),
            activity_name: activity_name.into(),
            date,
            distance,
            workout_type: None,
        }
    }

    /// Attach a provider workout type
    #[must_use]
    pub const fn with_workout_type(mut self, workout_type: u32) -> Self {
        self.workout_type = Some(workout_type);
        self
    }
}
