// ABOUTME: Per-activity metric inputs with optional heart rate, power and distance
// ABOUTME: ActivityMetrics value type and its builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metrics of a single activity as consumed by the calculators
///
/// Heart rate fields, when present, are expected to be positive. Distances and
/// elevation are in meters and are not validated: negative or NaN values
/// produce arithmetic garbage rather than errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetrics {
    /// Activity start time
    pub start_date_time: DateTime<Utc>,
    /// Moving time in seconds
    pub moving_time_seconds: u64,
    /// Average heart rate in bpm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heart_rate: Option<u32>,
    /// Maximum heart rate reached in bpm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heart_rate: Option<u32>,
    /// Average power in watts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_power: Option<f64>,
    /// Distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Elevation gain in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl ActivityMetrics {
    /// Create metrics with only a start time and moving time
    #[must_use]
    pub const fn new(start_date_time: DateTime<Utc>, moving_time_seconds: u64) -> Self {
        Self {
            start_date_time,
            moving_time_seconds,
            average_heart_rate: None,
            max_heart_rate: None,
            average_power: None,
            distance: None,
            elevation: None,
        }
    }

    /// Average speed in m/s, if distance and moving time are both known
    #[must_use]
    pub fn average_speed(&self) -> Option<f64> {
        if self.moving_time_seconds == 0 {
            return None;
        }
        self.distance
            .map(|meters| meters / self.moving_time_seconds as f64)
    }
}

impl Default for ActivityMetrics {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default(), 0)
    }
}

/// Builder for [`ActivityMetrics`]
#[derive(Debug, Clone)]
pub struct ActivityMetricsBuilder {
    inner: ActivityMetrics,
}

impl ActivityMetricsBuilder {
    /// Start building metrics for an activity
    #[must_use]
    pub const fn new(start_date_time: DateTime<Utc>, moving_time_seconds: u64) -> Self {
        Self {
            inner: ActivityMetrics::new(start_date_time, moving_time_seconds),
        }
    }

    /// Set average heart rate
    #[must_use]
    pub const fn average_heart_rate(mut self, value: u32) -> Self {
        self.inner.average_heart_rate = Some(value);
        self
    }

    /// Set optional average heart rate
    #[must_use]
    pub const fn average_heart_rate_opt(mut self, value: Option<u32>) -> Self {
        self.inner.average_heart_rate = value;
        self
    }

    /// Set maximum heart rate
    #[must_use]
    pub const fn max_heart_rate(mut self, value: u32) -> Self {
        self.inner.max_heart_rate = Some(value);
        self
    }

    /// Set optional maximum heart rate
    #[must_use]
    pub const fn max_heart_rate_opt(mut self, value: Option<u32>) -> Self {
        self.inner.max_heart_rate = value;
        self
    }

    /// Set average power
    #[must_use]
    pub const fn average_power(mut self, value: f64) -> Self {
        self.inner.average_power = Some(value);
        self
    }

    /// Set optional average power
    #[must_use]
    pub const fn average_power_opt(mut self, value: Option<f64>) -> Self {
        self.inner.average_power = value;
        self
    }

    /// Set distance in meters
    #[must_use]
    pub const fn distance(mut self, value: f64) -> Self {
        self.inner.distance = Some(value);
        self
    }

    /// Set optional distance in meters
    #[must_use]
    pub const fn distance_opt(mut self, value: Option<f64>) -> Self {
        self.inner.distance = value;
        self
    }

    /// Set elevation gain in meters
    #[must_use]
    pub const fn elevation(mut self, value: f64) -> Self {
        self.inner.elevation = Some(value);
        self
    }

    /// Set optional elevation gain in meters
    #[must_use]
    pub const fn elevation_opt(mut self, value: Option<f64>) -> Self {
        self.inner.elevation = value;
        self
    }

    /// Finish building
    #[must_use]
    pub const fn build(self) -> ActivityMetrics {
        self.inner
    }
}
