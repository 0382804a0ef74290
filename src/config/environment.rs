// ABOUTME: Environment configuration for the analytics engine and CLI
// ABOUTME: Parses unit preference, athlete heart rate settings and race thresholds from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

//! Environment-based configuration
//!
//! Configuration is read from environment variables only. Enum settings fall
//! back to their defaults on unrecognized values; numeric settings that fail to
//! parse are reported as `CONFIG_INVALID` errors.

use qtrun_core::config::UnitSystem;
use qtrun_core::constants::{defaults, env_config};
use qtrun_core::errors::{AppError, AppResult, ErrorCode};
use qtrun_intelligence::algorithms::MaxHrFormula;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Athlete physiology settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct AthleteConfig {
    /// Measured maximum heart rate in bpm
    pub max_hr: Option<u32>,
    /// Age in years, used when no max HR is configured
    pub age: Option<u32>,
    /// Formula for age-based max HR estimation
    pub max_hr_formula: MaxHrFormula,
}

impl AthleteConfig {
    /// Max HR to analyze against: measured value, else age estimate, else the default
    #[must_use]
    pub fn effective_max_hr(&self) -> u32 {
        if let Some(max_hr) = self.max_hr.filter(|hr| *hr > 0) {
            return max_hr;
        }
        self.age.map_or(defaults::ATHLETE_MAX_HR, |age| {
            self.max_hr_formula.estimate(age).round() as u32
        })
    }
}

/// Analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Display unit preference
    pub unit_system: UnitSystem,
    /// Athlete physiology
    pub athlete: AthleteConfig,
    /// Minimum confidence reported as a race
    pub race_confidence_threshold: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            unit_system: UnitSystem::default(),
            athlete: AthleteConfig::default(),
            race_confidence_threshold: defaults::RACE_CONFIDENCE_THRESHOLD,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when a numeric variable does not parse and
    /// `VALUE_OUT_OF_RANGE` when the race threshold is outside [0, 1].
    pub fn from_env() -> AppResult<Self> {
        info!("Loading analytics configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Same as [`AnalyticsConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let unit_system = lookup(env_config::UNIT_SYSTEM).map_or_else(UnitSystem::default, |raw| {
            raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Unrecognized unit system, using metric");
                UnitSystem::Metric
            })
        });

        let max_hr_formula = lookup(env_config::MAX_HR_FORMULA)
            .map_or_else(MaxHrFormula::default, |raw| {
                raw.parse().unwrap_or_else(|_| {
                    warn!(value = %raw, "Unrecognized max HR formula, using tanaka");
                    MaxHrFormula::Tanaka
                })
            });

        let race_confidence_threshold = parse_var(&lookup, env_config::RACE_CONFIDENCE_THRESHOLD)?
            .unwrap_or(defaults::RACE_CONFIDENCE_THRESHOLD);
        if !(0.0..=1.0).contains(&race_confidence_threshold) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("race confidence threshold must be within 0..=1, got {race_confidence_threshold}"),
            )
            .with_field(env_config::RACE_CONFIDENCE_THRESHOLD));
        }

        let config = Self {
            environment: lookup(env_config::ENVIRONMENT)
                .map_or_else(Environment::default, |raw| Environment::from_str_or_default(&raw)),
            unit_system,
            athlete: AthleteConfig {
                max_hr: parse_var(&lookup, env_config::ATHLETE_MAX_HR)?,
                age: parse_var(&lookup, env_config::ATHLETE_AGE)?,
                max_hr_formula,
            },
            race_confidence_threshold,
        };

        config.log_summary();
        Ok(config)
    }

    fn log_summary(&self) {
        info!(
            environment = %self.environment,
            units = %self.unit_system,
            athlete.max_hr = self.athlete.effective_max_hr(),
            race.threshold = self.race_confidence_threshold,
            "Analytics configuration loaded"
        );
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AppError::config_invalid(key, format!("'{raw}': {e}")))
        })
        .transpose()
}
