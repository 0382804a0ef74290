// ABOUTME: Measurement unit preference used by distance, speed and pace formatting
// ABOUTME: Parses "metric" / "imperial" profile settings into a typed enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's preferred measurement system
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilometers, meters, km/h
    #[default]
    Metric,
    /// Miles, feet, mph
    Imperial,
}

impl UnitSystem {
    /// Parse from string, falling back to metric for unrecognized values
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Profile-setting spelling of this unit system
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "km" => Ok(Self::Metric),
            "imperial" | "mi" => Ok(Self::Imperial),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit system: '{other}'. Valid options: metric, imperial"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert_eq!(" METRIC ".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
    }

    #[test]
    fn test_unknown_unit_falls_back_to_metric() {
        assert!("furlongs".parse::<UnitSystem>().is_err());
        assert_eq!(UnitSystem::from_str_or_default("furlongs"), UnitSystem::Metric);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
    }
}
