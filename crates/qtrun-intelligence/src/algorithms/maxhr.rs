// ABOUTME: Maximum heart rate estimation from age using published formulas
// ABOUTME: Implements Fox, Tanaka, Nes and Gulati; Tanaka drives the default zone model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use qtrun_core::constants::physiology::{TANAKA_AGE_FACTOR, TANAKA_INTERCEPT};
use qtrun_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum heart rate estimation formula
///
/// - `Fox`: 220 - age (tends to overestimate for older athletes)
/// - `Tanaka`: 208 - 0.7 x age (default)
/// - `Nes`: 211 - 0.64 x age
/// - `Gulati`: 206 - 0.88 x age (derived from women)
///
/// # Scientific References
///
/// - Fox, S.M. et al. (1971). "Physical activity and coronary heart disease." *Ann Clin Res*, 3(6), 404-432.
/// - Tanaka, H. et al. (2001). "Age-predicted maximal heart rate revisited." *J Am Coll Cardiol*, 37(1), 153-156.
/// - Nes, B.M. et al. (2013). "Age-predicted maximal heart rate." *Scand J Med Sci Sports*, 23(6), 697-704.
/// - Gulati, M. et al. (2010). "Heart rate response to exercise stress testing." *Circulation*, 122(2), 130-137.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaxHrFormula {
    /// 220 - age
    Fox,
    /// 208 - 0.7 x age
    #[default]
    Tanaka,
    /// 211 - 0.64 x age
    Nes,
    /// 206 - 0.88 x age
    Gulati,
}

impl MaxHrFormula {
    /// Estimate maximum heart rate in bpm, unrounded
    ///
    /// Age is not validated; absurd ages produce absurd estimates.
    #[must_use]
    pub fn estimate(&self, age: u32) -> f64 {
        let age = f64::from(age);
        match self {
            Self::Fox => 220.0 - age,
            Self::Tanaka => TANAKA_AGE_FACTOR.mul_add(-age, TANAKA_INTERCEPT),
            Self::Nes => 0.64f64.mul_add(-age, 211.0),
            Self::Gulati => 0.88f64.mul_add(-age, 206.0),
        }
    }

    /// Name used in configuration and logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fox => "fox",
            Self::Tanaka => "tanaka",
            Self::Nes => "nes",
            Self::Gulati => "gulati",
        }
    }

    /// The formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Fox => "220 - age",
            Self::Tanaka => "208 - 0.7 x age",
            Self::Nes => "211 - 0.64 x age",
            Self::Gulati => "206 - 0.88 x age",
        }
    }
}

impl FromStr for MaxHrFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fox" => Ok(Self::Fox),
            "tanaka" => Ok(Self::Tanaka),
            "nes" => Ok(Self::Nes),
            "gulati" => Ok(Self::Gulati),
            other => Err(AppError::invalid_input(format!(
                "Unknown max HR formula: '{other}'. Valid options: fox, tanaka, nes, gulati"
            ))),
        }
    }
}

/// Age-predicted maximum heart rate, Tanaka formula rounded to whole bpm
#[must_use]
pub fn calculate_max_heart_rate(age: u32) -> u32 {
    // Saturating cast: ages above ~297 yield 0
    MaxHrFormula::Tanaka.estimate(age).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tanaka_rounding() {
        assert_eq!(calculate_max_heart_rate(30), 187);
        assert_eq!(calculate_max_heart_rate(40), 180);
        assert_eq!(calculate_max_heart_rate(20), 194);
    }

    #[test]
    fn test_formulas_differ() {
        assert!((MaxHrFormula::Fox.estimate(40) - 180.0).abs() < f64::EPSILON);
        assert!((MaxHrFormula::Nes.estimate(50) - 179.0).abs() < 1e-9);
        assert!((MaxHrFormula::Gulati.estimate(50) - 162.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Tanaka".parse::<MaxHrFormula>().unwrap(), MaxHrFormula::Tanaka);
        assert!("karvonen".parse::<MaxHrFormula>().is_err());
    }
}
