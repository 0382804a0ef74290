// ABOUTME: Reference tables for race detection: standard race distances and title keywords
// ABOUTME: Immutable statics consumed by the default RaceDetector rule set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A canonical race distance with its matching tolerance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardDistance {
    /// Display label, e.g. "Half Marathon"
    pub name: Cow<'static, str>,
    /// Canonical distance in meters
    pub meters: f64,
    /// Allowed relative deviation, in (0, 1)
    pub tolerance: f64,
}

impl StandardDistance {
    /// Table entry with a static label
    #[must_use]
    pub const fn new(name: &'static str, meters: f64, tolerance: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            meters,
            tolerance,
        }
    }

    /// Whether `distance` (meters) lies within `meters × (1 ± tolerance)`
    #[must_use]
    pub fn matches(&self, distance: f64) -> bool {
        let lower = self.meters * (1.0 - self.tolerance);
        let upper = self.meters * (1.0 + self.tolerance);
        distance >= lower && distance <= upper
    }
}

/// Standard distances, shortest first. Tolerance windows do not overlap.
pub static STANDARD_DISTANCES: [StandardDistance; 11] = [
    StandardDistance::new("1 Mile", 1_609.34, 0.05),
    StandardDistance::new("5K", 5_000.0, 0.05),
    StandardDistance::new("10K", 10_000.0, 0.04),
    StandardDistance::new("15K", 15_000.0, 0.03),
    StandardDistance::new("10 Mile", 16_093.4, 0.03),
    StandardDistance::new("Half Marathon", 21_097.5, 0.02),
    StandardDistance::new("Marathon", 42_195.0, 0.015),
    StandardDistance::new("50K", 50_000.0, 0.02),
    StandardDistance::new("50 Mile", 80_467.0, 0.03),
    StandardDistance::new("100K", 100_000.0, 0.03),
    StandardDistance::new("100 Mile", 160_934.0, 0.03),
];

/// Lowercase title fragments with their confidence weight
///
/// Named events weigh more than generic race vocabulary.
pub static RACE_KEYWORDS: &[(&str, f64)] = &[
    ("race", 0.3),
    ("marathon", 0.3),
    ("half marathon", 0.2),
    ("ultra", 0.2),
    ("5k", 0.2),
    ("10k", 0.2),
    ("15k", 0.2),
    ("50k", 0.2),
    ("100k", 0.2),
    ("10 mile", 0.2),
    ("relay", 0.2),
    ("fun run", 0.2),
    ("championship", 0.2),
    ("parkrun", 0.4),
    ("turkey trot", 0.4),
    ("jingle bell", 0.4),
    ("boston marathon", 0.4),
    ("new york city marathon", 0.4),
    ("nyc marathon", 0.4),
    ("chicago marathon", 0.4),
    ("london marathon", 0.4),
    ("berlin marathon", 0.4),
    ("tokyo marathon", 0.4),
    ("ironman", 0.4),
];

/// Generic keywords that only count as whole words ("race" must not fire on "grace")
pub static WHOLE_WORD_KEYWORDS: &[&str] = &["race", "ultra", "relay"];

/// Provider workout types that mark a race (Strava: 1 = run race, 11 = ride race)
pub static RACE_WORKOUT_TYPES: &[u32] = &[1, 11];
