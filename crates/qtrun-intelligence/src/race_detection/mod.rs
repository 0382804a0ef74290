// ABOUTME: Rule-based race detection combining title keywords, standard distances and provider tags
// ABOUTME: Produces a race confidence, the matched distance class and the reasons behind the score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

//! # Race Detection
//!
//! A [`RaceDetector`] evaluates an ordered list of [`DetectionRule`]s against an
//! activity. Every rule that fires yields a [`Signal`] in one of three
//! categories. Weights are summed per category, each category sum is capped,
//! and the capped sums are added and capped at 1.0. Adding a corroborating
//! signal can therefore never lower the confidence.
//!
//! Only the first matching standard distance counts; it sets the detected
//! distance class. Detection is informational and never mutates the activity.
//!
//! ```rust
//! use chrono::Utc;
//! use qtrun_core::models::RaceCandidate;
//! use qtrun_intelligence::race_detection::detect_race;
//!
//! let candidate = RaceCandidate::new("42", "Boston Marathon 2024", Utc::now(), Some(42_250.0));
//! let result = detect_race(&candidate);
//! assert_eq!(result.detected_distance_class.as_deref(), Some("Marathon"));
//! ```

mod rules;
mod tables;

pub use rules::{DetectionRule, RulePredicate, Signal, SignalCategory};
pub use tables::{
    StandardDistance, RACE_KEYWORDS, RACE_WORKOUT_TYPES, STANDARD_DISTANCES, WHOLE_WORD_KEYWORDS,
};

use chrono::{DateTime, Utc};
use qtrun_core::models::RaceCandidate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::iter;
use std::sync::OnceLock;
use tracing::debug;

/// Confidence contributed by a standard distance match
pub const DISTANCE_MATCH_WEIGHT: f64 = 0.3;

/// Confidence contributed by provider race tagging
pub const WORKOUT_TYPE_WEIGHT: f64 = 0.5;

const CATEGORIES: [SignalCategory; 3] = [
    SignalCategory::Keyword,
    SignalCategory::Distance,
    SignalCategory::Metadata,
];

/// Outcome of race detection for one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceDetectionResult {
    /// Provider activity ID
    pub activity_id: String,
    /// Activity title
    pub activity_name: String,
    /// Activity start time
    pub date: DateTime<Utc>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Matched standard distance label
    pub detected_distance_class: Option<String>,
    /// Race likelihood in [0, 1]
    pub confidence: f64,
    /// Explanations, in rule order
    pub reasons: Vec<String>,
}

impl RaceDetectionResult {
    /// Whether the confidence reaches `threshold` (and is non-zero)
    #[must_use]
    pub fn is_race(&self, threshold: f64) -> bool {
        self.confidence > 0.0 && self.confidence >= threshold
    }
}

/// Ordered rule set for race detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceDetector {
    rules: Vec<DetectionRule>,
}

impl RaceDetector {
    /// Detector with an explicit rule list
    #[must_use]
    pub const fn new(rules: Vec<DetectionRule>) -> Self {
        Self { rules }
    }

    /// Append a rule
    #[must_use]
    pub fn with_rule(mut self, rule: DetectionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[DetectionRule] {
        &self.rules
    }

    /// Score one activity
    #[must_use]
    pub fn detect(&self, candidate: &RaceCandidate) -> RaceDetectionResult {
        let title_lower = candidate.activity_name.to_lowercase();

        let mut signals: Vec<Signal> = Vec::new();
        let mut detected_distance_class = None;
        for signal in self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(candidate, &title_lower))
        {
            if signal.category == SignalCategory::Distance {
                if detected_distance_class.is_some() {
                    continue;
                }
                detected_distance_class.clone_from(&signal.distance_class);
            }
            signals.push(signal);
        }

        let confidence = combine(&signals);
        debug!(
            activity.id = %candidate.activity_id,
            signals = signals.len(),
            confidence,
            distance_class = ?detected_distance_class,
            "Race detection evaluated"
        );

        RaceDetectionResult {
            activity_id: candidate.activity_id.clone(),
            activity_name: candidate.activity_name.clone(),
            date: candidate.date,
            distance: candidate.distance,
            detected_distance_class,
            confidence,
            reasons: signals.into_iter().map(|signal| signal.reason).collect(),
        }
    }

    /// Score many activities, keeping those at or above `threshold` in input order
    #[must_use]
    pub fn detect_races(
        &self,
        candidates: &[RaceCandidate],
        threshold: f64,
    ) -> Vec<RaceDetectionResult> {
        candidates
            .iter()
            .map(|candidate| self.detect(candidate))
            .filter(|result| result.is_race(threshold))
            .collect()
    }
}

impl Default for RaceDetector {
    fn default() -> Self {
        let keywords = RACE_KEYWORDS.iter().map(|&(keyword, weight)| {
            if WHOLE_WORD_KEYWORDS.contains(&keyword) {
                DetectionRule::whole_word(keyword, weight)
            } else {
                DetectionRule::keyword(keyword, weight)
            }
        });
        let distances = STANDARD_DISTANCES
            .iter()
            .map(|distance| DetectionRule::distance(distance.clone(), DISTANCE_MATCH_WEIGHT));
        let workout_type =
            DetectionRule::workout_type(Cow::Borrowed(RACE_WORKOUT_TYPES), WORKOUT_TYPE_WEIGHT);

        Self::new(
            keywords
                .chain(distances)
                .chain(iter::once(workout_type))
                .collect(),
        )
    }
}

/// Sum weights per category, cap each category, cap the total at 1.0
fn combine(signals: &[Signal]) -> f64 {
    let total: f64 = CATEGORIES
        .iter()
        .map(|category| {
            signals
                .iter()
                .filter(|signal| signal.category == *category)
                .map(|signal| signal.weight.max(0.0))
                .sum::<f64>()
                .min(category.cap())
        })
        .sum();

    (total.min(1.0) * 100.0).round() / 100.0
}

static DEFAULT_DETECTOR: OnceLock<RaceDetector> = OnceLock::new();

/// Process-wide detector built from the default tables
pub fn default_race_detector() -> &'static RaceDetector {
    DEFAULT_DETECTOR.get_or_init(RaceDetector::default)
}

/// Score one activity with the default rules
#[must_use]
pub fn detect_race(candidate: &RaceCandidate) -> RaceDetectionResult {
    default_race_detector().detect(candidate)
}

/// First standard distance whose tolerance window contains `meters`
#[must_use]
pub fn match_standard_distance(meters: f64) -> Option<&'static StandardDistance> {
    STANDARD_DISTANCES
        .iter()
        .find(|distance| distance.matches(meters))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, distance: Option<f64>) -> RaceCandidate {
        RaceCandidate::new("1", name, Utc::now(), distance)
    }

    #[test]
    fn test_default_tables() {
        assert_eq!(STANDARD_DISTANCES.len(), 11);
        assert_eq!(STANDARD_DISTANCES[0].name, "1 Mile");
        assert_eq!(STANDARD_DISTANCES[10].name, "100 Mile");
        assert!(STANDARD_DISTANCES
            .windows(2)
            .all(|pair| pair[0].meters * (1.0 + pair[0].tolerance)
                < pair[1].meters * (1.0 - pair[1].tolerance)));
    }

    #[test]
    fn test_category_caps() {
        // race + marathon + half marathon + boston marathon = 1.2 of keyword weight
        let result = detect_race(&candidate("Boston Marathon half marathon race", None));
        assert!((result.confidence - 0.6).abs() < 1e-9);
        assert_eq!(result.reasons.len(), 4);
    }

    #[test]
    fn test_custom_rule_extends_detection() {
        let detector = RaceDetector::new(Vec::new()).with_rule(DetectionRule::keyword("bib", 0.2));

        let result = detector.detect(&candidate("Bib pickup shakeout", None));
        assert!((result.confidence - 0.2).abs() < 1e-9);
        assert_eq!(result.reasons, vec!["Title contains 'bib'".to_owned()]);
    }

    #[test]
    fn test_match_standard_distance() {
        assert_eq!(
            match_standard_distance(21_200.0).map(|d| &*d.name),
            Some("Half Marathon")
        );
        assert!(match_standard_distance(3_000.0).is_none());
    }
}
