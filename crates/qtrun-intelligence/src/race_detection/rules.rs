// ABOUTME: Race detection rules as (predicate, weight, reason) entries grouped by signal category
// ABOUTME: Title keyword, standard distance and provider metadata predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use super::tables::StandardDistance;
use qtrun_core::constants::units::KM_PER_METER;
use qtrun_core::models::RaceCandidate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Independent kinds of evidence; each contributes at most its cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    /// Race vocabulary in the activity title
    Keyword,
    /// Distance close to a standard race distance
    Distance,
    /// Provider-side race tagging
    Metadata,
}

impl SignalCategory {
    /// Maximum total confidence this category can contribute
    #[must_use]
    pub const fn cap(&self) -> f64 {
        match self {
            Self::Keyword => 0.6,
            Self::Distance => 0.3,
            Self::Metadata => 0.5,
        }
    }
}

/// What a rule tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RulePredicate {
    /// Lowercased title contains the fragment
    TitleContains {
        /// Lowercase fragment
        keyword: Cow<'static, str>,
        /// Only match when not embedded in a longer word
        #[serde(default)]
        whole_word: bool,
    },
    /// Distance lies within a standard distance's tolerance window
    DistanceWithin {
        /// Reference distance
        distance: StandardDistance,
    },
    /// Provider workout type is one of the codes
    WorkoutTypeIn {
        /// Race workout type codes
        codes: Cow<'static, [u32]>,
    },
}

/// A single weighted detection rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRule {
    /// Predicate to evaluate
    pub predicate: RulePredicate,
    /// Confidence contributed when the predicate fires
    pub weight: f64,
}

/// Evidence produced by a rule that fired
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Category the evidence belongs to
    pub category: SignalCategory,
    /// Confidence weight
    pub weight: f64,
    /// Human-readable explanation
    pub reason: String,
    /// Matched standard distance label, for distance signals
    pub distance_class: Option<String>,
}

impl DetectionRule {
    /// Title keyword rule
    pub fn keyword(keyword: impl Into<Cow<'static, str>>, weight: f64) -> Self {
        Self {
            predicate: RulePredicate::TitleContains {
                keyword: keyword.into(),
                whole_word: false,
            },
            weight,
        }
    }

    /// Title keyword rule that ignores matches inside longer words
    pub fn whole_word(keyword: impl Into<Cow<'static, str>>, weight: f64) -> Self {
        Self {
            predicate: RulePredicate::TitleContains {
                keyword: keyword.into(),
                whole_word: true,
            },
            weight,
        }
    }

    /// Standard distance rule
    #[must_use]
    pub const fn distance(distance: StandardDistance, weight: f64) -> Self {
        Self {
            predicate: RulePredicate::DistanceWithin { distance },
            weight,
        }
    }

    /// Provider workout type rule
    pub fn workout_type(codes: impl Into<Cow<'static, [u32]>>, weight: f64) -> Self {
        Self {
            predicate: RulePredicate::WorkoutTypeIn {
                codes: codes.into(),
            },
            weight,
        }
    }

    /// Category of evidence this rule produces
    #[must_use]
    pub const fn category(&self) -> SignalCategory {
        match self.predicate {
            RulePredicate::TitleContains { .. } => SignalCategory::Keyword,
            RulePredicate::DistanceWithin { .. } => SignalCategory::Distance,
            RulePredicate::WorkoutTypeIn { .. } => SignalCategory::Metadata,
        }
    }

    /// Evaluate against a candidate whose title is already lowercased
    #[must_use]
    pub fn evaluate(&self, candidate: &RaceCandidate, title_lower: &str) -> Option<Signal> {
        let (reason, distance_class) = match &self.predicate {
            RulePredicate::TitleContains {
                keyword,
                whole_word,
            } => {
                let found = if *whole_word {
                    contains_word(title_lower, keyword)
                } else {
                    title_lower.contains(&**keyword)
                };
                if keyword.is_empty() || !found {
                    return None;
                }
                (format!("Title contains '{keyword}'"), None)
            }
            RulePredicate::DistanceWithin { distance } => {
                let meters = candidate.distance.filter(|meters| distance.matches(*meters))?;
                (
                    format!(
                        "Distance {:.1}km matches {} within tolerance",
                        meters * KM_PER_METER,
                        distance.name
                    ),
                    Some(distance.name.to_string()),
                )
            }
            RulePredicate::WorkoutTypeIn { codes } => {
                let workout_type = candidate.workout_type.filter(|code| codes.contains(code))?;
                (
                    format!("Activity tagged as race by provider (workout type {workout_type})"),
                    None,
                )
            }
        };

        Some(Signal {
            category: self.category(),
            weight: self.weight,
            reason,
            distance_class,
        })
    }
}

/// `word` occurs in `text` with no alphanumeric character on either side
fn contains_word(text: &str, word: &str) -> bool {
    text.match_indices(word).any(|(start, matched)| {
        let before = text[..start].chars().next_back();
        let after = text[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
