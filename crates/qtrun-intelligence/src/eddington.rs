// ABOUTME: Eddington number over a history of activity distances
// ABOUTME: Greedy prefix scan over distances sorted descending, plus progress to the next value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

//! Eddington number
//!
//! E is the largest integer such that at least E activities each covered at
//! least E distance units. The unit is whatever the caller converted to:
//! kilometers and miles give different numbers for the same history.

use crate::units::convert_distance;
use qtrun_core::config::UnitSystem;
use qtrun_core::models::ActivityMetrics;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Eddington number and progress toward the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EddingtonResult {
    /// Current Eddington number
    pub eddington: u32,
    /// Next milestone, `eddington + 1`
    pub next: u32,
    /// Additional activities of at least `next` units required to reach it
    pub needed_for_next: i64,
}

/// Eddington number for a list of distances
///
/// Scans the distances sorted in descending order and stops at the first
/// position `i` where `sorted[i] < i + 1`. `needed_for_next` is the raw
/// difference between `next` and the count of distances `>= next`; it is not
/// clamped. NaN distances sort last and never qualify.
#[must_use]
pub fn calculate_eddington(distances: &[f64]) -> EddingtonResult {
    let mut sorted = distances.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    // total_cmp orders positive NaN above +inf; push NaN to the tail
    sorted.sort_by_key(|distance| distance.is_nan());

    let mut eddington: u32 = 0;
    for (index, &distance) in sorted.iter().enumerate() {
        let candidate = index as u32 + 1;
        if distance >= f64::from(candidate) {
            eddington = candidate;
        } else {
            break;
        }
    }

    let next = eddington + 1;
    let qualifying = sorted
        .iter()
        .filter(|&&distance| distance >= f64::from(next))
        .count();
    let needed_for_next = i64::from(next) - qualifying as i64;

    debug!(
        activities = distances.len(),
        eddington, needed_for_next, "Calculated Eddington number"
    );

    EddingtonResult {
        eddington,
        next,
        needed_for_next,
    }
}

/// Eddington number for activities in the given unit system
///
/// Activities without a distance count as zero-length.
#[must_use]
pub fn calculate_eddington_for_activities(
    activities: &[ActivityMetrics],
    unit: UnitSystem,
) -> EddingtonResult {
    let distances: Vec<f64> = activities
        .iter()
        .map(|activity| convert_distance(activity.distance.unwrap_or(0.0), unit))
        .collect();
    calculate_eddington(&distances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let result = calculate_eddington(&[]);
        assert_eq!(
            result,
            EddingtonResult {
                eddington: 0,
                next: 1,
                needed_for_next: 1
            }
        );
    }

    #[test]
    fn test_descending_ladder() {
        let result = calculate_eddington(&[1.0, 5.0, 3.0, 2.0, 4.0]);
        assert_eq!(result.eddington, 3);
        assert_eq!(result.next, 4);
        // only 5 and 4 reach 4
        assert_eq!(result.needed_for_next, 2);
    }

    #[test]
    fn test_identical_distances() {
        assert_eq!(calculate_eddington(&[1.0, 1.0, 1.0]).eddington, 1);
        assert_eq!(calculate_eddington(&[10.0; 4]).eddington, 4);
        assert_eq!(calculate_eddington(&[10.0; 4]).needed_for_next, 1);
    }

    #[test]
    fn test_nan_never_qualifies() {
        let result = calculate_eddington(&[f64::NAN, 2.0, 2.0]);
        assert_eq!(result.eddington, 2);
    }
}
