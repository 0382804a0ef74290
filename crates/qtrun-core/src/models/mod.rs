// ABOUTME: Core data models for the analytics engine
// ABOUTME: Re-exports ActivityMetrics, provider ActivityRecord and RaceCandidate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

//! # Data Models
//!
//! Value types consumed by the metric calculations. They are built fresh for
//! every computation and never persisted by this workspace.
//!
//! - `ActivityMetrics`: strict per-activity input with optional sensor fields
//! - `ActivityRecord`: loosely-typed provider record, converted at the boundary
//! - `RaceCandidate`: input to race detection

mod activity;
mod race;
mod record;

pub use activity::{ActivityMetrics, ActivityMetricsBuilder};
pub use race::RaceCandidate;
pub use record::{ActivityId, ActivityRecord};
