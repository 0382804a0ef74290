// ABOUTME: Configuration management module for the analytics engine
// ABOUTME: Environment-driven settings for units, athlete heart rate and race detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

/// Environment and analytics configuration
pub mod environment;

pub use environment::{AnalyticsConfig, AthleteConfig, Environment};
pub use qtrun_core::config::UnitSystem;
