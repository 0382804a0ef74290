// ABOUTME: Main library entry point for the QT.run training analytics engine
// ABOUTME: Wires configuration, logging and activity input around the metrics crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

#![deny(unsafe_code)]

//! # QT.run Analytics
//!
//! Training metrics for endurance activities: unit conversion, heart rate
//! zones, TRIMP, HR drift, the Eddington number and race detection.
//!
//! The calculations live in [`qtrun_intelligence`] and operate on the types in
//! [`qtrun_core`]. This crate adds the environment configuration, logging
//! setup, JSON activity input and the report builders behind `qtrun-cli`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use qtrun::config::AnalyticsConfig;
//! use qtrun::errors::AppResult;
//! use qtrun::input::parse_activity_records;
//! use qtrun::report::build_race_report;
//!
//! fn main() -> AppResult<()> {
//!     let config = AnalyticsConfig::from_env()?;
//!     let records = parse_activity_records(
//!         r#"[{"id": 1, "name": "Boston Marathon 2024", "distance": 42250.0}]"#,
//!     )?;
//!
//!     for race in build_race_report(&records, config.race_confidence_threshold) {
//!         println!("{} ({:.2})", race.activity_name, race.confidence);
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Unified error types
pub mod errors;

/// Activity export loading
pub mod input;

/// Structured logging setup
pub mod logging;

/// Report builders for CLI output
pub mod report;

pub use qtrun_core;
pub use qtrun_intelligence;
