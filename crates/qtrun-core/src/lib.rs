// ABOUTME: Core types and constants for the QT.run training analytics engine
// ABOUTME: Foundation crate with error handling, unit configuration, constants and models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

#![deny(unsafe_code)]

//! # QT.run Core
//!
//! Foundation crate providing shared types and constants for the analytics
//! engine. It changes infrequently so the calculation crate and the binary can
//! compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors and physiological parameters
//! - **config**: The `UnitSystem` measurement preference
//! - **models**: `ActivityMetrics`, provider `ActivityRecord`, `RaceCandidate`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Measurement preferences shared by every crate
pub mod config;

/// Core data models
pub mod models;
