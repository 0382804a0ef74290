// ABOUTME: QT.run CLI - training analytics over exported activity files
// ABOUTME: Prints activity analysis, Eddington numbers, detected races and HR zones as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run
//!
//! Usage:
//! ```bash
//! # Analyze every activity in an export
//! qtrun-cli analyze activities.json --max-hr 188
//!
//! # Eddington number in miles
//! qtrun-cli eddington activities.json --units imperial
//!
//! # Likely races with at least 0.6 confidence
//! qtrun-cli races activities.json --threshold 0.6
//!
//! # Zone table from age
//! qtrun-cli zones --age 42
//! ```

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qtrun::config::{AnalyticsConfig, UnitSystem};
use qtrun::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "qtrun-cli",
    about = "QT.run training analytics",
    long_about = "Computes training load, heart rate zones, HR drift, Eddington numbers and race detection from exported activities."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Unit system override (metric or imperial)
    #[arg(long, global = true)]
    units: Option<UnitSystem>,

    /// Athlete max heart rate override in bpm
    #[arg(long, global = true)]
    max_hr: Option<u32>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze each activity in an export file
    Analyze {
        /// JSON export of activities
        file: PathBuf,
    },

    /// Compute the Eddington number
    Eddington {
        /// JSON export of activities
        file: PathBuf,
    },

    /// Detect likely races
    Races {
        /// JSON export of activities
        file: PathBuf,

        /// Minimum confidence to report (0.0 to 1.0)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Print the heart rate zone table
    Zones {
        /// Athlete age, used when no max HR is set
        #[arg(long)]
        age: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config =
        AnalyticsConfig::from_env().context("Failed to load analytics configuration")?;
    if let Some(units) = cli.units {
        config.unit_system = units;
    }
    if let Some(max_hr) = cli.max_hr {
        config.athlete.max_hr = Some(max_hr);
    }
    debug!(units = %config.unit_system, max_hr = ?config.athlete.max_hr, "CLI overrides applied");

    match cli.command {
        Command::Analyze { file } => commands::analyze(&file, &config),
        Command::Eddington { file } => commands::eddington(&file, &config),
        Command::Races { file, threshold } => commands::races(&file, &config, threshold),
        Command::Zones { age } => {
            if let Some(age) = age {
                config.athlete.age = Some(age);
            }
            commands::zones(&config)
        }
    }
}
