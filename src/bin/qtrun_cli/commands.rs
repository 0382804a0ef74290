// ABOUTME: Subcommand implementations for qtrun-cli
// ABOUTME: Loads activity exports, builds reports and prints them as pretty JSON

use anyhow::{bail, Context, Result};
use qtrun::config::AnalyticsConfig;
use qtrun::input::load_activity_records;
use qtrun::qtrun_core::models::ActivityRecord;
use qtrun::report::{
    build_activity_reports, build_eddington_report, build_race_report, build_zone_report,
};
use serde::Serialize;
use std::path::Path;

fn load(file: &Path) -> Result<Vec<ActivityRecord>> {
    load_activity_records(file)
        .with_context(|| format!("Failed to load activities from {}", file.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

pub fn analyze(file: &Path, config: &AnalyticsConfig) -> Result<()> {
    let records = load(file)?;
    print_json(&build_activity_reports(&records, config))
}

pub fn eddington(file: &Path, config: &AnalyticsConfig) -> Result<()> {
    let records = load(file)?;
    print_json(&build_eddington_report(&records, config.unit_system))
}

pub fn races(file: &Path, config: &AnalyticsConfig, threshold: Option<f64>) -> Result<()> {
    let threshold = threshold.unwrap_or(config.race_confidence_threshold);
    if !(0.0..=1.0).contains(&threshold) {
        bail!("--threshold must be between 0.0 and 1.0, got {threshold}");
    }
    let records = load(file)?;
    print_json(&build_race_report(&records, threshold))
}

pub fn zones(config: &AnalyticsConfig) -> Result<()> {
    print_json(&build_zone_report(config.athlete.effective_max_hr()))
}
