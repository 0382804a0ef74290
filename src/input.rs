// ABOUTME: Loads provider activity records from JSON exports
// ABOUTME: Accepts a bare array or an object with an "activities" array
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

use qtrun_core::errors::{AppError, AppResult};
use qtrun_core::models::ActivityRecord;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum ActivityExport {
    Bare(Vec<ActivityRecord>),
    Wrapped { activities: Vec<ActivityRecord> },
}

/// Parse activity records from JSON text
///
/// # Errors
///
/// Returns `INVALID_FORMAT` when the text is not a list of records
pub fn parse_activity_records(json: &str) -> AppResult<Vec<ActivityRecord>> {
    let export: ActivityExport = serde_json::from_str(json).map_err(|e| {
        AppError::invalid_format(format!("expected a JSON array of activities: {e}"))
            .with_source(e)
    })?;

    Ok(match export {
        ActivityExport::Bare(records) | ActivityExport::Wrapped { activities: records } => records,
    })
}

/// Read and parse an activity export file
///
/// # Errors
///
/// Returns `RESOURCE_NOT_FOUND` or `STORAGE_ERROR` when the file cannot be
/// read, and a format error when it does not parse
pub fn load_activity_records(path: &Path) -> AppResult<Vec<ActivityRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_details(serde_json::json!({ "path": path.display().to_string() }))
    })?;
    let records = parse_activity_records(&contents)?;
    debug!(path = %path.display(), count = records.len(), "Loaded activity records");
    Ok(records)
}
