// ABOUTME: Entry-log and settings import from JSON files, plus writing edited logs back
// ABOUTME: Accepts a bare entry array or an object with an entries array; skips unreadable records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use cyclewise_core::models::{RawDailyEntry, TrackingSettings};
use cyclewise_intelligence::EntryLog;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Parse stored entries from JSON text.
///
/// The document is either an array of entries or an object with an `entries`
/// array. Records that do not deserialize are skipped with a warning.
///
/// # Errors
///
/// Returns an error when the text is not JSON or has neither shape
pub fn parse_entries(text: &str) -> AppResult<Vec<RawDailyEntry>> {
    let document: Value = serde_json::from_str(text)?;
    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove("entries") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(AppError::invalid_format(
                    "expected an array of entries or an object with an 'entries' array",
                ))
            }
        },
        _ => {
            return Err(AppError::invalid_format(
                "expected an array of entries or an object with an 'entries' array",
            ))
        }
    };

    let total = records.len();
    let entries: Vec<RawDailyEntry> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(index, error = %err, "Skipping unreadable entry record");
                None
            }
        })
        .collect();
    debug!(total, kept = entries.len(), "Parsed entry records");
    Ok(entries)
}

/// Read stored entries from a JSON file
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed
pub fn load_entries(path: &Path) -> AppResult<Vec<RawDailyEntry>> {
    let text = fs::read_to_string(path)
        .map_err(|err| AppError::from(err).with_context_path(path))?;
    parse_entries(&text)
}

/// Read and normalize a JSON entry file
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed
pub fn load_log(path: &Path) -> AppResult<EntryLog> {
    load_entries(path).map(|entries| EntryLog::from_raw(&entries))
}

/// Read `TrackingSettings` from a JSON file; missing fields take defaults
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not valid settings JSON
pub fn load_settings(path: &Path) -> AppResult<TrackingSettings> {
    let text = fs::read_to_string(path)
        .map_err(|err| AppError::from(err).with_context_path(path))?;
    serde_json::from_str(&text).map_err(|err| {
        AppError::config_invalid(format!("{}: {err}", path.display())).with_source(err)
    })
}

/// Write entries as pretty-printed JSON
///
/// # Errors
///
/// Returns an error when serialization or the write fails
pub fn write_entries(path: &Path, entries: &[RawDailyEntry]) -> AppResult<()> {
    let text = serde_json::to_string_pretty(entries)?;
    fs::write(path, text + "\n").map_err(|err| AppError::from(err).with_context_path(path))
}

trait PathContext {
    fn with_context_path(self, path: &Path) -> Self;
}

impl PathContext for AppError {
    fn with_context_path(mut self, path: &Path) -> Self {
        self.message = format!("{}: {}", path.display(), self.message);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_and_bare_documents() {
        let bare = parse_entries(r#"[{"dateISO": "2024-01-01", "symptoms": {"flow": 5}}]"#).unwrap();
        let wrapped =
            parse_entries(r#"{"entries": [{"dateISO": "2024-01-01", "symptoms": {"flow": 5}}]}"#)
                .unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_unreadable_records_are_skipped() {
        let entries = parse_entries(r#"[{"dateISO": "2024-01-01"}, {"mood": 2}, 17]"#).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(parse_entries(r#"{"days": []}"#).is_err());
        assert!(parse_entries("not json").is_err());
    }
}
