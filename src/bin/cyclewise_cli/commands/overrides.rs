// ABOUTME: Cycle start override commands for cyclewise-cli
// ABOUTME: Marks or clears a start override on stored records and writes the edited log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use chrono::NaiveDate;
use cyclewise::errors::AppResult;
use cyclewise::import;
use cyclewise::OverrideNormalizer;
use std::path::Path;
use tracing::info;

use crate::helpers::display::display_override_change;

/// Mark `date` as the only cycle start override
pub fn mark(log_path: &Path, date: NaiveDate, output: Option<&Path>) -> AppResult<()> {
    let entries = import::load_entries(log_path)?;
    let updated = OverrideNormalizer::set_cycle_start_override_raw(&entries, date);
    let target = output.unwrap_or(log_path);
    import::write_entries(target, &updated)?;
    info!(%date, path = %target.display(), "Cycle start override set");
    display_override_change(date, true, target);
    Ok(())
}

/// Remove the cycle start override on `date`
pub fn clear(log_path: &Path, date: NaiveDate, output: Option<&Path>) -> AppResult<()> {
    let entries = import::load_entries(log_path)?;
    let updated = OverrideNormalizer::clear_cycle_start_override_raw(&entries, date);
    let target = output.unwrap_or(log_path);
    import::write_entries(target, &updated)?;
    info!(%date, path = %target.display(), "Cycle start override cleared");
    display_override_change(date, false, target);
    Ok(())
}
