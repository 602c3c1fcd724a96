// ABOUTME: Starts command for cyclewise-cli
// ABOUTME: Prints the detected cycle start dates and the gaps between them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use cyclewise::errors::AppResult;
use cyclewise::import;
use cyclewise::CycleStartDetector;
use std::path::Path;

use crate::helpers::display::display_starts;

/// Detect and print cycle starts
pub fn run(log_path: &Path) -> AppResult<()> {
    let log = import::load_log(log_path)?;
    let starts = CycleStartDetector::detect(&log);
    display_starts(&starts);
    Ok(())
}
