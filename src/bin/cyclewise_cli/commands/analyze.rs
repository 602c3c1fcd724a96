// ABOUTME: Analyze command for cyclewise-cli
// ABOUTME: Loads the log and settings, runs the engine, and prints text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use chrono::{Local, NaiveDate};
use cyclewise::config::{EngineEnvironment, RunConfig};
use cyclewise::errors::AppResult;
use cyclewise::import;
use cyclewise::CycleEngine;
use std::path::Path;
use tracing::info;

use crate::helpers::display::display_report;

/// Run the engine over a log file
pub fn run(
    log_path: &Path,
    settings_path: Option<&Path>,
    today: Option<NaiveDate>,
    json: bool,
) -> AppResult<()> {
    let env = EngineEnvironment::from_env()?;
    let config = RunConfig::resolve(settings_path, today, &env, Local::now().date_naive())?;
    let log = import::load_log(log_path)?;
    info!(path = %log_path.display(), entries = log.len(), "Loaded entry log");

    let report = CycleEngine::analyze(&log, &config.settings, config.today);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }
    Ok(())
}
