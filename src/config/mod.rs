// ABOUTME: Configuration module combining settings files with environment overrides
// ABOUTME: Resolves the effective TrackingSettings and analysis date for a run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! Configuration for Cyclewise runs
//!
//! - **Environment**: `CYCLEWISE_*` overrides ([`environment::EngineEnvironment`])
//! - **Settings file**: `TrackingSettings` JSON, explicit or from the user config dir

use chrono::NaiveDate;
use cyclewise_core::models::TrackingSettings;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::service_names;
use crate::errors::AppResult;
use crate::import;

/// Environment variable configuration
pub mod environment;

pub use environment::EngineEnvironment;

/// File name looked up in the per-user config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default settings location, e.g. `~/.config/cyclewise/settings.json`
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(service_names::CYCLEWISE).join(SETTINGS_FILE_NAME))
}

/// Effective configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Settings after file and environment layering
    pub settings: TrackingSettings,
    /// Date to analyze
    pub today: NaiveDate,
}

impl RunConfig {
    /// Resolve settings and date.
    ///
    /// Precedence, lowest first: defaults, settings file (explicit path, else
    /// the default location when it exists), environment, then an explicit
    /// `today` argument.
    ///
    /// # Errors
    ///
    /// Returns an error when the settings file cannot be read or parsed, or
    /// when the environment holds invalid values
    pub fn resolve(
        settings_path: Option<&Path>,
        today: Option<NaiveDate>,
        env: &EngineEnvironment,
        fallback_today: NaiveDate,
    ) -> AppResult<Self> {
        let base = match settings_path {
            Some(path) => import::load_settings(path)?,
            None => match default_settings_path().filter(|path| path.is_file()) {
                Some(path) => {
                    debug!(path = %path.display(), "Using default settings file");
                    import::load_settings(&path)?
                }
                None => TrackingSettings::default(),
            },
        };

        let settings = env.apply(base);
        let today = today.unwrap_or_else(|| env.today_or(fallback_today));
        info!(
            %today,
            cycle_tracking = settings.cycle_tracking,
            fertility_mode = settings.fertility_mode,
            enabled_symptoms = settings.enabled_symptoms.len(),
            "Run configuration resolved"
        );
        Ok(Self { settings, today })
    }
}
