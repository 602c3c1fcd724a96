// ABOUTME: Environment configuration for analysis runs via CYCLEWISE_* variables
// ABOUTME: Parses toggles, symptom and influence lists, and a fixed analysis date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! Environment-based configuration
//!
//! Every variable is optional. Values that are present but malformed are a
//! configuration error rather than being silently ignored.

use chrono::NaiveDate;
use cyclewise_core::models::{Influence, SymptomKey, TrackingSettings};
use std::collections::BTreeSet;
use std::env;
use std::str::FromStr;
use tracing::debug;

use crate::constants::env_config;
use crate::errors::{AppError, AppResult};

/// Settings overrides read from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineEnvironment {
    /// `CYCLEWISE_CYCLE_TRACKING`
    pub cycle_tracking: Option<bool>,
    /// `CYCLEWISE_FERTILITY_MODE`
    pub fertility_mode: Option<bool>,
    /// `CYCLEWISE_ENABLED_SYMPTOMS`, comma-separated
    pub enabled_symptoms: Option<BTreeSet<SymptomKey>>,
    /// `CYCLEWISE_TRACKED_INFLUENCES`, comma-separated
    pub tracked_influences: Option<BTreeSet<Influence>>,
    /// `CYCLEWISE_TODAY`, fixes the analysis date for reproducible runs
    pub today: Option<NaiveDate>,
}

impl EngineEnvironment {
    /// Read configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set to an unparseable value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set to an unparseable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let config = Self {
            cycle_tracking: lookup(env_config::CYCLE_TRACKING)
                .map(|raw| parse_bool(env_config::CYCLE_TRACKING, &raw))
                .transpose()?,
            fertility_mode: lookup(env_config::FERTILITY_MODE)
                .map(|raw| parse_bool(env_config::FERTILITY_MODE, &raw))
                .transpose()?,
            enabled_symptoms: lookup(env_config::ENABLED_SYMPTOMS)
                .map(|raw| parse_list(env_config::ENABLED_SYMPTOMS, &raw))
                .transpose()?,
            tracked_influences: lookup(env_config::TRACKED_INFLUENCES)
                .map(|raw| parse_list(env_config::TRACKED_INFLUENCES, &raw))
                .transpose()?,
            today: lookup(env_config::TODAY)
                .map(|raw| parse_date(env_config::TODAY, &raw))
                .transpose()?,
        };
        debug!(?config, "Loaded environment configuration");
        Ok(config)
    }

    /// Apply the overrides that are set on top of `settings`
    #[must_use]
    pub fn apply(&self, mut settings: TrackingSettings) -> TrackingSettings {
        if let Some(cycle_tracking) = self.cycle_tracking {
            settings.cycle_tracking = cycle_tracking;
        }
        if let Some(fertility_mode) = self.fertility_mode {
            settings.fertility_mode = fertility_mode;
        }
        if let Some(symptoms) = &self.enabled_symptoms {
            settings.enabled_symptoms.clone_from(symptoms);
        }
        if let Some(influences) = &self.tracked_influences {
            settings.tracked_influences.clone_from(influences);
        }
        settings
    }

    /// Analysis date: the configured one, else `fallback`
    #[must_use]
    pub fn today_or(&self, fallback: NaiveDate) -> NaiveDate {
        self.today.unwrap_or(fallback)
    }
}

fn parse_bool(name: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config_invalid(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}

fn parse_list<T>(name: &str, raw: &str) -> AppResult<BTreeSet<T>>
where
    T: FromStr<Err = AppError> + Ord,
{
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<T>()
                .map_err(|err| AppError::config_invalid(format!("{name}: {}", err.message)))
        })
        .collect()
}

fn parse_date(name: &str, raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|err| {
        AppError::config_invalid(format!("{name} must be YYYY-MM-DD, got '{raw}'")).with_source(err)
    })
}
