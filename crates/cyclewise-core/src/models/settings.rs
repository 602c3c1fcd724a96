// ABOUTME: User tracking settings consumed by the pattern engine
// ABOUTME: Cycle tracking and fertility toggles, enabled symptoms, influences, manual ovulation dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::entry::{Influence, SymptomKey};

const fn default_true() -> bool {
    true
}

fn all_symptoms() -> BTreeSet<SymptomKey> {
    SymptomKey::ALL.into_iter().collect()
}

fn all_influences() -> BTreeSet<Influence> {
    Influence::ALL.into_iter().collect()
}

/// Settings bag that shapes an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSettings {
    /// Cycle tracking on; when off the phase comes from symptom signals only
    #[serde(default = "default_true")]
    pub cycle_tracking: bool,
    /// Fertility mode on; when off no fertile window is reported
    #[serde(default)]
    pub fertility_mode: bool,
    /// Symptom modules the user has enabled
    #[serde(default = "all_symptoms")]
    pub enabled_symptoms: BTreeSet<SymptomKey>,
    /// Influences considered for relationship signals
    #[serde(default = "all_influences")]
    pub tracked_influences: BTreeSet<Influence>,
    /// Ovulation dates marked outside the daily log
    #[serde(default)]
    pub manual_ovulation_dates: BTreeSet<NaiveDate>,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            cycle_tracking: true,
            fertility_mode: false,
            enabled_symptoms: all_symptoms(),
            tracked_influences: all_influences(),
            manual_ovulation_dates: BTreeSet::new(),
        }
    }
}

impl TrackingSettings {
    /// Whether a symptom module is enabled
    #[must_use]
    pub fn is_enabled(&self, key: SymptomKey) -> bool {
        self.enabled_symptoms.contains(&key)
    }
}
