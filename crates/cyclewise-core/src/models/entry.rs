// ABOUTME: Daily entry models at the storage boundary and after normalization
// ABOUTME: Symptom and influence catalogs, mood ordinal, RawDailyEntry, and DailyEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Lowercases a key and drops separators so `brainFog`, `brain_fog` and
/// `brain-fog` compare equal.
fn canonical_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Self-reported symptom dimensions, all on a 0-10 intensity scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomKey {
    /// Menstrual flow intensity
    Flow,
    /// Energy level
    Energy,
    /// Motivation
    Motivation,
    /// Sleep quality
    Sleep,
    /// Stress
    Stress,
    /// Anxiety
    Anxiety,
    /// Irritability
    Irritability,
    /// Brain fog
    BrainFog,
    /// Fatigue
    Fatigue,
    /// Libido
    Libido,
    /// Digestive discomfort
    Digestion,
    /// Bloating
    Bloating,
    /// Cramps
    Cramps,
    /// Headache
    Headache,
    /// Breast tenderness
    BreastTenderness,
    /// Night sweats
    NightSweats,
    /// Hot flushes
    HotFlushes,
    /// Skin changes
    Skin,
    /// Hair changes
    Hair,
}

impl SymptomKey {
    /// Every symptom key in catalog order
    pub const ALL: [Self; 19] = [
        Self::Flow,
        Self::Energy,
        Self::Motivation,
        Self::Sleep,
        Self::Stress,
        Self::Anxiety,
        Self::Irritability,
        Self::BrainFog,
        Self::Fatigue,
        Self::Libido,
        Self::Digestion,
        Self::Bloating,
        Self::Cramps,
        Self::Headache,
        Self::BreastTenderness,
        Self::NightSweats,
        Self::HotFlushes,
        Self::Skin,
        Self::Hair,
    ];

    /// Stable snake_case key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Energy => "energy",
            Self::Motivation => "motivation",
            Self::Sleep => "sleep",
            Self::Stress => "stress",
            Self::Anxiety => "anxiety",
            Self::Irritability => "irritability",
            Self::BrainFog => "brain_fog",
            Self::Fatigue => "fatigue",
            Self::Libido => "libido",
            Self::Digestion => "digestion",
            Self::Bloating => "bloating",
            Self::Cramps => "cramps",
            Self::Headache => "headache",
            Self::BreastTenderness => "breast_tenderness",
            Self::NightSweats => "night_sweats",
            Self::HotFlushes => "hot_flushes",
            Self::Skin => "skin",
            Self::Hair => "hair",
        }
    }

    /// Lowercase label for sentences
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Energy => "energy",
            Self::Motivation => "motivation",
            Self::Sleep => "sleep",
            Self::Stress => "stress",
            Self::Anxiety => "anxiety",
            Self::Irritability => "irritability",
            Self::BrainFog => "brain fog",
            Self::Fatigue => "fatigue",
            Self::Libido => "libido",
            Self::Digestion => "digestion",
            Self::Bloating => "bloating",
            Self::Cramps => "cramps",
            Self::Headache => "headaches",
            Self::BreastTenderness => "breast tenderness",
            Self::NightSweats => "night sweats",
            Self::HotFlushes => "hot flushes",
            Self::Skin => "skin changes",
            Self::Hair => "hair changes",
        }
    }

    /// Parse a stored key, tolerant of camelCase and separators
    #[must_use]
    pub fn from_key(raw: &str) -> Option<Self> {
        let wanted = canonical_key(raw);
        Self::ALL
            .into_iter()
            .find(|key| canonical_key(key.as_str()) == wanted)
    }
}

impl fmt::Display for SymptomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| AppError::invalid_input(format!("unknown symptom key '{s}'")))
    }
}

/// Lifestyle influences a user can log for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Influence {
    /// Caffeine intake
    Caffeine,
    /// Alcohol intake
    Alcohol,
    /// Exercise
    Exercise,
    /// Travel
    Travel,
    /// Work stress
    WorkStress,
    /// Late night
    LateNight,
    /// Illness
    Illness,
}

impl Influence {
    /// Every influence in catalog order
    pub const ALL: [Self; 7] = [
        Self::Caffeine,
        Self::Alcohol,
        Self::Exercise,
        Self::Travel,
        Self::WorkStress,
        Self::LateNight,
        Self::Illness,
    ];

    /// Stable snake_case key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Caffeine => "caffeine",
            Self::Alcohol => "alcohol",
            Self::Exercise => "exercise",
            Self::Travel => "travel",
            Self::WorkStress => "work_stress",
            Self::LateNight => "late_night",
            Self::Illness => "illness",
        }
    }

    /// Phrase used in relationship sentences ("on days with ...")
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Caffeine => "caffeine",
            Self::Alcohol => "alcohol",
            Self::Exercise => "exercise",
            Self::Travel => "travel",
            Self::WorkStress => "work stress",
            Self::LateNight => "a late night",
            Self::Illness => "illness",
        }
    }

    /// Parse a stored key, tolerant of camelCase and separators
    #[must_use]
    pub fn from_key(raw: &str) -> Option<Self> {
        let wanted = canonical_key(raw);
        Self::ALL
            .into_iter()
            .find(|influence| canonical_key(influence.as_str()) == wanted)
    }
}

impl fmt::Display for Influence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Influence {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| AppError::invalid_input(format!("unknown influence '{s}'")))
    }
}

/// Mood ordinal (1-3). Never rescaled by the legacy intensity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Ordinal 1
    Low,
    /// Ordinal 2
    Okay,
    /// Ordinal 3
    Good,
}

impl Mood {
    /// Map an ordinal to a mood, `None` outside 1-3
    #[must_use]
    pub const fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Low),
            2 => Some(Self::Okay),
            3 => Some(Self::Good),
            _ => None,
        }
    }

    /// Ordinal value (1-3)
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Okay => 2,
            Self::Good => 3,
        }
    }

    /// Mood placed on the 0-10 intensity scale so it can sit next to symptoms
    #[must_use]
    pub const fn as_intensity(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Okay => 5.0,
            Self::Good => 10.0,
        }
    }
}

/// Lifestyle events as stored: either a list of names or a name -> flag map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEvents {
    /// `["caffeine", "travel"]`
    List(Vec<String>),
    /// `{"caffeine": true, "travel": false}`
    Flags(BTreeMap<String, bool>),
}

impl Default for RawEvents {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl RawEvents {
    /// Names of the events that were logged as present
    pub fn present(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::List(names) => Box::new(names.iter().map(String::as_str)),
            Self::Flags(flags) => Box::new(
                flags
                    .iter()
                    .filter(|(_, present)| **present)
                    .map(|(name, _)| name.as_str()),
            ),
        }
    }
}

/// A daily record exactly as the storage layer hands it over.
///
/// Symptom values may be on the legacy 0-100 scale, strings, or null; the
/// normalizer decides what they mean. Nothing here is ever rewritten in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDailyEntry {
    /// Calendar date, `YYYY-MM-DD`
    #[serde(rename = "dateISO", alias = "date")]
    pub date_iso: String,
    /// Mood ordinal as stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Value>,
    /// Symptom key -> intensity as stored
    #[serde(default)]
    pub symptoms: BTreeMap<String, Value>,
    /// User asserted "today is day 1"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_start_override: Option<bool>,
    /// User asked to ignore this bleeding for start detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakthrough_bleed: Option<bool>,
    /// User marked this day as ovulation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ovulation_override: Option<bool>,
    /// Lifestyle influences logged for the day
    #[serde(default)]
    pub events: RawEvents,
}

impl RawDailyEntry {
    /// Empty record for a date
    pub fn new(date_iso: impl Into<String>) -> Self {
        Self {
            date_iso: date_iso.into(),
            ..Self::default()
        }
    }

    /// Set a symptom value (builder style)
    #[must_use]
    pub fn with_symptom(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.symptoms.insert(key.into(), value.into());
        self
    }

    /// Set the flow value (builder style)
    #[must_use]
    pub fn with_flow(self, value: impl Into<Value>) -> Self {
        self.with_symptom(SymptomKey::Flow.as_str(), value)
    }

    /// Set the mood ordinal (builder style)
    #[must_use]
    pub fn with_mood(mut self, value: impl Into<Value>) -> Self {
        self.mood = Some(value.into());
        self
    }

    /// Mark as cycle start (builder style)
    #[must_use]
    pub fn with_cycle_start_override(mut self) -> Self {
        self.cycle_start_override = Some(true);
        self
    }

    /// Mark as breakthrough bleed (builder style)
    #[must_use]
    pub fn with_breakthrough_bleed(mut self) -> Self {
        self.breakthrough_bleed = Some(true);
        self
    }

    /// Mark as ovulation day (builder style)
    #[must_use]
    pub fn with_ovulation_override(mut self) -> Self {
        self.ovulation_override = Some(true);
        self
    }

    /// Log an influence (builder style)
    #[must_use]
    pub fn with_event(mut self, influence: Influence) -> Self {
        let name = influence.as_str().to_owned();
        match &mut self.events {
            RawEvents::List(names) => names.push(name),
            RawEvents::Flags(flags) => {
                flags.insert(name, true);
            }
        }
        self
    }

    /// Parsed date, `None` when malformed
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_iso.trim(), "%Y-%m-%d").ok()
    }
}

/// A daily record after normalization: every intensity is in [0, 10]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Calendar date (unique within a log)
    pub date: NaiveDate,
    /// Mood ordinal
    pub mood: Option<Mood>,
    /// Present symptoms only; absent values are not stored as zero
    pub symptoms: BTreeMap<SymptomKey, f64>,
    /// User asserted "today is day 1"
    pub cycle_start_override: bool,
    /// User asked to ignore this bleeding for start detection
    pub breakthrough_bleed: bool,
    /// User marked this day as ovulation
    pub ovulation_override: bool,
    /// Lifestyle influences logged for the day
    pub events: BTreeSet<Influence>,
}

impl DailyEntry {
    /// Entry for a date with nothing logged
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            symptoms: BTreeMap::new(),
            cycle_start_override: false,
            breakthrough_bleed: false,
            ovulation_override: false,
            events: BTreeSet::new(),
        }
    }

    /// Normalized value for a symptom, if logged
    #[must_use]
    pub fn symptom(&self, key: SymptomKey) -> Option<f64> {
        self.symptoms.get(&key).copied()
    }

    /// Normalized flow, if logged
    #[must_use]
    pub fn flow(&self) -> Option<f64> {
        self.symptom(SymptomKey::Flow)
    }

    /// Whether an influence was logged
    #[must_use]
    pub fn has_event(&self, influence: Influence) -> bool {
        self.events.contains(&influence)
    }

    /// ISO date string
    #[must_use]
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
