// ABOUTME: Entry normalization boundary converting stored records into the 0-10 domain
// ABOUTME: Handles legacy 0-100 values, lenient numeric parsing, mood ordinals, and EntryLog assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! Entry Normalizer
//!
//! This is the only place where intensity scales are reconciled. Historical
//! records may carry 0-100 values next to current 0-10 values; they are
//! rescaled here on read and the stored records are left untouched. Every
//! other component works on [`EntryLog`] and can assume values in [0, 10].

use chrono::NaiveDate;
use cyclewise_core::constants::scales::{
    INTENSITY_MAX, INTENSITY_MIN, LEGACY_SCALE_DIVISOR, MOOD_MAX, MOOD_MIN,
};
use cyclewise_core::models::{DailyEntry, Influence, Mood, RawDailyEntry, SymptomKey};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::slice;
use tracing::{debug, warn};

/// Bring a finite raw intensity onto the 0-10 scale.
///
/// Magnitudes above 10 are legacy 0-100 values: divided by 10 and rounded
/// to the nearest integer. The result is clamped to [0, 10], so applying
/// this to an already-normalized value is a no-op.
#[must_use]
pub fn normalize_intensity(raw: f64) -> f64 {
    let rescaled = if raw.abs() > INTENSITY_MAX {
        (raw / LEGACY_SCALE_DIVISOR).round()
    } else {
        raw
    };
    rescaled.clamp(INTENSITY_MIN, INTENSITY_MAX)
}

/// Interpret a stored symptom value, `None` when it is not usable.
///
/// Numbers and numeric strings are accepted; anything else (null, bools,
/// text, non-finite numbers) is absent rather than zero.
#[must_use]
pub fn normalize_value(value: &Value, key: SymptomKey) -> Option<f64> {
    let raw = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|raw| raw.is_finite());

    if raw.is_none() && !value.is_null() {
        debug!(symptom = %key, value = %value, "Ignoring non-numeric symptom value");
    }
    raw.map(normalize_intensity)
}

/// Interpret a stored mood. Mood is a fixed 1-3 ordinal and is never rescaled.
#[must_use]
pub fn normalize_mood(value: &Value) -> Option<Mood> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .filter(|raw| raw.fract() == 0.0 && (f64::from(MOOD_MIN)..=f64::from(MOOD_MAX)).contains(raw))
            .and_then(|raw| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let ordinal = raw as u8;
                Mood::from_ordinal(ordinal)
            }),
        Value::String(text) => match text.trim().to_lowercase().as_str() {
            "low" | "1" => Some(Mood::Low),
            "okay" | "ok" | "2" => Some(Mood::Okay),
            "good" | "3" => Some(Mood::Good),
            _ => None,
        },
        _ => None,
    }
}

/// Converts storage records into normalized entries
pub struct EntryNormalizer;

impl EntryNormalizer {
    /// Normalize one stored record; `None` when its date is malformed
    #[must_use]
    pub fn normalize_entry(raw: &RawDailyEntry) -> Option<DailyEntry> {
        let Some(date) = raw.date() else {
            warn!(date_iso = %raw.date_iso, "Skipping entry with malformed date");
            return None;
        };

        let mut symptoms = BTreeMap::new();
        for (name, value) in &raw.symptoms {
            match SymptomKey::from_key(name) {
                Some(key) => {
                    if let Some(intensity) = normalize_value(value, key) {
                        symptoms.insert(key, intensity);
                    }
                }
                None => debug!(symptom = %name, %date, "Ignoring unknown symptom key"),
            }
        }

        let events: BTreeSet<Influence> = raw
            .events
            .present()
            .filter_map(|name| {
                let influence = Influence::from_key(name);
                if influence.is_none() {
                    debug!(event = %name, %date, "Ignoring unknown influence");
                }
                influence
            })
            .collect();

        Some(DailyEntry {
            date,
            mood: raw.mood.as_ref().and_then(normalize_mood),
            symptoms,
            cycle_start_override: raw.cycle_start_override.unwrap_or(false),
            breakthrough_bleed: raw.breakthrough_bleed.unwrap_or(false),
            ovulation_override: raw.ovulation_override.unwrap_or(false),
            events,
        })
    }
}

/// Immutable, date-sorted, date-unique view of a user's history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntryLog {
    entries: Vec<DailyEntry>,
}

impl EntryLog {
    /// Normalize stored records into a log. Malformed dates are skipped; if
    /// two records share a date the later one in input order wins.
    #[must_use]
    pub fn from_raw(raw: &[RawDailyEntry]) -> Self {
        Self::from_entries(raw.iter().filter_map(EntryNormalizer::normalize_entry))
    }

    /// Build a log from already-normalized entries (sorted and deduplicated here)
    pub fn from_entries(entries: impl IntoIterator<Item = DailyEntry>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, DailyEntry> = BTreeMap::new();
        for entry in entries {
            let date = entry.date;
            if by_date.insert(date, entry).is_some() {
                warn!(%date, "Duplicate entry for date; keeping the later record");
            }
        }
        Self {
            entries: by_date.into_values().collect(),
        }
    }

    /// Entries in ascending date order
    #[must_use]
    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    /// Iterate entries in ascending date order
    pub fn iter(&self) -> slice::Iter<'_, DailyEntry> {
        self.entries.iter()
    }

    /// Number of distinct logged days
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a specific date
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.entries
            .binary_search_by_key(&date, |entry| entry.date)
            .ok()
            .map(|index| &self.entries[index])
    }

    /// Entries dated on or before `date`
    #[must_use]
    pub fn up_to(&self, date: NaiveDate) -> &[DailyEntry] {
        let end = self.entries.partition_point(|entry| entry.date <= date);
        &self.entries[..end]
    }

    /// Entries dated within `[start, end]`
    #[must_use]
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> &[DailyEntry] {
        let from = self.entries.partition_point(|entry| entry.date < start);
        let to = self.entries.partition_point(|entry| entry.date <= end);
        if from >= to {
            &[]
        } else {
            &self.entries[from..to]
        }
    }

    /// Copy of the log without anything after `date`
    #[must_use]
    pub fn truncated_to(&self, date: NaiveDate) -> Self {
        Self {
            entries: self.up_to(date).to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a EntryLog {
    type Item = &'a DailyEntry;
    type IntoIter = slice::Iter<'a, DailyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
