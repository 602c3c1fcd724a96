// ABOUTME: Benchmark fixtures generating realistic multi-year daily entry logs
// ABOUTME: Deterministic cycles, symptoms, moods, and influences for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! Benchmark fixtures for generating synthetic tracking histories.

use chrono::{Duration, NaiveDate};
use cyclewise::{Influence, RawDailyEntry};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// Three months of daily logging
    Quarter,
    /// One year of daily logging
    Year,
    /// Five years of daily logging
    FiveYears,
}

impl HistorySize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Quarter => 90,
            Self::Year => 365,
            Self::FiveYears => 5 * 365,
        }
    }
}

/// First day of every generated history
#[must_use]
pub fn history_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

/// Last day of a generated history
#[must_use]
pub fn history_end(size: HistorySize) -> NaiveDate {
    #[allow(clippy::cast_possible_wrap)]
    let span = size.days() as i64 - 1;
    history_start() + Duration::days(span)
}

/// Cycle length for the nth cycle, wandering between 26 and 32 days
const fn cycle_length(cycle_index: usize) -> usize {
    26 + (cycle_index * 5) % 7
}

/// Symptom intensity that rises toward the end of each cycle
#[allow(clippy::cast_precision_loss)]
fn late_cycle_intensity(day_in_cycle: usize, length: usize, salt: usize) -> f64 {
    let progress = day_in_cycle as f64 / length as f64;
    let jitter = ((day_in_cycle * 7 + salt * 3) % 5) as f64 / 2.0;
    (progress * 7.0 + jitter).min(10.0)
}

/// Generate a daily log covering `size`, with a mix of legacy 0-100 and
/// current 0-10 values and roughly one logged influence every few days
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn generate_history(size: HistorySize) -> Vec<RawDailyEntry> {
    let start = history_start();
    let mut entries = Vec::with_capacity(size.days());
    let mut cycle_index = 0;
    let mut day_in_cycle = 0;

    for offset in 0..size.days() {
        let length = cycle_length(cycle_index);
        let date = start + Duration::days(offset as i64);
        let legacy = offset < size.days() / 3;
        let scale = if legacy { 10.0 } else { 1.0 };

        let flow = match day_in_cycle {
            0 | 1 => 7.0,
            2 | 3 => 4.0,
            4 => 1.0,
            _ => 0.0,
        };
        let fatigue = late_cycle_intensity(day_in_cycle, length, offset);
        let energy = 10.0 - fatigue;

        let mut entry = RawDailyEntry::new(date.format("%Y-%m-%d").to_string())
            .with_flow(flow * scale)
            .with_symptom("energy", (energy * scale).round())
            .with_symptom("fatigue", (fatigue * scale).round())
            .with_symptom("sleep", ((6 + offset % 4) as f64 * scale).round())
            .with_mood(1 + offset % 3);
        if offset % 3 == 0 {
            entry = entry.with_event(Influence::Caffeine);
        }
        if offset % 7 == 5 {
            entry = entry.with_event(Influence::LateNight);
        }
        entries.push(entry);

        day_in_cycle += 1;
        if day_in_cycle == length {
            day_in_cycle = 0;
            cycle_index += 1;
        }
    }
    entries
}
