// ABOUTME: Cycle start detection from flow, spotting streaks, breakthrough bleeds, and overrides
// ABOUTME: Also derives period days and enforces the single-override rule on history edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! Cycle Start Detection
//!
//! A single pass over the date-sorted log. A day starts a cycle when it is an
//! explicit override, the first bleed day after a dry stretch, or the first day
//! of two consecutive spotting days. Breakthrough bleeds never count as flow.

use chrono::{Duration, NaiveDate};
use cyclewise_core::constants::detection::{
    BLEED_CONTINUITY_GAP_DAYS, BLEED_FLOW_THRESHOLD, SPOTTING_STREAK_FOR_START,
};
use cyclewise_core::models::{DailyEntry, RawDailyEntry};
use std::collections::BTreeSet;
use tracing::debug;

use crate::normalizer::EntryLog;

/// How a day's flow reads for cycle detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowClass {
    /// Flow at or above the bleed threshold
    Bleed,
    /// Flow above zero but below the bleed threshold
    Spotting,
    /// No effective flow
    Dry,
}

/// Flow counted toward cycle detection; breakthrough bleeds read as zero
#[must_use]
pub fn effective_flow(entry: &DailyEntry) -> f64 {
    if entry.breakthrough_bleed {
        0.0
    } else {
        entry.flow().unwrap_or(0.0)
    }
}

/// Classify a day's effective flow
#[must_use]
pub fn classify_flow(entry: &DailyEntry) -> FlowClass {
    let flow = effective_flow(entry);
    if flow >= BLEED_FLOW_THRESHOLD {
        FlowClass::Bleed
    } else if flow > 0.0 {
        FlowClass::Spotting
    } else {
        FlowClass::Dry
    }
}

#[derive(Debug, Default)]
struct ScanState {
    was_bleeding: bool,
    spotting_streak: u32,
    streak_start: Option<NaiveDate>,
    last_spotting: Option<NaiveDate>,
    previous_date: Option<NaiveDate>,
}

impl ScanState {
    fn reset_streak(&mut self) {
        self.spotting_streak = 0;
        self.streak_start = None;
        self.last_spotting = None;
    }

    fn end_bleed(&mut self) {
        self.was_bleeding = false;
        self.reset_streak();
    }
}

fn push_start(starts: &mut Vec<NaiveDate>, date: NaiveDate) {
    if starts.last().is_none_or(|last| *last < date) {
        starts.push(date);
    }
}

/// Detects cycle start dates from an entry log
pub struct CycleStartDetector;

impl CycleStartDetector {
    /// Detect cycle starts, strictly increasing, no duplicates
    #[must_use]
    pub fn detect(log: &EntryLog) -> Vec<NaiveDate> {
        let mut starts: Vec<NaiveDate> = Vec::new();
        let mut state = ScanState::default();
        for entry in log {
            // An unlogged stretch longer than the gap breaks any bleed in progress
            if let Some(previous) = state.previous_date {
                if (entry.date - previous).num_days() > BLEED_CONTINUITY_GAP_DAYS {
                    state.end_bleed();
                }
            }
            state.previous_date = Some(entry.date);

            if entry.cycle_start_override {
                debug!(date = %entry.date, "Cycle start from override");
                push_start(&mut starts, entry.date);
                state.was_bleeding = true;
                state.reset_streak();
                continue;
            }

            match classify_flow(entry) {
                FlowClass::Bleed => {
                    if !state.was_bleeding {
                        debug!(date = %entry.date, "Cycle start from bleed");
                        push_start(&mut starts, entry.date);
                    }
                    state.was_bleeding = true;
                    state.reset_streak();
                }
                FlowClass::Spotting if state.was_bleeding => state.reset_streak(),
                FlowClass::Spotting => {
                    let continues = state
                        .last_spotting
                        .is_some_and(|last| entry.date - last == Duration::days(1));
                    if continues {
                        state.spotting_streak += 1;
                    } else {
                        state.spotting_streak = 1;
                        state.streak_start = Some(entry.date);
                    }
                    state.last_spotting = Some(entry.date);

                    if state.spotting_streak >= SPOTTING_STREAK_FOR_START {
                        if let Some(start) = state.streak_start {
                            debug!(date = %start, "Cycle start from spotting streak");
                            push_start(&mut starts, start);
                        }
                        state.was_bleeding = true;
                        state.reset_streak();
                    }
                }
                FlowClass::Dry => state.end_bleed(),
            }
        }

        starts
    }
}

/// Days counted as period days: overrides or any non-breakthrough flow
#[must_use]
pub fn period_days(log: &EntryLog) -> BTreeSet<NaiveDate> {
    log.iter()
        .filter(|entry| entry.cycle_start_override || effective_flow(entry) > 0.0)
        .map(|entry| entry.date)
        .collect()
}

/// Applies "at most one explicit start override in the editing flow".
///
/// Marking a date clears every other override; the result is what the caller
/// persists. Detection itself honors as many overrides as it finds.
pub struct OverrideNormalizer;

impl OverrideNormalizer {
    /// Mark `date` as the only override in a normalized log
    #[must_use]
    pub fn set_cycle_start_override(log: &EntryLog, date: NaiveDate) -> EntryLog {
        let mut entries: Vec<DailyEntry> = log
            .iter()
            .cloned()
            .map(|mut entry| {
                entry.cycle_start_override = entry.date == date;
                entry
            })
            .collect();
        if log.get(date).is_none() {
            let mut marked = DailyEntry::empty(date);
            marked.cycle_start_override = true;
            entries.push(marked);
        }
        EntryLog::from_entries(entries)
    }

    /// Remove the override on `date`, leaving other entries as they are
    #[must_use]
    pub fn clear_cycle_start_override(log: &EntryLog, date: NaiveDate) -> EntryLog {
        EntryLog::from_entries(log.iter().cloned().map(|mut entry| {
            if entry.date == date {
                entry.cycle_start_override = false;
            }
            entry
        }))
    }

    /// Mark `date` as the only override across stored records
    #[must_use]
    pub fn set_cycle_start_override_raw(
        entries: &[RawDailyEntry],
        date: NaiveDate,
    ) -> Vec<RawDailyEntry> {
        let mut found = false;
        let mut updated: Vec<RawDailyEntry> = entries
            .iter()
            .cloned()
            .map(|mut entry| {
                if entry.date() == Some(date) {
                    found = true;
                    entry.cycle_start_override = Some(true);
                } else if entry.cycle_start_override.is_some() {
                    entry.cycle_start_override = None;
                }
                entry
            })
            .collect();
        if !found {
            updated.push(
                RawDailyEntry::new(date.format("%Y-%m-%d").to_string()).with_cycle_start_override(),
            );
        }
        updated
    }

    /// Remove the override on `date` across stored records
    #[must_use]
    pub fn clear_cycle_start_override_raw(
        entries: &[RawDailyEntry],
        date: NaiveDate,
    ) -> Vec<RawDailyEntry> {
        entries
            .iter()
            .cloned()
            .map(|mut entry| {
                if entry.date() == Some(date) {
                    entry.cycle_start_override = None;
                }
                entry
            })
            .collect()
    }
}
