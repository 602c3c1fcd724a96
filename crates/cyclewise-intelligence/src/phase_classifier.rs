// ABOUTME: Phase classification by position in the current cycle or by symptom profile match
// ABOUTME: Ovulation window geometry, reference profiles, bleeding override, and confidence tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! Phase Classifier
//!
//! The boundary strategy places today inside the current cycle using the most
//! recent start and the personal average length. Without an anchor, recent
//! symptom means are matched against four reference profiles. Flow logged
//! today always wins and yields the Reset phase.

use chrono::NaiveDate;
use cyclewise_core::constants::cycle_stats::MAX_PLAUSIBLE_CYCLE_DAYS;
use cyclewise_core::constants::phase::{
    DEFAULT_CYCLE_LENGTH_DAYS, EMERGING_MIN_DAYS, EMERGING_MIN_STARTS, ESTABLISHED_MIN_DAYS,
    ESTABLISHED_MIN_STARTS, LUTEAL_OFFSET_DAYS, MENSTRUAL_PHASE_DAYS, MIN_OVULATION_CENTER_DAY,
    MIN_OVULATION_WINDOW_START, MIN_SIGNALS_FOR_PROFILE, OVULATION_CENTER_END_MARGIN,
    OVULATION_END_END_MARGIN, OVULATION_START_END_MARGIN, OVULATION_WINDOW_HALF_WIDTH,
    SIGNAL_LOOKBACK_ENTRIES,
};
use cyclewise_core::constants::scales::INTENSITY_MAX;
use cyclewise_core::models::{
    ConfidenceTier, Phase, PhaseEstimate, PhaseStrategy, SymptomKey, TrackingSettings,
};
use std::collections::BTreeMap;
use tracing::debug;

use crate::normalizer::EntryLog;
use crate::trend_analysis::mean;

/// Signals compared against the reference profiles, in profile column order
pub const PROFILE_SIGNALS: [SymptomKey; 16] = [
    SymptomKey::Energy,
    SymptomKey::Motivation,
    SymptomKey::Sleep,
    SymptomKey::Stress,
    SymptomKey::Anxiety,
    SymptomKey::Irritability,
    SymptomKey::BrainFog,
    SymptomKey::Fatigue,
    SymptomKey::Libido,
    SymptomKey::Digestion,
    SymptomKey::Bloating,
    SymptomKey::Cramps,
    SymptomKey::Headache,
    SymptomKey::BreastTenderness,
    SymptomKey::NightSweats,
    SymptomKey::HotFlushes,
];

/// Typical symptom intensities for one phase
#[derive(Debug, Clone, Copy)]
pub struct ReferenceProfile {
    /// Phase described
    pub phase: Phase,
    /// Target per entry of [`PROFILE_SIGNALS`]
    pub targets: [f64; 16],
}

/// Reference profiles in tie-break order
pub const REFERENCE_PROFILES: [ReferenceProfile; 4] = [
    ReferenceProfile {
        phase: Phase::Reset,
        targets: [
            3.0, 4.0, 5.0, 5.0, 4.0, 5.0, 5.0, 7.0, 2.0, 5.0, 6.0, 7.0, 5.0, 3.0, 2.0, 2.0,
        ],
    },
    ReferenceProfile {
        phase: Phase::Rebuilding,
        targets: [
            6.0, 7.0, 7.0, 3.0, 3.0, 2.0, 2.0, 3.0, 5.0, 2.0, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0,
        ],
    },
    ReferenceProfile {
        phase: Phase::Expressive,
        targets: [
            8.0, 8.0, 7.0, 3.0, 2.0, 2.0, 1.0, 2.0, 8.0, 2.0, 3.0, 2.0, 2.0, 2.0, 1.0, 1.0,
        ],
    },
    ReferenceProfile {
        phase: Phase::Protective,
        targets: [
            4.0, 4.0, 5.0, 6.0, 6.0, 7.0, 5.0, 6.0, 3.0, 5.0, 6.0, 3.0, 4.0, 6.0, 3.0, 3.0,
        ],
    },
];

/// Ovulation geometry for a cycle length, as 1-indexed cycle days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvulationWindow {
    /// Estimated ovulation day
    pub center: i64,
    /// First Expressive day
    pub start: i64,
    /// Last Expressive day
    pub end: i64,
}

/// Like `clamp`, but never panics when the bounds cross; the upper bound wins
const fn bounded(value: i64, low: i64, high: i64) -> i64 {
    let raised = if value < low { low } else { value };
    if raised > high {
        high
    } else {
        raised
    }
}

/// Ovulation window for a cycle of `cycle_length` days
#[must_use]
pub const fn ovulation_window(cycle_length: i64) -> OvulationWindow {
    let center = bounded(
        cycle_length - LUTEAL_OFFSET_DAYS,
        MIN_OVULATION_CENTER_DAY,
        cycle_length - OVULATION_CENTER_END_MARGIN,
    );
    let start = bounded(
        center - OVULATION_WINDOW_HALF_WIDTH,
        MIN_OVULATION_WINDOW_START,
        cycle_length - OVULATION_START_END_MARGIN,
    );
    let end = bounded(
        center + OVULATION_WINDOW_HALF_WIDTH,
        start + 1,
        cycle_length - OVULATION_END_END_MARGIN,
    );
    OvulationWindow { center, start, end }
}

/// Phase for a 1-indexed day within a cycle of `cycle_length` days
#[must_use]
pub const fn boundary_phase(day_in_cycle: i64, cycle_length: i64) -> Phase {
    let window = ovulation_window(cycle_length);
    if day_in_cycle <= MENSTRUAL_PHASE_DAYS {
        Phase::Reset
    } else if day_in_cycle < window.start {
        Phase::Rebuilding
    } else if day_in_cycle <= window.end {
        Phase::Expressive
    } else {
        Phase::Protective
    }
}

/// 1-indexed day in the current cycle, when a usable anchor exists
#[must_use]
pub fn day_in_cycle(starts: &[NaiveDate], today: NaiveDate) -> Option<i64> {
    let anchor = starts.iter().rev().find(|start| **start <= today)?;
    let day = (today - *anchor).num_days() + 1;
    (day <= MAX_PLAUSIBLE_CYCLE_DAYS).then_some(day)
}

/// Winning reference profile for recent symptoms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileMatch {
    /// Best matching phase
    pub phase: Phase,
    /// Similarity in [0, 1]
    pub score: f64,
    /// Signals with data
    pub signals_used: usize,
}

/// Mean of each profile signal over the last entries on or before `today`
#[must_use]
pub fn recent_signal_means(log: &EntryLog, today: NaiveDate) -> BTreeMap<SymptomKey, f64> {
    let history = log.up_to(today);
    let recent = &history[history.len().saturating_sub(SIGNAL_LOOKBACK_ENTRIES)..];
    PROFILE_SIGNALS
        .iter()
        .filter_map(|key| {
            let values: Vec<f64> = recent.iter().filter_map(|entry| entry.symptom(*key)).collect();
            mean(&values).map(|avg| (*key, avg))
        })
        .collect()
}

/// Similarity of observed means to a profile, over the signals both have
#[must_use]
pub fn score_profile(means: &BTreeMap<SymptomKey, f64>, profile: &ReferenceProfile) -> Option<f64> {
    let closeness: Vec<f64> = PROFILE_SIGNALS
        .iter()
        .zip(profile.targets)
        .filter_map(|(key, target)| {
            means
                .get(key)
                .map(|observed| INTENSITY_MAX - (observed - target).abs())
        })
        .collect();
    if closeness.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let possible = INTENSITY_MAX * closeness.len() as f64;
    Some(closeness.iter().sum::<f64>() / possible)
}

/// Best reference profile, `None` when too few signals have data
#[must_use]
pub fn signal_phase(log: &EntryLog, today: NaiveDate) -> Option<ProfileMatch> {
    let means = recent_signal_means(log, today);
    if means.len() < MIN_SIGNALS_FOR_PROFILE {
        return None;
    }

    let mut best: Option<ProfileMatch> = None;
    for profile in &REFERENCE_PROFILES {
        let Some(score) = score_profile(&means, profile) else {
            continue;
        };
        // Strictly greater keeps the earlier phase on ties
        if best.is_none_or(|current| score > current.score) {
            best = Some(ProfileMatch {
                phase: profile.phase,
                score,
                signals_used: means.len(),
            });
        }
    }
    best
}

/// Confidence from anchored starts and logged days
#[must_use]
pub const fn confidence_tier(start_count: usize, distinct_days: usize) -> ConfidenceTier {
    if start_count >= ESTABLISHED_MIN_STARTS && distinct_days >= ESTABLISHED_MIN_DAYS {
        ConfidenceTier::Established
    } else if start_count >= EMERGING_MIN_STARTS && distinct_days >= EMERGING_MIN_DAYS {
        ConfidenceTier::Emerging
    } else {
        ConfidenceTier::Learning
    }
}

/// Classifies the phase for a given day
pub struct PhaseClassifier;

impl PhaseClassifier {
    /// Classify `today`. `starts` are the detected starts; they are ignored when
    /// cycle tracking is off.
    #[must_use]
    pub fn classify(
        log: &EntryLog,
        starts: &[NaiveDate],
        avg_length: Option<u32>,
        settings: &TrackingSettings,
        today: NaiveDate,
    ) -> PhaseEstimate {
        let anchored: &[NaiveDate] = if settings.cycle_tracking {
            let end = starts.partition_point(|start| *start <= today);
            &starts[..end]
        } else {
            &[]
        };
        let distinct_days = log.up_to(today).len();
        let confidence = confidence_tier(anchored.len(), distinct_days);
        let bleeding_today = log
            .get(today)
            .and_then(|entry| entry.flow())
            .is_some_and(|flow| flow > 0.0);

        let (phase, strategy) = Self::select_phase(log, anchored, avg_length, today);
        let phase = if bleeding_today { Phase::Reset } else { phase };

        debug!(
            %today,
            phase = phase.name(),
            ?strategy,
            confidence = confidence.as_str(),
            bleeding_today,
            "Phase classified"
        );

        PhaseEstimate {
            phase,
            confidence,
            strategy,
            bleeding_today,
        }
    }

    fn select_phase(
        log: &EntryLog,
        anchored: &[NaiveDate],
        avg_length: Option<u32>,
        today: NaiveDate,
    ) -> (Phase, PhaseStrategy) {
        if let Some(day) = day_in_cycle(anchored, today) {
            let cycle_length = avg_length.map_or(DEFAULT_CYCLE_LENGTH_DAYS, i64::from);
            let strategy = PhaseStrategy::Boundary {
                day_in_cycle: u32::try_from(day).unwrap_or(0),
                cycle_length: u32::try_from(cycle_length).unwrap_or(0),
            };
            return (boundary_phase(day, cycle_length), strategy);
        }

        signal_phase(log, today).map_or(
            (Phase::Protective, PhaseStrategy::Default),
            |matched| {
                (
                    matched.phase,
                    PhaseStrategy::SignalProfile {
                        score: matched.score,
                        signals_used: matched.signals_used,
                    },
                )
            },
        )
    }
}
