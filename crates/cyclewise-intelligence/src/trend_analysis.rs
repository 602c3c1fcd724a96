// ABOUTME: Rolling averages, week-over-week shifts, and influence relationship signals
// ABOUTME: Lightweight descriptive statistics with a deterministic daily rotation of relationships
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! Trend & Relationship Analyzer
//!
//! Everything here is descriptive: trailing means, a last-week versus
//! previous-week comparison damped by how many days were actually logged, and
//! two-sample mean differences between days with and without an influence.
//! Nothing is a significance test.

use chrono::{Duration, NaiveDate};
use cyclewise_core::constants::trends::{
    FNV_OFFSET_BASIS, FNV_PRIME, LONG_WINDOW_DAYS, MIN_SHIFT_SAMPLES, RELATIONSHIP_MIN_EFFECT,
    RELATIONSHIP_MIN_EXAMPLES, RELATIONSHIP_MIN_VALUES, RELATIONSHIP_WINDOW_DAYS,
    SHIFT_A_LITTLE_BELOW, SHIFT_NOTICEABLY_BELOW, SHIFT_STEADY_BELOW, SHORT_WINDOW_DAYS,
};
use cyclewise_core::models::{
    DailyEntry, Influence, RelationshipDescriptor, RollingAverage, ShiftDescriptor,
    ShiftDirection, ShiftMagnitude, Signal, SymptomKey, TrackingSettings, TrendSummary,
};
use std::iter;
use tracing::debug;

use crate::normalizer::EntryLog;

/// Arithmetic mean, `None` for no values
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    Some(values.iter().sum::<f64>() / count)
}

/// Uppercase the first character
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// "a", "a and b", "a, b and c"
#[must_use]
pub fn join_labels(labels: &[&str]) -> String {
    match labels {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

/// 32-bit FNV-1a hash
#[must_use]
pub fn fnv1a_32(text: &str) -> u32 {
    text.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Bucket a scaled delta into a magnitude
#[must_use]
pub fn shift_magnitude(scaled_delta: f64) -> ShiftMagnitude {
    let size = scaled_delta.abs();
    if size < SHIFT_STEADY_BELOW {
        ShiftMagnitude::Steady
    } else if size < SHIFT_A_LITTLE_BELOW {
        ShiftMagnitude::ALittle
    } else if size < SHIFT_NOTICEABLY_BELOW {
        ShiftMagnitude::Noticeably
    } else {
        ShiftMagnitude::Much
    }
}

/// Value of a signal on one entry
#[must_use]
pub fn signal_value(entry: &DailyEntry, signal: Signal) -> Option<f64> {
    match signal {
        Signal::Mood => entry.mood.map(|mood| mood.as_intensity()),
        Signal::Symptom(key) => entry.symptom(key),
    }
}

/// Values of a signal over the `days` calendar days ending at `end`
#[must_use]
pub fn window_values(log: &EntryLog, signal: Signal, end: NaiveDate, days: i64) -> Vec<f64> {
    log.between(end - Duration::days(days - 1), end)
        .iter()
        .filter_map(|entry| signal_value(entry, signal))
        .collect()
}

/// Computes trend summaries
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Rolling means, shifts, and today's relationship
    #[must_use]
    pub fn summarize(log: &EntryLog, settings: &TrackingSettings, today: NaiveDate) -> TrendSummary {
        let signals = Self::tracked_signals(settings);
        let rolling = signals
            .iter()
            .map(|signal| Self::rolling_average(log, *signal, today))
            .collect();
        let shifts: Vec<ShiftDescriptor> = signals
            .iter()
            .filter_map(|signal| Self::shift(log, *signal, today))
            .collect();
        let relationship = Self::daily_relationship(log, settings, today);

        debug!(
            signals = signals.len(),
            shifts = shifts.len(),
            notable = shifts.iter().filter(|shift| shift.is_notable()).count(),
            has_relationship = relationship.is_some(),
            "Trend summary computed"
        );

        TrendSummary {
            rolling,
            shifts,
            relationship,
        }
    }

    /// Mood plus enabled symptoms, in catalog order
    #[must_use]
    pub fn tracked_signals(settings: &TrackingSettings) -> Vec<Signal> {
        iter::once(Signal::Mood)
            .chain(
                SymptomKey::ALL
                    .into_iter()
                    .filter(|key| settings.is_enabled(*key))
                    .map(Signal::Symptom),
            )
            .collect()
    }

    /// Trailing 7- and 14-day means
    #[must_use]
    pub fn rolling_average(log: &EntryLog, signal: Signal, today: NaiveDate) -> RollingAverage {
        let short = window_values(log, signal, today, SHORT_WINDOW_DAYS);
        let long = window_values(log, signal, today, LONG_WINDOW_DAYS);
        RollingAverage {
            signal,
            mean_7d: mean(&short),
            samples_7d: short.len(),
            mean_14d: mean(&long),
            samples_14d: long.len(),
        }
    }

    /// Last 7 days versus the 7 before, `None` without two samples per side
    #[must_use]
    pub fn shift(log: &EntryLog, signal: Signal, today: NaiveDate) -> Option<ShiftDescriptor> {
        let recent = window_values(log, signal, today, SHORT_WINDOW_DAYS);
        let previous = window_values(
            log,
            signal,
            today - Duration::days(SHORT_WINDOW_DAYS),
            SHORT_WINDOW_DAYS,
        );
        if recent.len() < MIN_SHIFT_SAMPLES || previous.len() < MIN_SHIFT_SAMPLES {
            return None;
        }

        let recent_mean = mean(&recent)?;
        let previous_mean = mean(&previous)?;
        let delta = recent_mean - previous_mean;
        #[allow(clippy::cast_precision_loss)]
        let consistency = (recent.len().min(previous.len()) as f64 / SHORT_WINDOW_DAYS as f64).min(1.0);
        let scaled_delta = delta * consistency;
        let magnitude = shift_magnitude(scaled_delta);
        let direction = match magnitude {
            ShiftMagnitude::Steady => ShiftDirection::Steady,
            _ if delta > 0.0 => ShiftDirection::Up,
            _ => ShiftDirection::Down,
        };

        let label = capitalize_first(signal.label());
        let description = match direction {
            ShiftDirection::Steady => format!("{label} has held steady compared with the week before."),
            ShiftDirection::Up => format!("{label} is {} higher than the week before.", magnitude.adverb()),
            ShiftDirection::Down => format!("{label} is {} lower than the week before.", magnitude.adverb()),
        };

        Some(ShiftDescriptor {
            signal,
            direction,
            magnitude,
            recent_mean,
            previous_mean,
            delta,
            scaled_delta,
            consistency,
            description,
        })
    }

    /// Every qualifying influence/symptom pair, in influence then symptom order
    #[must_use]
    pub fn relationship_candidates(
        log: &EntryLog,
        settings: &TrackingSettings,
        today: NaiveDate,
    ) -> Vec<RelationshipDescriptor> {
        let window = log.between(today - Duration::days(RELATIONSHIP_WINDOW_DAYS - 1), today);
        let mut candidates = Vec::new();

        for influence in Influence::ALL {
            if !settings.tracked_influences.contains(&influence) {
                continue;
            }
            let (with, without): (Vec<&DailyEntry>, Vec<&DailyEntry>) =
                window.iter().partition(|entry| entry.has_event(influence));
            if with.len() < RELATIONSHIP_MIN_EXAMPLES || without.len() < RELATIONSHIP_MIN_EXAMPLES {
                continue;
            }

            for symptom in SymptomKey::ALL {
                if symptom == SymptomKey::Flow || !settings.is_enabled(symptom) {
                    continue;
                }
                if let Some(found) = Self::compare(influence, symptom, &with, &without) {
                    candidates.push(found);
                }
            }
        }

        let count = candidates.len();
        for candidate in &mut candidates {
            candidate.candidate_count = count;
        }
        candidates
    }

    /// One relationship per day, rotated deterministically by the date
    #[must_use]
    pub fn daily_relationship(
        log: &EntryLog,
        settings: &TrackingSettings,
        today: NaiveDate,
    ) -> Option<RelationshipDescriptor> {
        let mut candidates = Self::relationship_candidates(log, settings, today);
        if candidates.is_empty() {
            return None;
        }
        let seed = fnv1a_32(&today.format("%Y-%m-%d").to_string());
        let index = usize::try_from(seed).unwrap_or(0) % candidates.len();
        Some(candidates.swap_remove(index))
    }

    fn compare(
        influence: Influence,
        symptom: SymptomKey,
        with: &[&DailyEntry],
        without: &[&DailyEntry],
    ) -> Option<RelationshipDescriptor> {
        let with_values: Vec<f64> = with.iter().filter_map(|entry| entry.symptom(symptom)).collect();
        let without_values: Vec<f64> = without
            .iter()
            .filter_map(|entry| entry.symptom(symptom))
            .collect();
        if with_values.len() < RELATIONSHIP_MIN_VALUES || without_values.len() < RELATIONSHIP_MIN_VALUES {
            return None;
        }

        let mean_with = mean(&with_values)?;
        let mean_without = mean(&without_values)?;
        let difference = mean_with - mean_without;
        if difference.abs() < RELATIONSHIP_MIN_EFFECT {
            return None;
        }

        let tendency = if difference > 0.0 { "higher" } else { "lower" };
        let description = format!(
            "On days with {}, your {} tends to be {tendency} ({mean_with:.1} vs {mean_without:.1}).",
            influence.phrase(),
            symptom.label()
        );

        Some(RelationshipDescriptor {
            influence,
            symptom,
            mean_with,
            mean_without,
            difference,
            samples_with: with_values.len(),
            samples_without: without_values.len(),
            candidate_count: 0,
            description,
        })
    }
}
