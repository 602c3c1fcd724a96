// ABOUTME: Cycle length statistics and next-start prediction from detected cycle starts
// ABOUTME: Plausibility filtering, rolling average, hedged prediction note, and late-cycle hint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use chrono::{Duration, NaiveDate};
use cyclewise_core::constants::cycle_stats::{
    AVERAGE_WINDOW_CYCLES, LATE_CYCLE_HIGH_INTENSITY, LATE_CYCLE_HINT_WINDOW_DAYS,
    LATE_CYCLE_MIN_HIGH_SYMPTOMS, MAX_PLAUSIBLE_CYCLE_DAYS, MIN_PLAUSIBLE_CYCLE_DAYS,
};
use cyclewise_core::models::{CycleStats, SymptomKey};
use tracing::debug;

use crate::normalizer::EntryLog;
use crate::trend_analysis::{capitalize_first, join_labels, mean};

/// Symptoms that can feed the late-cycle hint
pub const LATE_CYCLE_SYMPTOMS: [SymptomKey; 5] = [
    SymptomKey::Fatigue,
    SymptomKey::BrainFog,
    SymptomKey::NightSweats,
    SymptomKey::Skin,
    SymptomKey::Hair,
];

/// Whether a gap between starts counts as a real cycle
#[must_use]
pub const fn is_plausible_gap(days: i64) -> bool {
    days >= MIN_PLAUSIBLE_CYCLE_DAYS && days <= MAX_PLAUSIBLE_CYCLE_DAYS
}

/// Day gaps between consecutive starts, implausible ones included
#[must_use]
pub fn cycle_gaps(starts: &[NaiveDate]) -> Vec<i64> {
    starts
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect()
}

/// Computes cycle statistics from detected starts
pub struct CycleStatsCalculator;

impl CycleStatsCalculator {
    /// Compute statistics for `starts`; `log` and `today` only feed the soft hint
    #[must_use]
    pub fn compute(starts: &[NaiveDate], log: &EntryLog, today: NaiveDate) -> CycleStats {
        let gaps = cycle_gaps(starts);
        let lengths: Vec<u32> = gaps
            .iter()
            .copied()
            .filter(|gap| is_plausible_gap(*gap))
            .filter_map(|gap| u32::try_from(gap).ok())
            .collect();

        let skipped = gaps.len() - lengths.len();
        if skipped > 0 {
            debug!(skipped, "Ignoring implausible cycle gaps");
        }

        let last_length = gaps
            .last()
            .copied()
            .filter(|gap| is_plausible_gap(*gap))
            .and_then(|gap| u32::try_from(gap).ok());

        let recent = &lengths[lengths.len().saturating_sub(AVERAGE_WINDOW_CYCLES)..];
        let avg_length = Self::average_length(recent);

        let predicted_next_start = match (starts.last(), avg_length) {
            (Some(last), Some(avg)) => Some(*last + Duration::days(i64::from(avg))),
            _ => None,
        };

        let mut prediction_note = Self::basis_note(starts.len(), recent.len(), avg_length);
        if let Some(hint) = Self::late_cycle_hint(log, today) {
            prediction_note.push(' ');
            prediction_note.push_str(&hint);
        }

        CycleStats {
            cycle_starts: starts.to_vec(),
            lengths,
            last_length,
            avg_length,
            predicted_next_start,
            prediction_note,
        }
    }

    /// Rounded mean of the given lengths
    #[must_use]
    pub fn average_length(lengths: &[u32]) -> Option<u32> {
        let values: Vec<f64> = lengths.iter().map(|len| f64::from(*len)).collect();
        mean(&values).and_then(|avg| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = avg.round() as u32;
            (rounded > 0).then_some(rounded)
        })
    }

    fn basis_note(start_count: usize, cycles_used: usize, avg_length: Option<u32>) -> String {
        match avg_length {
            Some(avg) => {
                let plural = if cycles_used == 1 { "" } else { "s" };
                format!(
                    "Based on your last {cycles_used} cycle{plural} (about {avg} days on average). \
                     This is an estimate, not a guarantee."
                )
            }
            None if start_count == 0 => {
                "Not enough history yet: log a period start to begin building predictions."
                    .to_owned()
            }
            None => "Not enough history yet: a prediction needs two cycle starts between 10 and 60 days apart."
                .to_owned(),
        }
    }

    /// Soft hint when several late-cycle symptoms have been running high
    #[must_use]
    pub fn late_cycle_hint(log: &EntryLog, today: NaiveDate) -> Option<String> {
        let window = log.between(
            today - Duration::days(LATE_CYCLE_HINT_WINDOW_DAYS - 1),
            today,
        );
        let high: Vec<&'static str> = LATE_CYCLE_SYMPTOMS
            .iter()
            .filter(|key| {
                let values: Vec<f64> = window
                    .iter()
                    .filter_map(|entry| entry.symptom(**key))
                    .collect();
                mean(&values).is_some_and(|avg| avg >= LATE_CYCLE_HIGH_INTENSITY)
            })
            .map(|key| key.label())
            .collect();

        if high.len() < LATE_CYCLE_MIN_HIGH_SYMPTOMS {
            return None;
        }
        Some(format!(
            "{} have been running high lately, which some people notice toward the end of a cycle.",
            capitalize_first(&join_labels(&high))
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclewise_core::models::RawDailyEntry;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_plausible_boundaries_are_inclusive() {
        assert!(is_plausible_gap(10));
        assert!(is_plausible_gap(60));
        assert!(!is_plausible_gap(9));
        assert!(!is_plausible_gap(61));
    }

    #[test]
    fn test_outlier_is_excluded_from_average() {
        let starts = vec![
            date("2024-01-01"),
            date("2024-01-29"),
            date("2024-02-03"),
            date("2024-03-02"),
        ];
        let stats = CycleStatsCalculator::compute(&starts, &EntryLog::default(), date("2024-03-05"));
        assert_eq!(stats.lengths, vec![28, 28]);
        assert_eq!(stats.last_length, Some(28));
        assert_eq!(stats.avg_length, Some(28));
    }

    #[test]
    fn test_average_uses_only_recent_cycles() {
        let mut starts = vec![date("2023-01-01")];
        for gap in [40, 40, 28, 28, 28, 28, 28, 28] {
            let next = *starts.last().unwrap() + Duration::days(gap);
            starts.push(next);
        }
        let stats = CycleStatsCalculator::compute(&starts, &EntryLog::default(), date("2024-01-01"));
        assert_eq!(stats.avg_length, Some(28));
        assert_eq!(stats.lengths.len(), 8);
    }

    #[test]
    fn test_last_length_absent_when_last_gap_implausible() {
        let starts = vec![date("2024-01-01"), date("2024-01-29"), date("2024-05-01")];
        let stats = CycleStatsCalculator::compute(&starts, &EntryLog::default(), date("2024-05-02"));
        assert_eq!(stats.last_length, None);
        assert_eq!(stats.avg_length, Some(28));
        assert_eq!(stats.predicted_next_start, Some(date("2024-05-29")));
    }

    #[test]
    fn test_hint_requires_two_high_symptoms() {
        let raw: Vec<RawDailyEntry> = ["2024-03-08", "2024-03-09", "2024-03-10"]
            .into_iter()
            .map(|day| {
                RawDailyEntry::new(day)
                    .with_symptom("fatigue", 8)
                    .with_symptom("brainFog", 7)
                    .with_symptom("skin", 2)
            })
            .collect();
        let log = EntryLog::from_raw(&raw);
        let hint = CycleStatsCalculator::late_cycle_hint(&log, date("2024-03-10")).unwrap();
        assert!(hint.starts_with("Fatigue and brain fog"));
        assert!(CycleStatsCalculator::late_cycle_hint(&log, date("2024-03-20")).is_none());
    }
}
