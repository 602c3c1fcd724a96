// ABOUTME: Fertile window estimation from manual ovulation markers or predicted ovulation offsets
// ABOUTME: Windows span five days before to one day after ovulation and never include period days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use chrono::{Duration, NaiveDate};
use cyclewise_core::constants::fertility::{DAYS_AFTER_OVULATION, DAYS_BEFORE_OVULATION};
use cyclewise_core::constants::phase::DEFAULT_CYCLE_LENGTH_DAYS;
use cyclewise_core::models::{FertileWindow, FertileWindowSource, TrackingSettings};
use std::collections::BTreeSet;
use tracing::debug;

use crate::cycle_detection::period_days;
use crate::cycle_statistics::is_plausible_gap;
use crate::normalizer::EntryLog;
use crate::phase_classifier::ovulation_window;

/// Estimates fertile days
pub struct FertileWindowEstimator;

impl FertileWindowEstimator {
    /// Estimate the window. Manual markers take precedence over prediction.
    #[must_use]
    pub fn estimate(
        log: &EntryLog,
        starts: &[NaiveDate],
        avg_length: Option<u32>,
        settings: &TrackingSettings,
    ) -> FertileWindow {
        let manual = Self::manual_ovulation_dates(log, settings);
        let (ovulation_days, source) = if !manual.is_empty() {
            (manual, FertileWindowSource::Manual)
        } else if !starts.is_empty() {
            (
                Self::predicted_ovulation_dates(starts, avg_length),
                FertileWindowSource::Predicted,
            )
        } else {
            return FertileWindow::empty();
        };

        let bleeding = period_days(log);
        let days: BTreeSet<NaiveDate> = ovulation_days
            .iter()
            .flat_map(|ovulation| Self::window_around(*ovulation))
            .filter(|day| !bleeding.contains(day))
            .collect();

        debug!(
            ?source,
            ovulation_days = ovulation_days.len(),
            fertile_days = days.len(),
            "Fertile window estimated"
        );

        FertileWindow {
            days,
            ovulation_days,
            source,
        }
    }

    /// Ovulation dates marked on entries or in settings
    #[must_use]
    pub fn manual_ovulation_dates(log: &EntryLog, settings: &TrackingSettings) -> BTreeSet<NaiveDate> {
        log.iter()
            .filter(|entry| entry.ovulation_override)
            .map(|entry| entry.date)
            .chain(settings.manual_ovulation_dates.iter().copied())
            .collect()
    }

    /// One predicted ovulation date per detected start
    #[must_use]
    pub fn predicted_ovulation_dates(
        starts: &[NaiveDate],
        avg_length: Option<u32>,
    ) -> BTreeSet<NaiveDate> {
        let fallback = avg_length.map_or(DEFAULT_CYCLE_LENGTH_DAYS, i64::from);
        starts
            .iter()
            .enumerate()
            .map(|(index, start)| {
                let cycle_length = starts
                    .get(index + 1)
                    .map(|next| (*next - *start).num_days())
                    .filter(|gap| is_plausible_gap(*gap))
                    .unwrap_or(fallback);
                let center = ovulation_window(cycle_length).center;
                *start + Duration::days(center - 1)
            })
            .collect()
    }

    fn window_around(ovulation: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        (-DAYS_BEFORE_OVULATION..=DAYS_AFTER_OVULATION).map(move |offset| ovulation + Duration::days(offset))
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
    fn test_no_starts_and_no_markers_is_empty() {
        let window = FertileWindowEstimator::estimate(
            &EntryLog::default(),
            &[],
            None,
            &TrackingSettings::default(),
        );
        assert_eq!(window, FertileWindow::empty());
    }

    #[test]
    fn test_single_start_uses_default_length() {
        let starts = [date("2024-01-01")];
        let window = FertileWindowEstimator::estimate(
            &EntryLog::default(),
            &starts,
            None,
            &TrackingSettings::default(),
        );
        assert_eq!(window.source, FertileWindowSource::Predicted);
        assert!(window.ovulation_days.contains(&date("2024-01-14")));
        assert_eq!(window.days.first(), Some(&date("2024-01-09")));
        assert_eq!(window.days.last(), Some(&date("2024-01-15")));
        assert_eq!(window.days.len(), 7);
    }

    #[test]
    fn test_manual_marker_wins_and_period_days_are_removed() {
        let log = EntryLog::from_raw(&[
            RawDailyEntry::new("2024-03-10").with_flow(2),
            RawDailyEntry::new("2024-03-12").with_ovulation_override(),
        ]);
        let window = FertileWindowEstimator::estimate(
            &log,
            &[date("2024-02-01")],
            None,
            &TrackingSettings::default(),
        );
        assert_eq!(window.source, FertileWindowSource::Manual);
        assert!(!window.contains(date("2024-03-10")));
        assert!(window.contains(date("2024-03-07")));
        assert!(window.contains(date("2024-03-13")));
        assert_eq!(window.days.len(), 6);
    }
}
