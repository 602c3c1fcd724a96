// ABOUTME: CycleEngine orchestrator running the full pattern pipeline for one day
// ABOUTME: Honors tracking settings and bundles every derived output into an EngineReport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use chrono::NaiveDate;
use cyclewise_core::models::{
    CycleStats, FertileWindow, PhaseEstimate, RawDailyEntry, TrackingSettings, TrendSummary,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

use crate::cycle_detection::{period_days, CycleStartDetector};
use crate::cycle_statistics::CycleStatsCalculator;
use crate::fertile_window::FertileWindowEstimator;
use crate::normalizer::EntryLog;
use crate::phase_classifier::PhaseClassifier;
use crate::trend_analysis::TrendAnalyzer;

/// Everything derived for one `(log, settings, today)` run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineReport {
    /// Day the report describes
    pub today: NaiveDate,
    /// Entries on or before `today` that fed the report
    pub entries_considered: usize,
    /// Whether cycle tracking was on
    pub cycle_tracking: bool,
    /// Cycle statistics, absent when cycle tracking is off
    pub cycle_stats: Option<CycleStats>,
    /// Days with flow or a start override
    pub period_days: BTreeSet<NaiveDate>,
    /// Phase for `today`
    pub phase: PhaseEstimate,
    /// Fertile window, absent unless fertility mode is on
    pub fertile_window: Option<FertileWindow>,
    /// Rolling means, shifts, and today's relationship
    pub trends: TrendSummary,
}

/// Runs the pattern pipeline
pub struct CycleEngine;

impl CycleEngine {
    /// Analyze a normalized log as of `today`. Entries after `today` are ignored.
    #[must_use]
    #[instrument(skip_all, fields(%today, entries = log.len()))]
    pub fn analyze(log: &EntryLog, settings: &TrackingSettings, today: NaiveDate) -> EngineReport {
        let log = log.truncated_to(today);

        let (starts, cycle_stats) = if settings.cycle_tracking {
            let starts = CycleStartDetector::detect(&log);
            let stats = CycleStatsCalculator::compute(&starts, &log, today);
            debug!(
                starts = starts.len(),
                plausible_cycles = stats.lengths.len(),
                avg_length = ?stats.avg_length,
                "Cycle statistics computed"
            );
            (starts, Some(stats))
        } else {
            debug!("Cycle tracking off; skipping start detection");
            (Vec::new(), None)
        };
        let avg_length = cycle_stats.as_ref().and_then(|stats| stats.avg_length);

        let phase = PhaseClassifier::classify(&log, &starts, avg_length, settings, today);

        let fertile_window = settings
            .fertility_mode
            .then(|| FertileWindowEstimator::estimate(&log, &starts, avg_length, settings));

        let trends = TrendAnalyzer::summarize(&log, settings, today);

        EngineReport {
            today,
            entries_considered: log.len(),
            cycle_tracking: settings.cycle_tracking,
            cycle_stats,
            period_days: period_days(&log),
            phase,
            fertile_window,
            trends,
        }
    }

    /// Normalize stored records and analyze them
    #[must_use]
    pub fn analyze_raw(
        raw: &[RawDailyEntry],
        settings: &TrackingSettings,
        today: NaiveDate,
    ) -> EngineReport {
        Self::analyze(&EntryLog::from_raw(raw), settings, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclewise_core::models::{FertileWindowSource, Phase, PhaseStrategy};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_log_reports_learning_default() {
        let report = CycleEngine::analyze(
            &EntryLog::default(),
            &TrackingSettings::default(),
            date("2024-05-01"),
        );
        assert_eq!(report.entries_considered, 0);
        assert_eq!(report.phase.phase, Phase::Protective);
        assert_eq!(report.phase.strategy, PhaseStrategy::Default);
        assert!(report.fertile_window.is_none());
        let stats = report.cycle_stats.unwrap();
        assert!(stats.cycle_starts.is_empty());
        assert_eq!(stats.predicted_next_start, None);
    }

    #[test]
    fn test_tracking_off_skips_cycle_outputs() {
        let raw = vec![RawDailyEntry::new("2024-05-01").with_flow(6)];
        let settings = TrackingSettings {
            cycle_tracking: false,
            fertility_mode: true,
            ..TrackingSettings::default()
        };
        let report = CycleEngine::analyze_raw(&raw, &settings, date("2024-05-01"));
        assert!(report.cycle_stats.is_none());
        assert_eq!(report.phase.phase, Phase::Reset);
        assert_eq!(
            report.fertile_window.map(|window| window.source),
            Some(FertileWindowSource::None)
        );
    }

    #[test]
    fn test_future_entries_are_ignored() {
        let raw = vec![
            RawDailyEntry::new("2024-05-01").with_flow(6),
            RawDailyEntry::new("2024-06-01").with_flow(6),
        ];
        let report = CycleEngine::analyze_raw(&raw, &TrackingSettings::default(), date("2024-05-10"));
        assert_eq!(report.entries_considered, 1);
        assert_eq!(report.phase.day_in_cycle(), Some(10));
    }
}
