// ABOUTME: End-to-end tests for the CycleEngine pipeline over synthetic multi-cycle histories
// ABOUTME: Verifies settings gating, report consistency, and serialization of the full report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{date, daily_entries, init_test_logging, iso, regular_cycles};
use cyclewise::{
    ConfidenceTier, CycleEngine, EngineReport, EntryLog, FertileWindowSource, Influence, Phase,
    PhaseStrategy, RawDailyEntry, TrackingSettings,
};

fn fertility_settings() -> TrackingSettings {
    TrackingSettings {
        fertility_mode: true,
        ..TrackingSettings::default()
    }
}

#[test]
fn test_regular_history_produces_a_complete_report() {
    init_test_logging();
    let raw = regular_cycles(date("2024-01-01"), 4, 28, 5);
    let today = date("2024-03-08");
    let report = CycleEngine::analyze_raw(&raw, &fertility_settings(), today);

    let stats = report.cycle_stats.as_ref().unwrap();
    assert_eq!(
        stats.cycle_starts,
        vec![date("2024-01-01"), date("2024-01-29"), date("2024-02-26")]
    );
    assert_eq!(stats.avg_length, Some(28));
    assert_eq!(stats.predicted_next_start, Some(date("2024-03-25")));

    // Day 12 of a 28-day cycle
    assert_eq!(report.phase.phase, Phase::Rebuilding);
    assert_eq!(report.phase.day_in_cycle(), Some(12));
    assert_eq!(report.phase.confidence, ConfidenceTier::Established);

    let window = report.fertile_window.as_ref().unwrap();
    assert_eq!(window.source, FertileWindowSource::Predicted);
    assert!(window.contains(date("2024-03-10")));
    assert!(window.days.is_disjoint(&report.period_days));
    assert_eq!(report.entries_considered, 68);
}

#[test]
fn test_lone_override_gives_a_start_but_no_prediction() {
    let raw = vec![RawDailyEntry::new("2024-01-01").with_cycle_start_override()];
    let report = CycleEngine::analyze_raw(&raw, &TrackingSettings::default(), date("2024-01-03"));
    let stats = report.cycle_stats.unwrap();
    assert_eq!(stats.cycle_starts, vec![date("2024-01-01")]);
    assert_eq!(stats.avg_length, None);
    assert_eq!(stats.predicted_next_start, None);
    assert_eq!(report.phase.phase, Phase::Reset);
    assert_eq!(report.phase.confidence, ConfidenceTier::Learning);
    assert!(report.period_days.contains(&date("2024-01-01")));
}

#[test]
fn test_lone_spotting_day_is_no_start() {
    let raw = vec![RawDailyEntry::new("2024-02-01").with_flow(1)];
    let report = CycleEngine::analyze_raw(&raw, &TrackingSettings::default(), date("2024-02-01"));
    assert!(report.cycle_stats.unwrap().cycle_starts.is_empty());
    assert!(report.phase.bleeding_today);
    assert_eq!(report.phase.phase, Phase::Reset);
}

#[test]
fn test_breakthrough_bleed_does_not_move_the_cycle() {
    let mut raw = regular_cycles(date("2024-01-01"), 2, 28, 5);
    raw.push(
        RawDailyEntry::new("2024-02-10")
            .with_flow(10)
            .with_breakthrough_bleed(),
    );
    let report = CycleEngine::analyze_raw(&raw, &TrackingSettings::default(), date("2024-02-12"));
    let stats = report.cycle_stats.unwrap();
    assert_eq!(stats.cycle_starts, vec![date("2024-01-01"), date("2024-01-29")]);
    assert_eq!(report.phase.day_in_cycle(), Some(15));
    assert!(!report.period_days.contains(&date("2024-02-10")));
}

#[test]
fn test_resumed_bleed_after_missed_days_keeps_the_anchor() {
    let raw = vec![
        RawDailyEntry::new("2024-01-01").with_flow(6),
        RawDailyEntry::new("2024-01-29").with_flow(6),
        RawDailyEntry::new("2024-02-26").with_flow(6),
        RawDailyEntry::new("2024-03-01").with_flow(5),
    ];
    let report = CycleEngine::analyze_raw(&raw, &TrackingSettings::default(), date("2024-03-03"));
    let stats = report.cycle_stats.unwrap();
    assert_eq!(
        stats.cycle_starts,
        vec![date("2024-01-01"), date("2024-01-29"), date("2024-02-26")]
    );
    assert_eq!(stats.last_length, Some(28));
    assert_eq!(stats.avg_length, Some(28));
    assert_eq!(stats.predicted_next_start, Some(date("2024-03-25")));
    assert_eq!(report.phase.day_in_cycle(), Some(7));
    assert_eq!(report.phase.phase, Phase::Rebuilding);
}

#[test]
fn test_cycle_tracking_off_hides_cycle_outputs() {
    let raw = regular_cycles(date("2024-01-01"), 3, 28, 5);
    let settings = TrackingSettings {
        cycle_tracking: false,
        ..TrackingSettings::default()
    };
    let report = CycleEngine::analyze_raw(&raw, &settings, date("2024-02-20"));
    assert!(!report.cycle_tracking);
    assert!(report.cycle_stats.is_none());
    assert!(report.fertile_window.is_none());
    assert_eq!(report.phase.confidence, ConfidenceTier::Learning);
    assert_eq!(report.phase.day_in_cycle(), None);
    assert_eq!(report.phase.strategy, PhaseStrategy::Default);
}

#[test]
fn test_report_is_stable_for_the_same_inputs() {
    let mut raw = regular_cycles(date("2024-01-01"), 3, 30, 5);
    raw.extend(daily_entries(date("2024-03-01"), 14, |offset, day| {
        let entry = RawDailyEntry::new(iso(day)).with_flow(0).with_mood(2);
        if offset % 3 == 0 {
            entry.with_event(Influence::Alcohol).with_symptom("sleep", 3)
        } else {
            entry.with_symptom("sleep", 8)
        }
    }));
    let log = EntryLog::from_raw(&raw);
    let today = date("2024-03-14");

    let first = CycleEngine::analyze(&log, &fertility_settings(), today);
    let second = CycleEngine::analyze(&log, &fertility_settings(), today);
    assert_eq!(first, second);
    assert!(first.trends.relationship.is_some());

    let json = serde_json::to_string(&first).unwrap();
    let restored: EngineReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.cycle_stats, first.cycle_stats);
    assert_eq!(restored.phase, first.phase);
    assert_eq!(restored.fertile_window, first.fertile_window);
    assert_eq!(
        restored.trends.relationship.map(|found| found.description),
        first.trends.relationship.map(|found| found.description)
    );
}

#[test]
fn test_changing_today_moves_through_phases() {
    let raw = regular_cycles(date("2024-01-01"), 3, 28, 5);
    let start = date("2024-01-29");
    let phases: Vec<Phase> = (0..28)
        .map(|offset| {
            CycleEngine::analyze_raw(&raw, &TrackingSettings::default(), start + Duration::days(offset))
                .phase
                .phase
        })
        .collect();

    assert!(phases[..5].iter().all(|phase| *phase == Phase::Reset));
    assert!(phases[5..12].iter().all(|phase| *phase == Phase::Rebuilding));
    assert!(phases[12..15].iter().all(|phase| *phase == Phase::Expressive));
    assert!(phases[15..].iter().all(|phase| *phase == Phase::Protective));
}
