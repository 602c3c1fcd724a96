// ABOUTME: Integration tests for cycle length statistics and next-start prediction
// ABOUTME: Regular histories, outliers, sparse starts, and the late-cycle symptom hint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{date, daily_entries, init_test_logging, iso, regular_cycles};
use cyclewise::intelligence::cycle_statistics::CycleStatsCalculator;
use cyclewise::{CycleStartDetector, EntryLog, RawDailyEntry};

#[test]
fn test_three_regular_cycles_predict_the_next_start() {
    init_test_logging();
    let log = EntryLog::from_raw(&regular_cycles(date("2024-01-01"), 3, 28, 5));
    let starts = CycleStartDetector::detect(&log);
    let stats = CycleStatsCalculator::compute(&starts, &log, date("2024-03-10"));

    assert_eq!(stats.cycle_starts, starts);
    assert_eq!(stats.lengths, vec![28, 28]);
    assert_eq!(stats.last_length, Some(28));
    assert_eq!(stats.avg_length, Some(28));
    assert_eq!(stats.predicted_next_start, Some(date("2024-03-25")));
    assert!(stats.prediction_note.contains("last 2 cycles"));
    assert!(stats.prediction_note.contains("estimate"));
}

#[test]
fn test_prediction_is_last_start_plus_average() {
    let log = EntryLog::from_raw(&regular_cycles(date("2023-02-03"), 7, 31, 4));
    let starts = CycleStartDetector::detect(&log);
    let stats = CycleStatsCalculator::compute(&starts, &log, date("2023-09-01"));
    let last = *starts.last().unwrap();
    assert_eq!(stats.avg_length, Some(31));
    assert_eq!(stats.predicted_next_start, Some(last + Duration::days(31)));
}

#[test]
fn test_uneven_lengths_round_the_average() {
    let starts = vec![
        date("2024-01-01"),
        date("2024-01-27"),
        date("2024-02-23"),
        date("2024-03-21"),
    ];
    // 26, 27, 27 -> 26.67
    let stats = CycleStatsCalculator::compute(&starts, &EntryLog::default(), date("2024-03-22"));
    assert_eq!(stats.avg_length, Some(27));
    assert_eq!(stats.predicted_next_start, Some(date("2024-04-17")));
}

#[test]
fn test_long_gap_is_not_averaged_in() {
    let starts = vec![
        date("2024-01-01"),
        date("2024-01-29"),
        date("2024-02-26"),
        date("2024-06-01"),
        date("2024-06-29"),
    ];
    let stats = CycleStatsCalculator::compute(&starts, &EntryLog::default(), date("2024-07-01"));
    assert_eq!(stats.lengths, vec![28, 28, 28]);
    assert_eq!(stats.avg_length, Some(28));
    assert!(stats.lengths.iter().all(|length| (10..=60).contains(length)));
}

#[test]
fn test_single_start_has_no_average_or_prediction() {
    let log = EntryLog::from_raw(&[RawDailyEntry::new("2024-01-01").with_cycle_start_override()]);
    let starts = CycleStartDetector::detect(&log);
    let stats = CycleStatsCalculator::compute(&starts, &log, date("2024-01-05"));
    assert_eq!(stats.cycle_starts, vec![date("2024-01-01")]);
    assert_eq!(stats.avg_length, None);
    assert_eq!(stats.last_length, None);
    assert_eq!(stats.predicted_next_start, None);
    assert!(stats.prediction_note.starts_with("Not enough history"));
}

#[test]
fn test_no_starts_explains_how_to_begin() {
    let stats = CycleStatsCalculator::compute(&[], &EntryLog::default(), date("2024-01-05"));
    assert!(stats.cycle_starts.is_empty());
    assert!(stats.prediction_note.contains("log a period start"));
}

#[test]
fn test_late_cycle_hint_is_appended_to_the_note() {
    let mut raw = regular_cycles(date("2024-01-01"), 2, 28, 5);
    raw.extend(daily_entries(date("2024-02-20"), 5, |_, day| {
        RawDailyEntry::new(iso(day))
            .with_symptom("nightSweats", 7)
            .with_symptom("hair", 6)
            .with_symptom("skin", 6)
    }));
    let log = EntryLog::from_raw(&raw);
    let starts = CycleStartDetector::detect(&log);
    let stats = CycleStatsCalculator::compute(&starts, &log, date("2024-02-24"));
    assert!(stats
        .prediction_note
        .ends_with("which some people notice toward the end of a cycle."));
    assert!(stats.prediction_note.contains("Night sweats, skin changes and hair changes"));
}

#[test]
fn test_single_heavy_day_every_28_days() {
    let raw = daily_entries(date("2024-01-01"), 84, |offset, day| {
        let flow = if offset % 28 == 27 { 8 } else { 0 };
        RawDailyEntry::new(iso(day)).with_flow(flow)
    });
    let log = EntryLog::from_raw(&raw);
    let starts = CycleStartDetector::detect(&log);
    assert_eq!(
        starts,
        vec![date("2024-01-28"), date("2024-02-25"), date("2024-03-24")]
    );
    let stats = CycleStatsCalculator::compute(&starts, &log, date("2024-03-24"));
    assert_eq!(stats.avg_length, Some(28));
    assert_eq!(stats.predicted_next_start, Some(date("2024-04-21")));
}
