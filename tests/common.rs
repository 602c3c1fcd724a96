// ABOUTME: Common test utilities shared by the integration tests
// ABOUTME: Quiet logging setup, date helpers, and synthetic entry log builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    dead_code,
    missing_docs
)]

use chrono::{Duration, NaiveDate};
use cyclewise::RawDailyEntry;
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("valid test date")
}

/// ISO string for a date
pub fn iso(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// One entry per day from `start` for `days` days, built by `make(day_index, date)`
pub fn daily_entries(
    start: NaiveDate,
    days: i64,
    make: impl Fn(i64, NaiveDate) -> RawDailyEntry,
) -> Vec<RawDailyEntry> {
    (0..days)
        .map(|offset| {
            let day = start + Duration::days(offset);
            make(offset, day)
        })
        .collect()
}

/// Daily log of regular cycles: `bleed_days` of flow 6 at the start of each
/// `cycle_length`-day cycle and dry days otherwise
pub fn regular_cycles(
    first_start: NaiveDate,
    cycles: i64,
    cycle_length: i64,
    bleed_days: i64,
) -> Vec<RawDailyEntry> {
    daily_entries(first_start, cycles * cycle_length, |offset, day| {
        let flow = if offset % cycle_length < bleed_days { 6 } else { 0 };
        RawDailyEntry::new(iso(day)).with_flow(flow)
    })
}

/// Cycle starts `cycle_length` days apart
pub fn start_dates(first_start: NaiveDate, count: i64, cycle_length: i64) -> Vec<NaiveDate> {
    (0..count)
        .map(|index| first_start + Duration::days(index * cycle_length))
        .collect()
}
