// ABOUTME: Output formatting helpers for cyclewise-cli
// ABOUTME: Renders engine reports, cycle start lists, and override edits as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use chrono::NaiveDate;
use cyclewise::intelligence::cycle_statistics::cycle_gaps;
use cyclewise::{EngineReport, FertileWindowSource, PhaseStrategy};
use std::path::Path;

fn format_mean(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |mean| format!("{mean:.1}"))
}

/// Display a full engine report
pub fn display_report(report: &EngineReport) {
    println!("\nCyclewise report for {}", report.today);
    println!("{}", "=".repeat(60));
    println!("Entries considered: {}", report.entries_considered);

    let phase = &report.phase;
    println!("\nPHASE");
    println!("   {}", phase.phase);
    println!("   {}", phase.phase.description());
    println!("   Confidence: {}", phase.confidence.as_str());
    match phase.strategy {
        PhaseStrategy::Boundary {
            day_in_cycle,
            cycle_length,
        } => println!("   Day {day_in_cycle} of a ~{cycle_length}-day cycle"),
        PhaseStrategy::SignalProfile {
            score,
            signals_used,
        } => println!("   Matched from {signals_used} recent signals (similarity {score:.2})"),
        PhaseStrategy::Default => println!("   Not enough recent data; showing the default phase"),
    }
    if phase.bleeding_today {
        println!("   Flow logged today");
    }

    match &report.cycle_stats {
        Some(stats) => {
            println!("\nCYCLE");
            println!("   Starts detected: {}", stats.cycle_starts.len());
            if let Some(last) = stats.cycle_starts.last() {
                println!("   Most recent start: {last}");
            }
            if let Some(length) = stats.last_length {
                println!("   Last cycle: {length} days");
            }
            if let Some(avg) = stats.avg_length {
                println!("   Average cycle: {avg} days");
            }
            if let Some(next) = stats.predicted_next_start {
                println!("   Next start (estimate): {next}");
            }
            println!("   {}", stats.prediction_note);
        }
        None => println!("\nCYCLE\n   Cycle tracking is off"),
    }

    if let Some(window) = &report.fertile_window {
        println!("\nFERTILE WINDOW");
        match window.source {
            FertileWindowSource::None => println!("   No basis for an estimate yet"),
            source => {
                let basis = if source == FertileWindowSource::Manual {
                    "marked ovulation days"
                } else {
                    "predicted ovulation"
                };
                let upcoming: Vec<String> = window
                    .days
                    .range(report.today..)
                    .take(7)
                    .map(NaiveDate::to_string)
                    .collect();
                println!("   Based on {basis}; {} days in total", window.days.len());
                if !upcoming.is_empty() {
                    println!("   Upcoming: {}", upcoming.join(", "));
                }
            }
        }
    }

    println!("\nTRENDS (7-day / 14-day means)");
    for rolling in report.trends.rolling.iter().filter(|rolling| rolling.samples_14d > 0) {
        println!(
            "   {:<18} {:>5} / {:>5}",
            rolling.signal.label(),
            format_mean(rolling.mean_7d),
            format_mean(rolling.mean_14d)
        );
    }
    for shift in report.trends.shifts.iter().filter(|shift| shift.is_notable()) {
        println!("   • {}", shift.description);
    }
    if let Some(relationship) = &report.trends.relationship {
        println!("\nPATTERN");
        println!("   {}", relationship.description);
    }
    println!();
}

/// Display detected cycle starts with the gap before each
pub fn display_starts(starts: &[NaiveDate]) {
    if starts.is_empty() {
        println!("No cycle starts detected");
        return;
    }
    let gaps = cycle_gaps(starts);
    for (index, start) in starts.iter().enumerate() {
        match index.checked_sub(1).and_then(|previous| gaps.get(previous)) {
            Some(gap) => println!("{start}  (+{gap} days)"),
            None => println!("{start}"),
        }
    }
}

/// Confirm an override edit
pub fn display_override_change(date: NaiveDate, marked: bool, target: &Path) {
    if marked {
        println!("Marked {date} as a cycle start; other marked starts were cleared.");
    } else {
        println!("Cleared the cycle start mark on {date}.");
    }
    println!("Wrote {}", target.display());
}
