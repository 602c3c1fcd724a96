// ABOUTME: Main library entry point for the Cyclewise cycle-and-symptom pattern engine
// ABOUTME: Re-exports the engine and models, plus configuration, logging, and entry-log import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

#![deny(unsafe_code)]

//! # Cyclewise
//!
//! A personal health-tracking pattern engine. Given a chronological log of
//! daily self-reported entries it derives cycle start dates, cycle-length
//! statistics with a next-start prediction, a phase for the current day with
//! a confidence tier, a fertile-window estimate, and lightweight trend and
//! relationship summaries.
//!
//! The engine is a heuristic estimator, not a medical device. Missing data is
//! reported as `None` or the `Learning` confidence tier rather than guessed.
//!
//! ## Architecture
//!
//! - **`cyclewise-core`**: errors, named constants, and data models
//! - **`cyclewise-intelligence`**: the pure analysis pipeline
//! - **This crate**: environment configuration, logging setup, JSON import,
//!   and the `cyclewise-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use cyclewise::{CycleEngine, RawDailyEntry, TrackingSettings};
//!
//! let entries = vec![
//!     RawDailyEntry::new("2024-03-01").with_flow(6),
//!     RawDailyEntry::new("2024-03-02").with_flow(4),
//! ];
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap_or_default();
//! let report = CycleEngine::analyze_raw(&entries, &TrackingSettings::default(), today);
//! println!("{}", report.phase.phase);
//! ```

/// Unified error types
pub mod errors;

/// Named engine constants
pub mod constants;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Entry-log and settings import from JSON files
pub mod import;

pub use cyclewise_core::models;
pub use cyclewise_core::models::{
    ConfidenceTier, CycleStats, DailyEntry, FertileWindow, FertileWindowSource, Influence, Mood,
    Phase, PhaseEstimate, PhaseStrategy, RawDailyEntry, SymptomKey, TrackingSettings,
    TrendSummary,
};
pub use cyclewise_intelligence as intelligence;
pub use cyclewise_intelligence::{
    CycleEngine, CycleStartDetector, EngineReport, EntryLog, OverrideNormalizer,
};
