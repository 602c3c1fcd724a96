// ABOUTME: Cycle-and-symptom pattern engine crate root
// ABOUTME: Normalization, cycle detection, statistics, phases, fertile window, trends, orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

#![deny(unsafe_code)]

//! # Cyclewise Intelligence
//!
//! Pure, deterministic analysis over a chronological log of daily
//! self-reported entries. Every function here is a function of the entry log,
//! the tracking settings, and the analysis date; nothing is cached or
//! written back.
//!
//! Components, leaf first:
//!
//! - [`normalizer`]: the single scale boundary, raw records into [`EntryLog`]
//! - [`cycle_detection`]: cycle start dates and period days
//! - [`cycle_statistics`]: cycle lengths, average, next-start prediction
//! - [`phase_classifier`]: phase for a day plus a confidence tier
//! - [`fertile_window`]: fertile days from manual or predicted ovulation
//! - [`trend_analysis`]: rolling means, weekly shifts, influence relationships
//! - [`engine`]: [`CycleEngine`] running all of the above

/// Entry normalization and the entry log
pub mod normalizer;

/// Cycle start detection and override normalization
pub mod cycle_detection;

/// Cycle length statistics
pub mod cycle_statistics;

/// Phase classification and confidence
pub mod phase_classifier;

/// Fertile window estimation
pub mod fertile_window;

/// Trends and relationship signals
pub mod trend_analysis;

/// Pipeline orchestration
pub mod engine;

pub use cycle_detection::{period_days, CycleStartDetector, FlowClass, OverrideNormalizer};
pub use cycle_statistics::CycleStatsCalculator;
pub use engine::{CycleEngine, EngineReport};
pub use fertile_window::FertileWindowEstimator;
pub use normalizer::{EntryLog, EntryNormalizer};
pub use phase_classifier::{PhaseClassifier, ProfileMatch};
pub use trend_analysis::TrendAnalyzer;
