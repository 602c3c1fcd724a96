// ABOUTME: Core data models for the Cyclewise pattern engine
// ABOUTME: Re-exports entry, settings, cycle, and trend model types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

/// Raw and normalized daily entries with symptom and influence catalogs
pub mod entry;
/// Settings bag for an analysis run
pub mod settings;
/// Cycle statistics, phases, confidence, and fertile window
pub mod cycle;
/// Rolling averages, shifts, and relationship signals
pub mod trends;

pub use cycle::{
    ConfidenceTier, CycleStats, FertileWindow, FertileWindowSource, Phase, PhaseEstimate,
    PhaseStrategy,
};
pub use entry::{DailyEntry, Influence, Mood, RawDailyEntry, RawEvents, SymptomKey};
pub use settings::TrackingSettings;
pub use trends::{
    RelationshipDescriptor, RollingAverage, ShiftDescriptor, ShiftDirection, ShiftMagnitude,
    Signal, TrendSummary,
};
