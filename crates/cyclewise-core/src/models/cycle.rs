// ABOUTME: Derived cycle outputs: statistics, phase, confidence tier, and fertile window
// ABOUTME: Plain serializable data returned by the pattern engine, never persisted by it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Cycle-length statistics and next-start prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleStats {
    /// Detected starts, strictly increasing
    pub cycle_starts: Vec<NaiveDate>,
    /// Plausible gaps between consecutive starts (days), oldest first
    pub lengths: Vec<u32>,
    /// Most recent gap, only when plausible
    pub last_length: Option<u32>,
    /// Rounded mean of the most recent plausible gaps
    pub avg_length: Option<u32>,
    /// Last start plus `avg_length`; absent without an average
    pub predicted_next_start: Option<NaiveDate>,
    /// Human-readable basis for the prediction plus any soft hint
    pub prediction_note: String,
}

/// The four soft-named cycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Menstrual
    Reset,
    /// Follicular
    Rebuilding,
    /// Ovulatory
    Expressive,
    /// Luteal
    Protective,
}

impl Phase {
    /// Fixed order used for deterministic tie-breaks
    pub const ORDER: [Self; 4] = [
        Self::Reset,
        Self::Rebuilding,
        Self::Expressive,
        Self::Protective,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::Rebuilding => "Rebuilding",
            Self::Expressive => "Expressive",
            Self::Protective => "Protective",
        }
    }

    /// Biological phase this maps onto
    #[must_use]
    pub const fn biological_name(self) -> &'static str {
        match self {
            Self::Reset => "menstrual",
            Self::Rebuilding => "follicular",
            Self::Expressive => "ovulatory",
            Self::Protective => "luteal",
        }
    }

    /// One-line description suitable for a summary card
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Reset => "A lower-energy stretch; rest and warmth tend to help.",
            Self::Rebuilding => "Energy and focus often start to climb.",
            Self::Expressive => "Often the most outgoing, energetic point of the cycle.",
            Self::Protective => "Energy may dip and sensitivity can rise; go gently.",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.biological_name())
    }
}

/// How much anchored history backs an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// Not enough data yet
    Learning,
    /// Some anchored history
    Emerging,
    /// Several anchored cycles
    Established,
}

impl ConfidenceTier {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Learning => "learning",
            Self::Emerging => "emerging",
            Self::Established => "established",
        }
    }
}

/// Which strategy produced a phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum PhaseStrategy {
    /// Position within a detected cycle
    Boundary {
        /// 1-indexed day since the most recent start
        day_in_cycle: u32,
        /// Personal average or the default length
        cycle_length: u32,
    },
    /// Best-matching reference symptom profile
    SignalProfile {
        /// Similarity score of the winning profile (0-1)
        score: f64,
        /// Signals that had data
        signals_used: usize,
    },
    /// Too little data for either strategy
    Default,
}

/// Phase classification for a given day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseEstimate {
    /// Classified phase
    pub phase: Phase,
    /// Confidence tier from data volume and anchoring
    pub confidence: ConfidenceTier,
    /// Strategy that produced the phase
    pub strategy: PhaseStrategy,
    /// Flow was logged on the classified day
    pub bleeding_today: bool,
}

impl PhaseEstimate {
    /// Day in cycle when the boundary strategy was used
    #[must_use]
    pub const fn day_in_cycle(&self) -> Option<u32> {
        match self.strategy {
            PhaseStrategy::Boundary { day_in_cycle, .. } => Some(day_in_cycle),
            _ => None,
        }
    }
}

/// Where a fertile window came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FertileWindowSource {
    /// User-marked ovulation dates
    Manual,
    /// Ovulation predicted from detected starts
    Predicted,
    /// Nothing to base a window on
    None,
}

/// Estimated fertile days, never overlapping period days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertileWindow {
    /// Fertile dates
    pub days: BTreeSet<NaiveDate>,
    /// Ovulation dates the window was built around
    pub ovulation_days: BTreeSet<NaiveDate>,
    /// Basis of the estimate
    pub source: FertileWindowSource,
}

impl FertileWindow {
    /// Empty window with no basis
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            days: BTreeSet::new(),
            ovulation_days: BTreeSet::new(),
            source: FertileWindowSource::None,
        }
    }

    /// Whether a date falls in the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }
}
