// ABOUTME: Trend and relationship outputs for narrating patterns back to the user
// ABOUTME: Rolling averages, week-over-week shift descriptors, and influence relationships
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

use serde::{Deserialize, Serialize};

use super::entry::{Influence, SymptomKey};

/// A tracked signal: a symptom or mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "key")]
pub enum Signal {
    /// Mood mapped onto 0-10
    Mood,
    /// A symptom intensity
    Symptom(SymptomKey),
}

impl Signal {
    /// Lowercase label for sentences
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Symptom(key) => key.label(),
        }
    }
}

/// Trailing-window means for one signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingAverage {
    /// Signal
    pub signal: Signal,
    /// Mean over the last 7 days
    pub mean_7d: Option<f64>,
    /// Samples behind `mean_7d`
    pub samples_7d: usize,
    /// Mean over the last 14 days
    pub mean_14d: Option<f64>,
    /// Samples behind `mean_14d`
    pub samples_14d: usize,
}

/// Direction of a week-over-week shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftDirection {
    /// Higher than last week
    Up,
    /// Lower than last week
    Down,
    /// No meaningful change
    Steady,
}

/// Size of a week-over-week shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftMagnitude {
    /// Below the steady threshold
    Steady,
    /// Small change
    ALittle,
    /// Clear change
    Noticeably,
    /// Large change
    Much,
}

impl ShiftMagnitude {
    /// Adverb used in shift sentences
    #[must_use]
    pub const fn adverb(self) -> &'static str {
        match self {
            Self::Steady => "steady",
            Self::ALittle => "a little",
            Self::Noticeably => "noticeably",
            Self::Much => "much",
        }
    }
}

/// Last-7 vs previous-7 comparison for one signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDescriptor {
    /// Signal
    pub signal: Signal,
    /// Direction
    pub direction: ShiftDirection,
    /// Magnitude bucket of the scaled delta
    pub magnitude: ShiftMagnitude,
    /// Mean over the last 7 days
    pub recent_mean: f64,
    /// Mean over the 7 days before that
    pub previous_mean: f64,
    /// Unscaled difference (recent - previous)
    pub delta: f64,
    /// Delta scaled by the consistency factor; the magnitude is bucketed from this
    pub scaled_delta: f64,
    /// Consistency factor from sample counts (0-1)
    pub consistency: f64,
    /// Sentence ready for display
    pub description: String,
}

impl ShiftDescriptor {
    /// Whether the shift is worth mentioning
    #[must_use]
    pub fn is_notable(&self) -> bool {
        self.magnitude != ShiftMagnitude::Steady
    }
}

/// Mean difference of a symptom with vs without an influence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDescriptor {
    /// Influence compared
    pub influence: Influence,
    /// Symptom compared
    pub symptom: SymptomKey,
    /// Mean on days with the influence
    pub mean_with: f64,
    /// Mean on days without it
    pub mean_without: f64,
    /// `mean_with - mean_without`
    pub difference: f64,
    /// Valid values on the "with" side
    pub samples_with: usize,
    /// Valid values on the "without" side
    pub samples_without: usize,
    /// Qualifying pairs the shown one was rotated from
    pub candidate_count: usize,
    /// Sentence ready for display
    pub description: String,
}

/// Trend output for one analysis day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Rolling means per tracked signal
    pub rolling: Vec<RollingAverage>,
    /// Shift descriptors for signals with enough data
    pub shifts: Vec<ShiftDescriptor>,
    /// At most one relationship, rotated daily
    pub relationship: Option<RelationshipDescriptor>,
}
