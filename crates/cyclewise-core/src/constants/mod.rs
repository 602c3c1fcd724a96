// ABOUTME: Constants module with component-separated organization
// ABOUTME: Named thresholds for start detection, cycle statistics, phases, fertility, and trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! Constants module
//!
//! The engine's thresholds were chosen empirically and changing any of them
//! changes what users see, so each one lives here under a name rather than
//! inline at its call site.

/// Intensity scales shared by every component
pub mod scales {
    /// Upper bound of the current symptom intensity scale
    pub const INTENSITY_MAX: f64 = 10.0;

    /// Lower bound of the current symptom intensity scale
    pub const INTENSITY_MIN: f64 = 0.0;

    /// Divisor applied to legacy 0-100 values
    pub const LEGACY_SCALE_DIVISOR: f64 = 10.0;

    /// Lowest mood ordinal
    pub const MOOD_MIN: u8 = 1;

    /// Highest mood ordinal
    pub const MOOD_MAX: u8 = 3;
}

/// Cycle-start detection thresholds
pub mod detection {
    /// Effective flow at or above this counts as a bleed day
    pub const BLEED_FLOW_THRESHOLD: f64 = 3.0;

    /// Consecutive spotting days promoted to a cycle start
    pub const SPOTTING_STREAK_FOR_START: u32 = 2;

    /// Largest calendar gap (days) between logged entries that keeps a bleed ongoing.
    /// Anything shorter than the shortest plausible cycle belongs to the same period.
    pub const BLEED_CONTINUITY_GAP_DAYS: i64 = super::cycle_stats::MIN_PLAUSIBLE_CYCLE_DAYS - 1;
}

/// Cycle statistics
pub mod cycle_stats {
    /// Shortest gap between starts accepted as a real cycle
    pub const MIN_PLAUSIBLE_CYCLE_DAYS: i64 = 10;

    /// Longest gap between starts accepted as a real cycle
    pub const MAX_PLAUSIBLE_CYCLE_DAYS: i64 = 60;

    /// Number of most recent plausible cycles in the rolling average
    pub const AVERAGE_WINDOW_CYCLES: usize = 6;

    /// Days of recent entries inspected for the late-cycle symptom hint
    pub const LATE_CYCLE_HINT_WINDOW_DAYS: i64 = 5;

    /// Mean intensity at which a late-cycle symptom counts as running high
    pub const LATE_CYCLE_HIGH_INTENSITY: f64 = 6.0;

    /// Number of high late-cycle symptoms needed before the hint is shown
    pub const LATE_CYCLE_MIN_HIGH_SYMPTOMS: usize = 2;
}

/// Phase classification
pub mod phase {
    /// Cycle length assumed when no personal average exists
    pub const DEFAULT_CYCLE_LENGTH_DAYS: i64 = 28;

    /// Days from ovulation to the next start (luteal length)
    pub const LUTEAL_OFFSET_DAYS: i64 = 14;

    /// Earliest allowed ovulation center day
    pub const MIN_OVULATION_CENTER_DAY: i64 = 10;

    /// Ovulation center stays at least this many days before cycle end
    pub const OVULATION_CENTER_END_MARGIN: i64 = 10;

    /// Half-width of the ovulation window around the center
    pub const OVULATION_WINDOW_HALF_WIDTH: i64 = 1;

    /// Earliest allowed ovulation window start day
    pub const MIN_OVULATION_WINDOW_START: i64 = 8;

    /// Ovulation window start stays at least this many days before cycle end
    pub const OVULATION_START_END_MARGIN: i64 = 8;

    /// Ovulation window end stays at least this many days before cycle end
    pub const OVULATION_END_END_MARGIN: i64 = 6;

    /// Days in cycle that are always the menstrual phase
    pub const MENSTRUAL_PHASE_DAYS: i64 = 5;

    /// Entries considered by the signal-profile fallback
    pub const SIGNAL_LOOKBACK_ENTRIES: usize = 10;

    /// Signals with data needed before profiles are scored
    pub const MIN_SIGNALS_FOR_PROFILE: usize = 3;

    /// Starts required for the Established tier
    pub const ESTABLISHED_MIN_STARTS: usize = 2;

    /// Distinct logged days required for the Established tier
    pub const ESTABLISHED_MIN_DAYS: usize = 21;

    /// Starts required for the Emerging tier
    pub const EMERGING_MIN_STARTS: usize = 1;

    /// Distinct logged days required for the Emerging tier
    pub const EMERGING_MIN_DAYS: usize = 14;
}

/// Fertile window estimation
pub mod fertility {
    /// Days before ovulation included in the window
    pub const DAYS_BEFORE_OVULATION: i64 = 5;

    /// Days after ovulation included in the window
    pub const DAYS_AFTER_OVULATION: i64 = 1;
}

/// Trend and relationship analysis
pub mod trends {
    /// Short rolling window (days)
    pub const SHORT_WINDOW_DAYS: i64 = 7;

    /// Long rolling window (days)
    pub const LONG_WINDOW_DAYS: i64 = 14;

    /// Samples needed on each side of a week-over-week comparison
    pub const MIN_SHIFT_SAMPLES: usize = 2;

    /// Below this scaled delta a shift is "steady"
    pub const SHIFT_STEADY_BELOW: f64 = 0.4;

    /// Below this scaled delta a shift is "a little"
    pub const SHIFT_A_LITTLE_BELOW: f64 = 1.0;

    /// Below this scaled delta a shift is "noticeably"; otherwise "much"
    pub const SHIFT_NOTICEABLY_BELOW: f64 = 2.0;

    /// Window (days) for influence relationship comparisons
    pub const RELATIONSHIP_WINDOW_DAYS: i64 = 14;

    /// Entries required on each side of a relationship comparison
    pub const RELATIONSHIP_MIN_EXAMPLES: usize = 4;

    /// Valid symptom values required on each side of a relationship comparison
    pub const RELATIONSHIP_MIN_VALUES: usize = 3;

    /// Smallest mean difference surfaced as a relationship
    pub const RELATIONSHIP_MIN_EFFECT: f64 = 0.7;

    /// FNV-1a 32-bit offset basis used for daily rotation
    pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

    /// FNV-1a 32-bit prime used for daily rotation
    pub const FNV_PRIME: u32 = 0x0100_0193;
}

/// Service identity for structured logging
pub mod service_names {
    /// Service name attached to startup logs
    pub const CYCLEWISE: &str = "cyclewise";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Enables or disables cycle tracking
    pub const CYCLE_TRACKING: &str = "CYCLEWISE_CYCLE_TRACKING";
    /// Enables or disables fertility mode
    pub const FERTILITY_MODE: &str = "CYCLEWISE_FERTILITY_MODE";
    /// Comma-separated enabled symptom keys
    pub const ENABLED_SYMPTOMS: &str = "CYCLEWISE_ENABLED_SYMPTOMS";
    /// Comma-separated tracked influence keys
    pub const TRACKED_INFLUENCES: &str = "CYCLEWISE_TRACKED_INFLUENCES";
    /// Fixed analysis date (YYYY-MM-DD)
    pub const TODAY: &str = "CYCLEWISE_TODAY";
}
