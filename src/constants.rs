// ABOUTME: Named constants re-exported from cyclewise-core for application-level use
// ABOUTME: Detection thresholds, statistics windows, phase geometry, env variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

pub use cyclewise_core::constants::{
    cycle_stats, detection, env_config, fertility, phase, scales, service_names, trends,
};
