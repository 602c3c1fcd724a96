// ABOUTME: Re-exports command modules for cyclewise-cli
// ABOUTME: Provides analysis, start listing, and override editing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

pub mod analyze;
pub mod overrides;
pub mod starts;
