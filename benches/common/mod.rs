// ABOUTME: Common benchmark utilities and fixtures for the engine benchmarks
// ABOUTME: Provides deterministic synthetic entry logs for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
