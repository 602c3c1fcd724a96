// ABOUTME: Unified error handling re-exported from cyclewise-core
// ABOUTME: Gives the CLI, config, and import layers one AppError/AppResult surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

//! # Unified Error Handling System
//!
//! Error codes, the `AppError` type, and `AppResult` live in `cyclewise-core`
//! so every workspace crate shares them. The engine itself never fails; these
//! are for the layers that touch files and the environment.

pub use cyclewise_core::errors::{AppError, AppResult, ErrorCode};
