// ABOUTME: Core types and constants for the Cyclewise cycle-and-symptom pattern engine
// ABOUTME: Foundation crate with error handling, entry models, settings, and engine constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

#![deny(unsafe_code)]

//! # Cyclewise Core
//!
//! Foundation crate providing shared types and constants for the Cyclewise
//! pattern engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Named detection, statistics, and trend thresholds
//! - **models**: Raw and normalized daily entries, settings, and derived engine outputs

/// Unified error handling system with standard error codes
pub mod errors;

/// Named engine constants organized by component
pub mod constants;

/// Core data models (entries, settings, cycle and trend outputs)
pub mod models;
