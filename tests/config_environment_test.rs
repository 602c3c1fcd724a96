// ABOUTME: Integration tests for environment configuration and run configuration layering
// ABOUTME: Uses the real process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyclewise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, init_test_logging};
use cyclewise::config::{EngineEnvironment, RunConfig};
use cyclewise::constants::env_config;
use cyclewise::errors::ErrorCode;
use cyclewise::{Influence, SymptomKey};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

const ALL_VARS: [&str; 5] = [
    env_config::CYCLE_TRACKING,
    env_config::FERTILITY_MODE,
    env_config::ENABLED_SYMPTOMS,
    env_config::TRACKED_INFLUENCES,
    env_config::TODAY,
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_process_environment_overrides_settings() {
    init_test_logging();
    clear_env();
    env::set_var(env_config::CYCLE_TRACKING, "off");
    env::set_var(env_config::TRACKED_INFLUENCES, "caffeine, late_night");
    env::set_var(env_config::TODAY, "2024-04-02");

    let environment = EngineEnvironment::from_env().unwrap();
    assert_eq!(environment.cycle_tracking, Some(false));
    assert_eq!(environment.fertility_mode, None);
    assert_eq!(environment.today, Some(date("2024-04-02")));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{}").unwrap();
    let config = RunConfig::resolve(
        Some(&path),
        Some(date("2024-05-01")),
        &environment,
        date("2024-06-01"),
    );
    clear_env();

    let config = config.unwrap();
    assert!(!config.settings.cycle_tracking);
    assert_eq!(
        config.settings.tracked_influences,
        [Influence::Caffeine, Influence::LateNight].into_iter().collect()
    );
    // An explicit date beats the environment
    assert_eq!(config.today, date("2024-05-01"));
}

#[test]
#[serial]
fn test_bad_boolean_is_rejected() {
    clear_env();
    env::set_var(env_config::FERTILITY_MODE, "maybe");
    let result = EngineEnvironment::from_env();
    clear_env();

    let err = result.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(env_config::FERTILITY_MODE));
}

#[test]
#[serial]
fn test_settings_file_then_environment_layering() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{"fertility_mode": true, "enabled_symptoms": ["flow", "cramps", "sleep"]}"#,
    )
    .unwrap();

    env::set_var(env_config::ENABLED_SYMPTOMS, "flow,energy");
    let environment = EngineEnvironment::from_env().unwrap();
    clear_env();

    let config = RunConfig::resolve(Some(&path), None, &environment, date("2024-06-01")).unwrap();
    assert!(config.settings.fertility_mode);
    assert!(config.settings.cycle_tracking);
    assert_eq!(
        config.settings.enabled_symptoms,
        [SymptomKey::Flow, SymptomKey::Energy].into_iter().collect()
    );
    assert_eq!(config.today, date("2024-06-01"));
}

#[test]
#[serial]
fn test_broken_settings_file_is_a_config_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ fertility_mode: yes").unwrap();

    let err = RunConfig::resolve(
        Some(&path),
        None,
        &EngineEnvironment::default(),
        date("2024-06-01"),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    let missing = dir.path().join("absent.json");
    let err = RunConfig::resolve(
        Some(&missing),
        None,
        &EngineEnvironment::default(),
        date("2024-06-01"),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
