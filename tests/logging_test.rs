// ABOUTME: Integration tests for logging configuration
// ABOUTME: Validates environment handling and subscriber initialization behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use grocermator::logging::{AppLogger, LogFormat, LoggingConfig, SERVICE_NAME};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 7] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "SERVICE_VERSION",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
];

fn clear_logging_vars() {
    for name in LOGGING_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_vars();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    // Production turns on location and thread output
    assert!(config.include_location);
    assert!(config.include_thread);

    clear_logging_vars();
}

#[test]
#[serial]
fn test_logging_config_defaults_without_env() {
    clear_logging_vars();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, SERVICE_NAME);
    assert!(!config.include_location);
    assert!(!config.include_thread);
}

#[test]
#[serial]
fn test_location_flag_in_development() {
    clear_logging_vars();
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("LOG_FORMAT", "compact");

    let config = LoggingConfig::from_env();
    assert!(config.include_location);
    assert!(!config.include_thread);
    assert_eq!(config.format, LogFormat::Compact);

    clear_logging_vars();
}

#[test]
#[serial]
fn test_second_init_reports_error() {
    clear_logging_vars();
    let config = LoggingConfig {
        format: LogFormat::Compact,
        level: "warn".into(),
        ..LoggingConfig::default()
    };

    // Another test binary may have installed a subscriber first; either way the
    // second call must fail rather than panic.
    let _ = config.init();
    assert!(config.init().is_err());

    AppLogger::log_storage_operation("set", "grocermator-data", true);
    AppLogger::log_export("grocermator-backup-2025-01-01.json", 42);
}
