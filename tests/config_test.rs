// ABOUTME: Tests for environment-based server configuration and logging setup
// ABOUTME: Mutates process environment variables, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

use std::collections::HashMap;
use std::env;

use pierre_activity_server::config::environment::{LogFormat, LoggingConfig, ServerConfig};
use pierre_activity_server::errors::ErrorCode;
use pierre_activity_server::logging::build_filter;
use serial_test::serial;

const VARS: [&str; 8] = [
    "HTTP_PORT",
    "HTTP_HOST",
    "DATABASE_URL",
    "LOG_LEVEL",
    "LOG_FORMAT",
    "PIERRE_MAX_INPUT_CHARS",
    "PIERRE_MAX_BATCH_SIZE",
    "PIERRE_REQUEST_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
#[serial]
fn test_defaults_when_environment_is_empty() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_address(), "127.0.0.1:8081");
    assert_eq!(config.database.url, "sqlite:./data/activities.db");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.limits.max_input_chars, 1000);
    assert_eq!(config.limits.max_batch_size, 100);
    assert_eq!(config.limits.request_timeout_secs, 30);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("HTTP_HOST", "0.0.0.0");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("PIERRE_MAX_BATCH_SIZE", "25");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:9090");
    assert_eq!(config.database.url, "sqlite::memory:");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.limits.max_batch_size, 25);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_is_config_error() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("HTTP_PORT"));

    clear_env();
}

#[test]
#[serial]
fn test_negative_limit_is_config_error() {
    clear_env();
    env::set_var("PIERRE_MAX_INPUT_CHARS", "-5");

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);

    clear_env();
}

#[test]
fn test_lookup_trims_values() {
    let config =
        ServerConfig::from_lookup(lookup_from(&[("PIERRE_MAX_INPUT_CHARS", " 250 ")])).unwrap();
    assert_eq!(config.limits.max_input_chars, 250);
}

#[test]
fn test_zero_limits_rejected() {
    for var in [
        "PIERRE_MAX_INPUT_CHARS",
        "PIERRE_MAX_BATCH_SIZE",
        "PIERRE_REQUEST_TIMEOUT_SECS",
    ] {
        let err = ServerConfig::from_lookup(lookup_from(&[(var, "0")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError, "{var}");
        assert!(err.message.contains(var), "{var}");
    }
}

#[test]
fn test_empty_database_url_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("Compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert_eq!(" pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert!("xml".parse::<LogFormat>().is_err());
    assert!(ServerConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).is_err());
}

#[test]
#[serial]
fn test_log_filter_from_level() {
    env::remove_var("RUST_LOG");

    let valid = LoggingConfig {
        level: "pierre_activity_server=debug,tower_http=info".to_owned(),
        format: LogFormat::Json,
    };
    assert!(build_filter(&valid).is_ok());

    let invalid = LoggingConfig {
        level: "pierre=loudest".to_owned(),
        format: LogFormat::Compact,
    };
    assert_eq!(build_filter(&invalid).unwrap_err().code, ErrorCode::ConfigError);
}
