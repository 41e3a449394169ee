// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment overrides, defaults, and invalid value handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ergoload::config::{EngineSettings, LogLevel};
use ergoload::logging::{LogFormat, LoggingConfig};
use ergoload::{BoundaryRule, ClassifierConfig, EngineConfig, SeverityScale};
use serial_test::serial;
use std::env;

const ENGINE_VARS: [&str; 2] = ["ERGOLOAD_BOUNDARY_RULE", "ERGOLOAD_SCALES"];
const LOGGING_VARS: [&str; 4] = ["RUST_LOG", "LOG_FORMAT", "LOG_INCLUDE_LOCATION", "LOG_INCLUDE_THREAD"];

fn clear_env() {
    for name in ENGINE_VARS.iter().chain(LOGGING_VARS.iter()) {
        env::remove_var(name);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("ergoload=debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Warn); // Default fallback
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("Pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let settings = EngineSettings::from_env().unwrap();
    assert_eq!(settings.engine, EngineConfig::default());
    assert_eq!(settings.engine.classifier.boundary_rule, BoundaryRule::LowerBand);
    assert_eq!(settings.logging, LoggingConfig::default());
}

#[test]
#[serial]
fn test_engine_overrides() {
    clear_env();
    env::set_var("ERGOLOAD_BOUNDARY_RULE", "upper");
    env::set_var("ERGOLOAD_SCALES", "aiha");

    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.classifier.boundary_rule, BoundaryRule::UpperBand);
    assert_eq!(config.classifier.scales, vec![SeverityScale::Aiha]);
    clear_env();
}

#[test]
#[serial]
fn test_scale_list_tolerates_spaces() {
    clear_env();
    env::set_var("ERGOLOAD_SCALES", " aiha , rsst ,");
    let config = ClassifierConfig::from_env().unwrap();
    assert_eq!(config.scales, vec![SeverityScale::Aiha, SeverityScale::Rsst]);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_engine_values_are_rejected() {
    clear_env();
    env::set_var("ERGOLOAD_BOUNDARY_RULE", "sideways");
    assert!(EngineConfig::from_env().is_err());

    clear_env();
    env::set_var("ERGOLOAD_SCALES", "rsst,rsst");
    assert!(EngineConfig::from_env().is_err());

    clear_env();
    env::set_var("ERGOLOAD_SCALES", " , ");
    assert!(EngineSettings::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_logging_overrides() {
    clear_env();
    env::set_var("RUST_LOG", "ergoload_engine=trace");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let logging = LoggingConfig::from_env();
    assert_eq!(logging.level, LogLevel::Trace);
    assert_eq!(logging.directives.as_deref(), Some("ergoload_engine=trace"));
    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
    assert!(!logging.include_thread);

    let verbose = logging.with_level(LogLevel::Debug);
    assert_eq!(verbose.level, LogLevel::Debug);
    assert!(verbose.directives.is_none());
    clear_env();
}
