// ABOUTME: Environment configuration for the ergoload tools
// ABOUTME: Strongly typed log level and engine settings parsed from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! Environment-based configuration

use crate::logging::LoggingConfig;
use ergoload_engine::config::{ConfigError, EngineConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::Level;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level - only critical errors
    Error,
    /// Warning level - rejected activities and potential issues
    #[default]
    Warn,
    /// Info level - normal operational messages
    Info,
    /// Debug level - per-activity evaluation details
    Debug,
    /// Trace level - very verbose tracing
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    ///
    /// Filter directives such as `ergoload_engine=debug` keep the level
    /// after the last `=`.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        let level = s.rsplit('=').next().unwrap_or(s);
        match level.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Settings of one ergoload process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Engine configuration
    pub engine: EngineConfig,
}

impl EngineSettings {
    /// Load every setting from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an `ERGOLOAD_*` variable holds an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            logging: LoggingConfig::from_env(),
            engine: EngineConfig::from_env()?,
        })
    }
}
