// ABOUTME: Logging configuration and structured logging setup for the ergoload tools
// ABOUTME: Configures log level, output format and metadata of the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! Structured logging configuration
//!
//! Logs go to stderr so that evaluation output on stdout stays machine-readable.

use crate::config::environment::LogLevel;
use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in startup logs
pub const SERVICE_NAME: &str = "ergoload";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level used when no filter directives are given
    pub level: LogLevel,
    /// Raw `RUST_LOG` directives, taking precedence over `level`
    pub directives: Option<String>,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log collectors
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            directives: None,
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let directives = env::var("RUST_LOG").ok();
        Self {
            level: directives
                .as_deref()
                .map_or(defaults.level, LogLevel::from_str_or_default),
            directives,
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |format| LogFormat::from_str_or_default(&format)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            ..defaults
        }
    }

    /// Same configuration at `level`, discarding filter directives
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self.directives = None;
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter = self.directives.as_deref().map_or_else(
            || EnvFilter::new(self.level.to_string()),
            EnvFilter::new,
        );

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(false)
                    .with_writer(io::stderr);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level.to_string(),
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                }
            }
        });

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            "Logging initialized: {config_summary}"
        );
    }
}

/// Initialize logging from environment, raising the level to debug when `verbose`
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env(verbose: bool) -> Result<()> {
    let config = LoggingConfig::from_env();
    let config = if verbose && config.level.to_tracing_level() < Level::DEBUG {
        config.with_level(LogLevel::Debug)
    } else {
        config
    };
    config.init()
}
