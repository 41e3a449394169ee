// ABOUTME: Configuration error types for engine settings
// ABOUTME: Parse failures and invalid values read from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment variable access error (e.g. not unicode)
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Value rejected by validation
    #[error("Invalid value: {0}")]
    InvalidValue(&'static str),
}
