// ABOUTME: Engine configuration: classifier settings loaded from the environment
// ABOUTME: Re-exports ClassifierConfig, EngineConfig and ConfigError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! Engine configuration
//!
//! Defaults reproduce the published behavior: values on a boundary fall in
//! the lower band and results are classified on both the RSST and AIHA
//! scales. Overrides come from `ERGOLOAD_*` environment variables.

mod classifier;
mod error;

pub use classifier::ClassifierConfig;
pub use error::ConfigError;

use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Severity classification settings
    pub classifier: ClassifierConfig,
}

impl EngineConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if an `ERGOLOAD_*` variable holds an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            classifier: ClassifierConfig::from_env()?,
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any section is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classifier.validate()
    }
}
