// ABOUTME: Severity classifier configuration with environment overrides
// ABOUTME: Boundary tie rule and the set of enabled severity scales
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use super::ConfigError;
use crate::classification::{BoundaryRule, SeverityScale};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable selecting the boundary rule (`lower` or `upper`)
pub const BOUNDARY_RULE_ENV: &str = "ERGOLOAD_BOUNDARY_RULE";

/// Environment variable listing enabled scales (`rsst,aiha`)
pub const SCALES_ENV: &str = "ERGOLOAD_SCALES";

/// Severity classifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Band assigned to values equal to a boundary
    pub boundary_rule: BoundaryRule,
    /// Scales applied to Garg and RSST results, in output order
    pub scales: Vec<SeverityScale>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            boundary_rule: BoundaryRule::LowerBand,
            scales: SeverityScale::ALL.to_vec(),
        }
    }
}

impl ClassifierConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(rule) = read_env(BOUNDARY_RULE_ENV)? {
            config.boundary_rule = rule.parse()?;
        }

        if let Some(list) = read_env(SCALES_ENV)? {
            config.scales = list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::parse::<SeverityScale>)
                .collect::<Result<Vec<_>, _>>()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no scale is enabled or a scale is listed twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scales.is_empty() {
            return Err(ConfigError::InvalidValue(
                "at least one severity scale must be enabled",
            ));
        }
        for (index, scale) in self.scales.iter().enumerate() {
            if self.scales[..index].contains(scale) {
                return Err(ConfigError::InvalidValue(
                    "severity scales must not be listed twice",
                ));
            }
        }
        Ok(())
    }
}

/// Read a variable, treating unset as `None`
fn read_env(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
