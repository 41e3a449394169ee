// ABOUTME: Severity classification of energy expenditure against RSST and AIHA scales
// ABOUTME: Ordered boundary tables with a configurable rule for values on a boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use crate::config::{ClassifierConfig, ConfigError};
use crate::result::Classification;
use ergoload_core::constants::classification::{AIHA_BOUNDARIES, RSST_BOUNDARIES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityScale {
    /// RSST 4-tier scale
    Rsst,
    /// AIHA 7-tier scale
    Aiha,
}

impl SeverityScale {
    /// Every scale
    pub const ALL: &'static [Self] = &[Self::Rsst, Self::Aiha];

    /// Ascending band boundaries (kcal/min)
    #[must_use]
    pub const fn boundaries(self) -> &'static [f64] {
        match self {
            Self::Rsst => &RSST_BOUNDARIES,
            Self::Aiha => &AIHA_BOUNDARIES,
        }
    }

    /// Levels from lightest to heaviest, one more than the boundaries
    #[must_use]
    pub const fn levels(self) -> &'static [SeverityLevel] {
        match self {
            Self::Rsst => &[
                SeverityLevel::Light,
                SeverityLevel::Medium,
                SeverityLevel::Heavy,
                SeverityLevel::VeryHeavy,
            ],
            Self::Aiha => &[
                SeverityLevel::Rest,
                SeverityLevel::VeryLight,
                SeverityLevel::Light,
                SeverityLevel::Moderate,
                SeverityLevel::Heavy,
                SeverityLevel::VeryHeavy,
                SeverityLevel::ExcessivelyHeavy,
            ],
        }
    }

    /// Scale name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rsst => "rsst",
            Self::Aiha => "aiha",
        }
    }
}

impl fmt::Display for SeverityScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeverityScale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rsst" => Ok(Self::Rsst),
            "aiha" => Ok(Self::Aiha),
            other => Err(ConfigError::Parse(format!(
                "unknown severity scale `{other}` (valid: rsst, aiha)"
            ))),
        }
    }
}

/// Severity level across both scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    /// AIHA: below 1.6 kcal/min
    Rest,
    /// AIHA
    VeryLight,
    /// RSST and AIHA
    Light,
    /// RSST
    Medium,
    /// AIHA
    Moderate,
    /// RSST and AIHA
    Heavy,
    /// RSST and AIHA
    VeryHeavy,
    /// AIHA: above 12.5 kcal/min
    ExcessivelyHeavy,
}

impl SeverityLevel {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::VeryLight => "very_light",
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::VeryHeavy => "very_heavy",
            Self::ExcessivelyHeavy => "excessively_heavy",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band assigned to a value equal to a boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryRule {
    /// A value on a boundary belongs to the band below it
    #[default]
    LowerBand,
    /// A value on a boundary belongs to the band above it
    UpperBand,
}

impl BoundaryRule {
    /// Whether `value` lies past `boundary` under this rule
    #[must_use]
    pub fn exceeds(self, value: f64, boundary: f64) -> bool {
        match self {
            Self::LowerBand => value > boundary,
            Self::UpperBand => value >= boundary,
        }
    }

    /// Rule name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LowerBand => "lower",
            Self::UpperBand => "upper",
        }
    }
}

impl fmt::Display for BoundaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lower_band" => Ok(Self::LowerBand),
            "upper" | "upper_band" => Ok(Self::UpperBand),
            other => Err(ConfigError::Parse(format!(
                "unknown boundary rule `{other}` (valid: lower, upper)"
            ))),
        }
    }
}

/// Classify `kcal_per_min` on `scale`
#[must_use]
pub fn classify(kcal_per_min: f64, scale: SeverityScale, rule: BoundaryRule) -> Classification {
    let band = scale
        .boundaries()
        .iter()
        .take_while(|boundary| rule.exceeds(kcal_per_min, **boundary))
        .count();
    let levels = scale.levels();
    Classification {
        scale,
        level: levels[band.min(levels.len() - 1)],
        band,
        kcal_per_min,
    }
}

/// Classifies results under every enabled scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rule: BoundaryRule,
    scales: Vec<SeverityScale>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}

impl Classifier {
    /// Classifier for explicit settings
    #[must_use]
    pub const fn new(rule: BoundaryRule, scales: Vec<SeverityScale>) -> Self {
        Self { rule, scales }
    }

    /// Classifier for a validated configuration
    #[must_use]
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.boundary_rule, config.scales.clone())
    }

    /// Boundary rule in use
    #[must_use]
    pub const fn rule(&self) -> BoundaryRule {
        self.rule
    }

    /// Classify `kcal_per_min` on every enabled scale
    #[must_use]
    pub fn classify(&self, kcal_per_min: f64) -> Vec<Classification> {
        self.scales
            .iter()
            .map(|scale| classify(kcal_per_min, *scale, self.rule))
            .collect()
    }
}
