// ABOUTME: Equation parameter names, semantic types and raw field values
// ABOUTME: Raw values arrive from UI or extraction layers as numbers or free text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use crate::constants::limits::MAX_PERCENT;
use crate::errors::ErgoError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Parameters an equation may declare
///
/// Garg notation: BW body weight (kg), L load (kg), F force (kgf),
/// DH horizontal distance (m), h1/h2 lower/upper hand height (m),
/// G grade (%), t duration (min), V speed (m/s), S sex (1 male, 0 female).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParameterName {
    /// Body weight (kg)
    #[serde(rename = "BW")]
    BodyWeight,
    /// Load handled (kg)
    #[serde(rename = "L")]
    Load,
    /// Push or pull force (kgf)
    #[serde(rename = "F")]
    Force,
    /// Horizontal displacement (m)
    #[serde(rename = "DH")]
    HorizontalDistance,
    /// Lower hand height (m)
    #[serde(rename = "h1")]
    LowerHeight,
    /// Upper hand height (m)
    #[serde(rename = "h2")]
    UpperHeight,
    /// Walking grade (%)
    #[serde(rename = "G")]
    Grade,
    /// Duration (min)
    #[serde(rename = "t")]
    Duration,
    /// Walking speed (m/s)
    #[serde(rename = "V")]
    Speed,
    /// Sex flag (1 male, 0 female)
    #[serde(rename = "S")]
    Sex,
    /// Kodak effort magnitude (kg or kgf)
    #[serde(rename = "magnitude")]
    Magnitude,
    /// Kodak share of the shift spent on the effort (%)
    #[serde(rename = "percent_time")]
    PercentTime,
}

impl ParameterName {
    /// Every parameter name
    pub const ALL: &'static [Self] = &[
        Self::BodyWeight,
        Self::Load,
        Self::Force,
        Self::HorizontalDistance,
        Self::LowerHeight,
        Self::UpperHeight,
        Self::Grade,
        Self::Duration,
        Self::Speed,
        Self::Sex,
        Self::Magnitude,
        Self::PercentTime,
    ];

    /// Field code used in raw parameter maps
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BodyWeight => "BW",
            Self::Load => "L",
            Self::Force => "F",
            Self::HorizontalDistance => "DH",
            Self::LowerHeight => "h1",
            Self::UpperHeight => "h2",
            Self::Grade => "G",
            Self::Duration => "t",
            Self::Speed => "V",
            Self::Sex => "S",
            Self::Magnitude => "magnitude",
            Self::PercentTime => "percent_time",
        }
    }

    /// Semantic type driving domain validation
    #[must_use]
    pub const fn semantic(self) -> SemanticType {
        match self {
            Self::BodyWeight | Self::Load | Self::Magnitude => SemanticType::Mass,
            Self::Force => SemanticType::Force,
            Self::HorizontalDistance | Self::LowerHeight | Self::UpperHeight => {
                SemanticType::Length
            }
            Self::Grade | Self::PercentTime => SemanticType::Percentage,
            Self::Duration => SemanticType::Duration,
            Self::Speed => SemanticType::Speed,
            Self::Sex => SemanticType::SexFlag,
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ParameterName {
    type Err = ErgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.code() == trimmed)
            .ok_or_else(|| ErgoError::missing_parameter(trimmed))
    }
}

/// Semantic type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Mass in kg
    Mass,
    /// Force in kgf
    Force,
    /// Length in m
    Length,
    /// Speed in m/s
    Speed,
    /// Percentage
    Percentage,
    /// Duration in minutes
    Duration,
    /// Sex flag, 0 or 1
    SexFlag,
}

impl SemanticType {
    /// Whether `value` lies in the declared domain
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Self::Mass | Self::Force | Self::Length | Self::Speed | Self::Duration => value >= 0.0,
            Self::Percentage => (0.0..=MAX_PERCENT).contains(&value),
            Self::SexFlag => value == 0.0 || (value - 1.0).abs() < f64::EPSILON,
        }
    }

    /// Domain rule, for error messages
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Mass => "mass must be a finite value >= 0 kg",
            Self::Force => "force must be a finite value >= 0 kgf",
            Self::Length => "length must be a finite value >= 0 m",
            Self::Speed => "speed must be a finite value >= 0 m/s",
            Self::Percentage => "percentage must lie in [0, 100]",
            Self::Duration => "duration must be a finite value >= 0 min",
            Self::SexFlag => "sex flag must be 0 (female) or 1 (male)",
        }
    }
}

/// Raw field value as entered or extracted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Already numeric
    Number(f64),
    /// Free text, e.g. `"12,5"`
    Text(String),
}

impl RawValue {
    /// Numeric interpretation of this value
    ///
    /// Text accepts a comma or a dot as decimal separator. Returns `None`
    /// for blank text and `Some(Err(text))` for text that is not a number.
    #[must_use]
    pub fn to_number(&self) -> Option<Result<f64, String>> {
        match self {
            Self::Number(value) => Some(Ok(*value)),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                Some(
                    trimmed
                        .replace(',', ".")
                        .parse::<f64>()
                        .map_err(|_| trimmed.to_owned()),
                )
            }
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Raw parameter map keyed by field code (`BW`, `h1`, ...)
pub type RawParameters = BTreeMap<String, RawValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values_accept_numbers_and_text() {
        let raw: RawParameters = serde_json::from_str(r#"{ "L": 12.5, "h1": "0,4", "h2": " " }"#).unwrap();
        assert_eq!(raw["L"].to_number(), Some(Ok(12.5)));
        assert_eq!(raw["h1"].to_number(), Some(Ok(0.4)));
        assert_eq!(raw["h2"].to_number(), None);
    }

    #[test]
    fn test_codes_parse_back() {
        for name in ParameterName::ALL {
            assert_eq!(name.code().parse::<ParameterName>().unwrap(), *name);
        }
    }
}
