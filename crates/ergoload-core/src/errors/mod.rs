// ABOUTME: Unified error taxonomy for workload evaluation
// ABOUTME: Validation, conversion and catalog errors with stable error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! # Unified Error Handling
//!
//! Every failure the engine can report is an [`ErgoError`]. Input-side errors
//! (`MissingParameter`, `InvalidDomain`, `ConstraintViolation`,
//! `UnknownEquation`) are raised before any cost function runs and are
//! reported per activity. `UndefinedConversion` only suppresses the figure it
//! concerns. `InvalidTask` covers task-level invariants (time split, total
//! duration) that prevent a result from being computed at all.
//!
//! None of these errors are fatal: each is recoverable by correcting the
//! offending input.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable error codes exposed to presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required parameter is absent or blank
    MissingParameter,
    /// A value lies outside its declared numeric domain
    InvalidDomain,
    /// An equation-specific validity predicate failed
    ConstraintViolation,
    /// A unit conversion is undefined for the given inputs
    UndefinedConversion,
    /// The equation identifier is not part of the catalog
    UnknownEquation,
    /// The task as a whole violates one of its invariants
    InvalidTask,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingParameter => "A required parameter is missing",
            Self::InvalidDomain => "A parameter value is outside its acceptable domain",
            Self::ConstraintViolation => "The parameters violate the equation's validity range",
            Self::UndefinedConversion => "The requested conversion is undefined for these inputs",
            Self::UnknownEquation => "The equation identifier is not in the catalog",
            Self::InvalidTask => "The task definition is inconsistent",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::InvalidDomain => "INVALID_DOMAIN",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::UndefinedConversion => "UNDEFINED_CONVERSION",
            Self::UnknownEquation => "UNKNOWN_EQUATION",
            Self::InvalidTask => "INVALID_TASK",
        };
        f.write_str(code)
    }
}

/// Unified error type for the engine
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErgoError {
    /// Required field absent
    #[error("missing required parameter `{parameter}`")]
    MissingParameter {
        /// Name of the missing parameter
        parameter: String,
    },

    /// Value outside its declared numeric domain (e.g. negative mass)
    #[error("parameter `{parameter}` = {value} is invalid: {rule}")]
    InvalidDomain {
        /// Name of the offending parameter
        parameter: String,
        /// Offending value as entered
        value: String,
        /// Domain rule that was violated
        rule: String,
    },

    /// Equation-specific predicate failure (e.g. `h1 >= h2`)
    #[error("equation {equation} is undefined for these parameters: {rule}")]
    ConstraintViolation {
        /// Equation whose predicate failed
        equation: String,
        /// Predicate that failed
        rule: String,
    },

    /// A conversion cannot be computed (e.g. `VO2max <= 0`)
    #[error("{quantity} is undefined: {reason}")]
    UndefinedConversion {
        /// Quantity that could not be computed
        quantity: String,
        /// Why the conversion is undefined
        reason: String,
    },

    /// Identifier not in the catalog
    #[error("unknown equation `{id}`")]
    UnknownEquation {
        /// Identifier as supplied
        id: String,
    },

    /// Task-level invariant failure
    #[error("invalid task: {reason}")]
    InvalidTask {
        /// Invariant that failed
        reason: String,
    },
}

impl ErgoError {
    /// Create a "missing parameter" error
    #[must_use]
    pub fn missing_parameter(parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            parameter: parameter.into(),
        }
    }

    /// Create an "invalid domain" error
    #[must_use]
    pub fn invalid_domain(
        parameter: impl Into<String>,
        value: impl fmt::Display,
        rule: impl Into<String>,
    ) -> Self {
        Self::InvalidDomain {
            parameter: parameter.into(),
            value: value.to_string(),
            rule: rule.into(),
        }
    }

    /// Create a "constraint violation" error
    #[must_use]
    pub fn constraint_violation(equation: impl fmt::Display, rule: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            equation: equation.to_string(),
            rule: rule.into(),
        }
    }

    /// Create an "undefined conversion" error
    #[must_use]
    pub fn undefined_conversion(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UndefinedConversion {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create an "unknown equation" error
    #[must_use]
    pub fn unknown_equation(id: impl Into<String>) -> Self {
        Self::UnknownEquation { id: id.into() }
    }

    /// Create an "invalid task" error
    #[must_use]
    pub fn invalid_task(reason: impl Into<String>) -> Self {
        Self::InvalidTask {
            reason: reason.into(),
        }
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingParameter { .. } => ErrorCode::MissingParameter,
            Self::InvalidDomain { .. } => ErrorCode::InvalidDomain,
            Self::ConstraintViolation { .. } => ErrorCode::ConstraintViolation,
            Self::UndefinedConversion { .. } => ErrorCode::UndefinedConversion,
            Self::UnknownEquation { .. } => ErrorCode::UnknownEquation,
            Self::InvalidTask { .. } => ErrorCode::InvalidTask,
        }
    }

    /// Parameter named by the error, if any
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingParameter { parameter } | Self::InvalidDomain { parameter, .. } => {
                Some(parameter)
            }
            _ => None,
        }
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, ErgoError>;
