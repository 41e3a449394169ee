// ABOUTME: Numeric parameter values that passed schema, domain and predicate checks
// ABOUTME: Only the validator can build them, so cost functions never see unchecked input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use ergoload_core::models::{EquationId, ParameterName};
use serde::Serialize;
use std::collections::BTreeMap;

/// Validated parameters of one equation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedParams {
    equation: EquationId,
    values: BTreeMap<ParameterName, f64>,
}

impl ValidatedParams {
    pub(crate) fn new(equation: EquationId, values: BTreeMap<ParameterName, f64>) -> Self {
        Self { equation, values }
    }

    /// Equation these parameters were validated against
    #[must_use]
    pub const fn equation(&self) -> EquationId {
        self.equation
    }

    /// Value of `name`, if the equation declares it
    #[must_use]
    pub fn get(&self, name: ParameterName) -> Option<f64> {
        self.values.get(&name).copied()
    }

    /// Value of a declared parameter
    ///
    /// Every declared parameter is present after validation. An undeclared
    /// name reads as NaN so a miswired formula cannot yield a plausible cost.
    #[must_use]
    pub fn value(&self, name: ParameterName) -> f64 {
        self.get(name).unwrap_or(f64::NAN)
    }

    /// Iterate over `(name, value)` pairs in parameter order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterName, f64)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }

    /// Number of validated parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the equation declares no parameters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
