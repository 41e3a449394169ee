// ABOUTME: Parameter validation against equation schemas, semantic domains and predicates
// ABOUTME: Also checks task-level invariants such as the posture split and total duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! # Validation
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. presence of every declared parameter (blank text counts as absent)
//! 2. numeric parse, accepting `,` as decimal separator
//! 3. finiteness and semantic domain
//! 4. the equation's validity predicate
//!
//! Parameters the equation does not declare are ignored.

use crate::catalog::Equation;
use crate::parameters::ValidatedParams;
use ergoload_core::constants::limits::MAX_PERCENT;
use ergoload_core::errors::{AppResult, ErgoError};
use ergoload_core::models::{PostureSplit, RawParameters, Task};
use std::collections::BTreeMap;

/// Slack allowed on the posture split sum for decimal inputs such as 33.3 + 33.3 + 33.4
const SPLIT_SUM_TOLERANCE: f64 = 1e-9;

/// Validates raw parameters for one equation
#[derive(Debug, Clone, Copy)]
pub struct ParameterValidator<'a> {
    equation: &'a Equation,
}

impl<'a> ParameterValidator<'a> {
    /// Validator for `equation`
    #[must_use]
    pub const fn new(equation: &'a Equation) -> Self {
        Self { equation }
    }

    /// Validate `raw` against the equation schema and predicate
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter`, `InvalidDomain` or `ConstraintViolation`
    /// for the first failed check
    pub fn validate(&self, raw: &RawParameters) -> AppResult<ValidatedParams> {
        let mut values = BTreeMap::new();

        for name in self.equation.parameters {
            let code = name.code();
            let number = raw
                .get(code)
                .and_then(|value| value.to_number())
                .ok_or_else(|| ErgoError::missing_parameter(code))?
                .map_err(|text| ErgoError::invalid_domain(code, text, "must be numeric"))?;

            let semantic = name.semantic();
            if !semantic.contains(number) {
                return Err(ErgoError::invalid_domain(code, number, semantic.rule()));
            }
            values.insert(*name, number);
        }

        let params = ValidatedParams::new(self.equation.id, values);
        self.equation.constraint.check(self.equation.id, &params)?;
        Ok(params)
    }
}

/// Check the posture split percentages
///
/// # Errors
///
/// Returns `ErgoError::InvalidTask` if a share lies outside `[0, 100]` or the
/// shares add up to more than 100
pub fn validate_posture_split(split: &PostureSplit) -> AppResult<()> {
    let shares = [
        ("sitting", split.sitting_percent),
        ("standing", split.standing_percent),
        ("stooped", split.stooped_percent),
    ];

    for (posture, percent) in shares {
        if !percent.is_finite() || !(0.0..=MAX_PERCENT).contains(&percent) {
            return Err(ErgoError::invalid_task(format!(
                "{posture} share ({percent} %) must lie in [0, 100]"
            )));
        }
    }

    let total = split.total();
    if total > MAX_PERCENT + SPLIT_SUM_TOLERANCE {
        return Err(ErgoError::invalid_task(format!(
            "posture shares add up to {total} %, more than 100 %"
        )));
    }
    Ok(())
}

/// Check the task's total duration when one is given
///
/// # Errors
///
/// Returns `ErgoError::InvalidTask` if the duration is set but not a finite
/// positive number of minutes
pub fn validate_total_duration(task: &Task) -> AppResult<Option<f64>> {
    match task.total_duration_min {
        Some(duration) if !duration.is_finite() || duration <= 0.0 => Err(
            ErgoError::invalid_task(format!("total duration ({duration} min) must be positive")),
        ),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rounding_is_tolerated() {
        let split = PostureSplit::new(33.3, 33.3, 33.4);
        assert!(validate_posture_split(&split).is_ok());
    }

    #[test]
    fn test_split_over_hundred_rejected() {
        let split = PostureSplit::new(60.0, 30.0, 20.0);
        let err = validate_posture_split(&split).err();
        assert!(matches!(err, Some(ErgoError::InvalidTask { .. })));
    }

    #[test]
    fn test_negative_share_rejected() {
        let split = PostureSplit::new(-5.0, 50.0, 0.0);
        assert!(validate_posture_split(&split).is_err());
    }
}
