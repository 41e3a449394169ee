// ABOUTME: Order-independent aggregation of activity contributions per method
// ABOUTME: Garg movements plus postures, RSST time-weighted average, Kodak point totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! # Aggregation
//!
//! Every total goes through [`canonical_sum`], which adds values in
//! `f64::total_cmp` order. Reordering the activities of a task therefore
//! yields bit-identical totals.

use crate::catalog::EquationCatalog;
use crate::result::{
    ActivityOutcome, GargSummary, KodakSummary, Posture, PositionCost, RsstSummary,
};
use crate::units::kodak_points_to_vo2_l_per_min;
use crate::validation::{validate_posture_split, validate_total_duration};
use ergoload_core::constants::garg::{SITTING_EQUATION, STANDING_EQUATION, STOOPED_EQUATION};
use ergoload_core::constants::limits::MAX_PERCENT;
use ergoload_core::errors::{AppResult, ErgoError};
use ergoload_core::models::{EquationId, ParameterName, RawParameters, RawValue, Task};

/// Sum in canonical order
#[must_use]
pub fn canonical_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut values: Vec<f64> = values.into_iter().collect();
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

/// Garg totals
///
/// # Errors
///
/// Returns `ErgoError::InvalidTask` if the posture split is invalid, if the
/// task has activities or postures but no positive total duration, or if a
/// posture share is set without a usable body weight
pub fn aggregate_garg(
    catalog: &EquationCatalog,
    task: &Task,
    outcomes: &[ActivityOutcome],
) -> AppResult<GargSummary> {
    let split = &task.posture_split;
    validate_posture_split(split)?;
    let duration = validate_total_duration(task)?;

    let needs_duration = !task.activities.is_empty() || !split.is_empty();
    let total_duration_min = match duration {
        Some(duration) => duration,
        None if needs_duration => {
            return Err(ErgoError::invalid_task(
                "total duration is required for a Garg evaluation",
            ))
        }
        None => 0.0,
    };

    let movement_kcal = canonical_sum(outcomes.iter().map(|outcome| outcome.contribution));

    let positions = if split.is_empty() {
        Vec::new()
    } else {
        let shares = [
            (Posture::Sitting, SITTING_EQUATION, split.sitting_percent),
            (Posture::Standing, STANDING_EQUATION, split.standing_percent),
            (Posture::Stooped, STOOPED_EQUATION, split.stooped_percent),
        ];
        shares
            .into_iter()
            .map(|(posture, number, percent)| {
                position_cost(catalog, task, posture, number, percent, total_duration_min)
            })
            .collect::<AppResult<Vec<_>>>()?
    };
    let position_kcal = canonical_sum(positions.iter().map(|position| position.kcal));

    Ok(GargSummary {
        movement_kcal,
        positions,
        position_kcal,
        total_kcal: canonical_sum([movement_kcal, position_kcal]),
        total_duration_min,
    })
}

/// Energy of one posture share, using the posture's Garg equation
fn position_cost(
    catalog: &EquationCatalog,
    task: &Task,
    posture: Posture,
    number: u8,
    percent: f64,
    total_duration_min: f64,
) -> AppResult<PositionCost> {
    let equation = EquationId::Garg { number };
    let body_weight = task.subject.body_weight_kg.ok_or_else(|| {
        ErgoError::invalid_task("subject body weight is required for the posture split")
    })?;

    let mut raw = RawParameters::new();
    raw.insert(
        ParameterName::BodyWeight.code().to_owned(),
        RawValue::Number(body_weight),
    );
    let rate_kcal_per_min = catalog
        .validate(equation, &raw)
        .and_then(|params| catalog.evaluate(equation, &params))
        .map_err(|err| ErgoError::invalid_task(format!("posture split: {err}")))?;

    let duration_min = total_duration_min * percent / MAX_PERCENT;
    Ok(PositionCost {
        posture,
        equation,
        percent,
        rate_kcal_per_min,
        duration_min,
        kcal: rate_kcal_per_min * duration_min,
    })
}

/// RSST totals
///
/// The average is taken over the task's total duration when set, otherwise
/// over the summed durations of the evaluated activities.
///
/// # Errors
///
/// Returns `ErgoError::InvalidTask` if the total duration is set but not
/// positive, or if evaluated activities span no time at all
pub fn aggregate_rsst(task: &Task, outcomes: &[ActivityOutcome]) -> AppResult<RsstSummary> {
    let total_kcal = canonical_sum(outcomes.iter().map(|outcome| outcome.contribution));
    let any_valid = outcomes.iter().any(ActivityOutcome::is_valid);

    let total_duration_min = match validate_total_duration(task)? {
        Some(duration) => duration,
        None => canonical_sum(outcomes.iter().filter_map(|outcome| outcome.duration_min)),
    };

    let average_kcal_per_min = if total_duration_min > 0.0 {
        total_kcal / total_duration_min
    } else if any_valid {
        return Err(ErgoError::invalid_task(
            "total duration must be positive to average RSST rates",
        ));
    } else {
        0.0
    };

    Ok(RsstSummary {
        total_kcal,
        total_duration_min,
        average_kcal_per_min,
    })
}

/// Kodak totals
#[must_use]
pub fn aggregate_kodak(outcomes: &[ActivityOutcome]) -> KodakSummary {
    let is_primary = |outcome: &ActivityOutcome| {
        matches!(outcome.equation, EquationId::KodakPrimary { .. })
    };

    let primary_points = canonical_sum(
        outcomes
            .iter()
            .filter(|outcome| is_primary(outcome))
            .map(|outcome| outcome.contribution),
    );
    let secondary_points = canonical_sum(
        outcomes
            .iter()
            .filter(|outcome| !is_primary(outcome))
            .map(|outcome| outcome.contribution),
    );
    let total_points = canonical_sum([primary_points, secondary_points]);

    KodakSummary {
        primary_points,
        secondary_points,
        total_points,
        vo2_l_per_min: kodak_points_to_vo2_l_per_min(total_points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_sum_ignores_order() {
        let forward = canonical_sum([0.1, 0.2, 0.3, 1e16, -1e16]);
        let backward = canonical_sum([-1e16, 1e16, 0.3, 0.2, 0.1]);
        assert_eq!(forward.to_bits(), backward.to_bits());
    }

    #[test]
    fn test_canonical_sum_empty() {
        assert!(canonical_sum(Vec::new()).abs() < f64::EPSILON);
    }
}
