// ABOUTME: Per-activity cost evaluation and contribution to the method total
// ABOUTME: Fills subject-level parameters, validates, evaluates and records failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use crate::catalog::kodak::{effort_degree, EffortDegree};
use crate::catalog::{CostBasis, Equation, EquationCatalog, EquationKind};
use crate::parameters::ValidatedParams;
use crate::result::ActivityOutcome;
use ergoload_core::errors::{AppResult, ErgoError};
use ergoload_core::models::{
    Activity, EquationId, Method, ParameterName, RawParameters, RawValue, SemanticType, Subject,
};
use tracing::{debug, warn};

/// Field name reported when a per-minute activity has no duration
const DURATION_FIELD: &str = "duration_min";

/// Raw parameters of `activity` completed with subject-level values
///
/// `BW` comes from the subject's body weight, `S` from the subject's sex and
/// `t` from the activity duration. Only declared parameters that were left
/// absent or blank are filled; values entered on the activity always win.
#[must_use]
pub fn fill_parameters(equation: &Equation, subject: &Subject, activity: &Activity) -> RawParameters {
    let mut raw = activity.parameters.clone();

    for name in equation.parameters {
        let entered = raw
            .get(name.code())
            .is_some_and(|value| value.to_number().is_some());
        if entered {
            continue;
        }
        let fallback = match name {
            ParameterName::BodyWeight => subject.body_weight_kg,
            ParameterName::Sex => subject.sex.map(|sex| sex.flag()),
            ParameterName::Duration => activity.duration_min,
            _ => None,
        };
        if let Some(value) = fallback {
            raw.insert(name.code().to_owned(), RawValue::Number(value));
        }
    }
    raw
}

/// Evaluate validated parameters, scaling per-movement costs by `repetitions`
///
/// # Errors
///
/// Returns an error if `id` is unknown or `params` do not satisfy its schema
pub fn evaluate_activity(
    catalog: &EquationCatalog,
    id: EquationId,
    params: &ValidatedParams,
    repetitions: u32,
) -> AppResult<f64> {
    let cost = catalog.evaluate(id, params)?;
    let equation = catalog.lookup(id)?;
    Ok(match equation.basis {
        CostBasis::PerMovement => cost * f64::from(repetitions),
        CostBasis::PerMinute | CostBasis::DurationScaled | CostBasis::TableRate | CostBasis::Points => {
            cost
        }
    })
}

/// Successful evaluation of one activity
struct Evaluated {
    cost: f64,
    contribution: f64,
    duration_min: Option<f64>,
    degree: Option<EffortDegree>,
}

/// Validate then evaluate `activity` for a task using `method`
///
/// Failures are recorded on the outcome; the activity then contributes 0.
#[must_use]
pub fn assess_activity(
    catalog: &EquationCatalog,
    method: Method,
    subject: &Subject,
    activity: &Activity,
) -> ActivityOutcome {
    let unit = catalog.lookup(activity.equation).ok().map(|e| e.unit);

    match evaluate(catalog, method, subject, activity) {
        Ok(evaluated) => {
            debug!(
                activity_id = %activity.id,
                equation = %activity.equation,
                cost = evaluated.cost,
                contribution = evaluated.contribution,
                "Evaluated activity"
            );
            ActivityOutcome {
                activity_id: activity.id,
                label: activity.label.clone(),
                equation: activity.equation,
                cost: Some(evaluated.cost),
                unit,
                contribution: evaluated.contribution,
                duration_min: evaluated.duration_min,
                degree: evaluated.degree,
                error: None,
            }
        }
        Err(error) => {
            warn!(
                activity_id = %activity.id,
                equation = %activity.equation,
                code = %error.code(),
                "Rejected activity: {error}"
            );
            ActivityOutcome {
                activity_id: activity.id,
                label: activity.label.clone(),
                equation: activity.equation,
                cost: None,
                unit: None,
                contribution: 0.0,
                duration_min: None,
                degree: None,
                error: Some(error),
            }
        }
    }
}

fn evaluate(
    catalog: &EquationCatalog,
    method: Method,
    subject: &Subject,
    activity: &Activity,
) -> AppResult<Evaluated> {
    let id = activity.equation;
    if id.method() != method {
        return Err(ErgoError::unknown_equation(format!(
            "{id} (not a {method} equation)"
        )));
    }

    let equation = catalog.lookup(id)?;
    let raw = fill_parameters(equation, subject, activity);
    let params = catalog.validate(id, &raw)?;
    let cost = evaluate_activity(catalog, id, &params, activity.repetitions)?;

    let (contribution, duration_min) = match equation.basis {
        CostBasis::PerMovement | CostBasis::Points => (cost, None),
        CostBasis::DurationScaled => (cost, params.get(ParameterName::Duration)),
        CostBasis::TableRate => {
            let duration = params.value(ParameterName::Duration);
            (cost * duration, Some(duration))
        }
        CostBasis::PerMinute => {
            let duration = activity_duration(activity)?;
            (cost * duration, Some(duration))
        }
    };

    let degree = match equation.kind {
        EquationKind::KodakPrimary { effort, handling } => Some(effort_degree(
            effort,
            handling,
            params.value(ParameterName::Magnitude),
        )),
        _ => None,
    };

    Ok(Evaluated {
        cost,
        contribution,
        duration_min,
        degree,
    })
}

/// Duration of a per-minute activity
fn activity_duration(activity: &Activity) -> AppResult<f64> {
    let duration = activity
        .duration_min
        .ok_or_else(|| ErgoError::missing_parameter(DURATION_FIELD))?;
    if SemanticType::Duration.contains(duration) {
        Ok(duration)
    } else {
        Err(ErgoError::invalid_domain(
            DURATION_FIELD,
            duration,
            SemanticType::Duration.rule(),
        ))
    }
}
