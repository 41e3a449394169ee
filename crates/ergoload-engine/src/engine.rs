// ABOUTME: Engine orchestration from a task to its result
// ABOUTME: Entry points validate_activity, evaluate_activity and compute_task_result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! # Engine
//!
//! [`Engine::compute`] assesses every activity, aggregates the outcomes for
//! the task's method, converts the total into energy and oxygen figures and
//! classifies it. The computation is pure: the same task always yields the
//! same result, and nothing is retained between calls.

use crate::aggregation::{aggregate_garg, aggregate_kodak, aggregate_rsst};
use crate::catalog::EquationCatalog;
use crate::classification::Classifier;
use crate::config::EngineConfig;
use crate::evaluator::{self, assess_activity, fill_parameters};
use crate::parameters::ValidatedParams;
use crate::result::{ActivityOutcome, EnergyFigures, MethodSummary, TaskResult};
use crate::units::{
    kcal_per_min_to_l_o2_per_min, l_o2_per_min_to_kcal_per_min, percent_vo2max,
    vo2max_l_o2_per_min,
};
use ergoload_core::errors::{AppResult, ErgoError};
use ergoload_core::models::{Activity, EquationId, Method, RawParameters, Subject, Task};
use tracing::debug;

/// Evaluation engine bound to a catalog and a configuration
#[derive(Debug, Clone)]
pub struct Engine<'a> {
    catalog: &'a EquationCatalog,
    classifier: Classifier,
}

impl Engine<'static> {
    /// Engine over the standard catalog with the default configuration
    #[must_use]
    pub fn standard() -> Self {
        Self::new(EquationCatalog::standard(), &EngineConfig::default())
    }
}

impl<'a> Engine<'a> {
    /// Engine over `catalog` using `config`
    #[must_use]
    pub fn new(catalog: &'a EquationCatalog, config: &EngineConfig) -> Self {
        Self {
            catalog,
            classifier: Classifier::from_config(&config.classifier),
        }
    }

    /// Catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &'a EquationCatalog {
        self.catalog
    }

    /// Classifier in use
    #[must_use]
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Compute the result of `task`
    ///
    /// Invalid activities do not fail the computation: their error is stored
    /// on their outcome and they contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns `ErgoError::InvalidTask` if a task-level invariant fails
    /// (posture split, total duration, body weight for the posture split)
    pub fn compute(&self, task: &Task) -> AppResult<TaskResult> {
        let outcomes: Vec<ActivityOutcome> = task
            .activities
            .iter()
            .map(|activity| assess_activity(self.catalog, task.method, &task.subject, activity))
            .collect();

        let (summary, kcal_per_min, l_o2_per_min) = match task.method {
            Method::Garg => {
                let garg = aggregate_garg(self.catalog, task, &outcomes)?;
                let kcal_per_min = if garg.total_duration_min > 0.0 {
                    garg.total_kcal / garg.total_duration_min
                } else {
                    0.0
                };
                (
                    MethodSummary::Garg(garg),
                    kcal_per_min,
                    kcal_per_min_to_l_o2_per_min(kcal_per_min),
                )
            }
            Method::Rsst => {
                let rsst = aggregate_rsst(task, &outcomes)?;
                let kcal_per_min = rsst.average_kcal_per_min;
                (
                    MethodSummary::Rsst(rsst),
                    kcal_per_min,
                    kcal_per_min_to_l_o2_per_min(kcal_per_min),
                )
            }
            Method::Kodak => {
                let kodak = aggregate_kodak(&outcomes);
                let vo2 = kodak.vo2_l_per_min;
                (
                    MethodSummary::Kodak(kodak),
                    l_o2_per_min_to_kcal_per_min(vo2),
                    vo2,
                )
            }
        };

        let (percent_vo2max, conversion_issue) = match vo2max_share(&task.subject, l_o2_per_min) {
            Ok(percent) => (percent, None),
            Err(issue) => (None, Some(issue)),
        };

        let classifications = match task.method {
            Method::Garg | Method::Rsst => self.classifier.classify(kcal_per_min),
            Method::Kodak => Vec::new(),
        };

        let result = TaskResult {
            method: task.method,
            activities: outcomes,
            summary,
            energy: EnergyFigures {
                kcal_per_min,
                l_o2_per_min,
                percent_vo2max,
            },
            classifications,
            conversion_issue,
        };

        debug!(
            method = %result.method,
            activities = result.activities.len(),
            rejected = result.errors().count(),
            kcal_per_min = result.energy.kcal_per_min,
            "Computed task result"
        );
        Ok(result)
    }
}

/// Share of the subject's VO2max, `None` when the subject has no VO2max
fn vo2max_share(subject: &Subject, l_o2_per_min: f64) -> AppResult<Option<f64>> {
    let Some(vo2max) = subject.vo2max_ml_kg_min else {
        return Ok(None);
    };
    if !vo2max.is_finite() || vo2max <= 0.0 {
        return Err(ErgoError::undefined_conversion(
            "%VO2max",
            format!("VO2max ({vo2max} ml/kg/min) must be positive"),
        ));
    }
    let body_weight = match subject.body_weight_kg {
        Some(weight) if weight.is_finite() && weight > 0.0 => weight,
        Some(weight) => {
            return Err(ErgoError::undefined_conversion(
                "%VO2max",
                format!("body weight ({weight} kg) must be positive"),
            ))
        }
        None => {
            return Err(ErgoError::undefined_conversion(
                "%VO2max",
                "body weight is required",
            ))
        }
    };
    percent_vo2max(l_o2_per_min, vo2max_l_o2_per_min(vo2max, body_weight)).map(Some)
}

/// Validate `activity` against the standard catalog
///
/// Subject-level values fill absent parameters first.
///
/// # Errors
///
/// Returns the first validation failure for the activity
pub fn validate_activity(activity: &Activity, subject: &Subject) -> AppResult<ValidatedParams> {
    let catalog = EquationCatalog::standard();
    let equation = catalog.lookup(activity.equation)?;
    let raw = fill_parameters(equation, subject, activity);
    catalog.validate(activity.equation, &raw)
}

/// Validate a raw parameter record for `id` with the standard catalog
///
/// Takes the record exactly as extracted from an input form, with no subject
/// defaults applied. Use [`validate_activity`] to validate a task activity.
///
/// # Errors
///
/// Returns the first failure in check order: unknown equation, missing
/// parameter, non-numeric or out-of-domain value, then predicate failure
pub fn validate_parameters(id: EquationId, raw: &RawParameters) -> AppResult<ValidatedParams> {
    EquationCatalog::standard().validate(id, raw)
}

/// Evaluate validated parameters with the standard catalog
///
/// # Errors
///
/// Returns an error if `id` is unknown or `params` do not match it
pub fn evaluate_activity(id: EquationId, params: &ValidatedParams, repetitions: u32) -> AppResult<f64> {
    evaluator::evaluate_activity(EquationCatalog::standard(), id, params, repetitions)
}

/// Compute `task` with the standard catalog and default configuration
///
/// # Errors
///
/// Returns `ErgoError::InvalidTask` if a task-level invariant fails
pub fn compute_task_result(task: &Task) -> AppResult<TaskResult> {
    Engine::standard().compute(task)
}
