// ABOUTME: Task result model: per-activity outcomes, method summaries, energy figures
// ABOUTME: A result is a pure projection of its task and the equation catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use crate::catalog::kodak::EffortDegree;
use crate::catalog::CostUnit;
use crate::classification::{SeverityLevel, SeverityScale};
use ergoload_core::errors::ErgoError;
use ergoload_core::models::{EquationId, Method};
use serde::Serialize;
use uuid::Uuid;

/// Outcome of one activity
///
/// Exactly one of `cost` and `error` is set. Invalid activities contribute 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityOutcome {
    /// Activity identifier
    pub activity_id: Uuid,
    /// Activity label, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Equation evaluated
    pub equation: EquationId,
    /// Evaluated cost, repetitions included for per-movement equations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Unit of `cost`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CostUnit>,
    /// Amount added to the method total (kcal or points)
    pub contribution: f64,
    /// Duration the activity was evaluated over (min)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<f64>,
    /// Kodak degree of effort for primary efforts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<EffortDegree>,
    /// Validation or evaluation failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErgoError>,
}

impl ActivityOutcome {
    /// Whether the activity was evaluated
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Static posture of the Garg time split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Posture {
    /// Equation 1
    Sitting,
    /// Equation 2
    Standing,
    /// Equation 3
    Stooped,
}

/// Energy of one static posture over its share of the task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionCost {
    /// Posture
    pub posture: Posture,
    /// Garg equation supplying the rate
    pub equation: EquationId,
    /// Share of the task (%)
    pub percent: f64,
    /// Posture rate (kcal/min)
    pub rate_kcal_per_min: f64,
    /// Time spent in the posture (min)
    pub duration_min: f64,
    /// Energy (kcal)
    pub kcal: f64,
}

/// Garg totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GargSummary {
    /// Sum of activity contributions (kcal)
    pub movement_kcal: f64,
    /// Posture costs, sitting then standing then stooped
    pub positions: Vec<PositionCost>,
    /// Sum of posture costs (kcal)
    pub position_kcal: f64,
    /// Movements plus postures (kcal)
    pub total_kcal: f64,
    /// Task duration (min)
    pub total_duration_min: f64,
}

/// RSST totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsstSummary {
    /// Sum of rate times duration (kcal)
    pub total_kcal: f64,
    /// Duration the average is taken over (min)
    pub total_duration_min: f64,
    /// Average rate (kcal/min)
    pub average_kcal_per_min: f64,
}

/// Kodak totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KodakSummary {
    /// Points from primary efforts
    pub primary_points: f64,
    /// Points from secondary efforts
    pub secondary_points: f64,
    /// Primary plus secondary points
    pub total_points: f64,
    /// Oxygen consumption from the point total (l O2/min)
    pub vo2_l_per_min: f64,
}

/// Method-specific totals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MethodSummary {
    /// Garg totals
    Garg(GargSummary),
    /// RSST totals
    Rsst(RsstSummary),
    /// Kodak totals
    Kodak(KodakSummary),
}

/// Workload expressed in energy and oxygen units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyFigures {
    /// Energy expenditure (kcal/min)
    pub kcal_per_min: f64,
    /// Oxygen consumption (l O2/min)
    pub l_o2_per_min: f64,
    /// Share of the subject's VO2max (%), when defined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_vo2max: Option<f64>,
}

/// Severity of a workload on one scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    /// Scale applied
    pub scale: SeverityScale,
    /// Level reached
    pub level: SeverityLevel,
    /// Zero-based band index on the scale
    pub band: usize,
    /// Classified rate (kcal/min)
    pub kcal_per_min: f64,
}

/// Complete evaluation of a task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskResult {
    /// Method used
    pub method: Method,
    /// One outcome per activity, in task order
    pub activities: Vec<ActivityOutcome>,
    /// Method totals
    pub summary: MethodSummary,
    /// Energy figures
    pub energy: EnergyFigures,
    /// Severity per enabled scale (empty for Kodak)
    pub classifications: Vec<Classification>,
    /// Why %VO2max could not be computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_issue: Option<ErgoError>,
}

impl TaskResult {
    /// Whether every activity was evaluated
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.activities.iter().all(ActivityOutcome::is_valid)
    }

    /// Activities that failed, with their errors
    pub fn errors(&self) -> impl Iterator<Item = (&ActivityOutcome, &ErgoError)> + '_ {
        self.activities
            .iter()
            .filter_map(|outcome| outcome.error.as_ref().map(|error| (outcome, error)))
    }

    /// Classification on `scale`, if enabled
    #[must_use]
    pub fn classification(&self, scale: SeverityScale) -> Option<&Classification> {
        self.classifications.iter().find(|c| c.scale == scale)
    }
}
