// ABOUTME: Task, activity and subject models consumed by the evaluation engine
// ABOUTME: Value-in/value-out mutations so every result is a fresh projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use super::equation::{EquationId, Method};
use super::parameters::{ParameterName, RawParameters, RawValue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Biological sex of the subject, used as the Garg `S` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// `S = 0`
    Female,
    /// `S = 1`
    Male,
}

impl Sex {
    /// Numeric flag used by the Garg lifting equations
    #[must_use]
    pub const fn flag(self) -> f64 {
        match self {
            Self::Female => 0.0,
            Self::Male => 1.0,
        }
    }
}

/// Worker whose workload is evaluated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_weight_kg: Option<f64>,
    /// Sex, fills the `S` parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Maximal aerobic capacity (ml O2 per kg per min)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vo2max_ml_kg_min: Option<f64>,
}

impl Subject {
    /// Subject with a known body weight
    #[must_use]
    pub fn with_body_weight(body_weight_kg: f64) -> Self {
        Self {
            body_weight_kg: Some(body_weight_kg),
            ..Self::default()
        }
    }

    /// Set the subject's sex
    #[must_use]
    pub const fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Set the subject's VO2max
    #[must_use]
    pub const fn with_vo2max(mut self, vo2max_ml_kg_min: f64) -> Self {
        self.vo2max_ml_kg_min = Some(vo2max_ml_kg_min);
        self
    }
}

/// Share of the task spent in each static posture (Garg only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PostureSplit {
    /// Percent of the task spent sitting
    #[serde(default)]
    pub sitting_percent: f64,
    /// Percent of the task spent standing
    #[serde(default)]
    pub standing_percent: f64,
    /// Percent of the task spent standing bent
    #[serde(default)]
    pub stooped_percent: f64,
}

impl PostureSplit {
    /// Build a split from its three percentages
    #[must_use]
    pub const fn new(sitting_percent: f64, standing_percent: f64, stooped_percent: f64) -> Self {
        Self {
            sitting_percent,
            standing_percent,
            stooped_percent,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub fn total(&self) -> f64 {
        self.sitting_percent + self.standing_percent + self.stooped_percent
    }

    /// Whether no time is assigned to any posture
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0.0
    }
}

fn default_repetitions() -> u32 {
    1
}

/// One entry of a task referencing a catalog equation
///
/// An activity only records what was entered; costs are always recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Stable identifier within the task
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Optional user label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Equation or table entry used for this activity
    pub equation: EquationId,
    /// Raw parameter values keyed by field code
    #[serde(default)]
    pub parameters: RawParameters,
    /// Number of movements, for per-movement equations
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    /// Time spent on the activity (min)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<f64>,
}

impl Activity {
    /// Create an activity with no parameters and a single repetition
    #[must_use]
    pub fn new(equation: EquationId) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: None,
            equation,
            parameters: RawParameters::new(),
            repetitions: 1,
            duration_min: None,
        }
    }

    /// Set a parameter value
    #[must_use]
    pub fn with_parameter(mut self, name: ParameterName, value: impl Into<RawValue>) -> Self {
        self.parameters.insert(name.code().to_owned(), value.into());
        self
    }

    /// Set the label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the repetition count
    #[must_use]
    pub const fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Set the activity duration (min)
    #[must_use]
    pub const fn with_duration(mut self, duration_min: f64) -> Self {
        self.duration_min = Some(duration_min);
        self
    }

    /// Raw value entered for `name`, if any
    #[must_use]
    pub fn parameter(&self, name: ParameterName) -> Option<&RawValue> {
        self.parameters.get(name.code())
    }
}

/// Complete input of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Method used to evaluate every activity
    pub method: Method,
    /// Worker performing the task
    #[serde(default)]
    pub subject: Subject,
    /// Total duration of the task (min)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration_min: Option<f64>,
    /// Static posture split (Garg only)
    #[serde(default)]
    pub posture_split: PostureSplit,
    /// Ordered activities
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Task {
    /// Empty task for `method`
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            subject: Subject::default(),
            total_duration_min: None,
            posture_split: PostureSplit::default(),
            activities: Vec::new(),
        }
    }

    /// Replace the subject
    #[must_use]
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = subject;
        self
    }

    /// Set the total duration (min)
    #[must_use]
    pub const fn with_total_duration(mut self, total_duration_min: f64) -> Self {
        self.total_duration_min = Some(total_duration_min);
        self
    }

    /// Replace the posture split
    #[must_use]
    pub const fn with_posture_split(mut self, posture_split: PostureSplit) -> Self {
        self.posture_split = posture_split;
        self
    }

    /// Append an activity
    #[must_use]
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Remove the activity with `id`; unknown ids leave the task unchanged
    #[must_use]
    pub fn without_activity(mut self, id: Uuid) -> Self {
        self.activities.retain(|activity| activity.id != id);
        self
    }

    /// Replace the activity with `id` by `update(activity)`
    #[must_use]
    pub fn with_updated_activity<F>(mut self, id: Uuid, update: F) -> Self
    where
        F: FnOnce(Activity) -> Activity,
    {
        if let Some(position) = self.activities.iter().position(|a| a.id == id) {
            let current = self.activities.remove(position);
            let mut updated = update(current);
            updated.id = id;
            self.activities.insert(position, updated);
        }
        self
    }

    /// Activity with `id`, if present
    #[must_use]
    pub fn activity(&self, id: Uuid) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }
}
