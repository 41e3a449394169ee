// ABOUTME: Immutable catalog of Garg equations and RSST/Kodak table entries
// ABOUTME: Lookup, parameter validation and cost evaluation behind one interface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! # Equation Catalog
//!
//! Every evaluation method is exposed through the same three operations:
//! [`EquationCatalog::lookup`], [`EquationCatalog::validate`] and
//! [`EquationCatalog::evaluate`]. Garg entries carry a closed-form formula or
//! a constant work rate, RSST and Kodak entries reference their lookup tables.
//! Entries are built once and never change.

/// The 31 Garg, Chaffin & Herrin prediction equations
pub mod garg;

/// Kodak Figures 8, 9 and 10
pub mod kodak;

/// RSST position and work-type rate tables
pub mod rsst;

use crate::parameters::ValidatedParams;
use crate::validation::ParameterValidator;
use ergoload_core::constants::garg::KNUCKLE_HEIGHT_M;
use ergoload_core::errors::{AppResult, ErgoError};
use ergoload_core::models::{
    EquationId, HandlingEase, KodakEffortType, Method, ParameterName, RawParameters,
    RsstPosition, RsstWorkType, SecondaryCondition, SecondaryEffort,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Process-wide standard catalog
static STANDARD_CATALOG: OnceLock<EquationCatalog> = OnceLock::new();

/// Closed-form cost function over validated parameters
pub type Formula = fn(&ValidatedParams) -> f64;

/// How an equation's cost relates to the activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostBasis {
    /// Rate in kcal/min while holding a posture (Garg 1-3)
    PerMinute,
    /// Energy per movement in kcal, multiplied by repetitions
    PerMovement,
    /// Energy in kcal already scaled by the duration parameter
    DurationScaled,
    /// Table rate in kcal/min applied over the activity duration (RSST)
    TableRate,
    /// Effort points (Kodak)
    Points,
}

impl CostBasis {
    /// Unit of the value returned by evaluation
    #[must_use]
    pub const fn unit(self) -> CostUnit {
        match self {
            Self::PerMinute | Self::TableRate => CostUnit::KcalPerMinute,
            Self::PerMovement | Self::DurationScaled => CostUnit::Kcal,
            Self::Points => CostUnit::Points,
        }
    }
}

/// Unit of an evaluated cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostUnit {
    /// kcal per minute
    KcalPerMinute,
    /// kcal
    Kcal,
    /// Kodak effort points
    Points,
}

/// Validity predicate of an equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Defined for every in-domain input
    None,
    /// Floor-to-knuckle handling: `h1 < h2 <= 0.81`
    BelowKnuckle,
    /// Above-knuckle handling: `0.81 < h1 < h2`
    AboveKnuckle,
}

impl Constraint {
    /// Check the predicate against validated values
    ///
    /// # Errors
    ///
    /// Returns `ErgoError::ConstraintViolation` naming the equation and the failed rule
    pub fn check(self, equation: EquationId, params: &ValidatedParams) -> AppResult<()> {
        if self == Self::None {
            return Ok(());
        }

        let h1 = params.value(ParameterName::LowerHeight);
        let h2 = params.value(ParameterName::UpperHeight);

        if h1 >= h2 {
            return Err(ErgoError::constraint_violation(
                equation,
                format!("h1 ({h1} m) must be lower than h2 ({h2} m)"),
            ));
        }

        match self {
            Self::BelowKnuckle if h2 > KNUCKLE_HEIGHT_M => Err(ErgoError::constraint_violation(
                equation,
                format!("h2 ({h2} m) must not exceed knuckle height {KNUCKLE_HEIGHT_M} m"),
            )),
            Self::AboveKnuckle if h1 <= KNUCKLE_HEIGHT_M => Err(ErgoError::constraint_violation(
                equation,
                format!("h1 ({h1} m) must be above knuckle height {KNUCKLE_HEIGHT_M} m"),
            )),
            _ => Ok(()),
        }
    }
}

/// How an equation computes its cost
#[derive(Clone, Copy)]
pub enum EquationKind {
    /// Garg closed-form formula
    Formula(Formula),
    /// Constant work rate applied over the duration parameter (Garg 22-31)
    WorkRate {
        /// Rate in kcal/min
        kcal_per_min: f64,
    },
    /// RSST position and work-type rates
    Rsst {
        /// Body position
        position: RsstPosition,
        /// Work type
        work: RsstWorkType,
    },
    /// Kodak Figure 8 then Figure 9
    KodakPrimary {
        /// Effort type
        effort: KodakEffortType,
        /// Handling ease
        handling: HandlingEase,
    },
    /// Kodak Figure 10
    KodakSecondary {
        /// Secondary effort category
        effort: SecondaryEffort,
        /// Exposure condition
        condition: SecondaryCondition,
    },
}

impl fmt::Debug for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formula(_) => f.write_str("Formula"),
            Self::WorkRate { kcal_per_min } => write!(f, "WorkRate({kcal_per_min} kcal/min)"),
            Self::Rsst { position, work } => write!(f, "Rsst({position}/{work})"),
            Self::KodakPrimary { effort, handling } => {
                write!(f, "KodakPrimary({effort}/{handling})")
            }
            Self::KodakSecondary { effort, condition } => {
                write!(f, "KodakSecondary({effort}/{condition})")
            }
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct Equation {
    /// Stable identifier
    pub id: EquationId,
    /// Display name
    pub name: String,
    /// Method the entry belongs to
    pub method: Method,
    /// Declared parameters, in schema order
    pub parameters: &'static [ParameterName],
    /// Validity predicate
    pub constraint: Constraint,
    /// How the cost relates to the activity
    pub basis: CostBasis,
    /// Unit of the evaluated cost
    pub unit: CostUnit,
    /// Cost function or table reference
    #[serde(skip)]
    pub kind: EquationKind,
}

impl Equation {
    pub(crate) fn new(
        id: EquationId,
        name: impl Into<String>,
        parameters: &'static [ParameterName],
        constraint: Constraint,
        basis: CostBasis,
        kind: EquationKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            method: id.method(),
            parameters,
            constraint,
            basis,
            unit: basis.unit(),
            kind,
        }
    }

    /// Whether the equation declares `name`
    #[must_use]
    pub fn declares(&self, name: ParameterName) -> bool {
        self.parameters.contains(&name)
    }

    /// Compute the cost from validated parameters
    fn cost(&self, params: &ValidatedParams) -> f64 {
        match self.kind {
            EquationKind::Formula(formula) => formula(params),
            EquationKind::WorkRate { kcal_per_min } => {
                kcal_per_min * params.value(ParameterName::Duration)
            }
            EquationKind::Rsst { position, work } => rsst::activity_rate_kcal_per_min(position, work),
            EquationKind::KodakPrimary { effort, handling } => kodak::primary_points(
                effort,
                handling,
                params.value(ParameterName::Magnitude),
                params.value(ParameterName::PercentTime),
            ),
            EquationKind::KodakSecondary { effort, condition } => {
                kodak::secondary_points(effort, condition)
            }
        }
    }
}

/// Immutable equation catalog
#[derive(Debug, Clone)]
pub struct EquationCatalog {
    equations: BTreeMap<EquationId, Equation>,
}

impl Default for EquationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl EquationCatalog {
    /// Build the full catalog of every method
    #[must_use]
    pub fn new() -> Self {
        let equations = garg::equations()
            .into_iter()
            .chain(rsst::equations())
            .chain(kodak::equations())
            .map(|equation| (equation.id, equation))
            .collect();
        Self { equations }
    }

    /// Shared standard catalog, built on first use
    pub fn standard() -> &'static Self {
        STANDARD_CATALOG.get_or_init(Self::new)
    }

    /// Get the entry for `id`
    ///
    /// # Errors
    ///
    /// Returns `ErgoError::UnknownEquation` if `id` is not in the catalog
    pub fn lookup(&self, id: EquationId) -> AppResult<&Equation> {
        self.equations
            .get(&id)
            .ok_or_else(|| ErgoError::unknown_equation(id.to_string()))
    }

    /// Entries of `method`, in identifier order
    pub fn equations(&self, method: Method) -> impl Iterator<Item = &Equation> + '_ {
        self.equations
            .values()
            .filter(move |equation| equation.method == method)
    }

    /// Every entry, in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Equation> + '_ {
        self.equations.values()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Validate raw parameters against the entry for `id`
    ///
    /// # Errors
    ///
    /// Returns the first failure in check order: unknown equation, missing
    /// parameter, non-numeric or out-of-domain value, then predicate failure
    pub fn validate(&self, id: EquationId, raw: &RawParameters) -> AppResult<ValidatedParams> {
        let equation = self.lookup(id)?;
        ParameterValidator::new(equation).validate(raw)
    }

    /// Evaluate the entry for `id`
    ///
    /// Returns kcal/min, kcal or points according to the entry's [`CostUnit`].
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is unknown, if `params` were validated for a
    /// different entry, or if a parameter or predicate check fails
    pub fn evaluate(&self, id: EquationId, params: &ValidatedParams) -> AppResult<f64> {
        let equation = self.lookup(id)?;
        if params.equation() != id {
            return Err(ErgoError::constraint_violation(
                id,
                format!("parameters were validated for {}", params.equation()),
            ));
        }
        if let Some(missing) = equation
            .parameters
            .iter()
            .find(|name| params.get(**name).is_none())
        {
            return Err(ErgoError::missing_parameter(missing.code()));
        }
        equation.constraint.check(id, params)?;
        Ok(equation.cost(params))
    }
}
