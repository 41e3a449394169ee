// ABOUTME: Garg, Chaffin & Herrin (1978) metabolic prediction equations 1 to 31
// ABOUTME: Posture rates, lifting and lowering, walking, holding, pushing and hand work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! Garg equations
//!
//! Units: BW and L in kg, F in kgf, DH, h1 and h2 in m, G in %, V in m/s,
//! t in min, S = 1 for male and 0 for female. Posture equations (1-3) return
//! kcal/min, all others return kcal.
//!
//! Reference: Garg, A., Chaffin, D.B., & Herrin, G.D. (1978). Prediction of
//! metabolic rates for manual materials handling jobs. *AIHA Journal*, 39(8).

// Formulas mirror the published notation
#![allow(clippy::suboptimal_flops)]

use super::{Constraint, CostBasis, Equation, EquationKind, Formula};
use crate::parameters::ValidatedParams;
use ergoload_core::constants::garg::KNUCKLE_HEIGHT_M;
use ergoload_core::models::{EquationId, ParameterName};

use ParameterName::{
    BodyWeight as BW, Duration as T, Force as F, Grade as G, HorizontalDistance as DH, Load as L,
    LowerHeight as H1, Sex as S, Speed as V, UpperHeight as H2,
};

const POSTURE: &[ParameterName] = &[BW];
const LIFT_WITH_SEX: &[ParameterName] = &[BW, L, H1, H2, S];
const LIFT: &[ParameterName] = &[BW, L, H1, H2];
const WALK_UNLOADED: &[ParameterName] = &[BW, V, G, T];
const WALK_LOADED: &[ParameterName] = &[BW, L, V, G, T];
const HOLD: &[ParameterName] = &[BW, L, T];
const PUSH_PULL: &[ParameterName] = &[BW, F, DH];
const ARM_MOVE: &[ParameterName] = &[L, DH];
const TURN: &[ParameterName] = &[BW, L];
const TIMED: &[ParameterName] = &[T];

/// Hand, arm and whole-body work rates (kcal/min) for equations 22-31
pub const WORK_RATES_KCAL_PER_MIN: [(u8, &str, f64); 10] = [
    (22, "Hand work, light", 0.4),
    (23, "Hand work, heavy", 0.9),
    (24, "One arm work, light", 1.0),
    (25, "One arm work, heavy", 1.8),
    (26, "Both arms work, light", 1.5),
    (27, "Both arms work, heavy", 2.5),
    (28, "Whole body work, light", 3.5),
    (29, "Whole body work, moderate", 5.0),
    (30, "Whole body work, heavy", 7.0),
    (31, "Whole body work, very heavy", 9.0),
];

fn below_knuckle(p: &ValidatedParams) -> f64 {
    KNUCKLE_HEIGHT_M - p.value(H1)
}

fn above_knuckle(p: &ValidatedParams) -> f64 {
    p.value(H2) - KNUCKLE_HEIGHT_M
}

fn rise(p: &ValidatedParams) -> f64 {
    p.value(H2) - p.value(H1)
}

fn entry(
    number: u8,
    name: &str,
    parameters: &'static [ParameterName],
    constraint: Constraint,
    basis: CostBasis,
    formula: Formula,
) -> Equation {
    Equation::new(
        EquationId::Garg { number },
        name,
        parameters,
        constraint,
        basis,
        EquationKind::Formula(formula),
    )
}

/// Build equations 1 to 31
pub(crate) fn equations() -> Vec<Equation> {
    use Constraint::{AboveKnuckle, BelowKnuckle, None as Unbounded};
    use CostBasis::{DurationScaled, PerMinute, PerMovement};

    let mut equations = vec![
        entry(1, "Sitting", POSTURE, Unbounded, PerMinute, |p| 0.023 * p.value(BW)),
        entry(2, "Standing", POSTURE, Unbounded, PerMinute, |p| 0.024 * p.value(BW)),
        entry(3, "Standing, bent", POSTURE, Unbounded, PerMinute, |p| 0.028 * p.value(BW)),
        entry(4, "Stoop lift", LIFT_WITH_SEX, BelowKnuckle, PerMovement, |p| {
            let (bw, l, s) = (p.value(BW), p.value(L), p.value(S));
            0.01 * (0.325 * bw * below_knuckle(p) + (1.41 * l + 0.76 * s * l) * rise(p))
        }),
        entry(5, "Squat lift", LIFT_WITH_SEX, BelowKnuckle, PerMovement, |p| {
            let (bw, l, s) = (p.value(BW), p.value(L), p.value(S));
            0.01 * (0.514 * bw * below_knuckle(p) + (2.19 * l + 0.62 * s * l) * rise(p))
        }),
        entry(6, "Arm lift", LIFT_WITH_SEX, AboveKnuckle, PerMovement, |p| {
            let (bw, l, s) = (p.value(BW), p.value(L), p.value(S));
            0.01 * (0.062 * bw * above_knuckle(p) + (3.19 * l + 0.52 * s * l) * rise(p))
        }),
        entry(7, "Stoop lowering", LIFT_WITH_SEX, BelowKnuckle, PerMovement, |p| {
            let (bw, l, s) = (p.value(BW), p.value(L), p.value(S));
            0.01 * (0.268 * bw * below_knuckle(p)
                + 0.675 * l * rise(p)
                + 5.22 * s * below_knuckle(p))
        }),
        entry(8, "Squat lowering", LIFT, BelowKnuckle, PerMovement, |p| {
            let (bw, l) = (p.value(BW), p.value(L));
            0.01 * (0.511 * bw * below_knuckle(p) + 0.701 * l * rise(p))
        }),
        entry(9, "Arm lowering", LIFT, AboveKnuckle, PerMovement, |p| {
            let (bw, l) = (p.value(BW), p.value(L));
            0.01 * (0.093 * bw * above_knuckle(p) + 0.247 * l * rise(p))
        }),
        entry(10, "One-arm lift", LIFT, AboveKnuckle, PerMovement, |p| {
            let (bw, l) = (p.value(BW), p.value(L));
            0.01 * (0.062 * bw * above_knuckle(p) + 1.91 * l * rise(p))
        }),
        entry(11, "Walking, no load", WALK_UNLOADED, Unbounded, DurationScaled, |p| {
            let (bw, v, g) = (p.value(BW), p.value(V), p.value(G));
            0.01 * (51.0 + 2.54 * bw * v * v + 0.379 * bw * g * v) * p.value(T)
        }),
        entry(12, "Walking, load at waist", WALK_LOADED, Unbounded, DurationScaled, |p| {
            let (bw, l, v, g) = (p.value(BW), p.value(L), p.value(V), p.value(G));
            0.01 * (80.0 + 2.43 * bw * v * v + 4.63 * l * v * v + 4.62 * l
                + 0.379 * (l + bw) * g * v)
                * p.value(T)
        }),
        entry(13, "Walking, load at thighs", WALK_LOADED, Unbounded, DurationScaled, |p| {
            let (bw, l, v, g) = (p.value(BW), p.value(L), p.value(V), p.value(G));
            0.01 * (68.0 + 2.54 * bw * v * v + 4.08 * l * v * v + 11.4 * l
                + 0.379 * (l + bw) * g * v)
                * p.value(T)
        }),
        entry(14, "Walking, load on back", WALK_LOADED, Unbounded, DurationScaled, |p| {
            let (bw, l, v, g) = (p.value(BW), p.value(L), p.value(V), p.value(G));
            0.01 * (51.0 + 2.54 * bw * v * v + 2.50 * l * v * v + 0.379 * (l + bw) * g * v)
                * p.value(T)
        }),
        entry(15, "Holding, arms bent", HOLD, Unbounded, DurationScaled, |p| {
            0.01 * (0.037 * p.value(BW) + 0.86 * p.value(L)) * p.value(T)
        }),
        entry(16, "Holding, arms extended", HOLD, Unbounded, DurationScaled, |p| {
            0.01 * (0.037 * p.value(BW) + 1.60 * p.value(L)) * p.value(T)
        }),
        entry(17, "Push/pull, waist height", PUSH_PULL, Unbounded, PerMovement, |p| {
            0.01 * (0.112 * p.value(BW) + 1.15 * p.value(F)) * p.value(DH)
        }),
        entry(18, "Push/pull, shoulder height", PUSH_PULL, Unbounded, PerMovement, |p| {
            0.01 * (0.085 * p.value(BW) + 1.30 * p.value(F)) * p.value(DH)
        }),
        entry(19, "Horizontal arm movement, sitting", ARM_MOVE, Unbounded, PerMovement, |p| {
            0.01 * (2.22 + 0.62 * p.value(L)) * p.value(DH)
        }),
        entry(20, "Horizontal arm movement, standing", ARM_MOVE, Unbounded, PerMovement, |p| {
            0.01 * (3.20 + 0.72 * p.value(L)) * p.value(DH)
        }),
        entry(21, "Body turn", TURN, Unbounded, PerMovement, |p| {
            0.01 * (0.058 * p.value(BW) + 0.103 * p.value(L))
        }),
    ];

    equations.extend(WORK_RATES_KCAL_PER_MIN.iter().map(|&(number, name, kcal_per_min)| {
        Equation::new(
            EquationId::Garg { number },
            name,
            TIMED,
            Unbounded,
            DurationScaled,
            EquationKind::WorkRate { kcal_per_min },
        )
    }));

    equations
}
