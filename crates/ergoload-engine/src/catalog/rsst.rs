// ABOUTME: RSST metabolic rate tables by body position and work type
// ABOUTME: Activity rate is position + work + basal metabolism, converted to kcal/min
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use super::{Constraint, CostBasis, Equation, EquationKind};
use crate::units::kcal_per_hour_to_kcal_per_min;
use ergoload_core::constants::rsst::BASAL_RATE_KCAL_PER_HOUR;
use ergoload_core::models::{EquationId, ParameterName, RsstPosition, RsstWorkType};

const TIMED: &[ParameterName] = &[ParameterName::Duration];

/// Rate of holding `position` (kcal/h)
#[must_use]
pub const fn position_rate_kcal_per_hour(position: RsstPosition) -> f64 {
    match position {
        RsstPosition::Sitting => 18.0,
        RsstPosition::Standing => 36.0,
        RsstPosition::Walking => 150.0,
    }
}

/// Rate of performing `work` (kcal/h)
#[must_use]
pub const fn work_rate_kcal_per_hour(work: RsstWorkType) -> f64 {
    match work {
        RsstWorkType::None => 0.0,
        RsstWorkType::HandLight => 24.0,
        RsstWorkType::HandHeavy => 54.0,
        RsstWorkType::OneArmLight => 60.0,
        RsstWorkType::OneArmHeavy => 108.0,
        RsstWorkType::TwoArmsLight => 90.0,
        RsstWorkType::TwoArmsHeavy => 150.0,
        RsstWorkType::BodyLight => 210.0,
        RsstWorkType::BodyModerate => 300.0,
        RsstWorkType::BodyHeavy => 420.0,
        RsstWorkType::BodyVeryHeavy => 540.0,
    }
}

/// Activity rate including basal metabolism (kcal/min)
///
/// `(position + work + 60) / 60`, so sitting with no work gives 1.3 kcal/min.
#[must_use]
pub fn activity_rate_kcal_per_min(position: RsstPosition, work: RsstWorkType) -> f64 {
    kcal_per_hour_to_kcal_per_min(
        position_rate_kcal_per_hour(position)
            + work_rate_kcal_per_hour(work)
            + BASAL_RATE_KCAL_PER_HOUR,
    )
}

/// One entry per position and work-type pair
pub(crate) fn equations() -> Vec<Equation> {
    RsstPosition::ALL
        .iter()
        .flat_map(|position| {
            RsstWorkType::ALL.iter().map(move |work| {
                Equation::new(
                    EquationId::rsst(*position, *work),
                    format!("{}, {}", position.label(), work.label().to_lowercase()),
                    TIMED,
                    Constraint::None,
                    CostBasis::TableRate,
                    EquationKind::Rsst {
                        position: *position,
                        work: *work,
                    },
                )
            })
        })
        .collect()
}
