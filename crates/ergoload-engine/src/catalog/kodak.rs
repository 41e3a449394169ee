// ABOUTME: Kodak effort tables: degree of effort, time-weighted points and secondary efforts
// ABOUTME: Figures 8, 9 and 10 as three independent functions composed by the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! Kodak point method
//!
//! A primary effort is graded by [`effort_degree`] (Figure 8), then weighted by
//! the share of the shift it occupies with [`time_points`] (Figure 9).
//! Secondary efforts read their points directly from [`secondary_points`]
//! (Figure 10). The three tables never call each other.
//!
//! Reference: Eastman Kodak Company (1986). *Ergonomic Design for People at
//! Work*, Vol. 2.

use super::{Constraint, CostBasis, Equation, EquationKind};
use ergoload_core::models::{
    EquationId, HandlingEase, KodakEffortType, ParameterName, SecondaryCondition,
    SecondaryEffort,
};
use serde::{Deserialize, Serialize};
use std::fmt;

const PRIMARY: &[ParameterName] = &[ParameterName::Magnitude, ParameterName::PercentTime];
const SECONDARY: &[ParameterName] = &[];

/// Inclusive upper bounds (%) of the Figure 9 time columns
const TIME_COLUMNS_PERCENT: [f64; 10] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];

/// Degree of a primary effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortDegree {
    /// Léger
    Light,
    /// Modéré
    Moderate,
    /// Lourd
    Heavy,
    /// Très lourd
    VeryHeavy,
}

impl EffortDegree {
    /// Every degree, lightest first
    pub const ALL: &'static [Self] = &[Self::Light, Self::Moderate, Self::Heavy, Self::VeryHeavy];

    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::VeryHeavy => "very_heavy",
        }
    }

    /// Label used on the French-language forms
    #[must_use]
    pub const fn french_label(self) -> &'static str {
        match self {
            Self::Light => "léger",
            Self::Moderate => "modéré",
            Self::Heavy => "lourd",
            Self::VeryHeavy => "très lourd",
        }
    }

    const fn time_points_row(self) -> [f64; 10] {
        match self {
            Self::Light => [5.0, 9.0, 14.0, 19.0, 23.0, 28.0, 33.0, 38.0, 42.0, 47.0],
            Self::Moderate => [10.0, 19.0, 28.0, 38.0, 47.0, 57.0, 66.0, 76.0, 85.0, 95.0],
            Self::Heavy => [16.0, 31.0, 47.0, 62.0, 78.0, 93.0, 109.0, 124.0, 140.0, 155.0],
            Self::VeryHeavy => [22.0, 44.0, 66.0, 88.0, 110.0, 132.0, 154.0, 176.0, 198.0, 220.0],
        }
    }
}

impl fmt::Display for EffortDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive upper magnitude bounds (kg) for light, moderate and heavy
const fn degree_bounds_kg(effort: KodakEffortType, handling: HandlingEase) -> [f64; 3] {
    match (effort, handling) {
        (KodakEffortType::LiftCarry, HandlingEase::Easy) => [15.0, 35.0, 50.0],
        (KodakEffortType::LiftCarry, HandlingEase::Difficult) => [7.0, 25.0, 35.0],
        (KodakEffortType::PushPull, HandlingEase::Easy) => [10.0, 25.0, 40.0],
        (KodakEffortType::PushPull, HandlingEase::Difficult) => [7.0, 18.0, 30.0],
    }
}

/// Figure 8: degree of a primary effort from its magnitude
#[must_use]
pub fn effort_degree(effort: KodakEffortType, handling: HandlingEase, magnitude: f64) -> EffortDegree {
    let [light, moderate, heavy] = degree_bounds_kg(effort, handling);
    if magnitude <= light {
        EffortDegree::Light
    } else if magnitude <= moderate {
        EffortDegree::Moderate
    } else if magnitude <= heavy {
        EffortDegree::Heavy
    } else {
        EffortDegree::VeryHeavy
    }
}

/// Figure 9: points for `degree` held during `percent_time` of the shift
///
/// Columns are selected by inclusive upper bound; 0 % scores no points.
#[must_use]
pub fn time_points(degree: EffortDegree, percent_time: f64) -> f64 {
    if percent_time <= 0.0 {
        return 0.0;
    }
    let row = degree.time_points_row();
    let column = TIME_COLUMNS_PERCENT
        .iter()
        .position(|bound| percent_time <= *bound)
        .unwrap_or(row.len() - 1);
    row[column]
}

/// Figure 10: points of a secondary effort
#[must_use]
pub const fn secondary_points(effort: SecondaryEffort, condition: SecondaryCondition) -> f64 {
    let row = match effort {
        SecondaryEffort::Sitting => [2.0, 4.0, 6.0],
        SecondaryEffort::Standing => [4.0, 7.0, 10.0],
        SecondaryEffort::Walking => [8.0, 14.0, 20.0],
        SecondaryEffort::StoopingKneeling => [6.0, 11.0, 16.0],
        SecondaryEffort::Climbing => [12.0, 22.0, 32.0],
        SecondaryEffort::OverheadReach => [5.0, 9.0, 13.0],
    };
    match condition {
        SecondaryCondition::Occasional => row[0],
        SecondaryCondition::Frequent => row[1],
        SecondaryCondition::Continuous => row[2],
    }
}

/// Figure 8 composed with Figure 9
#[must_use]
pub fn primary_points(
    effort: KodakEffortType,
    handling: HandlingEase,
    magnitude: f64,
    percent_time: f64,
) -> f64 {
    time_points(effort_degree(effort, handling, magnitude), percent_time)
}

/// Primary entries per effort type and handling ease, then secondary entries
pub(crate) fn equations() -> Vec<Equation> {
    let primary = KodakEffortType::ALL.iter().flat_map(|effort| {
        HandlingEase::ALL.iter().map(move |handling| {
            Equation::new(
                EquationId::kodak_primary(*effort, *handling),
                format!("{}, {}", effort.label(), handling.label().to_lowercase()),
                PRIMARY,
                Constraint::None,
                CostBasis::Points,
                EquationKind::KodakPrimary {
                    effort: *effort,
                    handling: *handling,
                },
            )
        })
    });

    let secondary = SecondaryEffort::ALL.iter().flat_map(|effort| {
        SecondaryCondition::ALL.iter().map(move |condition| {
            Equation::new(
                EquationId::kodak_secondary(*effort, *condition),
                format!("{}, {}", effort.label(), condition.label().to_lowercase()),
                SECONDARY,
                Constraint::None,
                CostBasis::Points,
                EquationKind::KodakSecondary {
                    effort: *effort,
                    condition: *condition,
                },
            )
        })
    });

    primary.chain(secondary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_bounds_are_inclusive() {
        let degree = |m| effort_degree(KodakEffortType::LiftCarry, HandlingEase::Easy, m);
        assert_eq!(degree(15.0), EffortDegree::Light);
        assert_eq!(degree(15.1), EffortDegree::Moderate);
        assert_eq!(degree(50.0), EffortDegree::Heavy);
        assert_eq!(degree(50.5), EffortDegree::VeryHeavy);
    }

    #[test]
    fn test_time_columns() {
        assert!((time_points(EffortDegree::Heavy, 0.0)).abs() < f64::EPSILON);
        assert!((time_points(EffortDegree::Heavy, 0.5) - 16.0).abs() < f64::EPSILON);
        assert!((time_points(EffortDegree::Heavy, 10.0) - 16.0).abs() < f64::EPSILON);
        assert!((time_points(EffortDegree::Heavy, 10.1) - 31.0).abs() < f64::EPSILON);
        assert!((time_points(EffortDegree::VeryHeavy, 100.0) - 220.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_french_labels() {
        let labels: Vec<_> = EffortDegree::ALL.iter().map(|d| d.french_label()).collect();
        assert_eq!(labels, ["léger", "modéré", "lourd", "très lourd"]);
    }
}
