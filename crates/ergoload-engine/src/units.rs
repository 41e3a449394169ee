// ABOUTME: Energy and oxygen consumption unit conversions
// ABOUTME: kcal/min, kcal/h, l O2/min, VO2max and Kodak points to VO2
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use ergoload_core::constants::energy::{L_O2_PER_KCAL, MINUTES_PER_HOUR, ML_PER_LITRE};
use ergoload_core::constants::kodak::{POINTS_OFFSET, VO2_PER_POINT};
use ergoload_core::constants::limits::MAX_PERCENT;
use ergoload_core::errors::{AppResult, ErgoError};

/// kcal/min to l O2/min
#[must_use]
pub fn kcal_per_min_to_l_o2_per_min(kcal_per_min: f64) -> f64 {
    L_O2_PER_KCAL * kcal_per_min
}

/// l O2/min to kcal/min
#[must_use]
pub fn l_o2_per_min_to_kcal_per_min(l_o2_per_min: f64) -> f64 {
    l_o2_per_min / L_O2_PER_KCAL
}

/// kcal/h to kcal/min
#[must_use]
pub fn kcal_per_hour_to_kcal_per_min(kcal_per_hour: f64) -> f64 {
    kcal_per_hour / MINUTES_PER_HOUR
}

/// kcal/min to kcal/h
#[must_use]
pub fn kcal_per_min_to_kcal_per_hour(kcal_per_min: f64) -> f64 {
    kcal_per_min * MINUTES_PER_HOUR
}

/// Absolute VO2max (l O2/min) from relative VO2max and body weight
#[must_use]
pub fn vo2max_l_o2_per_min(vo2max_ml_kg_min: f64, body_weight_kg: f64) -> f64 {
    vo2max_ml_kg_min * body_weight_kg / ML_PER_LITRE
}

/// Share of VO2max used by a workload, in percent
///
/// # Errors
///
/// Returns `ErgoError::UndefinedConversion` if `vo2max_l_o2_per_min` is not
/// strictly positive
pub fn percent_vo2max(l_o2_per_min: f64, vo2max_l_o2_per_min: f64) -> AppResult<f64> {
    if !vo2max_l_o2_per_min.is_finite() || vo2max_l_o2_per_min <= 0.0 {
        return Err(ErgoError::undefined_conversion(
            "%VO2max",
            format!("VO2max ({vo2max_l_o2_per_min} l O2/min) must be positive"),
        ));
    }
    Ok(l_o2_per_min / vo2max_l_o2_per_min * MAX_PERCENT)
}

/// Kodak total points to VO2 (l O2/min)
///
/// Linear and unclamped: totals below the offset give a negative value.
#[must_use]
pub fn kodak_points_to_vo2_l_per_min(points: f64) -> f64 {
    VO2_PER_POINT * (points - POINTS_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_minute_round_trip() {
        let rate = 78.0;
        let back = kcal_per_min_to_kcal_per_hour(kcal_per_hour_to_kcal_per_min(rate));
        assert!((back - rate).abs() < 1e-12);
    }

    #[test]
    fn test_vo2max_scaling() {
        assert!((vo2max_l_o2_per_min(40.0, 75.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_percent_vo2max_requires_positive_capacity() {
        assert!(percent_vo2max(1.0, 0.0).is_err());
        assert!(percent_vo2max(1.0, -2.0).is_err());
    }
}
