// ABOUTME: Published constants of the Garg, RSST and Kodak workload methods
// ABOUTME: Unit conversion factors, basal rates, knuckle height and severity boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! Method constants organized by domain
//!
//! References:
//! - Garg, A., Chaffin, D.B., & Herrin, G.D. (1978). Prediction of metabolic
//!   rates for manual materials handling jobs. *AIHA Journal*, 39(8), 661-674.
//! - Règlement sur la santé et la sécurité du travail (RSST), Québec.
//! - Eastman Kodak Company (1986). *Ergonomic Design for People at Work*, Vol. 2.

/// Energy and oxygen unit conversions
pub mod energy {
    /// Litres of O2 per minute for 1 kcal/min (about 4.8 kcal per litre O2)
    pub const L_O2_PER_KCAL: f64 = 0.208;

    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Millilitres per litre
    pub const ML_PER_LITRE: f64 = 1000.0;
}

/// Garg, Chaffin & Herrin metabolic prediction model
pub mod garg {
    /// Number of equations in the model
    pub const EQUATION_COUNT: u8 = 31;

    /// Knuckle height (m) separating floor-to-knuckle and above-knuckle equations
    pub const KNUCKLE_HEIGHT_M: f64 = 0.81;

    /// Equation used for the sitting share of the task
    pub const SITTING_EQUATION: u8 = 1;

    /// Equation used for the standing share of the task
    pub const STANDING_EQUATION: u8 = 2;

    /// Equation used for the bent-standing share of the task
    pub const STOOPED_EQUATION: u8 = 3;
}

/// RSST metabolic rate tables
pub mod rsst {
    /// Basal metabolism added to every activity (kcal/h)
    pub const BASAL_RATE_KCAL_PER_HOUR: f64 = 60.0;
}

/// Kodak point method
pub mod kodak {
    /// l O2/min per point above the offset
    pub const VO2_PER_POINT: f64 = 0.012;

    /// Points subtracted before applying the slope
    pub const POINTS_OFFSET: f64 = 9.0;
}

/// Severity scale boundaries (kcal/min)
pub mod classification {
    /// RSST 4-tier scale: light, medium, heavy, very heavy
    pub const RSST_BOUNDARIES: [f64; 3] = [3.3, 5.8, 8.3];

    /// AIHA 7-tier scale: rest through excessively heavy
    pub const AIHA_BOUNDARIES: [f64; 6] = [1.6, 2.5, 5.0, 7.5, 10.0, 12.5];
}

/// Percentage limits
pub mod limits {
    /// Upper bound of any percentage value
    pub const MAX_PERCENT: f64 = 100.0;
}
