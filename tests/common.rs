// ABOUTME: Shared test utilities and task fixtures for integration tests
// ABOUTME: Provides float comparison helpers and typical Garg, RSST and Kodak tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ergoload`

use ergoload::models::{
    Activity, EquationId, HandlingEase, KodakEffortType, Method, ParameterName, PostureSplit,
    RsstPosition, RsstWorkType, SecondaryCondition, SecondaryEffort, Sex, Subject, Task,
};

/// Tolerance for computed values
pub const TOLERANCE: f64 = 1e-9;

/// Assert that two floats agree within `TOLERANCE`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

/// 80 kg male subject
pub fn subject() -> Subject {
    Subject::with_body_weight(80.0).with_sex(Sex::Male)
}

/// Garg equation `number`
pub fn garg(number: u8) -> EquationId {
    EquationId::garg(number).unwrap()
}

/// Walking without load at 1.2 m/s on the flat for 10 minutes (equation 11)
pub fn walking_activity() -> Activity {
    Activity::new(garg(11))
        .with_label("walk to rack")
        .with_parameter(ParameterName::Speed, 1.2)
        .with_parameter(ParameterName::Grade, 0.0)
        .with_duration(10.0)
}

/// Stoop lift of 10 kg from 0.1 m to 0.7 m (equation 4)
pub fn stoop_lift_activity(repetitions: u32) -> Activity {
    Activity::new(garg(4))
        .with_label("lift box")
        .with_parameter(ParameterName::Load, 10.0)
        .with_parameter(ParameterName::LowerHeight, 0.1)
        .with_parameter(ParameterName::UpperHeight, 0.7)
        .with_repetitions(repetitions)
}

/// Garg task over 60 minutes, half sitting and half standing
pub fn garg_task() -> Task {
    Task::new(Method::Garg)
        .with_subject(subject())
        .with_total_duration(60.0)
        .with_posture_split(PostureSplit::new(50.0, 50.0, 0.0))
        .with_activity(walking_activity())
        .with_activity(stoop_lift_activity(5))
}

/// RSST activity for a table pair
pub fn rsst_activity(position: RsstPosition, work: RsstWorkType, duration_min: f64) -> Activity {
    Activity::new(EquationId::rsst(position, work)).with_duration(duration_min)
}

/// Kodak primary lift of 25 kg with difficult handling during 40 % of the shift
pub fn kodak_lift_activity() -> Activity {
    Activity::new(EquationId::kodak_primary(
        KodakEffortType::LiftCarry,
        HandlingEase::Difficult,
    ))
    .with_parameter(ParameterName::Magnitude, 25.0)
    .with_parameter(ParameterName::PercentTime, 40.0)
}

/// Kodak secondary effort without parameters
pub fn kodak_secondary_activity(effort: SecondaryEffort, condition: SecondaryCondition) -> Activity {
    Activity::new(EquationId::kodak_secondary(effort, condition))
}
