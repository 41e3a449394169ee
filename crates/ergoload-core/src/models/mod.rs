// ABOUTME: Core data models for workload evaluation
// ABOUTME: Re-exports Task, Activity, EquationId, table keys and parameter types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! # Data Models
//!
//! The engine consumes a [`Task`] and produces a result that is a pure
//! projection of that task and the equation catalog. Nothing here holds
//! derived state: an [`Activity`] only records what the user entered.
//!
//! ## Core Models
//!
//! - `Task`: subject, duration, posture split and ordered activities
//! - `Activity`: one entry referencing an equation with raw parameter values
//! - `EquationId`: stable identifier of a Garg equation or a table entry
//! - `ParameterName`: the parameters equations may declare

mod equation;
mod parameters;
mod task;

pub use equation::{
    EquationId, HandlingEase, KodakEffortType, Method, RsstPosition, RsstWorkType,
    SecondaryCondition, SecondaryEffort,
};
pub use parameters::{ParameterName, RawParameters, RawValue, SemanticType};
pub use task::{Activity, PostureSplit, Sex, Subject, Task};
