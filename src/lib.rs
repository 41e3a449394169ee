// ABOUTME: Main library entry point for the Ergoload workload evaluation tools
// ABOUTME: Re-exports the core model and engine, plus logging and environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

#![deny(unsafe_code)]

//! # Ergoload
//!
//! Physical workload evaluation with three empirical methods:
//!
//! - **Garg**: 31 metabolic prediction equations (Garg, Chaffin & Herrin)
//! - **RSST**: position and work-type rate tables
//! - **Kodak**: effort point tables
//!
//! A [`Task`] lists activities referencing catalog equations. The engine
//! validates each activity, computes its cost, aggregates the costs, converts
//! the total to kcal/min, l O2/min and %VO2max, and classifies it on the RSST
//! and AIHA severity scales.
//!
//! ```rust,no_run
//! use ergoload::models::{Activity, EquationId, Method, ParameterName, Subject, Task};
//! use ergoload::compute_task_result;
//!
//! # fn main() -> Result<(), ergoload::errors::ErgoError> {
//! let walking = Activity::new(EquationId::garg(11)?)
//!     .with_parameter(ParameterName::Speed, 1.2)
//!     .with_parameter(ParameterName::Grade, 0.0)
//!     .with_duration(10.0);
//! let task = Task::new(Method::Garg)
//!     .with_subject(Subject::with_body_weight(80.0))
//!     .with_total_duration(10.0)
//!     .with_activity(walking);
//! let result = compute_task_result(&task)?;
//! println!("{:.2} kcal/min", result.energy.kcal_per_min);
//! # Ok(())
//! # }
//! ```
//!
//! [`Task`]: models::Task

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use ergoload_core::{constants, errors, models};
pub use ergoload_engine::{
    aggregation, catalog, classification, evaluator, result, units, validation,
};
pub use ergoload_engine::{
    compute_task_result, evaluate_activity, validate_activity, validate_parameters, BoundaryRule,
    ClassifierConfig, Engine, EngineConfig, EquationCatalog, SeverityScale, TaskResult,
    ValidatedParams,
};
