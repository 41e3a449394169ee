// ABOUTME: Workload evaluation engine for the Garg, RSST and Kodak methods
// ABOUTME: Equation catalog, validation, per-activity costs, aggregation, conversion and classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

#![deny(unsafe_code)]

//! # Ergoload Engine
//!
//! Pure, synchronous evaluation of physical workload. A [`Task`] goes in,
//! a [`TaskResult`] comes out; nothing is cached between calls except the
//! immutable standard [`EquationCatalog`].
//!
//! ## Pipeline
//!
//! 1. **catalog**: equation lookup and cost functions
//! 2. **validation**: schema, domain and predicate checks
//! 3. **evaluator**: per-activity cost and contribution
//! 4. **aggregation**: order-independent totals per method
//! 5. **units**: kcal, l O2 and %VO2max conversions
//! 6. **classification**: RSST and AIHA severity scales
//!
//! [`Task`]: ergoload_core::models::Task

/// Garg, RSST and Kodak equation catalog
pub mod catalog;

/// Classifier configuration and configuration errors
pub mod config;

/// Validated parameter values
pub mod parameters;

/// Parameter and task validation
pub mod validation;

/// Per-activity cost evaluation
pub mod evaluator;

/// Cross-activity aggregation
pub mod aggregation;

/// Unit conversions
pub mod units;

/// Severity classification
pub mod classification;

/// Task result model
pub mod result;

/// Engine orchestration and entry points
pub mod engine;

pub use catalog::{Constraint, CostBasis, CostUnit, Equation, EquationCatalog, EquationKind};
pub use classification::{BoundaryRule, Classifier, SeverityLevel, SeverityScale};
pub use config::{ClassifierConfig, ConfigError, EngineConfig};
pub use engine::{
    compute_task_result, evaluate_activity, validate_activity, validate_parameters, Engine,
};
pub use parameters::ValidatedParams;
pub use result::{ActivityOutcome, Classification, EnergyFigures, MethodSummary, TaskResult};
