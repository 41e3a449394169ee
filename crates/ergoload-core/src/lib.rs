// ABOUTME: Core types and constants for the Ergoload workload evaluation engine
// ABOUTME: Foundation crate with error taxonomy, method constants, and the task data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

#![deny(unsafe_code)]

//! # Ergoload Core
//!
//! Foundation crate providing shared types and constants for the Ergoload
//! workload evaluation engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error taxonomy with `ErgoError`, `ErrorCode` and `AppResult`
//! - **constants**: Published constants of the Garg, RSST and Kodak methods
//! - **models**: Task, activity, subject and equation identifier types

/// Unified error handling with stable error codes
pub mod errors;

/// Method constants organized by domain
pub mod constants;

/// Core data models (Task, Activity, `EquationId`, parameters)
pub mod models;
