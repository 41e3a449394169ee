// ABOUTME: Configuration module for the ergoload facade crate and CLI
// ABOUTME: Process settings assembled from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! Configuration module
//!
//! - **Environment**: logging and engine settings from environment variables

/// Environment-based process configuration
pub mod environment;

pub use environment::{EngineSettings, LogLevel};
