// ABOUTME: Ergoload CLI - evaluate workload tasks from JSON files
// ABOUTME: Lists catalog equations and classifies energy expenditure rates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors
//!
//! Usage:
//! ```bash
//! # Evaluate a task and print the result as JSON
//! ergoload-cli evaluate task.json
//!
//! # Human-readable report, values on a boundary in the upper band
//! ergoload-cli evaluate task.json --format text --boundary upper
//!
//! # List the RSST table entries
//! ergoload-cli catalog --method rsst
//!
//! # Classify 4.2 kcal/min on every enabled scale
//! ergoload-cli classify 4.2
//! ```

mod commands;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ergoload::classification::BoundaryRule;
use ergoload::config::EngineSettings;
use ergoload::logging;
use ergoload::models::Method;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "ergoload-cli",
    about = "Ergoload workload evaluation CLI",
    long_about = "Evaluate physical workload with the Garg, RSST and Kodak methods."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a task described in a JSON file
    Evaluate {
        /// Path to the task JSON file
        task: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Band for values equal to a boundary (overrides `ERGOLOAD_BOUNDARY_RULE`)
        #[arg(long, value_enum)]
        boundary: Option<BoundaryArg>,
    },

    /// List catalog entries
    Catalog {
        /// Only list entries of this method
        #[arg(long, value_enum)]
        method: Option<MethodArg>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Classify an energy expenditure rate
    Classify {
        /// Rate in kcal/min
        kcal_per_min: f64,

        /// Band for values equal to a boundary (overrides `ERGOLOAD_BOUNDARY_RULE`)
        #[arg(long, value_enum)]
        boundary: Option<BoundaryArg>,
    },
}

/// Output format of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable text
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BoundaryArg {
    Lower,
    Upper,
}

impl From<BoundaryArg> for BoundaryRule {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Lower => Self::LowerBand,
            BoundaryArg::Upper => Self::UpperBand,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Garg,
    Rsst,
    Kodak,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Garg => Self::Garg,
            MethodArg::Rsst => Self::Rsst,
            MethodArg::Kodak => Self::Kodak,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_from_env(cli.verbose)?;

    let mut settings = EngineSettings::from_env()?;
    debug!(config = ?settings.engine, "Loaded engine configuration");

    match cli.command {
        Command::Evaluate {
            task,
            format,
            boundary,
        } => {
            if let Some(boundary) = boundary {
                settings.engine.classifier.boundary_rule = boundary.into();
            }
            commands::evaluate(&task, format, &settings.engine)?;
        }
        Command::Catalog { method, format } => {
            commands::catalog(method.map(Method::from), format)?;
        }
        Command::Classify {
            kcal_per_min,
            boundary,
        } => {
            if let Some(boundary) = boundary {
                settings.engine.classifier.boundary_rule = boundary.into();
            }
            commands::classify(kcal_per_min, &settings.engine);
        }
    }

    Ok(())
}
