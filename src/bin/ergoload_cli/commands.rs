// ABOUTME: Command implementations for ergoload-cli
// ABOUTME: Task evaluation, catalog listing and rate classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use crate::display;
use crate::OutputFormat;
use anyhow::{Context, Result};
use ergoload::classification::Classifier;
use ergoload::models::{Method, Task};
use ergoload::{Engine, EngineConfig, EquationCatalog};
use std::fs;
use std::path::Path;
use tracing::info;

/// Evaluate the task stored at `path`
pub fn evaluate(path: &Path, format: OutputFormat, config: &EngineConfig) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task file {}", path.display()))?;
    let task: Task = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid task JSON in {}", path.display()))?;

    info!(
        method = %task.method,
        activities = task.activities.len(),
        "Evaluating task"
    );

    let engine = Engine::new(EquationCatalog::standard(), config);
    let result = engine
        .compute(&task)
        .with_context(|| format!("Cannot evaluate task {}", path.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => display::print_result(&result),
    }
    Ok(())
}

/// List catalog entries, optionally for one method
pub fn catalog(method: Option<Method>, format: OutputFormat) -> Result<()> {
    let catalog = EquationCatalog::standard();
    let equations: Vec<_> = catalog
        .iter()
        .filter(|equation| method.is_none_or(|method| equation.method == method))
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&equations)?),
        OutputFormat::Text => display::print_catalog(&equations),
    }
    Ok(())
}

/// Classify a rate on every enabled scale
pub fn classify(kcal_per_min: f64, config: &EngineConfig) {
    let classifier = Classifier::from_config(&config.classifier);
    display::print_classifications(&classifier.classify(kcal_per_min), classifier.rule());
}
