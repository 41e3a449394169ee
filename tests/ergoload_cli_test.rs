// ABOUTME: Integration tests for the ergoload-cli binary
// ABOUTME: Tests task evaluation, catalog listing, classification and error exits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! Integration tests for the ergoload-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const SITTING_HOUR: &str = r#"{
    "method": "rsst",
    "total_duration_min": 60,
    "activities": [
        {
            "label": "desk work",
            "equation": { "method": "rsst", "position": "sitting", "work": "none" },
            "duration_min": 60
        }
    ]
}"#;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_ergoload-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("ERGOLOAD_BOUNDARY_RULE")
        .env_remove("ERGOLOAD_SCALES")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn write_task(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("task.json");
    fs::write(&path, contents).unwrap();
    path_string(&path)
}

fn path_string(path: &Path) -> String {
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["evaluate", "catalog", "classify"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_evaluate_prints_json_result() {
    let dir = TempDir::new().unwrap();
    let task = write_task(&dir, SITTING_HOUR);

    let (exit_code, stdout, stderr) = run_cli(&["evaluate", &task]);
    assert_eq!(exit_code, 0, "stderr: {stderr}");

    let result: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["method"], "rsst");
    let kcal = result["energy"]["kcal_per_min"].as_f64().unwrap();
    assert!((kcal - 1.3).abs() < 1e-9);
    assert_eq!(result["classifications"][0]["level"], "light");
}

#[test]
fn test_evaluate_text_report() {
    let dir = TempDir::new().unwrap();
    let task = write_task(&dir, SITTING_HOUR);

    let (exit_code, stdout, _stderr) = run_cli(&["evaluate", &task, "--format", "text"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("desk work"));
    assert!(stdout.contains("1.30 kcal/min"));
}

#[test]
fn test_evaluate_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = path_string(&dir.path().join("absent.json"));

    let (exit_code, _stdout, stderr) = run_cli(&["evaluate", &missing]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Failed to read task file"));
}

#[test]
fn test_evaluate_invalid_task_fails() {
    let dir = TempDir::new().unwrap();
    let task = write_task(
        &dir,
        r#"{ "method": "garg", "posture_split": { "sitting_percent": 80, "standing_percent": 40 } }"#,
    );

    let (exit_code, _stdout, stderr) = run_cli(&["evaluate", &task]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("invalid task"));
}

#[test]
fn test_catalog_lists_method_entries() {
    let (exit_code, stdout, _stderr) = run_cli(&["catalog", "--method", "rsst"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 33);
    assert!(stdout.contains("rsst:sitting/none"));
    assert!(!stdout.contains("garg:"));
}

#[test]
fn test_catalog_json() {
    let (exit_code, stdout, _stderr) = run_cli(&["catalog", "--format", "json"]);
    assert_eq!(exit_code, 0);
    let entries: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 86);
}

#[test]
fn test_classify_boundary_rule() {
    let (_, lower, _) = run_cli(&["classify", "3.3"]);
    assert!(lower.contains("rsst: light"));

    let (exit_code, upper, _) = run_cli(&["classify", "3.3", "--boundary", "upper"]);
    assert_eq!(exit_code, 0);
    assert!(upper.contains("rsst: medium"));
}
