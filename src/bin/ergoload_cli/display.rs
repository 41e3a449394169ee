// ABOUTME: Output formatting helpers for ergoload-cli
// ABOUTME: Text rendering of task results, catalog entries and classifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use ergoload::catalog::Equation;
use ergoload::classification::BoundaryRule;
use ergoload::result::{Classification, MethodSummary, TaskResult};

/// Print a task result as a text report
pub fn print_result(result: &TaskResult) {
    println!("Method: {}", result.method);
    println!("{}", "=".repeat(60));

    for outcome in &result.activities {
        let label = outcome.label.as_deref().unwrap_or("-");
        match (&outcome.cost, &outcome.error) {
            (_, Some(error)) => println!("  {} [{label}]  ERROR {}: {error}", outcome.equation, error.code()),
            (Some(cost), None) => {
                let degree = outcome
                    .degree
                    .map(|degree| format!("  ({})", degree.french_label()))
                    .unwrap_or_default();
                println!(
                    "  {} [{label}]  cost {cost:.3}  contribution {:.3}{degree}",
                    outcome.equation, outcome.contribution
                );
            }
            (None, None) => println!("  {} [{label}]  not evaluated", outcome.equation),
        }
    }

    println!("{}", "-".repeat(60));
    match &result.summary {
        MethodSummary::Garg(garg) => {
            println!("Movements: {:.2} kcal", garg.movement_kcal);
            for position in &garg.positions {
                println!(
                    "Posture {:?}: {:.1} % of {:.1} min, {:.2} kcal",
                    position.posture, position.percent, garg.total_duration_min, position.kcal
                );
            }
            println!("Total: {:.2} kcal over {:.1} min", garg.total_kcal, garg.total_duration_min);
        }
        MethodSummary::Rsst(rsst) => {
            println!(
                "Total: {:.2} kcal over {:.1} min",
                rsst.total_kcal, rsst.total_duration_min
            );
        }
        MethodSummary::Kodak(kodak) => {
            println!(
                "Points: {} primary + {} secondary = {}",
                kodak.primary_points, kodak.secondary_points, kodak.total_points
            );
            println!("VO2: {:.3} l O2/min", kodak.vo2_l_per_min);
        }
    }

    println!("Energy: {:.2} kcal/min", result.energy.kcal_per_min);
    println!("Oxygen: {:.3} l O2/min", result.energy.l_o2_per_min);
    if let Some(percent) = result.energy.percent_vo2max {
        println!("VO2max: {percent:.1} %");
    }
    if let Some(issue) = &result.conversion_issue {
        println!("VO2max: {issue}");
    }
    for classification in &result.classifications {
        println!("Severity ({}): {}", classification.scale, classification.level);
    }
}

/// Print catalog entries, one per line
pub fn print_catalog(equations: &[&Equation]) {
    for equation in equations {
        let parameters: Vec<_> = equation.parameters.iter().map(|name| name.code()).collect();
        println!(
            "{:<40} {:<36} [{}]",
            equation.id.to_string(),
            equation.name,
            parameters.join(", ")
        );
    }
}

/// Print classifications of one rate
pub fn print_classifications(classifications: &[Classification], rule: BoundaryRule) {
    for classification in classifications {
        println!(
            "{}: {} (band {}, boundary rule {rule})",
            classification.scale, classification.level, classification.band
        );
    }
}
