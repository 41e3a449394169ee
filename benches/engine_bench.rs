// ABOUTME: Criterion benchmarks for the workload evaluation engine
// ABOUTME: Measures task evaluation for each method and catalog validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

//! Criterion benchmarks for task evaluation.
//!
//! Measures Garg, RSST and Kodak task evaluation over growing activity
//! counts, plus raw parameter validation against the catalog.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ergoload::models::{
    Activity, EquationId, HandlingEase, KodakEffortType, Method, ParameterName, PostureSplit,
    RsstPosition, RsstWorkType, SecondaryCondition, SecondaryEffort, Sex, Subject, Task,
};
use ergoload::{Engine, EquationCatalog};

const ACTIVITY_COUNTS: [usize; 3] = [10, 100, 500];

/// Garg task alternating walking, lifting and holding activities
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn garg_task(count: usize) -> Task {
    let subject = Subject::with_body_weight(78.0)
        .with_sex(Sex::Female)
        .with_vo2max(38.0);
    let mut task = Task::new(Method::Garg)
        .with_subject(subject)
        .with_total_duration(480.0)
        .with_posture_split(PostureSplit::new(20.0, 60.0, 10.0));

    for index in 0..count {
        let activity = match index % 3 {
            0 => Activity::new(EquationId::Garg { number: 11 })
                .with_parameter(ParameterName::Speed, 1.0 + (index % 5) as f64 / 10.0)
                .with_parameter(ParameterName::Grade, (index % 4) as f64)
                .with_duration(2.0),
            1 => Activity::new(EquationId::Garg { number: 5 })
                .with_parameter(ParameterName::Load, 5.0 + (index % 15) as f64)
                .with_parameter(ParameterName::LowerHeight, 0.1)
                .with_parameter(ParameterName::UpperHeight, 0.75)
                .with_repetitions(1 + (index % 20) as u32),
            _ => Activity::new(EquationId::Garg { number: 15 })
                .with_parameter(ParameterName::Load, "7,5")
                .with_duration(1.5),
        };
        task = task.with_activity(activity);
    }
    task
}

/// RSST task cycling through every table pair
fn rsst_task(count: usize) -> Task {
    let pairs: Vec<_> = RsstPosition::ALL
        .iter()
        .flat_map(|position| RsstWorkType::ALL.iter().map(move |work| (*position, *work)))
        .collect();

    pairs
        .iter()
        .cycle()
        .take(count)
        .fold(Task::new(Method::Rsst), |task, (position, work)| {
            task.with_activity(Activity::new(EquationId::rsst(*position, *work)).with_duration(5.0))
        })
}

/// Kodak task mixing primary and secondary efforts
#[allow(clippy::cast_precision_loss)]
fn kodak_task(count: usize) -> Task {
    (0..count).fold(Task::new(Method::Kodak), |task, index| {
        let activity = if index % 2 == 0 {
            Activity::new(EquationId::kodak_primary(
                KodakEffortType::LiftCarry,
                HandlingEase::Difficult,
            ))
            .with_parameter(ParameterName::Magnitude, (index % 40) as f64)
            .with_parameter(ParameterName::PercentTime, (index % 100) as f64)
        } else {
            Activity::new(EquationId::kodak_secondary(
                SecondaryEffort::Walking,
                SecondaryCondition::Frequent,
            ))
        };
        task.with_activity(activity)
    })
}

fn bench_methods(c: &mut Criterion) {
    let engine = Engine::standard();
    let builders: [(&str, fn(usize) -> Task); 3] =
        [("garg", garg_task), ("rsst", rsst_task), ("kodak", kodak_task)];

    for (name, build) in builders {
        let mut group = c.benchmark_group(name);
        for count in ACTIVITY_COUNTS {
            let task = build(count);
            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(BenchmarkId::new("compute", count), &task, |b, task| {
                b.iter(|| engine.compute(black_box(task)));
            });
        }
        group.finish();
    }
}

fn bench_validation(c: &mut Criterion) {
    let catalog = EquationCatalog::standard();
    let activity = Activity::new(EquationId::Garg { number: 4 })
        .with_parameter(ParameterName::BodyWeight, 80.0)
        .with_parameter(ParameterName::Load, "12,5")
        .with_parameter(ParameterName::LowerHeight, 0.1)
        .with_parameter(ParameterName::UpperHeight, 0.7)
        .with_parameter(ParameterName::Sex, 1.0);

    c.bench_function("validate_stoop_lift", |b| {
        b.iter(|| catalog.validate(black_box(activity.equation), black_box(&activity.parameters)));
    });
}

criterion_group!(benches, bench_methods, bench_validation);
criterion_main!(benches);
