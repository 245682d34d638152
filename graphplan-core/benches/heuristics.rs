/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphplan_core::{Heuristic, PlanningGraphConfiguration};
use graphplan_utils::{air_cargo_p1, air_cargo_p3, SearchProblem, StripsProblem};

fn bench_problem(c: &mut Criterion, problem: &StripsProblem) {
    let initial = problem.initial();
    for heuristic in Heuristic::ALL {
        c.bench_function(&format!("{}_{heuristic}", problem.name()), |b| {
            b.iter(|| {
                // a fresh graph per iteration, bypassing the problem's memoization
                let mut graph = problem
                    .planning_graph(black_box(&initial), heuristic.configuration())
                    .unwrap();
                black_box(graph.heuristic(heuristic).unwrap());
            });
        });
    }
    c.bench_function(&format!("{}_fill", problem.name()), |b| {
        b.iter(|| {
            let mut graph = problem
                .planning_graph(black_box(&initial), PlanningGraphConfiguration::default())
                .unwrap();
            graph.fill(None);
            black_box(graph.level_count());
        });
    });
}

fn heuristics_benchmark(c: &mut Criterion) {
    bench_problem(c, &air_cargo_p1().unwrap());
    bench_problem(c, &air_cargo_p3().unwrap());
}

criterion_group!(benches, heuristics_benchmark);
criterion_main!(benches);
