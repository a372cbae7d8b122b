//! Criterion benchmarks for bandit-ga.
//!
//! Uses the built-in 20-item example instance to measure evaluator
//! throughput and full-episode runtime at several round counts.

use bandit_ga::env::{EnvConfig, EpisodeRunner};
use bandit_ga::knapsack::KnapsackProblem;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_evaluate(c: &mut Criterion) {
    let problem = KnapsackProblem::example();
    let solution: Vec<bool> = (0..problem.len()).map(|i| i % 2 == 0).collect();

    c.bench_function("evaluate_20_items", |b| {
        b.iter(|| problem.evaluate(black_box(&solution)))
    });
}

fn bench_episode(c: &mut Criterion) {
    let problem = KnapsackProblem::example();
    let mut group = c.benchmark_group("episode");

    for generations in [10usize, 50, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(generations),
            &generations,
            |b, &generations| {
                let config = EnvConfig::default()
                    .with_generations(generations)
                    .with_seed(42);
                b.iter(|| EpisodeRunner::run(black_box(&problem), black_box(&config)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_episode);
criterion_main!(benches);
