//! Benchmarks for seeded puzzle generation.
//!
//! Measures the complete generation process (randomized grid fill plus the
//! uniqueness-checked clue reduction) for the 9×9 board at two clue
//! budgets. Three fixed seed strings keep runs reproducible while covering
//! multiple dig orders.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use numplace_core::{Difficulty, GridSize};
use numplace_generator::PuzzleGenerator;

const SEEDS: [&str; 3] = ["bench-seed-alpha", "bench-seed-beta", "bench-seed-gamma"];

fn bench_generator_medium(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(GridSize::NINE, Difficulty::Medium);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generator_medium", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter(|| generator.generate_with_seed(hint::black_box(seed)));
            },
        );
    }
}

fn bench_generator_expert(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(GridSize::NINE, Difficulty::Expert);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generator_expert", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter(|| generator.generate_with_seed(hint::black_box(seed)));
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_medium,
        bench_generator_expert
);
criterion_main!(benches);
