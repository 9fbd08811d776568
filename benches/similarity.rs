//! Benchmarks for the similarity-transform eigensolver
//!
//! Covers the row-sum reduction kernel in isolation and the full solve,
//! across matrix dimensions, on seeded random positive matrices.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use simeig::algorithm::similarity::{dominant_eig, row_sums, DominantEigOptions};
use simeig::generate;
use simeig::matrix::Matrix;

fn positive_matrix(n: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    generate::random_positive(n, &mut rng).expect("generator should succeed")
}

fn bench_row_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_sums");
    for n in [256usize, 1024] {
        let m = positive_matrix(n, 0xC0FFEE);
        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| black_box(row_sums(black_box(m))));
        });
    }
    group.finish();
}

fn bench_dominant_eig(c: &mut Criterion) {
    let mut group = c.benchmark_group("dominant_eig");
    group.sample_size(20);
    for n in [64usize, 128] {
        let m = positive_matrix(n, 0xBEEF);
        let options = DominantEigOptions {
            tol: 1e-8,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| black_box(dominant_eig(black_box(m), options.clone()).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_row_sums, bench_dominant_eig);
criterion_main!(benches);
