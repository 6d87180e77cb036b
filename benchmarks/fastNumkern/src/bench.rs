//! Numeric kernel benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (100K to 5M elements)
//! - Tuning knobs (quicksort spawn threshold, depth budget)
//! - Pathological cases (pre-sorted, reversed, clustered keys)
//!
//! For serial execution, use `FASTNUMKERN_MODE=serial cargo bench`.
//! For parallel execution, use `FASTNUMKERN_MODE=parallel cargo bench`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastNumkern::prelude::*;
use numkern::prelude as serial;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTNUMKERN_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

fn runner() -> Kernels {
    Kernels::new().unwrap()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform integer keys over a moderate range.
fn generate_uniform_keys(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..=100_000)).collect()
}

/// Normally distributed keys, clustered around a single bucket region.
fn generate_clustered_keys(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(50_000.0, 500.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Uniform doubles in [0, 1000).
fn generate_doubles(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0.0..1000.0)).collect()
}

/// Random square matrix of the given order.
fn generate_matrix(order: usize, seed: u64) -> SquareMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..order * order)
        .map(|_| rng.random_range(0.0..1000.0))
        .collect();
    SquareMatrix::from_vec(order, data).unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_counting_sort(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("counting_sort_{}", mode_name));
    group.sample_size(30);

    let kernels = runner();
    for size in [100_000, 1_000_000, 5_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let input = generate_uniform_keys(size, 42);
        group.bench_with_input(BenchmarkId::new("uniform", size), &size, |b, _| {
            b.iter(|| {
                if use_parallel {
                    kernels.counting_sort(black_box(&input)).unwrap()
                } else {
                    serial::counting_sort(black_box(&input)).unwrap()
                }
            })
        });

        let input = generate_clustered_keys(size, 42);
        group.bench_with_input(BenchmarkId::new("clustered", size), &size, |b, _| {
            b.iter(|| {
                if use_parallel {
                    kernels.counting_sort(black_box(&input)).unwrap()
                } else {
                    serial::counting_sort(black_box(&input)).unwrap()
                }
            })
        });
    }
    group.finish();
}

fn bench_quicksort(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("quicksort_{}", mode_name));
    group.sample_size(30);

    let kernels = runner();
    for size in [100_000, 1_000_000, 5_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let input = generate_doubles(size, 42);
        group.bench_with_input(BenchmarkId::new("uniform", size), &size, |b, _| {
            b.iter(|| {
                let mut values = input.clone();
                if use_parallel {
                    kernels.quicksort(black_box(&mut values));
                } else {
                    serial::quicksort(black_box(&mut values));
                }
                values
            })
        });
    }
    group.finish();
}

fn bench_quicksort_threshold(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    if !use_parallel {
        return; // The spawn threshold only exists on the parallel path.
    }
    let mut group = c.benchmark_group(format!("quicksort_threshold_{}", mode_name));
    group.sample_size(30);

    let size = 1_000_000;
    let input = generate_doubles(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    for threshold in [100, 1_000, 10_000, 100_000] {
        let kernels = Kernels::builder().threshold(threshold).build().unwrap();
        group.bench_with_input(
            BenchmarkId::new("spawn_threshold", threshold),
            &threshold,
            |b, _| {
                b.iter(|| {
                    let mut values = input.clone();
                    kernels.quicksort(black_box(&mut values));
                    values
                })
            },
        );
    }
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("matmul_{}", mode_name));
    group.sample_size(20);

    let kernels = runner();
    for order in [128, 256, 512] {
        group.throughput(Throughput::Elements((order * order) as u64));

        let a = generate_matrix(order, 42);
        let b_mat = generate_matrix(order, 43);
        group.bench_with_input(BenchmarkId::new("dense", order), &order, |b, _| {
            b.iter(|| {
                if use_parallel {
                    kernels.multiply(black_box(&a), black_box(&b_mat)).unwrap()
                } else {
                    serial::multiply(black_box(&a), black_box(&b_mat)).unwrap()
                }
            })
        });
    }
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(20);

    // Last-element pivots degrade to linear recursion depth on sorted
    // input, so keep these inputs small enough for the thread stack.
    let kernels = runner();
    let size = 20_000;
    group.throughput(Throughput::Elements(size as u64));

    let mut sorted = generate_doubles(size, 42);
    serial::quicksort(&mut sorted);
    let reversed: Vec<f64> = sorted.iter().rev().copied().collect();

    for (name, input) in [("pre_sorted", &sorted), ("reversed", &reversed)] {
        group.bench_with_input(BenchmarkId::new("quicksort", name), &size, |b, _| {
            b.iter(|| {
                let mut values = input.clone();
                if use_parallel {
                    kernels.quicksort(black_box(&mut values));
                } else {
                    serial::quicksort(black_box(&mut values));
                }
                values
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_counting_sort,
    bench_quicksort,
    bench_quicksort_threshold,
    bench_matmul,
    bench_pathological
);
criterion_main!(benches);
