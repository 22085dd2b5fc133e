//! Divide-and-conquer benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (100K to 1M elements for sorting, 1M to 10M for prefix sums)
//! - Worker counts (1 to host parallelism)
//! - Kernels and merge strategies
//! - Input layouts (random, sorted, reversed, few distinct keys)
//!
//! For serial execution, use `FASTDIVCONQ_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTDIVCONQ_BACKEND=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastDivconq::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;
use std::thread;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTDIVCONQ_BACKEND").ok().as_deref() {
        Some("cpu_serial") | Some("serial") => (false, "serial"),
        Some("cpu") | Some("parallel") | _ => (true, "parallel"),
    }
}

fn host_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate distinct-ish random integers in `[1, 10 * size)`.
fn generate_random_ints(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(1, (size as i64) * 10).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate Gaussian floats.
fn generate_normal_floats(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1_000.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate integers drawn from only a handful of values.
fn generate_few_keys(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..8)).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_sort_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("sort_scalability_{}", mode_name));
    group.sample_size(20);

    for size in [100_000, 325_000, 550_000, 775_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate_random_ints(size, 42);

        group.bench_with_input(BenchmarkId::new("merge_sort", size), &size, |b, _| {
            b.iter(|| {
                Divconq::new()
                    .adapter(Sort)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .run(black_box(&data))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_prefix_sum_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("prefix_sum_scalability_{}", mode_name));
    group.sample_size(20);

    for size in [1_000_000, 5_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate_random_ints(size, 7);

        group.bench_with_input(BenchmarkId::new("prefix_sum", size), &size, |b, _| {
            b.iter(|| {
                Divconq::new()
                    .adapter(PrefixSum)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .run(black_box(&data))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_workers(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("workers_{}", mode_name));
    group.sample_size(20);

    let size = 500_000;
    let data = generate_random_ints(size, 42);

    let max = host_workers();
    let mut counts = vec![1, 2, 4, 8, 16];
    counts.retain(|&w| w <= max);

    for workers in counts {
        group.bench_with_input(BenchmarkId::new("sort", workers), &workers, |b, &w| {
            b.iter(|| {
                Divconq::new()
                    .workers(w)
                    .threshold(0)
                    .adapter(Sort)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .run(black_box(&data))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("kernels_{}", mode_name));
    group.sample_size(20);

    let data = generate_normal_floats(500_000, 3);

    for (name, kernel) in [("merge_sort", MergeSort), ("quicksort", QuickSort)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                Divconq::new()
                    .threshold(0)
                    .sort_kernel(kernel)
                    .adapter(Sort)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .run(black_box(&data))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_merge_strategies(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("merge_strategies_{}", mode_name));
    group.sample_size(20);

    let data = generate_random_ints(500_000, 5);

    // Many ways so the heap has something to win
    for workers in [4, 32] {
        for (name, strategy) in [("linear_scan", LinearScan), ("heap", Heap)] {
            group.bench_with_input(BenchmarkId::new(name, workers), &workers, |b, &w| {
                b.iter(|| {
                    Divconq::new()
                        .workers(w)
                        .threshold(0)
                        .merge_strategy(strategy)
                        .adapter(Sort)
                        .parallel(use_parallel)
                        .build()
                        .unwrap()
                        .run(black_box(&data))
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

fn bench_layouts(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("layouts_{}", mode_name));
    group.sample_size(20);

    let size = 500_000;
    let sorted: Vec<i64> = (0..size as i64).collect();
    let reversed: Vec<i64> = sorted.iter().rev().copied().collect();
    let few_keys = generate_few_keys(size, 11);

    for (name, data) in [
        ("sorted", &sorted),
        ("reversed", &reversed),
        ("few_keys", &few_keys),
    ] {
        for (kernel_name, kernel) in [("merge_sort", MergeSort), ("quicksort", QuickSort)] {
            group.bench_function(format!("{}_{}", name, kernel_name), |b| {
                b.iter(|| {
                    Divconq::new()
                        .threshold(0)
                        .sort_kernel(kernel)
                        .adapter(Sort)
                        .parallel(use_parallel)
                        .build()
                        .unwrap()
                        .run(black_box(data))
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sort_scalability,
    bench_prefix_sum_scalability,
    bench_workers,
    bench_kernels,
    bench_merge_strategies,
    bench_layouts,
);

criterion_main!(benches);
