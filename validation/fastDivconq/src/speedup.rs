//! Sequential vs. parallel timing harness.
//!
//! Times each operation over a range of input sizes, once on the calling
//! thread and once on the worker pool, and prints the per-size speedup and
//! the average speedup.
//!
//! Configuration:
//! - `FASTDIVCONQ_MODE`: `merge_sort` (default), `quicksort`, or `prefix_sum`.
//! - `FASTDIVCONQ_TRIALS`: trials per size; the fastest is kept (default 1).
//! - `RUST_LOG`: tracing filter, e.g. `RUST_LOG=fastDivconq=debug`.

use fastDivconq::prelude::*;
use fastDivconq::timing::{SpeedupReport, SpeedupSample, time_call};
use rand::prelude::*;
use std::env;
use std::error::Error;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn get_mode() -> Mode {
    match env::var("FASTDIVCONQ_MODE").ok().as_deref() {
        Some("quicksort") => Mode::Sort(QuickSort),
        Some("prefix_sum") => Mode::PrefixSum,
        Some("merge_sort") | _ => Mode::Sort(MergeSort),
    }
}

fn get_trials() -> usize {
    env::var("FASTDIVCONQ_TRIALS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

/// Five evenly spaced sizes between `lo` and `hi`.
fn sizes(lo: usize, hi: usize) -> Vec<usize> {
    (0..5).map(|i| lo + (hi - lo) * i / 4).collect()
}

/// Random sample of distinct values from `[1, 10 * size)`.
fn generate_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let population = (size as i64) * 10;
    rand::seq::index::sample(&mut rng, population as usize - 1, size)
        .into_iter()
        .map(|i| i as i64 + 1)
        .collect()
}

fn run_once(mode: Mode, data: &[i64], parallel: bool) -> Result<Duration, DivconqError> {
    let timed = match mode {
        Mode::Sort(kernel) => time_call(|| {
            Divconq::new()
                .sort_kernel(kernel)
                .adapter(Sort)
                .parallel(parallel)
                .build()?
                .run(data)
        }),
        Mode::PrefixSum => time_call(|| {
            Divconq::new()
                .adapter(PrefixSum)
                .parallel(parallel)
                .build()?
                .run(data)
        }),
    };

    let result = timed.value?;
    info!(
        len = result.len(),
        path = %result.path,
        workers = result.workers,
        seconds = timed.elapsed.as_secs_f64(),
        "run finished"
    );
    Ok(timed.elapsed)
}

fn best_of(
    trials: usize,
    mode: Mode,
    data: &[i64],
    parallel: bool,
) -> Result<Duration, DivconqError> {
    let mut best = Duration::MAX;
    for _ in 0..trials {
        best = best.min(run_once(mode, data, parallel)?);
    }
    Ok(best)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mode = get_mode();
    let trials = get_trials();
    let sizes = match mode {
        Mode::PrefixSum => sizes(5_000_000, 20_000_000),
        Mode::Sort(_) => sizes(100_000, 1_000_000),
    };

    println!("Operation: {}, {} trial(s) per size", mode, trials);

    let mut report = SpeedupReport::new();
    for (i, &size) in sizes.iter().enumerate() {
        println!("Size of input: {}", size);
        let data = generate_data(size, 42 + i as u64);

        let parallel = best_of(trials, mode, &data, true)?;
        let sequential = best_of(trials, mode, &data, false)?;
        println!(
            "Sequential: {:.4}s, Parallel: {:.4}s",
            sequential.as_secs_f64(),
            parallel.as_secs_f64()
        );

        report.push(SpeedupSample::new(size, sequential, parallel));
    }

    println!();
    print!("{}", report);

    Ok(())
}
