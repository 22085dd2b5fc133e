//! Timing and speedup measurement.
//!
//! ## Purpose
//!
//! This module wraps a call with a wall-clock timer and aggregates
//! sequential/parallel timing pairs into a speedup report.
//!
//! ## Design notes
//!
//! * **Caller-driven**: Nothing here runs a sort or a prefix sum; callers pass
//!   the closure to time, so any execution path can be measured.
//! * **Monotonic clock**: Uses `std::time::Instant`.
//!
//! ## Key concepts
//!
//! * **Speedup**: `sequential / parallel` for one sample. Values above 1 mean
//!   the parallel run was faster.
//! * **Average speedup**: Arithmetic mean of the per-sample speedups.
//!
//! ## Non-goals
//!
//! * This module does not warm up caches or discard outliers.

// External dependencies
use std::fmt::{Display, Formatter, Result};
use std::time::{Duration, Instant};
use std::vec::Vec;

// ============================================================================
// Single Call
// ============================================================================

/// Value returned by a timed call, with its elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<R> {
    /// Value returned by the call.
    pub value: R,

    /// Wall-clock time spent in the call.
    pub elapsed: Duration,
}

impl<R> Timed<R> {
    /// Elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Map the returned value, keeping the elapsed time.
    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

/// Run `f` once and measure its wall-clock time.
pub fn time_call<R>(f: impl FnOnce() -> R) -> Timed<R> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

// ============================================================================
// Speedup Samples
// ============================================================================

/// Sequential and parallel timings for one input size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedupSample {
    /// Input length.
    pub size: usize,

    /// Time taken by the sequential run.
    pub sequential: Duration,

    /// Time taken by the parallel run.
    pub parallel: Duration,
}

impl SpeedupSample {
    /// Create a sample.
    pub fn new(size: usize, sequential: Duration, parallel: Duration) -> Self {
        Self {
            size,
            sequential,
            parallel,
        }
    }

    /// Sequential time divided by parallel time.
    ///
    /// Returns `None` when the parallel time is zero.
    pub fn speedup(&self) -> Option<f64> {
        let parallel = self.parallel.as_secs_f64();
        (parallel > 0.0).then(|| self.sequential.as_secs_f64() / parallel)
    }
}

/// Collection of speedup samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedupReport {
    /// Samples in insertion order.
    pub samples: Vec<SpeedupSample>,
}

impl SpeedupReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample.
    pub fn push(&mut self, sample: SpeedupSample) {
        self.samples.push(sample);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check whether the report has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean speedup over samples with a non-zero parallel time.
    pub fn average_speedup(&self) -> Option<f64> {
        let speedups: Vec<f64> = self
            .samples
            .iter()
            .filter_map(SpeedupSample::speedup)
            .collect();
        if speedups.is_empty() {
            return None;
        }
        Some(speedups.iter().sum::<f64>() / speedups.len() as f64)
    }
}

impl Extend<SpeedupSample> for SpeedupReport {
    fn extend<I: IntoIterator<Item = SpeedupSample>>(&mut self, iter: I) {
        self.samples.extend(iter);
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SpeedupReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(
            f,
            "{:>12} {:>14} {:>14} {:>10}",
            "Size", "Sequential_s", "Parallel_s", "Speedup"
        )?;
        writeln!(f, "{:-<width$}", "", width = 53)?;

        for sample in &self.samples {
            write!(
                f,
                "{:>12} {:>14.6} {:>14.6}",
                sample.size,
                sample.sequential.as_secs_f64(),
                sample.parallel.as_secs_f64()
            )?;
            match sample.speedup() {
                Some(speedup) => writeln!(f, " {:>10.3}", speedup)?,
                None => writeln!(f, " {:>10}", "-")?,
            }
        }

        if let Some(avg) = self.average_speedup() {
            writeln!(f)?;
            writeln!(f, "Average speedup: {:.3}", avg)?;
        }

        Ok(())
    }
}
