//! Prefix-sum adapter for divide-and-conquer scans.
//!
//! ## Purpose
//!
//! This module provides the prefix-sum adapter: a validated builder and a
//! one-shot processor computing inclusive prefix sums, either in one pass or
//! as local per-chunk sums composed with carries.
//!
//! ## Design notes
//!
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Composition**: Defaults to sequential carry composition; extension
//!   crates may inject a parallel composition pass with identical results.
//!
//! ## Invariants
//!
//! * `out[i]` is the sum of `values[0..=i]`.
//! * Floating-point input must be finite.
//!
//! ## Non-goals
//!
//! * This adapter does not compute exclusive scans or other operators.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::adapters::sort::resolve_workers;
use crate::algorithms::prefix::{compose_prefix_sums, prefix_sum_kernel};
use crate::engine::executor::{
    CombinePassFn, DEFAULT_PARALLEL_THRESHOLD, DivconqConfig, DivconqExecutor, ExecutePassFn,
};
use crate::engine::output::{DivconqResult, ExecutionPath, Mode};
use crate::engine::validator::Validator;
use crate::math::numeric::Accumulate;
use crate::primitives::errors::DivconqError;

// ============================================================================
// Prefix-Sum Builder
// ============================================================================

/// Builder for the divide-and-conquer prefix-sum processor.
#[derive(Debug, Clone)]
pub struct PrefixSumDivconqBuilder<T> {
    /// Worker count (resolved at build time when unset)
    pub workers: Option<usize>,

    /// Input length below which the sequential path is taken
    pub threshold: usize,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<DivconqError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom execute pass function.
    #[doc(hidden)]
    pub custom_execute_pass: Option<ExecutePassFn<T>>,

    /// Custom carry composition function.
    #[doc(hidden)]
    pub custom_compose_pass: Option<CombinePassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Accumulate> Default for PrefixSumDivconqBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Accumulate> PrefixSumDivconqBuilder<T> {
    /// Create a new prefix-sum builder with default parameters.
    fn new() -> Self {
        Self {
            workers: None,
            threshold: DEFAULT_PARALLEL_THRESHOLD,
            deferred_error: None,
            custom_execute_pass: None,
            custom_compose_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the number of workers.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the input length below which the sequential path is taken.
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom execute pass function.
    #[doc(hidden)]
    pub fn custom_execute_pass(mut self, pass: ExecutePassFn<T>) -> Self {
        self.custom_execute_pass = Some(pass);
        self
    }

    /// Set a custom carry composition function.
    #[doc(hidden)]
    pub fn custom_compose_pass(mut self, pass: CombinePassFn<T>) -> Self {
        self.custom_compose_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the prefix-sum processor.
    pub fn build(self) -> Result<PrefixSumDivconq<T>, DivconqError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        let workers = resolve_workers(self.workers);
        Validator::validate_workers(workers)?;

        Ok(PrefixSumDivconq {
            config: self,
            workers,
        })
    }
}

// ============================================================================
// Prefix-Sum Processor
// ============================================================================

/// Divide-and-conquer prefix-sum processor.
pub struct PrefixSumDivconq<T> {
    config: PrefixSumDivconqBuilder<T>,
    workers: usize,
}

impl<T: Accumulate> PrefixSumDivconq<T> {
    /// Resolved worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Path that `run` will take for an input of length `len`.
    pub fn path_for(&self, len: usize) -> ExecutionPath {
        DivconqExecutor::<T>::decide(len, self.workers, self.config.threshold)
    }

    /// Compute the inclusive prefix sums of `values`.
    pub fn run(self, values: &[T]) -> Result<DivconqResult<T>, DivconqError> {
        Validator::validate_summable(values)?;

        let config = DivconqConfig {
            kernel: prefix_sum_kernel::<T>,
            combine: self
                .config
                .custom_compose_pass
                .unwrap_or(compose_prefix_sums::<T>),
            workers: self.workers,
            threshold: self.config.threshold,
            // ++++++++++++++++++++++++++++++++++++++
            // +               DEV                  +
            // ++++++++++++++++++++++++++++++++++++++
            custom_execute_pass: self.config.custom_execute_pass,
        };

        let output = DivconqExecutor::run_with_config(values, config)?;

        Ok(DivconqResult {
            values: output.values,
            mode: Mode::PrefixSum,
            path: output.path,
            workers: self.workers,
            chunks: output.chunks,
        })
    }

    /// Compute the prefix sums, returning only the values.
    pub fn scan(self, values: &[T]) -> Result<Vec<T>, DivconqError> {
        self.run(values).map(DivconqResult::into_values)
    }
}
