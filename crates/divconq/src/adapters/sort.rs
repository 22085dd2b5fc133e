//! Sort adapter for divide-and-conquer sorting.
//!
//! ## Purpose
//!
//! This module provides the sorting adapter: a validated builder and a
//! one-shot processor that sorts a sequence on the sequential path, or
//! sorts chunks independently and k-way merges them on the parallel path.
//!
//! ## Design notes
//!
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Kernel choice**: Merge sort (default) or quicksort, per [`SortKernel`].
//! * **Merge choice**: Linear scan or heap, per [`MergeStrategy`].
//!
//! ## Invariants
//!
//! * Output is a non-decreasing permutation of the input.
//! * Input must not contain unorderable values (NaN).
//!
//! ## Non-goals
//!
//! * This adapter does not guarantee a stable sort.
//! * This adapter does not spawn threads (see the parallel extension).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::merge::MergeStrategy;
use crate::algorithms::sorting::SortKernel;
use crate::engine::executor::{
    DEFAULT_PARALLEL_THRESHOLD, DivconqConfig, DivconqExecutor, ExecutePassFn, default_workers,
};
use crate::engine::output::{DivconqResult, ExecutionPath, Mode};
use crate::engine::validator::Validator;
use crate::math::numeric::Element;
use crate::primitives::errors::DivconqError;

// ============================================================================
// Sort Builder
// ============================================================================

/// Builder for the divide-and-conquer sort processor.
#[derive(Debug, Clone)]
pub struct SortDivconqBuilder<T> {
    /// Worker count (resolved at build time when unset)
    pub workers: Option<usize>,

    /// Input length below which the sequential path is taken
    pub threshold: usize,

    /// Sequential sort algorithm
    pub sort_kernel: SortKernel,

    /// k-way merge strategy
    pub merge_strategy: MergeStrategy,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<DivconqError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom execute pass function.
    #[doc(hidden)]
    pub custom_execute_pass: Option<ExecutePassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Element> Default for SortDivconqBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> SortDivconqBuilder<T> {
    /// Create a new sort builder with default parameters.
    fn new() -> Self {
        Self {
            workers: None,
            threshold: DEFAULT_PARALLEL_THRESHOLD,
            sort_kernel: SortKernel::default(),
            merge_strategy: MergeStrategy::default(),
            deferred_error: None,
            custom_execute_pass: None,
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

    // ========================================================================
    // Sort-Specific Setters
    // ========================================================================

    /// Set the sequential sort algorithm.
    pub fn sort_kernel(mut self, kernel: SortKernel) -> Self {
        self.sort_kernel = kernel;
        self
    }

    /// Set the k-way merge strategy.
    pub fn merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
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

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the sort processor.
    pub fn build(self) -> Result<SortDivconq<T>, DivconqError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Resolve and validate worker count
        let workers = resolve_workers(self.workers);
        Validator::validate_workers(workers)?;

        Ok(SortDivconq {
            config: self,
            workers,
        })
    }
}

/// Explicit worker count, else the host's available parallelism.
pub(crate) fn resolve_workers(workers: Option<usize>) -> usize {
    workers.unwrap_or_else(default_workers)
}

// ============================================================================
// Sort Processor
// ============================================================================

/// Divide-and-conquer sort processor.
pub struct SortDivconq<T> {
    config: SortDivconqBuilder<T>,
    workers: usize,
}

impl<T: Element> SortDivconq<T> {
    /// Resolved worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Path that `run` will take for an input of length `len`.
    pub fn path_for(&self, len: usize) -> ExecutionPath {
        DivconqExecutor::<T>::decide(len, self.workers, self.config.threshold)
    }

    /// Sort `values`.
    pub fn run(self, values: &[T]) -> Result<DivconqResult<T>, DivconqError> {
        Validator::validate_orderable(values)?;

        let kernel = self.config.sort_kernel;
        let config = DivconqConfig {
            kernel: kernel.kernel_fn::<T>(),
            combine: self.config.merge_strategy.combine_fn::<T>(),
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
            mode: Mode::Sort(kernel),
            path: output.path,
            workers: self.workers,
            chunks: output.chunks,
        })
    }

    /// Sort `values`, returning only the sorted vector.
    pub fn sort(self, values: &[T]) -> Result<Vec<T>, DivconqError> {
        self.run(values).map(DivconqResult::into_values)
    }
}
