//! Sort adapter for parallel divide-and-conquer sorting.
//!
//! ## Purpose
//!
//! This module provides the sort adapter with parallel execution: chunks are
//! sorted on a per-call rayon pool and k-way merged on the calling thread.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation, path decision, and combination are done by
//!   the `divconq` sort processor.
//! * **Parallelism**: Injects the rayon execute pass (fastDivconq extension).
//! * **Pool scope**: A pool is only built when the parallel path is taken.
//!
//! ## Invariants
//!
//! * Output equals the sequential sort of the same input.
//!
//! ## Non-goals
//!
//! * This adapter does not guarantee a stable sort.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::execute_pass_parallel;
#[cfg(feature = "cpu")]
use crate::engine::pool::WorkerPool;
#[cfg(feature = "cpu")]
use divconq::internals::engine::output::ExecutionPath;

// External dependencies
use std::result::Result;
use tracing::debug;

// Export dependencies from divconq crate
use divconq::internals::adapters::sort::SortDivconqBuilder;
use divconq::internals::algorithms::merge::MergeStrategy;
use divconq::internals::algorithms::sorting::SortKernel;
use divconq::internals::engine::output::DivconqResult;
use divconq::internals::math::numeric::Element;
use divconq::internals::primitives::errors::DivconqError;

// Internal dependencies
use crate::input::DivconqInput;

// ============================================================================
// Extended Sort Builder
// ============================================================================

/// Builder for the sort processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelSortDivconqBuilder<T> {
    /// Base builder from the divconq crate
    pub base: SortDivconqBuilder<T>,
}

impl<T: Element> Default for ParallelSortDivconqBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> ParallelSortDivconqBuilder<T> {
    /// Create a new sort builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from divconq SortDivconqBuilder
    /// * parallel: true (fastDivconq extension)
    fn new() -> Self {
        let base = SortDivconqBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the number of workers.
    pub fn workers(mut self, workers: usize) -> Self {
        self.base = self.base.workers(workers);
        self
    }

    /// Set the input length below which the sequential path is taken.
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.base = self.base.threshold(threshold);
        self
    }

    // ========================================================================
    // Sort-Specific Setters
    // ========================================================================

    /// Set the sequential sort algorithm.
    pub fn sort_kernel(mut self, kernel: SortKernel) -> Self {
        self.base = self.base.sort_kernel(kernel);
        self
    }

    /// Set the k-way merge strategy.
    pub fn merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.base = self.base.merge_strategy(strategy);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the sort processor.
    pub fn build(self) -> Result<ParallelSortDivconq<T>, DivconqError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base processor
        let _ = self.base.clone().build()?;

        Ok(ParallelSortDivconq { config: self })
    }
}

// ============================================================================
// Extended Sort Processor
// ============================================================================

/// Sort processor with parallel support.
pub struct ParallelSortDivconq<T> {
    config: ParallelSortDivconqBuilder<T>,
}

impl<T: Element> ParallelSortDivconq<T> {
    /// Sort the provided data.
    pub fn run<I>(self, input: &I) -> Result<DivconqResult<T>, DivconqError>
    where
        I: DivconqInput<T> + ?Sized,
    {
        let values = input.as_divconq_slice()?;

        // Configure the base builder with the parallel pass if enabled
        let mut builder = self.config.base;
        let parallel = cfg!(feature = "cpu") && builder.parallel.unwrap_or(true);
        #[cfg(feature = "cpu")]
        {
            if parallel {
                builder = builder.custom_execute_pass(execute_pass_parallel);
            } else {
                builder.custom_execute_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to in-order chunks if cpu feature is disabled
            builder.custom_execute_pass = None;
        }

        let processor = builder.build()?;
        let path = processor.path_for(values.len());
        debug!(
            len = values.len(),
            workers = processor.workers(),
            %path,
            parallel,
            "dispatching sort"
        );

        // Scope a pool to this call when chunks run concurrently
        #[cfg(feature = "cpu")]
        {
            if parallel && path == ExecutionPath::Parallel {
                let pool = WorkerPool::new(processor.workers())?;
                return pool.install(|| processor.run(values));
            }
        }

        processor.run(values)
    }

    /// Sort the provided data, returning only the sorted vector.
    pub fn sort<I>(self, input: &I) -> Result<Vec<T>, DivconqError>
    where
        I: DivconqInput<T> + ?Sized,
    {
        self.run(input).map(DivconqResult::into_values)
    }
}
