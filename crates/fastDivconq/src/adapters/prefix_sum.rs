//! Prefix-sum adapter for parallel divide-and-conquer scans.
//!
//! ## Purpose
//!
//! This module provides the prefix-sum adapter with parallel execution: local
//! prefix sums are computed per chunk on a per-call rayon pool, and carries
//! are applied to chunks concurrently.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and path decision are done by the `divconq`
//!   prefix-sum processor.
//! * **Parallelism**: Injects the rayon execute and compose passes.
//!
//! ## Invariants
//!
//! * Output equals the sequential prefix sum of the same input.
//! * Overflow is reported at the first overflowing index, as sequentially.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{compose_pass_parallel, execute_pass_parallel};
#[cfg(feature = "cpu")]
use crate::engine::pool::WorkerPool;
#[cfg(feature = "cpu")]
use divconq::internals::engine::output::ExecutionPath;

// External dependencies
use std::result::Result;
use tracing::debug;

// Export dependencies from divconq crate
use divconq::internals::adapters::prefix_sum::PrefixSumDivconqBuilder;
use divconq::internals::engine::output::DivconqResult;
use divconq::internals::math::numeric::Accumulate;
use divconq::internals::primitives::errors::DivconqError;

// Internal dependencies
use crate::input::DivconqInput;

// ============================================================================
// Extended Prefix-Sum Builder
// ============================================================================

/// Builder for the prefix-sum processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelPrefixSumDivconqBuilder<T> {
    /// Base builder from the divconq crate
    pub base: PrefixSumDivconqBuilder<T>,
}

impl<T: Accumulate> Default for ParallelPrefixSumDivconqBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Accumulate> ParallelPrefixSumDivconqBuilder<T> {
    /// Create a new prefix-sum builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from divconq PrefixSumDivconqBuilder
    /// * parallel: true (fastDivconq extension)
    fn new() -> Self {
        let base = PrefixSumDivconqBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

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

    /// Build the prefix-sum processor.
    pub fn build(self) -> Result<ParallelPrefixSumDivconq<T>, DivconqError> {
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        let _ = self.base.clone().build()?;

        Ok(ParallelPrefixSumDivconq { config: self })
    }
}

// ============================================================================
// Extended Prefix-Sum Processor
// ============================================================================

/// Prefix-sum processor with parallel support.
pub struct ParallelPrefixSumDivconq<T> {
    config: ParallelPrefixSumDivconqBuilder<T>,
}

impl<T: Accumulate> ParallelPrefixSumDivconq<T> {
    /// Compute the inclusive prefix sums of the provided data.
    pub fn run<I>(self, input: &I) -> Result<DivconqResult<T>, DivconqError>
    where
        I: DivconqInput<T> + ?Sized,
    {
        let values = input.as_divconq_slice()?;

        let mut builder = self.config.base;
        let parallel = cfg!(feature = "cpu") && builder.parallel.unwrap_or(true);
        #[cfg(feature = "cpu")]
        {
            if parallel {
                builder = builder
                    .custom_execute_pass(execute_pass_parallel)
                    .custom_compose_pass(compose_pass_parallel);
            } else {
                builder.custom_execute_pass = None;
                builder.custom_compose_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            builder.custom_execute_pass = None;
            builder.custom_compose_pass = None;
        }

        let processor = builder.build()?;
        let path = processor.path_for(values.len());
        debug!(
            len = values.len(),
            workers = processor.workers(),
            %path,
            parallel,
            "dispatching prefix sum"
        );

        #[cfg(feature = "cpu")]
        {
            if parallel && path == ExecutionPath::Parallel {
                let pool = WorkerPool::new(processor.workers())?;
                return pool.install(|| processor.run(values));
            }
        }

        processor.run(values)
    }

    /// Compute the prefix sums, returning only the values.
    pub fn scan<I>(self, input: &I) -> Result<Vec<T>, DivconqError>
    where
        I: DivconqInput<T> + ?Sized,
    {
        self.run(input).map(DivconqResult::into_values)
    }
}
