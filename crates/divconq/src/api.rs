//! High-level API for divide-and-conquer array processing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the shared parameters (worker count, threshold, sort
//! kernel, merge strategy) and an adapter step that selects the operation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to operation builders.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Sorting needs [`Element`]; prefix sums need [`Accumulate`].
//!
//! ## Key concepts
//!
//! * **Operations**: `Sort` and `PrefixSum`.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Sort)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DivconqBuilder`] via `Divconq::new()`.
//! 2. Chain configuration methods (`.workers()`, `.threshold()`, etc.).
//! 3. Select an operation via `.adapter(Sort)` to get an operation builder.
//! 4. Call `.build()?` and then `.run(&values)?`.

// Internal dependencies
use crate::adapters::prefix_sum::PrefixSumDivconqBuilder;
use crate::adapters::sort::SortDivconqBuilder;
use crate::engine::executor::{CombinePassFn, ExecutePassFn};

// Publicly re-exported types
pub use crate::algorithms::merge::MergeStrategy;
pub use crate::algorithms::sorting::SortKernel;
pub use crate::engine::output::{DivconqResult, ExecutionPath, Mode};
pub use crate::math::numeric::{Accumulate, Element};
pub use crate::primitives::errors::{DivconqError, Stage};

/// Marker types for selecting operations.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{PrefixSum, Sort};
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring divide-and-conquer operations.
#[derive(Debug, Clone)]
pub struct DivconqBuilder<T> {
    /// Number of workers (and chunks on the parallel path).
    pub workers: Option<usize>,

    /// Input length below which the sequential path is taken.
    pub threshold: Option<usize>,

    /// Sequential sort algorithm (Sort only).
    pub sort_kernel: Option<SortKernel>,

    /// k-way merge strategy (Sort only).
    pub merge_strategy: Option<MergeStrategy>,

    // ======================================
    // DEV
    // ======================================
    /// Custom execute pass function.
    #[doc(hidden)]
    pub custom_execute_pass: Option<ExecutePassFn<T>>,

    /// Custom carry composition function (PrefixSum only).
    #[doc(hidden)]
    pub custom_compose_pass: Option<CombinePassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T> Default for DivconqBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DivconqBuilder<T> {
    /// Select an operation to transition to an operation builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: DivconqAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            workers: None,
            threshold: None,
            sort_kernel: None,
            merge_strategy: None,
            custom_execute_pass: None,
            custom_compose_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of workers (must be at least 1).
    pub fn workers(mut self, workers: usize) -> Self {
        if self.workers.is_some() {
            self.duplicate_param = Some("workers");
        }
        self.workers = Some(workers);
        self
    }

    /// Set the input length below which the sequential path is taken.
    pub fn threshold(mut self, threshold: usize) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Set the sequential sort algorithm (Sort only).
    pub fn sort_kernel(mut self, kernel: SortKernel) -> Self {
        if self.sort_kernel.is_some() {
            self.duplicate_param = Some("sort_kernel");
        }
        self.sort_kernel = Some(kernel);
        self
    }

    /// Set the k-way merge strategy (Sort only).
    pub fn merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        if self.merge_strategy.is_some() {
            self.duplicate_param = Some("merge_strategy");
        }
        self.merge_strategy = Some(strategy);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom execute pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_execute_pass(mut self, pass: ExecutePassFn<T>) -> Self {
        self.custom_execute_pass = Some(pass);
        self
    }

    /// Set a custom carry composition function (only for dev)
    #[doc(hidden)]
    pub fn custom_compose_pass(mut self, pass: CombinePassFn<T>) -> Self {
        self.custom_compose_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from a generic builder to an operation builder.
pub trait DivconqAdapter<T> {
    /// The output operation builder.
    type Output;

    /// Convert a generic [`DivconqBuilder`] into an operation builder.
    fn convert(builder: DivconqBuilder<T>) -> Self::Output;
}

/// Marker for divide-and-conquer sorting.
#[derive(Debug, Clone, Copy)]
pub struct Sort;

impl<T: Element> DivconqAdapter<T> for Sort {
    type Output = SortDivconqBuilder<T>;

    fn convert(builder: DivconqBuilder<T>) -> Self::Output {
        let mut result = SortDivconqBuilder::default();

        result.workers = builder.workers;
        if let Some(threshold) = builder.threshold {
            result.threshold = threshold;
        }
        if let Some(kernel) = builder.sort_kernel {
            result.sort_kernel = kernel;
        }
        if let Some(strategy) = builder.merge_strategy {
            result.merge_strategy = strategy;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(ep) = builder.custom_execute_pass {
            result.custom_execute_pass = Some(ep);
        }
        if builder.custom_compose_pass.is_some() {
            result.deferred_error = Some(DivconqError::UnsupportedFeature {
                adapter: "Sort",
                feature: "custom_compose_pass",
            });
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;
        result
    }
}

/// Marker for divide-and-conquer inclusive prefix sums.
#[derive(Debug, Clone, Copy)]
pub struct PrefixSum;

impl<T: Accumulate> DivconqAdapter<T> for PrefixSum {
    type Output = PrefixSumDivconqBuilder<T>;

    fn convert(builder: DivconqBuilder<T>) -> Self::Output {
        let mut result = PrefixSumDivconqBuilder::default();

        result.workers = builder.workers;
        if let Some(threshold) = builder.threshold {
            result.threshold = threshold;
        }

        // Sort-only parameters
        if builder.sort_kernel.is_some() {
            result.deferred_error = Some(DivconqError::UnsupportedFeature {
                adapter: "PrefixSum",
                feature: "sort_kernel",
            });
        } else if builder.merge_strategy.is_some() {
            result.deferred_error = Some(DivconqError::UnsupportedFeature {
                adapter: "PrefixSum",
                feature: "merge_strategy",
            });
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(ep) = builder.custom_execute_pass {
            result.custom_execute_pass = Some(ep);
        }
        if let Some(cp) = builder.custom_compose_pass {
            result.custom_compose_pass = Some(cp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;
        result
    }
}
