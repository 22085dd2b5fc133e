//! High-level API for divide-and-conquer processing with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for
//! `fastDivconq`. It extends the `divconq` API with adapters that run chunks
//! on all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `divconq` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution with one worker per
//!   available core.
//! * **Transparent**: Marker types (Sort, PrefixSum) select the parallel builders.
//!
//! ## Key concepts
//!
//! * **Parallel Support**: Uses `rayon` for acceleration.
//! * **Extended Adapters**: Wraps core adapters with parallel implementation logic.
//! * **Feature-Gated**: Parallelism is configurable via the `cpu` feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DivconqBuilder`] via `Divconq::new()`.
//! 2. Chain configuration methods (`.workers()`, `.threshold()`, etc.).
//! 3. Select an operation via `.adapter(Sort)` to get a parallel builder.

// Internal dependencies
use crate::adapters::prefix_sum::ParallelPrefixSumDivconqBuilder;
use crate::adapters::sort::ParallelSortDivconqBuilder;

// Import base marker types for delegation
use divconq::internals::api::PrefixSum as BasePrefixSum;
use divconq::internals::api::Sort as BaseSort;

// Publicly re-exported types
pub use divconq::internals::api::{DivconqAdapter, DivconqBuilder};
pub use divconq::internals::api::{
    Accumulate, DivconqError, DivconqResult, Element, ExecutionPath, MergeStrategy, Mode,
    SortKernel, Stage,
};
pub use divconq::timing::{SpeedupReport, SpeedupSample, Timed, time_call};

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{PrefixSum, Sort};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel divide-and-conquer sorting.
#[derive(Debug, Clone, Copy)]
pub struct Sort;

impl<T: Element> DivconqAdapter<T> for Sort {
    type Output = ParallelSortDivconqBuilder<T>;

    fn convert(builder: DivconqBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastDivconq
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseSort as DivconqAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelSortDivconqBuilder { base }
    }
}

/// Marker for parallel divide-and-conquer prefix sums.
#[derive(Debug, Clone, Copy)]
pub struct PrefixSum;

impl<T: Accumulate> DivconqAdapter<T> for PrefixSum {
    type Output = ParallelPrefixSumDivconqBuilder<T>;

    fn convert(builder: DivconqBuilder<T>) -> Self::Output {
        let parallel = builder.parallel.unwrap_or(true);

        let mut base = <BasePrefixSum as DivconqAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelPrefixSumDivconqBuilder { base }
    }
}
