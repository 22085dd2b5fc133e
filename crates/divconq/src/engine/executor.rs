//! Execution engine for divide-and-conquer operations.
//!
//! ## Purpose
//!
//! This module provides the orchestrator: it decides between the sequential
//! and the parallel path, and on the parallel path drives
//! partition → execute → assemble → combine. It is the only component that
//! knows about both the kernel and the combiner of an operation.
//!
//! ## Design notes
//!
//! * **One kernel**: The same kernel function runs on the whole sequence
//!   (sequential path) and on every chunk (parallel path).
//! * **One combiner**: The sequential path is a single chunk covering the
//!   whole input, passed through the same combiner, so both paths check and
//!   report failures the same way.
//! * **Pluggable execute pass**: The core crate runs chunks in order on the
//!   calling thread. Extension crates inject a concurrent execute pass through
//!   `custom_execute_pass`; nothing else changes.
//! * **Order by index**: Partial results are slotted by chunk index before
//!   combination, so an execute pass may finish chunks in any order.
//! * **Fail whole**: Any error from any stage fails the call; no partial
//!   output is combined or returned.
//!
//! ## Key concepts
//!
//! * **Path decision**: Sequential when the input is below the threshold,
//!   when at most one worker is available, or when there are fewer elements
//!   than workers.
//!
//! ## Invariants
//!
//! * The combiner receives exactly one partial result per chunk, in chunk
//!   index order, each with its chunk's length.
//! * Output length equals input length.
//!
//! ## Non-goals
//!
//! * This module does not spawn threads (handled by extension crates).
//! * This module does not validate element values (handled by adapters).
//! * This module does not time out or cancel workers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::partition::partition;
use crate::engine::output::ExecutionPath;
use crate::engine::validator::Validator;
use crate::primitives::chunk::{Chunk, PartialResult};
use crate::primitives::errors::DivconqError;

/// Input length below which the sequential path is always taken.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature of a sequential kernel (sort or local prefix sum).
pub type KernelFn<T> = fn(&[T]) -> Result<Vec<T>, DivconqError>;

/// Signature for custom execute pass function
#[doc(hidden)]
pub type ExecutePassFn<T> = fn(
    &[T],         // values
    &[Chunk],     // chunks, in index order
    KernelFn<T>,  // kernel
    usize,        // workers
) -> Result<Vec<PartialResult<T>>, DivconqError>;

/// Signature of a combine pass (k-way merge or carry composition).
pub type CombinePassFn<T> = fn(Vec<PartialResult<T>>) -> Result<Vec<T>, DivconqError>;

/// Output from divide-and-conquer execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Combined values.
    pub values: Vec<T>,

    /// Path that produced them.
    pub path: ExecutionPath,

    /// Chunk layout used on the parallel path.
    pub chunks: Vec<Chunk>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one orchestrator call.
#[derive(Debug, Clone)]
pub struct DivconqConfig<T> {
    /// Sequential kernel shared by both paths.
    pub kernel: KernelFn<T>,

    /// Combiner for the parallel path.
    pub combine: CombinePassFn<T>,

    /// Number of workers (and chunks on the parallel path).
    pub workers: usize,

    /// Input length below which the sequential path is taken.
    pub threshold: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom execute pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_execute_pass: Option<ExecutePassFn<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrator for divide-and-conquer operations.
#[derive(Debug, Clone)]
pub struct DivconqExecutor<T> {
    /// Sequential kernel.
    pub kernel: KernelFn<T>,

    /// Combiner.
    pub combine: CombinePassFn<T>,

    /// Number of workers.
    pub workers: usize,

    /// Sequential-path threshold.
    pub threshold: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom execute pass function (e.g., for parallel execution).
    #[doc(hidden)]
    pub custom_execute_pass: Option<ExecutePassFn<T>>,
}

impl<T: Copy> DivconqExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create an executor for a kernel and its combiner.
    pub fn new(kernel: KernelFn<T>, combine: CombinePassFn<T>) -> Self {
        Self {
            kernel,
            combine,
            workers: 1,
            threshold: DEFAULT_PARALLEL_THRESHOLD,
            custom_execute_pass: None,
        }
    }

    /// Create an executor from a `DivconqConfig`.
    pub fn from_config(config: &DivconqConfig<T>) -> Self {
        Self::new(config.kernel, config.combine)
            .workers(config.workers)
            .threshold(config.threshold)
            .custom_execute_pass(config.custom_execute_pass)
    }

    /// Set the number of workers.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the sequential-path threshold.
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set a custom execute pass function (e.g., for parallelization).
    #[doc(hidden)]
    pub fn custom_execute_pass(mut self, execute_pass_fn: Option<ExecutePassFn<T>>) -> Self {
        self.custom_execute_pass = execute_pass_fn;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Run a `DivconqConfig` payload over `values`.
    pub fn run_with_config(
        values: &[T],
        config: DivconqConfig<T>,
    ) -> Result<ExecutorOutput<T>, DivconqError> {
        DivconqExecutor::from_config(&config).run(values)
    }

    /// Run the orchestrator over `values`.
    pub fn run(&self, values: &[T]) -> Result<ExecutorOutput<T>, DivconqError> {
        Validator::validate_workers(self.workers)?;

        match Self::decide(values.len(), self.workers, self.threshold) {
            ExecutionPath::Sequential => self.run_sequential(values),
            ExecutionPath::Parallel => self.run_parallel(values),
        }
    }

    /// Choose the execution path for an input of length `len`.
    #[inline]
    pub fn decide(len: usize, workers: usize, threshold: usize) -> ExecutionPath {
        if len < threshold || workers <= 1 || len < workers {
            ExecutionPath::Sequential
        } else {
            ExecutionPath::Parallel
        }
    }

    // ========================================================================
    // Paths
    // ========================================================================

    fn run_sequential(&self, values: &[T]) -> Result<ExecutorOutput<T>, DivconqError> {
        let whole = Chunk::new(0, 0, values.len());
        let partial = run_kernel(values, whole, self.kernel)?;

        let combined = (self.combine)(vec![partial])?;
        Validator::validate_combined(combined.len(), values.len())?;

        Ok(ExecutorOutput {
            values: combined,
            path: ExecutionPath::Sequential,
            chunks: Vec::new(),
        })
    }

    fn run_parallel(&self, values: &[T]) -> Result<ExecutorOutput<T>, DivconqError> {
        let chunks = partition(values.len(), self.workers)?;
        Validator::validate_partition(&chunks, values.len())?;

        let execute = self
            .custom_execute_pass
            .unwrap_or(execute_pass_sequential::<T>);
        let partials = execute(values, &chunks, self.kernel, self.workers)?;
        let ordered = assemble_in_order(partials, &chunks)?;

        let combined = (self.combine)(ordered)?;
        Validator::validate_combined(combined.len(), values.len())?;

        Ok(ExecutorOutput {
            values: combined,
            path: ExecutionPath::Parallel,
            chunks,
        })
    }
}

// ============================================================================
// Execute Pass Helpers
// ============================================================================

/// Run `kernel` over one chunk and tag the output with the chunk.
///
/// The output length is checked against the chunk length.
pub fn run_kernel<T>(
    values: &[T],
    chunk: Chunk,
    kernel: KernelFn<T>,
) -> Result<PartialResult<T>, DivconqError> {
    let output = kernel(chunk.slice(values))?;

    let partial = PartialResult::new(chunk, output);
    Validator::validate_partial(&partial)?;
    Ok(partial)
}

/// Execute pass that runs every chunk in order on the calling thread.
pub fn execute_pass_sequential<T>(
    values: &[T],
    chunks: &[Chunk],
    kernel: KernelFn<T>,
    _workers: usize,
) -> Result<Vec<PartialResult<T>>, DivconqError> {
    chunks
        .iter()
        .map(|&chunk| run_kernel(values, chunk, kernel))
        .collect()
}

/// Slot partial results into chunk index order.
///
/// Fails with `MissingPartial` when a chunk has no result or more than one,
/// and with `LengthMismatch` when a result does not match its chunk.
pub fn assemble_in_order<T>(
    partials: Vec<PartialResult<T>>,
    chunks: &[Chunk],
) -> Result<Vec<PartialResult<T>>, DivconqError> {
    let mut slots: Vec<Option<PartialResult<T>>> = chunks.iter().map(|_| None).collect();

    for partial in partials {
        let index = partial.chunk.index;
        let slot = slots
            .get_mut(index)
            .ok_or(DivconqError::MissingPartial { chunk: index })?;
        if slot.is_some() || partial.chunk != chunks[index] {
            return Err(DivconqError::MissingPartial { chunk: index });
        }
        Validator::validate_partial(&partial)?;
        *slot = Some(partial);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(chunk, slot)| slot.ok_or(DivconqError::MissingPartial { chunk }))
        .collect()
}

/// Default worker count: the host's available parallelism, or 1.
pub fn default_workers() -> usize {
    #[cfg(feature = "std")]
    {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
    #[cfg(not(feature = "std"))]
    {
        1
    }
}
