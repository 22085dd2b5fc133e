//! Parallel execution engine for divide-and-conquer operations.
//!
//! ## Purpose
//!
//! This module provides the parallel execute pass and the parallel carry
//! composition that are injected into the `divconq` crate's orchestrator.
//! Every chunk is processed by its own rayon task; results come back in
//! chunk index order whatever order the tasks finish in.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements for the sequential execute and
//!   compose passes, with the same signatures.
//! * **Parallelism**: Uses `rayon` indexed parallel iterators; the calling
//!   thread blocks until every task finished, or until a failure stopped the
//!   pass.
//! * **Short-circuit**: The execute pass collects into a `Result`, so rayon
//!   stops handing out chunks once one fails.
//! * **Panics**: A panicking kernel is caught and reported as
//!   `WorkerPanicked` for its chunk instead of unwinding through the pool.
//!
//! ## Key concepts
//!
//! * **Order preservation**: Collecting an indexed parallel iterator keeps
//!   positions, so partial results are in submission order.
//! * **Carries**: Computed sequentially in chunk order, then applied to every
//!   chunk concurrently.
//!
//! ## Invariants
//!
//! * Output of both passes is identical to the sequential passes.
//! * When several chunks fail in the execute pass, the error of one of them
//!   is reported, not necessarily the lowest chunk index.
//! * The compose pass reports the first overflowing global index, exactly as
//!   the sequential composition does.
//!
//! ## Non-goals
//!
//! * This module does not build thread pools (see `engine::pool`).
//! * This module does not decide between sequential and parallel paths.

// External dependencies
use rayon::prelude::*;
use std::any::Any;
use std::mem;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{instrument, trace, warn};

// Export dependencies from divconq crate
use divconq::internals::algorithms::prefix::{apply_carry, chunk_carries};
use divconq::internals::engine::executor::{KernelFn, run_kernel};
use divconq::internals::math::numeric::{Accumulate, Element};
use divconq::internals::primitives::chunk::{Chunk, PartialResult};
use divconq::internals::primitives::errors::DivconqError;

// ============================================================================
// Parallel Execute Pass
// ============================================================================

/// Run `kernel` over every chunk in parallel.
#[instrument(
    level = "debug",
    skip_all,
    fields(len = values.len(), chunks = chunks.len(), workers = workers)
)]
pub fn execute_pass_parallel<T: Element>(
    values: &[T],
    chunks: &[Chunk],
    kernel: KernelFn<T>,
    workers: usize,
) -> Result<Vec<PartialResult<T>>, DivconqError> {
    chunks
        .par_iter()
        .map(|&chunk| run_chunk(values, chunk, kernel))
        .collect()
}

/// Run the kernel over one chunk, converting a panic into an error.
fn run_chunk<T>(
    values: &[T],
    chunk: Chunk,
    kernel: KernelFn<T>,
) -> Result<PartialResult<T>, DivconqError> {
    trace!(
        chunk = chunk.index,
        start = chunk.start,
        len = chunk.len,
        "running kernel"
    );

    match catch_unwind(AssertUnwindSafe(|| run_kernel(values, chunk, kernel))) {
        Ok(Ok(partial)) => Ok(partial),
        Ok(Err(err)) => {
            warn!(chunk = chunk.index, error = %err, "kernel failed");
            Err(err)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(chunk = chunk.index, %message, "worker panicked");
            Err(DivconqError::WorkerPanicked {
                chunk: chunk.index,
                message,
            })
        }
    }
}

/// Extract a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

// ============================================================================
// Parallel Compose Pass
// ============================================================================

/// Compose ordered local prefix sums, applying carries to chunks in parallel.
pub fn compose_pass_parallel<T: Accumulate>(
    partials: Vec<PartialResult<T>>,
) -> Result<Vec<T>, DivconqError> {
    let total: usize = partials.iter().map(PartialResult::len).sum();
    let carries = chunk_carries(&partials);

    let mut combined = vec![T::zero(); total];
    {
        // One disjoint output slice per chunk
        let mut outputs: Vec<&mut [T]> = Vec::with_capacity(partials.len());
        let mut rest = combined.as_mut_slice();
        for partial in &partials {
            let (head, tail) = mem::take(&mut rest).split_at_mut(partial.len());
            outputs.push(head);
            rest = tail;
        }

        let results: Vec<Result<(), DivconqError>> = outputs
            .into_par_iter()
            .zip(partials.par_iter())
            .zip(carries.par_iter())
            .map(|((out, partial), &carry)| {
                apply_carry(&partial.values, carry, partial.chunk.start, out)
            })
            .collect();

        // Carries after an overflow are not exact; only the first failure counts
        results.into_iter().collect::<Result<(), DivconqError>>()?;
    }

    Ok(combined)
}
