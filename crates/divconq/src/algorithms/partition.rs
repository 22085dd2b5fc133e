//! Chunk partitioning.
//!
//! ## Purpose
//!
//! This module splits an index range `[0, len)` into contiguous, near-equal
//! chunks, one per worker.
//!
//! ## Design notes
//!
//! * **Sizing**: Every chunk has `len / workers` elements except the last,
//!   which also absorbs the remainder.
//! * **Index-only**: Partitioning works on lengths, not on element data, so
//!   the same layout can be reused for any sequence of that length.
//!
//! ## Invariants
//!
//! * Chunks are ordered, disjoint, and their ranges concatenate to `[0, len)`.
//! * The number of chunks equals the worker count.
//! * Every chunk is non-empty (guaranteed by `workers <= len`).
//!
//! ## Non-goals
//!
//! * This module does not decide whether partitioning is worthwhile
//!   (see the executor's path decision).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::chunk::Chunk;
use crate::primitives::errors::DivconqError;

/// Split `[0, len)` into `workers` contiguous chunks.
///
/// # Errors
///
/// * `InvalidWorkerCount` when `workers == 0`.
/// * `InvalidChunkCount` when `workers > len`.
pub fn partition(len: usize, workers: usize) -> Result<Vec<Chunk>, DivconqError> {
    if workers == 0 {
        return Err(DivconqError::InvalidWorkerCount(workers));
    }
    if workers > len {
        return Err(DivconqError::InvalidChunkCount {
            chunks: workers,
            len,
        });
    }

    let size = len / workers;
    let mut chunks = Vec::with_capacity(workers);
    for index in 0..workers - 1 {
        chunks.push(Chunk::new(index, index * size, size));
    }

    // Last chunk takes the remainder
    let last_start = size * (workers - 1);
    chunks.push(Chunk::new(workers - 1, last_start, len - last_start));

    debug_assert_eq!(chunks.iter().map(|c| c.len).sum::<usize>(), len);
    Ok(chunks)
}

/// Check that `chunks` are ordered, contiguous, and cover exactly `[0, len)`.
pub fn covers_exactly(chunks: &[Chunk], len: usize) -> bool {
    let mut expected_start = 0;
    for (i, chunk) in chunks.iter().enumerate() {
        if chunk.index != i || chunk.start != expected_start {
            return false;
        }
        expected_start = chunk.end();
    }
    expected_start == len
}
