//! Chunk and partial-result types.
//!
//! ## Purpose
//!
//! This module defines the unit of work handed to a worker ([`Chunk`]) and the
//! worker's output ([`PartialResult`]). Both are plain data; the partitioner,
//! executor, and combiner give them meaning.
//!
//! ## Design notes
//!
//! * **Positional**: A chunk knows its own index, so results can be slotted
//!   back into submission order whatever order workers finish in.
//! * **Borrowed input**: A chunk describes a range of the caller's slice; it
//!   never owns element data.
//!
//! ## Invariants
//!
//! * `start + len` never exceeds the length of the sequence it was cut from.
//! * A partial result has exactly `chunk.len` values.
//! * Partial results are not mutated after the kernel produces them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Range;

// ============================================================================
// Chunk
// ============================================================================

/// A contiguous, non-overlapping sub-range of the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Position of this chunk among all chunks (0-based).
    pub index: usize,

    /// Offset of the first element in the input sequence.
    pub start: usize,

    /// Number of elements in the chunk.
    pub len: usize,
}

impl Chunk {
    /// Create a chunk descriptor.
    #[inline]
    pub fn new(index: usize, start: usize, len: usize) -> Self {
        Self { index, start, len }
    }

    /// Index range covered by this chunk.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// One past the last index covered by this chunk.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check whether the chunk covers no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow this chunk's elements from the full sequence.
    #[inline]
    pub fn slice<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        &values[self.range()]
    }
}

// ============================================================================
// Partial Result
// ============================================================================

/// The kernel's output for one chunk, tagged with that chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialResult<T> {
    /// The chunk this result was computed from.
    pub chunk: Chunk,

    /// Kernel output (sorted values or local prefix sums).
    pub values: Vec<T>,
}

impl<T> PartialResult<T> {
    /// Pair kernel output with its chunk.
    #[inline]
    pub fn new(chunk: Chunk, values: Vec<T>) -> Self {
        Self { chunk, values }
    }

    /// Number of values in the result.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the result holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
