//! Output types for divide-and-conquer operations.
//!
//! ## Purpose
//!
//! This module defines [`DivconqResult`], the combined result of one
//! orchestrator call, together with the metadata describing how it was
//! produced (operation, path taken, worker count, chunk layout).
//!
//! ## Design notes
//!
//! * **Self-describing**: Results carry the path decision so timing harnesses
//!   can report sequential vs. parallel runs without re-deriving them.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `values` has the same length as the input sequence.
//! * `chunks` is empty on the sequential path and covers the input exactly on
//!   the parallel path.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::sorting::SortKernel;
use crate::primitives::chunk::Chunk;

// ============================================================================
// Operation and Path
// ============================================================================

/// Operation performed by an orchestrator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Sort with the given sequential kernel.
    Sort(SortKernel),

    /// Inclusive prefix sum.
    PrefixSum,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Sort(kernel) => write!(f, "sort ({})", kernel.name()),
            Self::PrefixSum => write!(f, "prefix sum"),
        }
    }
}

/// Execution path chosen by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPath {
    /// Kernel applied to the whole sequence on the calling thread.
    #[default]
    Sequential,

    /// Partition, execute over chunks, combine.
    Parallel,
}

impl Display for ExecutionPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Combined output of one divide-and-conquer call.
#[derive(Debug, Clone, PartialEq)]
pub struct DivconqResult<T> {
    /// Sorted values or prefix sums, same length as the input.
    pub values: Vec<T>,

    /// Operation that produced `values`.
    pub mode: Mode,

    /// Path taken by the orchestrator.
    pub path: ExecutionPath,

    /// Worker count resolved for this call.
    pub workers: usize,

    /// Chunk layout used on the parallel path (empty on the sequential path).
    pub chunks: Vec<Chunk>,
}

impl<T> DivconqResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of output values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the output is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check whether the parallel path was taken.
    pub fn is_parallel(&self) -> bool {
        self.path == ExecutionPath::Parallel
    }

    /// Number of chunks processed (0 on the sequential path).
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Consume the result, keeping only the values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Debug> Display for DivconqResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Operation:   {}", self.mode)?;
        writeln!(f, "  Data points: {}", self.values.len())?;
        writeln!(f, "  Path:        {}", self.path)?;
        writeln!(f, "  Workers:     {}", self.workers)?;
        if self.is_parallel() {
            writeln!(f, "  Chunks:      {}", self.chunks.len())?;
        }
        writeln!(f)?;

        writeln!(f, "Values:")?;
        writeln!(f, "{:>8} {:>16}", "Index", "Value")?;
        writeln!(f, "{:-<width$}", "", width = 25)?;

        // Show first 10 and last 10 if more than 20 values
        let n = self.values.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "{:>8} {:>16?}", idx, self.values[idx])?;
        }

        Ok(())
    }
}
