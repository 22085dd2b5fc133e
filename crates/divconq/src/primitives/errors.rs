//! Error types for divide-and-conquer operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while partitioning,
//! executing, and combining a sequence, together with the configuration errors
//! raised by the builders before any work is performed.
//!
//! ## Design notes
//!
//! * **Stage-tagged**: Runtime failures report the stage (partition, execute,
//!   combine) that produced them through [`DivconqError::stage`].
//! * **Contextual**: Errors include the offending values (chunk index, global
//!   element index, expected vs. actual lengths).
//! * **Deferred**: Builder errors are stored and surfaced by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for messages.
//!
//! ## Key concepts
//!
//! 1. **Configuration errors**: invalid worker counts, chunk requests larger than
//!    the sequence, unorderable values, duplicated builder parameters.
//! 2. **Worker execution errors**: kernel overflow, worker panics, pool failures.
//! 3. **Invariant violations**: length mismatches and missing partial results.
//!    These indicate a defective execute pass rather than bad user input.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).
//! * This module does not provide retry or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Pipeline Stage
// ============================================================================

/// Stage of the parallel path in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Splitting the sequence into chunks.
    Partition,

    /// Running the sequential kernel over chunks.
    Execute,

    /// Merging or composing partial results.
    Combine,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Partition => write!(f, "partition"),
            Self::Execute => write!(f, "execute"),
            Self::Combine => write!(f, "combine"),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for divide-and-conquer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DivconqError {
    /// Worker count must be at least 1.
    InvalidWorkerCount(usize),

    /// More chunks were requested than there are elements.
    InvalidChunkCount {
        /// Number of chunks requested.
        chunks: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// Input contains a value that cannot take part in the operation
    /// (NaN for sorting, non-finite floats for prefix sums).
    InvalidNumericValue(String),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// The worker pool could not be constructed.
    WorkerPool(String),

    /// A worker panicked while running the kernel over its chunk.
    WorkerPanicked {
        /// Index of the chunk the worker owned.
        chunk: usize,
        /// Panic payload, when it was a string.
        message: String,
    },

    /// A running sum left the representable range.
    Overflow {
        /// Stage that performed the failing addition.
        stage: Stage,
        /// Global index of the element whose sum overflowed.
        index: usize,
    },

    /// A partial or combined result does not have the expected length.
    LengthMismatch {
        /// Stage that detected the mismatch.
        stage: Stage,
        /// Chunk index (0 for whole-sequence checks).
        chunk: usize,
        /// Expected number of elements.
        expected: usize,
        /// Actual number of elements.
        got: usize,
    },

    /// No partial result (or more than one) was produced for a chunk.
    MissingPartial {
        /// Index of the chunk without a unique partial result.
        chunk: usize,
    },

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Sort", "PrefixSum").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl DivconqError {
    /// Stage of the parallel path that produced this error, if any.
    ///
    /// Configuration errors detected before partitioning return `None`.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::InvalidWorkerCount(_) | Self::InvalidChunkCount { .. } => Some(Stage::Partition),
            Self::WorkerPool(_) | Self::WorkerPanicked { .. } => Some(Stage::Execute),
            Self::Overflow { stage, .. } | Self::LengthMismatch { stage, .. } => Some(*stage),
            Self::MissingPartial { .. } => Some(Stage::Combine),
            Self::InvalidNumericValue(_)
            | Self::InvalidInput(_)
            | Self::UnsupportedFeature { .. }
            | Self::DuplicateParameter { .. } => None,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DivconqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidWorkerCount(got) => {
                write!(f, "Invalid worker count: {got} (must be at least 1)")
            }
            Self::InvalidChunkCount { chunks, len } => {
                write!(
                    f,
                    "Invalid chunk count: {chunks} chunks requested for {len} elements"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::WorkerPool(msg) => {
                write!(f, "execute stage failed: could not build worker pool: {msg}")
            }
            Self::WorkerPanicked { chunk, message } => {
                write!(f, "execute stage failed: worker for chunk {chunk} panicked: {message}")
            }
            Self::Overflow { stage, index } => {
                write!(f, "{stage} stage failed: sum overflowed at index {index}")
            }
            Self::LengthMismatch {
                stage,
                chunk,
                expected,
                got,
            } => {
                write!(
                    f,
                    "{stage} stage failed: chunk {chunk} has {got} elements, expected {expected}"
                )
            }
            Self::MissingPartial { chunk } => {
                write!(
                    f,
                    "combine stage failed: no unique partial result for chunk {chunk}"
                )
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DivconqError {}
