//! Input validation for divide-and-conquer configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any work is
//! scheduled (worker counts, element values, duplicated builder parameters)
//! and the invariant checks run between the execute and combine stages.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Key concepts
//!
//! * **Configuration checks**: Worker count, orderable values for sorting,
//!   finite values for floating-point prefix sums.
//! * **Invariant checks**: Chunk coverage and partial-result lengths. A
//!   failure here means the execute pass is defective.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::algorithms::partition::covers_exactly;
use crate::math::numeric::{Accumulate, Element};
use crate::primitives::chunk::{Chunk, PartialResult};
use crate::primitives::errors::{DivconqError, Stage};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for divide-and-conquer configuration and data.
///
/// Provides static methods that return `Result<(), DivconqError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the worker count (must be at least 1).
    pub fn validate_workers(workers: usize) -> Result<(), DivconqError> {
        if workers == 0 {
            return Err(DivconqError::InvalidWorkerCount(workers));
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DivconqError> {
        if let Some(parameter) = duplicate_param {
            return Err(DivconqError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate that every value takes part in the ordering (no NaN).
    pub fn validate_orderable<T: Element>(values: &[T]) -> Result<(), DivconqError> {
        for (i, value) in values.iter().enumerate() {
            if !value.is_orderable() {
                return Err(DivconqError::InvalidNumericValue(format!(
                    "values[{i}]={value:?} is not orderable"
                )));
            }
        }
        Ok(())
    }

    /// Validate that every value may enter a running sum (finite floats).
    pub fn validate_summable<T: Accumulate>(values: &[T]) -> Result<(), DivconqError> {
        for (i, &value) in values.iter().enumerate() {
            if !value.is_summable() {
                return Err(DivconqError::InvalidNumericValue(format!(
                    "values[{i}]={value:?} is not finite"
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Stage Invariants
    // ========================================================================

    /// Validate that chunks cover `[0, len)` exactly and in order.
    pub fn validate_partition(chunks: &[Chunk], len: usize) -> Result<(), DivconqError> {
        if !covers_exactly(chunks, len) {
            let covered = chunks.iter().map(|c| c.len).sum();
            return Err(DivconqError::LengthMismatch {
                stage: Stage::Partition,
                chunk: 0,
                expected: len,
                got: covered,
            });
        }
        Ok(())
    }

    /// Validate that a partial result has its chunk's length.
    pub fn validate_partial<T>(partial: &PartialResult<T>) -> Result<(), DivconqError> {
        if partial.len() != partial.chunk.len {
            return Err(DivconqError::LengthMismatch {
                stage: Stage::Execute,
                chunk: partial.chunk.index,
                expected: partial.chunk.len,
                got: partial.len(),
            });
        }
        Ok(())
    }

    /// Validate that the combined output has the input's length.
    pub fn validate_combined(got: usize, expected: usize) -> Result<(), DivconqError> {
        if got != expected {
            return Err(DivconqError::LengthMismatch {
                stage: Stage::Combine,
                chunk: 0,
                expected,
                got,
            });
        }
        Ok(())
    }
}
