//! Prefix-sum kernel and carry composition.
//!
//! ## Purpose
//!
//! This module provides the local (per-chunk) inclusive prefix sum and the
//! composition step that turns per-chunk local sums into the prefix sums of
//! the whole sequence by carrying each chunk's cumulative offset forward.
//!
//! ## Design notes
//!
//! * **Local kernel**: A chunk's sums know nothing about other chunks. They
//!   are computed with [`Accumulate::wrapping_accumulate`], so a local sum
//!   may wrap even when every global prefix fits.
//! * **Carry order**: Carries are produced strictly in chunk index order;
//!   chunk 0 has carry zero and chunk `i` has the total of chunks `0..i`.
//! * **Split composition**: [`chunk_carries`] and [`apply_carry`] let a
//!   parallel caller compute carries in order, then adjust chunks
//!   independently. The result is identical to [`compose_prefix_sums`].
//! * **Overflow detection**: [`apply_carry`] advances the global sum with
//!   [`Accumulate::checked_rebase`], so only an unrepresentable global prefix
//!   is an overflow, reported at its global index.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * `out[i] == values[0] + ... + values[i]` whenever no overflow occurs.
//! * The first overflowing global prefix is reported, however the input was
//!   chunked.
//!
//! ## Non-goals
//!
//! * This module does not reorder partial results (the executor does).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::numeric::Accumulate;
use crate::primitives::chunk::PartialResult;
use crate::primitives::errors::{DivconqError, Stage};

// ============================================================================
// Local Kernel
// ============================================================================

/// Compute the inclusive local prefix sum of `values`.
///
/// Integer sums wrap at the bounds of the type; overflow is only known once
/// the chunk's carry is applied.
pub fn prefix_sum_kernel<T: Accumulate>(values: &[T]) -> Result<Vec<T>, DivconqError> {
    let mut sums = Vec::with_capacity(values.len());

    let mut running = T::zero();
    for &value in values {
        running = running.wrapping_accumulate(value);
        sums.push(running);
    }

    Ok(sums)
}

// ============================================================================
// Composition
// ============================================================================

/// Combine ordered local prefix sums into whole-sequence prefix sums.
///
/// `partials` must already be in chunk index order.
pub fn compose_prefix_sums<T: Accumulate>(
    partials: Vec<PartialResult<T>>,
) -> Result<Vec<T>, DivconqError> {
    let total: usize = partials.iter().map(PartialResult::len).sum();
    let carries = chunk_carries(&partials);

    let mut combined = vec![T::zero(); total];
    let mut offset = 0;
    for (partial, carry) in partials.iter().zip(carries) {
        let end = offset + partial.len();
        apply_carry(&partial.values, carry, partial.chunk.start, &mut combined[offset..end])?;
        offset = end;
    }

    Ok(combined)
}

/// Compute the carry of every chunk, in chunk index order.
///
/// `carries[i]` is the wrapping sum of all elements of chunks `0..i`. It is
/// exact whenever no global prefix before chunk `i` overflows.
pub fn chunk_carries<T: Accumulate>(partials: &[PartialResult<T>]) -> Vec<T> {
    let mut carries = Vec::with_capacity(partials.len());

    let mut carry = T::zero();
    for partial in partials {
        carries.push(carry);
        if let Some(&total) = partial.values.last() {
            carry = carry.wrapping_accumulate(total);
        }
    }

    carries
}

/// Write the global prefix sums of one chunk into `out`.
///
/// `locals` are the chunk's local sums and `start` its global offset, used
/// for overflow reporting. With an exact `carry`, the first error is the
/// first global prefix of the chunk that is not representable.
pub fn apply_carry<T: Accumulate>(
    locals: &[T],
    carry: T,
    start: usize,
    out: &mut [T],
) -> Result<(), DivconqError> {
    debug_assert_eq!(locals.len(), out.len());

    let mut running = carry;
    let mut local_prev = T::zero();
    for (j, (slot, &local)) in out.iter_mut().zip(locals).enumerate() {
        running = running
            .checked_rebase(carry, local_prev, local)
            .ok_or(DivconqError::Overflow {
                stage: Stage::Combine,
                index: start + j,
            })?;
        *slot = running;
        local_prev = local;
    }

    Ok(())
}
