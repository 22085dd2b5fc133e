//! Numeric element traits.
//!
//! ## Purpose
//!
//! This module defines the element bounds used by the kernels and combiners:
//! [`Element`] for anything that can be sorted and moved between workers, and
//! [`Accumulate`] for element types that support running sums split across
//! chunks.
//!
//! ## Design notes
//!
//! * **Blanket `Element`**: Any `Copy + PartialOrd` type that is thread-safe
//!   qualifies; no opt-in is needed.
//! * **Checked sums**: Integer sums use `CheckedAdd`; float sums are rejected
//!   once they leave the finite range, so both report overflow the same way.
//! * **Wrapping local sums**: Chunk-local integer sums wrap, which keeps them
//!   exact modulo 2^n whatever the grouping. The true global sums are
//!   recovered and checked by [`Accumulate::checked_rebase`].
//! * **Floats**: Local float sums are plain additions; a local sum that leaves
//!   the finite range is reported as an overflow even if the global one would
//!   not.
//! * **No-std**: Uses `FloatCore`, which does not require `std` or `libm`.
//!
//! ## Invariants
//!
//! * `Accumulate::zero()` is the additive identity.
//! * `checked_accumulate` returns `None` exactly when the sum is not
//!   representable (integers) or not finite (floats).
//! * For integers, `checked_rebase` returns `None` exactly when the next
//!   global prefix sum is not representable, given that `self` is exact.

// External dependencies
use core::fmt::Debug;
use num_traits::float::FloatCore;
use num_traits::{CheckedAdd, WrappingAdd, WrappingSub, Zero};

// ============================================================================
// Element
// ============================================================================

/// Values that can be partitioned, sorted, and handed to worker threads.
pub trait Element: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Check whether this value takes part in the ordering (false for NaN).
    #[inline]
    fn is_orderable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

impl<T> Element for T where T: Copy + PartialOrd + Debug + Send + Sync + 'static {}

// ============================================================================
// Accumulate
// ============================================================================

/// Element types that support running sums split across chunks.
pub trait Accumulate: Element + Zero {
    /// Add `rhs`, returning `None` when the result is not representable.
    fn checked_accumulate(self, rhs: Self) -> Option<Self>;

    /// Add `rhs`, wrapping around at the bounds of the type.
    fn wrapping_accumulate(self, rhs: Self) -> Self;

    /// Advance the global running sum `self` by one element of a chunk.
    ///
    /// `local_prev` and `local` are the chunk's local sums before and after
    /// the element, and `carry` is the total of all preceding chunks.
    /// Returns `None` when the new global sum is not representable.
    fn checked_rebase(self, carry: Self, local_prev: Self, local: Self) -> Option<Self>;

    /// Check whether this value may enter a running sum.
    #[inline]
    fn is_summable(self) -> bool {
        true
    }
}

macro_rules! impl_accumulate_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Accumulate for $t {
                #[inline]
                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }

                #[inline]
                fn wrapping_accumulate(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }

                #[inline]
                fn checked_rebase(self, _carry: Self, local_prev: Self, local: Self) -> Option<Self> {
                    // Exact element, even when the local sums wrapped
                    let value = WrappingSub::wrapping_sub(&local, &local_prev);
                    self.checked_accumulate(value)
                }
            }
        )*
    };
}

macro_rules! impl_accumulate_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Accumulate for $t {
                #[inline]
                fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    FloatCore::is_finite(sum).then_some(sum)
                }

                #[inline]
                fn wrapping_accumulate(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn checked_rebase(self, carry: Self, _local_prev: Self, local: Self) -> Option<Self> {
                    carry.checked_accumulate(local)
                }

                #[inline]
                fn is_summable(self) -> bool {
                    FloatCore::is_finite(self)
                }
            }
        )*
    };
}

impl_accumulate_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_accumulate_float!(f32, f64);
