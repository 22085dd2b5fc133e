//! Sequential sort kernels.
//!
//! ## Purpose
//!
//! This module provides the single-threaded sorts that run on the whole
//! sequence (sequential path) or on one chunk inside a worker (parallel path).
//! The same function serves both paths.
//!
//! ## Design notes
//!
//! * **Merge sort**: Top-down, recursive, one scratch buffer allocated per call.
//!   Already-ordered halves skip the merge step.
//! * **Presorted input**: Both kernels return an already ordered input as is.
//! * **Quicksort**: Middle-element pivot with a three-way split
//!   (`< pivot`, `== pivot`, `> pivot`). Recurses into the smaller side and
//!   loops on the larger one, so stack depth stays logarithmic.
//! * **Stability**: Not required and not guaranteed by quicksort.
//!
//! ## Invariants
//!
//! * Output is a non-decreasing permutation of the input.
//! * Sequences of length 0 or 1 are returned unchanged.
//! * Inputs are assumed free of unorderable values (validated upstream).
//!
//! ## Non-goals
//!
//! * This module does not split work across threads.
//! * This module does not validate its input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem;

// Internal dependencies
use crate::math::numeric::Element;
use crate::primitives::errors::DivconqError;

// ============================================================================
// Kernel Selection
// ============================================================================

/// Sequential sort algorithm used by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKernel {
    /// Top-down merge sort.
    #[default]
    MergeSort,

    /// Three-way quicksort with a middle pivot.
    QuickSort,
}

impl SortKernel {
    /// Kernel function implementing this algorithm.
    pub fn kernel_fn<T: Element>(self) -> fn(&[T]) -> Result<Vec<T>, DivconqError> {
        match self {
            Self::MergeSort => merge_sort_kernel::<T>,
            Self::QuickSort => quick_sort_kernel::<T>,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::MergeSort => "merge sort",
            Self::QuickSort => "quicksort",
        }
    }
}

/// Merge sort with the kernel signature.
pub fn merge_sort_kernel<T: Element>(values: &[T]) -> Result<Vec<T>, DivconqError> {
    Ok(merge_sort(values))
}

/// Quicksort with the kernel signature.
pub fn quick_sort_kernel<T: Element>(values: &[T]) -> Result<Vec<T>, DivconqError> {
    Ok(quick_sort(values))
}

// ============================================================================
// Merge Sort
// ============================================================================

/// Sort a copy of `values` with top-down merge sort.
pub fn merge_sort<T: Element>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    if is_sorted(&sorted) {
        return sorted;
    }

    let mut scratch = sorted.clone();
    merge_sort_in_place(&mut sorted, &mut scratch);
    sorted
}

fn merge_sort_in_place<T: Element>(values: &mut [T], scratch: &mut [T]) {
    let n = values.len();
    if n <= 1 {
        return;
    }

    let mid = n / 2;
    {
        let (left, right) = values.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        merge_sort_in_place(left, scratch_left);
        merge_sort_in_place(right, scratch_right);
    }

    // Halves already in order
    if values[mid - 1] <= values[mid] {
        return;
    }

    scratch.copy_from_slice(values);
    let (left, right) = scratch.split_at(mid);
    merge_two(left, right, values);
}

/// Merge two sorted runs into `out`.
///
/// `out.len()` must equal `left.len() + right.len()`. Ties take from `left`.
pub fn merge_two<T: PartialOrd + Copy>(left: &[T], right: &[T], out: &mut [T]) {
    debug_assert_eq!(out.len(), left.len() + right.len());

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            out[k] = right[j];
            j += 1;
        } else {
            out[k] = left[i];
            i += 1;
        }
        k += 1;
    }

    let left_rest = left.len() - i;
    out[k..k + left_rest].copy_from_slice(&left[i..]);
    out[k + left_rest..].copy_from_slice(&right[j..]);
}

// ============================================================================
// Quicksort
// ============================================================================

/// Sort a copy of `values` with three-way quicksort.
pub fn quick_sort<T: Element>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    if is_sorted(&sorted) {
        return sorted;
    }
    quick_sort_in_place(&mut sorted);
    sorted
}

fn quick_sort_in_place<T: Element>(mut values: &mut [T]) {
    while values.len() > 1 {
        let pivot = values[values.len() / 2];
        let (lt, gt) = partition_three_way(values, pivot);

        let slice = mem::take(&mut values);
        let (left, rest) = slice.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);

        // Recurse on the smaller side, loop on the larger
        if left.len() < right.len() {
            quick_sort_in_place(left);
            values = right;
        } else {
            quick_sort_in_place(right);
            values = left;
        }
    }
}

/// Rearrange `values` into `< pivot`, `== pivot`, `> pivot` runs.
///
/// Returns `(lt, gt)` such that `values[..lt] < pivot`,
/// `values[lt..gt] == pivot`, and `values[gt..] > pivot`.
fn partition_three_way<T: Element>(values: &mut [T], pivot: T) -> (usize, usize) {
    let (mut lt, mut i, mut gt) = (0, 0, values.len());

    while i < gt {
        if values[i] < pivot {
            values.swap(lt, i);
            lt += 1;
            i += 1;
        } else if values[i] > pivot {
            gt -= 1;
            values.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

/// Check if a slice is sorted in non-decreasing order.
#[inline]
pub fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
