//! k-way merge of sorted partial results.
//!
//! ## Purpose
//!
//! This module merges the sorted outputs of all chunks into one sorted
//! sequence by repeatedly taking a minimum among the unconsumed heads.
//!
//! ## Design notes
//!
//! * **Linear scan**: Compares every head on each step, O(N·W). Cheapest for
//!   a handful of chunks. The first minimum found wins ties.
//! * **Heap**: Keeps one entry per chunk in a binary min-heap, O(N log W).
//!   Ties are broken by the lower chunk index.
//! * **Auto**: Linear scan up to [`LINEAR_SCAN_MAX_WAYS`] chunks, heap above.
//! * **Ties**: Any correct minimum may be chosen; stability is not promised.
//! * **Single run**: One partial result (the sequential path) is returned as
//!   is, without copying.
//!
//! ## Invariants
//!
//! * Output length equals the sum of the input lengths.
//! * Output is non-decreasing when every input is non-decreasing.
//!
//! ## Non-goals
//!
//! * This module does not check that its inputs are sorted.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BinaryHeap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BinaryHeap;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::{Ordering, Reverse};

// Internal dependencies
use crate::math::numeric::Element;
use crate::primitives::chunk::PartialResult;
use crate::primitives::errors::DivconqError;

/// Largest number of runs merged by linear scan under [`MergeStrategy::Auto`].
pub const LINEAR_SCAN_MAX_WAYS: usize = 8;

// ============================================================================
// Strategy
// ============================================================================

/// Head-selection strategy for the k-way merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Pick linear scan or heap from the number of runs.
    #[default]
    Auto,

    /// Scan all heads on every step.
    LinearScan,

    /// Binary min-heap of heads.
    Heap,
}

impl MergeStrategy {
    /// Resolve `Auto` for a merge of `ways` runs.
    #[inline]
    pub fn resolve(self, ways: usize) -> Self {
        match self {
            Self::Auto if ways <= LINEAR_SCAN_MAX_WAYS => Self::LinearScan,
            Self::Auto => Self::Heap,
            other => other,
        }
    }

    /// Combine function implementing this strategy.
    pub fn combine_fn<T: Element>(
        self,
    ) -> fn(Vec<PartialResult<T>>) -> Result<Vec<T>, DivconqError> {
        match self {
            Self::Auto => merge_partials_auto::<T>,
            Self::LinearScan => merge_partials_linear::<T>,
            Self::Heap => merge_partials_heap::<T>,
        }
    }
}

// ============================================================================
// Combine Entry Points
// ============================================================================

/// Merge partial results, choosing the strategy from their count.
pub fn merge_partials_auto<T: Element>(
    partials: Vec<PartialResult<T>>,
) -> Result<Vec<T>, DivconqError> {
    match MergeStrategy::Auto.resolve(partials.len()) {
        MergeStrategy::Heap => merge_partials_heap(partials),
        _ => merge_partials_linear(partials),
    }
}

/// Merge partial results by linear head scan.
pub fn merge_partials_linear<T: Element>(
    mut partials: Vec<PartialResult<T>>,
) -> Result<Vec<T>, DivconqError> {
    if partials.len() == 1 {
        return Ok(partials.pop().map(|p| p.values).unwrap_or_default());
    }

    let runs: Vec<&[T]> = partials.iter().map(|p| p.values.as_slice()).collect();
    Ok(merge_linear(&runs))
}

/// Merge partial results with a binary heap of heads.
pub fn merge_partials_heap<T: Element>(
    mut partials: Vec<PartialResult<T>>,
) -> Result<Vec<T>, DivconqError> {
    if partials.len() == 1 {
        return Ok(partials.pop().map(|p| p.values).unwrap_or_default());
    }

    let runs: Vec<&[T]> = partials.iter().map(|p| p.values.as_slice()).collect();
    Ok(merge_heap(&runs))
}

// ============================================================================
// Linear Scan
// ============================================================================

/// Merge sorted runs by scanning every head on each step.
pub fn merge_linear<T: Element>(runs: &[&[T]]) -> Vec<T> {
    let total: usize = runs.iter().map(|r| r.len()).sum();
    let mut merged = Vec::with_capacity(total);
    let mut cursors = vec![0usize; runs.len()];

    loop {
        let mut min: Option<(usize, T)> = None;
        for (run_idx, run) in runs.iter().enumerate() {
            let Some(&head) = run.get(cursors[run_idx]) else {
                continue;
            };
            match min {
                Some((_, current)) if !(head < current) => {}
                _ => min = Some((run_idx, head)),
            }
        }

        let Some((run_idx, value)) = min else {
            break;
        };
        merged.push(value);
        cursors[run_idx] += 1;
    }

    debug_assert_eq!(merged.len(), total);
    merged
}

// ============================================================================
// Heap
// ============================================================================

/// Heap entry: the head value of one run and where it came from.
struct Head<T> {
    value: T,
    run: usize,
}

impl<T: PartialOrd> PartialEq for Head<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: PartialOrd> Eq for Head<T> {}

impl<T: PartialOrd> PartialOrd for Head<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> Ord for Head<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Unorderable values are rejected before merging
        self.value
            .partial_cmp(&other.value)
            .unwrap_or(Ordering::Equal)
            .then(self.run.cmp(&other.run))
    }
}

/// Merge sorted runs with a binary min-heap of heads.
pub fn merge_heap<T: Element>(runs: &[&[T]]) -> Vec<T> {
    let total: usize = runs.iter().map(|r| r.len()).sum();
    let mut merged = Vec::with_capacity(total);
    let mut cursors = vec![0usize; runs.len()];

    let mut heap: BinaryHeap<Reverse<Head<T>>> = BinaryHeap::with_capacity(runs.len());
    for (run, values) in runs.iter().enumerate() {
        if let Some(&value) = values.first() {
            heap.push(Reverse(Head { value, run }));
            cursors[run] = 1;
        }
    }

    while let Some(Reverse(Head { value, run })) = heap.pop() {
        merged.push(value);

        if let Some(&next) = runs[run].get(cursors[run]) {
            heap.push(Reverse(Head { value: next, run }));
            cursors[run] += 1;
        }
    }

    debug_assert_eq!(merged.len(), total);
    merged
}
