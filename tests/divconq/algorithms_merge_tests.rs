#![cfg(feature = "dev")]
//! Tests for the k-way merge.
//!
//! ## Test Organization
//!
//! 1. **Linear Scan** - Ordering, empty runs, tie handling
//! 2. **Heap** - Ordering, many runs
//! 3. **Strategy** - `Auto` resolution and dispatch through `combine_fn`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use divconq::internals::algorithms::merge::{
    LINEAR_SCAN_MAX_WAYS, MergeStrategy, merge_heap, merge_linear, merge_partials_auto,
};
use divconq::internals::algorithms::partition::partition;
use divconq::internals::primitives::chunk::PartialResult;

/// Split `values` into `ways` chunks and sort each one.
fn sorted_partials(values: &[i32], ways: usize) -> Vec<PartialResult<i32>> {
    partition(values.len(), ways)
        .unwrap()
        .into_iter()
        .map(|chunk| {
            let mut run = chunk.slice(values).to_vec();
            run.sort_unstable();
            PartialResult::new(chunk, run)
        })
        .collect()
}

fn random_values(seed: u64, n: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1000..1000)).collect()
}

fn reference_sort(values: &[i32]) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort_unstable();
    expected
}

// ============================================================================
// Linear Scan Tests
// ============================================================================

/// Test the two-chunk example from the overview.
#[test]
fn test_merge_linear_two_runs() {
    let runs: [&[i32]; 2] = [&[3, 5], &[1, 8]];
    assert_eq!(merge_linear(&runs), vec![1, 3, 5, 8]);
}

/// Test that empty runs are skipped.
#[test]
fn test_merge_linear_empty_runs() {
    let runs: [&[i32]; 4] = [&[], &[2, 4], &[], &[1]];
    assert_eq!(merge_linear(&runs), vec![1, 2, 4]);
    assert!(merge_linear::<i32>(&[]).is_empty());
}

/// Test that equal heads are all emitted.
#[test]
fn test_merge_linear_ties() {
    let runs: [&[i32]; 3] = [&[1, 1, 2], &[1, 2], &[2, 2]];
    assert_eq!(merge_linear(&runs), vec![1, 1, 1, 2, 2, 2, 2]);
}

/// Test that ties between equal floats keep both signed zeros.
#[test]
fn test_merge_linear_signed_zero() {
    let runs: [&[f64]; 2] = [&[0.0, 1.0], &[-0.0, 1.0]];
    let merged = merge_linear(&runs);

    assert_eq!(merged.len(), 4);
    assert_eq!(merged.iter().filter(|v| **v == 0.0).count(), 2);
}

// ============================================================================
// Heap Tests
// ============================================================================

/// Test heap merge against a reference sort.
#[test]
fn test_merge_heap_random() {
    let values = random_values(1, 5_000);
    let partials = sorted_partials(&values, 37);
    let runs: Vec<&[i32]> = partials.iter().map(|p| p.values.as_slice()).collect();

    assert_eq!(merge_heap(&runs), reference_sort(&values));
}

/// Test that heap and linear scan produce the same output.
#[test]
fn test_merge_heap_matches_linear() {
    for ways in [1, 2, 5, 8, 9, 16] {
        let values = random_values(ways as u64, 1_000);
        let partials = sorted_partials(&values, ways);
        let runs: Vec<&[i32]> = partials.iter().map(|p| p.values.as_slice()).collect();

        assert_eq!(merge_heap(&runs), merge_linear(&runs), "ways={ways}");
    }
}

// ============================================================================
// Strategy Tests
// ============================================================================

/// Test `Auto` resolution around the cut-over point.
#[test]
fn test_strategy_resolve() {
    assert_eq!(MergeStrategy::default(), MergeStrategy::Auto);
    assert_eq!(
        MergeStrategy::Auto.resolve(LINEAR_SCAN_MAX_WAYS),
        MergeStrategy::LinearScan
    );
    assert_eq!(
        MergeStrategy::Auto.resolve(LINEAR_SCAN_MAX_WAYS + 1),
        MergeStrategy::Heap
    );
    assert_eq!(MergeStrategy::Heap.resolve(2), MergeStrategy::Heap);
    assert_eq!(MergeStrategy::LinearScan.resolve(64), MergeStrategy::LinearScan);
}

/// Test every strategy through its combine function.
#[test]
fn test_strategy_combine_fn() {
    let values = random_values(99, 2_048);
    let expected = reference_sort(&values);

    for strategy in [
        MergeStrategy::Auto,
        MergeStrategy::LinearScan,
        MergeStrategy::Heap,
    ] {
        let combine = strategy.combine_fn::<i32>();
        let merged = combine(sorted_partials(&values, 12)).unwrap();
        assert_eq!(merged, expected, "strategy {:?}", strategy);
    }
}

/// Test the `Auto` entry point directly.
#[test]
fn test_merge_partials_auto() {
    let values = vec![9, 7, 5, 3, 1, 8, 6, 4, 2, 0];
    let merged = merge_partials_auto(sorted_partials(&values, 3)).unwrap();
    assert_eq!(merged, (0..10).collect::<Vec<i32>>());
}
