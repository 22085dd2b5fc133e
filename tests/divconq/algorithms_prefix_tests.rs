#![cfg(feature = "dev")]
//! Tests for the prefix-sum kernel and carry composition.
//!
//! ## Test Organization
//!
//! 1. **Kernel** - Local inclusive sums, wrapping local sums
//! 2. **Composition** - Carries across chunks, empty input, overflow
//! 3. **Split Composition** - `chunk_carries` + `apply_carry` equivalence
//! 4. **Chunking Independence** - Same result or error for every layout

use approx::assert_relative_eq;

use divconq::internals::algorithms::partition::partition;
use divconq::internals::algorithms::prefix::{
    apply_carry, chunk_carries, compose_prefix_sums, prefix_sum_kernel,
};
use divconq::internals::math::numeric::Accumulate;
use divconq::internals::primitives::chunk::PartialResult;
use divconq::internals::primitives::errors::{DivconqError, Stage};

/// Run the kernel over every chunk, as the sequential execute pass would.
fn local_partials<T: Accumulate>(values: &[T], ways: usize) -> Vec<PartialResult<T>> {
    partition(values.len(), ways)
        .unwrap()
        .into_iter()
        .map(|chunk| PartialResult::new(chunk, prefix_sum_kernel(chunk.slice(values)).unwrap()))
        .collect()
}

/// Compose through the split API used by parallel callers.
fn compose_split<T: Accumulate>(partials: &[PartialResult<T>]) -> Result<Vec<T>, DivconqError> {
    let total: usize = partials.iter().map(PartialResult::len).sum();
    let carries = chunk_carries(partials);
    let mut out = vec![T::zero(); total];

    for (partial, carry) in partials.iter().zip(carries) {
        let range = partial.chunk.range();
        apply_carry(&partial.values, carry, partial.chunk.start, &mut out[range])?;
    }
    Ok(out)
}

// ============================================================================
// Kernel Tests
// ============================================================================

/// Test the inclusive sum of a short sequence.
#[test]
fn test_kernel_inclusive() {
    assert_eq!(prefix_sum_kernel(&[1, 2, 3, 4]).unwrap(), vec![1, 3, 6, 10]);
    assert_eq!(prefix_sum_kernel(&[5_u32]).unwrap(), vec![5]);
    assert!(prefix_sum_kernel::<i64>(&[]).unwrap().is_empty());
}

/// Test negative values and floats.
#[test]
fn test_kernel_signed_and_float() {
    assert_eq!(prefix_sum_kernel(&[3, -5, 2]).unwrap(), vec![3, -2, 0]);

    let sums = prefix_sum_kernel(&[0.5_f64, 0.25, 0.125]).unwrap();
    assert_relative_eq!(sums[2], 0.875, epsilon = 1e-12);
}

/// Test that local integer sums wrap instead of failing.
#[test]
fn test_kernel_wraps_locally() {
    assert_eq!(
        prefix_sum_kernel(&[100_u8, 100, 100]).unwrap(),
        vec![100, 200, 44]
    );
    assert_eq!(prefix_sum_kernel(&[100_i8, 100]).unwrap(), vec![100, -56]);
}

/// Test that a float sum leaving the finite range is caught on composition.
#[test]
fn test_float_overflow_caught_on_compose() {
    let partials = local_partials(&[f64::MAX, f64::MAX], 1);
    assert!(partials[0].values[1].is_infinite());

    let err = compose_prefix_sums(partials).unwrap_err();
    assert_eq!(
        err,
        DivconqError::Overflow {
            stage: Stage::Combine,
            index: 1
        }
    );
}

// ============================================================================
// Composition Tests
// ============================================================================

/// Test the two-chunk carry example.
#[test]
fn test_compose_two_chunks() {
    let partials = local_partials(&[1, 2, 3, 4], 2);
    assert_eq!(partials[0].values, vec![1, 3]);
    assert_eq!(partials[1].values, vec![3, 7]);

    assert_eq!(compose_prefix_sums(partials).unwrap(), vec![1, 3, 6, 10]);
}

/// Test composition across many chunk counts against the kernel.
#[test]
fn test_compose_matches_kernel() {
    let values: Vec<i64> = (0..1_000).map(|i| (i % 17) - 8).collect();
    let expected = prefix_sum_kernel(&values).unwrap();

    for ways in [1, 2, 3, 7, 64, 1_000] {
        let composed = compose_prefix_sums(local_partials(&values, ways)).unwrap();
        assert_eq!(composed, expected, "ways={ways}");
    }
}

/// Test that composing nothing yields nothing.
#[test]
fn test_compose_empty() {
    assert!(compose_prefix_sums::<i32>(Vec::new()).unwrap().is_empty());
}

/// Test overflow inside a single chunk covering everything.
#[test]
fn test_compose_single_chunk_overflow() {
    let err = compose_prefix_sums(local_partials(&[100_u8, 100, 100], 1)).unwrap_err();
    assert_eq!(
        err,
        DivconqError::Overflow {
            stage: Stage::Combine,
            index: 2
        }
    );
}

/// Test that carry overflow reports the global index.
#[test]
fn test_compose_overflow_global_index() {
    // Chunks [100, 100] and [100, 1]; the carry 200 + 100 overflows at index 2
    let partials = local_partials(&[100_u8, 100, 100, 1], 2);
    let err = compose_prefix_sums(partials).unwrap_err();

    assert_eq!(
        err,
        DivconqError::Overflow {
            stage: Stage::Combine,
            index: 2
        }
    );
}

// ============================================================================
// Split Composition Tests
// ============================================================================

/// Test carries for a simple layout.
#[test]
fn test_chunk_carries() {
    let partials = local_partials(&[1, 2, 3, 4, 5, 6], 3);
    assert_eq!(chunk_carries(&partials), vec![0, 3, 10]);
}

/// Test that split composition equals sequential composition.
#[test]
fn test_split_matches_sequential() {
    let values: Vec<i32> = (1..=500).collect();
    for ways in [1, 4, 9, 500] {
        let partials = local_partials(&values, ways);
        assert_eq!(
            compose_split(&partials).unwrap(),
            compose_prefix_sums(partials).unwrap()
        );
    }
}

/// Test that split composition reports the same first overflow.
#[test]
fn test_split_overflow_matches_sequential() {
    let values = [50_u8, 50, 50, 50, 50, 10, 1, 1];
    let partials = local_partials(&values, 4);

    let split = compose_split(&partials).unwrap_err();
    let sequential = compose_prefix_sums(partials).unwrap_err();
    assert_eq!(split, sequential);
    assert_eq!(
        split,
        DivconqError::Overflow {
            stage: Stage::Combine,
            index: 5
        }
    );
}

// ============================================================================
// Chunking Independence Tests
// ============================================================================

/// Reference scan with the first overflowing index as the error.
fn checked_scan(values: &[i8]) -> Result<Vec<i8>, usize> {
    let mut sums = Vec::with_capacity(values.len());
    let mut running: i8 = 0;
    for (i, &v) in values.iter().enumerate() {
        running = running.checked_add(v).ok_or(i)?;
        sums.push(running);
    }
    Ok(sums)
}

/// Test that a local sum past the type's range is fine when the global one is not.
#[test]
fn test_local_wrap_with_representable_globals() {
    let values = [-100_i8, 100, 100];
    let partials = local_partials(&values, 2);
    assert_eq!(partials[1].values, vec![100, -56]);

    assert_eq!(compose_prefix_sums(partials).unwrap(), vec![-100, 0, 100]);
    assert_eq!(
        compose_split(&local_partials(&values, 2)).unwrap(),
        vec![-100, 0, 100]
    );
}

/// Test every chunk count against the reference scan near the i8 limits.
#[test]
fn test_every_layout_matches_reference() {
    let inputs: [&[i8]; 4] = [
        &[-100, 100, 100, -90, 27, -128, 127, 1],
        &[120, -120, 120, -120, 120, 7, 1, -1],
        &[-128, -1, 127, 1, 100, 27, 1, -50],
        &[60, 60, 7, -127, 60, 60, 7, 1],
    ];

    for values in inputs {
        let expected = checked_scan(values).map_err(|index| DivconqError::Overflow {
            stage: Stage::Combine,
            index,
        });
        for ways in 1..=values.len() {
            let composed = compose_prefix_sums(local_partials(values, ways));
            assert_eq!(composed, expected, "values={values:?} ways={ways}");
            assert_eq!(
                compose_split(&local_partials(values, ways)),
                expected,
                "split values={values:?} ways={ways}"
            );
        }
    }
}
