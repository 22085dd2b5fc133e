#![cfg(feature = "dev")]
//! Tests for the divide-and-conquer orchestrator.
//!
//! These tests verify the core execution engine components:
//! - Path decision (threshold, worker count, short inputs)
//! - Sequential and parallel paths with the real kernels
//! - Chunk reassembly by index and failure propagation
//! - Custom execute passes
//!
//! ## Test Organization
//!
//! 1. **Constructor Tests** - Defaults and builder methods
//! 2. **Path Decision** - `decide`
//! 3. **Execution** - End-to-end runs on both paths
//! 4. **Reassembly** - `assemble_in_order`
//! 5. **Failure Propagation** - Kernel errors, broken execute passes

use divconq::internals::algorithms::merge::merge_partials_linear;
use divconq::internals::algorithms::prefix::{compose_prefix_sums, prefix_sum_kernel};
use divconq::internals::algorithms::sorting::merge_sort_kernel;
use divconq::internals::engine::executor::{
    DEFAULT_PARALLEL_THRESHOLD, DivconqConfig, DivconqExecutor, ExecutePassFn, KernelFn,
    assemble_in_order, execute_pass_sequential, run_kernel,
};
use divconq::internals::engine::output::ExecutionPath;
use divconq::internals::primitives::chunk::{Chunk, PartialResult};
use divconq::internals::primitives::errors::{DivconqError, Stage};

fn sort_executor(workers: usize, threshold: usize) -> DivconqExecutor<i32> {
    DivconqExecutor::new(merge_sort_kernel::<i32>, merge_partials_linear::<i32>)
        .workers(workers)
        .threshold(threshold)
}

// ============================================================================
// Constructor Tests
// ============================================================================

/// Test executor defaults.
#[test]
fn test_executor_new_defaults() {
    let executor = DivconqExecutor::new(merge_sort_kernel::<i32>, merge_partials_linear::<i32>);

    assert_eq!(executor.workers, 1);
    assert_eq!(executor.threshold, DEFAULT_PARALLEL_THRESHOLD);
    assert!(executor.custom_execute_pass.is_none());
}

/// Test construction from a config.
#[test]
fn test_executor_from_config() {
    let config = DivconqConfig {
        kernel: prefix_sum_kernel::<i64>,
        combine: compose_prefix_sums::<i64>,
        workers: 3,
        threshold: 10,
        custom_execute_pass: None,
    };
    let executor = DivconqExecutor::from_config(&config);

    assert_eq!(executor.workers, 3);
    assert_eq!(executor.threshold, 10);
}

// ============================================================================
// Path Decision Tests
// ============================================================================

/// Test the path decision rules.
#[test]
fn test_decide() {
    type E = DivconqExecutor<i32>;

    assert_eq!(E::decide(99, 4, 100), ExecutionPath::Sequential);
    assert_eq!(E::decide(100, 4, 100), ExecutionPath::Parallel);
    assert_eq!(E::decide(1_000, 1, 0), ExecutionPath::Sequential);
    assert_eq!(E::decide(3, 4, 0), ExecutionPath::Sequential);
    assert_eq!(E::decide(4, 4, 0), ExecutionPath::Parallel);
    assert_eq!(E::decide(0, 2, 0), ExecutionPath::Sequential);
}

// ============================================================================
// Execution Tests
// ============================================================================

/// Test the sequential path runs the kernel once over everything.
#[test]
fn test_run_sequential_path() {
    let output = sort_executor(4, 100).run(&[5, 3, 8, 1]).unwrap();

    assert_eq!(output.values, vec![1, 3, 5, 8]);
    assert_eq!(output.path, ExecutionPath::Sequential);
    assert!(output.chunks.is_empty());
}

/// Test the parallel path partitions, sorts, and merges.
#[test]
fn test_run_parallel_path() {
    let output = sort_executor(2, 0).run(&[5, 3, 8, 1]).unwrap();

    assert_eq!(output.values, vec![1, 3, 5, 8]);
    assert_eq!(output.path, ExecutionPath::Parallel);
    assert_eq!(output.chunks, vec![Chunk::new(0, 0, 2), Chunk::new(1, 2, 2)]);
}

/// Test the prefix-sum pipeline on the parallel path.
#[test]
fn test_run_prefix_sum_parallel() {
    let executor = DivconqExecutor::new(prefix_sum_kernel::<i64>, compose_prefix_sums::<i64>)
        .workers(2)
        .threshold(0);
    let output = executor.run(&[1, 2, 3, 4]).unwrap();

    assert_eq!(output.values, vec![1, 3, 6, 10]);
}

/// Test that both paths agree on a larger input.
#[test]
fn test_paths_agree() {
    let values: Vec<i32> = (0..10_007).map(|i| (i * 7_919) % 10_007).collect();

    let sequential = sort_executor(8, usize::MAX).run(&values).unwrap();
    let parallel = sort_executor(8, 0).run(&values).unwrap();

    assert_eq!(sequential.path, ExecutionPath::Sequential);
    assert_eq!(parallel.path, ExecutionPath::Parallel);
    assert_eq!(sequential.values, parallel.values);
}

/// Test empty input, including with more workers than elements.
#[test]
fn test_run_empty() {
    let output = sort_executor(4, 0).run(&[]).unwrap();
    assert!(output.values.is_empty());
    assert_eq!(output.path, ExecutionPath::Sequential);
}

/// Test that a zero worker count is rejected before any work.
#[test]
fn test_run_zero_workers() {
    let err = sort_executor(0, 0).run(&[1, 2]).unwrap_err();
    assert_eq!(err, DivconqError::InvalidWorkerCount(0));
}

/// Test `run_with_config`.
#[test]
fn test_run_with_config() {
    let config = DivconqConfig {
        kernel: merge_sort_kernel::<i32>,
        combine: merge_partials_linear::<i32>,
        workers: 3,
        threshold: 0,
        custom_execute_pass: None,
    };
    let output = DivconqExecutor::run_with_config(&[3, 2, 1, 0, -1], config).unwrap();

    assert_eq!(output.values, vec![-1, 0, 1, 2, 3]);
    assert_eq!(output.chunks.len(), 3);
}

// ============================================================================
// Reassembly Tests
// ============================================================================

/// Test that out-of-order partials are slotted by chunk index.
#[test]
fn test_assemble_in_order_reorders() {
    let chunks = vec![Chunk::new(0, 0, 1), Chunk::new(1, 1, 1), Chunk::new(2, 2, 1)];
    let partials = vec![
        PartialResult::new(chunks[2], vec![30]),
        PartialResult::new(chunks[0], vec![10]),
        PartialResult::new(chunks[1], vec![20]),
    ];

    let ordered = assemble_in_order(partials, &chunks).unwrap();
    let values: Vec<i32> = ordered.iter().flat_map(|p| p.values.clone()).collect();
    assert_eq!(values, vec![10, 20, 30]);
}

/// Test that missing and duplicate partials are rejected.
#[test]
fn test_assemble_in_order_missing_and_duplicate() {
    let chunks = vec![Chunk::new(0, 0, 1), Chunk::new(1, 1, 1)];

    let missing = vec![PartialResult::new(chunks[0], vec![1])];
    assert_eq!(
        assemble_in_order(missing, &chunks).unwrap_err(),
        DivconqError::MissingPartial { chunk: 1 }
    );

    let duplicate = vec![
        PartialResult::new(chunks[0], vec![1]),
        PartialResult::new(chunks[0], vec![1]),
    ];
    assert_eq!(
        assemble_in_order(duplicate, &chunks).unwrap_err(),
        DivconqError::MissingPartial { chunk: 0 }
    );

    let unknown = vec![PartialResult::new(Chunk::new(5, 0, 1), vec![1])];
    assert_eq!(
        assemble_in_order(unknown, &chunks).unwrap_err(),
        DivconqError::MissingPartial { chunk: 5 }
    );
}

/// Test that a partial of the wrong length is rejected.
#[test]
fn test_assemble_in_order_length_mismatch() {
    let chunks = vec![Chunk::new(0, 0, 2)];
    let partials = vec![PartialResult::new(chunks[0], vec![1])];

    let err = assemble_in_order(partials, &chunks).unwrap_err();
    assert_eq!(
        err,
        DivconqError::LengthMismatch {
            stage: Stage::Execute,
            chunk: 0,
            expected: 2,
            got: 1
        }
    );
}

// ============================================================================
// Failure Propagation Tests
// ============================================================================

/// Test that `run_kernel` runs over the chunk's slice and tags the result.
#[test]
fn test_run_kernel_tags_chunk() {
    let values = [1_i64, 2, 3, 4];
    let chunk = Chunk::new(1, 2, 2);

    let partial = run_kernel(&values, chunk, prefix_sum_kernel::<i64>).unwrap();
    assert_eq!(partial.chunk, chunk);
    assert_eq!(partial.values, vec![3, 7]);
}

/// Kernel that rejects negative values, naming the first one.
fn non_negative_kernel(values: &[i32]) -> Result<Vec<i32>, DivconqError> {
    match values.iter().find(|&&v| v < 0) {
        Some(v) => Err(DivconqError::InvalidNumericValue(format!("negative {v}"))),
        None => Ok(values.to_vec()),
    }
}

/// Test that the sequential pass stops at the first failing chunk.
#[test]
fn test_execute_pass_sequential_first_error() {
    let values = [-1, 2, -3, 4];
    let chunks = vec![Chunk::new(0, 0, 2), Chunk::new(1, 2, 2)];

    let kernel: KernelFn<i32> = non_negative_kernel;
    let err = execute_pass_sequential(&values, &chunks, kernel, 2).unwrap_err();
    assert_eq!(
        err,
        DivconqError::InvalidNumericValue("negative -1".to_string())
    );
}

/// Test that both paths report the same first overflowing prefix.
#[test]
fn test_prefix_overflow_same_on_both_paths() {
    let executor = DivconqExecutor::new(prefix_sum_kernel::<u8>, compose_prefix_sums::<u8>)
        .workers(2)
        .threshold(0);
    let values = [200_u8, 100, 1, 1];
    let expected = DivconqError::Overflow {
        stage: Stage::Combine,
        index: 1,
    };

    assert_eq!(executor.run(&values).unwrap_err(), expected);
    assert_eq!(
        executor.clone().threshold(usize::MAX).run(&values).unwrap_err(),
        expected
    );
}

/// Test that a chunk-local sum past the type's range does not fail the call.
#[test]
fn test_prefix_local_wrap_parallel_path() {
    let executor = DivconqExecutor::new(prefix_sum_kernel::<i8>, compose_prefix_sums::<i8>)
        .workers(2)
        .threshold(0);

    let parallel = executor.run(&[-100, 100, 100]).unwrap();
    let sequential = executor.clone().workers(1).run(&[-100, 100, 100]).unwrap();

    assert_eq!(parallel.path, ExecutionPath::Parallel);
    assert_eq!(parallel.values, vec![-100, 0, 100]);
    assert_eq!(parallel.values, sequential.values);
}

/// Kernel that drops its last element.
fn truncating_kernel(values: &[i32]) -> Result<Vec<i32>, DivconqError> {
    Ok(values[..values.len().saturating_sub(1)].to_vec())
}

/// Test that a kernel returning the wrong length fails the call.
#[test]
fn test_run_rejects_short_kernel_output() {
    let kernel: KernelFn<i32> = truncating_kernel;
    let executor = DivconqExecutor::new(kernel, merge_partials_linear::<i32>)
        .workers(2)
        .threshold(0);

    let err = executor.run(&[4, 3, 2, 1]).unwrap_err();
    assert_eq!(err.stage(), Some(Stage::Execute));

    // The sequential path checks its single chunk the same way
    let err = executor.clone().threshold(usize::MAX).run(&[4, 3, 2, 1]).unwrap_err();
    assert_eq!(
        err,
        DivconqError::LengthMismatch {
            stage: Stage::Execute,
            chunk: 0,
            expected: 4,
            got: 3
        }
    );
}

/// Execute pass that returns chunks in reverse order.
fn reversed_pass(
    values: &[i32],
    chunks: &[Chunk],
    kernel: KernelFn<i32>,
    workers: usize,
) -> Result<Vec<PartialResult<i32>>, DivconqError> {
    let mut partials = execute_pass_sequential(values, chunks, kernel, workers)?;
    partials.reverse();
    Ok(partials)
}

/// Execute pass that loses the last chunk.
fn lossy_pass(
    values: &[i32],
    chunks: &[Chunk],
    kernel: KernelFn<i32>,
    workers: usize,
) -> Result<Vec<PartialResult<i32>>, DivconqError> {
    let mut partials = execute_pass_sequential(values, chunks, kernel, workers)?;
    partials.pop();
    Ok(partials)
}

/// Test that completion order of an execute pass does not matter.
#[test]
fn test_custom_execute_pass_out_of_order() {
    let pass: ExecutePassFn<i32> = reversed_pass;
    let executor = sort_executor(4, 0).custom_execute_pass(Some(pass));
    let output = executor.run(&[8, 7, 6, 5, 4, 3, 2, 1]).unwrap();

    assert_eq!(output.values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

/// Test that a lost partial result fails the call.
#[test]
fn test_custom_execute_pass_missing_chunk() {
    let pass: ExecutePassFn<i32> = lossy_pass;
    let executor = sort_executor(4, 0).custom_execute_pass(Some(pass));
    let err = executor.run(&[8, 7, 6, 5, 4, 3, 2, 1]).unwrap_err();

    assert_eq!(err, DivconqError::MissingPartial { chunk: 3 });
}
