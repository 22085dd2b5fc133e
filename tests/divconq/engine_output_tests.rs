#![cfg(feature = "dev")]
//! Tests for result types and their formatting.
//!
//! ## Test Organization
//!
//! 1. **Query Methods** - len, is_parallel, chunk_count, into_values
//! 2. **Display** - Summary block and value table truncation

use divconq::internals::algorithms::sorting::SortKernel;
use divconq::internals::engine::output::{DivconqResult, ExecutionPath, Mode};
use divconq::internals::primitives::chunk::Chunk;

fn result(values: Vec<i32>, path: ExecutionPath) -> DivconqResult<i32> {
    let chunks = match path {
        ExecutionPath::Sequential => Vec::new(),
        ExecutionPath::Parallel => vec![
            Chunk::new(0, 0, values.len() / 2),
            Chunk::new(1, values.len() / 2, values.len() - values.len() / 2),
        ],
    };
    DivconqResult {
        values,
        mode: Mode::Sort(SortKernel::MergeSort),
        path,
        workers: 2,
        chunks,
    }
}

// ============================================================================
// Query Method Tests
// ============================================================================

/// Test query methods on both paths.
#[test]
fn test_query_methods() {
    let sequential = result(vec![1, 2, 3], ExecutionPath::Sequential);
    assert_eq!(sequential.len(), 3);
    assert!(!sequential.is_empty());
    assert!(!sequential.is_parallel());
    assert_eq!(sequential.chunk_count(), 0);

    let parallel = result(vec![1, 2, 3, 4], ExecutionPath::Parallel);
    assert!(parallel.is_parallel());
    assert_eq!(parallel.chunk_count(), 2);
    assert_eq!(parallel.into_values(), vec![1, 2, 3, 4]);
}

/// Test defaults and names of the metadata enums.
#[test]
fn test_metadata_display() {
    assert_eq!(ExecutionPath::default(), ExecutionPath::Sequential);
    assert_eq!(ExecutionPath::Parallel.to_string(), "parallel");
    assert_eq!(Mode::PrefixSum.to_string(), "prefix sum");
    assert_eq!(Mode::Sort(SortKernel::QuickSort).to_string(), "sort (quicksort)");
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary block.
#[test]
fn test_display_summary() {
    let text = result(vec![1, 3, 5, 8], ExecutionPath::Parallel).to_string();

    assert!(text.contains("Operation:   sort (merge sort)"));
    assert!(text.contains("Data points: 4"));
    assert!(text.contains("Path:        parallel"));
    assert!(text.contains("Chunks:      2"));

    let text = result(vec![1], ExecutionPath::Sequential).to_string();
    assert!(!text.contains("Chunks:"));
}

/// Test that long outputs show only the first and last rows.
#[test]
fn test_display_truncates_long_output() {
    let text = result((0..100).collect(), ExecutionPath::Sequential).to_string();

    assert!(text.contains("..."));
    assert!(text.lines().any(|l| l.trim_start().starts_with("99 ")));
    assert!(!text.lines().any(|l| l.trim_start().starts_with("50 ")));
}
