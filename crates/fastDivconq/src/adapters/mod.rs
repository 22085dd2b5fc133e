//! Layer 6: Adapters
//!
//! This layer wraps the `divconq` operation adapters with parallel execution
//! support (Sort, PrefixSum).

/// Parallel divide-and-conquer sort.
pub mod sort;

/// Parallel divide-and-conquer prefix sum.
pub mod prefix_sum;
