//! Layer 3: Algorithms
//!
//! This layer implements the sequential kernels (sorting, prefix sum), the
//! partitioner, and the combiners (k-way merge, carry composition). It holds
//! the per-chunk logic but is orchestrated by the engine layer.

// Sequential sort kernels.
pub mod sorting;

// Local prefix sums and carry composition.
pub mod prefix;

// Chunk partitioning.
pub mod partition;

// k-way merge of sorted runs.
pub mod merge;
