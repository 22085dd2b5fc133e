//! Layer 5: Engine
//!
//! This layer provides the parallel execution engine for divide-and-conquer
//! operations. It runs chunks on a per-call pool of CPU threads.

// Parallel execute and compose passes
#[cfg(feature = "cpu")]
pub mod executor;

// Per-call worker pool
#[cfg(feature = "cpu")]
pub mod pool;
