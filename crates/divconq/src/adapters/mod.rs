//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides the operation-specific builders and processors that
//! adapt the engine layer to each supported operation:
//!
//! - **Sort**: chunked sort with k-way merge
//! - **PrefixSum**: chunked inclusive scan with carry composition
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Divide-and-conquer sort.
pub mod sort;

/// Divide-and-conquer prefix sum.
pub mod prefix_sum;
