//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer measures divide-and-conquer calls: wall-clock timing of a
//! single call and the sequential vs. parallel speedup across input sizes.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Timing and speedup reporting (requires `std`).
#[cfg(feature = "std")]
pub mod timing;
