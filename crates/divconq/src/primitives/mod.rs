//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the plain data types shared by every stage: chunk
//! descriptors, partial results, and the error type. It has zero internal
//! dependencies within the crate.
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
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Chunk descriptors and partial results.
pub mod chunk;

/// Shared error types.
pub mod errors;
