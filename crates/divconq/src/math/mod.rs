//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numeric abstractions the kernels are generic over:
//! orderable elements and checked accumulation.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Element and accumulation traits.
pub mod numeric;
