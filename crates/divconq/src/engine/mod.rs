//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a divide-and-conquer call: it decides the
//! execution path, drives partition → execute → combine, validates the
//! invariants between stages, and packages the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Orchestrator and execute pass.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for divide-and-conquer operations.
pub mod output;
