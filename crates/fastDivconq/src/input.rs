//! Input abstractions for divide-and-conquer operations.
//!
//! ## Purpose
//!
//! This module lets `run` accept several container types (slices, arrays,
//! vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to underlying data buffers.
//! * **Fail-fast validation**: Ensures memory continuity for ndarray views
//!   before processing.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container, in order.
//! * Non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not copy or reshape data.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};

// Export dependencies from divconq crate
use divconq::internals::math::numeric::Element;
use divconq::internals::primitives::errors::DivconqError;

/// Trait for types that can be used as input for divide-and-conquer operations.
pub trait DivconqInput<T: Element> {
    /// Convert the input to a contiguous slice.
    fn as_divconq_slice(&self) -> Result<&[T], DivconqError>;
}

impl<T: Element> DivconqInput<T> for [T] {
    fn as_divconq_slice(&self) -> Result<&[T], DivconqError> {
        Ok(self)
    }
}

impl<T: Element, const N: usize> DivconqInput<T> for [T; N] {
    fn as_divconq_slice(&self) -> Result<&[T], DivconqError> {
        Ok(self.as_slice())
    }
}

impl<T: Element> DivconqInput<T> for Vec<T> {
    fn as_divconq_slice(&self) -> Result<&[T], DivconqError> {
        Ok(self.as_slice())
    }
}

impl<T: Element, S> DivconqInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_divconq_slice(&self) -> Result<&[T], DivconqError> {
        self.as_slice().ok_or_else(|| {
            DivconqError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
