//! # divconq — Divide-and-Conquer Array Processing for Rust
//!
//! Chunked sorting and prefix sums built on one pattern: partition a sequence
//! into contiguous chunks, process every chunk with the same sequential
//! kernel, then combine the partial results into one ordered output.
//!
//! ## What is divide-and-conquer processing?
//!
//! A sequence of length N is split into W near-equal chunks, one per worker.
//! Each worker runs a sequential kernel over its chunk (a sort, or a local
//! prefix sum). The combiner then merges the sorted chunks with a k-way
//! merge, or adds each chunk's carry (the total of all preceding chunks) to
//! its local prefix sums. Small inputs skip all of this and run the kernel
//! once over the whole sequence.
//!
//! This crate contains the sequential core: kernels, partitioner, combiners,
//! and the orchestrator, with chunks executed in order on the calling thread.
//! The `fastDivconq` crate plugs a multi-threaded execute pass into the same
//! orchestrator.
//!
//! ## Quick Start
//!
//! ### Sorting
//!
//! ```rust
//! use divconq::prelude::*;
//!
//! let data = vec![5, 3, 8, 1];
//!
//! // Build the processor
//! let model = Divconq::new()
//!     .workers(2)         // Two chunks on the parallel path
//!     .threshold(0)       // Always take the parallel path
//!     .adapter(Sort)
//!     .build()?;
//!
//! // Run it
//! let result = model.run(&data)?;
//!
//! assert_eq!(result.values, vec![1, 3, 5, 8]);
//! println!("{}", result);
//! # Result::<(), DivconqError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Operation:   sort (merge sort)
//!   Data points: 4
//!   Path:        parallel
//!   Workers:     2
//!   Chunks:      2
//!
//! Values:
//!    Index            Value
//! -------------------------
//!        0                1
//!        1                3
//!        2                5
//!        3                8
//! ```
//!
//! ### Prefix Sums
//!
//! ```rust
//! use divconq::prelude::*;
//!
//! let data = vec![1_i64, 2, 3, 4];
//!
//! let model = Divconq::new()
//!     .workers(2)
//!     .threshold(0)
//!     .adapter(PrefixSum)
//!     .build()?;
//!
//! let result = model.run(&data)?;
//! assert_eq!(result.values, vec![1, 3, 6, 10]);
//! # Result::<(), DivconqError>::Ok(())
//! ```
//!
//! ### Full Options
//!
//! ```rust
//! use divconq::prelude::*;
//!
//! let data: Vec<f64> = (0..1000).rev().map(|i| i as f64 * 0.5).collect();
//!
//! let model = Divconq::new()
//!     .workers(16)                // Sixteen chunks
//!     .threshold(500)             // Parallel path from 500 elements up
//!     .sort_kernel(QuickSort)     // Per-chunk algorithm
//!     .merge_strategy(Heap)       // k-way merge with a binary heap
//!     .adapter(Sort)
//!     .build()?;
//!
//! let result = model.run(&data)?;
//! assert!(result.is_parallel());
//! assert!(result.values.windows(2).all(|w| w[0] <= w[1]));
//! # Result::<(), DivconqError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `run` method returns a `Result<DivconqResult<T>, DivconqError>`.
//!
//! - **`Ok(DivconqResult<T>)`**: Contains the output values and how they were produced.
//! - **`Err(DivconqError)`**: Indicates a failure (e.g., zero workers, NaN input, overflow).
//!
//! Failures during a run report the stage that produced them:
//!
//! ```rust
//! use divconq::prelude::*;
//!
//! let model = Divconq::new().workers(2).threshold(0).adapter(PrefixSum).build()?;
//!
//! // The running sum 200 + 100 does not fit in a u8
//! match model.run(&[200_u8, 100, 1, 1]) {
//!     Ok(result) => println!("{:?}", result.values),
//!     Err(e) => {
//!         assert_eq!(e.stage(), Some(Stage::Combine));
//!         eprintln!("Prefix sum failed: {}", e);
//!     }
//! }
//! # Result::<(), DivconqError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! divconq = { version = "0.3", default-features = false }
//! ```
//!
//! Without `std`, the default worker count is 1 and the timing helpers in
//! `evaluation` are unavailable.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and error types.
mod primitives;

// Layer 2: Math - numeric element traits.
mod math;

// Layer 3: Algorithms - kernels, partitioning, and combiners.
mod algorithms;

// Layer 4: Evaluation - timing and speedup measurement.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - operation adapters.
mod adapters;

// High-level fluent API.
mod api;

// Standard divconq prelude.
pub mod prelude {
    pub use crate::api::{
        Accumulate,
        Adapter::{PrefixSum, Sort},
        DivconqBuilder as Divconq, DivconqError, DivconqResult, Element, ExecutionPath,
        MergeStrategy::Auto,
        MergeStrategy::Heap,
        MergeStrategy::LinearScan,
        Mode,
        SortKernel::MergeSort,
        SortKernel::QuickSort,
        Stage,
    };
}

// Timing helpers for benchmarks and speedup harnesses.
#[cfg(feature = "std")]
pub mod timing {
    pub use crate::evaluation::timing::{SpeedupReport, SpeedupSample, Timed, time_call};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
