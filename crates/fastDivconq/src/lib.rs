//! # fastDivconq — Parallel Divide-and-Conquer Array Processing
//!
//! Multi-threaded chunked sorting and prefix sums for **Rust**, built on the
//! `divconq` core and executed on a `rayon` worker pool.
//!
//! ## What is parallel divide-and-conquer?
//!
//! The input is split into one contiguous chunk per worker. Every chunk is
//! sorted (or locally prefix-summed) concurrently on its own worker thread;
//! the partial results are then combined in chunk order: a k-way merge for
//! sorting, a carry pass for prefix sums. Inputs smaller than the threshold
//! run the sequential kernel once on the calling thread, because spawning
//! workers for them costs more than it saves.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastDivconq::prelude::*;
//!
//! let data: Vec<i64> = (0..10_000).rev().collect();
//!
//! // Build the processor with parallel execution (default)
//! let model = Divconq::new()
//!     .workers(4)         // Four chunks, four worker threads
//!     .threshold(1_000)   // Parallel path from 1000 elements up
//!     .adapter(Sort)      // Parallel by default
//!     .build()?;
//!
//! let result = model.run(&data)?;
//!
//! assert!(result.is_parallel());
//! assert_eq!(result.values, (0..10_000).collect::<Vec<i64>>());
//! # Result::<(), DivconqError>::Ok(())
//! ```
//!
//! ### Prefix Sums
//!
//! ```rust
//! use fastDivconq::prelude::*;
//!
//! let model = Divconq::new()
//!     .workers(2)
//!     .threshold(0)
//!     .adapter(PrefixSum)
//!     .build()?;
//!
//! let sums = model.scan(&[1_u64, 2, 3, 4])?;
//! assert_eq!(sums, vec![1, 3, 6, 10]);
//! # Result::<(), DivconqError>::Ok(())
//! ```
//!
//! ### Sequential Execution
//!
//! Parallel execution can be switched off per processor; the result is
//! identical, only produced on the calling thread.
//!
//! ```rust
//! use fastDivconq::prelude::*;
//!
//! let model = Divconq::new()
//!     .workers(4)
//!     .threshold(0)
//!     .parallel(false)
//!     .adapter(Sort)
//!     .build()?;
//!
//! let sorted = model.sort(&[3.5_f64, -1.0, 2.25, 0.0])?;
//! assert_eq!(sorted, vec![-1.0, 0.0, 2.25, 3.5]);
//! # Result::<(), DivconqError>::Ok(())
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use fastDivconq::prelude::*;
//!
//! let model = Divconq::new().workers(2).threshold(0).adapter(Sort).build()?;
//!
//! match model.run(&[1.0, f64::NAN, 0.5]) {
//!     Ok(result) => println!("Sorted: {:?}", result.values),
//!     Err(e) => {
//!         // NaN cannot be ordered
//!         eprintln!("Sorting failed: {}", e);
//!     }
//! }
//! # Result::<(), DivconqError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! `fastDivconq` accepts [ndarray](https://docs.rs/ndarray) vectors directly,
//! without copying, as long as they are contiguous in memory.
//!
//! ```rust
//! use fastDivconq::prelude::*;
//! use ndarray::Array1;
//!
//! let data = Array1::from_vec((0..100).map(|i| (100 - i) as f64).collect());
//!
//! let model = Divconq::new().workers(4).threshold(0).adapter(Sort).build()?;
//!
//! // run() accepts &Array1<f64>, &[f64], or Vec<f64>
//! let result = model.run(&data)?;
//! assert_eq!(result.values[0], 1.0);
//! # Result::<(), DivconqError>::Ok(())
//! ```
//!
//! ## Features
//!
//! - **`cpu`** (default): rayon-backed parallel execution. Without it, every
//!   run takes the in-order chunk path of the `divconq` crate.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel passes and worker pools.
mod engine;

// Layer 6: Adapters - parallel operation adapters.
mod adapters;

// High-level fluent API for divide-and-conquer processing.
mod api;

// Input data handling.
mod input;

// Standard fastDivconq prelude.
pub mod prelude {
    pub use crate::api::{
        Accumulate,
        Adapter::{PrefixSum, Sort},
        DivconqBuilder as Divconq, DivconqError, DivconqResult, Element, ExecutionPath,
        MergeStrategy::{Auto, Heap, LinearScan},
        Mode,
        SortKernel::{MergeSort, QuickSort},
        Stage,
    };
}

// Timing helpers for benchmarks and speedup harnesses.
pub mod timing {
    pub use crate::api::{SpeedupReport, SpeedupSample, Timed, time_call};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
