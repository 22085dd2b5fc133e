//! Per-call worker pool.
//!
//! ## Purpose
//!
//! This module owns the rayon thread pool used by one orchestrator call. The
//! pool is built with exactly the resolved worker count, the call runs inside
//! it, and its threads exit once the pool goes out of scope, on success and
//! on failure alike.
//!
//! ## Design notes
//!
//! * **Scoped**: No pool outlives the call that created it, so concurrent
//!   calls with different worker counts never share threads.
//! * **Install**: Work started inside [`WorkerPool::install`] (including
//!   nested parallel iterators) runs on this pool, not the global one.
//!
//! ## Non-goals
//!
//! * This module does not reuse pools across calls.

// External dependencies
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

// Export dependencies from divconq crate
use divconq::internals::primitives::errors::DivconqError;

/// A rayon thread pool owned by a single orchestrator call.
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Build a pool with exactly `workers` threads.
    pub fn new(workers: usize) -> Result<Self, DivconqError> {
        if workers == 0 {
            return Err(DivconqError::InvalidWorkerCount(workers));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("divconq-worker-{i}"))
            .build()
            .map_err(|err| DivconqError::WorkerPool(err.to_string()))?;

        debug!(workers, "worker pool created");
        Ok(Self { pool, workers })
    }

    /// Number of threads in the pool.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `op` inside the pool and wait for it to finish.
    pub fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}
