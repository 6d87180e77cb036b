//! High-level API for the parallel kernels.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for parallel kernel
//! execution: a fluent builder for the execution knobs (spawn threshold,
//! depth budget, worker count) producing a [`Kernels`] runner whose
//! methods invoke the parallel engines.
//!
//! ## Design notes
//!
//! * **Validated**: Knobs are validated when `.build()` is called; an
//!   invalid knob never reaches an engine.
//! * **Pool ownership**: An explicit worker count builds a dedicated
//!   rayon pool owned by the runner; otherwise the global pool is used
//!   and sized by hardware concurrency.
//! * **Derived defaults**: The depth budget defaults to
//!   `ceil(log2(worker_count))`, capping quicksort fan-out at
//!   O(worker_count) leaf tasks.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KernelsBuilder`] via `Kernels::builder()`.
//! 2. Chain configuration methods (`.workers()`, `.threshold()`, ...).
//! 3. Call `.build()` and run kernels through the returned [`Kernels`].
//!
//! ## Non-goals
//!
//! * No timing; callers measure wall-clock time around each kernel call.
//! * No cancellation; kernels always run to completion.

// External dependencies
use num_traits::{Float, PrimInt};
use rayon::{ThreadPool, ThreadPoolBuilder};

// Internal dependencies
use numkern::internals::engine::validator::Validator;
use numkern::prelude::{KernelError, SquareMatrix};

use crate::engine::{counting_sort, matmul, quicksort, reduce};

/// Default minimum sub-slice length for spawning quicksort tasks.
pub const DEFAULT_SPAWN_THRESHOLD: usize = 1000;

/// Depth budget that caps task fan-out at roughly one leaf per worker.
pub fn default_depth_budget(workers: usize) -> u32 {
    let mut depth = 0;
    while depth < 64 && (1_usize << depth) < workers {
        depth += 1;
    }
    depth
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for parallel kernel execution parameters.
#[derive(Debug, Clone, Default)]
pub struct KernelsBuilder {
    /// Minimum sub-slice length for quicksort task spawning.
    pub threshold: Option<usize>,

    /// Quicksort task-spawning depth budget.
    pub depth_budget: Option<u32>,

    /// Worker count; `None` uses the global pool's size.
    pub workers: Option<usize>,
}

impl KernelsBuilder {
    /// Builder with all knobs at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum sub-slice length for spawning quicksort tasks.
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Override the quicksort task-spawning depth budget.
    pub fn depth_budget(mut self, depth_budget: u32) -> Self {
        self.depth_budget = Some(depth_budget);
        self
    }

    /// Run on a dedicated pool with exactly this many workers.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Validate the knobs and construct the runner.
    pub fn build(self) -> Result<Kernels, KernelError> {
        let threshold = self.threshold.unwrap_or(DEFAULT_SPAWN_THRESHOLD);
        Validator::validate_threshold(threshold)?;

        let pool = match self.workers {
            Some(workers) => {
                Validator::validate_workers(workers)?;
                Some(
                    ThreadPoolBuilder::new()
                        .num_threads(workers)
                        .build()
                        .map_err(|e| KernelError::ThreadPool(e.to_string()))?,
                )
            }
            None => None,
        };
        let workers = self.workers.unwrap_or_else(rayon::current_num_threads);

        let depth_budget = match self.depth_budget {
            Some(depth_budget) => {
                Validator::validate_depth_budget(depth_budget)?;
                depth_budget
            }
            None => default_depth_budget(workers),
        };

        Ok(Kernels {
            threshold,
            depth_budget,
            workers,
            pool,
        })
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Configured parallel kernel runner.
#[derive(Debug)]
pub struct Kernels {
    threshold: usize,
    depth_budget: u32,
    workers: usize,
    pool: Option<ThreadPool>,
}

impl Kernels {
    /// Start configuring a runner.
    pub fn builder() -> KernelsBuilder {
        KernelsBuilder::new()
    }

    /// Runner with all knobs at their defaults, on the global pool.
    pub fn new() -> Result<Self, KernelError> {
        KernelsBuilder::new().build()
    }

    /// Worker count the runner partitions work for.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Effective quicksort depth budget.
    pub fn depth_budget(&self) -> u32 {
        self.depth_budget
    }

    fn run<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Parallel minimum and maximum of a non-empty sequence.
    pub fn extremum<T>(&self, seq: &[T]) -> Result<(T, T), KernelError>
    where
        T: PartialOrd + Copy + Send + Sync,
    {
        let workers = self.workers;
        self.run(|| reduce::par_extremum(seq, workers))
    }

    /// Stable parallel counting sort of integer keys, ascending.
    pub fn counting_sort<K>(&self, input: &[K]) -> Result<Vec<K>, KernelError>
    where
        K: PrimInt + Send + Sync,
    {
        let workers = self.workers;
        self.run(|| counting_sort::par_counting_sort(input, workers))
    }

    /// Unstable task-parallel quicksort, ascending, in place.
    pub fn quicksort<T>(&self, seq: &mut [T])
    where
        T: Float + Send,
    {
        let (depth_budget, threshold) = (self.depth_budget, self.threshold);
        self.run(|| quicksort::par_quicksort(seq, depth_budget, threshold));
    }

    /// Data-parallel matrix multiplication `C = A x B`.
    pub fn multiply<T>(
        &self,
        a: &SquareMatrix<T>,
        b: &SquareMatrix<T>,
    ) -> Result<SquareMatrix<T>, KernelError>
    where
        T: Float + Send + Sync,
    {
        self.run(|| matmul::par_multiply(a, b))
    }
}
