//! Parallel execution engines.
//!
//! # Purpose
//!
//! This layer holds the parallel counterparts of the core crate's serial
//! kernels, plus the reduction primitives they share. Every engine
//! produces output identical to its serial reference for any worker count
//! and any task schedule.

/// Parallel extremum and histogram merge.
pub mod reduce;

/// Four-phase parallel counting sort.
pub mod counting_sort;

/// Depth-bounded task-parallel quicksort.
pub mod quicksort;

/// Data-parallel matrix multiplication.
pub mod matmul;
