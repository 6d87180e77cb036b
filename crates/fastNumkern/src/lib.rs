//! # fastNumkern — shared-memory parallel numeric kernels
//!
//! Parallel implementations of the `numkern` reference kernels: a
//! histogram/reduction counting-sort pipeline, a depth-bounded
//! task-parallel quicksort, and a data-parallel matrix multiplication,
//! all built on `rayon` fork-join parallelism.
//!
//! Every kernel here produces output identical to its serial reference in
//! `numkern`, regardless of worker count or task scheduling order: the
//! counting-sort pipeline funnels into the core crate's sequential prefix
//! sum and stable placement, quicksort tasks operate on provably disjoint
//! sub-slices, and matrix cells keep a fixed accumulation order.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastNumkern::prelude::*;
//!
//! let kernels = Kernels::builder().workers(4).build()?;
//!
//! let sorted = kernels.counting_sort(&[5, 3, 8, 3, 1])?;
//! assert_eq!(sorted, vec![1, 3, 3, 5, 8]);
//!
//! let mut values = vec![0.3_f64, 0.1, 0.2];
//! kernels.quicksort(&mut values);
//! assert_eq!(values, vec![0.1, 0.2, 0.3]);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ## Tuning
//!
//! The [`prelude::Kernels`] builder exposes the spawn threshold (minimum
//! sub-slice length for quicksort task creation, default 1000), the depth
//! budget (default `ceil(log2(workers))`), and an explicit worker count,
//! which runs the kernels on a dedicated thread pool.

#![allow(non_snake_case)]

// Parallel kernel engines.
pub mod engine;

// High-level builder API.
mod api;

// Standard fastNumkern prelude.
pub mod prelude {
    pub use crate::api::{default_depth_budget, Kernels, KernelsBuilder, DEFAULT_SPAWN_THRESHOLD};
    pub use numkern::prelude::*;
}
