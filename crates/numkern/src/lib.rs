//! # Numkern — serial reference kernels for a parallel benchmarking suite
//!
//! This crate provides the serial implementations of four elementary
//! numeric kernels — stable counting sort, in-place quicksort, dense
//! square matrix multiplication, and Gaussian triangularization — together
//! with the primitives the parallel extension crate (`fastNumkern`) builds
//! on: disjoint work partitioning, row-major matrix addressing, fallible
//! buffer allocation, and the sequential counting-sort phases.
//!
//! The serial kernels are deliberately naive reference implementations:
//! their job is to define the output that every parallel variant must
//! reproduce exactly, for any worker count and any task schedule.
//!
//! ## Quick Start
//!
//! ```rust
//! use numkern::prelude::*;
//!
//! let sorted = counting_sort(&[5, 3, 8, 3, 1])?;
//! assert_eq!(sorted, vec![1, 3, 3, 5, 8]);
//!
//! let mut values = vec![0.3_f64, 0.1, 0.2];
//! quicksort(&mut values);
//! assert_eq!(values, vec![0.1, 0.2, 0.3]);
//!
//! let identity = SquareMatrix::<f64>::identity(3)?;
//! let b = SquareMatrix::from_vec(3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])?;
//! assert_eq!(multiply(&identity, &b)?, b);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ## Crate layout
//!
//! The crate is layered bottom-up: primitives, algorithms, engine
//! (validation), datastore (std only), and the validated API re-exported
//! through [`prelude`]. The `dev` feature exposes the internal layers so
//! `fastNumkern` and white-box tests can reuse the sequential phases.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, allocation, partitioning, matrix storage.
mod primitives;

// Layer 2: Algorithms - serial kernels and shared sequential phases.
mod algorithms;

// Layer 3: Engine - validation applied before kernels run.
mod engine;

// Layer 4: Datastore - generation and persistence of kernel inputs.
#[cfg(feature = "std")]
pub mod datastore;

// Layer 5: API - validated public entry points.
mod api;

// Standard numkern prelude.
pub mod prelude {
    pub use crate::api::{
        counting_sort, counting_sort_by_key, extremum, multiply, partition, quicksort,
        triangularize,
    };
    pub use crate::primitives::errors::KernelError;
    pub use crate::primitives::matrix::{index, SquareMatrix};
    pub use crate::primitives::partition::work_partition;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules so the parallel extension crate
// and white-box tests can reach the sequential phases directly. It is
// only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
