//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the serial reference kernels and the sequential
//! phases that the parallel extension crate reuses. Algorithms assume
//! validated input; validation lives in the engine and API layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Datastore
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stable counting sort and its shared sequential phases.
pub mod counting_sort;

/// Lomuto partition and serial quicksort.
pub mod quicksort;

/// Dense matrix multiplication.
pub mod matmul;

/// Gaussian triangularization (serial only).
pub mod gaussian;
