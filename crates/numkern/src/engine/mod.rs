//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer hosts the cross-cutting checks that run before a kernel
//! does: input validation for the kernels and parameter validation for
//! the parallel execution knobs.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Datastore
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;
