//! Fallible buffer allocation.
//!
//! ## Purpose
//!
//! This module provides the single allocation path used for every buffer a
//! kernel requires (histograms, output arrays, result matrices). Capacity
//! is reserved fallibly so that an exhausted allocator surfaces as a
//! [`KernelError::AllocationFailure`] instead of aborting the process.
//!
//! ## Invariants
//!
//! * On error, no partial buffer escapes to the caller.
//! * On success, the returned vector has exactly `len` elements.
//!
//! ## Non-goals
//!
//! * This module does not pool or reuse buffers between kernel invocations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::size_of;

// Internal dependencies
use crate::primitives::errors::KernelError;

// ============================================================================
// Allocation
// ============================================================================

/// Allocate a vector of `len` copies of `value`, failing cleanly.
pub fn alloc_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, KernelError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| KernelError::AllocationFailure {
            bytes: len.saturating_mul(size_of::<T>()),
        })?;
    buffer.resize(len, value);
    Ok(buffer)
}
