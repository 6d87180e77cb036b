//! High-level API for the serial kernels.
//!
//! ## Purpose
//!
//! This module is the validated public surface of the core crate: one
//! entry point per serial kernel, plus the reduction and partitioning
//! primitives callers may want directly. Each entry point validates its
//! input through the engine's [`Validator`] before any work happens, so a
//! returned error implies no partial output.
//!
//! ## Key concepts
//!
//! * **Single-shot kernels**: Each function runs one kernel to completion
//!   on a fully materialized input; callers wrap the call for timing.
//! * **Identity edge cases**: Sorting an empty or single-element sequence
//!   succeeds trivially; only operations that require a non-empty input
//!   (extremum, partition) reject emptiness.
//!
//! ## Non-goals
//!
//! * No parallel execution here (see the `fastNumkern` crate).
//! * No timing instrumentation; wall-clock measurement is the caller's.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Float, PrimInt};

// Internal dependencies
use crate::algorithms::{counting_sort, gaussian, matmul, quicksort};
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Reduction Primitives
// ============================================================================

/// Minimum and maximum of a non-empty sequence.
pub fn extremum<T: PartialOrd + Copy>(seq: &[T]) -> Result<(T, T), KernelError> {
    counting_sort::extremum(seq)
}

// ============================================================================
// Sorting Kernels
// ============================================================================

/// Stable counting sort of integer keys, ascending.
pub fn counting_sort<K: PrimInt>(input: &[K]) -> Result<Vec<K>, KernelError> {
    counting_sort::sort(input)
}

/// Stable counting sort of payloads carrying an integer key.
pub fn counting_sort_by_key<T, K, F>(input: &[T], key: F) -> Result<Vec<T>, KernelError>
where
    T: Clone,
    K: PrimInt,
    F: Fn(&T) -> K,
{
    counting_sort::sort_by_key(input, key)
}

/// Unstable in-place quicksort, ascending.
pub fn quicksort<T: Float>(seq: &mut [T]) {
    quicksort::sort(seq)
}

/// Lomuto partition of a non-empty slice around its last element.
///
/// Returns the pivot's final index.
pub fn partition<T: Float>(seq: &mut [T]) -> Result<usize, KernelError> {
    Validator::validate_sequence(seq)?;
    Ok(quicksort::partition(seq))
}

// ============================================================================
// Matrix Kernels
// ============================================================================

/// Dense matrix multiplication `C = A x B`.
pub fn multiply<T: Float>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>, KernelError> {
    Validator::validate_operands(a, b)?;
    matmul::multiply(a, b)
}

/// Gaussian triangularization in place; returns the zero pivots skipped.
pub fn triangularize<T: Float>(matrix: &mut SquareMatrix<T>) -> usize {
    gaussian::triangularize(matrix)
}
