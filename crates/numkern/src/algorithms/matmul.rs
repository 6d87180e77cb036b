//! Dense square matrix multiplication.
//!
//! ## Purpose
//!
//! This module implements the serial `C = A x B` kernel and the row-column
//! dot product it reduces to. The dot product fixes the floating-point
//! accumulation order to `k = 0, 1, ..., order - 1`, and the parallel
//! kernel reuses it per output cell, so serial and parallel results are
//! bit-identical.
//!
//! ## Invariants
//!
//! * `C[i][j] = sum over k of A[i][k] * B[k][j]`.
//! * Operands are read-only; each result cell is written exactly once.
//!
//! ## Non-goals
//!
//! * This module does not validate operand orders (handled by the API and
//!   the parallel engine before the kernel runs).
//! * No cache blocking or SIMD; this is the naive reference kernel.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernelError;
use crate::primitives::matrix::{index, SquareMatrix};

// ============================================================================
// Row-Column Dot Product
// ============================================================================

/// Dot product of row `row` of `a` with column `col` of `b`.
///
/// Accumulation order is always `k = 0..order`, regardless of which worker
/// computes the cell. Both buffers are row-major with stride `order`.
#[inline]
pub fn dot_row_col<T: Float>(a: &[T], b: &[T], order: usize, row: usize, col: usize) -> T {
    let a_row = row * order;
    let mut sum = T::zero();
    for k in 0..order {
        sum = sum + a[a_row + k] * b[index(k, col, order)];
    }
    sum
}

// ============================================================================
// Serial Kernel
// ============================================================================

/// Multiply two matrices of equal order into a new result matrix.
///
/// Operand orders must already be validated as equal; only result
/// allocation can fail here.
pub fn multiply<T: Float>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>, KernelError> {
    let order = a.order();
    debug_assert_eq!(order, b.order());

    let mut result = SquareMatrix::zeros(order)?;
    let (a_data, b_data) = (a.as_slice(), b.as_slice());
    let out = result.as_mut_slice();
    for i in 0..order {
        for j in 0..order {
            out[index(i, j, order)] = dot_row_col(a_data, b_data, order, i, j);
        }
    }
    Ok(result)
}
