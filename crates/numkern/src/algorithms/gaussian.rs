//! Serial Gaussian triangularization.
//!
//! ## Purpose
//!
//! This module reduces a square matrix to upper triangular form by naive
//! Gaussian elimination. It is the one kernel in the suite with no
//! parallel variant.
//!
//! ## Design notes
//!
//! * **No pivoting**: A zero pivot skips the row and is counted; rows are
//!   never exchanged. Numerical robustness is out of scope for the suite.
//! * **In place**: The matrix is overwritten with its triangularized form.
//!
//! ## Invariants
//!
//! * For every pivot row that was not skipped, the entries below the
//!   diagonal in that column are exactly zero afterwards.
//!
//! ## Non-goals
//!
//! * No partial or full pivoting, no error bounds, no back-substitution.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::{index, SquareMatrix};

// ============================================================================
// Serial Kernel
// ============================================================================

/// Triangularize `matrix` in place; returns the number of zero pivots skipped.
pub fn triangularize<T: Float>(matrix: &mut SquareMatrix<T>) -> usize {
    let order = matrix.order();
    let data = matrix.as_mut_slice();
    let mut skipped = 0;

    for i in 0..order.saturating_sub(1) {
        let pivot = data[index(i, i, order)];
        if pivot == T::zero() {
            skipped += 1;
            continue;
        }

        for j in (i + 1)..order {
            let factor = data[index(j, i, order)] / pivot;
            data[index(j, i, order)] = T::zero();
            for k in (i + 1)..order {
                data[index(j, k, order)] =
                    data[index(j, k, order)] - factor * data[index(i, k, order)];
            }
        }
    }

    skipped
}
