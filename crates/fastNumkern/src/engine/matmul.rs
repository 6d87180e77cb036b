//! Data-parallel matrix multiplication.
//!
//! ## Purpose
//!
//! This module implements the parallel `C = A x B` kernel. The iteration
//! space is the flattened range of `order * order` output cells,
//! distributed across workers; each cell's inner reduction over `k` runs
//! sequentially on the owning worker through the core crate's shared dot
//! helper.
//!
//! ## Design notes
//!
//! * **Flattened cells**: Splitting only on rows would starve workers
//!   whenever `order < worker_count`; the flat cell range load-balances
//!   regardless of order.
//! * **Bit-identical**: Accumulation order for a fixed `(i, j)` is always
//!   `k = 0..order`; parallelism only changes which worker computes which
//!   cell, and cells are write-disjoint, so parallel and serial results
//!   are bit-identical.
//! * **Sequential inner loop**: Parallelizing the `k` reduction would
//!   require synchronized accumulation into a single scalar; not worth the
//!   contention for this access pattern.
//!
//! ## Non-goals
//!
//! * No cache blocking or SIMD; parity with the serial reference kernel
//!   comes first.

// External dependencies
use num_traits::Float;
use rayon::prelude::*;

// Internal dependencies
use numkern::internals::algorithms::matmul::dot_row_col;
use numkern::internals::engine::validator::Validator;
use numkern::prelude::{KernelError, SquareMatrix};

// ============================================================================
// Parallel Kernel
// ============================================================================

/// Multiply two matrices of equal order, parallel over output cells.
pub fn par_multiply<T>(
    a: &SquareMatrix<T>,
    b: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>, KernelError>
where
    T: Float + Send + Sync,
{
    Validator::validate_operands(a, b)?;

    let order = a.order();
    let mut result = SquareMatrix::zeros(order)?;
    let (a_data, b_data) = (a.as_slice(), b.as_slice());

    result
        .as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(cell, out)| {
            let row = cell / order;
            let col = cell % order;
            *out = dot_row_col(a_data, b_data, order, row, col);
        });

    Ok(result)
}
