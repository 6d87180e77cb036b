//! Row-major square matrix container.
//!
//! ## Purpose
//!
//! This module defines the dense `order x order` matrix type shared by the
//! multiplication and triangularization kernels, together with the single
//! addressing function used for all row-major element access.
//!
//! ## Design notes
//!
//! * **Row-major**: Element `(row, col)` lives at linear offset
//!   `row * stride + col`.
//! * **One addressing path**: [`index`] replaces ad-hoc offset arithmetic;
//!   every matrix operation in the workspace goes through it.
//! * **Fallible construction**: Backing storage is reserved through
//!   [`alloc_filled`], so an oversized order reports
//!   `AllocationFailure` instead of aborting.
//!
//! ## Invariants
//!
//! * `data.len() == order * order` at all times.
//! * `order >= 1`; a zero order is rejected at construction.
//!
//! ## Non-goals
//!
//! * This module does not implement any linear-algebra kernels.
//! * This module does not support rectangular matrices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::alloc_filled;
use crate::primitives::errors::KernelError;

// ============================================================================
// Addressing
// ============================================================================

/// Linear offset of element `(row, col)` in a row-major buffer.
///
/// Contract: `row < order` and `col < order` where `stride == order`; the
/// returned offset is then within `0..order * order`. Violations are
/// caught by `debug_assert` in debug builds.
#[inline]
pub fn index(row: usize, col: usize, stride: usize) -> usize {
    debug_assert!(row < stride && col < stride);
    row * stride + col
}

// ============================================================================
// Square Matrix
// ============================================================================

/// Dense `order x order` matrix in row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    order: usize,
    data: Vec<T>,
}

impl<T: Float> SquareMatrix<T> {
    /// Wrap an existing row-major buffer.
    pub fn from_vec(order: usize, data: Vec<T>) -> Result<Self, KernelError> {
        if order == 0 {
            return Err(KernelError::InvalidOrder(order));
        }
        let expected = checked_len(order)?;
        if data.len() != expected {
            return Err(KernelError::MismatchedDimensions {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { order, data })
    }

    /// All-zero matrix of the given order.
    pub fn zeros(order: usize) -> Result<Self, KernelError> {
        if order == 0 {
            return Err(KernelError::InvalidOrder(order));
        }
        let len = checked_len(order)?;
        Ok(Self {
            order,
            data: alloc_filled(len, T::zero())?,
        })
    }

    /// Identity matrix of the given order.
    pub fn identity(order: usize) -> Result<Self, KernelError> {
        let mut matrix = Self::zeros(order)?;
        for i in 0..order {
            matrix.data[index(i, i, order)] = T::one();
        }
        Ok(matrix)
    }

    /// Matrix order (number of rows and columns).
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Row-major view of the backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the backing storage.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning the backing storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[index(row, col, self.order)]
    }

    /// Overwrite the element at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[index(row, col, self.order)] = value;
    }
}

/// `order * order`, rejecting overflow on absurd orders.
fn checked_len(order: usize) -> Result<usize, KernelError> {
    order
        .checked_mul(order)
        .ok_or_else(|| KernelError::InvalidInput(format!("matrix order {order} overflows usize")))
}
