//! Input validation for kernel invocations.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied before any kernel
//! runs: sequence and operand checks for the kernels themselves, and
//! parameter bounds for the parallel execution knobs configured by the
//! extension crate's builder.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Before the kernel**: A failed validation means no partial work was
//!   performed.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not run any kernel.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernelError;
use crate::primitives::matrix::SquareMatrix;

/// Deepest task-spawning recursion the quicksort kernel accepts.
pub const MAX_DEPTH_BUDGET: u32 = 64;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel inputs and execution parameters.
///
/// All methods return `Result<(), KernelError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Kernel Input Validation
    // ========================================================================

    /// Validate that a sequence is non-empty.
    pub fn validate_sequence<T>(seq: &[T]) -> Result<(), KernelError> {
        if seq.is_empty() {
            return Err(KernelError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that two multiplication operands have the same order.
    pub fn validate_operands<T: Float>(
        a: &SquareMatrix<T>,
        b: &SquareMatrix<T>,
    ) -> Result<(), KernelError> {
        if a.order() != b.order() {
            return Err(KernelError::MismatchedOrders {
                left: a.order(),
                right: b.order(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Execution Parameter Validation
    // ========================================================================

    /// Validate the minimum sub-slice length for task spawning.
    pub fn validate_threshold(threshold: usize) -> Result<(), KernelError> {
        if threshold == 0 {
            return Err(KernelError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    /// Validate the quicksort task-spawning depth budget.
    pub fn validate_depth_budget(depth_budget: u32) -> Result<(), KernelError> {
        if depth_budget > MAX_DEPTH_BUDGET {
            return Err(KernelError::InvalidDepthBudget(depth_budget));
        }
        Ok(())
    }

    /// Validate a worker count.
    pub fn validate_workers(workers: usize) -> Result<(), KernelError> {
        if workers == 0 {
            return Err(KernelError::InvalidWorkerCount(workers));
        }
        Ok(())
    }
}
