//! Error types for kernel operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while running
//! the numeric kernels, including input validation, parameter constraints,
//! and buffer allocation failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty sequences, zero matrix orders, mismatched dimensions.
//! 2. **Parameter validation**: Invalid spawn threshold, depth budget, or worker count.
//! 3. **Resource failures**: Buffer allocation, thread-pool construction, file I/O.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * A kernel that returns an error has written nothing to caller-visible outputs.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// An empty sequence was passed where a non-empty one is required.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Matrix order must be at least 1.
    InvalidOrder(usize),

    /// Matrix operands must have the same order.
    MismatchedOrders {
        /// Order of the left operand.
        left: usize,
        /// Order of the right operand.
        right: usize,
    },

    /// Matrix buffer length must equal `order * order`.
    MismatchedDimensions {
        /// Expected buffer length (`order * order`).
        expected: usize,
        /// Actual buffer length provided.
        got: usize,
    },

    /// A required buffer (histogram, output array, result matrix) could not be obtained.
    AllocationFailure {
        /// Number of bytes that could not be reserved.
        bytes: usize,
    },

    /// Spawn threshold must be at least 1 element.
    InvalidThreshold(usize),

    /// Depth budget exceeds the supported maximum.
    InvalidDepthBudget(u32),

    /// Worker count must be at least 1.
    InvalidWorkerCount(usize),

    /// A dedicated thread pool could not be constructed.
    ThreadPool(String),

    /// A datastore file could not be read, written, or parsed.
    Io(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidOrder(order) => {
                write!(f, "Invalid matrix order: {order} (must be at least 1)")
            }
            Self::MismatchedOrders { left, right } => {
                write!(
                    f,
                    "Order mismatch: left operand is {left}x{left}, right is {right}x{right}"
                )
            }
            Self::MismatchedDimensions { expected, got } => {
                write!(
                    f,
                    "Dimension mismatch: matrix buffer has {got} elements, expected {expected}"
                )
            }
            Self::AllocationFailure { bytes } => {
                write!(f, "Allocation failure: could not reserve {bytes} bytes")
            }
            Self::InvalidThreshold(threshold) => {
                write!(f, "Invalid spawn threshold: {threshold} (must be at least 1)")
            }
            Self::InvalidDepthBudget(depth) => {
                write!(f, "Invalid depth budget: {depth} (must be at most 64)")
            }
            Self::InvalidWorkerCount(workers) => {
                write!(f, "Invalid worker count: {workers} (must be at least 1)")
            }
            Self::ThreadPool(msg) => write!(f, "Thread pool construction failed: {msg}"),
            Self::Io(msg) => write!(f, "Datastore I/O error: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KernelError {}
