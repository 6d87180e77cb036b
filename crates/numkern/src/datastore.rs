//! Layer 4: Datastore
//!
//! ## Purpose
//!
//! This module is the suite's data collaborator: seeded random generation
//! and file-based persistence for the integer vectors, double vectors, and
//! square matrices the kernels consume. Kernels never call into it; the
//! benchmark harness, examples, and tests materialize inputs here and hand
//! fully owned containers to the kernels.
//!
//! ## Design notes
//!
//! * **Reproducible**: Generation takes an explicit seed (`StdRng`), so
//!   benchmark inputs are identical across runs and worker counts.
//! * **Line-oriented files**: One value per line, row-major for matrices.
//!   `f64` values round-trip exactly through their shortest display form.
//! * **Std only**: This is the only layer touching the filesystem; it is
//!   absent from `no_std` builds.
//!
//! ## Non-goals
//!
//! * This module does not time, sort, or multiply anything.
//! * No binary or structured formats.

// External dependencies
use rand::prelude::*;
use std::fs;
use std::path::Path;
use std::string::String;
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::KernelError;
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Generation
// ============================================================================

/// Seeded random integer vector with values in `[low, high]`.
pub fn generate_int_vector(len: usize, low: i32, high: i32, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(low..=high)).collect()
}

/// Seeded random double vector with values in `[low, high)`.
pub fn generate_double_vector(len: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(low..high)).collect()
}

/// Seeded random square matrix with values in `[0, 1000)`.
pub fn generate_double_matrix(order: usize, seed: u64) -> Result<SquareMatrix<f64>, KernelError> {
    let len = order.saturating_mul(order);
    SquareMatrix::from_vec(order, generate_double_vector(len, 0.0, 1000.0, seed))
}

// ============================================================================
// Persistence
// ============================================================================

/// Save an integer vector, one value per line.
pub fn save_int_vector(vector: &[i32], path: &Path) -> Result<(), KernelError> {
    save_lines(path, vector.iter().map(|v| v.to_string()))
}

/// Load an integer vector of exactly `len` values.
pub fn load_int_vector(path: &Path, len: usize) -> Result<Vec<i32>, KernelError> {
    load_lines(path, len)
}

/// Save a double vector, one value per line.
pub fn save_double_vector(vector: &[f64], path: &Path) -> Result<(), KernelError> {
    save_lines(path, vector.iter().map(|v| v.to_string()))
}

/// Load a double vector of exactly `len` values.
pub fn load_double_vector(path: &Path, len: usize) -> Result<Vec<f64>, KernelError> {
    load_lines(path, len)
}

/// Save a square matrix row-major, one value per line.
pub fn save_double_matrix(matrix: &SquareMatrix<f64>, path: &Path) -> Result<(), KernelError> {
    save_lines(path, matrix.as_slice().iter().map(|v| v.to_string()))
}

/// Load a square matrix of the given order.
pub fn load_double_matrix(path: &Path, order: usize) -> Result<SquareMatrix<f64>, KernelError> {
    let data = load_lines(path, order.saturating_mul(order))?;
    SquareMatrix::from_vec(order, data)
}

// ============================================================================
// Line-Oriented Helpers
// ============================================================================

fn save_lines(path: &Path, values: impl Iterator<Item = String>) -> Result<(), KernelError> {
    let mut contents = String::new();
    for value in values {
        contents.push_str(&value);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| KernelError::Io(format!("{}: {e}", path.display())))
}

fn load_lines<T: std::str::FromStr>(path: &Path, len: usize) -> Result<Vec<T>, KernelError> {
    let contents =
        fs::read_to_string(path).map_err(|e| KernelError::Io(format!("{}: {e}", path.display())))?;

    let mut values = Vec::with_capacity(len);
    for (line_no, line) in contents.lines().take(len).enumerate() {
        let value = line.trim().parse().map_err(|_| {
            KernelError::Io(format!(
                "{}: unparsable value at line {}",
                path.display(),
                line_no + 1
            ))
        })?;
        values.push(value);
    }

    if values.len() != len {
        return Err(KernelError::Io(format!(
            "{}: expected {len} values, found {}",
            path.display(),
            values.len()
        )));
    }
    Ok(values)
}
