//! Work partitioning for parallel index spaces.
//!
//! ## Purpose
//!
//! This module splits a linear index space into disjoint, contiguous
//! sub-ranges, one per worker. Parallel kernels assign each sub-range to
//! exactly one unit of work, so concurrently running workers never touch
//! overlapping indices.
//!
//! ## Design notes
//!
//! * **Explicit**: Partitioning is a pure function of `(total, workers)`,
//!   decoupled from any threading runtime's worker-indexing scheme.
//! * **Balanced**: Range lengths differ by at most one element.
//! * **Dense**: Empty ranges are never produced; the partition is capped
//!   at `total` ranges.
//!
//! ## Invariants
//!
//! * The returned ranges are pairwise disjoint.
//! * Concatenated in order, the ranges cover exactly `0..total`.
//! * Each range is non-empty.
//!
//! ## Non-goals
//!
//! * This module does not execute work or interact with a thread pool.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Range;

// ============================================================================
// Partitioning
// ============================================================================

/// Split `0..total` into at most `workers` disjoint, contiguous ranges.
///
/// The first `total % workers` ranges are one element longer than the
/// rest. A `workers` of zero is treated as one. When `workers > total`,
/// exactly `total` single-element ranges are returned; for `total == 0`
/// the result is empty.
pub fn work_partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1).min(total);
    if workers == 0 {
        return Vec::new();
    }

    let base = total / workers;
    let extra = total % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for w in 0..workers {
        let len = base + usize::from(w < extra);
        ranges.push(start..start + len);
        start += len;
    }

    ranges
}
