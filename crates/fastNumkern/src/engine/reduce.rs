//! Parallel reduction primitives.
//!
//! ## Purpose
//!
//! This module provides the two reductions the parallel counting-sort
//! kernel is built from: a parallel extremum scan and a data-parallel
//! histogram merge.
//!
//! ## Design notes
//!
//! * **Private then combine**: Each worker scans a disjoint contiguous
//!   range from `work_partition` with a private running min/max pair; the
//!   pairs are folded into the global result under a single mutex. The
//!   combine is commutative, so the result is identical to a sequential
//!   scan for any worker count and completion order.
//! * **Bucketwise merge**: `combined[i]` depends only on `local[w][i]`
//!   across workers — no cross-bucket dependency — so the merge
//!   parallelizes over the bucket index with no synchronization beyond
//!   partitioning.
//!
//! ## Invariants
//!
//! * `par_extremum` equals the serial `extremum` on the same input.
//! * The merged histogram is the elementwise sum of the locals; its total
//!   equals the sum of all local totals.
//!
//! ## Non-goals
//!
//! * This module does not build local histograms (the counting-sort
//!   kernel does, one per partition range).

// External dependencies
use rayon::prelude::*;
use std::sync::Mutex;

// Internal dependencies
use numkern::internals::primitives::partition::work_partition;
use numkern::prelude::KernelError;

// ============================================================================
// Parallel Extremum
// ============================================================================

/// Minimum and maximum of a non-empty sequence, computed in parallel.
pub fn par_extremum<T>(seq: &[T], workers: usize) -> Result<(T, T), KernelError>
where
    T: PartialOrd + Copy + Send + Sync,
{
    if seq.is_empty() {
        return Err(KernelError::EmptyInput);
    }

    // The single point of mutual exclusion in the suite: two scalars
    // guarded by one critical section.
    let global = Mutex::new((seq[0], seq[0]));

    work_partition(seq.len(), workers)
        .into_par_iter()
        .for_each(|range| {
            let chunk = &seq[range];
            let mut local_min = chunk[0];
            let mut local_max = chunk[0];
            for &value in &chunk[1..] {
                if value < local_min {
                    local_min = value;
                }
                if value > local_max {
                    local_max = value;
                }
            }

            let mut result = global.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if local_min < result.0 {
                result.0 = local_min;
            }
            if local_max > result.1 {
                result.1 = local_max;
            }
        });

    Ok(global
        .into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner()))
}

// ============================================================================
// Histogram Merge
// ============================================================================

/// Elementwise sum of per-worker histograms, parallel over buckets.
///
/// Every local histogram must have exactly `range` buckets.
pub fn merge_histograms(locals: &[Vec<usize>], range: usize) -> Vec<usize> {
    debug_assert!(locals.iter().all(|local| local.len() == range));

    (0..range)
        .into_par_iter()
        .map(|bucket| locals.iter().map(|local| local[bucket]).sum())
        .collect()
}
