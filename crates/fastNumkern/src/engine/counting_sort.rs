//! Parallel counting sort.
//!
//! ## Purpose
//!
//! This module implements the four-phase parallel counting-sort kernel.
//! The parallel phases (range discovery, local counting, histogram merge)
//! come from this crate; the inherently serial phases (prefix sum, stable
//! placement) are the core crate's, so parallel output is byte-for-byte
//! the serial kernel's output.
//!
//! ## Key concepts
//!
//! * **Phase barriers**: Each phase completes fully before the next
//!   begins; rayon's parallel-for regions provide the join barrier.
//! * **Private histograms**: One local histogram per partition range,
//!   owned by the worker that counts it — no synchronization during
//!   counting.
//! * **Serial tail**: The prefix sum has a loop-carried dependency and the
//!   placement walk both reads and mutates the shared prefix state; both
//!   must not be parallelized.
//!
//! ## Invariants
//!
//! * The sum of all local histogram entries equals the input length.
//! * Output is stable: equal keys keep their relative input order.
//!
//! ## Non-goals
//!
//! * No `by_key` variant here; the parallel kernel mirrors the original
//!   plain-integer pipeline (the core crate provides `by_key` serially).

// External dependencies
use num_traits::PrimInt;
use rayon::prelude::*;

// Internal dependencies
use numkern::internals::algorithms::counting_sort::{
    histogram, key_range, place_stable, prefix_sum_in_place,
};
use numkern::internals::primitives::buffer::alloc_filled;
use numkern::internals::primitives::partition::work_partition;
use numkern::prelude::KernelError;

use crate::engine::reduce::{merge_histograms, par_extremum};

// ============================================================================
// Parallel Kernel
// ============================================================================

/// Stable counting sort of integer keys, with parallel counting phases.
///
/// An empty input yields an empty output (identity, not an error).
pub fn par_counting_sort<K>(input: &[K], workers: usize) -> Result<Vec<K>, KernelError>
where
    K: PrimInt + Send + Sync,
{
    if input.is_empty() {
        return Ok(Vec::new());
    }

    // Phase 1: range discovery (parallel extremum).
    let (min, max) = par_extremum(input, workers)?;
    let range = key_range(min, max)?;

    // Phase 2: local counting, one private histogram per disjoint range.
    let locals: Vec<Vec<usize>> = work_partition(input.len(), workers)
        .into_par_iter()
        .map(|r| histogram(&input[r], min, range, &|key: &K| *key))
        .collect::<Result<_, _>>()?;

    // Phase 3: merge (parallel over buckets) + prefix sum (serial).
    let mut prefix = merge_histograms(&locals, range);
    prefix_sum_in_place(&mut prefix);

    // Phase 4: stable placement into a separate output buffer (serial).
    let mut output = alloc_filled(input.len(), input[0])?;
    place_stable(input, min, &mut prefix, &mut output, &|key: &K| *key);
    Ok(output)
}
