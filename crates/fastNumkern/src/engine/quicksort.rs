//! Task-parallel quicksort.
//!
//! ## Purpose
//!
//! This module implements the depth-bounded task-parallel quicksort. The
//! Lomuto partition step is the core crate's; this module only decides
//! whether the two sides of a partition recurse as concurrent tasks or
//! sequentially.
//!
//! ## Design notes
//!
//! * **Structured concurrency**: The two sub-tasks are a `rayon::join`
//!   pair; the parent frame blocks at the join until both complete. There
//!   is no detached task state.
//! * **Disjoint by construction**: Sub-slices come from `split_at_mut`
//!   around the pivot, so concurrent tasks can never touch overlapping
//!   memory; no locking is needed anywhere in the kernel.
//! * **Depth budget**: Spawning is allowed only while the budget is
//!   positive, and the budget decrements on every level — including
//!   sequential fallback — capping total fan-out at O(worker_count) leaf
//!   tasks.
//! * **Spawn threshold**: Small slices recurse sequentially regardless of
//!   budget; task-creation overhead dominates below the threshold.
//!
//! ## Invariants
//!
//! * The sorted result is independent of task scheduling order: each
//!   task's effect is confined to its own disjoint sub-slice.
//!
//! ## Non-goals
//!
//! * No stability guarantee; no allocation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use numkern::internals::algorithms::quicksort::partition;

// ============================================================================
// Parallel Kernel
// ============================================================================

/// Sort `seq` ascending in place, spawning tasks while the depth budget
/// and the spawn `threshold` allow.
pub fn par_quicksort<T>(seq: &mut [T], depth_budget: u32, threshold: usize)
where
    T: Float + Send,
{
    if seq.len() <= 1 {
        return;
    }

    let len = seq.len();
    let pivot = partition(seq);
    let (low, rest) = seq.split_at_mut(pivot);
    let high = &mut rest[1..];
    let next_budget = depth_budget.saturating_sub(1);

    if depth_budget > 0 && len > threshold {
        rayon::join(
            || par_quicksort(low, next_budget, threshold),
            || par_quicksort(high, next_budget, threshold),
        );
    } else {
        par_quicksort(low, next_budget, threshold);
        par_quicksort(high, next_budget, threshold);
    }
}
