//! In-place quicksort with Lomuto partitioning.
//!
//! ## Purpose
//!
//! This module implements the Lomuto partition step and the serial
//! recursive quicksort built on it. The partition step is shared with the
//! task-parallel kernel in `fastNumkern`, which recurses over the two
//! disjoint sub-slices concurrently.
//!
//! ## Design notes
//!
//! * **Lomuto scheme**: The last element of the slice is the pivot; a
//!   boundary index tracks elements known to be <= pivot during a single
//!   left-to-right scan, and the pivot is swapped into its final position.
//! * **Slices, not indices**: Recursion splits the slice with
//!   `split_at_mut` around the pivot, so sub-range disjointness is
//!   enforced by the borrow checker rather than by index arithmetic.
//! * **Unstable**: No ordering guarantee among equal elements.
//!
//! ## Invariants
//!
//! * After `partition` returns `pi`, every element at an index below `pi`
//!   is <= the pivot value and every element above is >= it, with the
//!   pivot itself at `pi`.
//! * The two recursive sub-slices are disjoint and exclude the pivot.
//!
//! ## Non-goals
//!
//! * This module does not spawn tasks (see `fastNumkern`).
//! * This module does not allocate; sorting is strictly in place.

// External dependencies
use num_traits::Float;

// ============================================================================
// Partition
// ============================================================================

/// Lomuto partition around the last element of `seq`.
///
/// Returns the pivot's final index. `seq` must be non-empty.
pub fn partition<T: Float>(seq: &mut [T]) -> usize {
    debug_assert!(!seq.is_empty());
    let high = seq.len() - 1;
    let pivot = seq[high];

    // Boundary of the "known <= pivot" region.
    let mut boundary = 0;
    for j in 0..high {
        if seq[j] <= pivot {
            seq.swap(boundary, j);
            boundary += 1;
        }
    }
    seq.swap(boundary, high);
    boundary
}

// ============================================================================
// Serial Kernel
// ============================================================================

/// Sort `seq` ascending, in place.
pub fn sort<T: Float>(seq: &mut [T]) {
    if seq.len() <= 1 {
        return;
    }
    let pivot = partition(seq);
    let (low, rest) = seq.split_at_mut(pivot);
    sort(low);
    sort(&mut rest[1..]);
}
