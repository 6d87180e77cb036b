//! Stable counting sort over integer keys.
//!
//! ## Purpose
//!
//! This module implements the serial counting-sort kernel and the
//! sequential phases shared with the parallel kernel: key-range sizing,
//! histogram counting, prefix summation, and stable placement. Keeping the
//! phases here guarantees that serial and parallel execution produce
//! identical output.
//!
//! ## Design notes
//!
//! * **Runtime range**: The key range is discovered by scanning, never
//!   assumed a priori.
//! * **Stability**: Placement walks the input from the last element to the
//!   first, writing each element at `prefix[key - min] - 1` and
//!   decrementing. A forward walk would reverse the relative order of
//!   duplicates.
//! * **Separate output buffer**: The backward placement loop is correct
//!   only because it reads the input and writes a distinct output buffer;
//!   an in-place variant would need a different stability argument.
//! * **Generics**: Keys are any `PrimInt`; a `by_key` variant sorts
//!   arbitrary payloads carrying an integer key.
//!
//! ## Key concepts
//!
//! * **Phases**: range discovery → counting → prefix sum → placement. The
//!   prefix sum and placement phases are inherently sequential: every step
//!   of each depends on the previous one.
//! * **Correctness**: after the prefix sum, `prefix[k]` counts elements
//!   with key <= k, i.e. one past the last output slot for key `k`;
//!   filling back-to-front with decrements yields the stable order.
//!
//! ## Invariants
//!
//! * The histogram has exactly `max - min + 1` buckets and its entries sum
//!   to the number of elements counted.
//! * The output is a permutation of the input.
//!
//! ## Non-goals
//!
//! * This module does not parallelize any phase (see `fastNumkern`).
//! * This module does not bound the key range; an absurdly wide range is a
//!   usage error surfaced as `InvalidInput` or `AllocationFailure`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::buffer::alloc_filled;
use crate::primitives::errors::KernelError;

// ============================================================================
// Key Range
// ============================================================================

/// Number of histogram buckets for keys in `[min, max]`.
///
/// Keys must be representable as `i128`. A bucket count that does not fit
/// in `usize` is a usage error, not an engine failure.
pub fn key_range<K: PrimInt>(min: K, max: K) -> Result<usize, KernelError> {
    let (min_i, max_i) = key_bounds(min, max)?;
    // The span itself can exceed i128 for extreme bounds; checked
    // arithmetic keeps the bucket-count guard sound.
    let span = max_i
        .checked_sub(min_i)
        .and_then(|width| width.checked_add(1))
        .filter(|&span| span <= usize::MAX as i128)
        .ok_or_else(|| {
            KernelError::InvalidInput(format!(
                "key range [{min_i}, {max_i}] needs more histogram buckets than memory holds"
            ))
        })?;
    Ok(span as usize)
}

fn key_bounds<K: PrimInt>(min: K, max: K) -> Result<(i128, i128), KernelError> {
    match (min.to_i128(), max.to_i128()) {
        (Some(min_i), Some(max_i)) => Ok((min_i, max_i)),
        _ => Err(KernelError::InvalidInput(
            "key does not fit in i128".into(),
        )),
    }
}

/// Histogram bucket for `key`, given the minimum key as `i128`.
#[inline]
fn bucket_of<K: PrimInt>(key: K, min_i: i128) -> usize {
    (key.to_i128().unwrap_or(min_i) - min_i) as usize
}

// ============================================================================
// Sequential Phases
// ============================================================================

/// Minimum and maximum of a sequence in one sequential scan.
pub fn extremum<T: PartialOrd + Copy>(seq: &[T]) -> Result<(T, T), KernelError> {
    let (&first, rest) = seq.split_first().ok_or(KernelError::EmptyInput)?;
    let mut min = first;
    let mut max = first;
    for &value in rest {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Ok((min, max))
}

/// Count key occurrences of `items` into a fresh histogram of `range` buckets.
pub fn histogram<T, K, F>(
    items: &[T],
    min: K,
    range: usize,
    key: &F,
) -> Result<Vec<usize>, KernelError>
where
    K: PrimInt,
    F: Fn(&T) -> K,
{
    let min_i = min.to_i128().unwrap_or(0);
    let mut counts = alloc_filled(range, 0usize)?;
    for item in items {
        counts[bucket_of(key(item), min_i)] += 1;
    }
    Ok(counts)
}

/// Running prefix sum over the histogram buckets, in place.
///
/// Each bucket depends on the previous one; this phase must stay serial.
pub fn prefix_sum_in_place(counts: &mut [usize]) {
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }
}

/// Stable placement phase: fill `output` back-to-front from `input`.
///
/// `prefix` must hold the inclusive prefix sums of the key histogram; it
/// is consumed (decremented) during placement. `output` must be a buffer
/// distinct from `input` with the same length.
pub fn place_stable<T, K, F>(input: &[T], min: K, prefix: &mut [usize], output: &mut [T], key: &F)
where
    T: Clone,
    K: PrimInt,
    F: Fn(&T) -> K,
{
    debug_assert_eq!(input.len(), output.len());
    let min_i = min.to_i128().unwrap_or(0);
    for item in input.iter().rev() {
        let bucket = bucket_of(key(item), min_i);
        output[prefix[bucket] - 1] = item.clone();
        prefix[bucket] -= 1;
    }
}

// ============================================================================
// Serial Kernel
// ============================================================================

/// Stable counting sort of integer keys, ascending.
///
/// An empty input yields an empty output (identity, not an error).
pub fn sort<K: PrimInt>(input: &[K]) -> Result<Vec<K>, KernelError> {
    sort_by_key(input, |key| *key)
}

/// Stable counting sort of arbitrary payloads by an integer key.
///
/// Payloads with equal keys preserve their relative input order.
pub fn sort_by_key<T, K, F>(input: &[T], key: F) -> Result<Vec<T>, KernelError>
where
    T: Clone,
    K: PrimInt,
    F: Fn(&T) -> K,
{
    if input.is_empty() {
        return Ok(Vec::new());
    }

    // Phase 1: range discovery.
    let mut min = key(&input[0]);
    let mut max = min;
    for item in &input[1..] {
        let k = key(item);
        if k < min {
            min = k;
        }
        if k > max {
            max = k;
        }
    }
    let range = key_range(min, max)?;

    // Phase 2: counting.
    let mut prefix = histogram(input, min, range, &key)?;

    // Phase 3: prefix sum (serial by necessity).
    prefix_sum_in_place(&mut prefix);

    // Phase 4: stable placement into a separate output buffer.
    let mut output = alloc_filled(input.len(), input[0].clone())?;
    place_stable(input, min, &mut prefix, &mut output, &key);
    Ok(output)
}
