use rand::prelude::*;

use numkern::prelude::*;

#[test]
fn test_worked_example() {
    assert_eq!(counting_sort(&[5, 3, 8, 3, 1]).unwrap(), vec![1, 3, 3, 5, 8]);
}

#[test]
fn test_all_equal_values_unchanged() {
    assert_eq!(counting_sort(&[7, 7, 7]).unwrap(), vec![7, 7, 7]);
}

#[test]
fn test_single_element() {
    assert_eq!(counting_sort(&[42]).unwrap(), vec![42]);
}

#[test]
fn test_empty_is_identity() {
    assert_eq!(counting_sort::<i32>(&[]).unwrap(), Vec::<i32>::new());
}

#[test]
fn test_negative_keys() {
    assert_eq!(
        counting_sort(&[-3, 5, -7, 0, 5]).unwrap(),
        vec![-7, -3, 0, 5, 5]
    );
}

#[test]
fn test_wide_i64_keys() {
    let input: [i64; 4] = [1_000_000, -1_000_000, 0, 999_999];
    assert_eq!(
        counting_sort(&input).unwrap(),
        vec![-1_000_000, 0, 999_999, 1_000_000]
    );
}

#[test]
fn test_permutation_and_order_properties() {
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<i32> = (0..5000).map(|_| rng.random_range(0..=1000)).collect();

    let sorted = counting_sort(&input).unwrap();

    // Order: ascending at every adjacent pair.
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    // Permutation: same multiset as the input.
    let mut expected = input.clone();
    expected.sort_unstable();
    assert_eq!(sorted, expected);
}

#[test]
fn test_stability_with_tagged_duplicates() {
    let input = [(3, 'a'), (1, 'b'), (3, 'c')];
    let sorted = counting_sort_by_key(&input, |pair| pair.0).unwrap();
    assert_eq!(sorted, vec![(1, 'b'), (3, 'a'), (3, 'c')]);
}

#[test]
fn test_stability_many_duplicates() {
    let input: Vec<(i32, usize)> = [5, 2, 5, 2, 5, 9, 2]
        .iter()
        .enumerate()
        .map(|(position, &key)| (key, position))
        .collect();

    let sorted = counting_sort_by_key(&input, |pair| pair.0).unwrap();

    // Equal keys must keep ascending original positions.
    for window in sorted.windows(2) {
        if window[0].0 == window[1].0 {
            assert!(window[0].1 < window[1].1, "stability violated: {window:?}");
        }
    }
}

#[test]
fn test_full_i128_span_rejected() {
    // The bucket count for this range overflows i128 itself; the guard
    // must reject it instead of wrapping.
    let err = counting_sort(&[i128::MIN, i128::MAX]).unwrap_err();
    assert!(matches!(err, KernelError::InvalidInput(_)), "{err:?}");
}

#[test]
fn test_oversized_i64_span_rejected() {
    let err = counting_sort(&[i64::MIN, i64::MAX]).unwrap_err();
    assert!(matches!(err, KernelError::InvalidInput(_)), "{err:?}");
}

#[test]
fn test_extremum_matches_scan() {
    let (min, max) = extremum(&[5, 3, 8, 3, 1]).unwrap();
    assert_eq!((min, max), (1, 8));
}

#[test]
fn test_extremum_rejects_empty() {
    assert_eq!(extremum::<i32>(&[]).unwrap_err(), KernelError::EmptyInput);
}
