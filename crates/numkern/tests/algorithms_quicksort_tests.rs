use rand::prelude::*;

use numkern::prelude::*;

#[test]
fn test_partition_invariant() {
    let mut values = vec![9.0_f64, 1.0, 8.0, 2.0, 7.0, 3.0, 5.0];
    let pi = partition(&mut values).unwrap();
    let pivot = values[pi];

    assert_eq!(pivot, 5.0);
    assert!(values[..pi].iter().all(|&v| v <= pivot));
    assert!(values[pi + 1..].iter().all(|&v| v >= pivot));
}

#[test]
fn test_partition_rejects_empty() {
    let mut values: Vec<f64> = vec![];
    assert_eq!(partition(&mut values).unwrap_err(), KernelError::EmptyInput);
}

#[test]
fn test_partition_invariant_random() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let mut values: Vec<f64> = (0..100).map(|_| rng.random_range(0.0..1000.0)).collect();
        let pi = partition(&mut values).unwrap();
        let pivot = values[pi];
        assert!(values[..pi].iter().all(|&v| v <= pivot));
        assert!(values[pi + 1..].iter().all(|&v| v >= pivot));
    }
}

#[test]
fn test_already_sorted_unchanged() {
    let mut values = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
    quicksort(&mut values);
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_reverse_sorted() {
    let mut values = vec![5.0_f64, 4.0, 3.0, 2.0, 1.0];
    quicksort(&mut values);
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_single_element_unchanged() {
    let mut values = vec![3.5_f64];
    quicksort(&mut values);
    assert_eq!(values, vec![3.5]);
}

#[test]
fn test_empty_is_noop() {
    let mut values: Vec<f64> = vec![];
    quicksort(&mut values);
    assert!(values.is_empty());
}

#[test]
fn test_duplicates() {
    let mut values = vec![2.0_f64, 1.0, 2.0, 1.0, 2.0];
    quicksort(&mut values);
    assert_eq!(values, vec![1.0, 1.0, 2.0, 2.0, 2.0]);
}

#[test]
fn test_matches_standard_sort() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut values: Vec<f64> = (0..2000).map(|_| rng.random_range(0.0..1000.0)).collect();
    let mut expected = values.clone();

    quicksort(&mut values);
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_eq!(values, expected);
}
