//! Parallel kernels must reproduce the serial reference output exactly.

use rand::prelude::*;

use fastNumkern::prelude::*;
use numkern::prelude as serial;

fn random_ints(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..=1000)).collect()
}

fn random_doubles(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0.0..1000.0)).collect()
}

fn random_matrix(order: usize, seed: u64) -> SquareMatrix<f64> {
    SquareMatrix::from_vec(order, random_doubles(order * order, seed)).unwrap()
}

#[test]
fn test_counting_sort_matches_serial() {
    let input = random_ints(5000, 29);
    let expected = serial::counting_sort(&input).unwrap();

    let kernels = Kernels::new().unwrap();
    assert_eq!(kernels.counting_sort(&input).unwrap(), expected);
}

#[test]
fn test_counting_sort_worked_example() {
    let kernels = Kernels::new().unwrap();
    assert_eq!(
        kernels.counting_sort(&[5, 3, 8, 3, 1]).unwrap(),
        vec![1, 3, 3, 5, 8]
    );
}

#[test]
fn test_counting_sort_empty_and_single() {
    let kernels = Kernels::new().unwrap();
    assert_eq!(kernels.counting_sort::<i32>(&[]).unwrap(), Vec::<i32>::new());
    assert_eq!(kernels.counting_sort(&[9]).unwrap(), vec![9]);
    assert_eq!(kernels.counting_sort(&[7, 7, 7]).unwrap(), vec![7, 7, 7]);
}

#[test]
fn test_quicksort_matches_serial() {
    let input = random_doubles(3000, 31);

    let mut expected = input.clone();
    serial::quicksort(&mut expected);

    // A low threshold with an ample budget forces the spawning path.
    let kernels = Kernels::builder()
        .threshold(16)
        .depth_budget(6)
        .build()
        .unwrap();
    let mut parallel = input.clone();
    kernels.quicksort(&mut parallel);

    assert_eq!(parallel, expected);
}

#[test]
fn test_quicksort_sorted_and_single() {
    let kernels = Kernels::new().unwrap();

    let mut sorted = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
    kernels.quicksort(&mut sorted);
    assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let mut single = vec![2.5_f64];
    kernels.quicksort(&mut single);
    assert_eq!(single, vec![2.5]);
}

#[test]
fn test_multiply_bit_identical_to_serial() {
    let a = random_matrix(17, 41);
    let b = random_matrix(17, 43);

    let expected = serial::multiply(&a, &b).unwrap();
    let kernels = Kernels::new().unwrap();
    let parallel = kernels.multiply(&a, &b).unwrap();

    // Accumulation order never changes, so equality is exact.
    assert_eq!(parallel, expected);
}

#[test]
fn test_multiply_identity() {
    let identity = SquareMatrix::<f64>::identity(3).unwrap();
    let b = random_matrix(3, 47);

    let kernels = Kernels::new().unwrap();
    assert_eq!(kernels.multiply(&identity, &b).unwrap(), b);
}

#[test]
fn test_multiply_rejects_mismatched_orders() {
    let a = SquareMatrix::<f64>::identity(2).unwrap();
    let b = SquareMatrix::<f64>::identity(3).unwrap();

    let kernels = Kernels::new().unwrap();
    assert_eq!(
        kernels.multiply(&a, &b).unwrap_err(),
        KernelError::MismatchedOrders { left: 2, right: 3 }
    );
}
