use numkern::prelude::*;

fn sample_matrix(order: usize, seed: u64) -> SquareMatrix<f64> {
    let data = (0..order * order)
        .map(|i| ((i as u64).wrapping_mul(seed + 1) % 97) as f64)
        .collect();
    SquareMatrix::from_vec(order, data).unwrap()
}

#[test]
fn test_identity_times_b_equals_b() {
    let identity = SquareMatrix::<f64>::identity(3).unwrap();
    let b = sample_matrix(3, 5);
    assert_eq!(multiply(&identity, &b).unwrap(), b);
}

#[test]
fn test_matches_brute_force_reference() {
    let order = 3;
    let a = sample_matrix(order, 2);
    let b = sample_matrix(order, 9);
    let c = multiply(&a, &b).unwrap();

    for i in 0..order {
        for j in 0..order {
            let mut expected = 0.0;
            for k in 0..order {
                expected += a.get(i, k) * b.get(k, j);
            }
            assert_eq!(c.get(i, j), expected, "cell ({i}, {j})");
        }
    }
}

#[test]
fn test_one_by_one() {
    let a = SquareMatrix::from_vec(1, vec![3.0_f64]).unwrap();
    let b = SquareMatrix::from_vec(1, vec![4.0_f64]).unwrap();
    assert_eq!(multiply(&a, &b).unwrap().get(0, 0), 12.0);
}

#[test]
fn test_rejects_mismatched_orders() {
    let a = SquareMatrix::<f64>::identity(3).unwrap();
    let b = SquareMatrix::<f64>::identity(4).unwrap();
    assert_eq!(
        multiply(&a, &b).unwrap_err(),
        KernelError::MismatchedOrders { left: 3, right: 4 }
    );
}
