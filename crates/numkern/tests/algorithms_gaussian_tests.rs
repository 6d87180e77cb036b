use approx::assert_abs_diff_eq;

use numkern::prelude::*;

#[test]
fn test_known_triangularization() {
    let mut matrix = SquareMatrix::from_vec(
        3,
        vec![
            2.0, 1.0, 1.0, //
            4.0, 3.0, 3.0, //
            8.0, 7.0, 9.0,
        ],
    )
    .unwrap();

    let skipped = triangularize(&mut matrix);

    assert_eq!(skipped, 0);
    let expected = [
        2.0, 1.0, 1.0, //
        0.0, 1.0, 1.0, //
        0.0, 0.0, 2.0,
    ];
    for (got, want) in matrix.as_slice().iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
fn test_below_diagonal_zeroed() {
    let mut matrix = SquareMatrix::from_vec(
        4,
        vec![
            4.0, 2.0, 1.0, 3.0, //
            2.0, 5.0, 2.0, 1.0, //
            1.0, 2.0, 6.0, 2.0, //
            3.0, 1.0, 2.0, 7.0,
        ],
    )
    .unwrap();

    let skipped = triangularize(&mut matrix);

    assert_eq!(skipped, 0);
    for row in 1..4 {
        for col in 0..row {
            assert_eq!(matrix.get(row, col), 0.0, "({row}, {col}) not eliminated");
        }
    }
}

#[test]
fn test_zero_pivot_is_skipped() {
    let mut matrix = SquareMatrix::from_vec(2, vec![0.0, 1.0, 1.0, 1.0]).unwrap();
    let original = matrix.clone();

    let skipped = triangularize(&mut matrix);

    assert_eq!(skipped, 1);
    assert_eq!(matrix, original);
}

#[test]
fn test_single_element_is_noop() {
    let mut matrix = SquareMatrix::from_vec(1, vec![5.0_f64]).unwrap();
    assert_eq!(triangularize(&mut matrix), 0);
    assert_eq!(matrix.get(0, 0), 5.0);
}
