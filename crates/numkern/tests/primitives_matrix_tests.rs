use numkern::prelude::*;

#[test]
fn test_index_is_row_major() {
    assert_eq!(index(0, 0, 5), 0);
    assert_eq!(index(0, 4, 5), 4);
    assert_eq!(index(2, 3, 5), 13);
    assert_eq!(index(4, 4, 5), 24);
}

#[test]
fn test_from_vec_rejects_wrong_length() {
    let result = SquareMatrix::from_vec(3, vec![1.0_f64; 8]);
    assert_eq!(
        result.unwrap_err(),
        KernelError::MismatchedDimensions { expected: 9, got: 8 }
    );
}

#[test]
fn test_from_vec_rejects_zero_order() {
    let result = SquareMatrix::<f64>::from_vec(0, vec![]);
    assert_eq!(result.unwrap_err(), KernelError::InvalidOrder(0));
}

#[test]
fn test_zeros_rejects_zero_order() {
    assert_eq!(
        SquareMatrix::<f64>::zeros(0).unwrap_err(),
        KernelError::InvalidOrder(0)
    );
}

#[test]
fn test_identity_diagonal() {
    let identity = SquareMatrix::<f64>::identity(4).unwrap();
    for row in 0..4 {
        for col in 0..4 {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_eq!(identity.get(row, col), expected);
        }
    }
}

#[test]
fn test_get_set_round_trip() {
    let mut matrix = SquareMatrix::<f64>::zeros(3).unwrap();
    matrix.set(1, 2, 42.5);
    assert_eq!(matrix.get(1, 2), 42.5);
    assert_eq!(matrix.as_slice()[index(1, 2, 3)], 42.5);
}

#[test]
fn test_into_vec_preserves_layout() {
    let data = vec![1.0, 2.0, 3.0, 4.0];
    let matrix = SquareMatrix::from_vec(2, data.clone()).unwrap();
    assert_eq!(matrix.into_vec(), data);
}
