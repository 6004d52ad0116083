use super::*;

#[test]
fn new_is_zero_filled_test() {
    let m: Matrix<f64> = Matrix::new(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.as_slice(), &[0.0; 6]);
}

#[test]
fn default_is_empty_test() {
    let m: Matrix<i32> = Matrix::default();
    assert_eq!(m.shape(), (0, 0));
    assert!(m.is_empty());
    assert_eq!(m, Matrix::new(0, 0));
}

#[test]
fn from_vec_rejects_wrong_length_test() {
    let result = Matrix::from_vec(vec![1, 2, 3, 4, 5], 2, 3);
    assert_eq!(
        result,
        Err(MatrixError::ConstructionMismatch {
            rows: 2,
            columns: 3,
            len: 5
        })
    );

    // rows * columns overflowing usize is a mismatch, not a panic
    let overflow = Matrix::from_vec(vec![1], usize::MAX, 2);
    assert!(matches!(
        overflow,
        Err(MatrixError::ConstructionMismatch { len: 1, .. })
    ));
}

#[test]
fn row_major_layout_test() {
    let m = sample_2x3();
    assert_eq!(m.get(0, 0), 1);
    assert_eq!(m.get(0, 2), 3);
    assert_eq!(m.get(1, 0), 4);
    assert_eq!(m[(1, 2)], 6);
}

#[test]
fn set_test() {
    let mut m = sample_2x3();
    m.set(1, 1, 50);
    m[(0, 2)] = 30;
    assert_eq!(m.as_slice(), &[1, 2, 30, 4, 50, 6]);
}

#[test]
fn row_and_col_test() {
    let m = sample_2x3();
    assert_eq!(m.row(0), vec![1, 2, 3]);
    assert_eq!(m.row(1), vec![4, 5, 6]);
    assert_eq!(m.col(0), vec![1, 4]);
    assert_eq!(m.col(2), vec![3, 6]);
    assert_eq!(m.row_slice(1), &[4, 5, 6]);
}

#[test]
fn row_col_and_get_agree_test() {
    let m = Matrix::from_vec((0..20).collect(), 4, 5).unwrap();
    for i in 0..m.rows() {
        let row = m.row(i);
        for j in 0..m.columns() {
            assert_eq!(row[j], m.get(i, j));
            assert_eq!(m.col(j)[i], m.get(i, j));
        }
    }
}

#[test]
fn try_get_out_of_range_test() {
    let m = sample_2x3();
    assert_eq!(m.try_get(1, 2), Ok(6));
    // (0, 3) maps to flat index 3, which exists, but the column is out of range
    assert_eq!(
        m.try_get(0, 3),
        Err(MatrixError::OutOfRange {
            row: 0,
            column: 3,
            shape: (2, 3)
        })
    );
    assert!(m.try_get(2, 0).is_err());
}

#[test]
fn try_set_out_of_range_leaves_matrix_untouched_test() {
    let mut m = sample_2x3();
    assert!(m.try_set(5, 5, 100).is_err());
    assert_eq!(m, sample_2x3());

    m.try_set(0, 1, 100).unwrap();
    assert_eq!(m.get(0, 1), 100);
}

#[test]
#[should_panic(expected = "Index out of range")]
fn get_out_of_range_panics_test() {
    sample_2x3().get(0, 3);
}

#[test]
#[should_panic(expected = "row index 2 out of range")]
fn row_out_of_range_panics_test() {
    sample_2x3().row(2);
}

#[test]
#[should_panic(expected = "column index 3 out of range")]
fn col_out_of_range_panics_test() {
    sample_2x3().col(3);
}

#[test]
fn copy_is_independent_test() {
    let original = sample_2x3();
    let mut copy = original.copy();
    assert_eq!(copy, original);

    copy.set(0, 0, 99);
    assert_eq!(original.get(0, 0), 1);
    assert_ne!(copy, original);
}

#[test]
fn apply_test() {
    let mut m = sample_2x3();
    m.apply(|x| x * x);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.as_slice(), &[1, 4, 9, 16, 25, 36]);
}

#[test]
fn apply_identity_is_noop_test() {
    let mut m = Matrix::from_vec(vec![0.5, -1.25, 3.0, 7.5], 2, 2).unwrap();
    let before = m.copy();
    m.apply(|x| x);
    assert_eq!(m, before);
}

#[test]
fn equality_requires_same_shape_test() {
    let a = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
    let b = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 3, 2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn identity_test() {
    let i: Matrix<i32> = Matrix::identity(3);
    assert_eq!(i.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
}

#[test]
fn describe_test() {
    assert_eq!(sample_2x3().describe(), "1, 2, 3\n4, 5, 6\n");
    assert_eq!(format!("{}", sample_3x2()), "7, 8\n9, 10\n11, 12\n");

    let column = Matrix::from_vec(vec![0.5, 1.5], 2, 1).unwrap();
    assert_eq!(column.describe(), "0.5\n1.5\n");

    let empty: Matrix<i32> = Matrix::default();
    assert_eq!(empty.describe(), "");
}
