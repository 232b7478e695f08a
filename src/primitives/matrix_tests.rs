pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = RatingMatrix::from_vec(2, 3, vec![3.0, 0.0, 0.0, 1.0, 2.0, 0.0])
        .expect("test data has correct dimensions: 2*3=6 counts");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 3.0).abs() < 1e-6);
    assert!((m.get(1, 1) - 2.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_wrong_length() {
    let result = RatingMatrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(AcuerdoError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_from_vec_negative_count() {
    let result = RatingMatrix::from_vec(1, 2, vec![2.0, -1.0]);
    assert!(result.is_err());
}

#[test]
fn test_from_vec_non_finite_count() {
    let result = RatingMatrix::from_vec(1, 2, vec![f32::NAN, 1.0]);
    assert!(result.is_err());
}

#[test]
fn test_from_rows() {
    let m = RatingMatrix::from_rows(&[vec![3.0, 0.0], vec![1.0, 2.0], vec![0.0, 3.0]])
        .expect("rows are rectangular");
    assert_eq!(m.shape(), (3, 2));
    assert!((m.get(2, 1) - 3.0).abs() < 1e-6);
}

#[test]
fn test_from_rows_empty() {
    let result = RatingMatrix::from_rows(&[]);
    assert!(matches!(
        result,
        Err(AcuerdoError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_from_rows_ragged() {
    let result = RatingMatrix::from_rows(&[vec![1.0, 2.0], vec![1.0]]);
    assert!(matches!(
        result,
        Err(AcuerdoError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_zeros() {
    let m = RatingMatrix::zeros(2, 4);
    assert_eq!(m.shape(), (2, 4));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_get_set() {
    let mut m = RatingMatrix::zeros(2, 2);
    m.set(1, 0, 5.0);
    assert!((m.get(1, 0) - 5.0).abs() < 1e-6);
    assert!((m.get(0, 0) - 0.0).abs() < 1e-6);
}

#[test]
fn test_row() {
    let m = RatingMatrix::from_rows(&[vec![1.0, 2.0, 0.0], vec![0.0, 0.0, 3.0]])
        .expect("rows are rectangular");
    assert_eq!(m.row(0), &[1.0, 2.0, 0.0]);
    assert_eq!(m.row(1), &[0.0, 0.0, 3.0]);
}

#[test]
fn test_row_sum_and_column_sum() {
    let m = RatingMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 0.0]])
        .expect("rows are rectangular");
    assert!((m.row_sum(0) - 3.0).abs() < 1e-6);
    assert!((m.row_sum(1) - 3.0).abs() < 1e-6);
    assert!((m.column_sum(0) - 4.0).abs() < 1e-6);
    assert!((m.column_sum(1) - 2.0).abs() < 1e-6);
}

#[test]
fn test_raters_per_subject() {
    let m = RatingMatrix::from_rows(&[vec![2.0, 1.0], vec![0.0, 3.0]])
        .expect("rows are rectangular");
    let n = m.raters_per_subject().expect("row sums are constant");
    assert!((n - 3.0).abs() < 1e-6);
}

#[test]
fn test_raters_per_subject_mismatch() {
    let m = RatingMatrix::from_rows(&[vec![2.0, 1.0], vec![0.0, 2.0]])
        .expect("rows are rectangular");
    assert!(matches!(
        m.raters_per_subject(),
        Err(AcuerdoError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_raters_per_subject_empty() {
    let m = RatingMatrix::zeros(0, 0);
    assert!(m.raters_per_subject().is_err());
}

#[test]
fn test_serde_round_trip() {
    let m = RatingMatrix::from_rows(&[vec![2.0, 1.0], vec![0.0, 3.0]])
        .expect("rows are rectangular");
    let json = serde_json::to_string(&m).expect("matrix serializes");
    let back: RatingMatrix = serde_json::from_str(&json).expect("matrix deserializes");
    assert_eq!(back, m);
}
