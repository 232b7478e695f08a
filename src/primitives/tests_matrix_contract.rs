// =========================================================================
// FALSIFY-RM: rating matrix contract (acuerdo primitives)
//
// Five-Whys:
//   Why 1: agreement statistics silently assume constant row sums
//   Why 2: the invariant lives in the data, not in the type signature
//   Why 3: a malformed count matrix yields a plausible-looking kappa
//   Why 4: downstream consumers trust the matrix without re-validating
//   Why 5: the constructor is the only gate before computation
//
// References:
//   - Fleiss (1971) "Measuring nominal scale agreement among many raters"
// =========================================================================

use super::*;

/// FALSIFY-RM-001: Constructed matrices preserve every count verbatim
#[test]
fn falsify_rm_001_counts_preserved() {
    let rows = [vec![0.0, 2.0, 6.0], vec![4.0, 2.0, 2.0]];
    let m = RatingMatrix::from_rows(&rows).expect("valid");

    for (i, row) in rows.iter().enumerate() {
        for (j, &count) in row.iter().enumerate() {
            assert!(
                (m.get(i, j) - count).abs() < 1e-6,
                "FALSIFIED RM-001: count at ({i},{j}) not preserved"
            );
        }
    }
}

/// FALSIFY-RM-002: row_sum equals the sum of the row slice
#[test]
fn falsify_rm_002_row_sum_consistent() {
    let m = RatingMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 2.0]]).expect("valid");

    for i in 0..m.n_subjects() {
        let direct: f32 = m.row(i).iter().sum();
        assert!(
            (m.row_sum(i) - direct).abs() < 1e-6,
            "FALSIFIED RM-002: row_sum({i}) disagrees with row slice"
        );
    }
}

/// FALSIFY-RM-003: total counts agree whether summed by row or by column
#[test]
fn falsify_rm_003_row_column_totals_agree() {
    let m = RatingMatrix::from_rows(&[vec![2.0, 2.0, 8.0], vec![6.0, 5.0, 1.0]]).expect("valid");

    let by_rows: f32 = (0..m.n_subjects()).map(|i| m.row_sum(i)).sum();
    let by_cols: f32 = (0..m.n_categories()).map(|j| m.column_sum(j)).sum();
    assert!(
        (by_rows - by_cols).abs() < 1e-4,
        "FALSIFIED RM-003: row total {by_rows} != column total {by_cols}"
    );
}

/// FALSIFY-RM-004: unequal row sums never pass raters_per_subject
#[test]
fn falsify_rm_004_unequal_row_sums_rejected() {
    let m = RatingMatrix::from_rows(&[vec![7.0, 7.0], vec![7.0, 6.0]]).expect("valid shape");

    assert!(
        m.raters_per_subject().is_err(),
        "FALSIFIED RM-004: unequal row sums accepted as a rater count"
    );
}
