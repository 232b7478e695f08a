// =========================================================================
// FALSIFY-TR: rating transform contract (acuerdo agreement)
//
// Five-Whys:
//   Why 1: raw annotations arrive in per-rater or weighted form
//   Why 2: both forms must collapse to identical count matrices
//   Why 3: a drifting expansion silently distorts every statistic downstream
//   Why 4: the distortion is invisible once sequences are discarded
//   Why 5: equivalence must be pinned at the adapter boundary
//
// References:
//   - Fleiss (1971) "Measuring nominal scale agreement among many raters"
// =========================================================================

use super::*;

/// FALSIFY-TR-001: every built row sums to the rater count
#[test]
fn falsify_tr_001_row_sums_equal_rater_count() {
    let raters = [vec![0, 1, 2, 0], vec![1, 1, 2, 0], vec![0, 1, 0, 0]];
    let matrix = from_raters(&raters).expect("valid input");

    for i in 0..matrix.n_subjects() {
        assert!(
            (matrix.row_sum(i) - raters.len() as f32).abs() < 1e-6,
            "FALSIFIED TR-001: row {i} sums to {}, expected {}",
            matrix.row_sum(i),
            raters.len()
        );
    }
}

/// FALSIFY-TR-002: weighted expansion equals the hand-expanded build
#[test]
fn falsify_tr_002_weighted_equals_direct() {
    let weighted = from_weighted(&[vec![0, 1, 3], vec![1, 1, 2], vec![2, 0, 1]])
        .expect("valid input");
    let direct = from_raters(&[
        vec![0, 0, 0, 1, 1, 2],
        vec![1, 1, 1, 1, 1, 0],
    ])
    .expect("valid input");

    assert_eq!(
        weighted, direct,
        "FALSIFIED TR-002: weighted and direct builds disagree"
    );
}

/// FALSIFY-TR-003: total count equals raters × subjects
#[test]
fn falsify_tr_003_total_count_conserved() {
    let raters = [vec![0, 2, 1], vec![2, 2, 0]];
    let matrix = from_raters(&raters).expect("valid input");

    let total: f32 = matrix.as_slice().iter().sum();
    let expected = (raters.len() * raters[0].len()) as f32;
    assert!(
        (total - expected).abs() < 1e-6,
        "FALSIFIED TR-003: total count {total}, expected {expected}"
    );
}

/// FALSIFY-TR-004: shape errors are raised before any matrix is built
#[test]
fn falsify_tr_004_shape_errors_detected() {
    assert!(
        from_raters(&[]).is_err(),
        "FALSIFIED TR-004: empty rater list accepted"
    );
    assert!(
        from_raters(&[vec![0, 1], vec![0]]).is_err(),
        "FALSIFIED TR-004: ragged rater sequences accepted"
    );
    assert!(
        from_weighted(&[]).is_err(),
        "FALSIFIED TR-004: empty weighted list accepted"
    );
    assert!(
        from_weighted(&[vec![0, 0, 1], vec![0, 0]]).is_err(),
        "FALSIFIED TR-004: inconsistent weighted columns accepted"
    );
}
