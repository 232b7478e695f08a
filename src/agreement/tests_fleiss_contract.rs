// =========================================================================
// FALSIFY-FK: Fleiss' kappa contract (acuerdo agreement)
//
// Five-Whys:
//   Why 1: kappa is reported alongside SE, z, p, and a CI
//   Why 2: each derived value has its own undefined region
//   Why 3: an undefined region crossed silently yields NaN downstream
//   Why 4: NaN survives serialization and comparison without complaint
//   Why 5: only explicit error returns make the boundaries observable
//
// References:
//   - Fleiss (1971) "Measuring nominal scale agreement among many raters"
//   - Fleiss, Levin & Paik (2003) "Statistical Methods for Rates and
//     Proportions", ch. 18
// =========================================================================

use super::*;

fn classical_matrix() -> RatingMatrix {
    RatingMatrix::from_rows(&[
        vec![0.0, 0.0, 0.0, 0.0, 14.0],
        vec![0.0, 2.0, 6.0, 4.0, 2.0],
        vec![0.0, 0.0, 3.0, 5.0, 6.0],
        vec![0.0, 3.0, 9.0, 2.0, 0.0],
        vec![2.0, 2.0, 8.0, 1.0, 1.0],
        vec![7.0, 7.0, 0.0, 0.0, 0.0],
        vec![3.0, 2.0, 6.0, 3.0, 0.0],
        vec![2.0, 5.0, 3.0, 2.0, 2.0],
        vec![6.0, 5.0, 2.0, 1.0, 0.0],
        vec![0.0, 2.0, 2.0, 3.0, 7.0],
    ])
    .expect("valid")
}

/// FALSIFY-FK-001: kappa never exceeds 1
#[test]
fn falsify_fk_001_kappa_at_most_one() {
    let result = fleiss_kappa(&classical_matrix()).expect("valid input");
    assert!(
        result.kappa <= 1.0 + 1e-5,
        "FALSIFIED FK-001: kappa={} above 1",
        result.kappa
    );
}

/// FALSIFY-FK-002: perfect agreement over ≥2 categories yields kappa = 1
#[test]
fn falsify_fk_002_perfect_agreement_is_one() {
    let matrix = RatingMatrix::from_rows(&[vec![5.0, 0.0], vec![0.0, 5.0], vec![5.0, 0.0]])
        .expect("valid");
    let result = fleiss_kappa(&matrix).expect("valid input");

    assert!(
        (result.kappa - 1.0).abs() < 1e-5,
        "FALSIFIED FK-002: kappa={} for unanimous raters",
        result.kappa
    );
}

/// FALSIFY-FK-003: p-value is in [0, 1]
#[test]
fn falsify_fk_003_pvalue_bounded() {
    let result = fleiss_kappa(&classical_matrix()).expect("valid input");
    assert!(
        (0.0..=1.0).contains(&result.pvalue),
        "FALSIFIED FK-003: p-value={} outside [0,1]",
        result.pvalue
    );
}

/// FALSIFY-FK-004: all six reported values are finite
#[test]
fn falsify_fk_004_result_is_finite() {
    let result = fleiss_kappa(&classical_matrix()).expect("valid input");
    for (name, value) in [
        ("kappa", result.kappa),
        ("se", result.se),
        ("z", result.z),
        ("pvalue", result.pvalue),
        ("ci_lower", result.ci_lower),
        ("ci_upper", result.ci_upper),
    ] {
        assert!(value.is_finite(), "FALSIFIED FK-004: {name} is not finite");
    }
}

/// FALSIFY-FK-005: the confidence interval brackets kappa
#[test]
fn falsify_fk_005_ci_brackets_kappa() {
    let result = fleiss_kappa(&classical_matrix()).expect("valid input");
    assert!(
        result.ci_lower <= result.kappa && result.kappa <= result.ci_upper,
        "FALSIFIED FK-005: kappa={} outside CI [{}, {}]",
        result.kappa,
        result.ci_lower,
        result.ci_upper
    );
}

/// FALSIFY-FK-006: a single rater errors instead of returning NaN
#[test]
fn falsify_fk_006_single_rater_errors() {
    let matrix =
        RatingMatrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).expect("valid shape");
    assert!(
        matches!(
            fleiss_kappa(&matrix),
            Err(AcuerdoError::DegenerateInput { .. })
        ),
        "FALSIFIED FK-006: single rater did not raise DegenerateInput"
    );
}

/// FALSIFY-FK-007: unanimous single-category data errors instead of dividing by zero
#[test]
fn falsify_fk_007_chance_agreement_of_one_errors() {
    let matrix = RatingMatrix::from_rows(&[vec![2.0], vec![2.0]]).expect("valid shape");
    assert!(
        matches!(
            fleiss_kappa(&matrix),
            Err(AcuerdoError::InvalidStatistic { .. })
        ),
        "FALSIFIED FK-007: chance agreement of 1 did not raise InvalidStatistic"
    );
}

/// FALSIFY-FK-008: the published reference value is reproduced
#[test]
fn falsify_fk_008_reference_value() {
    let result = fleiss_kappa(&classical_matrix()).expect("valid input");
    assert!(
        (result.kappa - 0.210).abs() < 1e-3,
        "FALSIFIED FK-008: kappa={} differs from published 0.210",
        result.kappa
    );
}
