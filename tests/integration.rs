//! Integration tests for the Acuerdo agreement library.
//!
//! These tests verify end-to-end workflows from raw annotations to the
//! reported statistics.

use acuerdo::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_classical_dataset_workflow() {
    // 10 subjects, 14 raters, 5 categories (Fleiss 1971).
    let matrix = RatingMatrix::from_rows(&[
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
    .expect("rows are rectangular");

    let result = fleiss_kappa(&matrix).expect("valid matrix");

    assert!((result.kappa - 0.210).abs() < 1e-3);
    assert!((result.se - 0.017).abs() < 1e-3);
    assert!((result.z - 12.374).abs() < 1e-2);
    assert!(result.pvalue < 1e-3);
    assert!((result.ci_lower - 0.207).abs() < 1e-3);
    assert!((result.ci_upper - 0.213).abs() < 1e-3);

    let report = result.to_string();
    assert!(report.contains("Fleiss Kappa: 0.210"));
    assert!(report.contains("Standard Error: 0.017"));
    assert!(report.contains("Z: 12.374"));
    assert!(report.contains("p-value: 0.000"));
    assert!(report.contains("Lower 95% CI Bound: 0.207"));
    assert!(report.contains("Upper 95% CI Bound: 0.213"));
}

#[test]
fn test_rater_sequence_workflow() {
    let rater1 = vec![1, 2, 2, 1, 2, 2, 1, 1, 3, 1, 2, 2];
    let rater2 = vec![1, 2, 1, 2, 1, 2, 3, 2, 3, 2, 3, 1];
    let rater3 = vec![1, 2, 2, 1, 3, 3, 3, 2, 1, 2, 3, 1];

    let matrix = from_raters(&[rater1, rater2, rater3]).expect("equal-length sequences");
    assert_eq!(matrix.shape(), (12, 4));

    let result = fleiss_kappa(&matrix).expect("valid matrix");
    assert!((result.kappa - 0.098).abs() < 1e-3);
    assert!((result.pvalue - 0.416).abs() < 1e-3);
}

#[test]
fn test_weighted_workflow() {
    // Two raters; each entry is one rating combination plus how often it
    // occurred (50 subjects in total).
    let matrix = from_weighted(&[
        vec![0, 0, 8],
        vec![0, 1, 2],
        vec![0, 2, 0],
        vec![1, 0, 0],
        vec![1, 1, 17],
        vec![1, 2, 3],
        vec![2, 0, 0],
        vec![2, 1, 5],
        vec![2, 2, 15],
    ])
    .expect("consistent entries");
    assert_eq!(matrix.shape(), (50, 3));

    let result = fleiss_kappa(&matrix).expect("valid matrix");
    assert!((result.kappa - 0.682).abs() < 1e-3);
    assert!((result.se - 0.104).abs() < 1e-3);
    assert!((result.z - 6.539).abs() < 1e-2);
    assert!(result.pvalue < 1e-3);
    assert!((result.ci_lower - 0.678).abs() < 1e-3);
    assert!((result.ci_upper - 0.686).abs() < 1e-3);
}

#[test]
fn test_chance_level_agreement_is_near_zero() {
    // Five raters labeling independently and uniformly: agreement should
    // sit at chance level.
    let mut rng = StdRng::seed_from_u64(42);
    let raters: Vec<Vec<usize>> = (0..5)
        .map(|_| (0..2000).map(|_| rng.gen_range(0..4)).collect())
        .collect();

    let matrix = from_raters(&raters).expect("equal-length sequences");
    let result = fleiss_kappa(&matrix).expect("valid matrix");

    assert!(
        result.kappa.abs() < 0.05,
        "independent raters should land near kappa=0, got {}",
        result.kappa
    );
}

#[test]
fn test_error_paths() {
    // Single rater: no pairwise agreement to measure.
    let single = from_raters(&[vec![0, 1, 0]]).expect("one rater builds a matrix");
    assert!(matches!(
        fleiss_kappa(&single),
        Err(AcuerdoError::DegenerateInput { .. })
    ));

    // Varying rater counts between subjects.
    let uneven = RatingMatrix::from_rows(&[vec![3.0, 0.0], vec![2.0, 2.0]])
        .expect("rows are rectangular");
    assert!(matches!(
        fleiss_kappa(&uneven),
        Err(AcuerdoError::DimensionMismatch { .. })
    ));

    // One observed category: kappa undefined.
    let unanimous = RatingMatrix::from_rows(&[vec![4.0], vec![4.0]])
        .expect("rows are rectangular");
    assert!(matches!(
        fleiss_kappa(&unanimous),
        Err(AcuerdoError::InvalidStatistic { .. })
    ));
}
