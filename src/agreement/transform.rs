//! Adapters from raw annotation formats to rating count matrices.
//!
//! Raw annotations usually arrive as one label sequence per rater, or as a
//! compressed list of rating combinations with repetition weights. Both
//! forms reduce to the same subject-by-category count matrix.

use crate::error::{AcuerdoError, Result};
use crate::primitives::RatingMatrix;

/// Builds a count matrix from one label sequence per rater.
///
/// Each sequence holds one zero-based category label per subject; all
/// sequences must have the same length. The category count is derived as
/// `1 + max observed label`, so labels that never occur below the maximum
/// produce all-zero columns.
///
/// # Errors
///
/// Returns `DimensionMismatch` if `raters` is empty, the sequences are
/// empty, or the sequences have unequal lengths.
///
/// # Examples
///
/// ```
/// use acuerdo::agreement::transform::from_raters;
///
/// let matrix = from_raters(&[vec![0, 1, 1], vec![0, 1, 0]]).unwrap();
/// assert_eq!(matrix.shape(), (3, 2));
/// assert_eq!(matrix.row(0), &[2.0, 0.0]);
/// assert_eq!(matrix.row(2), &[1.0, 1.0]);
/// ```
pub fn from_raters(raters: &[Vec<usize>]) -> Result<RatingMatrix> {
    let Some(first) = raters.first() else {
        return Err(AcuerdoError::DimensionMismatch {
            expected: "at least 1 rater sequence".to_string(),
            actual: "0 rater sequences".to_string(),
        });
    };

    let subjects = first.len();
    if subjects == 0 {
        return Err(AcuerdoError::DimensionMismatch {
            expected: "at least 1 rating per rater".to_string(),
            actual: "empty rater sequences".to_string(),
        });
    }

    for (idx, rater) in raters.iter().enumerate() {
        if rater.len() != subjects {
            return Err(AcuerdoError::DimensionMismatch {
                expected: format!("{subjects} ratings per rater"),
                actual: format!("{} ratings for rater {idx}", rater.len()),
            });
        }
    }

    let max_label = raters
        .iter()
        .flat_map(|rater| rater.iter())
        .max()
        .copied()
        .unwrap_or(0);
    let categories = max_label + 1;

    let mut matrix = RatingMatrix::zeros(subjects, categories);
    for rater in raters {
        for (subject, &label) in rater.iter().enumerate() {
            matrix.set(subject, label, matrix.get(subject, label) + 1.0);
        }
    }

    Ok(matrix)
}

/// Builds a count matrix from weighted rating combinations.
///
/// Each entry lists one category label per rater followed by a repetition
/// weight: `[rater_0, rater_1, ..., rater_n, weight]` means `weight`
/// subjects received exactly that combination of ratings. Entries are
/// expanded into full per-rater sequences and handed to [`from_raters`].
///
/// A zero weight is legal and contributes no subjects.
///
/// # Errors
///
/// Returns `DimensionMismatch` if `entries` is empty, entries have fewer
/// than 2 columns, the column counts are inconsistent, or every weight is
/// zero (no subjects remain).
///
/// # Examples
///
/// ```
/// use acuerdo::agreement::transform::{from_raters, from_weighted};
///
/// // Two raters both chose category 0 twice and disagreed once.
/// let weighted = from_weighted(&[vec![0, 0, 2], vec![0, 1, 1]]).unwrap();
/// let direct = from_raters(&[vec![0, 0, 0], vec![0, 0, 1]]).unwrap();
/// assert_eq!(weighted, direct);
/// ```
pub fn from_weighted(entries: &[Vec<usize>]) -> Result<RatingMatrix> {
    let Some(first) = entries.first() else {
        return Err(AcuerdoError::DimensionMismatch {
            expected: "at least 1 weighted entry".to_string(),
            actual: "0 entries".to_string(),
        });
    };

    let columns = first.len();
    if columns < 2 {
        return Err(AcuerdoError::DimensionMismatch {
            expected: "at least 1 rating column plus a weight column".to_string(),
            actual: format!("{columns} column(s)"),
        });
    }
    let n_raters = columns - 1;

    for (idx, entry) in entries.iter().enumerate() {
        if entry.len() != columns {
            return Err(AcuerdoError::DimensionMismatch {
                expected: format!("{columns} columns per entry"),
                actual: format!("{} columns in entry {idx}", entry.len()),
            });
        }
    }

    let total_subjects: usize = entries.iter().map(|entry| entry[n_raters]).sum();
    let mut raters: Vec<Vec<usize>> = (0..n_raters)
        .map(|_| Vec::with_capacity(total_subjects))
        .collect();

    for entry in entries {
        let weight = entry[n_raters];
        for (j, sequence) in raters.iter_mut().enumerate() {
            sequence.extend(std::iter::repeat(entry[j]).take(weight));
        }
    }

    from_raters(&raters)
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_transform_contract.rs"]
mod tests_transform_contract;
