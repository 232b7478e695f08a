//! Count matrix for subject-by-category rating tallies.

use serde::{Deserialize, Serialize};

use crate::error::{AcuerdoError, Result};

/// A subject × category table of rating counts (row-major storage).
///
/// Entry `(i, j)` holds the number of raters who assigned category `j` to
/// subject `i`. Counts are kept as `f32` for arithmetic convenience and
/// must be non-negative and finite.
///
/// # Examples
///
/// ```
/// use acuerdo::primitives::RatingMatrix;
///
/// let m = RatingMatrix::from_vec(2, 3, vec![3.0, 0.0, 0.0, 1.0, 2.0, 0.0]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.row_sum(1), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingMatrix {
    data: Vec<f32>,
    subjects: usize,
    categories: usize,
}

impl RatingMatrix {
    /// Creates a new matrix from a flat row-major vector of counts.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the data length doesn't equal
    /// `subjects * categories`, or `Other` if any count is negative or
    /// non-finite.
    pub fn from_vec(subjects: usize, categories: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != subjects * categories {
            return Err(AcuerdoError::DimensionMismatch {
                expected: format!("{} counts ({subjects}x{categories})", subjects * categories),
                actual: format!("{} counts", data.len()),
            });
        }
        if data.iter().any(|&x| !x.is_finite() || x < 0.0) {
            return Err(AcuerdoError::Other(
                "rating counts must be non-negative and finite".to_string(),
            ));
        }
        Ok(Self {
            data,
            subjects,
            categories,
        })
    }

    /// Creates a new matrix from per-subject rows of counts.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `rows` is empty or the rows have
    /// unequal lengths.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(AcuerdoError::DimensionMismatch {
                expected: "at least 1 subject row".to_string(),
                actual: "0 rows".to_string(),
            });
        };

        let categories = first.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != categories {
                return Err(AcuerdoError::DimensionMismatch {
                    expected: format!("{categories} categories per row"),
                    actual: format!("{} categories in row {i}", row.len()),
                });
            }
        }

        let data: Vec<f32> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self::from_vec(rows.len(), categories, data)
    }

    /// Creates a matrix of zero counts.
    #[must_use]
    pub fn zeros(subjects: usize, categories: usize) -> Self {
        Self {
            data: vec![0.0; subjects * categories],
            subjects,
            categories,
        }
    }

    /// Returns the shape as (subjects, categories).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.subjects, self.categories)
    }

    /// Returns the number of subjects (rows).
    #[must_use]
    pub fn n_subjects(&self) -> usize {
        self.subjects
    }

    /// Returns the number of categories (columns).
    #[must_use]
    pub fn n_categories(&self) -> usize {
        self.categories
    }

    /// Gets the count at (subject, category).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, subject: usize, category: usize) -> f32 {
        self.data[subject * self.categories + category]
    }

    /// Sets the count at (subject, category).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, subject: usize, category: usize, value: f32) {
        self.data[subject * self.categories + category] = value;
    }

    /// Returns a subject's counts as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `subject` is out of bounds.
    #[must_use]
    pub fn row(&self, subject: usize) -> &[f32] {
        let start = subject * self.categories;
        &self.data[start..start + self.categories]
    }

    /// Sum of counts in one subject row.
    ///
    /// # Panics
    ///
    /// Panics if `subject` is out of bounds.
    #[must_use]
    pub fn row_sum(&self, subject: usize) -> f32 {
        self.row(subject).iter().sum()
    }

    /// Sum of counts in one category column.
    ///
    /// # Panics
    ///
    /// Panics if `category` is out of bounds.
    #[must_use]
    pub fn column_sum(&self, category: usize) -> f32 {
        (0..self.subjects).map(|i| self.get(i, category)).sum()
    }

    /// Returns the underlying data as a flat row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Number of raters per subject, inferred from the first row.
    ///
    /// Every row must sum to the same rater count: each subject is rated
    /// exactly once by each rater.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is empty or any row sum
    /// differs from the first.
    pub fn raters_per_subject(&self) -> Result<f32> {
        if self.subjects == 0 || self.categories == 0 {
            return Err(AcuerdoError::DimensionMismatch {
                expected: "at least 1 subject and 1 category".to_string(),
                actual: format!("{}x{}", self.subjects, self.categories),
            });
        }

        let n_raters = self.row_sum(0);
        for i in 1..self.subjects {
            let sum = self.row_sum(i);
            if (sum - n_raters).abs() > 1e-3 {
                return Err(AcuerdoError::DimensionMismatch {
                    expected: format!("row sum {n_raters} for every subject"),
                    actual: format!("row sum {sum} for subject {i}"),
                });
            }
        }
        Ok(n_raters)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
