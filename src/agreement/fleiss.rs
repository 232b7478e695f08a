//! Fleiss' kappa for multi-rater nominal agreement.
//!
//! Fleiss' kappa measures how much a fixed pool of raters agrees when
//! classifying subjects into nominal categories, corrected for the
//! agreement expected by chance. It assumes every subject receives the
//! same number of ratings.
//!
//! # Example
//!
//! ```
//! use acuerdo::agreement::fleiss::fleiss_kappa;
//! use acuerdo::primitives::RatingMatrix;
//!
//! // Two raters, three subjects, two categories.
//! let matrix = RatingMatrix::from_rows(&[
//!     vec![2.0, 0.0],
//!     vec![0.0, 2.0],
//!     vec![2.0, 0.0],
//! ]).unwrap();
//!
//! let result = fleiss_kappa(&matrix).unwrap();
//! assert!((result.kappa - 1.0).abs() < 1e-6);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AcuerdoError, Result};
use crate::primitives::RatingMatrix;

/// Result of a Fleiss' kappa computation.
///
/// Rendering the result with `{}` produces the six-line report with every
/// value formatted to 3 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleissKappaResult {
    /// Fleiss' kappa coefficient
    pub kappa: f32,

    /// Standard error of kappa
    pub se: f32,

    /// z-statistic (kappa / se)
    pub z: f32,

    /// p-value (two-tailed)
    pub pvalue: f32,

    /// Lower bound of the 95% confidence interval
    pub ci_lower: f32,

    /// Upper bound of the 95% confidence interval
    pub ci_upper: f32,
}

impl fmt::Display for FleissKappaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fleiss Kappa: {:.3}", self.kappa)?;
        writeln!(f, "Standard Error: {:.3}", self.se)?;
        writeln!(f, "Z: {:.3}", self.z)?;
        writeln!(f, "p-value: {:.3}", self.pvalue)?;
        writeln!(f, "Lower 95% CI Bound: {:.3}", self.ci_lower)?;
        write!(f, "Upper 95% CI Bound: {:.3}", self.ci_upper)
    }
}

/// Computes Fleiss' kappa and its inferential statistics.
///
/// The rater count N is inferred from the first row sum; every row must sum
/// to the same N. With S subjects and per-category prevalence `p_j`:
///
/// - chance agreement: P̄ₑ = Σ p_j²
/// - observed agreement: mean over subjects of
///   (Σ_j count(i,j)² − N) / (N(N−1))
/// - kappa: (P̄ − P̄ₑ) / (1 − P̄ₑ)
///
/// The p-value is two-tailed under the standard normal distribution, and
/// the 95% confidence interval uses the margin `1.96 · se / S`.
///
/// # Errors
///
/// - `DimensionMismatch`: empty matrix, or row sums are not constant.
/// - `DegenerateInput`: fewer than 2 raters per subject (a single rating
///   per subject carries no agreement information).
/// - `InvalidStatistic`: chance agreement equals 1 (kappa has a zero
///   denominator), or the variance of kappa is not positive (standard
///   error and z-statistic undefined).
///
/// # Examples
///
/// ```
/// use acuerdo::prelude::*;
///
/// let matrix = RatingMatrix::from_rows(&[
///     vec![0.0, 0.0, 0.0, 0.0, 14.0],
///     vec![0.0, 2.0, 6.0, 4.0, 2.0],
///     vec![0.0, 0.0, 3.0, 5.0, 6.0],
///     vec![0.0, 3.0, 9.0, 2.0, 0.0],
///     vec![2.0, 2.0, 8.0, 1.0, 1.0],
///     vec![7.0, 7.0, 0.0, 0.0, 0.0],
///     vec![3.0, 2.0, 6.0, 3.0, 0.0],
///     vec![2.0, 5.0, 3.0, 2.0, 2.0],
///     vec![6.0, 5.0, 2.0, 1.0, 0.0],
///     vec![0.0, 2.0, 2.0, 3.0, 7.0],
/// ]).unwrap();
///
/// let result = fleiss_kappa(&matrix).unwrap();
/// assert!((result.kappa - 0.210).abs() < 1e-3);
/// ```
pub fn fleiss_kappa(matrix: &RatingMatrix) -> Result<FleissKappaResult> {
    let (subjects, _) = matrix.shape();
    let n_raters = matrix.raters_per_subject()?;

    if n_raters < 2.0 {
        return Err(AcuerdoError::DegenerateInput {
            message: format!("got {n_raters} rater(s) per subject, need at least 2"),
        });
    }

    let s = subjects as f32;

    let p_j = category_prevalence(matrix, n_raters);
    let p_e_bar: f32 = p_j.iter().map(|&p| p * p).sum();

    let p_i = subject_agreement(matrix, n_raters);
    let p_bar = p_i.iter().sum::<f32>() / s;

    let chance_disagreement = 1.0 - p_e_bar;
    if chance_disagreement < f32::EPSILON {
        return Err(AcuerdoError::InvalidStatistic {
            message: "chance agreement is 1, kappa has a zero denominator".to_string(),
        });
    }

    let kappa = (p_bar - p_e_bar) / chance_disagreement;

    let tmp = chance_disagreement * chance_disagreement;
    let correction: f32 = p_j
        .iter()
        .map(|&p| p * (1.0 - p) * (1.0 - 2.0 * p))
        .sum();
    let var = 2.0 * (tmp - correction) / (tmp * s * n_raters * (n_raters - 1.0));

    if var <= 0.0 {
        return Err(AcuerdoError::InvalidStatistic {
            message: format!("variance of kappa is {var}, standard error undefined"),
        });
    }

    let se = var.sqrt();
    let z = kappa / se;
    let pvalue = (2.0 * (1.0 - normal_cdf(z.abs()))).clamp(0.0, 1.0);

    let ci_margin = 1.96 * se / s;

    Ok(FleissKappaResult {
        kappa,
        se,
        z,
        pvalue,
        ci_lower: kappa - ci_margin,
        ci_upper: kappa + ci_margin,
    })
}

/// Share of all ratings falling in each category.
fn category_prevalence(matrix: &RatingMatrix, n_raters: f32) -> Vec<f32> {
    let (subjects, categories) = matrix.shape();
    let total_ratings = n_raters * subjects as f32;

    (0..categories)
        .map(|j| matrix.column_sum(j) / total_ratings)
        .collect()
}

/// Observed pairwise agreement for each subject.
///
/// Bounded by [-1/(N-1), 1]; lowest when the N ratings spread evenly
/// across categories, 1 under full consensus.
fn subject_agreement(matrix: &RatingMatrix, n_raters: f32) -> Vec<f32> {
    let (subjects, _) = matrix.shape();
    let rating_pairs = n_raters * (n_raters - 1.0);

    (0..subjects)
        .map(|i| {
            let sum_sq: f32 = matrix.row(i).iter().map(|&c| c * c).sum();
            (sum_sq - n_raters) / rating_pairs
        })
        .collect()
}

// ============================================================================
// Distribution helpers
// ============================================================================

/// Standard normal CDF (using the error function).
fn normal_cdf(x: f32) -> f32 {
    0.5 * (1.0 + erf(x / 2.0_f32.sqrt()))
}

/// Error function approximation (Abramowitz & Stegun 7.1.26, max error ~1.5e-7).
fn erf(x: f32) -> f32 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let poly = ((((1.061_405_4 * t - 1.453_152_0) * t + 1.421_413_7) * t - 0.284_496_74) * t
        + 0.254_829_59)
        * t;

    sign * (1.0 - poly * (-x * x).exp())
}

#[cfg(test)]
#[path = "fleiss_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_fleiss_contract.rs"]
mod tests_fleiss_contract;
