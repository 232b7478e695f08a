//! Inter-rater agreement statistics.
//!
//! The central operation is [`fleiss_kappa`], which consumes a
//! [`RatingMatrix`](crate::primitives::RatingMatrix) of subject-by-category
//! counts and produces the kappa coefficient with its standard error,
//! z-statistic, two-sided p-value, and 95% confidence interval. The
//! [`transform`] adapters build that matrix from per-rater label sequences
//! or from weighted rating combinations.

pub mod fleiss;
pub mod transform;

pub use fleiss::{fleiss_kappa, FleissKappaResult};
pub use transform::{from_raters, from_weighted};
