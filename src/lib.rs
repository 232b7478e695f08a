//! Acuerdo: inter-rater agreement statistics in pure Rust.
//!
//! Acuerdo computes Fleiss' kappa, the chance-corrected agreement among a
//! fixed pool of raters classifying subjects into discrete categories,
//! together with its standard error, z-statistic, two-sided p-value, and
//! 95% confidence interval. Two adapters convert common raw annotation
//! formats into the subject-by-category count matrix the statistic
//! consumes.
//!
//! # Quick Start
//!
//! ```
//! use acuerdo::prelude::*;
//!
//! // Three raters label five subjects with categories 0..=2.
//! let rater1 = vec![0, 0, 1, 2, 1];
//! let rater2 = vec![0, 0, 1, 2, 2];
//! let rater3 = vec![0, 1, 1, 2, 2];
//!
//! let matrix = from_raters(&[rater1, rater2, rater3]).unwrap();
//! let result = fleiss_kappa(&matrix).unwrap();
//!
//! assert!((result.kappa - 0.6).abs() < 1e-3);
//! println!("{result}");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: The [`RatingMatrix`] count-matrix type
//! - [`agreement`]: Fleiss' kappa and the rating-format adapters
//! - [`error`]: Crate error type and `Result` alias

pub mod agreement;
pub mod error;
pub mod prelude;
pub mod primitives;

pub use agreement::{fleiss_kappa, from_raters, from_weighted, FleissKappaResult};
pub use error::{AcuerdoError, Result};
pub use primitives::RatingMatrix;
