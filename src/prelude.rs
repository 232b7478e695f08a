//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use acuerdo::prelude::*;
//! ```

pub use crate::agreement::{fleiss_kappa, from_raters, from_weighted, FleissKappaResult};
pub use crate::error::{AcuerdoError, Result};
pub use crate::primitives::RatingMatrix;
