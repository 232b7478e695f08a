//! Error types for Acuerdo operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Acuerdo operations.
///
/// Every failure is detected at input validation or computation time and
/// aborts the computation: callers receive either a complete result or an
/// error naming the precondition that failed.
///
/// # Examples
///
/// ```
/// use acuerdo::error::AcuerdoError;
///
/// let err = AcuerdoError::DimensionMismatch {
///     expected: "12 ratings per rater".to_string(),
///     actual: "11 ratings for rater 2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum AcuerdoError {
    /// Input shapes don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Input is valid in shape but carries no agreement information.
    DegenerateInput {
        /// Description of the degenerate condition
        message: String,
    },

    /// A derived statistic is undefined for this input.
    InvalidStatistic {
        /// Description of the undefined quantity
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AcuerdoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcuerdoError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            AcuerdoError::DegenerateInput { message } => {
                write!(f, "degenerate input: {message}")
            }
            AcuerdoError::InvalidStatistic { message } => {
                write!(f, "invalid statistic: {message}")
            }
            AcuerdoError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AcuerdoError {}

impl From<&str> for AcuerdoError {
    fn from(msg: &str) -> Self {
        AcuerdoError::Other(msg.to_string())
    }
}

/// Convenience result type for Acuerdo operations.
pub type Result<T> = std::result::Result<T, AcuerdoError>;
