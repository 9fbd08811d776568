//! Error types for simeig

use thiserror::Error;

/// Result type alias using simeig's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in simeig operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A row sum became exactly zero, making the diagonal conjugation
    /// undefined (division hazard inherent to the method)
    #[error("Row sum of row {row} is exactly zero at iteration {iteration}: diagonal inverse is undefined")]
    ZeroRowSum {
        /// Row whose sum vanished
        row: usize,
        /// Iteration (number of transforms applied so far) at detection
        iteration: usize,
    },

    /// A row sum became non-finite (NaN or infinity), so the iterate
    /// matrix has overflowed or was poisoned upstream
    #[error("Non-finite row sum at iteration {iteration}: iterate matrix broke down numerically")]
    NumericalBreakdown {
        /// Iteration (number of transforms applied so far) at detection
        iteration: usize,
    },

    /// The iteration cap was exhausted before the row-sum vector stabilized
    #[error("No convergence after {iterations} transforms (row-sum spread {spread:.3e})")]
    NonConvergence {
        /// Number of transforms applied
        iterations: usize,
        /// Best-effort eigenvalue estimate (row sum at index 0)
        eigenvalue: f64,
        /// Best-effort eigenvector estimate (running-product form)
        eigenvector: Vec<f64>,
        /// Final pairwise spread max(v) - min(v) of the row-sum vector
        spread: f64,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
