//! # simeig
//!
//! **Dominant eigenvalue and eigenvector of dense square matrices via
//! diagonal similarity-transform iteration.**
//!
//! simeig implements an iterative, division-based analogue of power
//! iteration: instead of repeatedly multiplying a probe vector, each step
//! conjugates the whole matrix by the diagonal of its row sums. The row-sum
//! vector of the iterates converges to a uniform vector whose value is the
//! dominant (largest-magnitude) eigenvalue, and the running product of the
//! normalized row-sum vectors converges to the matching eigenvector.
//!
//! ## Quick Start
//!
//! ```rust
//! use simeig::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let a = Matrix::from_rows(&[
//!     vec![1.0, 1.0, 2.0],
//!     vec![2.0, 1.0, 3.0],
//!     vec![2.0, 3.0, 5.0],
//! ])?;
//!
//! let eig = dominant_eig(&a, DominantEigOptions::default())?;
//! println!("lambda = {}, after {} transforms", eig.eigenvalue, eig.iterations);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scale convention
//!
//! The returned eigenvector is **not** unit-normalized. It is the
//! element-wise product, over all executed iterations, of each iteration's
//! row-sum vector divided by that iteration's maximum row sum, seeded with
//! all ones. Callers wanting a unit vector must normalize it themselves.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel row sums and transforms for large matrices

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod error;
pub mod generate;
pub mod matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::similarity::{
        dominant_eig, DominantEigOptions, DominantEigResult,
    };
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
}
