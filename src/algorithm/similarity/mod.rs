//! Dominant eigenpair via diagonal similarity-transform iteration
//!
//! Repeatedly conjugates the matrix by the diagonal of its row sums,
//! `A_{k+1} = diag(v_k)^-1 * A_k * diag(v_k)` with `v_k` the row-sum vector
//! of `A_k`. Each conjugation preserves the spectrum, and the row-sum
//! vectors converge to a uniform vector whose value is the dominant
//! eigenvalue. The running product of the normalized row-sum vectors
//! converges to the matching eigenvector (see
//! [`DominantEigResult::eigenvector`] for the exact scale convention).
//!
//! # Algorithm
//!
//! ```text
//! estimate = ones(n)
//! iterations = 0
//! loop:
//!     v = row_sums(A)
//!     fail on any v[i] == 0 or non-finite         (division hazard)
//!     estimate[i] *= v[i] / max(v)                 (for every i)
//!     if all |v[i] - v[i-1]| < tol:
//!         return (v[0], estimate, iterations)
//!     fail if iterations == max_iter               (NonConvergence)
//!     A = diag(v)^-1 * A * diag(v)
//!     iterations += 1
//! ```
//!
//! Known weakness inherited from the method: a matrix that produces an
//! exactly-zero row sum at any iterate has an undefined conjugation. The
//! loop fails fast with [`Error::ZeroRowSum`] at the point of detection
//! rather than letting NaN/Inf propagate.

mod steps;
mod types;

pub use steps::{accumulate_estimate, is_converged, next_matrix, row_sums, spread};
pub use types::{DominantEigOptions, DominantEigResult};

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Compute the dominant eigenvalue and eigenvector of `matrix`.
///
/// Returns the converged `(eigenvalue, eigenvector, iterations)` triple; an
/// `Ok` result always means the row-sum vector stabilized within
/// `options.tol`. Failure modes are typed: [`Error::ZeroRowSum`] and
/// [`Error::NumericalBreakdown`] for division hazards,
/// [`Error::NonConvergence`] (carrying the best-effort estimate) when
/// `options.max_iter` transforms were not enough.
///
/// The input matrix is never mutated; each iterate is a fresh value.
///
/// # Examples
///
/// ```rust
/// use simeig::prelude::*;
///
/// # fn main() -> Result<()> {
/// let a = Matrix::from_rows(&[
///     vec![1.0, 1.0, 2.0],
///     vec![2.0, 1.0, 3.0],
///     vec![2.0, 3.0, 5.0],
/// ])?;
/// let eig = dominant_eig(&a, DominantEigOptions { tol: 1e-3, ..Default::default() })?;
/// assert!((eig.eigenvalue - 7.5311).abs() < 2e-3);
/// # Ok(())
/// # }
/// ```
pub fn dominant_eig(matrix: &Matrix, options: DominantEigOptions) -> Result<DominantEigResult> {
    validate_options(&options)?;

    let n = matrix.dim();
    let mut estimate = vec![1.0; n];
    let mut spread_history = Vec::new();
    let mut iterations = 0usize;

    // First pass reads the caller's matrix by reference; later iterates are
    // owned by the loop and replaced wholesale each transform.
    let mut iterate: Option<Matrix> = None;

    loop {
        let current = iterate.as_ref().unwrap_or(matrix);

        let sums = steps::row_sums(current);
        check_row_sums(&sums, iterations)?;

        steps::accumulate_estimate(&mut estimate, &sums);

        let sp = steps::spread(&sums);
        if options.track_sum_spread {
            spread_history.push(sp);
        }

        if steps::is_converged(&sums, options.tol) {
            return Ok(DominantEigResult {
                eigenvalue: sums[0],
                eigenvector: estimate,
                iterations,
                spread: sp,
                spread_history,
            });
        }

        if iterations == options.max_iter {
            return Err(Error::NonConvergence {
                iterations,
                eigenvalue: sums[0],
                eigenvector: estimate,
                spread: sp,
            });
        }

        iterate = Some(steps::next_matrix(current, &sums));
        iterations += 1;
    }
}

fn validate_options(options: &DominantEigOptions) -> Result<()> {
    if !(options.tol.is_finite() && options.tol > 0.0) {
        return Err(Error::invalid_argument(
            "tol",
            format!("must be finite and positive, got {}", options.tol),
        ));
    }
    if options.max_iter == 0 {
        return Err(Error::invalid_argument("max_iter", "must be >= 1"));
    }
    Ok(())
}

/// Fail fast on row sums the diagonal conjugation cannot invert.
fn check_row_sums(sums: &[f64], iteration: usize) -> Result<()> {
    for (row, &s) in sums.iter().enumerate() {
        if s == 0.0 {
            return Err(Error::ZeroRowSum { row, iteration });
        }
        if !s.is_finite() {
            return Err(Error::NumericalBreakdown { iteration });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_converges_without_transforms() {
        let id = Matrix::identity(4).unwrap();
        let eig = dominant_eig(&id, DominantEigOptions::default()).unwrap();
        assert_eq!(eig.eigenvalue, 1.0);
        assert_eq!(eig.iterations, 0);
        assert_eq!(eig.eigenvector, vec![1.0; 4]);
        assert_eq!(eig.spread, 0.0);
    }

    #[test]
    fn bad_options_rejected() {
        let id = Matrix::identity(2).unwrap();
        let bad_tol = DominantEigOptions {
            tol: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            dominant_eig(&id, bad_tol),
            Err(Error::InvalidArgument { arg: "tol", .. })
        ));

        let bad_cap = DominantEigOptions {
            max_iter: 0,
            ..Default::default()
        };
        assert!(matches!(
            dominant_eig(&id, bad_cap),
            Err(Error::InvalidArgument { arg: "max_iter", .. })
        ));
    }

    #[test]
    fn spread_history_only_when_tracked() {
        let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
        let untracked = dominant_eig(&a, DominantEigOptions::default()).unwrap();
        assert!(untracked.spread_history.is_empty());

        let tracked = dominant_eig(
            &a,
            DominantEigOptions {
                track_sum_spread: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(tracked.spread_history.len(), tracked.iterations + 1);
    }
}
