//! Step kernels for the similarity-transform iteration
//!
//! Pure functions over the current iterate; the driving loop in the parent
//! module sequences them. Row-level work is data-parallel across rows and
//! runs on rayon above [`PAR_MIN_DIM`], with the within-row summation order
//! kept sequential so the serial and parallel paths produce bit-identical
//! results.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::matrix::Matrix;

/// Minimum dimension before row-level work is dispatched to rayon.
///
/// Below this, per-row work is too small to amortize the fork-join cost.
#[cfg(feature = "rayon")]
pub(crate) const PAR_MIN_DIM: usize = 128;

/// Row-sum vector of `m`: element `i` is the sum of row `i`.
pub fn row_sums(m: &Matrix) -> Vec<f64> {
    #[cfg(feature = "rayon")]
    if m.dim() >= PAR_MIN_DIM {
        return m
            .as_slice()
            .par_chunks_exact(m.dim())
            .map(|row| row.iter().sum())
            .collect();
    }

    m.rows().map(|row| row.iter().sum()).collect()
}

/// Next iterate via conjugation by `diag(v)`: `B = diag(v)^-1 * A * diag(v)`.
///
/// Entrywise, `B[r][c] = A[r][c] * v[c] / v[r]`. A similarity transform, so
/// `B` has the same eigenvalues as `A`. Callers must have rejected zero
/// entries in `v`; the driving loop does this before every call.
pub fn next_matrix(m: &Matrix, v: &[f64]) -> Matrix {
    let n = m.dim();
    debug_assert_eq!(v.len(), n);
    debug_assert!(v.iter().all(|&x| x != 0.0));

    let scale_row = |(row, &vr): (&[f64], &f64)| -> Vec<f64> {
        let inv = 1.0 / vr;
        row.iter().zip(v).map(|(&a, &vc)| a * vc * inv).collect()
    };

    #[cfg(feature = "rayon")]
    if n >= PAR_MIN_DIM {
        let data: Vec<f64> = m
            .as_slice()
            .par_chunks_exact(n)
            .zip(v.par_iter())
            .flat_map_iter(|(row, vr)| scale_row((row, vr)))
            .collect();
        return Matrix::from_parts(data, n);
    }

    let mut data = Vec::with_capacity(n * n);
    for pair in m.rows().zip(v) {
        data.extend(scale_row(pair));
    }
    Matrix::from_parts(data, n)
}

/// True iff every consecutive pair of row sums differs by less than `tol`.
///
/// A length-1 vector has no pairs and converges immediately (empty
/// conjunction).
pub fn is_converged(v: &[f64], tol: f64) -> bool {
    v.windows(2).all(|w| (w[1] - w[0]).abs() < tol)
}

/// Fold this iteration's normalized row sums into the running estimate:
/// `estimate[i] *= v[i] / max(v)`.
pub fn accumulate_estimate(estimate: &mut [f64], v: &[f64]) {
    debug_assert_eq!(estimate.len(), v.len());
    debug_assert!(!v.is_empty());

    let vmax = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    for (e, &x) in estimate.iter_mut().zip(v) {
        *e *= x / vmax;
    }
}

/// Pairwise spread `max(v) - min(v)` of a row-sum vector.
pub fn spread(v: &[f64]) -> f64 {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for &x in v {
        lo = lo.min(x);
        hi = hi.max(x);
    }
    hi - lo
}
