//! Test-matrix generators
//!
//! Workloads for tests, benches, and the demo driver. Entrywise-positive
//! random matrices are the canonical input for this method: by
//! Perron-Frobenius their dominant eigenvalue is real, simple, and positive,
//! so the row-sum iteration is guaranteed a well-defined target.

use rand::Rng;

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Random `n x n` matrix with entries drawn uniformly from `(0, 1)`.
///
/// Entries are bounded away from zero so no row sum can vanish at the first
/// iteration regardless of `n`.
pub fn random_positive<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Matrix> {
    if n == 0 {
        return Err(Error::invalid_argument("n", "matrix dimension must be >= 1"));
    }
    let data: Vec<f64> = (0..n * n)
        .map(|_| rng.random_range(f64::EPSILON..1.0))
        .collect();
    Ok(Matrix::from_parts(data, n))
}

/// The `n x n` Hilbert matrix, `H[i][j] = 1 / (i + j + 1)`.
///
/// Classic ill-conditioned test matrix; symmetric positive definite, so its
/// dominant eigenvalue is real.
pub fn hilbert(n: usize) -> Result<Matrix> {
    if n == 0 {
        return Err(Error::invalid_argument("n", "matrix dimension must be >= 1"));
    }
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            data[i * n + j] = 1.0 / (i + j + 1) as f64;
        }
    }
    Ok(Matrix::from_parts(data, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_positive_entries_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = random_positive(8, &mut rng).unwrap();
        assert!(m.as_slice().iter().all(|&x| x > 0.0 && x < 1.0));
    }

    #[test]
    fn hilbert_entries() {
        let h = hilbert(3).unwrap();
        assert_eq!(h.get(0, 0), 1.0);
        assert_eq!(h.get(1, 1), 1.0 / 3.0);
        assert_eq!(h.get(2, 1), 1.0 / 4.0);
    }

    #[test]
    fn zero_dimension_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_positive(0, &mut rng).is_err());
        assert!(hilbert(0).is_err());
    }
}
