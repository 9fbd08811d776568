//! Dense square matrix type
//!
//! The eigensolver works on real square matrices only, so the type bakes the
//! invariant in: a `Matrix` always holds `n * n` finite-or-not f64 entries in
//! row-major order with `n >= 1`. Construction validates shape; everything
//! downstream can index without re-checking.

use crate::error::{Error, Result};

/// Dense row-major square matrix of `f64` entries.
///
/// The similarity-transform iteration never mutates a matrix in place: each
/// step consumes the current iterate by reference and produces a fresh
/// `Matrix` value.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    n: usize,
}

impl Matrix {
    /// Build a matrix from a flat row-major buffer of length `n * n`.
    pub fn from_slice(data: &[f64], n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_argument("n", "matrix dimension must be >= 1"));
        }
        if data.len() != n * n {
            return Err(Error::shape_mismatch(&[n, n], &[data.len()]));
        }
        Ok(Self {
            data: data.to_vec(),
            n,
        })
    }

    /// Build a matrix from row vectors. All rows must have length `rows.len()`.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::invalid_argument("rows", "matrix dimension must be >= 1"));
        }
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(Error::shape_mismatch(&[n, n], &[n, row.len()]));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, n })
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_argument("n", "matrix dimension must be >= 1"));
        }
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Ok(Self { data, n })
    }

    /// Internal constructor for buffers already known to be `n * n`.
    pub(crate) fn from_parts(data: Vec<f64>, n: usize) -> Self {
        debug_assert!(n >= 1 && data.len() == n * n);
        Self { data, n }
    }

    /// Matrix dimension n.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Entry at row `r`, column `c`.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is out of bounds.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> f64 {
        assert!(r < self.n && c < self.n, "index ({r}, {c}) out of bounds for {0}x{0} matrix", self.n);
        self.data[r * self.n + c]
    }

    /// Row `r` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of bounds.
    #[inline]
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.n..(r + 1) * self.n]
    }

    /// Iterator over rows, in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n)
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Matrix-vector product `A * x`.
    ///
    /// Used by callers to verify the eigen relation `A*v ≈ lambda*v`; the
    /// iteration itself never multiplies by a probe vector.
    pub fn matvec(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.n {
            return Err(Error::shape_mismatch(&[self.n], &[x.len()]));
        }
        Ok(self
            .rows()
            .map(|row| row.iter().zip(x).map(|(a, b)| a * b).sum())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_validates_length() {
        assert!(Matrix::from_slice(&[1.0, 2.0, 3.0], 2).is_err());
        let m = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.get(1, 0), 3.0);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(Matrix::from_slice(&[], 0).is_err());
        assert!(Matrix::from_rows(&[]).is_err());
        assert!(Matrix::identity(0).is_err());
    }

    #[test]
    fn identity_rows() {
        let id = Matrix::identity(3).unwrap();
        assert_eq!(id.row(1), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn matvec_matches_manual() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let y = m.matvec(&[1.0, 1.0]).unwrap();
        assert_eq!(y, vec![3.0, 7.0]);
        assert!(m.matvec(&[1.0]).is_err());
    }
}
