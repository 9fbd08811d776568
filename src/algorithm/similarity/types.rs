//! Options and result types for the similarity-transform eigensolver

// ============================================================================
// Options
// ============================================================================

/// Configuration options for [`dominant_eig`](super::dominant_eig)
#[derive(Debug, Clone)]
pub struct DominantEigOptions {
    /// Convergence tolerance (default: 1e-8)
    ///
    /// The iteration stops once every pair of consecutive row sums differs
    /// by less than `tol` in absolute value; at that point the (numerically
    /// uniform) row sum is the dominant eigenvalue estimate.
    pub tol: f64,

    /// Maximum number of similarity transforms to apply (default: 1000)
    ///
    /// The underlying method has no intrinsic cap and loops forever on
    /// matrices whose row sums never stabilize (e.g. a complex dominant
    /// eigenvalue pair). Exhausting the cap is reported as
    /// [`Error::NonConvergence`](crate::error::Error::NonConvergence) with
    /// the best-effort estimate at that point.
    pub max_iter: usize,

    /// Whether to record the row-sum spread at every iteration (default: false)
    ///
    /// When enabled, [`DominantEigResult::spread_history`] holds
    /// `max(v) - min(v)` of each iteration's row-sum vector. Useful for
    /// convergence diagnostics but adds memory overhead.
    pub track_sum_spread: bool,
}

impl Default for DominantEigOptions {
    fn default() -> Self {
        Self {
            tol: 1e-8,
            max_iter: 1000,
            track_sum_spread: false,
        }
    }
}

// ============================================================================
// Result
// ============================================================================

/// Result of a converged similarity-transform eigensolve
#[derive(Debug, Clone, PartialEq)]
pub struct DominantEigResult {
    /// Dominant eigenvalue estimate: entry 0 of the converged row-sum vector
    pub eigenvalue: f64,

    /// Eigenvector estimate in running-product scale
    ///
    /// Element-wise product over all executed iterations of each
    /// iteration's row-sum vector divided by its maximum entry, seeded with
    /// all ones. NOT unit-normalized; a 1x1 input yields `[1.0]`.
    pub eigenvector: Vec<f64>,

    /// Number of similarity transforms applied
    ///
    /// 0 when the input's own row-sum vector already passes the
    /// convergence check (always the case for 1x1 matrices).
    pub iterations: usize,

    /// Final row-sum spread `max(v) - min(v)`
    ///
    /// Bounded by `(n - 1) * tol` at convergence.
    pub spread: f64,

    /// Row-sum spread at each iteration
    ///
    /// Empty unless [`DominantEigOptions::track_sum_spread`] is true.
    pub spread_history: Vec<f64>,
}
