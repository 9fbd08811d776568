//! Numerical algorithms
//!
//! One algorithm family lives here: the diagonal similarity-transform
//! iteration for the dominant eigenpair of a dense square matrix.
//!
//! # Architecture
//!
//! The solver is a **composite operation** built from three pure step
//! kernels plus a driving loop:
//!
//! - Row-sum reduction over the current iterate ([`similarity::row_sums`])
//! - Diagonal conjugation producing the next iterate
//!   ([`similarity::next_matrix`])
//! - Pairwise stabilization test and running-product eigenvector
//!   accumulation ([`similarity::is_converged`],
//!   [`similarity::accumulate_estimate`])
//!
//! The step kernels in `similarity::steps` define THE algorithm; the driving
//! loop only sequences them and enforces the failure policies (zero-row-sum
//! hazard, iteration cap).

pub mod similarity;

pub use similarity::{dominant_eig, DominantEigOptions, DominantEigResult};
