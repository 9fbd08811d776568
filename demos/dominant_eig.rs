//! Dominant Eigenpair Sweep
//!
//! Generates random positive matrices of doubling dimension, solves each for
//! its dominant eigenvalue and eigenvector, and prints the eigenvalue, the
//! transform count, and the wall time per solve.
//!
//! Run with:
//! ```sh
//! cargo run --release --example dominant_eig
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use simeig::generate;
use simeig::prelude::*;

fn main() -> Result<()> {
    println!("similarity-transform dominant eigensolver\n");
    println!("{:>6}  {:>14}  {:>10}  {:>10}", "n", "eigenvalue", "iters", "elapsed");

    let options = DominantEigOptions {
        tol: 1e-8,
        max_iter: 10_000,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(0xD1A6);

    let mut dim = 32;
    while dim <= 256 {
        let a = generate::random_positive(dim, &mut rng)?;

        let start = Instant::now();
        let eig = dominant_eig(&a, options.clone())?;
        let elapsed = start.elapsed();

        println!(
            "{:>6}  {:>14.6}  {:>10}  {:>8.2?}",
            dim, eig.eigenvalue, eig.iterations, elapsed
        );
        dim <<= 1;
    }

    // the published 3x3 example, eigenvector included
    let a = Matrix::from_rows(&[
        vec![1.0, 1.0, 2.0],
        vec![2.0, 1.0, 3.0],
        vec![2.0, 3.0, 5.0],
    ])?;
    let eig = dominant_eig(&a, DominantEigOptions { tol: 1e-3, ..Default::default() })?;
    println!("\n3x3 example: eigenvalue {:.4}", eig.eigenvalue);
    println!("eigenvector (running-product scale): {:?}", eig.eigenvector);

    Ok(())
}
