use log::{debug, trace};
use rand::Rng;

use crate::errors::LUCipherError;
use crate::field::matrix_ops::{determinant, determinant_cofactor};
use crate::field::{Field, Matrix};

/// Largest dimension for which the determinant is taken by cofactor expansion.
/// Above it the key generator switches to Gaussian elimination.
pub const COFACTOR_LIMIT: usize = 4;

/// Generates a random key matrix that is invertible over the field.
///
/// Samples `n×n` matrices with entries uniform in `[0, P)`, row-major, until one
/// has a non-zero determinant mod P. There is no retry bound.
pub fn generate_key_matrix<R: Rng + ?Sized>(
    n: usize,
    field: &Field,
    rng: &mut R,
) -> Result<Matrix, LUCipherError> {
    let p = field.modulus() as i64;
    let mut attempts = 0usize;

    loop {
        attempts += 1;
        let A: Matrix = (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(0..p)).collect())
            .collect();

        let det = if n <= COFACTOR_LIMIT {
            determinant_cofactor(&A, field)?
        } else {
            determinant(&A, field)?
        };

        if det != 0 {
            debug!("key matrix accepted after {} attempt(s), det = {}", attempts, det);
            return Ok(A);
        }
        trace!("key matrix sample {} is singular mod {}, retrying", attempts, p);
    }
}

/// [`generate_key_matrix`] driven by the thread-local generator.
pub fn generate(n: usize, field: &Field) -> Result<Matrix, LUCipherError> {
    generate_key_matrix(n, field, &mut rand::rng())
}
