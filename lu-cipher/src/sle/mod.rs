//! Gaussian elimination over Z_P.
//!
//! Solves a square system A·x ≡ b (mod P). The pivot for each column is the
//! first non-zero entry at or below the diagonal; magnitudes play no role in
//! a finite field.
use log::trace;

use crate::errors::LUCipherError;
use crate::field::matrix_ops::ensure_square;
use crate::field::{Field, Matrix, Vector};

/// Solve the system A·x ≡ b (mod P) for a square `a`.
///
/// Each pivot row is normalised by the modular inverse of its pivot, rows
/// below are eliminated, and the triangular system is back-substituted.
///
/// # Errors
///
/// * `LUCipherError::SingularMatrix` if a column has no non-zero entry at or below the diagonal.
/// * `LUCipherError::DimensionMismatch` if `a` is not square or `b` has the wrong length.
///
/// # Example
///
/// ```
/// # use lu_cipher::field::Field;
/// # use lu_cipher::sle::solve_linear;
/// let field = Field::try_with(37).unwrap();
/// let a = vec![vec![0, 1], vec![1, 1]];
/// let x = solve_linear(&a, &vec![5, 7], &field).unwrap();
/// assert_eq!(x, vec![2, 5]);
/// ```
pub fn solve_linear(a: &Matrix, b: &Vector, field: &Field) -> Result<Vector, LUCipherError> {
    let n = a.len();
    ensure_square(a, n)?;
    if b.len() != n {
        return Err(LUCipherError::DimensionMismatch(format!(
            "Right-hand side length ({}) must match matrix size ({})",
            b.len(),
            n
        )));
    }

    // augmented [A | b], normalised into [0, P)
    let mut m: Matrix = a
        .iter()
        .zip(b)
        .map(|(row, &bi)| {
            row.iter()
                .chain(std::iter::once(&bi))
                .map(|&v| field.normalize(v))
                .collect()
        })
        .collect();

    for i in 0..n {
        let Some(pivot) = (i..n).find(|&r| m[r][i] != 0) else {
            return Err(LUCipherError::SingularMatrix {
                column: i,
                modulus: field.modulus(),
            });
        };
        if pivot != i {
            trace!("solve_linear: swapping rows {} and {} for column {}", i, pivot, i);
            m.swap(i, pivot);
        }

        let inv = field.inv(m[i][i])?;
        for c in i..=n {
            m[i][c] = field.mul(m[i][c], inv);
        }

        for r in (i + 1)..n {
            let factor = m[r][i];
            if factor == 0 {
                continue;
            }
            for c in i..=n {
                m[r][c] = field.sub(m[r][c], field.mul(factor, m[i][c]));
            }
        }
    }

    let mut x = vec![0i64; n];
    for i in (0..n).rev() {
        let mut s = m[i][n];
        for c in (i + 1)..n {
            s = field.sub(s, field.mul(m[i][c], x[c]));
        }
        x[i] = s;
    }

    Ok(x)
}
