//! LU factorisation without pivoting, and inversion of its unit-lower factor.

use crate::errors::LUCipherError;
use crate::field::matrix_ops::{ensure_square, from_columns, identity_matrix};
use crate::field::{Field, Matrix};

/// Factors `A` into unit-lower-triangular `L` and upper-triangular `U` with `L·U ≡ A (mod P)`.
///
/// Column by column: the entries of `U` on and above the diagonal come from the
/// already known parts of `L` and `U`, then the entries of `L` below the
/// diagonal are divided by the pivot `U[j][j]` using its modular inverse.
///
/// Rows are never exchanged. A matrix whose leading principal minors vanish is
/// rejected even when it is invertible.
///
/// # Errors
///
/// * `LUCipherError::SingularPivot` if some pivot `U[j][j]` is 0 mod P.
/// * `LUCipherError::DimensionMismatch` if `A` is not square.
pub fn lu_decompose(A: &Matrix, field: &Field) -> Result<(Matrix, Matrix), LUCipherError> {
    let n = A.len();
    ensure_square(A, n)?;

    let mut L = identity_matrix(n);
    let mut U = vec![vec![0i64; n]; n];

    for j in 0..n {
        for i in 0..=j {
            let mut s = 0;
            for k in 0..i {
                s = field.add(s, field.mul(L[i][k], U[k][j]));
            }
            U[i][j] = field.sub(A[i][j], s);
        }

        if U[j][j] == 0 {
            return Err(LUCipherError::SingularPivot {
                column: j,
                modulus: field.modulus(),
            });
        }

        let inv_pivot = field.inv(U[j][j])?;
        for i in (j + 1)..n {
            let mut s = 0;
            for k in 0..j {
                s = field.add(s, field.mul(L[i][k], U[k][j]));
            }
            L[i][j] = field.mul(field.sub(A[i][j], s), inv_pivot);
        }
    }

    Ok((L, U))
}

/// Inverts a unit-lower-triangular `L` by forward substitution against each basis column.
///
/// The unit diagonal means every substitution step is a subtraction; no inverse is taken.
/// Entries of `L` on or above the diagonal are not read.
pub fn invert_lower_triangular(L: &Matrix, field: &Field) -> Result<Matrix, LUCipherError> {
    let n = L.len();
    ensure_square(L, n)?;

    let columns: Vec<_> = (0..n)
        .map(|col| {
            let mut y = vec![0i64; n];
            for i in 0..n {
                let e = i64::from(i == col);
                let mut s = 0;
                for k in 0..i {
                    s = field.add(s, field.mul(L[i][k], y[k]));
                }
                y[i] = field.sub(e, s);
            }
            y
        })
        .collect();

    Ok(from_columns(&columns))
}
