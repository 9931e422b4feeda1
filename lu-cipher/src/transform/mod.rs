//! # Polynomial Mixing Transform
//!
//! Each column of `B` is read as the coefficient vector of
//! `g(x) = c_0 + c_1·x + … + c_{n-1}·x^{n-1}` and evaluated at the nodes
//! `x = s, s², …, sⁿ`. The map from coefficients to values is the matrix
//! `V[r][i] = s^((r+1)·i) mod P`, which depends only on `s`, `n` and `P`.
//!
//! The forward direction never fails. The inverse solves `V·c = vals[col]`
//! per column, so an evaluation base whose nodes collide mod P (for example
//! `s ≡ 0` or `s ≡ ±1`) makes it fail with `SingularMatrix`.

use crate::errors::LUCipherError;
use crate::field::matrix_ops::{column, from_columns};
use crate::field::{Field, Matrix};
use crate::sle::solve_linear;

/// Builds the `n×n` mixing matrix for evaluation base `s`.
///
/// # Example
///
/// ```
/// # use lu_cipher::field::Field;
/// # use lu_cipher::transform::mixing_matrix;
/// let field = Field::try_with(37).unwrap();
/// assert_eq!(
///     mixing_matrix(3, 3, &field),
///     vec![vec![1, 3, 9], vec![1, 9, 7], vec![1, 27, 26]]
/// );
/// ```
pub fn mixing_matrix(s: u64, n: usize, field: &Field) -> Matrix {
    (0..n)
        .map(|r| {
            let node = field.pow(s as i64, r as u64 + 1);
            (0..n).map(|i| field.pow(node, i as u64)).collect()
        })
        .collect()
}

/// Whether the transform can be inverted for this `s` and `n`.
///
/// The mixing matrix is Vandermonde, so this holds exactly when the nodes
/// `s, s², …, sⁿ` are pairwise distinct mod P.
pub fn is_invertible_base(s: u64, n: usize, field: &Field) -> bool {
    let nodes: Vec<i64> = (1..=n as u64).map(|k| field.pow(s as i64, k)).collect();
    nodes
        .iter()
        .enumerate()
        .all(|(i, a)| nodes[i + 1..].iter().all(|b| a != b))
}

/// Mixes `B` column by column. `vals[col][k]` is `g_col(s^(k+1)) mod P`.
pub fn forward(B: &Matrix, s: u64, field: &Field) -> Matrix {
    let n = B.len();
    let V = mixing_matrix(s, n, field);

    (0..n)
        .map(|col| {
            let coeffs = column(B, col);
            V.iter()
                .map(|row| {
                    row.iter()
                        .zip(&coeffs)
                        .fold(0, |acc, (&v, &c)| field.add(acc, field.mul(v, c)))
                })
                .collect()
        })
        .collect()
}

/// Recovers `B` from `vals` by solving the mixing system once per column.
///
/// # Errors
///
/// * `LUCipherError::SingularMatrix` if the mixing matrix for `s` is not invertible mod P.
/// * `LUCipherError::DimensionMismatch` if `vals` is not square.
pub fn inverse(vals: &Matrix, s: u64, field: &Field) -> Result<Matrix, LUCipherError> {
    let n = vals.len();
    let V = mixing_matrix(s, n, field);

    let coeffs_by_col = vals
        .iter()
        .map(|col_vals| solve_linear(&V, col_vals, field))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(from_columns(&coeffs_by_col))
}
