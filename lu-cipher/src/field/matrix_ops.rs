use crate::errors::LUCipherError;
use crate::field::{Field, Matrix, Vector};

/// Computes the matrix product `C = AB` modulo `P`, where `P` is the modulus of the field.
///
/// Every entry is reduced into `[0, P)`.
///
/// # Errors
///
/// Returns `LUCipherError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, field: &Field) -> Result<Matrix, LUCipherError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A
    if b.len() != m_common {
        return Err(LUCipherError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    let p = b.first().map_or(0, |row| row.len()); // cols in B

    if let Some(i) = a.iter().position(|row| row.len() != m_common) {
        return Err(LUCipherError::DimensionMismatch(format!(
            "Matrix A row {} has incorrect length (expected {})",
            i, m_common
        )));
    }
    if let Some(k) = b.iter().position(|row| row.len() != p) {
        return Err(LUCipherError::DimensionMismatch(format!(
            "Matrix B row {} has incorrect length (expected {})",
            k, p
        )));
    }

    let mut c = vec![vec![0; p]; n];
    for i in 0..n {
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                sum = field.add(sum, field.mul(a[i][k], b[k][j]));
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Returns column `j` of `matrix` as a vector.
pub fn column(matrix: &Matrix, j: usize) -> Vector {
    matrix.iter().map(|row| row[j]).collect()
}

/// Assembles a matrix whose `j`-th column is `columns[j]`.
pub fn from_columns(columns: &[Vector]) -> Matrix {
    let rows = columns.first().map_or(0, |c| c.len());
    (0..rows)
        .map(|i| columns.iter().map(|c| c[i]).collect())
        .collect()
}

/// Checks that `matrix` is `n×n`.
///
/// # Errors
///
/// Returns `LUCipherError::DimensionMismatch` naming the first offending dimension.
pub fn ensure_square(matrix: &Matrix, n: usize) -> Result<(), LUCipherError> {
    if matrix.len() != n {
        return Err(LUCipherError::DimensionMismatch(format!(
            "Expected {} rows, got {}",
            n,
            matrix.len()
        )));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(LUCipherError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(())
}

/// Computes det(A) mod P by recursive cofactor (Laplace) expansion along the first row.
///
/// Exponential in `n`; only meant for the small matrices the cipher uses.
pub fn determinant_cofactor(matrix: &Matrix, field: &Field) -> Result<i64, LUCipherError> {
    let n = matrix.len();
    ensure_square(matrix, n)?;

    Ok(cofactor_expand(matrix, field))
}

fn cofactor_expand(matrix: &Matrix, field: &Field) -> i64 {
    match matrix.len() {
        0 => 1,
        1 => field.normalize(matrix[0][0]),
        n => {
            let mut det = 0;
            for c in 0..n {
                let minor: Matrix = matrix[1..]
                    .iter()
                    .map(|row| {
                        row.iter()
                            .enumerate()
                            .filter(|&(j, _)| j != c)
                            .map(|(_, &v)| v)
                            .collect()
                    })
                    .collect();
                let term = field.mul(matrix[0][c], cofactor_expand(&minor, field));
                det = if c % 2 == 0 {
                    field.add(det, term)
                } else {
                    field.sub(det, term)
                };
            }
            det
        }
    }
}

/// Computes det(A) mod P by Gaussian elimination over the field.
///
/// Polynomial time; returns 0 as soon as a column has no non-zero pivot candidate.
pub fn determinant(matrix: &Matrix, field: &Field) -> Result<i64, LUCipherError> {
    let n = matrix.len();
    ensure_square(matrix, n)?;

    let mut a: Matrix = matrix
        .iter()
        .map(|row| row.iter().map(|&x| field.normalize(x)).collect())
        .collect();
    let mut det = 1 % field.modulus() as i64;

    for i in 0..n {
        let Some(pivot) = (i..n).find(|&r| a[r][i] != 0) else {
            return Ok(0);
        };
        if pivot != i {
            a.swap(i, pivot);
            det = field.neg(det);
        }

        let p = a[i][i];
        det = field.mul(det, p);
        let p_inv = field.inv(p)?;

        for row in (i + 1)..n {
            let factor = field.mul(a[row][i], p_inv);
            if factor == 0 {
                continue;
            }
            for col in i..n {
                a[row][col] = field.sub(a[row][col], field.mul(factor, a[i][col]));
            }
        }
    }

    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    fn test_field() -> Field {
        Field::try_with(37).unwrap()
    }

    #[derive(Clone, Debug)]
    struct SmallMatrix(Matrix);

    impl Arbitrary for SmallMatrix {
        fn arbitrary(g: &mut Gen) -> Self {
            let n = 1 + usize::arbitrary(g) % 4;
            let m = (0..n)
                .map(|_| (0..n).map(|_| (u8::arbitrary(g) % 37) as i64).collect())
                .collect();
            SmallMatrix(m)
        }
    }

    #[test]
    fn test_matrix_mul_ok() {
        let field = test_field();
        let a = vec![vec![1, 2], vec![3, 4]];
        let b = vec![vec![5, 6], vec![7, 8]];
        // [[19, 22], [43, 50]] mod 37
        let expected = vec![vec![19, 22], vec![6, 13]];
        assert_eq!(matrix_mul(&a, &b, &field).unwrap(), expected);
    }

    #[test]
    fn test_matrix_mul_reduces_negative_entries() {
        let field = test_field();
        let a = vec![vec![-1, 0], vec![0, -1]];
        let b = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(
            matrix_mul(&a, &b, &field).unwrap(),
            vec![vec![36, 35], vec![34, 33]]
        );
    }

    #[test]
    fn test_matrix_mul_dimension_mismatch() {
        let field = test_field();
        let a = vec![vec![1, 2], vec![3, 4]];
        let rect = vec![vec![5, 6, 7], vec![8, 9, 10]];
        assert!(matrix_mul(&a, &rect, &field).is_ok());

        let tall = vec![vec![1], vec![2], vec![3]];
        assert!(matrix_mul(&a, &tall, &field).is_err());

        let ragged = vec![vec![1, 2], vec![3]];
        assert!(matrix_mul(&ragged, &a, &field).is_err());
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(
            identity_matrix(3),
            vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
        assert_eq!(identity_matrix(0), Matrix::new());
    }

    #[test]
    fn test_columns_round_trip() {
        let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let cols: Vec<Vector> = (0..3).map(|j| column(&m, j)).collect();
        assert_eq!(cols[1], vec![2, 5]);
        assert_eq!(from_columns(&cols), m);
    }

    #[test]
    fn test_ensure_square() {
        assert!(ensure_square(&identity_matrix(3), 3).is_ok());
        assert!(ensure_square(&identity_matrix(3), 2).is_err());
        assert!(ensure_square(&vec![vec![1, 2], vec![3]], 2).is_err());
    }

    #[test]
    fn test_determinant_known_values() -> Result<(), LUCipherError> {
        let field = test_field();
        let m = vec![vec![2, 0, 1], vec![1, 3, 2], vec![1, 1, 1]];
        // 2*(3-2) - 0 + 1*(1-3) = 0
        assert_eq!(determinant(&m, &field)?, 0);
        assert_eq!(determinant_cofactor(&m, &field)?, 0);

        let swap = vec![vec![0, 1], vec![1, 0]];
        assert_eq!(determinant(&swap, &field)?, 36);
        assert_eq!(determinant_cofactor(&swap, &field)?, 36);
        Ok(())
    }

    #[test]
    fn test_determinant_rejects_non_square() {
        let field = test_field();
        assert!(determinant(&vec![vec![1, 2]], &field).is_err());
        assert!(determinant_cofactor(&vec![vec![1, 2]], &field).is_err());
    }

    #[quickcheck]
    fn prop_determinants_agree(m: SmallMatrix) -> bool {
        let field = test_field();
        determinant(&m.0, &field).unwrap() == determinant_cofactor(&m.0, &field).unwrap()
    }
}
