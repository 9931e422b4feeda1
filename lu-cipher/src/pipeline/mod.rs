//! # Pipeline
//!
//! Encryption: encode → key generation → `Cons = A·M` → `A = L·U`,
//! `B = L⁻¹·Cons` → mix → package.
//!
//! Decryption runs the same algebra backwards from a [`TransformPackage`]:
//! unmix → `Cons = L·B` → solve `A·x = Cons[:, j]` per column → decode.
//! The first failing step aborts the whole operation.

pub mod package;

pub use package::{CiphertextMeta, DisplayCiphertext, TransformPackage};

use log::{debug, warn};
use rand::Rng;

use crate::codec::{decode, encode};
use crate::errors::LUCipherError;
use crate::field::matrix_ops::{column, from_columns, matrix_mul};
use crate::field::{Field, Matrix};
use crate::keygen::generate_key_matrix;
use crate::lu::{invert_lower_triangular, lu_decompose};
use crate::params::CipherParams;
use crate::sle::solve_linear;
use crate::transform;

/// Result of [`encrypt_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionOutput {
    /// The encoded plaintext `M`.
    pub matrix: Matrix,
    /// Retain this to decrypt.
    pub package: TransformPackage,
    /// Base64 display form; see [`DisplayCiphertext`].
    pub ciphertext: String,
}

/// Result of [`decrypt_package`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptionOutput {
    /// The recovered plaintext matrix `M`.
    pub matrix: Matrix,
    pub plaintext: String,
}

/// Encrypts `plaintext` with the default parameters and the thread-local generator.
pub fn encrypt_message(plaintext: &str) -> Result<EncryptionOutput, LUCipherError> {
    encrypt_message_with(plaintext, &CipherParams::default(), &mut rand::rng())
}

/// Encrypts `plaintext` under `params`, drawing all randomness from `rng`.
///
/// The plaintext is uppercased first. Random draws happen in a fixed order
/// (key-matrix samples, then `s`), so a replayed generator gives an identical result.
///
/// # Errors
///
/// * `LUCipherError::InvalidParameters` / `InvalidModulus` if `params` breaks the
///   [`CipherParams::validate`] invariants. Nothing is drawn from `rng` then.
/// * `LUCipherError::SingularPivot` when the key matrix cannot be factored without
///   row exchanges. No other key is tried.
pub fn encrypt_message_with<R: Rng + ?Sized>(
    plaintext: &str,
    params: &CipherParams,
    rng: &mut R,
) -> Result<EncryptionOutput, LUCipherError> {
    params.validate()?;
    let field = params.field()?;
    let n = params.n;

    let M = encode(&plaintext.to_uppercase(), n);
    debug!("encode: {} chars into {}x{} matrix", plaintext.chars().count(), n, n);

    let A = generate_key_matrix(n, &field, rng)?;
    debug!("keygen: invertible key matrix mod {}", field.modulus());

    let Cons = matrix_mul(&A, &M, &field)?;

    let (L, U) = lu_decompose(&A, &field).inspect_err(|e| warn!("factor: {}", e))?;
    let Linv = invert_lower_triangular(&L, &field)?;
    let B = matrix_mul(&Linv, &Cons, &field)?;
    debug!("factor: A = L·U, intermediate B computed");

    let s = rng.random_range(params.s_min..=params.s_max);
    let vals = transform::forward(&B, s, &field);
    debug!("mix: evaluation base s = {}", s);

    let package = TransformPackage {
        n,
        P: field.modulus(),
        A,
        L,
        U,
        s,
        vals,
    };
    let ciphertext = DisplayCiphertext::from_package(&package).encode()?;
    debug!("package: {} byte display ciphertext", ciphertext.len());

    Ok(EncryptionOutput {
        matrix: M,
        package,
        ciphertext,
    })
}

/// Decrypts a full package. The display ciphertext alone is not enough.
///
/// # Errors
///
/// * `LUCipherError::InvalidPackage` for malformed or out-of-range packages.
/// * `LUCipherError::SingularMatrix` if `s` gives a non-invertible mixing matrix
///   or `A` is singular.
pub fn decrypt_package(package: &TransformPackage) -> Result<DecryptionOutput, LUCipherError> {
    let field = package.validate()?;

    let B = transform::inverse(&package.vals, package.s, &field)
        .inspect_err(|e| warn!("unmix: {}", e))?;
    debug!("unmix: B recovered with s = {}", package.s);

    let Cons = matrix_mul(&package.L, &B, &field)?;

    let M = solve_columns(&package.A, &Cons, &field).inspect_err(|e| warn!("solve: {}", e))?;
    debug!("solve: plaintext matrix recovered");

    let plaintext = decode(&M);
    Ok(DecryptionOutput {
        matrix: M,
        plaintext,
    })
}

/// Solves `A·X = C` one column of `C` at a time.
fn solve_columns(A: &Matrix, C: &Matrix, field: &Field) -> Result<Matrix, LUCipherError> {
    let n = A.len();
    let columns = (0..n)
        .map(|j| solve_linear(A, &column(C, j), field))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(from_columns(&columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::field::matrix_ops::identity_matrix;

    /// Encrypts with successive seeds until the key factors without pivoting.
    fn encrypt_seeded(text: &str, params: &CipherParams) -> (u64, EncryptionOutput) {
        for seed in 0.. {
            match encrypt_message_with(text, params, &mut StdRng::seed_from_u64(seed)) {
                Ok(out) => return (seed, out),
                Err(LUCipherError::SingularPivot { .. }) => continue,
                Err(e) => panic!("unexpected error: {:?}", e),
            }
        }
        unreachable!()
    }

    #[test]
    fn test_hello_round_trip() -> Result<(), LUCipherError> {
        let (_, out) = encrypt_seeded("HELLO", &CipherParams::default());
        assert_eq!(
            out.matrix,
            vec![vec![8, 5, 12], vec![12, 15, 27], vec![27, 27, 27]]
        );

        let back = decrypt_package(&out.package)?;
        assert_eq!(back.matrix, out.matrix);
        assert_eq!(back.plaintext, "HELLO");
        Ok(())
    }

    #[test]
    fn test_lowercase_is_uppercased() -> Result<(), LUCipherError> {
        let (_, out) = encrypt_seeded("hello world", &CipherParams::default());
        assert_eq!(decrypt_package(&out.package)?.plaintext, "HELLO WOR");
        Ok(())
    }

    #[test]
    fn test_package_invariants() -> Result<(), LUCipherError> {
        let params = CipherParams::default();
        let (_, out) = encrypt_seeded("MATRIX", &params);
        let field = params.field()?;
        let pkg = &out.package;

        assert_eq!(matrix_mul(&pkg.L, &pkg.U, &field)?, pkg.A);
        for i in 0..pkg.n {
            assert_eq!(pkg.L[i][i], 1);
            for j in 0..i {
                assert_eq!(pkg.U[i][j], 0);
            }
        }
        assert!((params.s_min..=params.s_max).contains(&pkg.s));
        assert!(pkg.validate().is_ok());

        let Linv = invert_lower_triangular(&pkg.L, &field)?;
        assert_eq!(matrix_mul(&pkg.L, &Linv, &field)?, identity_matrix(pkg.n));
        Ok(())
    }

    #[test]
    fn test_replayed_randomness_is_deterministic() {
        let params = CipherParams::default();
        let (seed, first) = encrypt_seeded("LU CIPHER", &params);
        let second =
            encrypt_message_with("LU CIPHER", &params, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ciphertext_projects_package() -> Result<(), LUCipherError> {
        let (_, out) = encrypt_seeded("HELLO", &CipherParams::default());
        let shown = DisplayCiphertext::parse(&out.ciphertext)?;
        assert_eq!(shown, DisplayCiphertext::from_package(&out.package));
        assert_eq!(shown.meta.n, 3);
        assert_eq!(shown.meta.P, 37);
        Ok(())
    }

    #[test]
    fn test_hand_built_params_are_rejected() {
        let empty_range = CipherParams { s_min: 8, s_max: 7, ..CipherParams::default() };
        assert!(matches!(
            encrypt_message_with("HELLO", &empty_range, &mut StdRng::seed_from_u64(0)),
            Err(LUCipherError::InvalidParameters(_))
        ));

        let base_past_modulus = CipherParams { s_min: 100, s_max: 200, ..CipherParams::default() };
        assert!(matches!(
            encrypt_message_with("HELLO", &base_past_modulus, &mut StdRng::seed_from_u64(0)),
            Err(LUCipherError::InvalidParameters(_))
        ));

        let no_blocks = CipherParams { n: 0, ..CipherParams::default() };
        assert!(encrypt_message_with("HELLO", &no_blocks, &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_tampered_base_fails_without_output() {
        let (_, mut out) = encrypt_seeded("HELLO", &CipherParams::default());
        out.package.s = 1;
        assert!(matches!(
            decrypt_package(&out.package),
            Err(LUCipherError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_singular_key_in_package_fails() {
        let (_, mut out) = encrypt_seeded("HELLO", &CipherParams::default());
        out.package.A = vec![vec![1, 2, 3], vec![2, 4, 6], vec![0, 0, 1]];
        assert!(matches!(
            decrypt_package(&out.package),
            Err(LUCipherError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_zero_leading_key_entry_fails_fast() {
        let params = CipherParams::default();
        let mut saw_pivot_failure = false;
        for seed in 0..400 {
            let mut rng = StdRng::seed_from_u64(seed);
            let field = params.field().unwrap();
            let A = generate_key_matrix(params.n, &field, &mut rng).unwrap();
            let result =
                encrypt_message_with("HELLO", &params, &mut StdRng::seed_from_u64(seed));
            if A[0][0] == 0 {
                saw_pivot_failure = true;
                assert!(matches!(
                    result,
                    Err(LUCipherError::SingularPivot { column: 0, .. })
                ));
            }
        }
        assert!(saw_pivot_failure);
    }

    #[test]
    fn test_other_dimensions() -> Result<(), LUCipherError> {
        for (n, text) in [(1, "Q"), (2, "ABCD"), (4, "SIXTEEN LETTERS")] {
            let params = CipherParams::try_with(n, 37, 3, 7)?;
            let (_, out) = encrypt_seeded(text, &params);
            assert_eq!(decrypt_package(&out.package)?.plaintext, text);
        }
        Ok(())
    }
}
