#[derive(thiserror::Error, Debug)]
pub enum LUCipherError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, P) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// LU decomposition met a zero pivot. There is no row exchange, so the matrix is rejected.
    #[error("SingularPivot: pivot U[{column}][{column}] is 0 mod {modulus}")]
    SingularPivot { column: usize, modulus: u64 },
    /// Gaussian elimination found no non-zero entry at or below the diagonal of a column.
    #[error("SingularMatrix: no usable pivot in column {column} mod {modulus}")]
    SingularMatrix { column: usize, modulus: u64 },
    /// Error when creating a field with an invalid modulus (not a prime).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("InvalidPackage: {0}")]
    InvalidPackage(String),

    #[error("Could not decode ciphertext: {0}")]
    DecodingError(String),
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
