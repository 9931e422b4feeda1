use crate::errors::LUCipherError;
use crate::field::matrix_ops::ensure_square;
use crate::field::{Field, Matrix};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use serde::{Deserialize, Serialize};

/// Everything decryption needs: the key matrix, its LU factors, the
/// evaluation base and the mixed values.
///
/// Serialises to `{ "n", "P", "A", "L", "U", "s", "vals" }`. The key travels in
/// the clear; the package is a teaching artifact, not a secret-keeping one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformPackage {
    pub n: usize,
    pub P: u64,
    pub A: Matrix,
    pub L: Matrix,
    pub U: Matrix,
    pub s: u64,
    /// `vals[col]` holds the mixed values of column `col`.
    pub vals: Matrix,
}

impl TransformPackage {
    /// Checks shapes and ranges, returning the field the package lives in.
    pub fn validate(&self) -> Result<Field, LUCipherError> {
        if self.n == 0 {
            return Err(LUCipherError::InvalidPackage(
                "Dimension n must be > 0".to_string(),
            ));
        }
        let field = Field::try_with(self.P)
            .map_err(|e| LUCipherError::InvalidPackage(e.to_string()))?;
        let p = self.P as i64;

        for (name, matrix) in [
            ("A", &self.A),
            ("L", &self.L),
            ("U", &self.U),
            ("vals", &self.vals),
        ] {
            ensure_square(matrix, self.n)
                .map_err(|e| LUCipherError::InvalidPackage(format!("{}: {}", name, e)))?;
            if let Some(v) = matrix.iter().flatten().find(|&&v| !(0..p).contains(&v)) {
                return Err(LUCipherError::InvalidPackage(format!(
                    "{} holds {} which is outside [0, {})",
                    name, v, self.P
                )));
            }
        }

        if self.s >= self.P {
            return Err(LUCipherError::InvalidPackage(format!(
                "Evaluation base {} is outside [0, {})",
                self.s, self.P
            )));
        }

        Ok(field)
    }

    pub fn to_json(&self) -> Result<String, LUCipherError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LUCipherError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiphertextMeta {
    pub n: usize,
    pub P: u64,
    pub s: u64,
}

/// The presentational projection of a package: `{ meta: { n, P, s }, vals }`.
///
/// It omits `A`, `L` and `U` and cannot be decrypted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCiphertext {
    pub meta: CiphertextMeta,
    pub vals: Matrix,
}

impl DisplayCiphertext {
    pub fn from_package(package: &TransformPackage) -> Self {
        Self {
            meta: CiphertextMeta {
                n: package.n,
                P: package.P,
                s: package.s,
            },
            vals: package.vals.clone(),
        }
    }

    /// Base64 of the compact JSON form.
    pub fn encode(&self) -> Result<String, LUCipherError> {
        let json = serde_json::to_string(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Decodes a string produced by [`DisplayCiphertext::encode`].
    pub fn parse(ciphertext: &str) -> Result<Self, LUCipherError> {
        let bytes = STANDARD
            .decode(ciphertext.trim())
            .map_err(|e| LUCipherError::DecodingError(format!("Base64 decoding failed: {}", e)))?;
        let json = String::from_utf8(bytes).map_err(|e| {
            LUCipherError::DecodingError(format!(
                "Failed to convert decoded bytes to UTF-8: {}",
                e
            ))
        })?;

        Ok(serde_json::from_str(&json)?)
    }
}
