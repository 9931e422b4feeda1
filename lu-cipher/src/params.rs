use crate::errors::LUCipherError;
use crate::field::Field;

use serde::{Deserialize, Serialize};

/// Parameters shared by encryption and decryption.
///
/// The defaults are the reference demo: 3×3 blocks over Z_37 with an
/// evaluation base drawn from `[3, 7]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherParams {
    /// Matrix dimension; a message holds `n²` characters.
    pub n: usize,
    /// Prime modulus of the field.
    pub P: u64,
    /// Smallest evaluation base the mixing transform may draw.
    pub s_min: u64,
    /// Largest evaluation base the mixing transform may draw (inclusive).
    pub s_max: u64,
}

impl CipherParams {
    /// Creates a validated CipherParams instance.
    pub fn try_with(n: usize, P: u64, s_min: u64, s_max: u64) -> Result<Self, LUCipherError> {
        let params = Self { n, P, s_min, s_max };
        params.validate()?;
        Ok(params)
    }

    /// Checks the invariants `try_with` enforces.
    ///
    /// The fields are public, so a hand-built value must pass this before use.
    pub fn validate(&self) -> Result<(), LUCipherError> {
        if self.n == 0 {
            return Err(LUCipherError::InvalidParameters(
                "Matrix dimension n must be > 0".to_string(),
            ));
        }

        // rejects composite moduli
        Field::try_with(self.P)?;

        if self.s_min == 0 || self.s_min > self.s_max || self.s_max >= self.P {
            return Err(LUCipherError::InvalidParameters(format!(
                "Evaluation base range [{}, {}] must be non-empty and lie within [1, {})",
                self.s_min, self.s_max, self.P
            )));
        }

        Ok(())
    }

    /// Parses and validates parameters from a JSON document.
    ///
    /// # Example
    ///
    /// ```
    /// # use lu_cipher::params::CipherParams;
    /// let params = CipherParams::from_json(r#"{"n":2,"P":29,"s_min":2,"s_max":5}"#).unwrap();
    /// assert_eq!(params.n, 2);
    /// assert!(CipherParams::from_json(r#"{"n":2,"P":30,"s_min":2,"s_max":5}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LUCipherError> {
        let raw: CipherParams = serde_json::from_str(json)?;
        Self::try_with(raw.n, raw.P, raw.s_min, raw.s_max)
    }

    /// The field the parameters describe.
    pub fn field(&self) -> Result<Field, LUCipherError> {
        Field::try_with(self.P)
    }
}

impl Default for CipherParams {
    fn default() -> Self {
        Self {
            n: 3,
            P: 37,
            s_min: 3,
            s_max: 7,
        }
    }
}
