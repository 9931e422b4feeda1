//! Implementation of field ops using modular arithmetic.

use crate::errors::LUCipherError;

use super::{extended_gcd, is_prime};

use serde::{Deserialize, Serialize};

/// Represents the prime field Z_P using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub modulus: u64,
}

impl Field {
    /// Create a new Field with the given modulus.
    ///
    /// The modulus must be prime, otherwise Z_P is not a field and pivots
    /// can be non-zero yet non-invertible. It must also be at most `i32::MAX`,
    /// so sums of normalized elements stay well inside `i64`.
    ///
    /// # Errors
    ///
    /// `LUCipherError::InvalidModulus` for a modulus above `i32::MAX` or a non-prime one.
    pub fn try_with(modulus: u64) -> Result<Self, LUCipherError> {
        if modulus > i32::MAX as u64 {
            return Err(LUCipherError::InvalidModulus(format!(
                "Modulus {} exceeds the supported range",
                modulus
            )));
        }
        if !is_prime(modulus) {
            return Err(LUCipherError::InvalidModulus(format!(
                "Modulus must be prime, got {}",
                modulus
            )));
        }

        Ok(Field { modulus })
    }

    /// Returns the modulus of the field.
    ///
    /// # Example
    ///
    /// ```
    /// # use lu_cipher::field::Field;
    /// let field = Field::try_with(37).unwrap();
    /// assert_eq!(field.modulus(), 37);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lu_cipher::field::Field;
    /// let field = Field::try_with(37).unwrap();
    /// assert_eq!(field.normalize(40), 3);
    /// assert_eq!(field.normalize(-3), 34);
    /// assert_eq!(field.normalize(37), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        self.normalize(self.normalize(a) + self.normalize(b))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lu_cipher::field::Field;
    /// let field = Field::try_with(37).unwrap();
    /// assert_eq!(field.sub(3, 5), 35);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.normalize(self.normalize(a) - self.normalize(b))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let result = (self.normalize(a) as i128 * self.normalize(b) as i128) % (self.modulus as i128);

        result as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// Computes `base^exp mod modulus` by square-and-multiply.
    ///
    /// # Example
    ///
    /// ```
    /// # use lu_cipher::field::Field;
    /// let field = Field::try_with(37).unwrap();
    /// assert_eq!(field.pow(3, 4), 7); // 81 mod 37
    /// assert_eq!(field.pow(5, 0), 1);
    /// ```
    pub fn pow(&self, base: i64, mut exp: u64) -> i64 {
        let mut result = 1 % self.modulus as i64;
        let mut acc = self.normalize(base);
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, acc);
            }
            acc = self.mul(acc, acc);
            exp >>= 1;
        }
        result
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `LUCipherError::NoInverse` if `gcd(a, modulus) != 1`, which for a prime
    /// modulus means `a ≡ 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lu_cipher::field::Field;
    /// let field = Field::try_with(37).unwrap();
    /// assert_eq!(field.inv(5).unwrap(), 15); // 5 * 15 = 75 = 1 mod 37
    /// assert!(field.inv(0).is_err());
    /// assert!(field.inv(74).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, LUCipherError> {
        let a_norm = self.normalize(a);

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(LUCipherError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}

impl Default for Field {
    fn default() -> Self {
        Field { modulus: 37 }
    }
}
