#![allow(non_snake_case)] // Allow non-snake_case identifiers (like matrix variable names)

//! # LU Cipher
//!
//! A reversible matrix cipher over the prime field Z_P: text is encoded into a
//! square matrix, multiplied by a random invertible key, projected through the
//! inverse of the key's unit-lower LU factor and mixed by polynomial evaluation.
//!
//! The scheme is a teaching demo. The modulus is tiny and the decryption
//! package carries the key in the clear.

pub mod codec;
pub mod display;
pub mod errors;
pub mod field;
pub mod keygen;
pub mod lu;
pub mod params;
pub mod pipeline;
pub mod preset;
pub mod sle;
pub mod transform;

pub use display::{MatrixTable, matrix_to_display};
pub use errors::LUCipherError;
pub use params::CipherParams;
pub use pipeline::{
    DecryptionOutput, DisplayCiphertext, EncryptionOutput, TransformPackage, decrypt_package,
    encrypt_message, encrypt_message_with,
};
