//! # Field Module
//!
//! Provides the [`Field`] struct for the prime field Z_P and the matrix
//! routines every other stage of the cipher is built from.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, gcd, is_prime};
pub use math::Field;
