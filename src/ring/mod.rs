//! # Ring module
//!
//! Provides the [`Ring`] struct for modular arithmetic in Z_m, the integer
//! utilities underneath it (gcd, Bézout, perfect squares) and matrix
//! operations modulo m.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{congruent_number, extended_gcd, gcd, is_perfect_square};
pub use math::Ring;
