//! Modular arithmetic and number theory over machine integers.
//!
//! The crate is layered bottom-up: integer utilities (gcd, Bézout,
//! perfect squares) under [`ring`], the [`ring::Ring`] type for
//! arithmetic in Z_m, predicates and factorisation in [`primes`] /
//! [`factor`] / [`residue`] / [`dlog`], and the composite solvers
//! (CRT, Diophantine) in [`equations`]. Matrix operations modulo m live
//! in [`ring::matrix_ops`] as a thin consumer of the ring primitives.
//!
//! Every violated precondition surfaces as a [`ModArithError`]; there
//! are no sentinel return values.

pub mod dlog;
pub mod equations;
pub mod errors;
pub mod factor;
pub mod primes;
pub mod residue;
pub mod ring;

pub use dlog::{discrete_logarithm, is_primitive_root, primitive_roots};
pub use equations::{Congruence, chinese_remainder_theorem, diophantine_equation};
pub use errors::ModArithError;
pub use factor::{euler_phi, factorisation, fermat_factorisation, real_fermat_factorisation};
pub use primes::{
    are_coprime, is_divisor, is_fermat_pseudoprime, is_prime, next_prime_number, nth_prime_number,
    prime_number_list,
};
pub use residue::{
    is_square_number, jacobi_symbol, legendre_symbol, quadratic_residues, square_root,
    tonelli_shanks,
};
pub use ring::{Ring, congruent_number, extended_gcd, gcd, is_perfect_square};
