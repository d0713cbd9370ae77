//! Integer factorisation by Fermat's difference-of-squares method, and
//! Euler's totient on top of it.

use crate::errors::ModArithError;
use crate::ring::helper::is_perfect_square_wide;

use itertools::Itertools;
use num_integer::Roots;
use tracing::debug;

/// Splits an odd number into two factors by Fermat's method.
///
/// Finds the smallest `x >= ceil(sqrt(n))` such that `x^2 - n` is a
/// perfect square `y^2`, and returns `(x - y, x + y)`. The split is
/// `(1, n)` exactly when `|n|` is prime. Works on `|n|`; intermediate
/// squares are computed in `i128`.
///
/// # Errors
///
/// Returns `ModArithError::NotOdd` when `n` is even.
pub fn real_fermat_factorisation(n: i64) -> Result<(i64, i64), ModArithError> {
    if n % 2 == 0 {
        return Err(ModArithError::NotOdd(n));
    }

    let n = n.abs();
    if n == 1 {
        return Ok((1, 1));
    }

    let n_wide = n as i128;
    let mut x = {
        let s = n_wide.sqrt();
        if s * s == n_wide { s } else { s + 1 }
    };

    let mut y_square = x * x - n_wide;
    while !is_perfect_square_wide(y_square) {
        x += 1;
        y_square = x * x - n_wide;
    }

    let y = y_square.sqrt();
    Ok(((x - y) as i64, (x + y) as i64))
}

/// Fully factorises an odd number into primes by repeated Fermat splits.
///
/// Keeps an explicit work stack of not-yet-proven-prime factors: a
/// candidate splitting as `(1, c)` is prime and goes to the output, any
/// other split pushes both halves back. The result is ascending and keeps
/// multiplicity; `fermat_factorisation(1) == []`.
///
/// # Errors
///
/// Returns `ModArithError::NotOdd` when `n` is even.
pub fn fermat_factorisation(n: i64) -> Result<Vec<i64>, ModArithError> {
    if n % 2 == 0 {
        return Err(ModArithError::NotOdd(n));
    }

    let n = n.abs();
    let mut factors = Vec::new();
    let mut stack = vec![n];

    while let Some(candidate) = stack.pop() {
        if candidate == 1 {
            continue;
        }

        let (p, q) = real_fermat_factorisation(candidate)?;
        if p == 1 {
            debug!(prime = candidate, "fermat split found prime factor");
            factors.push(candidate);
        } else {
            debug!(from = candidate, left = p, right = q, "fermat split");
            stack.push(p);
            stack.push(q);
        }
    }

    factors.sort_unstable();
    Ok(factors)
}

/// Factorises `n` into its ordered list of prime factors, with
/// multiplicity.
///
/// Strips all factors of 2 first (Fermat's method needs an odd input),
/// then delegates the odd remainder to [`fermat_factorisation`]. The
/// product of the returned list equals `|n|`; `factorisation(1) == []`.
///
/// # Errors
///
/// Returns `ModArithError::InvalidParameters` for `n == 0`.
pub fn factorisation(n: i64) -> Result<Vec<i64>, ModArithError> {
    if n == 0 {
        return Err(ModArithError::InvalidParameters(
            "cannot factorise 0".to_string(),
        ));
    }

    let mut n = n.checked_abs().ok_or_else(|| {
        ModArithError::Overflow(format!("|{}| does not fit in 64 bits", n))
    })?;

    let mut factors = Vec::new();
    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }

    if n > 1 {
        factors.extend(fermat_factorisation(n)?);
    }

    factors.sort_unstable();
    Ok(factors)
}

/// Computes Euler's totient `φ(n) = n * Π (1 - 1/p)` over the distinct
/// prime factors of `n`.
///
/// The factor list carries multiplicity, so it is deduplicated before the
/// product; each fold `n / p * (p - 1)` is exact integer arithmetic.
///
/// # Errors
///
/// Returns `ModArithError::InvalidParameters` for `n < 1`.
pub fn euler_phi(n: i64) -> Result<i64, ModArithError> {
    if n < 1 {
        return Err(ModArithError::InvalidParameters(format!(
            "Euler's function is defined for n >= 1, got {}",
            n
        )));
    }

    let res = factorisation(n)?
        .into_iter()
        .unique()
        .fold(n, |acc, p| acc / p * (p - 1));

    Ok(res)
}
