//! Systems of modular linear equations (Chinese Remainder Theorem) and
//! linear Diophantine equations.

use crate::errors::ModArithError;
use crate::ring::{Ring, extended_gcd, gcd};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One equation `x ≡ residue (mod modulus)` of a linear system.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Congruence {
    pub residue: i64,
    pub modulus: i64,
}

impl Congruence {
    pub fn new(residue: i64, modulus: i64) -> Self {
        Congruence { residue, modulus }
    }
}

/// Solves the system `x ≡ aᵢ (mod mᵢ)` by the Chinese Remainder Theorem.
///
/// Returns the unique solution in `[0, Π mᵢ)`.
///
/// # Errors
///
/// * `ModArithError::InvalidParameters` — empty system or a modulus `< 1`.
/// * `ModArithError::ModuliNotCoprime` — some pair of moduli shares a
///   factor.
/// * `ModArithError::Overflow` — `Π mᵢ` does not fit in 64 bits.
pub fn chinese_remainder_theorem(equations: &[Congruence]) -> Result<i64, ModArithError> {
    if equations.is_empty() {
        return Err(ModArithError::InvalidParameters(
            "system of equations is empty".to_string(),
        ));
    }
    for eq in equations {
        if eq.modulus < 1 {
            return Err(ModArithError::InvalidParameters(format!(
                "modulus must be positive, got {}",
                eq.modulus
            )));
        }
    }

    for (e1, e2) in equations.iter().tuple_combinations() {
        if gcd(e1.modulus, e2.modulus) != 1 {
            return Err(ModArithError::ModuliNotCoprime(e1.modulus, e2.modulus));
        }
    }

    let m_total = equations.iter().try_fold(1i64, |acc, eq| {
        acc.checked_mul(eq.modulus).ok_or_else(|| {
            ModArithError::Overflow("product of moduli does not fit in 64 bits".to_string())
        })
    })?;

    // all moduli are 1: the only residue class mod 1
    if m_total == 1 {
        return Ok(0);
    }

    let ring = Ring::try_with(m_total as u64)?;
    debug!(equations = equations.len(), modulus = m_total, "solving CRT system");

    let mut res = 0;
    for eq in equations {
        if eq.modulus == 1 {
            continue;
        }

        let mi = m_total / eq.modulus;
        let mi_inverse = Ring::try_with(eq.modulus as u64)?.inv(mi)?;
        let term = ring.mul(ring.mul(eq.residue, mi), mi_inverse);
        res = ring.add(res, term);
    }

    Ok(res)
}

/// Solves the linear Diophantine equation `a*x + b*y = c`, returning one
/// particular solution `(x, y)`.
///
/// The full solution family `(x + k*b/g, y - k*a/g)` is not enumerated;
/// callers needing it can derive it from the returned pair.
///
/// # Errors
///
/// Returns `ModArithError::NotDivisible` unless `gcd(a, b) | c`, and
/// `ModArithError::Overflow` if scaling the base solution leaves `i64`.
pub fn diophantine_equation(a: i64, b: i64, c: i64) -> Result<(i64, i64), ModArithError> {
    let g = gcd(a, b);

    if g == 0 {
        // a == b == 0: solvable only for c == 0
        if c == 0 {
            return Ok((0, 0));
        }
        return Err(ModArithError::NotDivisible { a, b, g, c });
    }
    if c % g != 0 {
        return Err(ModArithError::NotDivisible { a, b, g, c });
    }

    let (a_red, b_red, c_red) = (a / g, b / g, c / g);
    let (_, x0, y0) = extended_gcd(a_red, b_red);

    let x = x0.checked_mul(c_red).ok_or_else(|| {
        ModArithError::Overflow(format!("{} * {} does not fit in 64 bits", x0, c_red))
    })?;
    let y = y0.checked_mul(c_red).ok_or_else(|| {
        ModArithError::Overflow(format!("{} * {} does not fit in 64 bits", y0, c_red))
    })?;

    Ok((x, y))
}
