//! Primitive roots and the Baby-Step Giant-Step discrete logarithm.

use crate::errors::ModArithError;
use crate::factor::{euler_phi, factorisation};
use crate::ring::{Ring, gcd};

use itertools::Itertools;
use num_integer::Roots;
use std::collections::HashMap;
use tracing::debug;

/// Checks whether `a` is a primitive root modulo `n`, i.e. a generator
/// of the multiplicative group mod `n`.
///
/// `a` is primitive iff `a ⟂ n` and `a^(φ(n)/p) ≢ 1 (mod n)` for every
/// distinct prime factor `p` of `φ(n)`.
pub fn is_primitive_root(a: i64, n: i64) -> bool {
    let Ok(ring) = Ring::try_with(n.max(0) as u64) else {
        return false;
    };

    let a = ring.normalize(a);
    if gcd(a, n) != 1 {
        return false;
    }

    let Ok(phi) = euler_phi(n) else {
        return false;
    };
    let Ok(phi_factors) = factorisation(phi.max(1)) else {
        return false;
    };

    phi_factors
        .into_iter()
        .unique()
        .all(|p| ring.pow(a, (phi / p) as u64) != 1)
}

/// Computes the list of primitive roots modulo `n`, scanning `[1, n)`.
pub fn primitive_roots(n: i64) -> Vec<i64> {
    (1..n).filter(|&a| is_primitive_root(a, n)).collect()
}

/// Computes the discrete logarithm `x` with `base^x ≡ b (mod n)` by
/// Baby-Step Giant-Step.
///
/// With `N = ceil(sqrt(n))`, the baby steps `base^j` for `j < N` go into
/// a hash table; the giant steps multiply `b` by `base^(-N)` until a
/// table hit at `x = j + N*k`. Runs in `O(sqrt(n))` time and space.
///
/// # Errors
///
/// Returns `ModArithError::NotPrimitiveRoot` unless `base` generates the
/// multiplicative group mod `n`, and `ModArithError::DomainEmpty` if the
/// search is exhausted (unreachable under the precondition for any `b`
/// in the group).
pub fn discrete_logarithm(base: i64, b: i64, n: i64) -> Result<i64, ModArithError> {
    if !is_primitive_root(base, n) {
        return Err(ModArithError::NotPrimitiveRoot { base, n });
    }

    let ring = Ring::try_with(n as u64)?;

    let big_n = {
        let s = n.sqrt();
        if s * s == n { s } else { s + 1 }
    };
    debug!(base, b, n, steps = big_n, "baby-step giant-step");

    // baby steps: base^j -> j, keeping the smallest j on collisions
    let mut table: HashMap<i64, i64> = HashMap::with_capacity(big_n as usize);
    let mut value = 1;
    for j in 0..big_n {
        table.entry(value).or_insert(j);
        value = ring.mul(value, base);
    }

    // giant-step multiplier base^(-N)
    let giant = ring.pow(ring.inv(base)?, big_n as u64);

    let mut gamma = ring.normalize(b);
    for k in 0..big_n {
        if let Some(&j) = table.get(&gamma) {
            return Ok(j + big_n * k);
        }
        gamma = ring.mul(gamma, giant);
    }

    Err(ModArithError::DomainEmpty(format!(
        "no exponent found for {} in base {} mod {}",
        b, base, n
    )))
}
