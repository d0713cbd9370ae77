//! Quadratic residues: Legendre and Jacobi symbols, Tonelli–Shanks and
//! the general square root modulo n.

use crate::equations::diophantine_equation;
use crate::errors::ModArithError;
use crate::factor::factorisation;
use crate::primes::is_prime;
use crate::ring::Ring;

use tracing::debug;

/// Checks whether `a` admits a square root modulo `n`, i.e. whether `a`
/// is a quadratic residue.
///
/// `a ≡ 0` always counts as a residue (`0² = 0`). For odd prime `n` this
/// is Euler's criterion `a^((n-1)/2) ≡ 1`; otherwise a brute-force scan
/// of `i² ≡ a` for `i <= n/2`. Returns `false` for `n < 2`.
pub fn is_square_number(a: i64, n: i64) -> bool {
    let Ok(ring) = Ring::try_with(n.max(0) as u64) else {
        return false;
    };

    let a = ring.normalize(a);
    if a == 0 {
        return true;
    }

    if n % 2 == 1 && is_prime(n) {
        return ring.pow(a, ((n - 1) / 2) as u64) == 1;
    }

    (1..=n / 2).any(|i| ring.pow(i, 2) == a)
}

/// Computes the list of quadratic residues modulo `n`, scanning `[0, n)`.
pub fn quadratic_residues(n: i64) -> Vec<i64> {
    (0..n).filter(|&i| is_square_number(i, n)).collect()
}

/// Computes the Legendre symbol `(a/p)`.
///
/// `0` if `p | a`, `1` if `a` is a quadratic residue modulo `p`, `-1`
/// otherwise.
///
/// # Errors
///
/// Returns `ModArithError::NotOdd` / `ModArithError::NotPrime` unless `p`
/// is an odd prime.
pub fn legendre_symbol(a: i64, p: i64) -> Result<i64, ModArithError> {
    if p % 2 == 0 {
        return Err(ModArithError::NotOdd(p));
    }
    if !is_prime(p) {
        return Err(ModArithError::NotPrime(p));
    }

    let ring = Ring::try_with(p as u64)?;
    let a = ring.normalize(a);

    if a == 0 {
        return Ok(0);
    }
    if is_square_number(a, p) {
        return Ok(1);
    }
    Ok(-1)
}

/// Computes the Jacobi symbol `(a/n)`, the multiplicative generalization
/// of the Legendre symbol over the prime factorisation of `n`.
///
/// Short-circuits to `0` as soon as any prime factor divides `a`.
/// `jacobi_symbol(a, 1) == 1` by convention.
///
/// # Errors
///
/// Returns `ModArithError::NotOdd` when `n` is even, and
/// `ModArithError::InvalidParameters` when `n < 1`.
pub fn jacobi_symbol(a: i64, n: i64) -> Result<i64, ModArithError> {
    if n < 1 {
        return Err(ModArithError::InvalidParameters(format!(
            "Jacobi symbol needs a positive odd n, got {}",
            n
        )));
    }
    if n % 2 == 0 {
        return Err(ModArithError::NotOdd(n));
    }

    // factor list keeps multiplicity, so the plain product over it is
    // already the product of Legendre symbols with exponents
    let mut res = 1;
    for p in factorisation(n)? {
        let symbol = legendre_symbol(a, p)?;
        if symbol == 0 {
            return Ok(0);
        }
        res *= symbol;
    }
    Ok(res)
}

/// Computes the square roots of `a` modulo an odd prime `p` by the
/// Tonelli–Shanks algorithm.
///
/// Returns the pair `(r, p - r)`; `(0, 0)` when `a ≡ 0`.
///
/// # Errors
///
/// Returns `ModArithError::NotPrime` / `ModArithError::NotOdd` unless `p`
/// is an odd prime, and `ModArithError::NonResidue` if `a` has no square
/// root modulo `p`.
pub fn tonelli_shanks(a: i64, p: i64) -> Result<(i64, i64), ModArithError> {
    if !is_prime(p) {
        return Err(ModArithError::NotPrime(p));
    }
    if p == 2 {
        return Err(ModArithError::NotOdd(p));
    }

    let ring = Ring::try_with(p as u64)?;
    let a = ring.normalize(a);

    // p - 1 = q * 2^s with q odd
    let mut q = p - 1;
    let mut s = 0u32;
    while q % 2 == 0 {
        q /= 2;
        s += 1;
    }

    // first quadratic non-residue; exists for every odd prime
    let mut z = 0;
    for j in 2..p {
        if legendre_symbol(j, p)? == -1 {
            z = j;
            break;
        }
    }
    debug!(p, q, s, z, "tonelli-shanks setup");

    let mut c = ring.pow(z, q as u64);
    let mut r = ring.pow(a, ((q + 1) / 2) as u64);
    let mut t = ring.pow(a, q as u64);
    let mut m = s;

    loop {
        if t == 0 {
            return Ok((0, 0));
        }
        if t == 1 {
            return Ok((r, ring.neg(r)));
        }

        // smallest i < m with t^(2^i) == 1; its absence means a is not
        // a residue
        let mut i = 0;
        let mut t2i = t;
        for j in 1..m {
            t2i = ring.mul(t2i, t2i);
            if t2i == 1 {
                i = j;
                break;
            }
        }
        if i == 0 {
            return Err(ModArithError::NonResidue { a, n: p });
        }

        let b = ring.pow(c, 1u64 << (m - i - 1));
        r = ring.mul(r, b);
        t = ring.mul(t, ring.mul(b, b));
        c = ring.mul(b, b);
        m = i; // strictly decreasing, so the loop terminates
    }
}

/// Computes all square roots of `a` modulo `n`.
///
/// Dispatches on the structure of `n`: closed forms for primes `≡ 3
/// (mod 4)` and `≡ 5 (mod 8)`, Tonelli–Shanks for the remaining odd
/// primes, a Bézout combination of the recursive roots for `n = p·q`
/// with two distinct prime factors, and a brute-force scan for anything
/// with more factors.
///
/// # Errors
///
/// Returns `ModArithError::NonResidue` when `a` is not a quadratic
/// residue modulo `n`, and `ModArithError::InvalidModulus` for `n <= 1`.
pub fn square_root(a: i64, n: i64) -> Result<Vec<i64>, ModArithError> {
    let ring = Ring::try_with(n.max(0) as u64)?;
    let a = ring.normalize(a);

    if !is_square_number(a, n) {
        return Err(ModArithError::NonResidue { a, n });
    }

    if n == 2 {
        return Ok(vec![a]);
    }

    if is_prime(n) {
        // 0 is its own only root modulo a prime
        if a == 0 {
            return Ok(vec![0, 0]);
        }

        if n % 4 == 3 {
            let r = ring.pow(a, ((n + 1) / 4) as u64);
            return Ok(vec![r, ring.neg(r)]);
        }

        if n % 8 == 5 {
            let d = ring.pow(a, ((n - 1) / 4) as u64);
            if d == 1 {
                let r = ring.pow(a, ((n + 3) / 8) as u64);
                return Ok(vec![r, ring.neg(r)]);
            }
            if d == n - 1 {
                let four_a = ring.mul(4, a);
                let r = ring.mul(ring.mul(2, a), ring.pow(four_a, ((n - 5) / 8) as u64));
                return Ok(vec![r, ring.neg(r)]);
            }
            // a passed the residue check, so d must be +-1
            return Err(ModArithError::DomainEmpty(format!(
                "discriminant {} is neither 1 nor {} mod {}",
                d,
                n - 1,
                n
            )));
        }

        // n == 1 (mod 8)
        let (r1, r2) = tonelli_shanks(a, n)?;
        return Ok(vec![r1, r2]);
    }

    let factors = factorisation(n)?;

    // n = p*q with p, q distinct primes: solve mod each and recombine
    if factors.len() == 2 && factors[0] != factors[1] {
        let (p, q) = (factors[0], factors[1]);
        debug!(n, p, q, "square root via CRT recombination");

        let root_p = square_root(a, p)?[0];
        let root_q = square_root(a, q)?[0];

        // c, d with p*c + q*d = 1
        let (c, d) = diophantine_equation(p, q, 1)?;

        let rdq = ring.mul(ring.mul(root_p, d), q);
        let scp = ring.mul(ring.mul(root_q, c), p);
        let x = ring.add(rdq, scp);
        let y = ring.sub(rdq, scp);

        return Ok(vec![x, ring.neg(x), y, ring.neg(y)]);
    }

    // more than two factors: exhaustive scan
    let mut roots = Vec::new();
    for i in 0..=n / 2 {
        if ring.pow(i, 2) == a {
            roots.push(i);
            let other = ring.neg(i);
            if other != i {
                roots.push(other);
            }
        }
    }

    if roots.is_empty() {
        return Err(ModArithError::DomainEmpty(format!(
            "no root of {} mod {} although the residue check passed",
            a, n
        )));
    }

    roots.sort_unstable();
    Ok(roots)
}
