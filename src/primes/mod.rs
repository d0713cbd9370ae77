//! Primality predicates and prime-list utilities.

use crate::errors::ModArithError;
use crate::ring::{Ring, gcd};

use lazy_static::lazy_static;

lazy_static! {
    /// Primes below 1000, used as the fast path of trial division.
    static ref SMALL_PRIMES: Vec<i64> = prime_number_list(1000);
}

/// Checks whether `n` is a prime number.
///
/// Trial division: first against the static small-prime table, then odd
/// candidates up to the square root. `0` and `1` are not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    for &p in SMALL_PRIMES.iter() {
        if p > n / p {
            return true;
        }
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = SMALL_PRIMES.last().copied().unwrap_or(2) + 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Checks whether `a` and `n` are coprime: `gcd(a, n) == 1`.
pub fn are_coprime(a: i64, n: i64) -> bool {
    gcd(a, n) == 1
}

/// Checks whether `n` is a divisor of `m`.
///
/// `0` divides only `0`.
pub fn is_divisor(n: i64, m: i64) -> bool {
    if n == 0 {
        return m == 0;
    }
    m % n == 0
}

/// Checks whether `n` is a Fermat pseudoprime to base `a`:
/// `a^(n-1) ≡ 1 (mod n)`.
///
/// A passing result is a compositeness witness only, not a primality
/// proof.
///
/// # Errors
///
/// Returns `ModArithError::NotCoprime` when `gcd(a, n) != 1`, and
/// `ModArithError::InvalidModulus` for `n <= 1`.
pub fn is_fermat_pseudoprime(a: i64, n: i64) -> Result<bool, ModArithError> {
    let g = gcd(a, n);
    if g != 1 {
        return Err(ModArithError::NotCoprime { a, n, g });
    }

    let ring = Ring::try_with(n as u64)?;
    Ok(ring.pow(a, (n - 1) as u64) == 1)
}

/// Computes the list of prime numbers up to `n` (inclusive).
///
/// Sieve of Eratosthenes.
pub fn prime_number_list(n: i64) -> Vec<i64> {
    if n < 2 {
        return Vec::new();
    }

    let n = n as usize;
    let mut is_composite = vec![false; n + 1];
    let mut primes = Vec::new();

    for i in 2..=n {
        if is_composite[i] {
            continue;
        }
        primes.push(i as i64);
        let mut j = i * i;
        while j <= n {
            is_composite[j] = true;
            j += i;
        }
    }

    primes
}

/// Searches for the n-th prime number (1-indexed: `nth_prime_number(1) == 2`).
///
/// Sieves below the `(n+1)(ln(n+1) + ln ln(n+1))` upper bound on p_n.
///
/// # Errors
///
/// Returns `ModArithError::InvalidParameters` for `n < 1`.
pub fn nth_prime_number(n: i64) -> Result<i64, ModArithError> {
    if n < 1 {
        return Err(ModArithError::InvalidParameters(format!(
            "prime index must be >= 1, got {}",
            n
        )));
    }

    let nf = (n + 1) as f64;
    let upper_bound = (nf * (nf.ln() + nf.ln().ln())).max(15.0) as i64;
    let primes = prime_number_list(upper_bound);

    primes
        .get(n as usize - 1)
        .copied()
        .ok_or_else(|| ModArithError::DomainEmpty(format!("sieve bound missed prime #{}", n)))
}

/// Finds the smallest prime number `>= n`.
///
/// Odd candidates are screened with the base-2 Fermat test before the
/// full primality check.
pub fn next_prime_number(n: i64) -> i64 {
    if n <= 2 {
        return 2;
    }

    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    loop {
        let passes_fermat = is_fermat_pseudoprime(2, candidate).unwrap_or(false);
        if passes_fermat && is_prime(candidate) {
            return candidate;
        }
        candidate += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(41));
        assert!(!is_prime(99));
        assert!(is_prime(997));
    }

    #[test]
    fn test_is_prime_beyond_table() {
        assert!(is_prime(1_000_003));
        assert!(!is_prime(1_000_001)); // 101 * 9901
        assert!(!is_prime(999_983_i64 * 999_983));
    }

    #[test]
    fn test_are_coprime_and_divisor() {
        assert!(are_coprime(14, 15));
        assert!(!are_coprime(14, 21));
        assert!(is_divisor(6, 48));
        assert!(!is_divisor(5, 48));
        assert!(is_divisor(0, 0));
        assert!(!is_divisor(0, 3));
    }

    #[test]
    fn test_fermat_pseudoprime() -> Result<(), ModArithError> {
        // primes always pass
        assert!(is_fermat_pseudoprime(2, 13)?);
        assert!(is_fermat_pseudoprime(3, 97)?);
        // 341 = 11 * 31 is the smallest base-2 pseudoprime
        assert!(is_fermat_pseudoprime(2, 341)?);
        // ordinary composite fails
        assert!(!is_fermat_pseudoprime(2, 15)?);
        // coprimality precondition
        assert!(matches!(
            is_fermat_pseudoprime(6, 15),
            Err(ModArithError::NotCoprime { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_prime_number_list() {
        assert_eq!(
            prime_number_list(30),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
        assert!(prime_number_list(1).is_empty());
        assert_eq!(prime_number_list(2), vec![2]);
    }

    #[test]
    fn test_nth_prime_number() -> Result<(), ModArithError> {
        assert_eq!(nth_prime_number(1)?, 2);
        assert_eq!(nth_prime_number(4)?, 7);
        assert_eq!(nth_prime_number(10)?, 29);
        assert_eq!(nth_prime_number(100)?, 541);
        assert!(nth_prime_number(0).is_err());
        Ok(())
    }

    #[test]
    fn test_next_prime_number() {
        assert_eq!(next_prime_number(-5), 2);
        assert_eq!(next_prime_number(2), 2);
        assert_eq!(next_prime_number(3), 3);
        assert_eq!(next_prime_number(10), 11);
        assert_eq!(next_prime_number(14), 17);
        assert_eq!(next_prime_number(89), 89);
        assert_eq!(next_prime_number(90), 97);
    }
}
