use modular_arithmetic::errors::ModArithError;
use modular_arithmetic::ring::Ring;
use modular_arithmetic::{
    euler_phi, extended_gcd, factorisation, gcd, is_fermat_pseudoprime, is_prime,
    is_primitive_root, next_prime_number, nth_prime_number, prime_number_list, primitive_roots,
};

#[test]
fn gcd_and_bezout_agree() {
    let (g, x, y) = extended_gcd(48, 18);
    assert_eq!(gcd(48, 18), 6);
    assert_eq!(g, 6);
    assert_eq!(48 * x + 18 * y, 6);
}

#[test]
fn power_mod_concrete() -> Result<(), ModArithError> {
    let ring = Ring::try_with(17)?;
    assert_eq!(ring.pow(3, 5), 5); // 3^5 = 243 = 5 mod 17
    Ok(())
}

#[test]
fn factorisation_feeds_totient() -> Result<(), ModArithError> {
    assert_eq!(factorisation(99)?, vec![3, 3, 11]);
    assert_eq!(euler_phi(99)?, 60); // 99 * (2/3) * (10/11)
    Ok(())
}

#[test]
fn factor_lists_multiply_back() -> Result<(), ModArithError> {
    for n in 2..500 {
        let factors = factorisation(n)?;
        assert_eq!(factors.iter().product::<i64>(), n, "n = {}", n);
        assert!(factors.windows(2).all(|w| w[0] <= w[1]), "unsorted for {}", n);
        assert!(factors.iter().all(|&p| is_prime(p)), "n = {}", n);
    }
    Ok(())
}

#[test]
fn totient_counts_coprime_residues() -> Result<(), ModArithError> {
    for n in 1..200 {
        let by_count = (1..=n).filter(|&k| gcd(k, n) == 1).count() as i64;
        assert_eq!(euler_phi(n)?, by_count, "n = {}", n);
    }
    Ok(())
}

#[test]
fn sieve_and_searches_agree() -> Result<(), ModArithError> {
    let primes = prime_number_list(541);
    assert_eq!(primes.len(), 100);
    assert_eq!(nth_prime_number(100)?, 541);

    for window in primes.windows(2) {
        // next prime strictly after window[0] is window[1]
        assert_eq!(next_prime_number(window[0] + 1), window[1]);
    }
    Ok(())
}

#[test]
fn trial_division_matches_sieve() {
    let sieved = prime_number_list(2000);
    for n in 0..=2000 {
        assert_eq!(is_prime(n), sieved.contains(&n), "n = {}", n);
    }
}

#[test]
fn carmichael_number_fools_fermat() -> Result<(), ModArithError> {
    // 561 = 3 * 11 * 17 passes every coprime base, yet is composite
    assert!(!is_prime(561));
    for a in [2, 5, 7, 13] {
        assert!(is_fermat_pseudoprime(a, 561)?, "base {}", a);
    }
    Ok(())
}

#[test]
fn primitive_root_counts_match_totient_of_totient() -> Result<(), ModArithError> {
    // for prime p the group is cyclic with phi(phi(p)) generators
    for p in [3, 5, 7, 11, 13, 17, 19, 23] {
        let roots = primitive_roots(p);
        assert_eq!(roots.len() as i64, euler_phi(euler_phi(p)?)?, "p = {}", p);
        for root in roots {
            assert!(is_primitive_root(root, p));
        }
    }
    Ok(())
}
