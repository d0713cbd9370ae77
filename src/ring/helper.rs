//! Integer utilities underneath the modular layer: Euclid, Bézout,
//! perfect squares and congruent-number sampling.

use crate::errors::ModArithError;

use num_integer::Roots;
use rand::Rng;

/// Computes the greatest common divisor of two numbers.
///
/// The result is always non-negative; `gcd(0, 0) == 0`. The one value a
/// signed 64-bit result cannot carry is `|i64::MIN| = 2^63` (the gcd of
/// `i64::MIN` with `0` or with itself); it saturates to `i64::MAX`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }

    i64::try_from(a).unwrap_or(i64::MAX)
}

/// Finds `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`, with `g >= 0`.
///
/// Holds for negative and zero inputs as well; the Bézout identity is the
/// contract, no further normalization of `x` and `y` is promised. Where
/// [`gcd`] saturates (a true gcd of `2^63`), `g` saturates the same way
/// and the identity cannot hold at that single point.
///
/// # Example
///
/// ```
/// # use modular_arithmetic::{extended_gcd, gcd};
/// let (g, x, y) = extended_gcd(240, 46);
/// assert_eq!(g, gcd(240, 46));
/// assert_eq!(240 * x + 46 * y, g);
/// ```
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        if b.is_negative() {
            return (b.checked_neg().unwrap_or(i64::MAX), 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    // quotient in i128: b / a overflows i64 only for i64::MIN / -1, and
    // the Bézout coefficients themselves stay within |b| and |a|
    let q = b as i128 / a as i128;
    let x = (y1 as i128 - q * x1 as i128) as i64;
    let y = x1;
    (g, x, y)
}

/// Checks whether `n` is a perfect square.
///
/// Integer square root, verified by re-squaring; `0` and `1` are perfect
/// squares, negative numbers are not.
pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let sq = n.sqrt();
    sq * sq == n
}

/// Same check over `i128`, used where intermediates outgrow `i64`.
pub(crate) fn is_perfect_square_wide(n: i128) -> bool {
    if n < 0 {
        return false;
    }

    let sq = n.sqrt();
    sq * sq == n
}

/// Returns some number congruent with `a` modulo `m`, other than `a`
/// itself whenever `m != 0`.
///
/// The random stretch comes from the caller-supplied `rng`; there is no
/// process-wide generator state.
///
/// # Errors
///
/// Returns `ModArithError::Overflow` if `a + k*m` leaves the `i64` range.
pub fn congruent_number<R: Rng + ?Sized>(
    a: i64,
    m: i64,
    rng: &mut R,
) -> Result<i64, ModArithError> {
    let k: i64 = rng.random_range(1..=64);
    let res = a as i128 + k as i128 * m as i128;

    i64::try_from(res).map_err(|_| {
        ModArithError::Overflow(format!("{} + {}*{} does not fit in 64 bits", a, k, m))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_simple_gcd() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(54, 24), 6);
        assert_eq!(gcd(7, 6), 1);
        assert_eq!(gcd(10, 0), 10);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_gcd_negative_inputs() {
        assert_eq!(gcd(-48, 18), 6);
        assert_eq!(gcd(48, -18), 6);
        assert_eq!(gcd(-48, -18), 6);
    }

    #[test]
    fn test_gcd_i64_min_boundary() {
        // |i64::MIN| is a power of two, so these stay representable
        assert_eq!(gcd(i64::MIN, 2), 2);
        assert_eq!(gcd(i64::MIN, 3), 1);
        assert_eq!(gcd(i64::MIN, -1), 1);
        // the true gcd 2^63 saturates
        assert_eq!(gcd(i64::MIN, 0), i64::MAX);
        assert_eq!(gcd(0, i64::MIN), i64::MAX);
        assert_eq!(gcd(i64::MIN, i64::MIN), i64::MAX);
    }

    #[test]
    fn test_extended_gcd_basic() {
        let (g, x, y) = extended_gcd(48, 18);
        assert_eq!(g, 6);
        assert_eq!(48 * x + 18 * y, 6);

        let (g, x, y) = extended_gcd(17, 13);
        assert_eq!(g, 1);
        assert_eq!(17 * x + 13 * y, 1);
    }

    #[test]
    fn test_extended_gcd_zero() {
        let (g, x, y) = extended_gcd(0, 15);
        assert_eq!(g, 15);
        assert_eq!(15 * y + 0 * x, g);

        let (g, x, _y) = extended_gcd(15, 0);
        assert_eq!(g, 15);
        assert_eq!(15 * x, g);

        let (g, _, _) = extended_gcd(0, 0);
        assert_eq!(g, 0);
    }

    #[test]
    fn test_extended_gcd_negative() {
        for (a, b) in [(-15, 10), (15, -10), (-15, -10), (-7, 0), (0, -7)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(g, gcd(a, b));
            assert_eq!(a * x + b * y, g, "identity failed for ({}, {})", a, b);
        }
    }

    #[test]
    fn test_extended_gcd_i64_min_boundary() {
        // representable gcds keep the identity even at the type boundary
        for (a, b) in [(i64::MIN, 3), (i64::MIN, -1), (3, i64::MIN), (i64::MIN, 2)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(g, gcd(a, b));
            assert_eq!(
                a as i128 * x as i128 + b as i128 * y as i128,
                g as i128,
                "identity failed for ({}, {})",
                a,
                b
            );
        }

        // a true gcd of 2^63 saturates instead of panicking
        assert_eq!(extended_gcd(0, i64::MIN).0, i64::MAX);
        assert_eq!(extended_gcd(i64::MIN, 0).0, i64::MAX);
        assert_eq!(extended_gcd(i64::MIN, i64::MIN).0, i64::MAX);
    }

    #[test]
    fn test_is_perfect_square() {
        assert!(is_perfect_square(0));
        assert!(is_perfect_square(1));
        assert!(is_perfect_square(144));
        assert!(!is_perfect_square(2));
        assert!(!is_perfect_square(143));
        assert!(!is_perfect_square(-4));
    }

    #[test]
    fn test_congruent_number() {
        let mut rng = StdRng::seed_from_u64(42);
        let res = congruent_number(3, 10, &mut rng).unwrap();
        assert_eq!(res.rem_euclid(10), 3);
        assert_ne!(res, 3);
    }

    #[test]
    fn test_congruent_number_overflow() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(congruent_number(i64::MAX, i64::MAX, &mut rng).is_err());
    }

    quickcheck! {
        fn prop_bezout_identity(a: i32, b: i32) -> bool {
            let (a, b) = (a as i64, b as i64);
            let (g, x, y) = extended_gcd(a, b);
            g == gcd(a, b) && a * x + b * y == g
        }

        fn prop_gcd_divides_both(a: i32, b: i32) -> bool {
            let (a, b) = (a as i64, b as i64);
            let g = gcd(a, b);
            if g == 0 {
                a == 0 && b == 0
            } else {
                g > 0 && a % g == 0 && b % g == 0
            }
        }
    }
}
