//! Modular arithmetic over a finite ring Z_m.

use crate::errors::ModArithError;

use super::extended_gcd;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, ModArithError> {
        if modulus <= 1 {
            return Err(ModArithError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to the unique representative in `[0, modulus)`.
    ///
    /// Handles negative values in O(1), regardless of how far below zero
    /// they sit.
    ///
    /// # Example
    ///
    /// ```
    /// # use modular_arithmetic::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(-23), 7);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use modular_arithmetic::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_add(b_norm))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use modular_arithmetic::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.sub(3, 5), 8);
    /// assert_eq!(ring.sub(-2, 3), 5);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_sub(b_norm))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally so the product cannot overflow before the
    /// reduction, even for moduli near the `i64` limit.
    ///
    /// # Example
    ///
    /// ```
    /// # use modular_arithmetic::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5);
    /// assert_eq!(ring.mul(-2, 6), 8);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        if a == 0 {
            return 0;
        }

        self.normalize(((-(a as i128)) % self.modulus as i128) as _)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `ModArithError::NoInverse` if the inverse does not exist,
    /// including the case `a ≡ 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use modular_arithmetic::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 7); // 3 * 7 = 21 = 1 mod 10
    /// assert!(ring.inv(2).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, ModArithError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(ModArithError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(ModArithError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }

    /// Computes the division `a / b ≡ a * b^-1 (mod modulus)`.
    ///
    /// # Errors
    ///
    /// Returns `ModArithError::NoInverse` when `gcd(b, modulus) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use modular_arithmetic::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.div(4, 3).unwrap(), 8); // 8 * 3 = 24 = 4 mod 10
    /// assert!(ring.div(4, 2).is_err());
    /// ```
    pub fn div(&self, a: i64, b: i64) -> Result<i64, ModArithError> {
        let b_inv = self.inv(b)?;
        Ok(self.mul(a, b_inv))
    }

    /// Computes `a^exp (mod modulus)` by square and multiply, with
    /// O(log exp) ring multiplications.
    ///
    /// `pow(a, 0) == 1` for every `a`, including `a ≡ 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use modular_arithmetic::ring::Ring;
    /// let ring = Ring::try_with(17).unwrap();
    /// assert_eq!(ring.pow(3, 5), 5); // 3^5 = 243 = 5 mod 17
    /// assert_eq!(ring.pow(0, 0), 1);
    /// ```
    pub fn pow(&self, a: i64, mut exp: u64) -> i64 {
        let mut base = self.normalize(a);
        let mut res = 1;

        while exp > 0 {
            // odd bit: fold the base into the result
            if exp % 2 == 1 {
                res = self.mul(res, base);
            }

            exp >>= 1;
            base = self.mul(base, base);
        }

        res
    }

    /// Checks whether `a ≡ b (mod modulus)`.
    pub fn are_congruent(&self, a: i64, b: i64) -> bool {
        self.normalize(a) == self.normalize(b)
    }
}
