#[derive(thiserror::Error, Debug)]
pub enum ModArithError {
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),

    #[error("{0} is not a prime number")]
    NotPrime(i64),
    #[error("{0} is not odd")]
    NotOdd(i64),
    #[error("gcd({a}, {n}) must be 1, but the calculated gcd was {g}")]
    NotCoprime { a: i64, n: i64, g: i64 },
    #[error("{a} is not a quadratic residue modulo {n}")]
    NonResidue { a: i64, n: i64 },
    #[error("{base} is not a primitive root modulo {n}")]
    NotPrimitiveRoot { base: i64, n: i64 },
    #[error("Moduli {0} and {1} are not coprime")]
    ModuliNotCoprime(i64, i64),
    #[error("gcd({a}, {b}) = {g} does not divide {c}")]
    NotDivisible { a: i64, b: i64, g: i64, c: i64 },

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    /// A search guaranteed to succeed by its precondition found nothing.
    #[error("DomainEmpty: {0}")]
    DomainEmpty(String),
    #[error("Overflow: {0}")]
    Overflow(String),

    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("SingularMatrix: {0}")]
    SingularMatrix(String),
}
