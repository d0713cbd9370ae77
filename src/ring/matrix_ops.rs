//! Matrix operations modulo m.
//!
//! Thin consumer of [`Ring`]: every entry-level operation goes through the
//! ring primitives (`add`, `mul`, `inv`), the matrix layer only adds shape
//! checks and the cofactor machinery for inversion.

use crate::errors::ModArithError;
use crate::ring::{Matrix, Ring};

fn check_rectangular(a: &Matrix, what: &str) -> Result<(usize, usize), ModArithError> {
    let rows = a.len();
    if rows == 0 {
        return Ok((0, 0));
    }
    let cols = a[0].len();
    for (i, row) in a.iter().enumerate() {
        if row.len() != cols {
            return Err(ModArithError::DimensionMismatch(format!(
                "{}: row {} has length {} but expected {}",
                what,
                i,
                row.len(),
                cols
            )));
        }
    }
    Ok((rows, cols))
}

fn check_same_shape(a: &Matrix, b: &Matrix, what: &str) -> Result<(usize, usize), ModArithError> {
    let (ra, ca) = check_rectangular(a, what)?;
    let (rb, cb) = check_rectangular(b, what)?;
    if (ra, ca) != (rb, cb) {
        return Err(ModArithError::DimensionMismatch(format!(
            "{}: shapes {}x{} and {}x{} must match",
            what, ra, ca, rb, cb
        )));
    }
    Ok((ra, ca))
}

fn check_square(a: &Matrix, what: &str) -> Result<usize, ModArithError> {
    let (rows, cols) = check_rectangular(a, what)?;
    if rows != cols {
        return Err(ModArithError::DimensionMismatch(format!(
            "{}: matrix must be square, got {}x{}",
            what, rows, cols
        )));
    }
    Ok(rows)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Normalizes every entry of the matrix into `[0, m)`.
pub fn matrix_mod(a: &Matrix, ring: &Ring) -> Result<Matrix, ModArithError> {
    check_rectangular(a, "matrix_mod")?;
    Ok(a.iter()
        .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
        .collect())
}

/// Computes the matrix sum `C = A + B` modulo m.
///
/// # Errors
///
/// Returns `ModArithError::DimensionMismatch` if the shapes differ.
pub fn matrix_sum(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ModArithError> {
    let (rows, cols) = check_same_shape(a, b, "matrix_sum")?;
    let mut c = vec![vec![0; cols]; rows];
    for i in 0..rows {
        for j in 0..cols {
            c[i][j] = ring.add(a[i][j], b[i][j]);
        }
    }
    Ok(c)
}

/// Computes the matrix difference `C = A - B` modulo m.
///
/// # Errors
///
/// Returns `ModArithError::DimensionMismatch` if the shapes differ.
pub fn matrix_sub(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ModArithError> {
    let (rows, cols) = check_same_shape(a, b, "matrix_sub")?;
    let mut c = vec![vec![0; cols]; rows];
    for i in 0..rows {
        for j in 0..cols {
            c[i][j] = ring.sub(a[i][j], b[i][j]);
        }
    }
    Ok(c)
}

/// Computes the scalar product `scalar * A` modulo m.
pub fn scalar_product(scalar: i64, a: &Matrix, ring: &Ring) -> Result<Matrix, ModArithError> {
    check_rectangular(a, "scalar_product")?;
    Ok(a.iter()
        .map(|row| row.iter().map(|&v| ring.mul(scalar, v)).collect())
        .collect())
}

/// Computes the matrix product `C = A x B` modulo m.
///
/// # Errors
///
/// Returns `ModArithError::DimensionMismatch` if the inner dimensions do
/// not match or rows are ragged.
pub fn matrix_product(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ModArithError> {
    let (n, m_common) = check_rectangular(a, "matrix_product")?;
    let (b_rows, p) = check_rectangular(b, "matrix_product")?;
    if n == 0 {
        return Ok(Matrix::new());
    }
    if b_rows != m_common {
        return Err(ModArithError::DimensionMismatch(format!(
            "matrix_product: inner dimensions must match ({} vs {})",
            m_common, b_rows
        )));
    }

    let mut c = vec![vec![0; p]; n];
    for i in 0..n {
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                let term = ring.mul(a[i][k], b[k][j]);
                sum = ring.add(sum, term);
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Computes the matrix power `A^k` modulo m by square and multiply.
///
/// `A^0` is the identity matrix.
pub fn matrix_power(a: &Matrix, mut k: u64, ring: &Ring) -> Result<Matrix, ModArithError> {
    let n = check_square(a, "matrix_power")?;

    let mut res = identity_matrix(n);
    let mut base = matrix_mod(a, ring)?;
    while k > 0 {
        if k % 2 == 1 {
            res = matrix_product(&res, &base, ring)?;
        }
        k >>= 1;
        if k > 0 {
            base = matrix_product(&base, &base, ring)?;
        }
    }
    Ok(res)
}

/// Computes the Kronecker product `A (x) B` modulo m.
///
/// For A of shape k x m and B of shape p x q the result has shape
/// k*p x m*q.
pub fn kronecker_product(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ModArithError> {
    let (ar, ac) = check_rectangular(a, "kronecker_product")?;
    let (br, bc) = check_rectangular(b, "kronecker_product")?;

    let mut res = vec![vec![0; ac * bc]; ar * br];
    for i in 0..ar {
        for j in 0..ac {
            for k in 0..br {
                for l in 0..bc {
                    res[i * br + k][j * bc + l] = ring.mul(a[i][j], b[k][l]);
                }
            }
        }
    }
    Ok(res)
}

fn minor(a: &Matrix, row: usize, col: usize) -> Matrix {
    a.iter()
        .enumerate()
        .filter(|(i, _)| *i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|(j, _)| *j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Computes the determinant of a square matrix modulo m by cofactor
/// expansion along the first row.
pub fn determinant(a: &Matrix, ring: &Ring) -> Result<i64, ModArithError> {
    let n = check_square(a, "determinant")?;
    if n == 0 {
        return Err(ModArithError::DimensionMismatch(
            "determinant: matrix must be non-empty".into(),
        ));
    }
    Ok(det_inner(a, n, ring))
}

fn det_inner(a: &Matrix, n: usize, ring: &Ring) -> i64 {
    if n == 1 {
        return ring.normalize(a[0][0]);
    }
    if n == 2 {
        return ring.sub(ring.mul(a[0][0], a[1][1]), ring.mul(a[0][1], a[1][0]));
    }

    let mut det = 0;
    for j in 0..n {
        if a[0][j] == 0 {
            continue;
        }
        let sub_det = det_inner(&minor(a, 0, j), n - 1, ring);
        let term = ring.mul(a[0][j], sub_det);
        det = if j % 2 == 0 {
            ring.add(det, term)
        } else {
            ring.sub(det, term)
        };
    }
    det
}

/// Computes the cofactor of entry `(row, col)` modulo m.
pub fn cofactor(a: &Matrix, row: usize, col: usize, ring: &Ring) -> Result<i64, ModArithError> {
    let n = check_square(a, "cofactor")?;
    if n < 2 || row >= n || col >= n {
        return Err(ModArithError::DimensionMismatch(format!(
            "cofactor: entry ({}, {}) out of range for {}x{} matrix",
            row, col, n, n
        )));
    }

    let sub_det = det_inner(&minor(a, row, col), n - 1, ring);
    if (row + col) % 2 == 0 {
        Ok(sub_det)
    } else {
        Ok(ring.neg(sub_det))
    }
}

/// Computes the inverse of a square matrix modulo m by the cofactor
/// method: `A^-1 = det(A)^-1 * adj(A)`.
///
/// # Errors
///
/// Returns `ModArithError::SingularMatrix` when the determinant has no
/// inverse modulo m.
pub fn matrix_inverse(a: &Matrix, ring: &Ring) -> Result<Matrix, ModArithError> {
    let n = check_square(a, "matrix_inverse")?;
    if n == 0 {
        return Ok(Matrix::new());
    }

    let det = determinant(a, ring)?;
    let inv_det = ring.inv(det).map_err(|_| {
        ModArithError::SingularMatrix(format!(
            "determinant {} is not invertible mod {}",
            det,
            ring.modulus()
        ))
    })?;

    if n == 1 {
        return Ok(vec![vec![inv_det]]);
    }

    let mut inv = vec![vec![0; n]; n];
    for i in 0..n {
        for j in 0..n {
            // adjugate is the transposed cofactor matrix
            inv[j][i] = ring.mul(inv_det, cofactor(a, i, j, ring)?);
        }
    }
    Ok(inv)
}
