//! Reference dense products
//!
//! These provide the ground truth for correctness testing of the sparse
//! kernels. They are plain triple loops with no attempt at performance.

use num_traits::Num;
use std::ops::AddAssign;

use crate::error::{Result, SparseError};
use crate::matrix::DenseMatrix;

/// Computes y = A·x on dense operands
pub fn dense_matvec<T>(a: &DenseMatrix<T>, x: &[T]) -> Result<Vec<T>>
where
    T: Copy + Num + AddAssign,
{
    let (n_rows, n_cols) = a.shape();
    if x.len() != n_cols {
        return Err(SparseError::shape("dense matvec input", n_cols, x.len()));
    }

    let mut y = vec![T::zero(); n_rows];
    for (i, out) in y.iter_mut().enumerate() {
        for (j, &xj) in x.iter().enumerate() {
            *out += a.at(i, j) * xj;
        }
    }
    Ok(y)
}

/// Computes C = A·B on dense operands
pub fn dense_matmul<T>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>>
where
    T: Copy + Num + AddAssign,
{
    if a.n_cols() != b.n_rows() {
        return Err(SparseError::shape("dense matmul inner dimension", a.n_cols(), b.n_rows()));
    }

    let (m, k) = a.shape();
    let n = b.n_cols();
    let mut data = vec![T::zero(); m * n];

    for i in 0..m {
        for p in 0..k {
            let a_ip = a.at(i, p);
            if a_ip.is_zero() {
                continue;
            }
            for j in 0..n {
                data[i * n + j] += a_ip * b.at(p, j);
            }
        }
    }

    Ok(DenseMatrix::from_raw(m, n, data))
}
