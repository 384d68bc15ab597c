//! Symmetric Sparse Skyline (SSS) matrix format implementation
//!
//! For a symmetric N×N matrix only the diagonal (dense, length N) and one
//! strict triangle (CSR-style) are stored.

use std::fmt;
use num_traits::{Num, ToPrimitive};

use crate::error::{Result, SparseError};
use crate::matrix::config::{EncoderConfig, Triangle};
use crate::matrix::{DenseMatrix, SparseFormat};

/// A symmetric sparse matrix in SSS format
#[derive(Clone, PartialEq)]
pub struct SparseMatrixSSS<T> {
    n: usize,
    triangle: Triangle,

    /// Diagonal, zeros included
    diag: Vec<T>,

    /// Off-diagonal values of the stored triangle
    values: Vec<T>,

    /// Column of every off-diagonal value
    col_idx: Vec<usize>,

    /// Size n + 1, indexes into values
    row_ptr: Vec<usize>,
}

impl<T> SparseMatrixSSS<T>
where
    T: Copy + Num + ToPrimitive,
{
    /// Encodes a symmetric dense matrix keeping the given triangle
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if the source is not square
    /// - `NotSymmetric` if some a_ij differs from a_ji
    pub fn from_dense(dense: &DenseMatrix<T>, triangle: Triangle) -> Result<Self> {
        Self::from_dense_with_config(dense, &EncoderConfig::with_triangle(triangle))
    }

    /// Encodes a symmetric dense matrix as directed by `config`
    pub fn from_dense_with_config(dense: &DenseMatrix<T>, config: &EncoderConfig) -> Result<Self> {
        let (n_rows, n_cols) = dense.shape();
        if n_rows != n_cols {
            return Err(SparseError::shape("sss square source", n_rows, n_cols));
        }
        check_symmetric(dense, config.symmetry_tolerance)?;

        let n = n_rows;
        let triangle = config.sss_triangle;
        let mut diag = Vec::with_capacity(n);
        let mut values = Vec::new();
        let mut col_idx = Vec::new();
        let mut row_ptr = Vec::with_capacity(n + 1);

        row_ptr.push(0);
        for i in 0..n {
            diag.push(dense.at(i, i));
            for j in 0..n {
                let v = dense.at(i, j);
                if triangle.contains(i, j) && !v.is_zero() {
                    values.push(v);
                    col_idx.push(j);
                }
            }
            row_ptr.push(values.len());
        }

        Ok(Self {
            n,
            triangle,
            diag,
            values,
            col_idx,
            row_ptr,
        })
    }
}

impl<T> SparseMatrixSSS<T>
where
    T: Copy + Num,
{
    /// Order of the square matrix
    pub fn order(&self) -> usize {
        self.n
    }

    /// Which strict triangle is stored
    pub fn triangle(&self) -> Triangle {
        self.triangle
    }

    /// Diagonal (size: n)
    pub fn diag(&self) -> &[T] {
        &self.diag
    }

    /// Off-diagonal values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Column of every off-diagonal value
    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    /// Row pointers over the off-diagonal values (size: n + 1)
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Iterates the stored off-diagonal entries as (row, col, value)
    pub fn off_diagonal_iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.n).flat_map(move |i| {
            (self.row_ptr[i]..self.row_ptr[i + 1]).map(move |k| (i, self.col_idx[k], self.values[k]))
        })
    }
}

/// Verifies |a_ij - a_ji| <= tolerance for every pair
fn check_symmetric<T>(dense: &DenseMatrix<T>, tolerance: f64) -> Result<()>
where
    T: Copy + Num + ToPrimitive,
{
    if tolerance == 0.0 {
        return match dense.first_asymmetry() {
            Some((row, col)) => Err(SparseError::NotSymmetric { row, col }),
            None => Ok(()),
        };
    }

    let n = dense.n_rows();
    for i in 0..n {
        for j in (i + 1)..n {
            let a = dense.at(i, j);
            let b = dense.at(j, i);
            let symmetric = match (a.to_f64(), b.to_f64()) {
                (Some(a), Some(b)) => (a - b).abs() <= tolerance,
                _ => a == b,
            };
            if !symmetric {
                return Err(SparseError::NotSymmetric { row: i, col: j });
            }
        }
    }
    Ok(())
}

impl<T: Copy + Num> SparseFormat<T> for SparseMatrixSSS<T> {
    fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    /// Nonzeros of the full symmetric matrix
    fn nnz(&self) -> usize {
        self.diag.iter().filter(|v| !v.is_zero()).count() + 2 * self.values.len()
    }

    fn to_dense(&self) -> DenseMatrix<T> {
        let n = self.n;
        let mut data = vec![T::zero(); n * n];
        for (i, &d) in self.diag.iter().enumerate() {
            data[i * n + i] = d;
        }
        for (r, c, v) in self.off_diagonal_iter() {
            data[r * n + c] = v;
            data[c * n + r] = v;
        }
        DenseMatrix::from_raw(n, n, data)
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrixSSS<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixSSS {{")?;
        writeln!(f, "  dimensions: {} × {} ({:?} triangle)", self.n, self.n, self.triangle)?;
        writeln!(f, "  dvalues = {:?}", self.diag)?;
        writeln!(f, "  values = {:?}", self.values)?;
        writeln!(f, "  col = {:?}", self.col_idx)?;
        writeln!(f, "  rowptr = {:?}", self.row_ptr)?;
        write!(f, "}}")
    }
}
