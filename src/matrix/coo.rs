//! Coordinate (COO) matrix format implementation

use std::fmt;
use num_traits::Num;

use crate::error::{Result, SparseError};
use crate::matrix::{DenseMatrix, SparseFormat};

/// A sparse matrix in coordinate (COO) format
///
/// Three parallel arrays of length nnz: `values[k]` is the element at
/// `(row_idx[k], col_idx[k])`. Entries are stored in row-major encounter
/// order of the dense source.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCOO<T> {
    n_rows: usize,
    n_cols: usize,
    values: Vec<T>,
    row_idx: Vec<usize>,
    col_idx: Vec<usize>,
}

impl<T> SparseMatrixCOO<T>
where
    T: Copy + Num,
{
    /// Encodes a dense matrix, counting its nonzeros on the way
    pub fn from_dense(dense: &DenseMatrix<T>) -> Self {
        let (n_rows, n_cols) = dense.shape();
        let mut values = Vec::new();
        let mut row_idx = Vec::new();
        let mut col_idx = Vec::new();

        for i in 0..n_rows {
            for j in 0..n_cols {
                let v = dense.at(i, j);
                if !v.is_zero() {
                    values.push(v);
                    row_idx.push(i);
                    col_idx.push(j);
                }
            }
        }

        Self {
            n_rows,
            n_cols,
            values,
            row_idx,
            col_idx,
        }
    }

    /// Encodes a dense matrix whose nonzero count the caller declares
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if `nnz` differs from the actual count
    pub fn from_dense_with_nnz(dense: &DenseMatrix<T>, nnz: usize) -> Result<Self> {
        let coo = Self::from_dense(dense);
        if coo.nnz() != nnz {
            return Err(SparseError::precondition("nnz", nnz, coo.nnz()));
        }
        Ok(coo)
    }

    /// Stored values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Row index of every stored value
    pub fn row_idx(&self) -> &[usize] {
        &self.row_idx
    }

    /// Column index of every stored value
    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    /// Iterates `(row, col, value)` triplets in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.row_idx
            .iter()
            .zip(&self.col_idx)
            .zip(&self.values)
            .map(|((&r, &c), &v)| (r, c, v))
    }
}

impl<T: Copy + Num> SparseFormat<T> for SparseMatrixCOO<T> {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn to_dense(&self) -> DenseMatrix<T> {
        let mut data = vec![T::zero(); self.n_rows * self.n_cols];
        for (r, c, v) in self.iter() {
            data[r * self.n_cols + c] = v;
        }
        DenseMatrix::from_raw(self.n_rows, self.n_cols, data)
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrixCOO<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCOO {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  data = {:?}", self.values)?;
        writeln!(f, "  row = {:?}", self.row_idx)?;
        writeln!(f, "  col = {:?}", self.col_idx)?;
        write!(f, "}}")
    }
}
