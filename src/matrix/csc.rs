//! Compressed Sparse Column (CSC) matrix format implementation

use std::fmt;
use num_traits::Num;

use crate::error::{Result, SparseError};
use crate::matrix::{DenseMatrix, SparseFormat};
use crate::utils::is_pointer_array;

/// A sparse matrix in Compressed Sparse Column (CSC) format
///
/// The CSC format stores a sparse matrix using three arrays:
/// - col_ptr: Array of size n_cols + 1 containing indices into row_idx and values arrays
/// - row_idx: Array of size nnz containing row indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Column j occupies `col_ptr[j]..col_ptr[j + 1]` with ascending rows.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSC<T> {
    n_rows: usize,
    n_cols: usize,

    /// col_ptr[0] = 0, col_ptr[n_cols] = nnz
    col_ptr: Vec<usize>,

    row_idx: Vec<usize>,

    values: Vec<T>,
}

impl<T> SparseMatrixCSC<T>
where
    T: Copy + Num,
{
    /// Creates a new CSC matrix from raw arrays
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - col_ptr.len() must be n_cols + 1
    /// - row_idx.len() must equal values.len()
    /// - col_ptr must start at 0, never decrease and end at row_idx.len()
    /// - every row index must be below n_rows
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(col_ptr.len(), n_cols + 1, "col_ptr.len() must be n_cols + 1");
        assert_eq!(row_idx.len(), values.len(), "row_idx.len() must equal values.len()");
        assert!(
            is_pointer_array(&col_ptr, row_idx.len()),
            "col_ptr must be non-decreasing from 0 to nnz"
        );

        for &row in &row_idx {
            assert!(row < n_rows, "Row index {} out of bounds (n_rows = {})", row, n_rows);
        }

        Self {
            n_rows,
            n_cols,
            col_ptr,
            row_idx,
            values,
        }
    }

    /// Encodes a dense matrix by scanning it column-major
    pub fn from_dense(dense: &DenseMatrix<T>) -> Self {
        let (n_rows, n_cols) = dense.shape();
        let mut col_ptr = Vec::with_capacity(n_cols + 1);
        let mut row_idx = Vec::new();
        let mut values = Vec::new();

        col_ptr.push(0);
        for j in 0..n_cols {
            for i in 0..n_rows {
                let v = dense.at(i, j);
                if !v.is_zero() {
                    values.push(v);
                    row_idx.push(i);
                }
            }
            col_ptr.push(values.len());
        }

        Self {
            n_rows,
            n_cols,
            col_ptr,
            row_idx,
            values,
        }
    }

    /// Encodes a dense matrix whose nonzero count the caller declares
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if `nnz` differs from the actual count
    pub fn from_dense_with_nnz(dense: &DenseMatrix<T>, nnz: usize) -> Result<Self> {
        let csc = Self::from_dense(dense);
        if csc.nnz() != nnz {
            return Err(SparseError::precondition("nnz", nnz, csc.nnz()));
        }
        Ok(csc)
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            col_ptr: (0..=n).collect(),
            row_idx: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Column pointers (size: n_cols + 1)
    pub fn col_ptr(&self) -> &[usize] {
        &self.col_ptr
    }

    /// Row indices (size: nnz)
    pub fn row_idx(&self) -> &[usize] {
        &self.row_idx
    }

    /// Non-zero values (size: nnz)
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over the non-zero elements in column j
    ///
    /// Each item is a tuple (row_idx, value) representing a non-zero element
    pub fn col_iter(&self, j: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(j < self.n_cols, "Column index out of bounds");

        let start = self.col_ptr[j];
        let end = self.col_ptr[j + 1];

        self.row_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&row, val)| (row, val))
    }
}

impl<T: Copy + Num> SparseFormat<T> for SparseMatrixCSC<T> {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn to_dense(&self) -> DenseMatrix<T> {
        let mut data = vec![T::zero(); self.n_rows * self.n_cols];
        for j in 0..self.n_cols {
            for (i, &v) in self.col_iter(j) {
                data[i * self.n_cols + j] = v;
            }
        }
        DenseMatrix::from_raw(self.n_rows, self.n_cols, data)
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrixCSC<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSC {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.values.len())?;

        let max_cols_to_print = 5.min(self.n_cols);

        if max_cols_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for j in 0..max_cols_to_print {
                write!(f, "    col {}: ", j)?;
                let start = self.col_ptr[j];
                let end = self.col_ptr[j + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for i in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.row_idx[i], self.values[i])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_cols > max_cols_to_print {
                writeln!(f, "    ... ({} more columns)", self.n_cols - max_cols_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
