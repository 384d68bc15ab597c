//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;
use num_traits::Num;

use crate::error::{Result, SparseError};
use crate::matrix::{DenseMatrix, SparseFormat};
use crate::utils::is_pointer_array;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Row i occupies `row_ptr[i]..row_ptr[i + 1]` with ascending columns.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSR<T> {
    n_rows: usize,
    n_cols: usize,

    /// row_ptr[0] = 0, row_ptr[n_rows] = nnz
    row_ptr: Vec<usize>,

    col_idx: Vec<usize>,

    values: Vec<T>,
}

impl<T> SparseMatrixCSR<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix from raw arrays
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr must start at 0, never decrease and end at col_idx.len()
    /// - every column index must be below n_cols
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert!(
            is_pointer_array(&row_ptr, col_idx.len()),
            "row_ptr must be non-decreasing from 0 to nnz"
        );

        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Encodes a dense matrix by scanning it row-major
    pub fn from_dense(dense: &DenseMatrix<T>) -> Self {
        let (n_rows, n_cols) = dense.shape();
        let mut row_ptr = Vec::with_capacity(n_rows + 1);
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        row_ptr.push(0);
        for i in 0..n_rows {
            for j in 0..n_cols {
                let v = dense.at(i, j);
                if !v.is_zero() {
                    values.push(v);
                    col_idx.push(j);
                }
            }
            row_ptr.push(values.len());
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Encodes a dense matrix whose nonzero count the caller declares
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if `nnz` differs from the actual count
    pub fn from_dense_with_nnz(dense: &DenseMatrix<T>, nnz: usize) -> Result<Self> {
        let csr = Self::from_dense(dense);
        if csr.nnz() != nnz {
            return Err(SparseError::precondition("nnz", nnz, csr.nnz()));
        }
        Ok(csr)
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
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

    /// Row pointers (size: n_rows + 1)
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Column indices (size: nnz)
    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    /// Non-zero values (size: nnz)
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a non-zero element
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }
}

impl<T: Copy + Num> SparseFormat<T> for SparseMatrixCSR<T> {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn to_dense(&self) -> DenseMatrix<T> {
        let mut data = vec![T::zero(); self.n_rows * self.n_cols];
        for i in 0..self.n_rows {
            for (j, &v) in self.row_iter(i) {
                data[i * self.n_cols + j] = v;
            }
        }
        DenseMatrix::from_raw(self.n_rows, self.n_cols, data)
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.values.len())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let start = self.row_ptr[i];
                let end = self.row_ptr[i + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for j in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.col_idx[j], self.values[j])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> DenseMatrix<f64> {
        DenseMatrix::from_array([
            [1.0, 0.0, 0.0, 2.0, 0.0],
            [3.0, 4.0, 0.0, 5.0, 0.0],
            [6.0, 0.0, 7.0, 8.0, 9.0],
            [0.0, 0.0, 10.0, 11.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 12.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_dense() {
        let csr = SparseMatrixCSR::from_dense(&scenario());

        assert_eq!(csr.nnz(), 12);
        assert_eq!(csr.row_ptr(), &[0, 2, 5, 9, 11, 12]);
        assert_eq!(csr.col_idx(), &[0, 3, 0, 1, 3, 0, 2, 3, 4, 2, 3, 4]);
        assert_eq!(
            csr.values(),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
        );
    }

    #[test]
    fn test_declared_nnz() {
        assert!(SparseMatrixCSR::from_dense_with_nnz(&scenario(), 12).is_ok());
        assert!(matches!(
            SparseMatrixCSR::from_dense_with_nnz(&scenario(), 11),
            Err(SparseError::PreconditionViolation { declared: 11, actual: 12, .. })
        ));
    }

    #[test]
    fn test_new_matrix() {
        let matrix = SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );

        assert_eq!(matrix.shape(), (3, 3));
        assert_eq!(matrix.nnz(), 5);
    }

    #[test]
    fn test_row_iter() {
        let matrix = SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );

        let row0: Vec<_> = matrix.row_iter(0).collect();
        assert_eq!(row0, vec![(0, &1), (1, &2)]);

        let row1: Vec<_> = matrix.row_iter(1).collect();
        assert_eq!(row1, vec![(1, &3)]);

        let row2: Vec<_> = matrix.row_iter(2).collect();
        assert_eq!(row2, vec![(0, &4), (2, &5)]);
    }

    #[test]
    fn test_identity() {
        let identity = SparseMatrixCSR::<i32>::identity(3);

        assert_eq!(identity.row_ptr(), &[0, 1, 2, 3]);
        assert_eq!(identity.col_idx(), &[0, 1, 2]);
        assert_eq!(identity.values(), &[1, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "row_ptr.len() must be n_rows + 1")]
    fn test_invalid_row_ptr() {
        SparseMatrixCSR::new(
            3, 3,
            vec![0, 2, 3], // Missing last element
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );
    }

    #[test]
    #[should_panic(expected = "row_ptr must be non-decreasing from 0 to nnz")]
    fn test_decreasing_row_ptr() {
        SparseMatrixCSR::new(
            3, 3,
            vec![0, 3, 2, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );
    }
}
