//! ELLPACK (ELL) matrix format implementation
//!
//! Every row owns exactly `width` slots. Rows with fewer nonzeros are padded
//! with a zero value and the [`ELL_PADDING`] column sentinel.

use std::fmt;
use num_traits::Num;

use crate::error::{Result, SparseError};
use crate::matrix::{DenseMatrix, SparseFormat};

/// Column index of a padding slot. Never a valid column.
pub const ELL_PADDING: usize = usize::MAX;

/// A sparse matrix in ELLPACK format
#[derive(Clone, PartialEq)]
pub struct SparseMatrixELL<T> {
    n_rows: usize,
    n_cols: usize,

    /// Slots per row
    width: usize,

    /// Size n_rows * width, row-major
    values: Vec<T>,

    /// Size n_rows * width, `ELL_PADDING` in padded slots
    col_idx: Vec<usize>,
}

impl<T> SparseMatrixELL<T>
where
    T: Copy + Num,
{
    /// Encodes a dense matrix using its largest row population as width
    pub fn from_dense(dense: &DenseMatrix<T>) -> Self {
        let width = dense.row_counts().into_iter().max().unwrap_or(0);
        Self::encode(dense, width)
    }

    /// Encodes a dense matrix with a caller-declared row width
    ///
    /// A width above the true maximum only adds padding.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if some row holds more than `width` nonzeros
    pub fn from_dense_with_width(dense: &DenseMatrix<T>, width: usize) -> Result<Self> {
        let actual = dense.row_counts().into_iter().max().unwrap_or(0);
        if actual > width {
            return Err(SparseError::precondition("max nnz per row", width, actual));
        }
        Ok(Self::encode(dense, width))
    }

    fn encode(dense: &DenseMatrix<T>, width: usize) -> Self {
        let (n_rows, n_cols) = dense.shape();
        let mut values = Vec::with_capacity(n_rows * width);
        let mut col_idx = Vec::with_capacity(n_rows * width);

        for i in 0..n_rows {
            let mut filled = 0;
            for j in 0..n_cols {
                let v = dense.at(i, j);
                if !v.is_zero() {
                    values.push(v);
                    col_idx.push(j);
                    filled += 1;
                }
            }

            for _ in filled..width {
                values.push(T::zero());
                col_idx.push(ELL_PADDING);
            }
        }

        Self {
            n_rows,
            n_cols,
            width,
            values,
            col_idx,
        }
    }

    /// Slots per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Slot values, padding included
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Slot columns, `ELL_PADDING` for padding
    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    /// Iterates the occupied slots of row i as (column, value)
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = i * self.width;
        let end = start + self.width;

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .filter(|&(&col, _)| col != ELL_PADDING)
            .map(|(&col, val)| (col, val))
    }
}

impl<T: Copy + Num> SparseFormat<T> for SparseMatrixELL<T> {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    fn nnz(&self) -> usize {
        self.col_idx.iter().filter(|&&c| c != ELL_PADDING).count()
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

impl<T: fmt::Debug> fmt::Debug for SparseMatrixELL<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixELL {{")?;
        writeln!(
            f,
            "  dimensions: {} × {} (width {})",
            self.n_rows, self.n_cols, self.width
        )?;
        writeln!(f, "  data = {:?}", self.values)?;
        let cols: Vec<String> = self
            .col_idx
            .iter()
            .map(|&c| if c == ELL_PADDING { "-1".to_string() } else { c.to_string() })
            .collect();
        writeln!(f, "  col = [{}]", cols.join(", "))?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        let dense = DenseMatrix::from_array([[0, 4, 5], [0, 0, 0], [6, 0, 0]]).unwrap();
        let ell = SparseMatrixELL::from_dense(&dense);

        assert_eq!(ell.width(), 2);
        assert_eq!(ell.values(), &[4, 5, 0, 0, 6, 0]);
        assert_eq!(
            ell.col_idx(),
            &[1, 2, ELL_PADDING, ELL_PADDING, 0, ELL_PADDING]
        );
        assert_eq!(ell.nnz(), 3);
    }

    #[test]
    fn test_wider_than_needed() {
        let dense = DenseMatrix::from_array([[1.0, 0.0], [0.0, 2.0]]).unwrap();
        let ell = SparseMatrixELL::from_dense_with_width(&dense, 3).unwrap();

        assert_eq!(ell.values().len(), 6);
        assert_eq!(ell.to_dense(), dense);
    }

    #[test]
    fn test_width_too_small() {
        let dense = DenseMatrix::from_array([[1.0, 2.0, 3.0], [0.0, 0.0, 4.0]]).unwrap();
        assert_eq!(
            SparseMatrixELL::from_dense_with_width(&dense, 2),
            Err(SparseError::PreconditionViolation {
                param: "max nnz per row",
                declared: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_debug_renders_sentinel() {
        let dense = DenseMatrix::from_array([[1, 0], [0, 0]]).unwrap();
        let rendered = format!("{:?}", SparseMatrixELL::from_dense(&dense));
        assert!(rendered.contains("col = [0, -1]"));
    }
}
