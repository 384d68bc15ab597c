//! Dense row-major matrix, the source of every sparse encoding

use std::fmt;
use num_traits::Num;

use crate::error::{Result, SparseError};

/// A rectangular row-major matrix
///
/// The shape is fixed at construction and the contents are never mutated
/// afterwards. `Clone` produces an independent deep copy.
#[derive(Clone, PartialEq)]
pub struct DenseMatrix<T> {
    n_rows: usize,
    n_cols: usize,
    data: Vec<T>,
}

impl<T> DenseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates a matrix from row-major data
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if `n_rows` or `n_cols` is zero
    /// - `ShapeMismatch` if `data.len() != n_rows * n_cols`
    pub fn new(n_rows: usize, n_cols: usize, data: Vec<T>) -> Result<Self> {
        if n_rows == 0 || n_cols == 0 {
            return Err(SparseError::InvalidDimension {
                rows: n_rows,
                cols: n_cols,
            });
        }
        if data.len() != n_rows * n_cols {
            return Err(SparseError::shape("dense data", n_rows * n_cols, data.len()));
        }

        Ok(Self { n_rows, n_cols, data })
    }

    /// Creates a matrix from a fixed-size 2D array
    pub fn from_array<const R: usize, const C: usize>(rows: [[T; C]; R]) -> Result<Self> {
        let data = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self::new(R, C, data)
    }

    /// Creates a matrix from a slice of equally long rows
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);

        for row in rows {
            if row.len() != n_cols {
                return Err(SparseError::shape("dense row length", n_cols, row.len()));
            }
            data.extend_from_slice(row);
        }

        Self::new(n_rows, n_cols, data)
    }

    /// Wraps row-major data produced by a kernel
    pub(crate) fn from_raw(n_rows: usize, n_cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), n_rows * n_cols);
        Self { n_rows, n_cols, data }
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Reads the element at (i, j)
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` outside `[0, n_rows) × [0, n_cols)`
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        if i >= self.n_rows || j >= self.n_cols {
            return Err(SparseError::IndexOutOfBounds {
                row: i,
                col: j,
                rows: self.n_rows,
                cols: self.n_cols,
            });
        }
        Ok(self.data[i * self.n_cols + j])
    }

    /// Unchecked-by-Result access for loops over known extents
    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> T {
        self.data[i * self.n_cols + j]
    }

    /// Row i as a slice
    pub fn row(&self, i: usize) -> Result<&[T]> {
        if i >= self.n_rows {
            return Err(SparseError::IndexOutOfBounds {
                row: i,
                col: 0,
                rows: self.n_rows,
                cols: self.n_cols,
            });
        }
        Ok(&self.data[i * self.n_cols..(i + 1) * self.n_cols])
    }

    /// The row-major backing storage
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major storage
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Number of nonzero elements
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|v| !v.is_zero()).count()
    }

    /// Nonzero count of every row
    pub fn row_counts(&self) -> Vec<usize> {
        self.data
            .chunks(self.n_cols)
            .map(|row| row.iter().filter(|v| !v.is_zero()).count())
            .collect()
    }

    /// Nonzero count of every column
    pub fn col_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.n_cols];
        for row in self.data.chunks(self.n_cols) {
            for (j, v) in row.iter().enumerate() {
                if !v.is_zero() {
                    counts[j] += 1;
                }
            }
        }
        counts
    }

    /// Whether the matrix is square and equal to its transpose
    pub fn is_symmetric(&self) -> bool {
        self.n_rows == self.n_cols && self.first_asymmetry().is_none()
    }

    /// First `(i, j)` with `i < j` and `a[i][j] != a[j][i]`, scanning row by row
    ///
    /// Only the leading square block is inspected for non-square matrices.
    pub(crate) fn first_asymmetry(&self) -> Option<(usize, usize)> {
        let n = self.n_rows.min(self.n_cols);
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .find(|&(i, j)| self.at(i, j) != self.at(j, i))
    }

    /// Returns the transposed matrix
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.n_cols {
            for i in 0..self.n_rows {
                data.push(self.at(i, j));
            }
        }
        Self::from_raw(self.n_cols, self.n_rows, data)
    }
}

impl<T: fmt::Debug> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        for row in self.data.chunks(self.n_cols) {
            write!(f, "   ")?;
            for v in row {
                write!(f, " {:?}", v)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
