//! Transpose Jagged Diagonal Storage (TJDS) matrix format implementation
//!
//! Construction works on a copy of the dense source:
//!
//! 1. Tag every nonzero with its original row.
//! 2. Compact each column upward so its nonzeros form a dense prefix.
//! 3. Reorder columns so that heights (nonzero counts) are non-increasing.
//! 4. Read the first `tiles` rows of the compacted matrix; row t becomes
//!    tile t, delimited by `start[t]..start[t + 1]`.
//!
//! After step 3 every tile is a prefix of the reordered columns, so the
//! k-th entry of a tile belongs to reordered column k. The reordering is
//! kept in `permutation` so that an input vector can be brought into the
//! same order.

use std::fmt;
use num_traits::Num;

use crate::error::{Result, SparseError};
use crate::matrix::{DenseMatrix, SparseFormat};

/// A sparse matrix in TJDS format
#[derive(Clone, PartialEq)]
pub struct SparseMatrixTJDS<T> {
    n_rows: usize,
    n_cols: usize,

    /// Nonzero values, tile by tile
    values: Vec<T>,

    /// Original row of every value
    row_index: Vec<usize>,

    /// Size tiles + 1
    start: Vec<usize>,

    /// permutation[k] is the original column stored at position k
    permutation: Vec<usize>,
}

impl<T> SparseMatrixTJDS<T>
where
    T: Copy + Num,
{
    /// Encodes a dense matrix, deriving the tile count from its most
    /// populated column
    pub fn from_dense(dense: &DenseMatrix<T>) -> Self {
        let (n_rows, n_cols) = dense.shape();
        let mut work = dense.as_slice().to_vec();

        // Row tagging
        let mut tags: Vec<Option<usize>> = (0..n_rows * n_cols)
            .map(|idx| (!work[idx].is_zero()).then_some(idx / n_cols))
            .collect();

        // Column compaction
        for j in 0..n_cols {
            let mut top = 0;
            for i in 0..n_rows {
                let src = i * n_cols + j;
                if work[src].is_zero() {
                    continue;
                }
                if top < i {
                    let dst = top * n_cols + j;
                    work[dst] = work[src];
                    work[src] = T::zero();
                    tags[dst] = tags[src].take();
                }
                top += 1;
            }
        }

        // Column reordering, scanning rows bottom-up
        let mut permutation: Vec<usize> = (0..n_cols).collect();
        let mut sorted = 0;
        for i in (0..n_rows).rev() {
            let mut j = sorted;
            while j < n_cols && sorted + 1 < n_cols {
                if !work[i * n_cols + j].is_zero() {
                    if j != sorted {
                        for k in 0..n_rows {
                            work.swap(k * n_cols + j, k * n_cols + sorted);
                            tags.swap(k * n_cols + j, k * n_cols + sorted);
                        }
                        permutation.swap(j, sorted);
                    }
                    sorted += 1;
                }
                j += 1;
            }
        }

        // Tile extraction
        let tiles = (0..n_rows)
            .take_while(|&i| !work[i * n_cols].is_zero())
            .count();

        let mut values = Vec::new();
        let mut row_index = Vec::new();
        let mut start = Vec::with_capacity(tiles + 1);

        start.push(0);
        for i in 0..tiles {
            for j in 0..n_cols {
                let idx = i * n_cols + j;
                if let Some(row) = tags[idx] {
                    values.push(work[idx]);
                    row_index.push(row);
                }
            }
            start.push(values.len());
        }

        Self {
            n_rows,
            n_cols,
            values,
            row_index,
            start,
            permutation,
        }
    }

    /// Encodes a dense matrix whose nonzero count and tile count the caller
    /// declares
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if `nnz` is not the nonzero count or `tiles`
    /// is not the population of the most populated column
    pub fn from_dense_with_tiles(dense: &DenseMatrix<T>, nnz: usize, tiles: usize) -> Result<Self> {
        let tjds = Self::from_dense(dense);
        if tjds.n_tiles() != tiles {
            return Err(SparseError::precondition("tiles", tiles, tjds.n_tiles()));
        }
        if tjds.nnz() != nnz {
            return Err(SparseError::precondition("nnz", nnz, tjds.nnz()));
        }
        Ok(tjds)
    }

    /// Number of tiles
    pub fn n_tiles(&self) -> usize {
        self.start.len() - 1
    }

    /// Nonzero values, tile by tile
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Original row of every value
    pub fn row_index(&self) -> &[usize] {
        &self.row_index
    }

    /// Tile boundaries (size: tiles + 1)
    pub fn start(&self) -> &[usize] {
        &self.start
    }

    /// Original column held at each reordered position
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Reorders an input vector to match the column reordering
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `x.len()` differs from the column count
    pub fn permute_vector(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.n_cols {
            return Err(SparseError::shape("tjds permute", self.n_cols, x.len()));
        }
        Ok(self.permutation.iter().map(|&j| x[j]).collect())
    }

    /// Iterates tile t as (reordered position, row, value)
    pub fn tile_iter(&self, t: usize) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        assert!(t < self.n_tiles(), "Tile index out of bounds");

        let start = self.start[t];
        let end = self.start[t + 1];

        self.row_index[start..end]
            .iter()
            .zip(&self.values[start..end])
            .enumerate()
            .map(|(k, (&row, &val))| (k, row, val))
    }
}

impl<T: Copy + Num> SparseFormat<T> for SparseMatrixTJDS<T> {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn to_dense(&self) -> DenseMatrix<T> {
        let mut data = vec![T::zero(); self.n_rows * self.n_cols];
        for t in 0..self.n_tiles() {
            for (k, row, val) in self.tile_iter(t) {
                data[row * self.n_cols + self.permutation[k]] = val;
            }
        }
        DenseMatrix::from_raw(self.n_rows, self.n_cols, data)
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrixTJDS<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixTJDS {{")?;
        writeln!(
            f,
            "  dimensions: {} × {} ({} tiles)",
            self.n_rows,
            self.n_cols,
            self.start.len() - 1
        )?;
        writeln!(f, "  val = {:?}", self.values)?;
        writeln!(f, "  row_index = {:?}", self.row_index)?;
        writeln!(f, "  start = {:?}", self.start)?;
        writeln!(f, "  permutation = {:?}", self.permutation)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compaction_and_reordering() {
        // Column heights 1, 3, 2
        let dense = DenseMatrix::from_array([
            [0, 1, 0],
            [0, 2, 3],
            [4, 5, 6],
        ])
        .unwrap();
        let tjds = SparseMatrixTJDS::from_dense(&dense);

        assert_eq!(tjds.permutation(), &[1, 2, 0]);
        assert_eq!(tjds.n_tiles(), 3);
        assert_eq!(tjds.start(), &[0, 3, 5, 6]);
        assert_eq!(tjds.values(), &[1, 3, 4, 2, 6, 5]);
        assert_eq!(tjds.row_index(), &[0, 1, 2, 1, 2, 2]);
    }

    #[test]
    fn test_tiles_are_prefixes() {
        let dense = DenseMatrix::from_array([
            [1.0, 0.0, 0.0, 2.0, 0.0],
            [3.0, 4.0, 0.0, 5.0, 0.0],
            [6.0, 0.0, 7.0, 8.0, 9.0],
            [0.0, 0.0, 10.0, 11.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 12.0],
        ])
        .unwrap();
        let tjds = SparseMatrixTJDS::from_dense(&dense);

        // Column 3 holds four nonzeros, the most of any column
        assert_eq!(tjds.n_tiles(), 4);
        assert_eq!(tjds.permutation()[0], 3);

        let sizes: Vec<usize> = tjds.start().windows(2).map(|w| w[1] - w[0]).collect();
        assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(sizes.iter().sum::<usize>(), 12);
        assert_eq!(tjds.to_dense(), dense);
    }

    #[test]
    fn test_declared_tiles() {
        let dense = DenseMatrix::from_array([[1, 0], [2, 3]]).unwrap();
        assert!(SparseMatrixTJDS::from_dense_with_tiles(&dense, 3, 2).is_ok());
        assert_eq!(
            SparseMatrixTJDS::from_dense_with_tiles(&dense, 3, 1),
            Err(SparseError::PreconditionViolation {
                param: "tiles",
                declared: 1,
                actual: 2
            })
        );
        assert!(SparseMatrixTJDS::from_dense_with_tiles(&dense, 4, 2).is_err());
    }

    #[test]
    fn test_permute_vector() {
        let dense = DenseMatrix::from_array([[0, 1, 0], [0, 2, 3], [4, 5, 6]]).unwrap();
        let tjds = SparseMatrixTJDS::from_dense(&dense);

        assert_eq!(tjds.permute_vector(&[10, 20, 30]).unwrap(), vec![20, 30, 10]);
        assert!(tjds.permute_vector(&[1, 2]).is_err());
    }

    #[test]
    fn test_all_zero_source() {
        let dense = DenseMatrix::new(3, 2, vec![0.0; 6]).unwrap();
        let tjds = SparseMatrixTJDS::from_dense(&dense);
        assert_eq!(tjds.n_tiles(), 0);
        assert_eq!(tjds.start(), &[0]);
        assert_eq!(tjds.to_dense(), dense);
    }
}
