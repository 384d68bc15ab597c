//! Block Sparse Row (BSR) matrix format implementation
//!
//! The matrix is tiled into square `block_size × block_size` blocks. A block
//! is stored iff it holds at least one nonzero, and then all of its cells
//! (zeros included) are stored row-major.

use std::fmt;
use num_traits::Num;

use crate::error::{Result, SparseError};
use crate::matrix::{DenseMatrix, SparseFormat};

/// A sparse matrix in Block Sparse Row (BSR) format
#[derive(Clone, PartialEq)]
pub struct SparseMatrixBSR<T> {
    n_rows: usize,
    n_cols: usize,
    block_size: usize,

    /// Size n_rows / block_size + 1, indexes into block_col
    block_row_ptr: Vec<usize>,

    /// Block-column index of every stored block
    block_col: Vec<usize>,

    /// Block contents, block_size² values per stored block
    values: Vec<T>,
}

impl<T> SparseMatrixBSR<T>
where
    T: Copy + Num,
{
    /// Encodes a dense matrix with the given block size
    ///
    /// # Errors
    ///
    /// `InvalidBlockSize` if `block_size` is zero or does not divide both
    /// dimensions of the source
    pub fn from_dense(dense: &DenseMatrix<T>, block_size: usize) -> Result<Self> {
        let (n_rows, n_cols) = dense.shape();
        if block_size == 0 || n_rows % block_size != 0 || n_cols % block_size != 0 {
            return Err(SparseError::InvalidBlockSize {
                block_size,
                rows: n_rows,
                cols: n_cols,
            });
        }

        let block_area = block_size * block_size;
        let mut block_row_ptr = Vec::with_capacity(n_rows / block_size + 1);
        let mut block_col = Vec::new();
        let mut values = Vec::new();

        block_row_ptr.push(0);
        for i in (0..n_rows).step_by(block_size) {
            for j in (0..n_cols).step_by(block_size) {
                let occupied = (i..i + block_size)
                    .any(|bi| (j..j + block_size).any(|bj| !dense.at(bi, bj).is_zero()));

                if occupied {
                    block_col.push(j / block_size);
                    values.reserve(block_area);
                    for bi in i..i + block_size {
                        for bj in j..j + block_size {
                            values.push(dense.at(bi, bj));
                        }
                    }
                }
            }
            block_row_ptr.push(block_col.len());
        }

        Ok(Self {
            n_rows,
            n_cols,
            block_size,
            block_row_ptr,
            block_col,
            values,
        })
    }

    /// Encodes a dense matrix whose occupied-block count the caller declares
    ///
    /// # Errors
    ///
    /// `InvalidBlockSize` as for [`from_dense`](Self::from_dense), and
    /// `PreconditionViolation` if `n_blocks` differs from the actual count
    pub fn from_dense_with_blocks(
        dense: &DenseMatrix<T>,
        block_size: usize,
        n_blocks: usize,
    ) -> Result<Self> {
        let bsr = Self::from_dense(dense, block_size)?;
        if bsr.n_blocks() != n_blocks {
            return Err(SparseError::precondition("nnz blocks", n_blocks, bsr.n_blocks()));
        }
        Ok(bsr)
    }

    /// Edge length of a block
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of stored blocks
    pub fn n_blocks(&self) -> usize {
        self.block_col.len()
    }

    /// Block-row pointers (size: n_rows / block_size + 1)
    pub fn block_row_ptr(&self) -> &[usize] {
        &self.block_row_ptr
    }

    /// Block-column index of each stored block
    pub fn block_col(&self) -> &[usize] {
        &self.block_col
    }

    /// Row-major contents of every stored block, concatenated
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterates the stored blocks of block row `bi` as (block column, cells)
    pub fn block_row_iter(&self, bi: usize) -> impl Iterator<Item = (usize, &[T])> {
        assert!(bi + 1 < self.block_row_ptr.len(), "Block row index out of bounds");

        let area = self.block_size * self.block_size;
        let start = self.block_row_ptr[bi];
        let end = self.block_row_ptr[bi + 1];

        self.block_col[start..end]
            .iter()
            .zip(self.values[start * area..end * area].chunks_exact(area))
            .map(|(&bc, cells)| (bc, cells))
    }
}

impl<T: Copy + Num> SparseFormat<T> for SparseMatrixBSR<T> {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Counts stored cells that are nonzero, not padded block cells
    fn nnz(&self) -> usize {
        self.values.iter().filter(|v| !v.is_zero()).count()
    }

    fn to_dense(&self) -> DenseMatrix<T> {
        let b = self.block_size;
        let mut data = vec![T::zero(); self.n_rows * self.n_cols];
        for bi in 0..self.n_rows / b {
            for (bc, cells) in self.block_row_iter(bi) {
                for (k, &v) in cells.iter().enumerate() {
                    let i = bi * b + k / b;
                    let j = bc * b + k % b;
                    data[i * self.n_cols + j] = v;
                }
            }
        }
        DenseMatrix::from_raw(self.n_rows, self.n_cols, data)
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrixBSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixBSR {{")?;
        writeln!(
            f,
            "  dimensions: {} × {} (block size {})",
            self.n_rows, self.n_cols, self.block_size
        )?;
        writeln!(f, "  data = {:?}", self.values)?;
        writeln!(f, "  blockRowptr = {:?}", self.block_row_ptr)?;
        writeln!(f, "  blockCol = {:?}", self.block_col)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_by_four() -> DenseMatrix<i32> {
        // Blocks (0,0) and (1,1) occupied, (0,1) and (1,0) empty
        DenseMatrix::from_array([
            [1, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 2, 3],
            [0, 0, 0, 4],
        ])
        .unwrap()
    }

    #[test]
    fn test_stores_whole_blocks() {
        let bsr = SparseMatrixBSR::from_dense(&four_by_four(), 2).unwrap();

        assert_eq!(bsr.n_blocks(), 2);
        assert_eq!(bsr.block_row_ptr(), &[0, 1, 2]);
        assert_eq!(bsr.block_col(), &[0, 1]);
        assert_eq!(bsr.values(), &[1, 0, 0, 0, 2, 3, 0, 4]);
        assert_eq!(bsr.nnz(), 4);
    }

    #[test]
    fn test_block_row_iter() {
        let bsr = SparseMatrixBSR::from_dense(&four_by_four(), 2).unwrap();
        let row1: Vec<_> = bsr.block_row_iter(1).collect();
        assert_eq!(row1, vec![(1, &[2, 3, 0, 4][..])]);
    }

    #[test]
    fn test_invalid_block_size() {
        let dense = DenseMatrix::new(4, 6, vec![1.0; 24]).unwrap();
        assert!(matches!(
            SparseMatrixBSR::from_dense(&dense, 4),
            Err(SparseError::InvalidBlockSize { block_size: 4, .. })
        ));
        assert!(SparseMatrixBSR::from_dense(&dense, 0).is_err());
        assert!(SparseMatrixBSR::from_dense(&dense, 2).is_ok());
    }

    #[test]
    fn test_declared_block_count() {
        assert!(SparseMatrixBSR::from_dense_with_blocks(&four_by_four(), 2, 2).is_ok());
        assert!(matches!(
            SparseMatrixBSR::from_dense_with_blocks(&four_by_four(), 2, 3),
            Err(SparseError::PreconditionViolation { declared: 3, actual: 2, .. })
        ));
    }
}
