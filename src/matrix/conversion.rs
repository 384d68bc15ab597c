//! Conversion functions between the compressed row and column formats

use crate::matrix::{SparseFormat, SparseMatrixCSC, SparseMatrixCSR};
use crate::utils::exclusive_scan;
use num_traits::Num;

impl<T: Copy + Num> SparseMatrixCSR<T> {
    /// Converts this CSR matrix to CSC format
    pub fn to_csc(&self) -> SparseMatrixCSC<T> {
        let (n_rows, n_cols) = self.shape();

        // Count non-zeros per column
        let mut col_counts = vec![0; n_cols];
        for &col in self.col_idx() {
            col_counts[col] += 1;
        }

        let col_ptr = exclusive_scan(&col_counts);

        let nnz = self.nnz();
        let mut row_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];

        // Rows are visited in order, so rows stay ascending within a column
        let mut next = col_ptr.clone();
        for i in 0..n_rows {
            for (col, &val) in self.row_iter(i) {
                let pos = next[col];
                row_idx[pos] = i;
                values[pos] = val;
                next[col] += 1;
            }
        }

        SparseMatrixCSC::new(n_rows, n_cols, col_ptr, row_idx, values)
    }
}

impl<T: Copy + Num> SparseMatrixCSC<T> {
    /// Converts this CSC matrix to CSR format
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        let (n_rows, n_cols) = self.shape();

        // Count non-zeros per row
        let mut row_counts = vec![0; n_rows];
        for &row in self.row_idx() {
            row_counts[row] += 1;
        }

        let row_ptr = exclusive_scan(&row_counts);

        let nnz = self.nnz();
        let mut col_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];

        let mut next = row_ptr.clone();
        for j in 0..n_cols {
            for (row, &val) in self.col_iter(j) {
                let pos = next[row];
                col_idx[pos] = j;
                values[pos] = val;
                next[row] += 1;
            }
        }

        SparseMatrixCSR::new(n_rows, n_cols, row_ptr, col_idx, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DenseMatrix;

    //    [1 2 0]
    //    [0 3 0]
    //    [4 0 5]
    fn dense() -> DenseMatrix<i32> {
        DenseMatrix::from_array([[1, 2, 0], [0, 3, 0], [4, 0, 5]]).unwrap()
    }

    #[test]
    fn test_csr_to_csc_conversion() {
        let csr = SparseMatrixCSR::from_dense(&dense());
        let csc = csr.to_csc();

        assert_eq!(csc.col_ptr(), &[0, 2, 4, 5]);
        assert_eq!(csc, SparseMatrixCSC::from_dense(&dense()));
    }

    #[test]
    fn test_csc_to_csr_conversion() {
        let csc = SparseMatrixCSC::new(
            3,
            3,
            vec![0, 2, 4, 5],
            vec![0, 2, 0, 1, 2],
            vec![1, 4, 2, 3, 5],
        );
        let csr = csc.to_csr();

        assert_eq!(csr.row_ptr(), &[0, 2, 3, 5]);
        assert_eq!(csr, SparseMatrixCSR::from_dense(&dense()));
    }

    #[test]
    fn test_roundtrip_conversion() {
        let original = SparseMatrixCSR::from_dense(&dense());
        assert_eq!(original.to_csc().to_csr(), original);
    }
}
