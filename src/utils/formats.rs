//! Utilities for converting between our matrix formats and external libraries
//!
//! The sprs conversions give the tests an independent SpMV/SpGEMM oracle:
//! encodings built here are handed to `sprs` and the products compared.

use crate::error::Result;
use crate::matrix::{DenseMatrix, SparseFormat, SparseMatrixCSC, SparseMatrixCSR};
use ndarray::Array2;
use num_traits::Num;
use sprs::CsMat;

/// Converts our CSR matrix format to sprs CsMat format
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new(
        matrix.shape(),
        matrix.row_ptr().to_vec(),
        matrix.col_idx().to_vec(),
        matrix.values().to_vec(),
    )
}

/// Converts our CSC matrix format to sprs CsMat format (as CSC)
pub fn to_sprs_csc<T>(matrix: &SparseMatrixCSC<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new_csc(
        matrix.shape(),
        matrix.col_ptr().to_vec(),
        matrix.row_idx().to_vec(),
        matrix.values().to_vec(),
    )
}

/// Converts sprs CsMat in CSR format to our SparseMatrixCSR format
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(shape.0, shape.1, indptr, indices, data)
}

/// Converts sprs CsMat in CSC format to our SparseMatrixCSC format
pub fn from_sprs_csc<T>(matrix: CsMat<T>) -> SparseMatrixCSC<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSC format
    let matrix = if matrix.is_csc() {
        matrix
    } else {
        matrix.to_csc()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSC::new(shape.0, shape.1, indptr, indices, data)
}

/// Copies a dense matrix into an ndarray
pub fn to_array2<T>(matrix: &DenseMatrix<T>) -> Array2<T>
where
    T: Copy + Num,
{
    Array2::from_shape_fn(matrix.shape(), |(i, j)| matrix.at(i, j))
}

/// Builds a dense matrix from an ndarray, in logical (row-major) order
pub fn from_array2<T>(array: &Array2<T>) -> Result<DenseMatrix<T>>
where
    T: Copy + Num,
{
    let (n_rows, n_cols) = array.dim();
    DenseMatrix::new(n_rows, n_cols, array.iter().copied().collect())
}
