//! # sparse-formats: sparse storage formats and the kernels that use them
//!
//! This library converts a dense matrix into one of seven compact sparse
//! encodings and multiplies directly on those encodings, without expanding
//! back to dense form.
//!
//! ## Formats
//!
//! | Format | Type | Layout |
//! |--------|------|--------|
//! | COO  | [`SparseMatrixCOO`]  | (value, row, col) triplets |
//! | CSR  | [`SparseMatrixCSR`]  | compressed rows |
//! | CSC  | [`SparseMatrixCSC`]  | compressed columns |
//! | BSR  | [`SparseMatrixBSR`]  | compressed rows of dense square blocks |
//! | ELL  | [`SparseMatrixELL`]  | fixed-width padded rows |
//! | TJDS | [`SparseMatrixTJDS`] | transpose jagged diagonals ("tiles") |
//! | SSS  | [`SparseMatrixSSS`]  | diagonal plus one strict triangle |
//!
//! Every format is built from a [`DenseMatrix`] and is immutable afterwards.
//! Shape parameters a caller may declare (nonzero count, block count, row
//! width, tile count) are checked against the source and reported as
//! [`SparseError::PreconditionViolation`] on mismatch.
//!
//! ## Kernels
//!
//! - **SpMV**: every format implements [`SpMV`].
//! - **SpMM**: four dataflows, see [`SpmmDataflow`].
//!
//! ## Usage
//!
//! ```
//! use sparse_formats::{DenseMatrix, SparseMatrixCSR, SpMV};
//!
//! let dense = DenseMatrix::from_array([
//!     [1.0, 0.0, 2.0],
//!     [0.0, 3.0, 0.0],
//! ]).unwrap();
//!
//! let csr = SparseMatrixCSR::from_dense(&dense);
//! assert_eq!(csr.row_ptr(), &[0, 2, 3]);
//!
//! let y = csr.spmv(&[1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(y, vec![3.0, 3.0]);
//! ```
//!
//! SpMM with any dataflow:
//!
//! ```
//! use sparse_formats::{spmm, DenseMatrix, SpmmDataflow};
//!
//! let a = DenseMatrix::from_array([[1, 2], [0, 3]]).unwrap();
//! let b = DenseMatrix::from_array([[4, 5], [6, 7]]).unwrap();
//!
//! for dataflow in SpmmDataflow::ALL {
//!     let c = spmm(dataflow, &a, &b).unwrap();
//!     assert_eq!(c.as_slice(), &[16, 19, 18, 21]);
//! }
//! ```

pub mod error;
pub mod kernels;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{Result, SparseError};
pub use kernels::{
    column_wise_spmm, gustavson_spgemm, gustavson_spmm, inner_product_spmm, outer_product_spmm,
    spmm, SpMV, SpmmDataflow,
};
pub use matrix::{
    dense_matmul, dense_matvec, DenseMatrix, EncoderConfig, SparseFormat, SparseMatrixBSR,
    SparseMatrixCOO, SparseMatrixCSC, SparseMatrixCSR, SparseMatrixELL, SparseMatrixSSS,
    SparseMatrixTJDS, Triangle, ELL_PADDING,
};
pub use utils::{from_array2, from_sprs_csc, from_sprs_csr, to_array2, to_sprs_csc, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
