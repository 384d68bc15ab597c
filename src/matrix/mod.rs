// Matrix data structures and encoders

pub mod bsr;
pub mod config;
pub mod conversion;
pub mod coo;
pub mod csc;
pub mod csr;
pub mod dense;
pub mod ell;
pub mod reference;
pub mod sss;
pub mod tjds;

pub use bsr::SparseMatrixBSR;
pub use config::{EncoderConfig, Triangle};
pub use coo::SparseMatrixCOO;
pub use csc::SparseMatrixCSC;
pub use csr::SparseMatrixCSR;
pub use dense::DenseMatrix;
pub use ell::{SparseMatrixELL, ELL_PADDING};
pub use reference::{dense_matmul, dense_matvec};
pub use sss::SparseMatrixSSS;
pub use tjds::SparseMatrixTJDS;

/// Behaviour shared by every sparse encoding
pub trait SparseFormat<T> {
    /// (rows, cols) of the encoded matrix
    fn shape(&self) -> (usize, usize);

    /// Number of nonzero elements represented
    fn nnz(&self) -> usize;

    /// Decodes back to dense form by scattering every stored entry
    fn to_dense(&self) -> DenseMatrix<T>;
}
