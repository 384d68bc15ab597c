//! Multiplication kernels operating directly on the sparse encodings
//!
//! SpMV is exposed through the [`SpMV`] trait, implemented by every format.
//! SpMM comes in four dataflows that differ only in the order in which
//! partial products are formed and accumulated:
//!
//! - **Inner product** (CSR × CSC): one sorted merge per output cell
//! - **Outer product** (CSC × CSR): one rank-1 update per inner index
//! - **Gustavson** (CSR × CSR): output built row by row
//! - **Column-wise** (CSC × CSC): output built column by column

pub mod accumulator;
pub mod spmm;
pub mod spmv;

use num_traits::Num;
use std::ops::AddAssign;

use crate::error::{Result, SparseError};
use crate::matrix::SparseFormat;

pub use accumulator::DenseAccumulator;
pub use spmm::{
    column_wise_spmm, column_wise_spmm_into, gustavson_spgemm, gustavson_spmm,
    gustavson_spmm_into, inner_product_spmm, inner_product_spmm_into, outer_product_spmm,
    outer_product_spmm_into, spmm, SpmmDataflow,
};

/// Sparse matrix-vector multiplication
pub trait SpMV<T>: SparseFormat<T>
where
    T: Copy + Num + AddAssign,
{
    /// Computes y = A·x, overwriting every element of `y`
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `x.len()` is not the column count or `y.len()`
    /// is not the row count
    fn spmv_into(&self, x: &[T], y: &mut [T]) -> Result<()>;

    /// Computes y = A·x into a new vector
    fn spmv(&self, x: &[T]) -> Result<Vec<T>> {
        let mut y = vec![T::zero(); self.shape().0];
        self.spmv_into(x, &mut y)?;
        Ok(y)
    }
}

/// Length checks shared by every SpMV implementation
pub(crate) fn check_spmv_operands<T>(shape: (usize, usize), x: &[T], y: &[T]) -> Result<()> {
    if x.len() != shape.1 {
        return Err(SparseError::shape("spmv input", shape.1, x.len()));
    }
    if y.len() != shape.0 {
        return Err(SparseError::shape("spmv output", shape.0, y.len()));
    }
    Ok(())
}
