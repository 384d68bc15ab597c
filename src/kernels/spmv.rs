//! SpMV implementations, one per format

use num_traits::Num;
use std::ops::AddAssign;

use crate::error::Result;
use crate::kernels::{check_spmv_operands, SpMV};
use crate::matrix::{
    SparseFormat, SparseMatrixBSR, SparseMatrixCOO, SparseMatrixCSC, SparseMatrixCSR,
    SparseMatrixELL, SparseMatrixSSS, SparseMatrixTJDS, ELL_PADDING,
};

impl<T> SpMV<T> for SparseMatrixCOO<T>
where
    T: Copy + Num + AddAssign,
{
    fn spmv_into(&self, x: &[T], y: &mut [T]) -> Result<()> {
        check_spmv_operands(self.shape(), x, y)?;

        y.fill(T::zero());
        for (r, c, v) in self.iter() {
            y[r] += v * x[c];
        }
        Ok(())
    }
}

impl<T> SpMV<T> for SparseMatrixCSR<T>
where
    T: Copy + Num + AddAssign,
{
    fn spmv_into(&self, x: &[T], y: &mut [T]) -> Result<()> {
        check_spmv_operands(self.shape(), x, y)?;

        let row_ptr = self.row_ptr();
        let col_idx = self.col_idx();
        let values = self.values();

        for (i, out) in y.iter_mut().enumerate() {
            let mut dot = T::zero();
            for j in row_ptr[i]..row_ptr[i + 1] {
                dot += values[j] * x[col_idx[j]];
            }
            *out = dot;
        }
        Ok(())
    }
}

impl<T> SpMV<T> for SparseMatrixCSC<T>
where
    T: Copy + Num + AddAssign,
{
    fn spmv_into(&self, x: &[T], y: &mut [T]) -> Result<()> {
        check_spmv_operands(self.shape(), x, y)?;

        y.fill(T::zero());
        for (j, &xj) in x.iter().enumerate() {
            for (i, &v) in self.col_iter(j) {
                y[i] += v * xj;
            }
        }
        Ok(())
    }
}

impl<T> SpMV<T> for SparseMatrixBSR<T>
where
    T: Copy + Num + AddAssign,
{
    fn spmv_into(&self, x: &[T], y: &mut [T]) -> Result<()> {
        check_spmv_operands(self.shape(), x, y)?;

        let b = self.block_size();
        y.fill(T::zero());

        for (bi, y_block) in y.chunks_exact_mut(b).enumerate() {
            for (bc, cells) in self.block_row_iter(bi) {
                let x_block = &x[bc * b..(bc + 1) * b];
                for (out, cell_row) in y_block.iter_mut().zip(cells.chunks_exact(b)) {
                    for (&v, &xj) in cell_row.iter().zip(x_block) {
                        *out += v * xj;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<T> SpMV<T> for SparseMatrixELL<T>
where
    T: Copy + Num + AddAssign,
{
    fn spmv_into(&self, x: &[T], y: &mut [T]) -> Result<()> {
        check_spmv_operands(self.shape(), x, y)?;

        let width = self.width();
        if width == 0 {
            y.fill(T::zero());
            return Ok(());
        }

        let slots = self.col_idx().chunks_exact(width).zip(self.values().chunks_exact(width));
        for (out, (cols, vals)) in y.iter_mut().zip(slots) {
            let mut dot = T::zero();
            for (&col, &v) in cols.iter().zip(vals) {
                // Padding slots hold zero and must never index x
                if col == ELL_PADDING {
                    continue;
                }
                dot += v * x[col];
            }
            *out = dot;
        }
        Ok(())
    }
}

impl<T> SparseMatrixTJDS<T>
where
    T: Copy + Num + AddAssign,
{
    /// Computes y = A·x from an input already reordered with
    /// [`permute_vector`](Self::permute_vector)
    ///
    /// The k-th entry of every tile is multiplied by `x_perm[k]`; no column
    /// lookup takes place. Passing an unpermuted vector silently yields a
    /// wrong product for any matrix whose column order changed.
    pub fn spmv_prepermuted(&self, x_perm: &[T], y: &mut [T]) -> Result<()> {
        check_spmv_operands(self.shape(), x_perm, y)?;

        y.fill(T::zero());
        for t in 0..self.n_tiles() {
            for (k, row, val) in self.tile_iter(t) {
                y[row] += val * x_perm[k];
            }
        }
        Ok(())
    }
}

impl<T> SpMV<T> for SparseMatrixTJDS<T>
where
    T: Copy + Num + AddAssign,
{
    fn spmv_into(&self, x: &[T], y: &mut [T]) -> Result<()> {
        let x_perm = self.permute_vector(x)?;
        self.spmv_prepermuted(&x_perm, y)
    }
}

impl<T> SpMV<T> for SparseMatrixSSS<T>
where
    T: Copy + Num + AddAssign,
{
    /// Each stored off-diagonal entry (r, c) contributes to both y[r] and
    /// y[c]. `y` is zeroed first, so callers need not clear it.
    fn spmv_into(&self, x: &[T], y: &mut [T]) -> Result<()> {
        check_spmv_operands(self.shape(), x, y)?;

        for ((out, &d), &xi) in y.iter_mut().zip(self.diag()).zip(x) {
            *out = d * xi;
        }
        for (r, c, v) in self.off_diagonal_iter() {
            y[r] += v * x[c];
            y[c] += v * x[r];
        }
        Ok(())
    }
}
