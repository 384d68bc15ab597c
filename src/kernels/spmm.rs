//! Sparse matrix-matrix multiplication dataflows
//!
//! Every dataflow takes an M×K left operand and a K×N right operand and
//! produces the dense M×N product. The `_into` variants write into a
//! caller-provided row-major buffer of length M·N, overwriting it.

use num_traits::Num;
use std::ops::AddAssign;

use crate::error::{Result, SparseError};
use crate::kernels::DenseAccumulator;
use crate::matrix::{DenseMatrix, SparseFormat, SparseMatrixCSC, SparseMatrixCSR};

/// The four SpMM dataflows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmmDataflow {
    /// CSR × CSC, sorted merge per output cell
    InnerProduct,
    /// CSC × CSR, rank-1 update per inner index
    OuterProduct,
    /// CSR × CSR, row-at-a-time accumulation
    Gustavson,
    /// CSC × CSC, column-at-a-time accumulation
    ColumnWise,
}

impl SpmmDataflow {
    /// Every dataflow, in declaration order
    pub const ALL: [SpmmDataflow; 4] = [
        SpmmDataflow::InnerProduct,
        SpmmDataflow::OuterProduct,
        SpmmDataflow::Gustavson,
        SpmmDataflow::ColumnWise,
    ];
}

/// Checks K agreement and output length, returning (M, N)
fn check_spmm_operands(
    left: (usize, usize),
    right: (usize, usize),
    out_len: usize,
) -> Result<(usize, usize)> {
    if left.1 != right.0 {
        return Err(SparseError::shape("spmm inner dimension", left.1, right.0));
    }
    let (m, n) = (left.0, right.1);
    if out_len != m * n {
        return Err(SparseError::shape("spmm output", m * n, out_len));
    }
    Ok((m, n))
}

/// Inner-product SpMM: C[i][j] = merge of row i of `a` with column j of `b`
pub fn inner_product_spmm_into<T>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSC<T>,
    out: &mut [T],
) -> Result<()>
where
    T: Copy + Num + AddAssign,
{
    let (m, n) = check_spmm_operands(a.shape(), b.shape(), out.len())?;

    let (a_ptr, a_col, a_val) = (a.row_ptr(), a.col_idx(), a.values());
    let (b_ptr, b_row, b_val) = (b.col_ptr(), b.row_idx(), b.values());

    for i in 0..m {
        for j in 0..n {
            let mut dot = T::zero();
            let (mut ja, a_end) = (a_ptr[i], a_ptr[i + 1]);
            let (mut jb, b_end) = (b_ptr[j], b_ptr[j + 1]);

            while ja < a_end && jb < b_end {
                if a_col[ja] < b_row[jb] {
                    ja += 1;
                } else if a_col[ja] > b_row[jb] {
                    jb += 1;
                } else {
                    dot += a_val[ja] * b_val[jb];
                    ja += 1;
                    jb += 1;
                }
            }

            out[i * n + j] = dot;
        }
    }
    Ok(())
}

/// Outer-product SpMM: C = Σ_k (column k of `a`) ⊗ (row k of `b`)
pub fn outer_product_spmm_into<T>(
    a: &SparseMatrixCSC<T>,
    b: &SparseMatrixCSR<T>,
    out: &mut [T],
) -> Result<()>
where
    T: Copy + Num + AddAssign,
{
    let (_, n) = check_spmm_operands(a.shape(), b.shape(), out.len())?;
    let k_dim = a.n_cols();

    out.fill(T::zero());
    for k in 0..k_dim {
        for (i, &a_ik) in a.col_iter(k) {
            let out_row = &mut out[i * n..(i + 1) * n];
            for (j, &b_kj) in b.row_iter(k) {
                out_row[j] += a_ik * b_kj;
            }
        }
    }
    Ok(())
}

/// Gustavson SpMM: row i of C accumulates a_ik · (row k of `b`)
pub fn gustavson_spmm_into<T>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    out: &mut [T],
) -> Result<()>
where
    T: Copy + Num + AddAssign,
{
    let (_, n) = check_spmm_operands(a.shape(), b.shape(), out.len())?;
    if n == 0 {
        return Ok(());
    }
    let mut acc = DenseAccumulator::new(n);

    for (i, out_row) in out.chunks_exact_mut(n).enumerate() {
        for (k, &a_ik) in a.row_iter(i) {
            for (j, &b_kj) in b.row_iter(k) {
                acc.accumulate(j, a_ik * b_kj);
            }
        }

        out_row.fill(T::zero());
        acc.drain_with(|j, v| out_row[j] = v);
    }
    Ok(())
}

/// Column-wise SpMM: column j of C accumulates b_kj · (column k of `a`)
pub fn column_wise_spmm_into<T>(
    a: &SparseMatrixCSC<T>,
    b: &SparseMatrixCSC<T>,
    out: &mut [T],
) -> Result<()>
where
    T: Copy + Num + AddAssign,
{
    let (m, n) = check_spmm_operands(a.shape(), b.shape(), out.len())?;
    let mut acc = DenseAccumulator::new(m);

    out.fill(T::zero());
    for j in 0..n {
        for (k, &b_kj) in b.col_iter(j) {
            for (i, &a_ik) in a.col_iter(k) {
                acc.accumulate(i, a_ik * b_kj);
            }
        }

        acc.drain_with(|i, v| out[i * n + j] = v);
    }
    Ok(())
}

/// Inner-product SpMM into a new dense matrix
pub fn inner_product_spmm<T>(a: &SparseMatrixCSR<T>, b: &SparseMatrixCSC<T>) -> Result<DenseMatrix<T>>
where
    T: Copy + Num + AddAssign,
{
    let (m, n) = (a.n_rows(), b.n_cols());
    let mut data = vec![T::zero(); m * n];
    inner_product_spmm_into(a, b, &mut data)?;
    Ok(DenseMatrix::from_raw(m, n, data))
}

/// Outer-product SpMM into a new dense matrix
pub fn outer_product_spmm<T>(a: &SparseMatrixCSC<T>, b: &SparseMatrixCSR<T>) -> Result<DenseMatrix<T>>
where
    T: Copy + Num + AddAssign,
{
    let (m, n) = (a.n_rows(), b.n_cols());
    let mut data = vec![T::zero(); m * n];
    outer_product_spmm_into(a, b, &mut data)?;
    Ok(DenseMatrix::from_raw(m, n, data))
}

/// Gustavson SpMM into a new dense matrix
pub fn gustavson_spmm<T>(a: &SparseMatrixCSR<T>, b: &SparseMatrixCSR<T>) -> Result<DenseMatrix<T>>
where
    T: Copy + Num + AddAssign,
{
    let (m, n) = (a.n_rows(), b.n_cols());
    let mut data = vec![T::zero(); m * n];
    gustavson_spmm_into(a, b, &mut data)?;
    Ok(DenseMatrix::from_raw(m, n, data))
}

/// Column-wise SpMM into a new dense matrix
pub fn column_wise_spmm<T>(a: &SparseMatrixCSC<T>, b: &SparseMatrixCSC<T>) -> Result<DenseMatrix<T>>
where
    T: Copy + Num + AddAssign,
{
    let (m, n) = (a.n_rows(), b.n_cols());
    let mut data = vec![T::zero(); m * n];
    column_wise_spmm_into(a, b, &mut data)?;
    Ok(DenseMatrix::from_raw(m, n, data))
}

/// Gustavson SpGEMM with a sparse (CSR) result
///
/// Same dataflow as [`gustavson_spmm`], but each accumulated row is
/// extracted in column order and entries that cancel to zero are dropped.
pub fn gustavson_spgemm<T>(a: &SparseMatrixCSR<T>, b: &SparseMatrixCSR<T>) -> Result<SparseMatrixCSR<T>>
where
    T: Copy + Num + AddAssign,
{
    if a.n_cols() != b.n_rows() {
        return Err(SparseError::shape("spgemm inner dimension", a.n_cols(), b.n_rows()));
    }

    let (m, n) = (a.n_rows(), b.n_cols());
    let mut acc = DenseAccumulator::new(n);
    let mut row_ptr = Vec::with_capacity(m + 1);
    let mut col_idx = Vec::new();
    let mut values = Vec::new();

    row_ptr.push(0);
    for i in 0..m {
        for (k, &a_ik) in a.row_iter(i) {
            for (j, &b_kj) in b.row_iter(k) {
                acc.accumulate(j, a_ik * b_kj);
            }
        }

        let (cols, vals) = acc.drain_sorted();
        col_idx.extend(cols);
        values.extend(vals);
        row_ptr.push(col_idx.len());
    }

    Ok(SparseMatrixCSR::new(m, n, row_ptr, col_idx, values))
}

/// Encodes two dense operands in the formats `dataflow` consumes and
/// multiplies them
pub fn spmm<T>(dataflow: SpmmDataflow, a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>>
where
    T: Copy + Num + AddAssign,
{
    match dataflow {
        SpmmDataflow::InnerProduct => inner_product_spmm(
            &SparseMatrixCSR::from_dense(a),
            &SparseMatrixCSC::from_dense(b),
        ),
        SpmmDataflow::OuterProduct => outer_product_spmm(
            &SparseMatrixCSC::from_dense(a),
            &SparseMatrixCSR::from_dense(b),
        ),
        SpmmDataflow::Gustavson => gustavson_spmm(
            &SparseMatrixCSR::from_dense(a),
            &SparseMatrixCSR::from_dense(b),
        ),
        SpmmDataflow::ColumnWise => column_wise_spmm(
            &SparseMatrixCSC::from_dense(a),
            &SparseMatrixCSC::from_dense(b),
        ),
    }
}
