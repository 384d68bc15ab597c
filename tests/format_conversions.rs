//! Cross-checks against sprs and ndarray

use ndarray::{Array1, Array2};
use sparse_formats::{
    from_array2, from_sprs_csc, from_sprs_csr, gustavson_spgemm, gustavson_spmm, to_array2,
    to_sprs_csc, to_sprs_csr, DenseMatrix, SpMV, SparseFormat, SparseMatrixCSC, SparseMatrixCSR,
    SparseMatrixTJDS,
};

/// Creates a test matrix with a specific pattern
fn create_test_matrix() -> DenseMatrix<f64> {
    // [ 1.0  0.0  2.0  0.0  0.0 ]
    // [ 0.0  3.0  0.0  0.0  4.0 ]
    // [ 0.0  0.0  5.0  0.0  0.0 ]
    // [ 6.0  0.0  0.0  7.0  0.0 ]
    // [ 0.0  0.0  8.0  0.0  9.0 ]
    DenseMatrix::from_array([
        [1.0, 0.0, 2.0, 0.0, 0.0],
        [0.0, 3.0, 0.0, 0.0, 4.0],
        [0.0, 0.0, 5.0, 0.0, 0.0],
        [6.0, 0.0, 0.0, 7.0, 0.0],
        [0.0, 0.0, 8.0, 0.0, 9.0],
    ])
    .unwrap()
}

/// Creates a tridiagonal matrix
fn create_tridiagonal(n: usize) -> DenseMatrix<f64> {
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        data[i * n + i] = 2.0;
        if i > 0 {
            data[i * n + i - 1] = 1.0;
        }
        if i < n - 1 {
            data[i * n + i + 1] = 1.0;
        }
    }
    DenseMatrix::new(n, n, data).unwrap()
}

#[test]
fn test_csr_to_sprs_conversion() {
    let csr = SparseMatrixCSR::from_dense(&create_test_matrix());
    let sprs_mat = to_sprs_csr(&csr);

    assert_eq!(sprs_mat.rows(), 5);
    assert_eq!(sprs_mat.cols(), 5);
    assert_eq!(sprs_mat.nnz(), 9);
    assert!(sprs_mat.is_csr());

    assert_eq!(from_sprs_csr(sprs_mat), csr);
}

#[test]
fn test_csc_from_sprs_csr_input() {
    let dense = create_test_matrix();
    let csr = SparseMatrixCSR::from_dense(&dense);

    // from_sprs_csc converts storage order when handed a CSR matrix
    let csc = from_sprs_csc(to_sprs_csr(&csr));
    assert_eq!(csc, SparseMatrixCSC::from_dense(&dense));
    assert!(to_sprs_csc(&csc).is_csc());
}

#[test]
fn test_spmv_matches_sprs() {
    let dense = create_tridiagonal(50);
    let x: Vec<f64> = (0..50).map(|i| (i as f64) * 0.5 - 3.0).collect();

    let sprs_y = &to_sprs_csr(&SparseMatrixCSR::from_dense(&dense)) * &Array1::from(x.clone());

    let csr_y = SparseMatrixCSR::from_dense(&dense).spmv(&x).unwrap();
    let tjds_y = SparseMatrixTJDS::from_dense(&dense).spmv(&x).unwrap();

    for i in 0..50 {
        assert!((csr_y[i] - sprs_y[i]).abs() < 1e-10);
        assert!((tjds_y[i] - sprs_y[i]).abs() < 1e-10);
    }
}

#[test]
fn test_spmm_matches_sprs() {
    let a = create_test_matrix();
    let b = create_tridiagonal(5);

    let a_csr = SparseMatrixCSR::from_dense(&a);
    let b_csr = SparseMatrixCSR::from_dense(&b);

    let expected: Array2<f64> = (&to_sprs_csr(&a_csr) * &to_sprs_csr(&b_csr)).to_dense();
    let dense_result = to_array2(&gustavson_spmm(&a_csr, &b_csr).unwrap());

    for (got, want) in dense_result.iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-10);
    }

    let sparse_result = gustavson_spgemm(&a_csr, &b_csr).unwrap();
    assert_eq!(to_array2(&sparse_result.to_dense()), dense_result);
}

#[test]
fn test_ndarray_input() {
    let array = to_array2(&create_test_matrix());
    let dense = from_array2(&array).unwrap();

    assert_eq!(dense, create_test_matrix());
    assert_eq!(SparseMatrixCSR::from_dense(&dense).nnz(), 9);
}
