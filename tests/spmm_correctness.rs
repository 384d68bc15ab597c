//! Tests for SpMM dataflows against the dense reference

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_formats::{
    column_wise_spmm, dense_matmul, gustavson_spmm, inner_product_spmm, outer_product_spmm, spmm,
    DenseMatrix, SparseMatrixCSC, SparseMatrixCSR, SpmmDataflow,
};

/// Random matrix where each entry is nonzero with probability `density`
fn create_random_matrix(rows: usize, cols: usize, density: f64, seed: u64) -> DenseMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..rows * cols)
        .map(|_| {
            if rng.gen_bool(density) {
                rng.gen_range(-10.0..10.0)
            } else {
                0.0
            }
        })
        .collect();
    DenseMatrix::new(rows, cols, data).unwrap()
}

fn create_diagonal(n: usize, value: f64) -> DenseMatrix<f64> {
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        data[i * n + i] = value;
    }
    DenseMatrix::new(n, n, data).unwrap()
}

fn assert_close(actual: &DenseMatrix<f64>, expected: &DenseMatrix<f64>, tol: f64) {
    assert_eq!(actual.shape(), expected.shape());
    for (idx, (a, e)) in actual.as_slice().iter().zip(expected.as_slice()).enumerate() {
        assert!(
            (a - e).abs() <= tol * (1.0 + e.abs()),
            "Mismatch at {}: {} vs {}",
            idx,
            a,
            e
        );
    }
}

#[test]
fn test_identity_multiplication() {
    let identity = create_diagonal(10, 1.0);
    let b = create_random_matrix(10, 10, 0.3, 7);

    for dataflow in SpmmDataflow::ALL {
        let result = spmm(dataflow, &identity, &b).unwrap();
        assert_eq!(result, b, "{:?}", dataflow);
    }
}

#[test]
fn test_diagonal_scaling() {
    let a = create_random_matrix(8, 8, 0.4, 11);
    let d = create_diagonal(8, 2.0);

    let result = gustavson_spmm(&SparseMatrixCSR::from_dense(&a), &SparseMatrixCSR::from_dense(&d))
        .unwrap();
    for (r, v) in result.as_slice().iter().zip(a.as_slice()) {
        assert_eq!(*r, 2.0 * v);
    }
}

#[test]
fn test_random_rectangular_products() {
    for (seed, (m, k, n)) in [(30, 20, 25), (1, 40, 1), (17, 1, 9), (64, 64, 64)]
        .into_iter()
        .enumerate()
    {
        let a = create_random_matrix(m, k, 0.1, seed as u64);
        let b = create_random_matrix(k, n, 0.1, 100 + seed as u64);
        let expected = dense_matmul(&a, &b).unwrap();

        let a_csr = SparseMatrixCSR::from_dense(&a);
        let a_csc = SparseMatrixCSC::from_dense(&a);
        let b_csr = SparseMatrixCSR::from_dense(&b);
        let b_csc = SparseMatrixCSC::from_dense(&b);

        assert_close(&inner_product_spmm(&a_csr, &b_csc).unwrap(), &expected, 1e-10);
        assert_close(&outer_product_spmm(&a_csc, &b_csr).unwrap(), &expected, 1e-10);
        assert_close(&gustavson_spmm(&a_csr, &b_csr).unwrap(), &expected, 1e-10);
        assert_close(&column_wise_spmm(&a_csc, &b_csc).unwrap(), &expected, 1e-10);
    }
}

#[test]
fn test_empty_operand() {
    let a = DenseMatrix::new(4, 3, vec![0.0; 12]).unwrap();
    let b = create_random_matrix(3, 5, 0.5, 3);

    for dataflow in SpmmDataflow::ALL {
        let result = spmm(dataflow, &a, &b).unwrap();
        assert!(result.as_slice().iter().all(|&v| v == 0.0));
    }
}
