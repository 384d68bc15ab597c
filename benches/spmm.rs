//! Benchmarks for the four SpMM dataflows

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_formats::{
    column_wise_spmm, gustavson_spgemm, gustavson_spmm, inner_product_spmm, outer_product_spmm,
    DenseMatrix, SparseMatrixCSC, SparseMatrixCSR,
};

fn create_test_matrix(n: usize, density: f64, seed: u64) -> DenseMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..n * n)
        .map(|_| if rng.gen_bool(density) { rng.gen_range(-1.0..1.0) } else { 0.0 })
        .collect();
    DenseMatrix::new(n, n, data).unwrap()
}

fn bench_spmm(c: &mut Criterion) {
    let mut group = c.benchmark_group("spmm");

    for &n in &[32usize, 128] {
        let a = create_test_matrix(n, 0.05, 1);
        let b = create_test_matrix(n, 0.05, 2);

        let a_csr = SparseMatrixCSR::from_dense(&a);
        let a_csc = SparseMatrixCSC::from_dense(&a);
        let b_csr = SparseMatrixCSR::from_dense(&b);
        let b_csc = SparseMatrixCSC::from_dense(&b);

        group.bench_with_input(BenchmarkId::new("inner_product", n), &n, |bench, _| {
            bench.iter(|| inner_product_spmm(black_box(&a_csr), black_box(&b_csc)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("outer_product", n), &n, |bench, _| {
            bench.iter(|| outer_product_spmm(black_box(&a_csc), black_box(&b_csr)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("gustavson", n), &n, |bench, _| {
            bench.iter(|| gustavson_spmm(black_box(&a_csr), black_box(&b_csr)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("column_wise", n), &n, |bench, _| {
            bench.iter(|| column_wise_spmm(black_box(&a_csc), black_box(&b_csc)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("gustavson_sparse_out", n), &n, |bench, _| {
            bench.iter(|| gustavson_spgemm(black_box(&a_csr), black_box(&b_csr)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spmm);
criterion_main!(benches);
