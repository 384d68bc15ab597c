use sparse_formats::{
    inner_product_spmm, DenseMatrix, EncoderConfig, Result, SpMV, SparseMatrixBSR,
    SparseMatrixCOO, SparseMatrixCSC, SparseMatrixCSR, SparseMatrixELL, SparseMatrixSSS,
    SparseMatrixTJDS,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    println!("sparse-formats {}", sparse_formats::VERSION);

    let dense = DenseMatrix::new(
        5,
        5,
        vec![
            1.0, 0.0, 0.0, 2.0, 0.0,
            3.0, 4.0, 0.0, 5.0, 0.0,
            6.0, 0.0, 7.0, 8.0, 9.0,
            0.0, 0.0, 10.0, 11.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 12.0,
        ],
    )?;
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];

    println!("\nSource:");
    println!("{:?}", dense);

    println!("\nCOO:");
    println!("{:?}", SparseMatrixCOO::from_dense(&dense));

    let csr = SparseMatrixCSR::from_dense_with_nnz(&dense, 12)?;
    println!("\nCSR:");
    println!("{:?}", csr);
    println!("  A·x = {:?}", csr.spmv(&x)?);

    println!("\nCSC:");
    println!("{:?}", SparseMatrixCSC::from_dense(&dense));

    println!("\nELL:");
    println!("{:?}", SparseMatrixELL::from_dense_with_width(&dense, 4)?);

    let tjds = SparseMatrixTJDS::from_dense_with_tiles(&dense, 12, 4)?;
    println!("\nTJDS:");
    println!("{:?}", tjds);
    println!("  A·x = {:?}", tjds.spmv(&x)?);

    let blocked = DenseMatrix::from_array([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 2.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 3.0],
        [0.0, 0.0, 4.0, 0.0],
    ])?;
    println!("\nBSR (block size 2):");
    println!("{:?}", SparseMatrixBSR::from_dense(&blocked, 2)?);

    let symmetric = DenseMatrix::from_array([
        [4.0, 1.0, 0.0],
        [1.0, 5.0, 2.0],
        [0.0, 2.0, 6.0],
    ])?;
    let config = EncoderConfig::from_env();
    println!("\nSSS ({:?} triangle):", config.sss_triangle);
    println!("{:?}", SparseMatrixSSS::from_dense_with_config(&symmetric, &config)?);

    let a = DenseMatrix::from_array([[1.0, 0.0, 1.2], [0.0, 0.0, 2.0], [0.0, 3.0, 0.0]])?;
    let b = DenseMatrix::from_array([[0.0, 2.0, 3.2], [1.0, 0.0, 0.0], [0.0, 2.2, 0.0]])?;
    let c = inner_product_spmm(&SparseMatrixCSR::from_dense(&a), &SparseMatrixCSC::from_dense(&b))?;
    println!("\nInner-product SpMM:");
    println!("{:?}", c);

    Ok(())
}
