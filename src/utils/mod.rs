//! Utility functions and helpers

pub mod formats;

pub use formats::{from_array2, from_sprs_csc, from_sprs_csr, to_array2, to_sprs_csc, to_sprs_csr};

/// Computes an exclusive prefix sum (scan) for a vector
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0); // First element is always 0

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}

/// Whether `ptr` is a valid pointer array over `len` entries:
/// starts at 0, never decreases, ends at `len`
pub fn is_pointer_array(ptr: &[usize], len: usize) -> bool {
    ptr.first() == Some(&0)
        && ptr.last() == Some(&len)
        && ptr.windows(2).all(|w| w[0] <= w[1])
}
