//! Error types for sparse format construction and multiplication

use thiserror::Error;

/// Result type alias using the crate's error
pub type Result<T> = std::result::Result<T, SparseError>;

/// Errors reported by encoders, kernels and dense matrix access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    /// A matrix was declared with zero rows or columns
    #[error("Invalid dimension: matrix must have at least one row and one column, got {rows} × {cols}")]
    InvalidDimension {
        /// Declared row count
        rows: usize,
        /// Declared column count
        cols: usize,
    },

    /// Element access outside the declared shape
    #[error("Index ({row}, {col}) out of bounds for {rows} × {cols} matrix")]
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// Operand shapes do not fit together
    #[error("Shape mismatch in {op}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Operation that detected the mismatch
        op: &'static str,
        /// Expected extent
        expected: usize,
        /// Actual extent
        got: usize,
    },

    /// Block size is zero or does not tile the matrix
    #[error("Invalid block size {block_size} for {rows} × {cols} matrix")]
    InvalidBlockSize {
        /// Requested block size
        block_size: usize,
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// A caller-declared shape parameter disagrees with the source matrix
    #[error("Precondition violated for {param}: declared {declared}, actual {actual}")]
    PreconditionViolation {
        /// Name of the declared parameter
        param: &'static str,
        /// Value the caller declared
        declared: usize,
        /// Value found by scanning the source
        actual: usize,
    },

    /// The source of a symmetric encoding is not symmetric
    #[error("Matrix is not symmetric: entry ({row}, {col}) differs from its transpose")]
    NotSymmetric {
        /// Row of the first offending entry
        row: usize,
        /// Column of the first offending entry
        col: usize,
    },
}

impl SparseError {
    /// Shorthand for a length check failure
    pub(crate) fn shape(op: &'static str, expected: usize, got: usize) -> Self {
        SparseError::ShapeMismatch { op, expected, got }
    }

    /// Shorthand for a declared-parameter check failure
    pub(crate) fn precondition(param: &'static str, declared: usize, actual: usize) -> Self {
        SparseError::PreconditionViolation {
            param,
            declared,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SparseError::InvalidDimension { rows: 0, cols: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid dimension: matrix must have at least one row and one column, got 0 × 3"
        );

        let err = SparseError::precondition("nnz", 4, 5);
        assert_eq!(err.to_string(), "Precondition violated for nnz: declared 4, actual 5");

        let err = SparseError::shape("spmv input", 5, 4);
        assert_eq!(err.to_string(), "Shape mismatch in spmv input: expected 5, got 4");
    }
}
