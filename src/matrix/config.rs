//! Configuration for encoders
//!
//! Declared shape parameters are always checked against a scan of the
//! source, so the only tunables concern the symmetric format.

/// Which strict triangle the symmetric (SSS) format keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Triangle {
    /// Entries with column < row
    #[default]
    Lower,
    /// Entries with column > row
    Upper,
}

impl Triangle {
    /// Whether the off-diagonal entry (row, col) belongs to this triangle
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self {
            Triangle::Lower => col < row,
            Triangle::Upper => col > row,
        }
    }
}

/// Configuration shared by the encoders
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Triangle kept by the symmetric encoder
    pub sss_triangle: Triangle,

    /// Largest |a_ij - a_ji| accepted by the symmetry check.
    /// Zero means exact symmetry is required.
    pub symmetry_tolerance: f64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            sss_triangle: Triangle::Lower,
            symmetry_tolerance: 0.0,
        }
    }
}

impl EncoderConfig {
    /// Build a config from the defaults overridden by environment variables
    ///
    /// - `SPARSE_SSS_TRIANGLE`: `lower` or `upper`
    /// - `SPARSE_SYMMETRY_TOL`: a non-negative float
    pub fn from_env() -> Self {
        let mut config = Self::default();

        match std::env::var("SPARSE_SSS_TRIANGLE").as_deref() {
            Ok("upper") => config.sss_triangle = Triangle::Upper,
            Ok("lower") => config.sss_triangle = Triangle::Lower,
            _ => {}
        }

        if let Ok(tol) = std::env::var("SPARSE_SYMMETRY_TOL") {
            if let Ok(tol) = tol.parse::<f64>() {
                if tol >= 0.0 {
                    config.symmetry_tolerance = tol;
                }
            }
        }

        config
    }

    /// Config keeping the given triangle, everything else default
    pub fn with_triangle(triangle: Triangle) -> Self {
        Self {
            sss_triangle: triangle,
            ..Self::default()
        }
    }
}
