use std::fmt;

/// Failures reported by the linear-algebra layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinalgError {
    /// Determinant is exactly zero; no inverse exists.
    SingularMatrix,
    /// Runtime-sized input does not match the static dimension.
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::SingularMatrix => write!(f, "matrix is singular (zero determinant)"),
            LinalgError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for LinalgError {}
