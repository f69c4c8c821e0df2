use thiserror::Error;

/// Errors from matrix construction and arithmetic.
///
/// Every fallible operation returns one of these instead of panicking, so
/// callers can decide whether to retry with different input or propagate.
///
/// ```
/// use matrixx::{Matrix, MatrixError};
///
/// let a = Matrix::from_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!((&a / 0.0).unwrap_err(), MatrixError::DivideByZero);
/// assert_eq!(
///     a.reshape(3, 1).unwrap_err(),
///     MatrixError::SizeMismatch { expected: 4, got: 3 },
/// );
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Two operands have incompatible `(height, width)` shapes.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A buffer or reshape target holds the wrong number of elements.
    #[error("size mismatch: expected {expected} elements, got {got}")]
    SizeMismatch { expected: usize, got: usize },
    /// Scalar division by exactly zero.
    #[error("division by zero")]
    DivideByZero,
    /// Matrix is non-square or singular.
    #[error("matrix is not invertible")]
    NotInvertible,
    /// Reduction axis other than 0 or 1.
    #[error("invalid axis {0}, expected 0 or 1")]
    InvalidAxis(usize),
}

/// Result alias for matrix operations.
pub type Result<T> = core::result::Result<T, MatrixError>;
