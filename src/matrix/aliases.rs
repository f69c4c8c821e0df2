//! Pre-defined type aliases for common `Matrix` element types.

use super::Matrix;

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
