use alloc::vec;
use alloc::vec::Vec;

use crate::error::{MatrixError, Result};
use crate::traits::{FloatScalar, Scalar};

use super::{element_count, Matrix};

/// Slack added to the step count in [`Matrix::arange`] so that an end point
/// reached up to rounding error is still included.
pub const ARANGE_TOLERANCE: f64 = 1e-10;

// ── Filled constructors ─────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a `height x width` matrix of zeros.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.sum(), 0.0);
    /// ```
    pub fn zeros(height: usize, width: usize) -> Self {
        Self::new(height, width)
    }

    /// Create a `height x width` matrix with every element set to `value`.
    ///
    /// # Panics
    ///
    /// If `height * width` overflows `usize`.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::ones(2, 2, 7.0_f64);
    /// assert_eq!(m[(1, 1)], 7.0);
    /// ```
    pub fn ones(height: usize, width: usize, value: T) -> Self {
        Self {
            data: vec![value; element_count(height, width)],
            height,
            width,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let id = Matrix::<f64>::identity(3);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// assert_eq!(id[(2, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a `1 x n` row vector holding `values`.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let v = Matrix::row_vector(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v.shape(), (1, 3));
    /// ```
    pub fn row_vector(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
            height: 1,
            width: values.len(),
        }
    }

    /// Create an `n x 1` column vector holding `values`.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let v = Matrix::column_vector(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v.shape(), (3, 1));
    /// assert_eq!(v[(2, 0)], 3.0);
    /// ```
    pub fn column_vector(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
            height: values.len(),
            width: 1,
        }
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Row vector `[start, start + step, ...]` up to and including `end`.
    ///
    /// Elements are computed as `start + i * step` rather than by repeated
    /// addition. `end` is included when it lies within [`ARANGE_TOLERANCE`]
    /// steps of the last element. A zero or non-finite step, or one pointing
    /// away from `end`, yields an empty `1 x 0` vector.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let v = Matrix::arange(0.0_f64, 1.0, 0.25);
    /// assert_eq!(v.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    ///
    /// let tenths = Matrix::arange(0.0_f64, 1.0, 0.1);
    /// assert_eq!(tenths.width(), 11);
    /// ```
    pub fn arange(start: T, end: T, step: T) -> Self {
        let tol = num_traits::cast::<f64, T>(ARANGE_TOLERANCE).unwrap_or_else(T::epsilon);
        let steps = (end - start) / step;
        let count = if step == T::zero() || !steps.is_finite() || steps + tol < T::zero() {
            0
        } else {
            (steps + tol).floor().to_usize().map_or(0, |n| n + 1)
        };

        let data: Vec<T> = (0..count)
            .map(|i| start + T::from_usize(i) * step)
            .collect();
        Self {
            data,
            height: 1,
            width: count,
        }
    }
}

// ── Stacking ────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Concatenate side by side: columns of `a` first, then `b`.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] if heights differ.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let a = Matrix::from_slice(2, 1, &[1.0, 2.0]).unwrap();
    /// let b = Matrix::from_slice(2, 2, &[3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let c = Matrix::hstack(&a, &b).unwrap();
    /// assert_eq!(c.shape(), (2, 3));
    /// assert_eq!(c.as_slice(), &[1.0, 3.0, 4.0, 2.0, 5.0, 6.0]);
    /// ```
    pub fn hstack(a: &Self, b: &Self) -> Result<Self> {
        if a.height != b.height {
            return Err(MatrixError::ShapeMismatch {
                left: a.shape(),
                right: b.shape(),
            });
        }
        let width = a.width.checked_add(b.width).ok_or(MatrixError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        })?;
        let mut data = Vec::with_capacity(a.data.len() + b.data.len());
        for i in 0..a.height {
            data.extend_from_slice(a.row_slice(i));
            data.extend_from_slice(b.row_slice(i));
        }
        Ok(Self {
            data,
            height: a.height,
            width,
        })
    }

    /// Concatenate top to bottom: rows of `a` first, then `b`.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] if widths differ.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let a = Matrix::row_vector(&[1.0, 2.0]);
    /// let b = Matrix::row_vector(&[3.0, 4.0]);
    /// let c = Matrix::vstack(&a, &b).unwrap();
    /// assert_eq!(c.shape(), (2, 2));
    /// assert_eq!(c[(1, 0)], 3.0);
    /// ```
    pub fn vstack(a: &Self, b: &Self) -> Result<Self> {
        if a.width != b.width {
            return Err(MatrixError::ShapeMismatch {
                left: a.shape(),
                right: b.shape(),
            });
        }
        let height = a.height.checked_add(b.height).ok_or(MatrixError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        })?;
        let mut data = Vec::with_capacity(a.data.len() + b.data.len());
        data.extend_from_slice(&a.data);
        data.extend_from_slice(&b.data);
        Ok(Self {
            data,
            height,
            width: a.width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = Matrix::<f64>::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn ones_with_value() {
        let m = Matrix::ones(2, 3, 1.5_f64);
        assert!(m.as_slice().iter().all(|&x| x == 1.5));
    }

    #[test]
    fn identity() {
        let m = Matrix::<f64>::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn arange_integer_steps() {
        let v = Matrix::arange(1.0_f64, 5.0, 1.0);
        assert_eq!(v.shape(), (1, 5));
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn arange_includes_drifting_end() {
        let v = Matrix::arange(0.0_f64, 0.3, 0.1);
        assert_eq!(v.width(), 4);
        assert!((v[(0, 3)] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn arange_excludes_overshoot() {
        let v = Matrix::arange(0.0_f64, 1.0, 0.3);
        assert_eq!(v.width(), 4);
        assert!((v[(0, 3)] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn arange_descending() {
        let v = Matrix::arange(3.0_f64, 1.0, -1.0);
        assert_eq!(v.as_slice(), &[3.0, 2.0, 1.0]);
    }

    #[test]
    fn arange_degenerate() {
        assert!(Matrix::arange(0.0_f64, 1.0, 0.0).is_empty());
        assert!(Matrix::arange(0.0_f64, 1.0, -1.0).is_empty());
        assert_eq!(Matrix::arange(2.0_f64, 2.0, 1.0).as_slice(), &[2.0]);
    }

    #[test]
    fn vectors() {
        let r = Matrix::row_vector(&[1.0, 2.0]);
        let c = Matrix::column_vector(&[1.0, 2.0]);
        assert_eq!(r.shape(), (1, 2));
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(r.transpose(), c);
    }

    #[test]
    fn hstack() {
        let a = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_slice(2, 1, &[5.0, 6.0]).unwrap();
        let c = Matrix::hstack(&a, &b).unwrap();
        assert_eq!(c.shape(), (2, 3));
        assert_eq!(c.as_slice(), &[1.0, 2.0, 5.0, 3.0, 4.0, 6.0]);
    }

    #[test]
    fn hstack_height_mismatch() {
        let a = Matrix::<f64>::zeros(2, 2);
        let b = Matrix::<f64>::zeros(3, 1);
        assert_eq!(
            Matrix::hstack(&a, &b).unwrap_err(),
            MatrixError::ShapeMismatch {
                left: (2, 2),
                right: (3, 1)
            }
        );
    }

    #[test]
    fn vstack() {
        let a = Matrix::from_slice(1, 2, &[1.0, 2.0]).unwrap();
        let b = Matrix::from_slice(2, 2, &[3.0, 4.0, 5.0, 6.0]).unwrap();
        let c = Matrix::vstack(&a, &b).unwrap();
        assert_eq!(c.shape(), (3, 2));
        assert_eq!(c.row(0), a);
        assert_eq!(c[(2, 1)], 6.0);
    }

    #[test]
    fn stacking_overflowing_dims() {
        let tall = Matrix::<f64>::zeros(usize::MAX, 0);
        assert!(Matrix::vstack(&tall, &tall).is_err());
        let wide = Matrix::<f64>::zeros(0, usize::MAX);
        assert!(Matrix::hstack(&wide, &wide).is_err());
    }

    #[test]
    fn vstack_width_mismatch() {
        let a = Matrix::<f64>::zeros(1, 2);
        let b = Matrix::<f64>::zeros(1, 3);
        assert!(Matrix::vstack(&a, &b).is_err());
    }
}
