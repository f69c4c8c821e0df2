pub mod aliases;
mod display;
mod factory;
mod linalg;
mod ops;
mod reduce;
mod shape;

pub use aliases::*;
pub use linalg::GaussJordan;
pub use factory::ARANGE_TOLERANCE;
pub use reduce::Axis;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::traits::Scalar;

/// Dense, heap-allocated, real-valued matrix.
///
/// Row-major `Vec<T>` storage with runtime `height x width`. Row and column
/// vectors are plain 1-row / 1-column matrices. Every operation that yields a
/// matrix allocates a fresh buffer, and `clone()` deep-copies, so two live
/// matrices never share storage.
///
/// # Examples
///
/// ```
/// use matrixx::Matrix;
///
/// let a = Matrix::from_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.shape(), (2, 2));
///
/// let b = Matrix::<f64>::identity(3);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    height: usize,
    width: usize,
}

// ── Constructors ────────────────────────────────────────────────────

/// Element count of a `height x width` matrix, or `None` if it overflows `usize`.
#[inline]
fn checked_len(height: usize, width: usize) -> Option<usize> {
    height.checked_mul(width)
}

/// Element count for the infallible constructors.
#[inline]
fn element_count(height: usize, width: usize) -> usize {
    match checked_len(height, width) {
        Some(n) => n,
        None => panic!("{height}x{width} matrix overflows usize"),
    }
}

impl<T: Scalar> Matrix<T> {
    /// Create a zero-filled `height x width` matrix.
    ///
    /// Either dimension may be zero, giving an empty matrix.
    ///
    /// # Panics
    ///
    /// If `height * width` overflows `usize`.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::<f64>::new(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            data: vec![T::zero(); element_count(height, width)],
            height,
            width,
        }
    }

    /// Take ownership of a row-major buffer.
    ///
    /// Fails with [`MatrixError::SizeMismatch`] if `data.len() != height * width`,
    /// including when that product overflows `usize` (reported as
    /// `expected: usize::MAX`).
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> Result<Self> {
        let expected = checked_len(height, width).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(MatrixError::SizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Copy a row-major slice into a new matrix.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_slice(height: usize, width: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(height, width, data.to_vec())
    }

    /// Build a matrix from a list of rows.
    ///
    /// All rows must have the same length; a ragged row yields
    /// [`MatrixError::ShapeMismatch`] naming the first row and the offender.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (3, 2));
    /// assert_eq!(m[(2, 1)], 6.0);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(element_count(height, width));
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MatrixError::ShapeMismatch {
                    left: (1, width),
                    right: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Whether the matrix is a row or column vector.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.height == 1 || self.width == 1
    }

    /// Whether `other` has the same `(height, width)`.
    #[inline]
    pub fn is_same_shape<U>(&self, other: &Matrix<U>) -> bool {
        self.shape() == other.shape()
    }

    /// Row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// # Panics
    ///
    /// If `height * width` overflows `usize`.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// assert_eq!(m[(2, 0)], 6.0);
    /// ```
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(element_count(height, width));
        for i in 0..height {
            for j in 0..width {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            height,
            width,
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row, col, self.height, self.width,
        );
        row * self.width + col
    }
}

impl<T: Copy> Matrix<T> {
    /// Checked element read. Returns `None` when `(row, col)` is out of bounds.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_slice(1, 2, &[1.0, 2.0]).unwrap();
    /// assert_eq!(m.get(0, 1), Some(2.0));
    /// assert_eq!(m.get(1, 0), None);
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let idx = self.offset(row, col);
        &mut self.data[idx]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    /// Build a matrix from nested rows.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m: Matrix<f64> = vec![vec![1.0, 2.0], vec![3.0, 4.0]].try_into().unwrap();
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl<T> From<Matrix<T>> for Vec<T> {
    fn from(m: Matrix<T>) -> Self {
        m.data
    }
}
