use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::MatrixError;
use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

/// Reduction direction for the `*_axis` statistics.
///
/// `Axis::Rows` (axis 0) collapses every row to one value, giving a
/// `height x 1` column. `Axis::Columns` (axis 1) collapses every column,
/// giving a `1 x width` row.
///
/// ```
/// use matrixx::{Axis, Matrix, MatrixError};
///
/// assert_eq!(Axis::try_from(0), Ok(Axis::Rows));
/// assert_eq!(Axis::try_from(1), Ok(Axis::Columns));
/// assert_eq!(Axis::try_from(2), Err(MatrixError::InvalidAxis(2)));
///
/// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m.sum_axis(Axis::Rows).as_slice(), &[3.0, 7.0]);
/// assert_eq!(m.sum_axis(Axis::Columns).as_slice(), &[4.0, 6.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// One value per row.
    Rows,
    /// One value per column.
    Columns,
}

impl TryFrom<usize> for Axis {
    type Error = MatrixError;

    fn try_from(axis: usize) -> Result<Self, MatrixError> {
        match axis {
            0 => Ok(Axis::Rows),
            1 => Ok(Axis::Columns),
            other => Err(MatrixError::InvalidAxis(other)),
        }
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> usize {
        match axis {
            Axis::Rows => 0,
            Axis::Columns => 1,
        }
    }
}

// ── Whole-matrix reductions ─────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Sum of all elements.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for &x in &self.data {
            s = s + x;
        }
        s
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Arithmetic mean of all elements. NaN for an empty matrix.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.average(), 2.5);
    /// ```
    pub fn average(&self) -> T {
        self.sum() / T::from_usize(self.data.len())
    }

    /// Median of all elements.
    ///
    /// Even counts average the two middle values. NaN for an empty matrix or
    /// when any element is NaN; infinities sort to the ends as usual.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let even = Matrix::from_slice(2, 2, &[4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(even.median(), 2.5);
    /// let odd = Matrix::row_vector(&[9.0, 1.0, 5.0]);
    /// assert_eq!(odd.median(), 5.0);
    /// ```
    pub fn median(&self) -> T {
        let n = self.data.len();
        if n == 0 || self.data.iter().any(|x| x.is_nan()) {
            return T::nan();
        }
        // no NaN left, so partial_cmp is a total order
        let mut sorted: Vec<T> = self.data.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let mid = n / 2;
        if n % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / (T::one() + T::one())
        } else {
            sorted[mid]
        }
    }

    /// Population variance (divides by N).
    pub fn variance(&self) -> T {
        let mean = self.average();
        let mut acc = T::zero();
        for &x in &self.data {
            let d = x - mean;
            acc = acc + d * d;
        }
        acc / T::from_usize(self.data.len())
    }

    /// Population standard deviation (divides by N, not N - 1).
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::row_vector(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    /// assert_eq!(m.std(), 2.0);
    /// ```
    pub fn std(&self) -> T {
        self.variance().sqrt()
    }

    /// Smallest element, ignoring NaN. NaN for an empty matrix.
    pub fn min(&self) -> T {
        self.data.iter().fold(T::nan(), |acc, &x| acc.min(x))
    }

    /// Largest element, ignoring NaN. NaN for an empty matrix.
    pub fn max(&self) -> T {
        self.data.iter().fold(T::nan(), |acc, &x| acc.max(x))
    }

    // ── Axis-wise reductions ────────────────────────────────────────

    /// Apply a whole-matrix reduction to every row or column vector.
    fn reduce_axis(&self, axis: Axis, f: impl Fn(&Self) -> T) -> Self {
        match axis {
            Axis::Rows => {
                let data: Vec<T> = (0..self.height).map(|i| f(&self.row(i))).collect();
                Matrix::column_vector(&data)
            }
            Axis::Columns => {
                let data: Vec<T> = (0..self.width).map(|j| f(&self.column(j))).collect();
                Matrix::row_vector(&data)
            }
        }
    }

    /// Per-row (`height x 1`) or per-column (`1 x width`) sums.
    pub fn sum_axis(&self, axis: Axis) -> Self {
        self.reduce_axis(axis, Self::sum)
    }

    /// Per-row or per-column means.
    ///
    /// ```
    /// use matrixx::{Axis, Matrix};
    /// let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.average_axis(Axis::Rows).as_slice(), &[2.0, 5.0]);
    /// assert_eq!(m.average_axis(Axis::Columns).as_slice(), &[2.5, 3.5, 4.5]);
    /// ```
    pub fn average_axis(&self, axis: Axis) -> Self {
        self.reduce_axis(axis, Self::average)
    }

    /// Per-row or per-column medians.
    pub fn median_axis(&self, axis: Axis) -> Self {
        self.reduce_axis(axis, Self::median)
    }

    /// Per-row or per-column population variances.
    pub fn variance_axis(&self, axis: Axis) -> Self {
        self.reduce_axis(axis, Self::variance)
    }

    /// Per-row or per-column population standard deviations.
    pub fn std_axis(&self, axis: Axis) -> Self {
        self.reduce_axis(axis, Self::std)
    }

    /// Per-row or per-column minima.
    pub fn min_axis(&self, axis: Axis) -> Self {
        self.reduce_axis(axis, Self::min)
    }

    /// Per-row or per-column maxima.
    pub fn max_axis(&self, axis: Axis) -> Self {
        self.reduce_axis(axis, Self::max)
    }
}
