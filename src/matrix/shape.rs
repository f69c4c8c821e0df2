use alloc::vec::Vec;

use crate::error::{MatrixError, Result};
use crate::traits::Scalar;

use super::{checked_len, Matrix};

// ── Transpose / reshape ─────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Transpose: `result[(j, i)] == self[(i, j)]`.
    ///
    /// Only moves data, so `m.transpose().transpose() == m` exactly.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let a = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let h = self.height;
        let w = self.width;
        Matrix::from_fn(w, h, |i, j| self.data[j * w + i])
    }

    /// Reinterpret the elements as `height x width`, keeping row-major order.
    ///
    /// Element `k` of the buffer lands at `(k / width, k % width)`. Fails with
    /// [`MatrixError::SizeMismatch`] if the element count would change; a
    /// target whose `height * width` overflows `usize` reports `got: usize::MAX`.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let a = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let r = a.reshape(3, 2).unwrap();
    /// assert_eq!(r[(1, 0)], 3.0);
    /// assert!(a.reshape(4, 2).is_err());
    /// ```
    pub fn reshape(&self, height: usize, width: usize) -> Result<Self> {
        let got = checked_len(height, width).unwrap_or(usize::MAX);
        if got != self.data.len() {
            return Err(MatrixError::SizeMismatch {
                expected: self.data.len(),
                got,
            });
        }
        Ok(Matrix {
            data: self.data.clone(),
            height,
            width,
        })
    }

    /// Reshape to a single `1 x len` row vector.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let a = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(a.flatten().shape(), (1, 4));
    /// ```
    pub fn flatten(&self) -> Self {
        Matrix {
            data: self.data.clone(),
            height: 1,
            width: self.data.len(),
        }
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Borrow row `i` as a slice.
    ///
    /// Panics if `i >= height`.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        assert!(i < self.height, "row {} out of bounds for {} rows", i, self.height);
        let start = i * self.width;
        &self.data[start..start + self.width]
    }

    /// Swap two rows in place.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let mut m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// m.swap_rows(0, 1);
    /// assert_eq!(m.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let w = self.width;
            for j in 0..w {
                self.data.swap(a * w + j, b * w + j);
            }
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Extract row `i` as a `1 x width` matrix.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.row(1).as_slice(), &[3.0, 4.0]);
    /// ```
    pub fn row(&self, i: usize) -> Self {
        Matrix::row_vector(self.row_slice(i))
    }

    /// Extract column `j` as a `height x 1` matrix.
    ///
    /// Panics if `j >= width`.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let c = m.column(1);
    /// assert_eq!(c.shape(), (2, 1));
    /// assert_eq!(c.as_slice(), &[2.0, 4.0]);
    /// ```
    pub fn column(&self, j: usize) -> Self {
        assert!(j < self.width, "column {} out of bounds for {} columns", j, self.width);
        let data: Vec<T> = (0..self.height).map(|i| self.data[i * self.width + j]).collect();
        Matrix::column_vector(&data)
    }

    /// Extract columns `start..end` as a `height x (end - start)` matrix.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_slice(1, 4, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.columns(1, 3).as_slice(), &[2.0, 3.0]);
    /// ```
    pub fn columns(&self, start: usize, end: usize) -> Self {
        assert!(
            start <= end && end <= self.width,
            "columns {}..{} out of bounds for {} columns",
            start, end, self.width,
        );
        Matrix::from_fn(self.height, end - start, |i, j| self.data[i * self.width + start + j])
    }

    /// Overwrite row `i` with the elements of `v`.
    ///
    /// `v` may be a row or column vector; fails with
    /// [`MatrixError::SizeMismatch`] if it does not hold `width` elements.
    pub fn set_row(&mut self, i: usize, v: &Self) -> Result<()> {
        if v.data.len() != self.width {
            return Err(MatrixError::SizeMismatch {
                expected: self.width,
                got: v.data.len(),
            });
        }
        for j in 0..self.width {
            self[(i, j)] = v.data[j];
        }
        Ok(())
    }

    /// Overwrite column `j` with the elements of `v`.
    ///
    /// `v` may be a row or column vector; fails with
    /// [`MatrixError::SizeMismatch`] if it does not hold `height` elements.
    pub fn set_column(&mut self, j: usize, v: &Self) -> Result<()> {
        if v.data.len() != self.height {
            return Err(MatrixError::SizeMismatch {
                expected: self.height,
                got: v.data.len(),
            });
        }
        for i in 0..self.height {
            self[(i, j)] = v.data[i];
        }
        Ok(())
    }
}
