use log::{debug, trace};

use crate::error::{MatrixError, Result};
use crate::traits::FloatScalar;

use super::Matrix;

/// Result of Gauss-Jordan elimination with partial pivoting.
///
/// One elimination pass over `[A | I]` yields both the inverse (when `A` is
/// square and non-singular) and the determinant, accumulated as the product
/// of pivots with a sign flip for every row swap.
///
/// Singularity is detected only by an exactly zero pivot or a non-finite
/// entry in the result. There is no tolerance, so a near-singular input
/// such as `[[1, 2, 3], [4, 5, 6], [7, 8, 9]]` can come back as an
/// "inverse" with huge entries and a tiny nonzero determinant. Check
/// [`det`](Self::det) against a scale that suits the data if that matters.
///
/// A `0 x 0` matrix is its own inverse, with determinant 1.
///
/// # Example
///
/// ```
/// use matrixx::Matrix;
///
/// let a = Matrix::from_slice(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]).unwrap();
/// let gj = a.gauss_jordan();
/// assert!((gj.det() - 10.0).abs() < 1e-12);
///
/// let inv = gj.into_inverse().unwrap();
/// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
/// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussJordan<T> {
    inverse: Option<Matrix<T>>,
    det: T,
    row_swaps: usize,
}

impl<T: FloatScalar> GaussJordan<T> {
    /// Run the elimination on `a`.
    ///
    /// Never fails: a non-square or singular input simply has no inverse
    /// and a zero determinant.
    pub fn new(a: &Matrix<T>) -> Self {
        if !a.is_square() {
            debug!(
                "gauss-jordan on non-square {}x{} matrix, not invertible",
                a.height, a.width
            );
            return Self::singular(0);
        }

        let n = a.height;
        let mut working = a.clone();
        let mut augmented = Matrix::identity(n);
        let mut det = T::one();
        let mut row_swaps = 0;

        for k in 0..n {
            // Partial pivoting: row in k..n with largest |working[row, k]|
            let mut max_row = k;
            let mut max_val = working.data[k * n + k].abs();
            for row in (k + 1)..n {
                let val = working.data[row * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = row;
                }
            }

            if max_row != k {
                trace!("pivot column {}: swapping rows {} and {}", k, k, max_row);
                working.swap_rows(k, max_row);
                augmented.swap_rows(k, max_row);
                det = -det;
                row_swaps += 1;
            }

            let pivot = working.data[k * n + k];
            if pivot == T::zero() {
                debug!("zero pivot in column {} of {}x{} matrix, singular", k, n, n);
                return Self::singular(row_swaps);
            }
            det = det * pivot;

            for c in 0..n {
                working.data[k * n + c] = working.data[k * n + c] / pivot;
                augmented.data[k * n + c] = augmented.data[k * n + c] / pivot;
            }

            for j in 0..n {
                if j == k {
                    continue;
                }
                let factor = working.data[j * n + k];
                for c in 0..n {
                    working.data[j * n + c] = working.data[j * n + c] - factor * working.data[k * n + c];
                    augmented.data[j * n + c] =
                        augmented.data[j * n + c] - factor * augmented.data[k * n + c];
                }
            }
        }

        let inverse = if augmented.data.iter().all(|x| x.is_finite()) {
            Some(augmented)
        } else {
            debug!("gauss-jordan produced non-finite entries, {}x{} matrix not invertible", n, n);
            None
        };

        Self {
            inverse,
            det,
            row_swaps,
        }
    }

    fn singular(row_swaps: usize) -> Self {
        Self {
            inverse: None,
            det: T::zero(),
            row_swaps,
        }
    }

    /// Determinant: product of pivots, negated once per row swap.
    ///
    /// Zero for non-square or singular input.
    #[inline]
    pub fn det(&self) -> T {
        self.det
    }

    /// Whether an inverse was found.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.inverse.is_some()
    }

    /// Number of row swaps performed by pivoting.
    #[inline]
    pub fn row_swaps(&self) -> usize {
        self.row_swaps
    }

    /// Borrow the inverse, or [`MatrixError::NotInvertible`].
    pub fn inverse(&self) -> Result<&Matrix<T>> {
        self.inverse.as_ref().ok_or(MatrixError::NotInvertible)
    }

    /// Take the inverse, or [`MatrixError::NotInvertible`].
    pub fn into_inverse(self) -> Result<Matrix<T>> {
        self.inverse.ok_or(MatrixError::NotInvertible)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Gauss-Jordan elimination with partial pivoting.
    ///
    /// See [`GaussJordan`].
    pub fn gauss_jordan(&self) -> GaussJordan<T> {
        GaussJordan::new(self)
    }

    /// Matrix inverse.
    ///
    /// Fails with [`MatrixError::NotInvertible`] if the matrix is non-square
    /// or singular. Near-singular input is not rejected; see [`GaussJordan`].
    ///
    /// ```
    /// use matrixx::{Matrix, MatrixError};
    ///
    /// let a = Matrix::from_slice(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]).unwrap();
    /// let id = a.dot(&a.inverse().unwrap()).unwrap();
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(1, 0)].abs() < 1e-12);
    ///
    /// let singular = Matrix::from_slice(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]).unwrap();
    /// assert_eq!(singular.inverse().unwrap_err(), MatrixError::NotInvertible);
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        self.gauss_jordan().into_inverse()
    }

    /// Determinant. Zero for non-square or singular matrices.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[3.0_f64, 8.0, 4.0, 6.0]).unwrap();
    /// assert!((m.det() - (-14.0)).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> T {
        if !self.is_square() {
            debug!("determinant of non-square {}x{} matrix is 0", self.height, self.width);
            return T::zero();
        }
        self.gauss_jordan().det()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_near(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert!((x - y).abs() < tol, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn inverse_2x2() {
        let a = Matrix::from_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
        let expected = Matrix::from_slice(2, 2, &[0.6, -0.7, -0.2, 0.4]).unwrap();
        assert_near(&a.inverse().unwrap(), &expected, TOL);
    }

    #[test]
    fn inverse_3x3_roundtrip() {
        let a = Matrix::from_slice(3, 3, &[2.0, 1.0, 1.0, 4.0, -6.0, 0.0, -2.0, 7.0, 2.0]).unwrap();
        let inv = a.inverse().unwrap();
        assert_near(&a.dot(&inv).unwrap(), &Matrix::identity(3), TOL);
        assert_near(&inv.dot(&a).unwrap(), &Matrix::identity(3), TOL);
    }

    #[test]
    fn inverse_needs_pivoting() {
        // zero in the leading position
        let a = Matrix::from_slice(3, 3, &[0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 4.0, -3.0, 8.0]).unwrap();
        let gj = a.gauss_jordan();
        assert!(gj.row_swaps() > 0);
        let inv = gj.inverse().unwrap();
        assert_near(&a.dot(inv).unwrap(), &Matrix::identity(3), TOL);
    }

    #[test]
    fn singular_not_invertible() {
        let a = Matrix::from_slice(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]).unwrap();
        assert_eq!(a.inverse().unwrap_err(), MatrixError::NotInvertible);
        assert_eq!(a.det(), 0.0);
        assert!(!a.gauss_jordan().is_invertible());
    }

    #[test]
    fn zero_matrix_not_invertible() {
        let a = Matrix::<f64>::zeros(2, 2);
        assert_eq!(a.inverse().unwrap_err(), MatrixError::NotInvertible);
        assert_eq!(a.det(), 0.0);
    }

    #[test]
    fn non_square() {
        let a = Matrix::<f64>::ones(2, 3, 1.0);
        assert_eq!(a.inverse().unwrap_err(), MatrixError::NotInvertible);
        assert_eq!(a.det(), 0.0);
    }

    #[test]
    fn nan_input_not_invertible() {
        let a = Matrix::from_slice(2, 2, &[f64::NAN, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(a.inverse().unwrap_err(), MatrixError::NotInvertible);
    }

    #[test]
    fn det_accumulates_pivots() {
        let a = Matrix::<f64>::from_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
        assert!((a.det() - 10.0).abs() < TOL);

        let b = Matrix::<f64>::from_slice(3, 3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]).unwrap();
        assert!((b.det() - 4.0).abs() < TOL);
    }

    #[test]
    fn det_sign_tracks_swaps() {
        let p = Matrix::<f64>::from_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]).unwrap();
        assert!((p.det() + 1.0).abs() < TOL);

        let a = Matrix::<f64>::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((a.det() + 2.0).abs() < TOL);
    }

    #[test]
    fn det_of_product() {
        let a = Matrix::<f64>::from_slice(3, 3, &[1.0, 2.0, 0.0, 3.0, -1.0, 4.0, 0.5, 2.0, 1.0]).unwrap();
        let b = Matrix::from_slice(3, 3, &[2.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 3.0, 1.0]).unwrap();
        let ab = a.dot(&b).unwrap();
        assert!((ab.det() - a.det() * b.det()).abs() < 1e-9);
    }

    #[test]
    fn identity_inverse() {
        let id = Matrix::<f64>::identity(4);
        assert_eq!(id.inverse().unwrap(), id);
        assert_eq!(id.det(), 1.0);
    }

    #[test]
    fn near_singular_is_not_rejected() {
        let a = Matrix::<f64>::from_slice(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        let gj = a.gauss_jordan();
        assert!(gj.det().abs() < 1e-12);
        let inv = gj.into_inverse().unwrap();
        assert!(inv.as_slice().iter().all(|x| x.is_finite()));
        assert!(inv.as_slice().iter().any(|x| x.abs() > 1e10));
    }

    #[test]
    fn empty_matrix_inverse() {
        let e = Matrix::<f64>::zeros(0, 0);
        assert_eq!(e.det(), 1.0);
        assert_eq!(e.inverse().unwrap().shape(), (0, 0));
        assert_eq!(Matrix::<f64>::zeros(0, 2).inverse(), Err(MatrixError::NotInvertible));
    }

    #[test]
    fn inverse_leaves_input_untouched() {
        let a = Matrix::from_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
        let before = a.clone();
        let _ = a.inverse();
        assert_eq!(a, before);
    }
}
