use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MatrixError, Result};
use crate::traits::Scalar;

use super::Matrix;

// ── Element-wise matrix/matrix ──────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        if !self.is_same_shape(rhs) {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            height: self.height,
            width: self.width,
        })
    }

    /// Element-wise sum. Fails with [`MatrixError::ShapeMismatch`] on differing shapes.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let a = Matrix::from_slice(1, 2, &[1.0, 2.0]).unwrap();
    /// let b = Matrix::from_slice(1, 2, &[10.0, 20.0]).unwrap();
    /// assert_eq!(a.add_matrix(&b).unwrap().as_slice(), &[11.0, 22.0]);
    /// ```
    pub fn add_matrix(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference. Fails with [`MatrixError::ShapeMismatch`] on differing shapes.
    pub fn sub_matrix(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product: `c[i][j] = a[i][j] * b[i][j]`.
    ///
    /// This is what `*` between two matrices computes; see [`Matrix::dot`]
    /// for the matrix product.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let a = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_slice(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.hadamard(&b).unwrap();
    /// assert_eq!(c[(0, 1)], 12.0);
    /// assert_eq!(c[(1, 1)], 32.0);
    /// ```
    pub fn hadamard(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Divide every element by `rhs`.
    ///
    /// Fails with [`MatrixError::DivideByZero`] when `rhs` is exactly zero.
    pub fn div_scalar(&self, rhs: T) -> Result<Self> {
        if rhs == T::zero() {
            return Err(MatrixError::DivideByZero);
        }
        Ok(self.apply(|x| x / rhs))
    }

    /// Apply `f` to every element, producing a new matrix.
    ///
    /// `f` is called exactly once per element, in row-major order.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]).unwrap();
    /// let r = m.apply(f64::sqrt);
    /// assert_eq!(r.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn apply(&self, mut f: impl FnMut(T) -> T) -> Self {
        let data = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            height: self.height,
            width: self.width,
        }
    }

    /// Matrix product `(h x n) . (n x w) -> (h x w)`.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] unless `self.width() == rhs.height()`.
    ///
    /// ```
    /// use matrixx::Matrix;
    /// let a = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let b = Matrix::from_slice(3, 1, &[1.0, 0.0, -1.0]).unwrap();
    /// let c = a.dot(&b).unwrap();
    /// assert_eq!(c.shape(), (2, 1));
    /// assert_eq!(c.as_slice(), &[-2.0, -2.0]);
    /// assert!(b.dot(&b).is_err());
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<Self> {
        if self.width != rhs.height {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let m = self.height;
        let n = self.width;
        let p = rhs.width;
        let mut data: Vec<T> = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Ok(Matrix {
            data,
            height: m,
            width: p,
        })
    }
}

// Operators between two matrices return `Result` so a shape mismatch is a
// value, never a panic.
macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $named:ident) => {
        impl<T: Scalar> $trait<&Matrix<T>> for &Matrix<T> {
            type Output = Result<Matrix<T>>;
            fn $method(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
                self.$named(rhs)
            }
        }

        impl<T: Scalar> $trait<Matrix<T>> for &Matrix<T> {
            type Output = Result<Matrix<T>>;
            fn $method(self, rhs: Matrix<T>) -> Result<Matrix<T>> {
                self.$named(&rhs)
            }
        }

        impl<T: Scalar> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Result<Matrix<T>>;
            fn $method(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
                self.$named(rhs)
            }
        }

        impl<T: Scalar> $trait for Matrix<T> {
            type Output = Result<Matrix<T>>;
            fn $method(self, rhs: Matrix<T>) -> Result<Matrix<T>> {
                self.$named(&rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, add_matrix);
impl_elementwise_op!(Sub, sub, sub_matrix);
impl_elementwise_op!(Mul, mul, hadamard);

// ── Matrix/scalar ───────────────────────────────────────────────────

impl<T: Scalar> Add<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: T) -> Matrix<T> {
        self.apply(|x| x + rhs)
    }
}

impl<T: Scalar> Add<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(mut self, rhs: T) -> Matrix<T> {
        self += rhs;
        self
    }
}

impl<T: Scalar> Sub<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: T) -> Matrix<T> {
        self.apply(|x| x - rhs)
    }
}

impl<T: Scalar> Sub<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(mut self, rhs: T) -> Matrix<T> {
        self -= rhs;
        self
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.apply(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(mut self, rhs: T) -> Matrix<T> {
        self *= rhs;
        self
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Result<Matrix<T>>;
    fn div(self, rhs: T) -> Result<Matrix<T>> {
        self.div_scalar(rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Result<Matrix<T>>;
    fn div(self, rhs: T) -> Result<Matrix<T>> {
        self.div_scalar(rhs)
    }
}

impl<T: Scalar> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x + rhs;
        }
    }
}

impl<T: Scalar> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x - rhs;
        }
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

// ── scalar (op) matrix (concrete impls) ─────────────────────────────

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn add(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs + self
                }
            }

            impl Add<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn add(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs + self
                }
            }

            impl Sub<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn sub(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.apply(|x| self - x)
                }
            }

            impl Sub<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn sub(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    self - &rhs
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

// ── Negation ────────────────────────────────────────────────────────

/// Element-wise negation. Uses the element's own `Neg`, so `+0.0` maps to `-0.0`.
impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.apply(|x| -x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(h: usize, w: usize, data: &[f64]) -> Matrix<f64> {
        Matrix::from_slice(h, w, data).unwrap()
    }

    #[test]
    fn add_sub() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = m(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let c = (&a + &b).unwrap();
        assert_eq!(c.as_slice(), &[6.0, 8.0, 10.0, 12.0]);

        let d = (&b - &a).unwrap();
        assert_eq!(d.as_slice(), &[4.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn operands_untouched() {
        let a = m(1, 3, &[1.0, 2.0, 3.0]);
        let b = m(1, 3, &[1.0, 1.0, 1.0]);
        let _ = (&a + &b).unwrap();
        let _ = &a * 3.0;
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(b.as_slice(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn elementwise_shape_mismatch() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = m(1, 4, &[1.0, 2.0, 3.0, 4.0]);
        let expected = MatrixError::ShapeMismatch {
            left: (2, 2),
            right: (1, 4),
        };
        assert_eq!((&a + &b).unwrap_err(), expected);
        assert_eq!((&a - &b).unwrap_err(), expected);
        assert_eq!((&a * &b).unwrap_err(), expected);
    }

    #[test]
    fn star_is_hadamard() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = m(2, 2, &[2.0, 0.5, -1.0, 0.0]);
        let c = (a * b).unwrap();
        assert_eq!(c.as_slice(), &[2.0, 1.0, -3.0, 0.0]);
    }

    #[test]
    fn owned_and_ref_variants() {
        let a = m(1, 2, &[1.0, 2.0]);
        let b = m(1, 2, &[3.0, 4.0]);
        let r1 = (&a + &b).unwrap();
        let r2 = (a.clone() + &b).unwrap();
        let r3 = (&a + b.clone()).unwrap();
        let r4 = (a + b).unwrap();
        assert_eq!(r1, r2);
        assert_eq!(r2, r3);
        assert_eq!(r3, r4);
    }

    #[test]
    fn scalar_ops() {
        let a = m(1, 3, &[1.0, 2.0, 3.0]);
        assert_eq!((&a + 1.0).as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!((&a - 1.0).as_slice(), &[0.0, 1.0, 2.0]);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!((&a / 2.0).unwrap().as_slice(), &[0.5, 1.0, 1.5]);
        assert_eq!((2.0 * &a).as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!((10.0 - &a).as_slice(), &[9.0, 8.0, 7.0]);
        assert_eq!((1.0 + a).as_slice(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn divide_by_zero() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!((&a / 0.0).unwrap_err(), MatrixError::DivideByZero);
        assert_eq!((a / -0.0).unwrap_err(), MatrixError::DivideByZero);
    }

    #[test]
    fn compound_assign() {
        let mut a = m(1, 2, &[1.0, 2.0]);
        a += 1.0;
        assert_eq!(a.as_slice(), &[2.0, 3.0]);
        a *= 3.0;
        assert_eq!(a.as_slice(), &[6.0, 9.0]);
        a -= 6.0;
        assert_eq!(a.as_slice(), &[0.0, 3.0]);
    }

    #[test]
    fn neg() {
        let a = m(1, 2, &[1.0, -2.0]);
        assert_eq!((-&a).as_slice(), &[-1.0, 2.0]);
        assert_eq!((-a).as_slice(), &[-1.0, 2.0]);
    }

    #[test]
    fn neg_flips_sign_of_zero() {
        let z = m(1, 2, &[0.0, -0.0]);
        let n = -&z;
        assert!(n[(0, 0)].is_sign_negative());
        assert!(n[(0, 1)].is_sign_positive());
    }

    #[test]
    fn apply_once_per_element() {
        let a = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mut calls = 0;
        let r = a.apply(|x| {
            calls += 1;
            x * x
        });
        assert_eq!(calls, 6);
        assert_eq!(r.as_slice(), &[1.0, 4.0, 9.0, 16.0, 25.0, 36.0]);
    }

    #[test]
    fn dot_square() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = m(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let c = a.dot(&b).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn dot_non_square() {
        let a = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = m(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let c = a.dot(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn dot_dim_mismatch() {
        let a = m(2, 3, &[0.0; 6]);
        assert_eq!(
            a.dot(&a).unwrap_err(),
            MatrixError::ShapeMismatch {
                left: (2, 3),
                right: (2, 3)
            }
        );
    }

    #[test]
    fn dot_identity() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let id = Matrix::identity(2);
        assert_eq!(a.dot(&id).unwrap(), a);
        assert_eq!(id.dot(&a).unwrap(), a);
    }
}
