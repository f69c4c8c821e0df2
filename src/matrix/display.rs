use core::fmt;

use super::Matrix;

/// Row-major, bracketed, space-separated rendering.
///
/// ```
/// use matrixx::Matrix;
/// let m = Matrix::from_slice(2, 2, &[1.0, 2.5, -3.0, 4.0]).unwrap();
/// assert_eq!(m.to_string(), "[[1 2.5]\n [-3 4]]");
/// ```
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.height {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for j in 0..self.width {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[i * self.width + j])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
