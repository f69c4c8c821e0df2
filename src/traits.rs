use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be stored in a matrix.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by every numerical operation on [`Matrix`](crate::Matrix):
/// reductions need `sqrt` and ordered comparison, elimination needs `abs`
/// and NaN detection. Covers `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {
    /// Convert a count (element total, index) into `Self`.
    fn from_usize(n: usize) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn from_usize(n: usize) -> $t { n as $t }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
