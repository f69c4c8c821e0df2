//! # matrixx
//!
//! Dense, real-valued matrices for small linear-algebra jobs (least squares,
//! simple ML primitives). Pure Rust, no-std compatible with `alloc`.
//!
//! ## Quick start
//!
//! ```
//! use matrixx::{Axis, Matrix};
//!
//! let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]).unwrap();
//!
//! // Gauss-Jordan inverse with partial pivoting
//! let inv = a.inverse().unwrap();
//! let id = a.dot(&inv).unwrap();
//! assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
//! assert!((a.det() - 10.0).abs() < 1e-12);
//!
//! // Element-wise ops between matrices return `Result`
//! let b = (&a + &a).unwrap();
//! assert_eq!(b[(1, 1)], 12.0);
//!
//! // Axis-wise statistics
//! assert_eq!(a.sum_axis(Axis::Columns).as_slice(), &[6.0, 13.0]);
//! assert_eq!(a.median(), 5.0);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — `Matrix<T>` with row-major `Vec<T>` storage and runtime
//!   `height x width`. Vectors are 1-row / 1-column matrices. Includes
//!   constructors (`zeros`, `ones`, `identity`, `arange`, stacking),
//!   element-wise and scalar arithmetic, `dot`, transpose/reshape/flatten,
//!   reductions (`sum`, `average`, `median`, `std`, ...) over the whole
//!   matrix or per [`Axis`], and Gauss-Jordan [`inverse`](Matrix::inverse)
//!   / [`det`](Matrix::det).
//!
//! - [`error`] — [`MatrixError`]: shape/size mismatch, division by zero,
//!   non-invertible matrix, invalid axis. Every fallible operation returns
//!   it instead of panicking.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — storage and arithmetic (`Copy + PartialEq + Debug + Num`)
//!   - [`FloatScalar`] — `f32` / `f64`, needed by reductions and elimination
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: `debug!` when an inversion
//! fails, `trace!` for each pivot row swap. Install any `log` backend to see
//! them.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod traits;

pub use error::{MatrixError, Result};
pub use matrix::ARANGE_TOLERANCE;
pub use matrix::{Axis, GaussJordan, Matrix, Matrixf32, Matrixf64};
pub use traits::{FloatScalar, Scalar};
