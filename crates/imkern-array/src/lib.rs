#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! Filter kernels are naturally addressed relative to their center: a 3x3
//! Sobel kernel lives on `-1..=1` along both axes, and a Gaussian of length
//! `2w + 1` lives on `-w..=w`. This crate provides the array type used by the
//! rest of the workspace to store such kernels.
//!
//! - [`AxisRange`]: a contiguous signed index range along one axis. Negating a
//!   range mirrors it about index 0.
//! - [`CenteredArray`]: dense row-major storage with one [`AxisRange`] per
//!   axis, addressed with `[isize; N]` indices.
//!
//! # Quick Start
//!
//! ```rust
//! use imkern_array::{AxisRange, CenteredArray};
//!
//! // a 1-D array on -1..=1
//! let a = CenteredArray::from_vec_centered(vec![1.0, 2.0, 1.0]);
//! assert_eq!(a.ranges(), &[AxisRange::symmetric(1)]);
//! assert_eq!(a[[-1]], 1.0);
//! assert_eq!(a[[0]], 2.0);
//!
//! // outer product through broadcasting of singleton axes
//! let col = a.clone().along_axis::<2>(0).unwrap();
//! let row = a.along_axis::<2>(1).unwrap();
//! let outer = col.broadcast_op(&row, |x, y| x * y).unwrap();
//! assert_eq!(outer.shape(), [3, 3]);
//! assert_eq!(outer[[0, 0]], 4.0);
//! ```

/// Error types for array construction and arithmetic.
pub mod error;

/// Signed per-axis index ranges.
pub mod range;

/// The centered N-dimensional array.
pub mod array;

/// Serialization support, enabled with the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::array::{CenteredArray, Indices};
pub use crate::error::ArrayError;
pub use crate::range::AxisRange;

/// A one-dimensional centered array.
pub type CenteredArray1<T> = CenteredArray<T, 1>;

/// A two-dimensional centered array.
pub type CenteredArray2<T> = CenteredArray<T, 2>;
