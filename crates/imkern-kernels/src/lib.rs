#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Kernels are [`Kernel`] values: dense [`imkern_array::CenteredArray`]s of
//! `f64` whose index ranges are centered on 0, ready to be handed to a
//! correlation engine. Use [`reflect`] to obtain the convolution kernel.
//!
//! ```rust
//! use imkern_kernels::{gradient, laplacian::Laplacian, reflect};
//!
//! let (gy, gx) = gradient::sobel().unwrap();
//! assert_eq!(gx, gy.transpose());
//! assert_eq!(gx[[0, 1]], 0.25);
//!
//! let stencil = Laplacian::default().densify();
//! assert_eq!(stencil[[0, 0]], -4);
//!
//! let conv = reflect(&gx);
//! assert_eq!(conv[[0, -1]], gx[[0, 1]]);
//! ```

/// Error types for kernel construction.
pub mod error;

/// Outer-product assembly of separable kernels.
pub mod separable;

/// Separable gradient operators and the [`gradient::GradientOperator`] selector.
pub mod gradient;

/// Gradient operators defined by literal coefficient matrices.
pub mod stencil;

/// N-dimensional Gaussian kernels.
pub mod gaussian;

/// Difference-of-Gaussian and Laplacian-of-Gaussian kernels.
pub mod difference;

/// The sparse discrete Laplacian.
pub mod laplacian;

/// Conversion between correlation and convolution kernels.
mod reflect;

pub use error::KernelError;
pub use reflect::reflect;

/// An N-dimensional kernel with centered index ranges.
pub type Kernel<const N: usize> = imkern_array::CenteredArray<f64, N>;

/// Kernels differentiating along the first and along the second axis.
pub type KernelPair = (Kernel<2>, Kernel<2>);
