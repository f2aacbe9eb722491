#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Every factor is a [`Factor`], a 1-D [`imkern_array::CenteredArray`] whose
//! index range is centered on 0. The N-D kernels built from these factors
//! live in `imkern-kernels`.

/// Error types for factor generation.
pub mod error;

/// Finite-difference gradient factors (Sobel, Prewitt, Ando, Scharr, Bickley).
pub mod gradient;

/// Sampled Gaussian factors and the default truncation policy.
pub mod gaussian;

pub use error::FactorError;

/// A one-dimensional kernel factor.
pub type Factor = imkern_array::CenteredArray1<f64>;

/// Factors along the first and the second axis of a 2-D separable kernel.
pub type FactorPair = (Factor, Factor);

/// The unit factor `[1]` at index 0, neutral for the outer product.
pub fn unit_factor() -> Factor {
    Factor::from_vec_centered(vec![1.0])
}
