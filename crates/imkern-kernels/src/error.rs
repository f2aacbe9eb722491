use imkern_array::ArrayError;
use imkern_factors::FactorError;
use thiserror::Error;

/// An error type for kernel construction.
///
/// Every variant signals a contract violation by the caller. No kernel is
/// ever partially built: a function either returns the full kernel or fails
/// before producing output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// An argument is outside the domain of the requested kernel.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The standard deviation is not finite and strictly positive.
    #[error("Invalid sigma {0}: sigma must be finite and positive")]
    InvalidSigma(f64),

    /// The support of the kernel for this sigma does not fit in an index range.
    #[error("Sigma {0} is too large: the kernel support overflows")]
    LengthOverflow(f64),

    /// A runtime sequence does not match the kernel dimensionality.
    #[error("Expected {expected} values for a {expected}-dimensional kernel, got {actual}")]
    ArityMismatch {
        /// The dimensionality of the kernel
        expected: usize,
        /// The length of the provided sequence
        actual: usize,
    },

    /// The name does not denote a gradient operator.
    #[error("Unknown gradient operator: {0}")]
    UnknownOperator(String),

    /// Error while generating the 1-D factors.
    #[error(transparent)]
    FactorError(#[from] FactorError),

    /// Error with the underlying array, e.g. incompatible index ranges.
    #[error(transparent)]
    ArrayError(#[from] ArrayError),
}
