use thiserror::Error;

/// An error type for factor generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactorError {
    /// Gaussian factors must have an odd length to be centered on 0.
    #[error("Gaussian factor length must be odd, got {0}")]
    EvenLength(usize),

    /// The standard deviation is negative or not finite.
    #[error("Invalid sigma {0}: sigma must be finite and non-negative")]
    InvalidSigma(f64),

    /// The default length of a gaussian with this sigma does not fit in an index range.
    #[error("Sigma {0} is too large: the gaussian factor length overflows")]
    LengthOverflow(f64),

    /// A gradient direction other than 0 (first axis) or 1 (second axis).
    #[error("Invalid gradient direction {0}, expected 0 or 1")]
    InvalidDirection(usize),
}
