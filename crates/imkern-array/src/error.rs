use thiserror::Error;

/// Error type for centered array operations.
///
/// Every variant describes a violated precondition of the caller; none of
/// them is recoverable by retrying the same call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// The data length does not match the number of elements of the ranges.
    ///
    /// # Example
    /// ```ignore
    /// // Error: ranges -1..=1 x -1..=1 expect 9 elements, but got 8
    /// let a = CenteredArray::from_ranges_vec([AxisRange::symmetric(1); 2], vec![0.0; 8])?;
    /// ```
    #[error("Shape mismatch: expected {expected} elements for the ranges, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on the ranges
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// The index ranges of two operands are incompatible.
    ///
    /// Raised by element-wise operations when the ranges differ, and by
    /// broadcasting when an axis is neither equal nor a singleton on one side.
    #[error("Range mismatch: {message}. Expected ranges: {expected}, got: {actual}")]
    RangeMismatch {
        /// Human-readable description of the mismatch
        message: String,
        /// Ranges of the left operand
        expected: String,
        /// Ranges of the right operand
        actual: String,
    },

    /// An axis number is not smaller than the number of dimensions.
    #[error("Axis {axis} out of bounds for an array with {ndim} dimensions")]
    AxisOutOfBounds {
        /// The requested axis
        axis: usize,
        /// The number of dimensions of the array
        ndim: usize,
    },

    /// A range whose last index does not fit in `isize`.
    #[error("Invalid range: {len} indices starting at {first} overflow isize")]
    InvalidRange {
        /// The first index of the range
        first: isize,
        /// The number of indices of the range
        len: usize,
    },

    /// The total number of elements of the ranges overflows `usize`.
    #[error("Ranges {ranges} hold more than usize::MAX elements")]
    TooManyElements {
        /// The rejected ranges
        ranges: String,
    },

    /// An axis permutation repeats an axis.
    #[error("Invalid axis permutation {axes}: every axis must appear exactly once")]
    InvalidPermutation {
        /// The rejected permutation
        axes: String,
    },
}

impl ArrayError {
    /// Creates an InvalidShape error.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates a RangeMismatch error with formatted ranges.
    pub fn range_mismatch<R: std::fmt::Debug>(
        message: impl Into<String>,
        expected: &[R],
        actual: &[R],
    ) -> Self {
        Self::RangeMismatch {
            message: message.into(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }
}
