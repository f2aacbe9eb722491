use imkern_factors::gradient as factors;

use crate::{
    separable::{assemble, outer},
    stencil, Kernel, KernelError, KernelPair,
};

/// The 3x3 Sobel kernels `(diff along first axis, diff along second axis)`.
///
/// # Example
///
/// ```
/// use imkern_kernels::gradient::sobel;
///
/// let (diff1, diff2) = sobel().unwrap();
/// assert_eq!(diff1[[1, 0]], 0.25);
/// assert_eq!(diff1[[1, 1]], 0.125);
/// assert_eq!(diff2, diff1.transpose());
/// ```
pub fn sobel() -> Result<KernelPair, KernelError> {
    assemble(factors::sobel())
}

/// The Sobel kernel of one direction, restricted to the extended axes.
///
/// # Arguments
///
/// * `extended` - Whether the first and the second axis have more than one element.
/// * `direction` - 0 for the gradient along the first axis, 1 for the second.
pub fn sobel_extended(extended: (bool, bool), direction: usize) -> Result<Kernel<2>, KernelError> {
    let (first, second) = factors::sobel_extended(extended, direction)?;
    outer(first, second)
}

/// The 3x3 Prewitt kernels `(diff along first axis, diff along second axis)`.
pub fn prewitt() -> Result<KernelPair, KernelError> {
    assemble(factors::prewitt())
}

/// The Prewitt kernel of one direction, restricted to the extended axes.
pub fn prewitt_extended(
    extended: (bool, bool),
    direction: usize,
) -> Result<Kernel<2>, KernelError> {
    let (first, second) = factors::prewitt_extended(extended, direction)?;
    outer(first, second)
}

/// Ando's consistent 3x3 gradient kernels.
pub fn ando3() -> Result<KernelPair, KernelError> {
    assemble(factors::ando3())
}

/// The Ando3 kernel of one direction, restricted to the extended axes.
pub fn ando3_extended(extended: (bool, bool), direction: usize) -> Result<Kernel<2>, KernelError> {
    let (first, second) = factors::ando3_extended(extended, direction)?;
    outer(first, second)
}

/// The 3x3 Scharr kernels.
pub fn scharr() -> Result<KernelPair, KernelError> {
    assemble(factors::scharr())
}

/// The Scharr kernel of one direction, restricted to the extended axes.
pub fn scharr_extended(
    extended: (bool, bool),
    direction: usize,
) -> Result<Kernel<2>, KernelError> {
    let (first, second) = factors::scharr_extended(extended, direction)?;
    outer(first, second)
}

/// The 3x3 Bickley kernels.
pub fn bickley() -> Result<KernelPair, KernelError> {
    assemble(factors::bickley())
}

/// The Bickley kernel of one direction, restricted to the extended axes.
pub fn bickley_extended(
    extended: (bool, bool),
    direction: usize,
) -> Result<Kernel<2>, KernelError> {
    let (first, second) = factors::bickley_extended(extended, direction)?;
    outer(first, second)
}

/// Selects one of the 2-D gradient operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GradientOperator {
    /// [`sobel`]
    Sobel,
    /// [`prewitt`]
    Prewitt,
    /// [`ando3`]
    Ando3,
    /// [`stencil::ando4`]
    Ando4,
    /// [`stencil::ando5`]
    Ando5,
    /// [`scharr`]
    Scharr,
    /// [`bickley`]
    Bickley,
}

impl GradientOperator {
    /// Every operator, in declaration order.
    pub const ALL: [GradientOperator; 7] = [
        GradientOperator::Sobel,
        GradientOperator::Prewitt,
        GradientOperator::Ando3,
        GradientOperator::Ando4,
        GradientOperator::Ando5,
        GradientOperator::Scharr,
        GradientOperator::Bickley,
    ];

    /// The lower-case name of the operator.
    pub fn name(&self) -> &'static str {
        match self {
            GradientOperator::Sobel => "sobel",
            GradientOperator::Prewitt => "prewitt",
            GradientOperator::Ando3 => "ando3",
            GradientOperator::Ando4 => "ando4",
            GradientOperator::Ando5 => "ando5",
            GradientOperator::Scharr => "scharr",
            GradientOperator::Bickley => "bickley",
        }
    }

    /// The kernel pair of the operator.
    pub fn kernels(&self) -> Result<KernelPair, KernelError> {
        match self {
            GradientOperator::Sobel => sobel(),
            GradientOperator::Prewitt => prewitt(),
            GradientOperator::Ando3 => ando3(),
            GradientOperator::Ando4 => Ok(stencil::ando4()),
            GradientOperator::Ando5 => Ok(stencil::ando5()),
            GradientOperator::Scharr => scharr(),
            GradientOperator::Bickley => bickley(),
        }
    }

    /// The kernel of one direction, restricted to the extended axes.
    ///
    /// # Errors
    ///
    /// The fixed-stencil operators ([`GradientOperator::Ando4`],
    /// [`GradientOperator::Ando5`]) require both axes to be extended.
    pub fn extended(
        &self,
        extended: (bool, bool),
        direction: usize,
    ) -> Result<Kernel<2>, KernelError> {
        match self {
            GradientOperator::Sobel => sobel_extended(extended, direction),
            GradientOperator::Prewitt => prewitt_extended(extended, direction),
            GradientOperator::Ando3 => ando3_extended(extended, direction),
            GradientOperator::Ando4 => stencil::ando4_extended(extended, direction),
            GradientOperator::Ando5 => stencil::ando5_extended(extended, direction),
            GradientOperator::Scharr => scharr_extended(extended, direction),
            GradientOperator::Bickley => bickley_extended(extended, direction),
        }
    }
}

impl std::fmt::Display for GradientOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for GradientOperator {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradientOperator::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| KernelError::UnknownOperator(s.to_string()))
    }
}
