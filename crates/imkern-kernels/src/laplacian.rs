use log::debug;

use imkern_array::{ArrayError, AxisRange, CenteredArray};

use crate::KernelError;

/// The discrete Laplacian over a subset of the axes, stored sparsely.
///
/// Only the positive unit offsets of the active axes are stored: the stencil
/// holds `1` at `I` and `-I` for every offset `I` and `-2 * offsets().len()`
/// at the center. Use [`Laplacian::densify`] to materialize it.
///
/// # Example
///
/// ```
/// use imkern_kernels::laplacian::Laplacian;
///
/// let laplacian = Laplacian::new([true, false, true]);
/// assert_eq!(laplacian.offsets(), &[[1, 0, 0], [0, 0, 1]]);
///
/// let stencil = laplacian.densify();
/// assert_eq!(stencil.shape(), [3, 1, 3]);
/// assert_eq!(stencil[[0, 0, 0]], -4);
/// assert_eq!(stencil[[-1, 0, 0]], 1);
/// assert_eq!(stencil[[1, 0, 1]], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Laplacian<const N: usize> {
    flags: [bool; N],
    offsets: Vec<[isize; N]>,
}

impl<const N: usize> Laplacian<N> {
    /// Create the Laplacian differentiating along the axes flagged `true`.
    pub fn new(flags: [bool; N]) -> Self {
        let offsets = flags
            .iter()
            .enumerate()
            .filter(|&(_, &active)| active)
            .map(|(axis, _)| {
                let mut offset = [0; N];
                offset[axis] = 1;
                offset
            })
            .collect();
        Self { flags, offsets }
    }

    /// Create the Laplacian differentiating along `axes` of an N-dimensional array.
    ///
    /// # Errors
    ///
    /// Fails if an axis is not smaller than `N`.
    pub fn from_axes(axes: &[usize]) -> Result<Self, KernelError> {
        let mut flags = [false; N];
        for &axis in axes {
            if axis >= N {
                return Err(ArrayError::AxisOutOfBounds { axis, ndim: N }.into());
            }
            flags[axis] = true;
        }
        Ok(Self::new(flags))
    }

    /// Which axes participate in the differentiation.
    pub fn flags(&self) -> &[bool; N] {
        &self.flags
    }

    /// The positive unit offset of every active axis, in axis order.
    pub fn offsets(&self) -> &[[isize; N]] {
        &self.offsets
    }

    /// The index range of every axis: `-1..=1` when active, `0..=0` otherwise.
    pub fn ranges(&self) -> [AxisRange; N] {
        self.flags.map(|active| {
            if active {
                AxisRange::symmetric(1)
            } else {
                AxisRange::singleton(0)
            }
        })
    }

    /// Always `false`: even without active axes the Laplacian is a single-element kernel.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Materialize the dense stencil.
    ///
    /// A fresh array is allocated on every call.
    pub fn densify(&self) -> CenteredArray<i32, N> {
        debug!("densify laplacian over axes {:?}", self.flags);
        let mut stencil = CenteredArray::zeros(self.ranges());
        for &offset in &self.offsets {
            stencil[offset] = 1;
            stencil[offset.map(|i| -i)] = 1;
        }
        stencil[[0; N]] = -2 * self.offsets.len() as i32;
        stencil
    }
}

impl Default for Laplacian<2> {
    /// The 2-D Laplacian over both axes.
    fn default() -> Self {
        Self::new([true, true])
    }
}

impl<const N: usize> From<&Laplacian<N>> for CenteredArray<i32, N> {
    fn from(laplacian: &Laplacian<N>) -> Self {
        laplacian.densify()
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Laplacian<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Laplacian", 1)?;
        state.serialize_field("flags", &self.flags.to_vec())?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Laplacian<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct LaplacianData {
            flags: Vec<bool>,
        }

        let LaplacianData { flags } = LaplacianData::deserialize(deserializer)?;
        let flags: [bool; N] = flags
            .try_into()
            .map_err(|_| serde::de::Error::custom("Invalid number of flags"))?;
        Ok(Laplacian::new(flags))
    }
}
