use log::debug;

use imkern_factors::gaussian as factors;

use crate::{separable::product, Kernel, KernelError};

fn to_array<T: Copy, const N: usize>(values: &[T]) -> Result<[T; N], KernelError> {
    values.try_into().map_err(|_| KernelError::ArityMismatch {
        expected: N,
        actual: values.len(),
    })
}

/// Create an N-dimensional gaussian kernel.
///
/// # Arguments
///
/// * `sigmas` - The standard deviation along every axis.
/// * `lengths` - The odd number of samples along every axis.
///
/// # Returns
///
/// The outer product of the 1-D gaussian factors. Axis `d` spans
/// `AxisRange::centered(lengths[d])`.
///
/// # Example
///
/// ```
/// use imkern_kernels::gaussian::gaussian;
///
/// let kernel = gaussian([1.0, 2.0], [3, 5]).unwrap();
/// assert_eq!(kernel.shape(), [3, 5]);
/// assert!((kernel.sum() - 1.0).abs() < 1e-12);
/// ```
pub fn gaussian<const N: usize>(
    sigmas: [f64; N],
    lengths: [usize; N],
) -> Result<Kernel<N>, KernelError> {
    debug!("gaussian kernel: sigmas {sigmas:?}, lengths {lengths:?}");
    product(factors::gaussian_nd(sigmas, lengths)?)
}

/// Create an N-dimensional gaussian kernel with the default length on every axis.
///
/// See [`imkern_factors::gaussian::default_gaussian_length`].
pub fn gaussian_auto<const N: usize>(sigmas: [f64; N]) -> Result<Kernel<N>, KernelError> {
    let factors = factors::gaussian_nd_auto(sigmas)?;
    debug!(
        "gaussian kernel: sigmas {sigmas:?}, default lengths {:?}",
        factors.iter().map(|f| f.numel()).collect::<Vec<_>>()
    );
    product(factors)
}

/// Create an isotropic 2-D gaussian kernel.
pub fn gaussian_iso(sigma: f64) -> Result<Kernel<2>, KernelError> {
    gaussian_auto([sigma, sigma])
}

/// Create a gaussian kernel from runtime sequences of sigmas and lengths.
///
/// # Errors
///
/// Fails with [`KernelError::ArityMismatch`] unless every sequence has `N` values.
///
/// # Example
///
/// ```
/// use imkern_kernels::gaussian::gaussian_from_slice;
///
/// let sigmas = vec![1.0, 1.0, 0.5];
/// let kernel = gaussian_from_slice::<3>(&sigmas, None).unwrap();
/// assert_eq!(kernel.shape(), [5, 5, 5]);
/// assert!(gaussian_from_slice::<2>(&sigmas, None).is_err());
/// ```
pub fn gaussian_from_slice<const N: usize>(
    sigmas: &[f64],
    lengths: Option<&[usize]>,
) -> Result<Kernel<N>, KernelError> {
    let sigmas = to_array::<f64, N>(sigmas)?;
    match lengths {
        Some(lengths) => gaussian(sigmas, to_array(lengths)?),
        None => gaussian_auto(sigmas),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use imkern_array::AxisRange;
    use imkern_factors::FactorError;

    #[test]
    fn gaussian_zero_dimensional() -> Result<(), KernelError> {
        let kernel = gaussian::<0>([], [])?;
        assert_eq!(kernel.as_slice(), &[1.0]);
        Ok(())
    }

    #[test]
    fn gaussian_one_dimensional_is_the_factor() -> Result<(), KernelError> {
        let kernel = gaussian([1.5], [7])?;
        assert_eq!(kernel, factors::gaussian(1.5, 7)?);
        Ok(())
    }

    #[test]
    fn gaussian_2d_values() -> Result<(), KernelError> {
        let kernel = gaussian([1.0, 0.5], [5, 5])?;
        let a = factors::gaussian(1.0, 5)?;
        let b = factors::gaussian(0.5, 5)?;
        assert_eq!(kernel.ranges(), &[AxisRange::symmetric(2); 2]);
        for ([i, j], v) in kernel.indexed_iter() {
            assert_relative_eq!(*v, a[[i]] * b[[j]], epsilon = 1e-15);
        }
        assert_relative_eq!(kernel.sum(), 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn gaussian_auto_lengths() -> Result<(), KernelError> {
        let kernel = gaussian_auto([0.8, 2.5, 1.0])?;
        assert_eq!(kernel.shape(), [5, 13, 5]);
        let kernel = gaussian_iso(2.0)?;
        assert_eq!(kernel.ranges(), &[AxisRange::symmetric(4); 2]);
        Ok(())
    }

    #[test]
    fn gaussian_iso_is_symmetric() -> Result<(), KernelError> {
        let kernel = gaussian_iso(1.7)?;
        assert_eq!(kernel.transpose(), kernel);
        Ok(())
    }

    #[test]
    fn gaussian_from_slice_with_lengths() -> Result<(), KernelError> {
        let kernel = gaussian_from_slice::<2>(&[1.0, 1.0], Some(&[3, 9][..]))?;
        assert_eq!(kernel, gaussian([1.0, 1.0], [3, 9])?);
        assert_eq!(
            gaussian_from_slice::<2>(&[1.0, 1.0], Some(&[3][..])),
            Err(KernelError::ArityMismatch {
                expected: 2,
                actual: 1
            })
        );
        Ok(())
    }

    #[test]
    fn gaussian_propagates_factor_errors() {
        assert_eq!(
            gaussian([1.0, 1.0], [3, 4]),
            Err(KernelError::FactorError(FactorError::EvenLength(4)))
        );
    }
}
