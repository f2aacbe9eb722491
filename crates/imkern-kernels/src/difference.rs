use std::f64::consts::{PI, SQRT_2};

use log::debug;

use imkern_array::AxisRange;

use crate::{
    gaussian::{gaussian, gaussian_auto},
    Kernel, KernelError,
};

/// Create a difference-of-gaussian kernel `gaussian(sigma_plus) - gaussian(sigma_minus)`.
///
/// # Arguments
///
/// * `sigma_plus` - The standard deviations of the positive (narrow) gaussian.
/// * `sigma_minus` - The standard deviations of the negative (wide) gaussian.
/// * `lengths` - The odd number of samples along every axis, shared by both gaussians.
pub fn difference_of_gaussian<const N: usize>(
    sigma_plus: [f64; N],
    sigma_minus: [f64; N],
    lengths: [usize; N],
) -> Result<Kernel<N>, KernelError> {
    let plus = gaussian(sigma_plus, lengths)?;
    let minus = gaussian(sigma_minus, lengths)?;
    Ok(plus.element_wise_op(&minus, |p, m| p - m)?)
}

/// Create a difference-of-gaussian kernel with `sigma_minus = sqrt(2) * sigma_plus`.
///
/// The support is the default support of the wide gaussian, which is also
/// used to sample the narrow one.
///
/// # Example
///
/// ```
/// use imkern_kernels::difference::difference_of_gaussian_auto;
///
/// let kernel = difference_of_gaussian_auto([1.0, 1.0]).unwrap();
/// assert_eq!(kernel.shape(), [9, 9]);
/// assert!(kernel[[0, 0]] > 0.0);
/// assert!(kernel.sum().abs() < 1e-12);
/// ```
pub fn difference_of_gaussian_auto<const N: usize>(
    sigma_plus: [f64; N],
) -> Result<Kernel<N>, KernelError> {
    let sigma_minus = sigma_plus.map(|s| s * SQRT_2);
    let minus = gaussian_auto(sigma_minus)?;
    let lengths = minus.shape();
    debug!("DoG kernel: sigmas {sigma_plus:?} / {sigma_minus:?}, lengths {lengths:?}");
    let plus = gaussian(sigma_plus, lengths)?;
    Ok(plus.element_wise_op(&minus, |p, m| p - m)?)
}

/// Create an isotropic 2-D difference-of-gaussian kernel.
pub fn difference_of_gaussian_iso(sigma: f64) -> Result<Kernel<2>, KernelError> {
    difference_of_gaussian_auto([sigma, sigma])
}

/// Create a laplacian-of-gaussian kernel.
///
/// The kernel is evaluated in closed form on `-w_d..=w_d` along every
/// axis, with `w_d = ceil(8.5 * sigma_d) / 2` rounded down.
///
/// # Arguments
///
/// * `sigmas` - The standard deviation along every axis.
///
/// # Errors
///
/// Fails with [`KernelError::InvalidSigma`] if a sigma is not finite and strictly positive,
/// and with [`KernelError::LengthOverflow`] if the support does not fit in an index range.
///
/// # Example
///
/// ```
/// use imkern_kernels::difference::laplacian_of_gaussian;
///
/// let kernel = laplacian_of_gaussian([1.0, 1.0]).unwrap();
/// assert_eq!(kernel.shape(), [9, 9]);
/// assert!((kernel[[0, 0]] + std::f64::consts::FRAC_1_PI).abs() < 1e-12);
/// ```
pub fn laplacian_of_gaussian<const N: usize>(
    sigmas: [f64; N],
) -> Result<Kernel<N>, KernelError> {
    if let Some(&sigma) = sigmas.iter().find(|s| !s.is_finite() || **s <= 0.0) {
        return Err(KernelError::InvalidSigma(sigma));
    }

    let mut ranges = [AxisRange::singleton(0); N];
    let mut numel = 1usize;
    for (range, &sigma) in ranges.iter_mut().zip(sigmas.iter()) {
        let overflow = KernelError::LengthOverflow(sigma);
        *range = AxisRange::checked_symmetric(((8.5 * sigma).ceil() as usize) >> 1)
            .ok_or(overflow.clone())?;
        numel = numel.checked_mul(range.len()).ok_or(overflow)?;
    }
    debug!("LoG kernel: sigmas {sigmas:?}, ranges {ranges:?}");

    let norm = 1.0 / (sigmas.iter().product::<f64>() * (2.0 * PI).powf(N as f64 / 2.0));
    let sigmas_sq = sigmas.map(|s| s * s);
    let inv_sigmas_sq_sum = sigmas_sq.iter().map(|s2| 1.0 / s2).sum::<f64>();

    Ok(Kernel::<N>::from_ranges_fn(ranges, |index| {
        let mut curvature = 0.0;
        let mut exponent = 0.0;
        for (&x, &s2) in index.iter().zip(sigmas_sq.iter()) {
            let x = x as f64;
            let x_sigma = x * x / s2;
            curvature += x_sigma / s2;
            exponent += x_sigma;
        }
        norm * (curvature - inv_sigmas_sq_sum) * (-exponent / 2.0).exp()
    }))
}

/// Create an isotropic 2-D laplacian-of-gaussian kernel.
pub fn laplacian_of_gaussian_iso(sigma: f64) -> Result<Kernel<2>, KernelError> {
    laplacian_of_gaussian([sigma, sigma])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use imkern_factors::FactorError;

    #[test]
    fn dog_is_difference_of_gaussians() -> Result<(), KernelError> {
        let kernel = difference_of_gaussian([1.0, 2.0], [1.5, 3.0], [7, 9])?;
        let plus = gaussian([1.0, 2.0], [7, 9])?;
        let minus = gaussian([1.5, 3.0], [7, 9])?;
        for (index, v) in kernel.indexed_iter() {
            assert_eq!(*v, plus[index] - minus[index]);
        }
        Ok(())
    }

    #[test]
    fn dog_auto_wide_gaussian_sets_support() -> Result<(), KernelError> {
        // sigma_minus = 0.7 * sqrt(2) ~ 0.99 keeps the default length of 5,
        // while 1.0 * sqrt(2) would need 9
        let kernel = difference_of_gaussian_auto([0.7])?;
        assert_eq!(kernel.shape(), [5]);
        let kernel = difference_of_gaussian_iso(1.0)?;
        assert_eq!(kernel.shape(), [9, 9]);
        Ok(())
    }

    #[test]
    fn dog_is_band_pass() -> Result<(), KernelError> {
        let kernel = difference_of_gaussian_iso(1.5)?;
        assert_relative_eq!(kernel.sum(), 0.0, epsilon = 1e-12);
        assert!(kernel[[0, 0]] > 0.0);
        let [rows, cols] = *kernel.ranges();
        assert!(kernel[[rows.last(), cols.last()]] < 0.0);
        Ok(())
    }

    #[test]
    fn log_support() -> Result<(), KernelError> {
        assert_eq!(
            laplacian_of_gaussian([1.0, 1.0])?.ranges(),
            &[AxisRange::symmetric(4); 2]
        );
        assert_eq!(
            laplacian_of_gaussian([2.0])?.ranges(),
            &[AxisRange::symmetric(8)]
        );
        assert_eq!(
            laplacian_of_gaussian([1.5, 3.0])?.ranges(),
            &[AxisRange::symmetric(6), AxisRange::symmetric(13)]
        );
        Ok(())
    }

    #[test]
    fn log_values() -> Result<(), KernelError> {
        let kernel = laplacian_of_gaussian_iso(1.0)?;
        let c = 1.0 / (2.0 * PI);
        assert_relative_eq!(kernel[[0, 0]], -2.0 * c, epsilon = 1e-12);
        assert_relative_eq!(kernel[[1, 0]], c * (1.0 - 2.0) * (-0.5f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(kernel[[2, 1]], c * (5.0 - 2.0) * (-2.5f64).exp(), epsilon = 1e-12);
        assert_eq!(kernel.transpose(), kernel);
        Ok(())
    }

    #[test]
    fn log_anisotropic_value() -> Result<(), KernelError> {
        let (s1, s2) = (1.0f64, 2.0f64);
        let kernel = laplacian_of_gaussian([s1, s2])?;
        let c = 1.0 / (s1 * s2 * 2.0 * PI);
        let (x, y) = (1.0f64, 3.0f64);
        let expected = c
            * (x * x / s1.powi(4) + y * y / s2.powi(4) - 1.0 / (s1 * s1) - 1.0 / (s2 * s2))
            * (-(x * x / (2.0 * s1 * s1) + y * y / (2.0 * s2 * s2))).exp();
        assert_relative_eq!(kernel[[1, 3]], expected, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn huge_sigma_overflows_support() {
        assert!(matches!(
            difference_of_gaussian_iso(1e300),
            Err(KernelError::FactorError(FactorError::LengthOverflow(_)))
        ));
        assert_eq!(
            laplacian_of_gaussian([1.0, 1e300]),
            Err(KernelError::LengthOverflow(1e300))
        );
        // each axis fits, their product does not
        let sigma = (1u64 << 34) as f64;
        assert_eq!(
            laplacian_of_gaussian([sigma, sigma]),
            Err(KernelError::LengthOverflow(sigma))
        );
    }

    #[test]
    fn log_invalid_sigma() {
        assert_eq!(
            laplacian_of_gaussian([1.0, 0.0]),
            Err(KernelError::InvalidSigma(0.0))
        );
        assert_eq!(
            laplacian_of_gaussian([-2.0]),
            Err(KernelError::InvalidSigma(-2.0))
        );
    }
}
