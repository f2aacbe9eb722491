use imkern_array::AxisRange;

use crate::{unit_factor, Factor, FactorError};

/// Default truncation length of a Gaussian factor: `4 * ceil(sigma) + 1`.
///
/// # Errors
///
/// Fails with [`FactorError::InvalidSigma`] for negative or non-finite sigmas, and
/// with [`FactorError::LengthOverflow`] when the length does not fit in an
/// [`AxisRange`].
///
/// # Example
///
/// ```
/// use imkern_factors::gaussian::default_gaussian_length;
///
/// assert_eq!(default_gaussian_length(1.5).unwrap(), 9);
/// assert!(default_gaussian_length(1e300).is_err());
/// ```
pub fn default_gaussian_length(sigma: f64) -> Result<usize, FactorError> {
    validate_sigma(sigma)?;
    // the float to int cast saturates, the checked ops catch it
    (sigma.ceil() as usize)
        .checked_mul(4)
        .and_then(|l| l.checked_add(1))
        .and_then(|l| AxisRange::checked_symmetric(l >> 1))
        .map(|r| r.len())
        .ok_or(FactorError::LengthOverflow(sigma))
}

fn validate_sigma(sigma: f64) -> Result<(), FactorError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(FactorError::InvalidSigma(sigma));
    }
    Ok(())
}

fn validate(sigma: f64, length: usize) -> Result<(), FactorError> {
    validate_sigma(sigma)?;
    if length % 2 == 0 {
        return Err(FactorError::EvenLength(length));
    }
    if isize::try_from(length).is_err() {
        return Err(FactorError::LengthOverflow(sigma));
    }
    Ok(())
}

// sigma and length already validated
fn sample(sigma: f64, length: usize) -> Factor {
    if sigma == 0.0 {
        return unit_factor();
    }

    let sigma_sq = sigma * sigma;

    // compute the factor
    let factor = Factor::from_ranges_fn([AxisRange::symmetric(length >> 1)], |[x]| {
        let x = x as f64;
        (-(x * x) / (2.0 * sigma_sq)).exp()
    });

    // normalize the factor
    let norm = factor.sum();
    factor.map(|v| v / norm)
}

/// Create a gaussian factor.
///
/// # Arguments
///
/// * `sigma` - The standard deviation of the gaussian.
/// * `length` - The number of samples, must be odd.
///
/// # Returns
///
/// The sampled gaussian on `-(length / 2)..=(length / 2)`, normalized to unit sum.
/// A zero `sigma` gives the unit factor `[1]`.
///
/// # Errors
///
/// Fails with [`FactorError::EvenLength`] for even lengths and with
/// [`FactorError::InvalidSigma`] for negative or non-finite sigmas.
pub fn gaussian(sigma: f64, length: usize) -> Result<Factor, FactorError> {
    validate(sigma, length)?;
    Ok(sample(sigma, length))
}

/// Create a gaussian factor with the [`default_gaussian_length`].
pub fn gaussian_auto(sigma: f64) -> Result<Factor, FactorError> {
    let length = default_gaussian_length(sigma)?;
    Ok(sample(sigma, length))
}

/// Create one gaussian factor per dimension.
///
/// All `(sigma, length)` pairs are validated before any factor is sampled.
pub fn gaussian_nd<const N: usize>(
    sigmas: [f64; N],
    lengths: [usize; N],
) -> Result<[Factor; N], FactorError> {
    for (&sigma, &length) in sigmas.iter().zip(lengths.iter()) {
        validate(sigma, length)?;
    }
    Ok(std::array::from_fn(|d| sample(sigmas[d], lengths[d])))
}

/// Create one gaussian factor per dimension with the default lengths.
pub fn gaussian_nd_auto<const N: usize>(sigmas: [f64; N]) -> Result<[Factor; N], FactorError> {
    let mut lengths = [0; N];
    for (length, &sigma) in lengths.iter_mut().zip(sigmas.iter()) {
        *length = default_gaussian_length(sigma)?;
    }
    gaussian_nd(sigmas, lengths)
}
