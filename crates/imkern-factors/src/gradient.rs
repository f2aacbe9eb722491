use crate::{unit_factor, Factor, FactorError, FactorPair};

/// Factor pairs of a 2-D gradient operator.
///
/// The first pair differentiates along the first axis and smooths along the
/// second one; the second pair does the opposite.
pub type GradientFactors = (FactorPair, FactorPair);

/// Central difference shared by every gradient family.
const DERIVATIVE: [f64; 3] = [-0.5, 0.0, 0.5];

const SOBEL_SMOOTHING: [f64; 3] = [0.25, 0.5, 0.25];

const PREWITT_SMOOTHING: [f64; 3] = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];

// Ando (2000), "Consistent gradient operators", 3x3 weights scaled to unit sum
const ANDO3_SMOOTHING: [f64; 3] = [0.225474, 0.549052, 0.225474];

const SCHARR_SMOOTHING: [f64; 3] = [3.0 / 16.0, 10.0 / 16.0, 3.0 / 16.0];

const BICKLEY_SMOOTHING: [f64; 3] = [1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0];

fn gradient_factors(smoothing: [f64; 3]) -> GradientFactors {
    let derivative = Factor::from_vec_centered(DERIVATIVE.to_vec());
    let smoothing = Factor::from_vec_centered(smoothing.to_vec());
    (
        (derivative.clone(), smoothing.clone()),
        (smoothing, derivative),
    )
}

/// Select the factor pair of `direction` and neutralize the non-extended axes.
///
/// # Arguments
///
/// * `factors` - The factor pairs of a gradient family.
/// * `extended` - Whether the first and the second axis have more than one element.
/// * `direction` - 0 for the gradient along the first axis, 1 for the second.
///
/// # Returns
///
/// The factor pair of `direction` where every axis flagged `false` holds the unit factor.
pub fn extend(
    factors: GradientFactors,
    extended: (bool, bool),
    direction: usize,
) -> Result<FactorPair, FactorError> {
    let (first, second) = match direction {
        0 => factors.0,
        1 => factors.1,
        _ => return Err(FactorError::InvalidDirection(direction)),
    };
    Ok((
        if extended.0 { first } else { unit_factor() },
        if extended.1 { second } else { unit_factor() },
    ))
}

/// Factors of the 3x3 Sobel operator: derivative `[-1, 0, 1] / 2`, smoothing `[1, 2, 1] / 4`.
pub fn sobel() -> GradientFactors {
    gradient_factors(SOBEL_SMOOTHING)
}

/// Sobel factors of one direction, restricted to the extended axes.
pub fn sobel_extended(extended: (bool, bool), direction: usize) -> Result<FactorPair, FactorError> {
    extend(sobel(), extended, direction)
}

/// Factors of the 3x3 Prewitt operator: derivative `[-1, 0, 1] / 2`, smoothing `[1, 1, 1] / 3`.
pub fn prewitt() -> GradientFactors {
    gradient_factors(PREWITT_SMOOTHING)
}

/// Prewitt factors of one direction, restricted to the extended axes.
pub fn prewitt_extended(
    extended: (bool, bool),
    direction: usize,
) -> Result<FactorPair, FactorError> {
    extend(prewitt(), extended, direction)
}

/// Factors of Ando's consistent 3x3 gradient operator.
pub fn ando3() -> GradientFactors {
    gradient_factors(ANDO3_SMOOTHING)
}

/// Ando3 factors of one direction, restricted to the extended axes.
pub fn ando3_extended(extended: (bool, bool), direction: usize) -> Result<FactorPair, FactorError> {
    extend(ando3(), extended, direction)
}

/// Factors of the 3x3 Scharr operator: derivative `[-1, 0, 1] / 2`, smoothing `[3, 10, 3] / 16`.
pub fn scharr() -> GradientFactors {
    gradient_factors(SCHARR_SMOOTHING)
}

/// Scharr factors of one direction, restricted to the extended axes.
pub fn scharr_extended(extended: (bool, bool), direction: usize) -> Result<FactorPair, FactorError> {
    extend(scharr(), extended, direction)
}

/// Factors of the 3x3 Bickley operator: derivative `[-1, 0, 1] / 2`, smoothing `[1, 4, 1] / 6`.
pub fn bickley() -> GradientFactors {
    gradient_factors(BICKLEY_SMOOTHING)
}

/// Bickley factors of one direction, restricted to the extended axes.
pub fn bickley_extended(
    extended: (bool, bool),
    direction: usize,
) -> Result<FactorPair, FactorError> {
    extend(bickley(), extended, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use imkern_array::AxisRange;

    #[test]
    fn test_sobel_factors() {
        let ((d1, s1), (s2, d2)) = sobel();
        assert_eq!(d1.as_slice(), &[-0.5, 0.0, 0.5]);
        assert_eq!(s1.as_slice(), &[0.25, 0.5, 0.25]);
        assert_eq!(d1, d2);
        assert_eq!(s1, s2);
        assert_eq!(d1.ranges(), &[AxisRange::symmetric(1)]);
    }

    #[test]
    fn test_smoothing_has_unit_sum() {
        for ((_, smoothing), _) in [sobel(), prewitt(), ando3(), scharr(), bickley()] {
            assert_relative_eq!(smoothing.sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_extended_keeps_flagged_axes() -> Result<(), FactorError> {
        let (first, second) = sobel_extended((true, false), 0)?;
        assert_eq!(first.as_slice(), &[-0.5, 0.0, 0.5]);
        assert_eq!(second, unit_factor());

        let (first, second) = prewitt_extended((false, true), 1)?;
        assert_eq!(first, unit_factor());
        assert_eq!(second.as_slice(), &[-0.5, 0.0, 0.5]);

        let (first, second) = ando3_extended((true, true), 1)?;
        assert_eq!(first.as_slice(), &ANDO3_SMOOTHING);
        assert_eq!(second.as_slice(), &DERIVATIVE);
        Ok(())
    }

    #[test]
    fn test_extended_invalid_direction() {
        assert_eq!(
            scharr_extended((true, true), 2),
            Err(FactorError::InvalidDirection(2))
        );
    }
}
