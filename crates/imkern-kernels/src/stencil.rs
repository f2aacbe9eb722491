//! Ando's consistent gradient operators of size 4x4 and 5x5.
//!
//! These operators are not separable: they are given by the published
//! coefficient matrices of S. Ando, "Consistent gradient operators", IEEE
//! TPAMI 22(3), 2000. The matrices below differentiate along the second axis;
//! the kernel along the first axis is their transpose.

use imkern_factors::FactorError;

use crate::{Kernel, KernelError, KernelPair};

const ANDO4: [[f64; 4]; 4] = [
    [-0.022116, -0.025526, 0.025526, 0.022116],
    [-0.098381, -0.112984, 0.112984, 0.098381],
    [-0.098381, -0.112984, 0.112984, 0.098381],
    [-0.022116, -0.025526, 0.025526, 0.022116],
];

const ANDO5: [[f64; 5]; 5] = [
    [-0.003776, -0.010199, 0.0, 0.010199, 0.003776],
    [-0.026786, -0.070844, 0.0, 0.070844, 0.026786],
    [-0.046548, -0.122572, 0.0, 0.122572, 0.046548],
    [-0.026786, -0.070844, 0.0, 0.070844, 0.026786],
    [-0.003776, -0.010199, 0.0, 0.010199, 0.003776],
];

fn transposed_pair(f: Kernel<2>) -> KernelPair {
    (f.transpose(), f)
}

fn select_extended(
    pair: KernelPair,
    extended: (bool, bool),
    direction: usize,
) -> Result<Kernel<2>, KernelError> {
    if !(extended.0 && extended.1) {
        return Err(KernelError::InvalidArgument(
            "all dimensions must be extended".to_string(),
        ));
    }
    match direction {
        0 => Ok(pair.0),
        1 => Ok(pair.1),
        _ => Err(FactorError::InvalidDirection(direction).into()),
    }
}

/// The 4x4 Ando kernels on `-1..=2` along both axes.
pub fn ando4() -> KernelPair {
    transposed_pair(Kernel::from_rows_centered(ANDO4))
}

/// One kernel of [`ando4`].
///
/// # Errors
///
/// Fails with [`KernelError::InvalidArgument`] unless both axes are extended.
pub fn ando4_extended(extended: (bool, bool), direction: usize) -> Result<Kernel<2>, KernelError> {
    select_extended(ando4(), extended, direction)
}

/// The 5x5 Ando kernels on `-2..=2` along both axes.
pub fn ando5() -> KernelPair {
    transposed_pair(Kernel::from_rows_centered(ANDO5))
}

/// One kernel of [`ando5`].
///
/// # Errors
///
/// Fails with [`KernelError::InvalidArgument`] unless both axes are extended.
pub fn ando5_extended(extended: (bool, bool), direction: usize) -> Result<Kernel<2>, KernelError> {
    select_extended(ando5(), extended, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imkern_array::AxisRange;

    #[test]
    fn ando4_layout() {
        let (diff1, diff2) = ando4();
        assert_eq!(diff2.ranges(), &[AxisRange::new(-1, 2); 2]);
        assert_eq!(diff2[[-1, -1]], -0.022116);
        assert_eq!(diff2[[0, 2]], 0.098381);
        assert_eq!(diff1[[2, 0]], 0.098381);
        assert_eq!(diff1, diff2.transpose());
    }

    #[test]
    fn ando5_layout() {
        let (diff1, diff2) = ando5();
        assert_eq!(diff1.ranges(), &[AxisRange::symmetric(2); 2]);
        assert_eq!(diff2[[0, 1]], 0.122572);
        assert_eq!(diff1[[1, 0]], 0.122572);
        for i in AxisRange::symmetric(2) {
            assert_eq!(diff2[[i, 0]], 0.0);
        }
    }

    #[test]
    fn extended_requires_all_axes() {
        for extended in [(true, false), (false, true), (false, false)] {
            assert_eq!(
                ando4_extended(extended, 0),
                Err(KernelError::InvalidArgument(
                    "all dimensions must be extended".to_string()
                ))
            );
            assert!(matches!(
                ando5_extended(extended, 1),
                Err(KernelError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn extended_selects_direction() -> Result<(), KernelError> {
        let (diff1, diff2) = ando5();
        assert_eq!(ando5_extended((true, true), 0)?, diff1);
        assert_eq!(ando5_extended((true, true), 1)?, diff2);
        assert_eq!(
            ando4_extended((true, true), 2),
            Err(KernelError::FactorError(FactorError::InvalidDirection(2)))
        );
        Ok(())
    }
}
