use imkern_array::AxisRange;
use imkern_factors::{gradient::GradientFactors, Factor};

use crate::{Kernel, KernelError, KernelPair};

/// Compute the N-way outer product of 1-D factors.
///
/// Factor `d` is laid along axis `d` and the factors are multiplied with
/// broadcasting, so the result has the index range of factor `d` on axis `d`.
///
/// # Arguments
///
/// * `factors` - One factor per dimension.
///
/// # Returns
///
/// The separable kernel. A zero-dimensional kernel holds the single value `1`,
/// a one-dimensional kernel is the factor itself.
///
/// # Errors
///
/// Propagates the broadcasting error of the array.
///
/// # Example
///
/// ```
/// use imkern_factors::Factor;
/// use imkern_kernels::separable::product;
///
/// let a = Factor::from_vec_centered(vec![1.0, 2.0, 1.0]);
/// let b = Factor::from_vec_centered(vec![-1.0, 0.0, 1.0]);
/// let kernel = product([a, b]).unwrap();
/// assert_eq!(kernel[[0, 1]], 2.0);
/// assert_eq!(kernel[[-1, -1]], -1.0);
/// ```
pub fn product<const N: usize>(factors: [Factor; N]) -> Result<Kernel<N>, KernelError> {
    let mut factors = factors.into_iter().enumerate();

    let Some((_, first)) = factors.next() else {
        return Ok(Kernel::<N>::from_ranges_val([AxisRange::singleton(0); N], 1.0));
    };

    let mut kernel = first.along_axis::<N>(0)?;
    for (axis, factor) in factors {
        kernel = kernel.broadcast_op(&factor.along_axis::<N>(axis)?, |a, b| a * b)?;
    }

    Ok(kernel)
}

/// Compute the outer product `first ⊗ second` of two 1-D factors.
pub fn outer(first: Factor, second: Factor) -> Result<Kernel<2>, KernelError> {
    product([first, second])
}

/// Assemble the two kernels of a 2-D gradient operator from its factor pairs.
///
/// # Arguments
///
/// * `factors` - The factor pairs differentiating along the first and the second axis.
///
/// # Returns
///
/// The kernel pair `(diff along first axis, diff along second axis)`.
pub fn assemble(factors: GradientFactors) -> Result<KernelPair, KernelError> {
    let ((a1, b1), (a2, b2)) = factors;
    Ok((outer(a1, b1)?, outer(a2, b2)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_zero_dimensional() -> Result<(), KernelError> {
        let kernel = product::<0>([])?;
        assert_eq!(kernel.numel(), 1);
        assert_eq!(kernel[[]], 1.0);
        Ok(())
    }

    #[test]
    fn product_one_dimensional_is_the_factor() -> Result<(), KernelError> {
        let factor = Factor::from_vec_centered(vec![0.25, 0.5, 0.25]);
        let kernel = product([factor.clone()])?;
        assert_eq!(kernel, factor);
        Ok(())
    }

    #[test]
    fn product_three_dimensional() -> Result<(), KernelError> {
        let a = Factor::from_vec_centered(vec![1.0, 2.0, 3.0]);
        let b = Factor::from_vec_centered(vec![1.0, 10.0]);
        let c = Factor::from_vec_centered(vec![1.0, 100.0, 1.0, 0.5, 2.0]);
        let kernel = product([a, b, c])?;
        assert_eq!(kernel.shape(), [3, 2, 5]);
        assert_eq!(
            kernel.ranges(),
            &[
                AxisRange::symmetric(1),
                AxisRange::new(0, 1),
                AxisRange::symmetric(2)
            ]
        );
        assert_eq!(kernel[[1, 1, -1]], 3.0 * 10.0 * 100.0);
        assert_eq!(kernel[[-1, 0, 2]], 2.0);
        Ok(())
    }

    #[test]
    fn outer_matches_elementwise_definition() -> Result<(), KernelError> {
        let a = Factor::from_vec_centered(vec![1.0, 2.0, 1.0]);
        let b = Factor::from_vec_centered(vec![-1.0, 0.0, 1.0]);
        let kernel = outer(a.clone(), b.clone())?;
        for ([i, j], v) in kernel.indexed_iter() {
            assert_eq!(*v, a[[i]] * b[[j]]);
        }
        Ok(())
    }
}
