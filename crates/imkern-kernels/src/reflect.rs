use imkern_array::CenteredArray;

/// Reflect a kernel through its center.
///
/// The result spans the negated index range on every axis and satisfies
/// `reflect(k)[-I] == k[I]`. Reflecting a correlation kernel gives the
/// equivalent convolution kernel, and reflecting twice gives the kernel back.
///
/// # Example
///
/// ```
/// use imkern_array::{AxisRange, CenteredArray};
/// use imkern_kernels::reflect;
///
/// let k = CenteredArray::from_ranges_vec([AxisRange::new(-1, 2)], vec![1, 2, 3, 4]).unwrap();
/// let r = reflect(&k);
/// assert_eq!(r.ranges(), &[AxisRange::new(-2, 1)]);
/// assert_eq!(r.as_slice(), &[4, 3, 2, 1]);
/// assert_eq!(reflect(&r), k);
/// ```
pub fn reflect<T: Clone, const N: usize>(kernel: &CenteredArray<T, N>) -> CenteredArray<T, N> {
    let ranges = *kernel.ranges();
    CenteredArray::from_ranges_fn(ranges.map(|r| -r), |index| {
        kernel[index.map(|i| -i)].clone()
    })
}

#[cfg(test)]
mod tests {
    use super::reflect;
    use imkern_array::{AxisRange, CenteredArray};

    #[test]
    fn reflect_2d_offset_ranges() {
        let k = CenteredArray::from_ranges_fn(
            [AxisRange::new(-1, 2), AxisRange::new(0, 1)],
            |[i, j]| 10 * i + j,
        );
        let r = reflect(&k);
        assert_eq!(r.ranges(), &[AxisRange::new(-2, 1), AxisRange::new(-1, 0)]);
        for ([i, j], v) in k.indexed_iter() {
            assert_eq!(r[[-i, -j]], *v);
        }
    }

    #[test]
    fn reflect_symmetric_kernel_is_identity() {
        let k = CenteredArray::from_rows_centered([[1, 2, 1], [2, 4, 2], [1, 2, 1]]);
        assert_eq!(reflect(&k), k);
    }

    #[test]
    fn reflect_zero_dimensional() {
        let k = CenteredArray::<f32, 0>::from_ranges_val([], 3.0);
        assert_eq!(reflect(&k), k);
    }
}
