use num_traits::Zero;

use crate::{error::ArrayError, range::AxisRange, CenteredArray1, CenteredArray2};

/// Compute the row-major strides of an array with the given ranges.
///
/// # Example
///
/// ```
/// use imkern_array::{array::get_strides_from_ranges, AxisRange};
///
/// let strides = get_strides_from_ranges(&[AxisRange::symmetric(1), AxisRange::centered(4)]);
/// assert_eq!(strides, [4, 1]);
/// ```
pub fn get_strides_from_ranges<const N: usize>(ranges: &[AxisRange; N]) -> [usize; N] {
    let mut strides = [0; N];
    let mut stride = 1;
    for i in (0..N).rev() {
        strides[i] = stride;
        stride *= ranges[i].len();
    }
    strides
}

fn numel_of<const N: usize>(ranges: &[AxisRange; N]) -> Option<usize> {
    ranges
        .iter()
        .try_fold(1usize, |numel, range| numel.checked_mul(range.len()))
}

/// Row-major iterator over every index of a set of ranges.
///
/// The last axis varies fastest, which matches the storage order of
/// [`CenteredArray`]. A zero-dimensional set of ranges yields exactly one
/// (empty) index; ranges containing an empty axis yield nothing.
#[derive(Debug, Clone)]
pub struct Indices<const N: usize> {
    ranges: [AxisRange; N],
    next: Option<[isize; N]>,
}

impl<const N: usize> Indices<N> {
    /// Iterate the indices of `ranges`.
    pub fn new(ranges: [AxisRange; N]) -> Self {
        let next = if ranges.iter().any(AxisRange::is_empty) {
            None
        } else {
            Some(ranges.map(|r| r.first()))
        };
        Self { ranges, next }
    }
}

impl<const N: usize> Iterator for Indices<N> {
    type Item = [isize; N];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let mut index = current;
        let mut axis = N;
        self.next = loop {
            if axis == 0 {
                break None;
            }
            axis -= 1;
            if index[axis] < self.ranges[axis].last() {
                index[axis] += 1;
                break Some(index);
            }
            index[axis] = self.ranges[axis].first();
        };

        Some(current)
    }
}

/// A dense N-dimensional array addressed with signed, per-axis index ranges.
///
/// Elements are stored contiguously in row-major order. Index `[i_0, .., i_{N-1}]`
/// is valid when every `i_k` lies in `ranges()[k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteredArray<T, const N: usize> {
    data: Vec<T>,
    ranges: [AxisRange; N],
    strides: [usize; N],
}

impl<T, const N: usize> CenteredArray<T, N> {
    /// Creates a new array with the given ranges and row-major data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the ranges, an error is returned.
    /// Ranges holding more than `usize::MAX` elements are rejected with
    /// [`ArrayError::TooManyElements`].
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::{AxisRange, CenteredArray};
    ///
    /// let a = CenteredArray::from_ranges_vec(
    ///     [AxisRange::new(-1, 0), AxisRange::new(0, 1)],
    ///     vec![1, 2, 3, 4],
    /// )
    /// .unwrap();
    /// assert_eq!(a[[-1, 1]], 2);
    /// assert_eq!(a[[0, 0]], 3);
    /// ```
    pub fn from_ranges_vec(ranges: [AxisRange; N], data: Vec<T>) -> Result<Self, ArrayError> {
        let numel = numel_of(&ranges).ok_or_else(|| ArrayError::TooManyElements {
            ranges: format!("{ranges:?}"),
        })?;
        if numel != data.len() {
            return Err(ArrayError::invalid_shape(numel, data.len()));
        }
        let strides = get_strides_from_ranges(&ranges);
        Ok(Self {
            data,
            ranges,
            strides,
        })
    }

    /// Creates a new array over `ranges` filled with `value`.
    ///
    /// # Panics
    ///
    /// Like `vec!`, if the number of elements cannot be allocated.
    pub fn from_ranges_val(ranges: [AxisRange; N], value: T) -> Self
    where
        T: Clone,
    {
        let data = vec![value; numel_of(&ranges).unwrap_or(usize::MAX)];
        let strides = get_strides_from_ranges(&ranges);
        Self {
            data,
            ranges,
            strides,
        }
    }

    /// Creates a new zero-filled array over `ranges`.
    pub fn zeros(ranges: [AxisRange; N]) -> Self
    where
        T: Clone + Zero,
    {
        Self::from_ranges_val(ranges, T::zero())
    }

    /// Creates a new array over `ranges` by evaluating `f` at every index.
    ///
    /// `f` is called in storage order.
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::{AxisRange, CenteredArray};
    ///
    /// let a = CenteredArray::from_ranges_fn([AxisRange::symmetric(2)], |[x]| x * x);
    /// assert_eq!(a.as_slice(), &[4, 1, 0, 1, 4]);
    /// ```
    pub fn from_ranges_fn<F>(ranges: [AxisRange; N], f: F) -> Self
    where
        F: FnMut([isize; N]) -> T,
    {
        let data = Indices::new(ranges).map(f).collect();
        let strides = get_strides_from_ranges(&ranges);
        Self {
            data,
            ranges,
            strides,
        }
    }

    /// Creates a new array of the given shape with [`AxisRange::centered`] ranges.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape, an error is returned.
    pub fn from_shape_vec_centered(shape: [usize; N], data: Vec<T>) -> Result<Self, ArrayError> {
        Self::from_ranges_vec(shape.map(AxisRange::centered), data)
    }

    /// The index range of every axis.
    #[inline]
    pub fn ranges(&self) -> &[AxisRange; N] {
        &self.ranges
    }

    /// The number of elements along every axis.
    #[inline]
    pub fn shape(&self) -> [usize; N] {
        self.ranges.map(|r| r.len())
    }

    /// The row-major strides of the storage.
    #[inline]
    pub fn strides(&self) -> [usize; N] {
        self.strides
    }

    /// The number of elements of the array.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the storage offset of `index`, or `None` when it lies outside the ranges.
    pub fn get_offset(&self, index: [isize; N]) -> Option<usize> {
        let mut offset = 0;
        for ((&idx, range), stride) in index.iter().zip(self.ranges.iter()).zip(self.strides) {
            offset += range.position(idx)? * stride;
        }
        Some(offset)
    }

    /// Get a reference to the element at `index`.
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::CenteredArray;
    ///
    /// let a = CenteredArray::from_vec_centered(vec![1, 2, 3]);
    /// assert_eq!(a.get([1]), Some(&3));
    /// assert_eq!(a.get([2]), None);
    /// ```
    pub fn get(&self, index: [isize; N]) -> Option<&T> {
        self.get_offset(index).map(|offset| &self.data[offset])
    }

    /// Get a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: [isize; N]) -> Option<&mut T> {
        self.get_offset(index).map(|offset| &mut self.data[offset])
    }

    /// The elements in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the array and returns its elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates the elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates every valid index in storage order.
    pub fn indices(&self) -> Indices<N> {
        Indices::new(self.ranges)
    }

    /// Iterates `(index, element)` pairs in storage order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ([isize; N], &T)> + '_ {
        self.indices().zip(self.data.iter())
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T
    where
        T: Clone + std::iter::Sum,
    {
        self.data.iter().cloned().sum()
    }

    /// Apply a function to each element of the array.
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::CenteredArray;
    ///
    /// let a = CenteredArray::from_vec_centered(vec![1, 2, 3]);
    /// let b = a.map(|x| *x as f64 / 2.0);
    /// assert_eq!(b.as_slice(), &[0.5, 1.0, 1.5]);
    /// assert_eq!(b.ranges(), a.ranges());
    /// ```
    pub fn map<U, F>(&self, f: F) -> CenteredArray<U, N>
    where
        F: Fn(&T) -> U,
    {
        CenteredArray {
            data: self.data.iter().map(f).collect(),
            ranges: self.ranges,
            strides: self.strides,
        }
    }

    /// Apply a binary operation to the elements of two arrays with identical ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::RangeMismatch`] if the ranges differ on any axis.
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::CenteredArray;
    ///
    /// let a = CenteredArray::from_vec_centered(vec![3, 4, 5]);
    /// let b = CenteredArray::from_vec_centered(vec![1, 1, 2]);
    /// let c = a.element_wise_op(&b, |x, y| x - y).unwrap();
    /// assert_eq!(c.as_slice(), &[2, 3, 3]);
    /// ```
    pub fn element_wise_op<U, F>(
        &self,
        other: &CenteredArray<T, N>,
        op: F,
    ) -> Result<CenteredArray<U, N>, ArrayError>
    where
        F: Fn(&T, &T) -> U,
    {
        if self.ranges != other.ranges {
            return Err(ArrayError::range_mismatch(
                "Element-wise operations require identical ranges",
                &self.ranges,
                &other.ranges,
            ));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| op(a, b))
            .collect();

        Ok(CenteredArray {
            data,
            ranges: self.ranges,
            strides: self.strides,
        })
    }

    /// Apply a binary operation with broadcasting of singleton axes.
    ///
    /// Along every axis the two ranges must either be equal, or one of them
    /// must hold a single index; a singleton axis is repeated over the other
    /// operand's range.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::RangeMismatch`] if an axis cannot be broadcast.
    pub fn broadcast_op<U, F>(
        &self,
        other: &CenteredArray<T, N>,
        op: F,
    ) -> Result<CenteredArray<U, N>, ArrayError>
    where
        F: Fn(&T, &T) -> U,
    {
        let mut ranges = self.ranges;
        for (range, (&lhs, &rhs)) in ranges
            .iter_mut()
            .zip(self.ranges.iter().zip(other.ranges.iter()))
        {
            *range = if lhs == rhs || rhs.is_singleton() {
                lhs
            } else if lhs.is_singleton() {
                rhs
            } else {
                return Err(ArrayError::range_mismatch(
                    "Broadcasting requires equal ranges or a singleton axis",
                    &self.ranges,
                    &other.ranges,
                ));
            };
        }

        let data = Indices::new(ranges)
            .map(|index| {
                let a = &self.data[self.broadcast_offset(index)];
                let b = &other.data[other.broadcast_offset(index)];
                op(a, b)
            })
            .collect();

        Ok(CenteredArray {
            data,
            ranges,
            strides: get_strides_from_ranges(&ranges),
        })
    }

    // singleton axes always resolve to their only element
    fn broadcast_offset(&self, index: [isize; N]) -> usize {
        index
            .iter()
            .zip(self.ranges.iter())
            .zip(self.strides)
            .map(|((&idx, range), stride)| {
                if range.is_singleton() {
                    0
                } else {
                    (idx - range.first()) as usize * stride
                }
            })
            .sum()
    }

    /// Reorder the axes: axis `k` of the result is axis `axes[k]` of `self`.
    ///
    /// # Errors
    ///
    /// Fails if an axis is out of bounds or appears more than once.
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::{AxisRange, CenteredArray};
    ///
    /// let a = CenteredArray::from_ranges_fn(
    ///     [AxisRange::symmetric(1), AxisRange::symmetric(2), AxisRange::singleton(0)],
    ///     |[i, j, _]| 10 * i + j,
    /// );
    /// let b = a.permute_axes([1, 2, 0]).unwrap();
    /// assert_eq!(b.shape(), [5, 1, 3]);
    /// assert_eq!(b[[2, 0, -1]], a[[-1, 2, 0]]);
    /// ```
    pub fn permute_axes(&self, axes: [usize; N]) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut seen = [false; N];
        for &axis in axes.iter() {
            if axis >= N {
                return Err(ArrayError::AxisOutOfBounds { axis, ndim: N });
            }
            if seen[axis] {
                return Err(ArrayError::InvalidPermutation {
                    axes: format!("{axes:?}"),
                });
            }
            seen[axis] = true;
        }

        let ranges = axes.map(|axis| self.ranges[axis]);
        Ok(Self::from_ranges_fn(ranges, |index| {
            let mut source = [0; N];
            for (&idx, &axis) in index.iter().zip(axes.iter()) {
                source[axis] = idx;
            }
            self[source].clone()
        }))
    }
}

impl<T> CenteredArray1<T> {
    /// Creates a 1-D array on [`AxisRange::centered`] of the data length.
    pub fn from_vec_centered(data: Vec<T>) -> Self {
        let ranges = [AxisRange::centered(data.len())];
        Self {
            data,
            ranges,
            strides: [1],
        }
    }

    /// Lay the 1-D array along `axis` of an `M`-dimensional array.
    ///
    /// Every other axis of the result is the singleton range `0..=0`, so the
    /// result broadcasts against arrays laid along the remaining axes.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AxisOutOfBounds`] if `axis >= M`.
    pub fn along_axis<const M: usize>(self, axis: usize) -> Result<CenteredArray<T, M>, ArrayError> {
        if axis >= M {
            return Err(ArrayError::AxisOutOfBounds { axis, ndim: M });
        }
        let mut ranges = [AxisRange::singleton(0); M];
        ranges[axis] = self.ranges[0];
        CenteredArray::from_ranges_vec(ranges, self.data)
    }
}

impl<T> CenteredArray2<T> {
    /// Creates a 2-D array from a literal row-major matrix, centered on both axes.
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::{AxisRange, CenteredArray};
    ///
    /// let a = CenteredArray::from_rows_centered([[1, 2, 3, 4], [5, 6, 7, 8]]);
    /// assert_eq!(a.ranges(), &[AxisRange::new(0, 1), AxisRange::new(-1, 2)]);
    /// assert_eq!(a[[1, -1]], 5);
    /// ```
    pub fn from_rows_centered<const R: usize, const C: usize>(rows: [[T; C]; R]) -> Self {
        let ranges = [AxisRange::centered(R), AxisRange::centered(C)];
        Self {
            data: rows.into_iter().flatten().collect(),
            ranges,
            strides: [C, 1],
        }
    }

    /// Swap the two axes.
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        let [rows, cols] = self.ranges;
        Self::from_ranges_fn([cols, rows], |[i, j]| self[[j, i]].clone())
    }
}

impl<T, const N: usize> std::ops::Index<[isize; N]> for CenteredArray<T, N> {
    type Output = T;

    /// # Panics
    ///
    /// If `index` lies outside the ranges of the array.
    fn index(&self, index: [isize; N]) -> &Self::Output {
        match self.get_offset(index) {
            Some(offset) => &self.data[offset],
            None => panic!("index {index:?} out of ranges {:?}", self.ranges),
        }
    }
}

impl<T, const N: usize> std::ops::IndexMut<[isize; N]> for CenteredArray<T, N> {
    /// # Panics
    ///
    /// If `index` lies outside the ranges of the array.
    fn index_mut(&mut self, index: [isize; N]) -> &mut Self::Output {
        match self.get_offset(index) {
            Some(offset) => &mut self.data[offset],
            None => panic!("index {index:?} out of ranges {:?}", self.ranges),
        }
    }
}
