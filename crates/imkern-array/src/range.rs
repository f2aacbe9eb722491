use crate::ArrayError;

/// A contiguous range of signed indices along one axis.
///
/// The range is stored as its first index and its length, so an empty range
/// still has a well-defined position. `last()` is inclusive.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AxisRange {
    first: isize,
    len: usize,
}

impl AxisRange {
    /// Creates the inclusive range `first..=last`.
    ///
    /// If `last < first` the range is empty and starts at `first`.
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::AxisRange;
    ///
    /// let r = AxisRange::new(-2, 1);
    /// assert_eq!(r.len(), 4);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![-2, -1, 0, 1]);
    /// ```
    pub fn new(first: isize, last: isize) -> Self {
        let len = if last < first {
            0
        } else {
            (last - first) as usize + 1
        };
        Self { first, len }
    }

    /// Creates the range of `len` indices starting at `first`.
    ///
    /// # Errors
    ///
    /// Fails with [`ArrayError::InvalidRange`] if the range extends past `isize::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::AxisRange;
    ///
    /// assert_eq!(AxisRange::from_first_len(-1, 4).unwrap(), AxisRange::new(-1, 2));
    /// assert!(AxisRange::from_first_len(isize::MAX, 2).is_err());
    /// ```
    pub fn from_first_len(first: isize, len: usize) -> Result<Self, ArrayError> {
        isize::try_from(len)
            .ok()
            .and_then(|l| first.checked_add(l))
            .map(|_| Self { first, len })
            .ok_or(ArrayError::InvalidRange { first, len })
    }

    /// Creates the range `-half_width..=half_width`, or `None` if its length overflows `isize`.
    pub fn checked_symmetric(half_width: usize) -> Option<Self> {
        let len = half_width.checked_mul(2)?.checked_add(1)?;
        isize::try_from(len).ok()?;
        Some(Self {
            first: -(half_width as isize),
            len,
        })
    }

    /// Creates the range `-half_width..=half_width`.
    ///
    /// See [`AxisRange::checked_symmetric`] for half-widths that may not fit.
    pub fn symmetric(half_width: usize) -> Self {
        Self {
            first: -(half_width as isize),
            len: 2 * half_width + 1,
        }
    }

    /// Creates the centered range of the given length.
    ///
    /// Odd lengths give a range symmetric about 0. Even lengths put the extra
    /// element on the positive side, e.g. length 4 gives `-1..=2`.
    ///
    /// # Example
    ///
    /// ```
    /// use imkern_array::AxisRange;
    ///
    /// assert_eq!(AxisRange::centered(5), AxisRange::new(-2, 2));
    /// assert_eq!(AxisRange::centered(4), AxisRange::new(-1, 2));
    /// assert_eq!(AxisRange::centered(1), AxisRange::new(0, 0));
    /// ```
    pub fn centered(len: usize) -> Self {
        Self {
            first: 1 - ((len + 1) >> 1) as isize,
            len,
        }
    }

    /// Creates the range containing only `index`.
    pub fn singleton(index: isize) -> Self {
        Self {
            first: index,
            len: 1,
        }
    }

    /// The first index of the range.
    #[inline]
    pub fn first(&self) -> isize {
        self.first
    }

    /// The last index of the range (inclusive).
    ///
    /// For an empty range this is `first() - 1`.
    #[inline]
    pub fn last(&self) -> isize {
        self.first + self.len as isize - 1
    }

    /// The number of indices in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the range contains no index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the range has exactly one index.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.len == 1
    }

    /// Whether `index` lies in the range.
    #[inline]
    pub fn contains(&self, index: isize) -> bool {
        index >= self.first && index <= self.last()
    }

    /// The zero-based position of `index` inside the range.
    #[inline]
    pub fn position(&self, index: isize) -> Option<usize> {
        if self.contains(index) {
            Some((index - self.first) as usize)
        } else {
            None
        }
    }

    /// Iterates the indices of the range in increasing order.
    pub fn iter(&self) -> std::ops::Range<isize> {
        self.first..self.first + self.len as isize
    }
}

impl std::ops::Neg for AxisRange {
    type Output = AxisRange;

    /// Mirrors the range about index 0: `-(a..=b)` is `-b..=-a`.
    fn neg(self) -> Self::Output {
        Self {
            first: -self.last(),
            len: self.len,
        }
    }
}

impl std::fmt::Debug for AxisRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.first, self.last())
    }
}

impl std::fmt::Display for AxisRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.first, self.last())
    }
}

impl IntoIterator for AxisRange {
    type Item = isize;
    type IntoIter = std::ops::Range<isize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
