//! Shape type: dimensions of a sample

use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Stack allocation threshold for dimensions
const STACK_DIMS: usize = 4;

/// Dimensions of a sample
///
/// Fixtures are almost always 1-D, so up to four dimensions are stored inline.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// One-dimensional shape of `len` elements
    pub fn vector(len: usize) -> Self {
        Self(smallvec::smallvec![len])
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of elements described by this shape
    ///
    /// A zero-dimensional shape describes a single scalar.
    #[inline]
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }

    /// Element count of `dims`, or `None` if it overflows `usize`
    pub fn checked_numel(dims: &[usize]) -> Option<usize> {
        dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numel() {
        assert_eq!(Shape::vector(200).numel(), 200);
        assert_eq!(Shape::from([4, 50]).numel(), 200);
        assert_eq!(Shape::from([3, 0]).numel(), 0);
        assert_eq!(Shape::from(&[][..]).numel(), 1);
    }

    #[test]
    fn test_checked_numel() {
        assert_eq!(Shape::checked_numel(&[4, 50]), Some(200));
        assert_eq!(Shape::checked_numel(&[]), Some(1));
        assert_eq!(Shape::checked_numel(&[0, usize::MAX, 2]), Some(0));
        assert_eq!(Shape::checked_numel(&[usize::MAX, 2]), None);
    }

    #[test]
    fn test_slice_view() {
        let shape = Shape::from([2, 3, 4]);
        assert_eq!(shape.len(), 3);
        assert_eq!(&shape[..], &[2, 3, 4]);
        assert_eq!(format!("{shape:?}"), "[2, 3, 4]");
    }
}
