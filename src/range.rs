use crate::error::InvalidRangeError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp;
use std::fmt;
use std::ops::RangeInclusive;

/// A closed range `[start, end]`.
///
/// Ranges order by `start`, then by `end`, which is the key the tree is
/// sorted on. Two ranges are equal iff both endpoints are equal.
///
/// The fields are public, so a `Range` may hold `start > end`; such a
/// range is rejected by [`Range::validate`], which every tree operation
/// calls first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawRange<K>",
        bound(deserialize = "K: Ord + serde::Deserialize<'de>")
    )
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range<K> {
    /// The lower bound of the range (inclusive).
    pub start: K,
    /// The upper bound of the range (inclusive).
    pub end: K,
}

/// Shorthand to construct a `Range` without validating it.
///
/// ```
/// let r = range_tree::range(1, 5);
/// assert_eq!(r.to_string(), "(1, 5)");
/// ```
pub fn range<K>(start: K, end: K) -> Range<K> {
    Range { start, end }
}

impl<K: Ord> Range<K> {
    /// Builds a range, failing if `start > end`.
    ///
    /// ```
    /// use range_tree::{InvalidRangeError, Range};
    ///
    /// assert!(Range::new(1, 1).is_ok());
    /// assert_eq!(Range::new(2, 1), Err(InvalidRangeError::StartAfterEnd));
    /// ```
    pub fn new(start: K, end: K) -> Result<Self, InvalidRangeError> {
        let range = Range { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Builds a range out of endpoints that may be absent.
    ///
    /// ```
    /// use range_tree::{InvalidRangeError, Range};
    ///
    /// assert_eq!(Range::from_bounds(Some(1), None), Err(InvalidRangeError::MissingBound));
    /// assert_eq!(Range::from_bounds(Some(1), Some(3)), Ok(range_tree::range(1, 3)));
    /// ```
    pub fn from_bounds(start: Option<K>, end: Option<K>) -> Result<Self, InvalidRangeError> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(InvalidRangeError::MissingBound),
        }
    }

    pub fn validate(&self) -> Result<(), InvalidRangeError> {
        if self.start > self.end {
            return Err(InvalidRangeError::StartAfterEnd);
        }
        Ok(())
    }

    /// Returns true if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Range<K>) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Returns true if the two ranges share at least one point.
    pub fn overlaps(&self, other: &Range<K>) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

impl<K: Ord + Clone> Range<K> {
    /// The smallest range containing both `self` and `other`.
    ///
    /// This is the union of the two ranges only when they overlap.
    pub fn merge(&self, other: &Range<K>) -> Range<K> {
        Range {
            start: cmp::min(&self.start, &other.start).clone(),
            end: cmp::max(&self.end, &other.end).clone(),
        }
    }
}

impl<K: fmt::Display> fmt::Display for Range<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// Unvalidated mirror of [`Range`], used to route deserialization through
/// [`Range::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub struct RawRange<K> {
    start: K,
    end: K,
}

#[cfg(feature = "serde")]
impl<K: Ord> TryFrom<RawRange<K>> for Range<K> {
    type Error = InvalidRangeError;

    fn try_from(raw: RawRange<K>) -> Result<Self, Self::Error> {
        Range::new(raw.start, raw.end)
    }
}

impl<K: Ord> TryFrom<(K, K)> for Range<K> {
    type Error = InvalidRangeError;

    fn try_from((start, end): (K, K)) -> Result<Self, Self::Error> {
        Range::new(start, end)
    }
}

impl<K: Ord> TryFrom<RangeInclusive<K>> for Range<K> {
    type Error = InvalidRangeError;

    fn try_from(range: RangeInclusive<K>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Range::new(start, end)
    }
}

impl<K> From<Range<K>> for RangeInclusive<K> {
    fn from(range: Range<K>) -> Self {
        range.start..=range.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(range(5, 15).to_string(), "(5, 15)");
        assert_eq!(range("a", "b").to_string(), "(a, b)");
    }

    #[test]
    fn ordering() {
        let r1 = range(10, 25);
        let r2 = range(15, 25);
        let r3 = range(15, 30);
        let r4 = range(35, 40);

        assert!(r1 < r2 && r2 > r1);
        assert!(r1 < r3 && r3 > r1);
        assert!(r2 < r3 && r3 > r2);
        assert!(r1 < r4 && r4 > r1);
        assert_eq!(r1.cmp(&r1), cmp::Ordering::Equal);
        assert_eq!(r1, range(10, 25));
    }

    #[test]
    fn containment() {
        let r1 = range(20, 25);
        let r2 = range(15, 25);
        let r3 = range(20, 30);
        let r4 = range(15, 30);
        let r5 = range(30, 40);

        assert!(r1.contains(&r1));
        assert!(r2.contains(&r1));
        assert!(r3.contains(&r1));
        assert!(r4.contains(&r1));

        assert!(!r1.contains(&r2));
        assert!(!r1.contains(&r3));
        assert!(!r1.contains(&r4));
        assert!(!r2.contains(&r3));
        assert!(!r1.contains(&r5));
        assert!(!r5.contains(&r1));
    }

    #[test]
    fn overlap() {
        let r1 = range(20, 25);
        let r2 = range(15, 25);
        let r3 = range(20, 30);
        let r4 = range(15, 30);
        let r5 = range(30, 40);

        assert!(r1.overlaps(&r1));
        assert!(r1.overlaps(&r2) && r2.overlaps(&r1));
        assert!(r1.overlaps(&r3) && r3.overlaps(&r1));
        assert!(r1.overlaps(&r4) && r4.overlaps(&r1));
        assert!(r2.overlaps(&r3));
        // Touching endpoints share a point.
        assert!(r3.overlaps(&r5));

        assert!(!r1.overlaps(&r5));
        assert!(!r5.overlaps(&r1));
    }

    #[test]
    fn merging() {
        assert_eq!(range(1, 7).merge(&range(5, 12)), range(1, 12));
        assert_eq!(range(5, 12).merge(&range(1, 7)), range(1, 12));
        assert_eq!(range(1, 20).merge(&range(5, 12)), range(1, 20));
    }

    #[test]
    fn validation() {
        assert_eq!(Range::new(1, 10), Ok(range(1, 10)));
        assert_eq!(Range::new(3, 3), Ok(range(3, 3)));
        assert_eq!(Range::new(10, 1), Err(InvalidRangeError::StartAfterEnd));
        assert_eq!(range(10, 1).validate(), Err(InvalidRangeError::StartAfterEnd));

        assert_eq!(
            Range::<i32>::from_bounds(None, Some(1)),
            Err(InvalidRangeError::MissingBound)
        );
        assert_eq!(
            Range::<i32>::from_bounds(None, None),
            Err(InvalidRangeError::MissingBound)
        );
        assert_eq!(
            Range::from_bounds(Some(4), Some(2)),
            Err(InvalidRangeError::StartAfterEnd)
        );
    }

    #[test]
    fn conversions() {
        assert_eq!(Range::try_from(2..=9), Ok(range(2, 9)));
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 9..=2;
        assert_eq!(Range::try_from(reversed), Err(InvalidRangeError::StartAfterEnd));
        assert_eq!(Range::try_from((4, 4)), Ok(range(4, 4)));
        assert_eq!(RangeInclusive::from(range(1, 3)), 1..=3);
    }
}
