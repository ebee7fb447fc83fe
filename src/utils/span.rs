//! Closed index ranges that may count from the end of an array.

use core::ops::{Range, RangeInclusive};

use crate::SeqError;

/// A closed range `[from, to]` over a fixed-length array.
///
/// Negative indices count from the end: `-1` is the last element and `-k` is the
/// `k`-th element from the end.  Both bounds are resolved against the array
/// length *before* any length or bounds check.
///
/// ```rust
/// use seq_convert::Span;
///
/// assert_eq!(Span::new(-4, -1).resolve(8), Ok(4..8));
/// assert_eq!(Span::FULL.resolve(3), Ok(0..3));
/// assert!(Span::new(5, 2).resolve(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub from: isize,
    pub to: isize,
}

impl Span {
    /// The whole array, `[0, -1]`.
    pub const FULL: Span = Span { from: 0, to: -1 };

    /// Creates the closed span `[from, to]`.
    pub const fn new(from: isize, to: isize) -> Self {
        Self { from, to }
    }

    /// Resolves the span against an array of `len` elements.
    ///
    /// Returns the half-open range of positions it covers, so the result can be
    /// used directly to slice the array.
    ///
    /// # Errors
    /// - [`SeqError::IndexOutOfBounds`] if either bound lands outside `[0, len)`.
    ///   On an empty array every span is out of bounds.
    /// - [`SeqError::InvertedRange`] if the resolved `from` is after `to`.
    pub fn resolve(self, len: usize) -> Result<Range<usize>, SeqError> {
        let from = resolve_index(self.from, len)?;
        let to = resolve_index(self.to, len)?;
        if from > to {
            return Err(SeqError::InvertedRange { from, to });
        }
        Ok(from..to + 1)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<RangeInclusive<isize>> for Span {
    fn from(range: RangeInclusive<isize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<(isize, isize)> for Span {
    fn from((from, to): (isize, isize)) -> Self {
        Self::new(from, to)
    }
}

/// Maps a possibly negative index onto `[0, len)`.
#[inline]
pub fn resolve_index(index: isize, len: usize) -> Result<usize, SeqError> {
    let resolved = if index < 0 {
        len.checked_add_signed(index)
    } else {
        Some(index as usize)
    };
    match resolved {
        Some(i) if i < len => Ok(i),
        _ => Err(SeqError::IndexOutOfBounds { index, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── index resolution ────────────────────────────────────────────────────
    #[test]
    fn test_span_index_positive_passthrough() {
        assert_eq!(resolve_index(0, 8), Ok(0));
        assert_eq!(resolve_index(7, 8), Ok(7));
    }

    #[test]
    fn test_span_index_negative_counts_from_end() {
        assert_eq!(resolve_index(-1, 8), Ok(7));
        assert_eq!(resolve_index(-8, 8), Ok(0));
    }

    #[test]
    fn test_span_index_out_of_bounds() {
        assert_eq!(
            resolve_index(8, 8),
            Err(SeqError::IndexOutOfBounds { index: 8, len: 8 })
        );
        assert_eq!(
            resolve_index(-9, 8),
            Err(SeqError::IndexOutOfBounds { index: -9, len: 8 })
        );
        assert!(resolve_index(isize::MIN, 8).is_err());
        assert!(resolve_index(0, 0).is_err());
    }

    // ─── span resolution ─────────────────────────────────────────────────────
    #[test]
    fn test_span_resolve_full() {
        assert_eq!(Span::FULL.resolve(8), Ok(0..8));
        assert_eq!(Span::default(), Span::FULL);
    }

    #[test]
    fn test_span_resolve_negative_equals_positive() {
        assert_eq!(Span::new(-8, -1).resolve(8), Span::new(0, 7).resolve(8));
        assert_eq!(Span::new(2, -3).resolve(8), Ok(2..6));
    }

    #[test]
    fn test_span_resolve_single_element() {
        assert_eq!(Span::new(3, 3).resolve(8), Ok(3..4));
        assert_eq!(Span::new(-1, -1).resolve(1), Ok(0..1));
    }

    #[test]
    fn test_span_resolve_inverted() {
        assert_eq!(
            Span::new(5, 2).resolve(8),
            Err(SeqError::InvertedRange { from: 5, to: 2 })
        );
        assert_eq!(
            Span::new(-1, 0).resolve(8),
            Err(SeqError::InvertedRange { from: 7, to: 0 })
        );
    }

    #[test]
    fn test_span_resolve_empty_array() {
        assert!(Span::FULL.resolve(0).is_err());
    }

    #[test]
    fn test_span_conversions() {
        assert_eq!(Span::from(1..=4), Span::new(1, 4));
        assert_eq!(Span::from((-3, -1)), Span::new(-3, -1));
    }
}
