//! In-place initialization, reversal, ranged comparison and formatting of fixed
//! arrays.
//!
//! Comparison and formatting come in two flavours: a default one driven by a
//! trait bound (`PartialEq`, `Display`) and a `*_by` / `*_with` one taking a
//! caller-supplied closure.

use core::fmt;
use std::collections::VecDeque;

use crate::SeqError;
use crate::convert;
use crate::seqs::{Sequence, SequenceMut};
use crate::utils::span::Span;

/// Sets every element of `dst` to `value`.
#[inline]
pub fn fill<T: Clone, const N: usize>(dst: &mut [T; N], value: T) {
    dst.fill(value);
}

/// Reverses the element order of `arr`.
#[inline]
pub fn reverse_in_place<T, const N: usize>(arr: &mut [T; N]) {
    arr.reverse();
}

/// Compares `a[span_a]` with `b[span_b]` element by element using `==`.
///
/// Spans are closed and may use negative indices (see [`Span`]).  Spans of
/// different lengths compare unequal without looking at the elements.
///
/// ```rust
/// use seq_convert::array::compare;
///
/// let a = [0, 0, 0, 1, 1, 0, 1, 1];
/// let b = [1, 1, 0, 1, 1, 0, 0, 0];
/// assert_eq!(compare(&a, &b, 0..=7, 0..=7), Ok(false));
/// assert_eq!(compare(&a, &b, 2..=5, 2..=5), Ok(true));
/// assert_eq!(compare(&a, &b, 0..=3, 0..=4), Ok(false));
/// ```
///
/// # Errors
/// Any span error from [`Span::resolve`]; out-of-bounds and inverted spans are
/// rejected before the lengths are compared.
pub fn compare<T: PartialEq, const N: usize, const M: usize>(
    a: &[T; N],
    b: &[T; M],
    span_a: impl Into<Span>,
    span_b: impl Into<Span>,
) -> Result<bool, SeqError> {
    compare_by(a, b, span_a, span_b, |x, y| x == y)
}

/// Like [`compare`], with a caller-supplied equality predicate.
///
/// Stops at the first pair for which `cmp` returns `false`.
pub fn compare_by<T, U, F, const N: usize, const M: usize>(
    a: &[T; N],
    b: &[U; M],
    span_a: impl Into<Span>,
    span_b: impl Into<Span>,
    mut cmp: F,
) -> Result<bool, SeqError>
where
    F: FnMut(&T, &U) -> bool,
{
    let range_a = span_a.into().resolve(N)?;
    let range_b = span_b.into().resolve(M)?;
    if range_a.len() != range_b.len() {
        return Ok(false);
    }
    Ok(a[range_a]
        .iter()
        .zip(&b[range_b])
        .all(|(x, y)| cmp(x, y)))
}

// ─── formatting ──────────────────────────────────────────────────────────────

/// Lazily formats a slice as its elements joined by a separator.
///
/// Returned by [`joined`]; nothing is allocated until it is written somewhere.
#[derive(Clone, Copy)]
pub struct Joined<'a, T> {
    items: &'a [T],
    separator: &'a str,
}

impl<T: fmt::Display> fmt::Display for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.items.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for item in iter {
                f.write_str(self.separator)?;
                write!(f, "{item}")?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Debug for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Joined({:?})", self.to_string())
    }
}

/// Returns a [`Joined`] view of `arr` for use with `write!` or `format!`.
pub fn joined<'a, T, const N: usize>(arr: &'a [T; N], separator: &'a str) -> Joined<'a, T> {
    Joined {
        items: arr.as_slice(),
        separator,
    }
}

/// Renders `arr` with each element's `Display` form, joined by `separator`.
///
/// ```rust
/// assert_eq!(seq_convert::array::join(&[0, 0, 0, 1, 1, 0, 1, 1], " "), "0 0 0 1 1 0 1 1");
/// ```
pub fn join<T: fmt::Display, const N: usize>(arr: &[T; N], separator: &str) -> String {
    joined(arr, separator).to_string()
}

/// Renders `arr` with `formatter`, joined by `separator`.
pub fn join_with<T, F, const N: usize>(arr: &[T; N], separator: &str, mut formatter: F) -> String
where
    F: FnMut(&T) -> String,
{
    let mut out = String::new();
    for (i, item) in arr.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&formatter(item));
    }
    out
}

// ─── ArrayExt ────────────────────────────────────────────────────────────────

/// Method-call syntax for the free functions of this crate on `[T; N]`.
///
/// Reversal is left to the inherent `reverse`.
pub trait ArrayExt<T, const N: usize> {
    /// See [`fill`].
    fn fill_with_value(&mut self, value: T)
    where
        T: Clone;

    /// See [`convert::to_vec`].
    fn to_vec_ordered(&self, reverse: bool) -> Vec<T>
    where
        T: Clone;

    /// See [`convert::to_deque`].
    fn to_deque_ordered(&self, reverse: bool) -> VecDeque<T>
    where
        T: Clone;

    /// See [`convert::copy_seq_into`].
    fn copy_from_seq<S: Sequence<T> + ?Sized>(&mut self, src: &S, reverse: bool)
    where
        T: Clone;

    /// See [`convert::copy_into_seq`].
    fn copy_into_seq<D: SequenceMut<T> + ?Sized>(
        &self,
        dst: &mut D,
        reverse: bool,
    ) -> Result<(), SeqError>
    where
        T: Clone;

    /// See [`compare`].
    fn compare_span(
        &self,
        other: &[T; N],
        span_self: impl Into<Span>,
        span_other: impl Into<Span>,
    ) -> Result<bool, SeqError>
    where
        T: PartialEq;

    /// See [`join`].
    fn join_by(&self, separator: &str) -> String
    where
        T: fmt::Display;

    /// See [`joined`].
    fn joined<'a>(&'a self, separator: &'a str) -> Joined<'a, T>;
}

impl<T, const N: usize> ArrayExt<T, N> for [T; N] {
    fn fill_with_value(&mut self, value: T)
    where
        T: Clone,
    {
        fill(self, value);
    }

    fn to_vec_ordered(&self, reverse: bool) -> Vec<T>
    where
        T: Clone,
    {
        convert::to_vec(self, reverse)
    }

    fn to_deque_ordered(&self, reverse: bool) -> VecDeque<T>
    where
        T: Clone,
    {
        convert::to_deque(self, reverse)
    }

    fn copy_from_seq<S: Sequence<T> + ?Sized>(&mut self, src: &S, reverse: bool)
    where
        T: Clone,
    {
        convert::copy_seq_into(src, self, reverse);
    }

    fn copy_into_seq<D: SequenceMut<T> + ?Sized>(
        &self,
        dst: &mut D,
        reverse: bool,
    ) -> Result<(), SeqError>
    where
        T: Clone,
    {
        convert::copy_into_seq(self, dst, reverse)
    }

    fn compare_span(
        &self,
        other: &[T; N],
        span_self: impl Into<Span>,
        span_other: impl Into<Span>,
    ) -> Result<bool, SeqError>
    where
        T: PartialEq,
    {
        compare(self, other, span_self, span_other)
    }

    fn join_by(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        join(self, separator)
    }

    fn joined<'a>(&'a self, separator: &'a str) -> Joined<'a, T> {
        joined(self, separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [u8; 8] = [0, 0, 0, 1, 1, 0, 1, 1];
    const B: [u8; 8] = [1, 1, 0, 1, 1, 0, 0, 0];

    // ─── fill / reverse ──────────────────────────────────────────────────────
    #[test]
    fn test_array_fill_overwrites_everything() {
        let mut arr = A;
        fill(&mut arr, 1);
        assert_eq!(arr, [1; 8]);

        let mut words = [String::from("x"), String::new()];
        fill(&mut words, String::from("y"));
        assert_eq!(words, [String::from("y"), String::from("y")]);
    }

    #[test]
    fn test_array_reverse_in_place() {
        let mut arr = A;
        reverse_in_place(&mut arr);
        assert_eq!(arr, B);
    }

    #[test]
    fn test_array_double_reverse_is_identity() {
        let mut arr = [3, 1, 4, 1, 5, 9, 2];
        reverse_in_place(&mut arr);
        reverse_in_place(&mut arr);
        assert_eq!(arr, [3, 1, 4, 1, 5, 9, 2]);

        let mut empty: [u8; 0] = [];
        reverse_in_place(&mut empty);
    }

    // ─── compare ─────────────────────────────────────────────────────────────
    #[test]
    fn test_array_compare_full_range_is_equality() {
        assert_eq!(compare(&A, &B, 0..=7, 0..=7), Ok(false));
        assert_eq!(compare(&A, &A, 0..=7, 0..=7), Ok(true));
        assert_eq!(compare(&A, &A, Span::FULL, Span::FULL), Ok(true));
    }

    #[test]
    fn test_array_compare_sub_range() {
        assert_eq!(compare(&A, &B, 2..=5, 2..=5), Ok(true));
        assert_eq!(compare(&A, &B, 3..=4, 0..=1), Ok(true));
    }

    #[test]
    fn test_array_compare_negative_equals_positive() {
        assert_eq!(
            compare(&A, &B, -8..=-1, -8..=-1),
            compare(&A, &B, 0..=7, 0..=7)
        );
        assert_eq!(compare(&A, &B, -6..=-3, 2..=5), Ok(true));
    }

    #[test]
    fn test_array_compare_length_mismatch_is_false() {
        // identical content, different lengths
        assert_eq!(compare(&A, &A, 0..=3, 0..=4), Ok(false));
        assert_eq!(compare(&[7; 4], &[7; 4], 0..=0, 0..=1), Ok(false));
    }

    #[test]
    fn test_array_compare_different_array_sizes() {
        let short = [1, 1];
        assert_eq!(compare(&B, &short, 0..=1, Span::FULL), Ok(true));
    }

    #[test]
    fn test_array_compare_rejects_bad_spans() {
        assert_eq!(
            compare(&A, &B, 0..=8, 0..=7),
            Err(SeqError::IndexOutOfBounds { index: 8, len: 8 })
        );
        assert_eq!(
            compare(&A, &B, 0..=7, 5..=2),
            Err(SeqError::InvertedRange { from: 5, to: 2 })
        );
    }

    #[test]
    fn test_array_compare_by_custom_predicate() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [1.05f64, 1.95, 3.01];
        assert_eq!(
            compare_by(&a, &b, Span::FULL, Span::FULL, |x, y| (x - y).abs() < 0.1),
            Ok(true)
        );
        assert_eq!(compare_by(&a, &b, Span::FULL, Span::FULL, |x, y| x == y), Ok(false));
    }

    #[test]
    fn test_array_compare_by_stops_at_first_mismatch() {
        let mut calls = 0;
        let result = compare_by(&[1, 2, 3, 4], &[1, 9, 3, 4], Span::FULL, Span::FULL, |x, y| {
            calls += 1;
            x == y
        });
        assert_eq!(result, Ok(false));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_array_compare_by_mixed_types() {
        let names = ["0", "1", "1"];
        assert_eq!(
            compare_by(&A, &names, 2..=4, Span::FULL, |n, s| n.to_string() == *s),
            Ok(true)
        );
    }

    // ─── formatting ──────────────────────────────────────────────────────────
    #[test]
    fn test_array_join_default_formatter() {
        assert_eq!(join(&A, " "), "0 0 0 1 1 0 1 1");
        assert_eq!(join(&[1, 2, 3], ", "), "1, 2, 3");
        assert_eq!(join(&[42], "-"), "42");
        let empty: [i32; 0] = [];
        assert_eq!(join(&empty, " "), "");
    }

    #[test]
    fn test_array_join_with_custom_formatter() {
        let bits = [false, true, true];
        assert_eq!(
            join_with(&bits, "", |b| if *b { "1".into() } else { "0".into() }),
            "011"
        );
        assert_eq!(join_with(&[10, 255], ":", |n| format!("{n:02x}")), "0a:ff");
    }

    #[test]
    fn test_array_joined_writes_lazily() {
        use core::fmt::Write;
        let mut out = String::from("bits=");
        write!(out, "{}", joined(&A, "")).unwrap();
        assert_eq!(out, "bits=00011011");
        assert_eq!(format!("{:?}", joined(&[1, 2], "+")), "Joined(\"1+2\")");
    }

    // ─── ArrayExt ────────────────────────────────────────────────────────────
    #[test]
    fn test_array_ext_methods() {
        assert_eq!(A.to_vec_ordered(true), B.to_vec());
        assert_eq!(A.to_deque_ordered(false), VecDeque::from(A));
        assert_eq!(A.compare_span(&B, 2..=5, 2..=5), Ok(true));
        assert_eq!(A.joined(",").to_string(), "0,0,0,1,1,0,1,1");

        let mut arr = [0u8; 8];
        arr.copy_from_seq(&VecDeque::from(B), true);
        assert_eq!(arr, A);

        let mut dst = vec![0u8; 8];
        arr.copy_into_seq(&mut dst, false).unwrap();
        assert_eq!(dst, A.to_vec());
    }

    #[test]
    fn test_array_ext_fill_and_join() {
        let mut arr = [0u8; 3];
        arr.fill_with_value(1);
        assert_eq!(arr, [1, 1, 1]);
        assert_eq!(arr.join_by(" "), "1 1 1");
        assert_eq!(A.join_by(" "), join(&A, " "));

        let mut words = [String::new(), String::from("x")];
        words.fill_with_value(String::from("ab"));
        assert_eq!(words.join_by("-"), "ab-ab");
    }
}
