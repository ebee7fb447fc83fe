//! Conversions between fixed arrays, variable arrays and deques.
//!
//! Every conversion funnels into [`transfer`], which walks the source in
//! ascending index order and writes each element either at the same index or,
//! with `reverse`, at the mirrored index of the destination:
//!
//! ```text
//! count = min(src.len, dst.len)
//! for i in 0..count:
//!     j = reverse ? dst.len - 1 - i : i
//!     dst[j] = src[i]
//! ```
//!
//! The first `count` source elements are the ones copied, whatever the
//! direction.  Surplus source elements are ignored; destination slots with no
//! source element keep their value (`T::default()` for the `from_*` variants).
//!
//! | Shape pair | Fresh value | In place |
//! |------------|-------------|----------|
//! | variable → fixed | [`from_vec`] | [`copy_vec_into`] |
//! | fixed → variable | [`to_vec`] | [`copy_into_vec`] |
//! | deque → fixed | [`from_deque`] | [`copy_deque_into`] |
//! | fixed → deque | [`to_deque`] | [`copy_into_deque`] |
//! | any → fixed | [`from_seq`] | [`copy_seq_into`] |
//! | fixed → any | | [`copy_into_seq`] |

use std::collections::VecDeque;

use crate::SeqError;
use crate::seqs::{Sequence, SequenceMut};

#[inline(always)]
fn target_index(i: usize, dst_len: usize, reverse: bool) -> usize {
    if reverse { dst_len - 1 - i } else { i }
}

/// Copies `min(src.len(), dst.len())` elements from `src` into `dst` and returns
/// how many were copied.  Never resizes `dst`.
pub fn transfer<T, S, D>(src: &S, dst: &mut D, reverse: bool) -> usize
where
    T: Clone,
    S: Sequence<T> + ?Sized,
    D: SequenceMut<T> + ?Sized,
{
    let src_len = src.len();
    let dst_len = dst.len();
    let count = src_len.min(dst_len);
    if src_len > dst_len {
        log::trace!("transfer: truncating source of {src_len} to {dst_len} elements");
    } else if src_len < dst_len {
        log::trace!(
            "transfer: source of {src_len} leaves {} of {dst_len} slots untouched",
            dst_len - src_len
        );
    }
    for (i, value) in src.values().take(count).enumerate() {
        dst.set(target_index(i, dst_len, reverse), value);
    }
    count
}

/// Builds a fixed array from any sequence, padding with `T::default()` and
/// dropping source elements past `N`.
pub fn from_seq<T, S, const N: usize>(src: &S, reverse: bool) -> [T; N]
where
    T: Clone + Default,
    S: Sequence<T> + ?Sized,
{
    let mut out: [T; N] = core::array::from_fn(|_| T::default());
    transfer(src, &mut out, reverse);
    out
}

/// Overwrites the first `min(N, src.len())` mapped slots of `dst`.
pub fn copy_seq_into<T, S, const N: usize>(src: &S, dst: &mut [T; N], reverse: bool)
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    transfer(src, dst, reverse);
}

/// Writes all `N` elements of `src` into an existing destination.
///
/// The destination must already hold at least `N` elements; it is never grown.
/// With `reverse`, element `i` lands at `dst.len() - 1 - i`, so a destination
/// longer than `N` is filled from its end.
///
/// # Errors
/// [`SeqError::DestinationTooShort`] if `dst.len() < N`.  `dst` is left
/// untouched in that case.
pub fn copy_into_seq<T, D, const N: usize>(
    src: &[T; N],
    dst: &mut D,
    reverse: bool,
) -> Result<(), SeqError>
where
    T: Clone,
    D: SequenceMut<T> + ?Sized,
{
    let actual = dst.len();
    if actual < N {
        log::debug!("copy_into_seq: destination holds {actual} elements, {N} required");
        return Err(SeqError::DestinationTooShort { required: N, actual });
    }
    transfer(src, dst, reverse);
    Ok(())
}

// ─── variable array ──────────────────────────────────────────────────────────

/// Builds a fixed array from a variable-length one.
///
/// ```rust
/// let arr: [u8; 4] = seq_convert::convert::from_vec(&[1, 2], false);
/// assert_eq!(arr, [1, 2, 0, 0]);
/// let arr: [u8; 4] = seq_convert::convert::from_vec(&[1, 2], true);
/// assert_eq!(arr, [0, 0, 2, 1]);
/// ```
pub fn from_vec<T: Clone + Default, const N: usize>(src: &[T], reverse: bool) -> [T; N] {
    from_seq(src, reverse)
}

/// Returns a new `Vec` of exactly `N` elements.
pub fn to_vec<T: Clone, const N: usize>(src: &[T; N], reverse: bool) -> Vec<T> {
    let mut out = src.to_vec();
    transfer(src, &mut out, reverse);
    out
}

/// Overwrites `dst` from a variable-length source; see [`copy_seq_into`].
pub fn copy_vec_into<T: Clone, const N: usize>(src: &[T], dst: &mut [T; N], reverse: bool) {
    copy_seq_into(src, dst, reverse);
}

/// See [`copy_into_seq`].
pub fn copy_into_vec<T: Clone, const N: usize>(
    src: &[T; N],
    dst: &mut [T],
    reverse: bool,
) -> Result<(), SeqError> {
    copy_into_seq(src, dst, reverse)
}

// ─── deque list ──────────────────────────────────────────────────────────────

/// Builds a fixed array from a deque, padding and truncating like [`from_vec`].
pub fn from_deque<T: Clone + Default, const N: usize>(
    src: &VecDeque<T>,
    reverse: bool,
) -> [T; N] {
    from_seq(src, reverse)
}

/// Returns a new `VecDeque` of exactly `N` elements.
pub fn to_deque<T: Clone, const N: usize>(src: &[T; N], reverse: bool) -> VecDeque<T> {
    let mut out: VecDeque<T> = src.iter().cloned().collect();
    transfer(src, &mut out, reverse);
    out
}

/// Overwrites `dst` from a deque; see [`copy_seq_into`].
pub fn copy_deque_into<T: Clone, const N: usize>(
    src: &VecDeque<T>,
    dst: &mut [T; N],
    reverse: bool,
) {
    copy_seq_into(src, dst, reverse);
}

/// See [`copy_into_seq`].
pub fn copy_into_deque<T: Clone, const N: usize>(
    src: &[T; N],
    dst: &mut VecDeque<T>,
    reverse: bool,
) -> Result<(), SeqError> {
    copy_into_seq(src, dst, reverse)
}
