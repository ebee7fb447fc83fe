//! Contiguous shapes: slices, fixed arrays, `Vec` and `heapless::Vec`.
//!
//! All of them are viewed through their slice, so `set` panics on an
//! out-of-range index exactly like `slice[index] = value` does.

use super::{Sequence, SequenceMut};

impl<T> Sequence<T> for [T] {
    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn values(&self) -> impl Iterator<Item = T>
    where
        T: Clone,
    {
        self.iter().cloned()
    }
}

impl<T> SequenceMut<T> for [T] {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T, const N: usize> Sequence<T> for [T; N] {
    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    fn values(&self) -> impl Iterator<Item = T>
    where
        T: Clone,
    {
        self.iter().cloned()
    }
}

impl<T, const N: usize> SequenceMut<T> for [T; N] {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T> Sequence<T> for Vec<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn values(&self) -> impl Iterator<Item = T>
    where
        T: Clone,
    {
        self.iter().cloned()
    }
}

impl<T> SequenceMut<T> for Vec<T> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self.as_mut_slice()[index] = value;
    }
}

/// `heapless::Vec` lives entirely on the stack; the conversions below never push
/// to it, so its fixed capacity `M` is irrelevant here.
impl<T, const M: usize> Sequence<T> for heapless::Vec<T, M> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn values(&self) -> impl Iterator<Item = T>
    where
        T: Clone,
    {
        self.as_slice().iter().cloned()
    }
}

impl<T, const M: usize> SequenceMut<T> for heapless::Vec<T, M> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self.as_mut_slice()[index] = value;
    }
}
