//! Double-ended shapes: `VecDeque` and `heapless::Deque`.
//!
//! Both are ring buffers, so their elements are generally split across two
//! slices.  Reads go through the deque's own iterator, which walks the ring in
//! logical (front-to-back) order; writes use logical indices.

use std::collections::VecDeque;

use super::{Sequence, SequenceMut};

impl<T> Sequence<T> for VecDeque<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn values(&self) -> impl Iterator<Item = T>
    where
        T: Clone,
    {
        self.iter().cloned()
    }
}

impl<T> SequenceMut<T> for VecDeque<T> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }
}

impl<T, const M: usize> Sequence<T> for heapless::Deque<T, M> {
    #[inline(always)]
    fn len(&self) -> usize {
        heapless::Deque::len(self)
    }

    fn values(&self) -> impl Iterator<Item = T>
    where
        T: Clone,
    {
        self.iter().cloned()
    }
}

impl<T, const M: usize> SequenceMut<T> for heapless::Deque<T, M> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        *self.get_mut(index).expect("index out of bounds") = value;
    }
}
