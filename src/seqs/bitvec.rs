#![cfg(feature = "bitvec")]
//! Bit containers from the `bitvec` crate, viewed as sequences of `bool`.
//!
//! A `BitSlice` cannot hand out `&mut bool`, which is why [`SequenceMut`] writes
//! by index and value rather than through references.

use bitvec::prelude::{BitOrder, BitSlice, BitStore, BitVec};

use super::{Sequence, SequenceMut};

impl<S: BitStore, O: BitOrder> Sequence<bool> for BitSlice<S, O> {
    #[inline(always)]
    fn len(&self) -> usize {
        BitSlice::len(self)
    }

    fn values(&self) -> impl Iterator<Item = bool> {
        self.iter().by_vals()
    }
}

impl<S: BitStore, O: BitOrder> SequenceMut<bool> for BitSlice<S, O> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: bool) {
        BitSlice::set(self, index, value);
    }
}

impl<S: BitStore, O: BitOrder> Sequence<bool> for BitVec<S, O> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.as_bitslice().len()
    }

    fn values(&self) -> impl Iterator<Item = bool> {
        self.as_bitslice().iter().by_vals()
    }
}

impl<S: BitStore, O: BitOrder> SequenceMut<bool> for BitVec<S, O> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: bool) {
        self.as_mut_bitslice().set(index, value);
    }
}
