//! Shape-agnostic views over ordered, indexable containers.
//!
//! The conversion helpers in [`crate::convert`] never name a concrete container.
//! They read through [`Sequence`] and write through [`SequenceMut`], which are
//! implemented for:
//!
//! | Shape | Types |
//! |-------|-------|
//! | fixed array | `[T; N]` |
//! | variable array | `[T]`, `Vec<T>`, `heapless::Vec<T, M>` |
//! | deque list | `VecDeque<T>`, `heapless::Deque<T, M>` |
//! | bits (`bitvec` feature) | `BitSlice<S, O>`, `BitVec<S, O>` with `T = bool` |
//!
//! Neither trait can grow or shrink a container: `SequenceMut` only overwrites
//! elements that already exist.

pub mod deque;
pub mod vec;

#[cfg(feature = "bitvec")]
pub mod bitvec;

/// A read-only view of an ordered sequence of `T`.
pub trait Sequence<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Yields owned copies of the elements in ascending index order.
    fn values(&self) -> impl Iterator<Item = T>
    where
        T: Clone;
}

/// A sequence whose existing elements can be overwritten in place.
pub trait SequenceMut<T>: Sequence<T> {
    /// Overwrites the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`, like slice indexing.
    fn set(&mut self, index: usize, value: T);
}
