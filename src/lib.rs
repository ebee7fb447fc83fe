//! # Seq Convert
//!
//! Conversions between the three sequence shapes Rust code juggles most: the
//! fixed array `[T; N]`, the variable array `Vec<T>` and the double-ended
//! `VecDeque<T>`, plus in-place fill, reversal, ranged comparison and string
//! rendering of fixed arrays.
//!
//! ## Key Features
//!
//! * **One copy routine:** every conversion goes through [`convert::transfer`],
//!   so truncation, padding and reversal behave identically for all shapes.
//! * **Never resizes:** "into" conversions only overwrite existing elements; a
//!   destination that is too short is reported as [`SeqError::DestinationTooShort`].
//! * **Pluggable shapes:** [`Sequence`] / [`SequenceMut`] are implemented for
//!   slices, `Vec`, `VecDeque`, `heapless::Vec`, `heapless::Deque` and (with the
//!   `bitvec` feature) `bitvec` bit containers.
//! * **Negative indices:** [`Span`] ranges count from the end with `-1`.
//!
//! ## Reverse semantics
//!
//! With `reverse = false`, source index `i` maps to destination index `i`.
//! With `reverse = true`, it maps to `dst.len() - 1 - i`.  The copy always takes
//! the *first* `min(src.len(), dst.len())` source elements.
//!
//! ## Examples
//!
//! ### Conversions
//!
//! ```rust
//! use std::collections::VecDeque;
//! use seq_convert::convert;
//!
//! let bits: [u8; 8] = [0, 0, 0, 1, 1, 0, 1, 1];
//!
//! assert_eq!(convert::to_vec(&bits, false), vec![0, 0, 0, 1, 1, 0, 1, 1]);
//! assert_eq!(convert::to_vec(&bits, true), vec![1, 1, 0, 1, 1, 0, 0, 0]);
//!
//! // Short sources are padded with `T::default()`, long ones truncated.
//! let padded: [u8; 4] = convert::from_vec(&[7, 8], false);
//! assert_eq!(padded, [7, 8, 0, 0]);
//!
//! let deque: VecDeque<u8> = convert::to_deque(&bits, false);
//! let back: [u8; 8] = convert::from_deque(&deque, false);
//! assert_eq!(back, bits);
//! ```
//!
//! ### In-place copies
//!
//! ```rust
//! use seq_convert::{SeqError, convert};
//!
//! let mut dst = vec![0; 5];
//! convert::copy_into_vec(&[1, 2, 3], &mut dst, true).unwrap();
//! assert_eq!(dst, vec![0, 0, 3, 2, 1]);
//!
//! let mut short = vec![0; 2];
//! assert_eq!(
//!     convert::copy_into_vec(&[1, 2, 3], &mut short, false),
//!     Err(SeqError::DestinationTooShort { required: 3, actual: 2 }),
//! );
//! ```
//!
//! ### Array operations
//!
//! ```rust
//! use seq_convert::{ArrayExt, Span, array};
//!
//! let a = [0, 0, 0, 1, 1, 0, 1, 1];
//! let mut b = a;
//! array::reverse_in_place(&mut b);
//!
//! assert_eq!(array::compare(&a, &b, 0..=7, 0..=7), Ok(false));
//! assert_eq!(array::compare(&a, &b, 2..=5, 2..=5), Ok(true));
//! assert_eq!(array::compare(&a, &b, -6..=-3, Span::new(2, 5)), Ok(true));
//!
//! assert_eq!(array::join(&a, " "), "0 0 0 1 1 0 1 1");
//! assert_eq!(a.joined("").to_string(), "00011011");
//!
//! array::fill(&mut b, 1);
//! assert_eq!(b, [1; 8]);
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `trace` when a conversion
//! truncates or leaves slots untouched, `debug` when a precondition check
//! fails.  It never installs a logger itself.

// --- Module Declarations ---

pub mod array;
pub mod convert;
pub mod error;
pub mod seqs;
pub mod utils;

// --- Re-exports ---

pub use array::{ArrayExt, Joined};
pub use error::SeqError;
pub use seqs::{Sequence, SequenceMut};
pub use utils::span::Span;
