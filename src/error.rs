//! Error type shared by the conversion and comparison helpers.
//!
//! Length mismatches between a source and a destination are *not* errors: the
//! `from_*` and `copy_*_into` conversions truncate or pad silently.  The
//! variants below only describe broken caller preconditions.

use thiserror::Error;

/// A violated precondition of a conversion or comparison.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum SeqError {
    /// An "into" conversion was given a destination shorter than the fixed array.
    #[error("destination too short: {actual} elements (expected >= {required})")]
    DestinationTooShort {
        /// Number of elements the conversion writes.
        required: usize,
        /// Length of the destination that was supplied.
        actual: usize,
    },
    /// A span index falls outside the array after negative-index resolution.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The index as given by the caller.
        index: isize,
        /// Length of the array the index was resolved against.
        len: usize,
    },
    /// A span starts after it ends.
    #[error("inverted range {from}..={to} (expected from <= to)")]
    InvertedRange {
        /// Resolved start index.
        from: usize,
        /// Resolved end index.
        to: usize,
    },
}
