//! This module defines the core abstraction for fixed-length sequences.
//!
//! It provides the [`Sequence`] trait, representing a sequence of typed
//! elements backed by one contiguous buffer. The concrete implementations are
//! [`FixedSequence`](crate::fixed_sequence::FixedSequence) for arbitrary
//! element types and [`ByteSequence`](crate::byte_sequence::ByteSequence) for
//! bytes taken from NUL-terminated sources.

/// Trait representing a fixed-length sequence of typed elements.
///
/// Types implementing this trait expose their elements as a single contiguous
/// slice. The length is established at construction and does not change over
/// the lifetime of the value.
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns all elements as one contiguous slice.
    fn as_slice(&self) -> &[Self::Item];
}
