//! A byte sequence constructed from NUL-terminated sources.

use std::ffi::CStr;
use std::fmt;

use seira_common::{Result, verify_arg};

use crate::fixed_sequence::FixedSequence;
use crate::sequence::Sequence;

/// A fixed-length byte sequence constructed from a NUL-terminated source.
///
/// The terminator is a construction-time convention, not part of the value:
/// the sequence stores the bytes up to, and excluding, the first NUL. Once
/// built, a `ByteSequence` wraps a [`FixedSequence<u8>`] and forwards the
/// sequence operations to it.
pub struct ByteSequence {
    seq: FixedSequence<u8>,
}

impl ByteSequence {
    /// Creates a sequence holding the bytes of a C-style string, excluding
    /// the terminator.
    pub fn from_c_str(source: &CStr) -> Result<ByteSequence> {
        Ok(ByteSequence {
            seq: FixedSequence::from_slice(source.to_bytes())?,
        })
    }

    /// Creates a sequence holding the bytes of `source` up to, and excluding,
    /// the first NUL.
    ///
    /// A source with no NUL terminator at all is rejected as an invalid
    /// argument.
    pub fn from_nul_terminated(source: &[u8]) -> Result<ByteSequence> {
        verify_arg!(source, source.contains(&0));
        let len = source.iter().position(|&b| b == 0).unwrap_or(source.len());
        Ok(ByteSequence {
            seq: FixedSequence::from_slice(&source[..len])?,
        })
    }

    /// Returns the number of bytes in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` if the sequence has no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Returns a reference to the byte at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&u8> {
        self.seq.get(index)
    }

    /// Returns a mutable reference to the byte at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut u8> {
        self.seq.get_mut(index)
    }

    /// Returns the bytes as one contiguous slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.seq.as_slice()
    }

    /// Returns the bytes as one contiguous mutable slice.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.seq.as_mut_slice()
    }

    /// Returns the bytes as UTF-8 text, or `None` if they are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Returns an iterator over the bytes.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.seq.iter()
    }

    /// Returns an iterator over the bytes that allows mutating them.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, u8> {
        self.seq.iter_mut()
    }

    /// Deep-copies this sequence through a fallible reservation.
    pub fn try_clone(&self) -> Result<ByteSequence> {
        Ok(ByteSequence {
            seq: self.seq.try_clone()?,
        })
    }

    /// Overwrites this sequence with a deep copy of `source` and returns
    /// `&mut self`, so assignments can be chained.
    pub fn assign(&mut self, source: &ByteSequence) -> &mut ByteSequence {
        self.seq.assign(&source.seq);
        self
    }

    /// Returns a reference to the underlying byte container.
    pub fn as_sequence(&self) -> &FixedSequence<u8> {
        &self.seq
    }

    /// Consumes the sequence and returns the underlying byte container.
    pub fn into_sequence(self) -> FixedSequence<u8> {
        self.seq
    }
}

impl Sequence for ByteSequence {
    type Item = u8;

    #[inline]
    fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    fn as_slice(&self) -> &[u8] {
        self.seq.as_slice()
    }
}

impl Clone for ByteSequence {
    fn clone(&self) -> ByteSequence {
        ByteSequence {
            seq: self.seq.clone(),
        }
    }

    fn clone_from(&mut self, source: &ByteSequence) {
        self.assign(source);
    }
}

impl Default for ByteSequence {
    fn default() -> ByteSequence {
        ByteSequence {
            seq: FixedSequence::empty(),
        }
    }
}

impl PartialEq for ByteSequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
impl Eq for ByteSequence {}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

impl fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl From<ByteSequence> for FixedSequence<u8> {
    fn from(bytes: ByteSequence) -> FixedSequence<u8> {
        bytes.seq
    }
}

impl<'a> IntoIterator for &'a ByteSequence {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut ByteSequence {
    type Item = &'a mut u8;
    type IntoIter = std::slice::IterMut<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for ByteSequence {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.seq.into_iter()
    }
}
