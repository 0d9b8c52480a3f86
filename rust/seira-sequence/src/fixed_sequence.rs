//! A fixed-length sequence that uniquely owns its elements.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use seira_common::{Result, error::Error};

use crate::sequence::Sequence;

/// A fixed-length sequence that uniquely owns its elements.
///
/// `FixedSequence<T>` couples a heap buffer with the element count established
/// at construction: there is no spare capacity and no growth, the length is
/// part of the value. Copies are explicit and deep ([`try_clone`], [`assign`]),
/// and the storage is released exactly once when the value goes out of scope.
///
/// Sized construction goes through a fallible reservation, so running out of
/// memory surfaces as an [`ErrorKind::Allocation`] error instead of aborting
/// the process.
///
/// [`try_clone`]: FixedSequence::try_clone
/// [`assign`]: FixedSequence::assign
/// [`ErrorKind::Allocation`]: seira_common::error::ErrorKind::Allocation
pub struct FixedSequence<T> {
    inner: Box<[T]>,
}

impl<T> FixedSequence<T> {
    /// Creates a sequence of `len` default-initialized elements.
    pub fn with_len(len: usize) -> Result<FixedSequence<T>>
    where
        T: Default,
    {
        let mut vec = Vec::new();
        vec.try_reserve_exact(len)
            .map_err(|e| Error::allocation(len, e))?;
        vec.resize_with(len, T::default);
        Ok(FixedSequence::from_vec(vec))
    }

    /// Creates a sequence by deep-copying the elements of a slice.
    pub fn from_slice(slice: &[T]) -> Result<FixedSequence<T>>
    where
        T: Clone,
    {
        let mut vec = Vec::new();
        vec.try_reserve_exact(slice.len())
            .map_err(|e| Error::allocation(slice.len(), e))?;
        vec.extend_from_slice(slice);
        Ok(FixedSequence::from_vec(vec))
    }

    /// Creates a sequence that adopts the elements of a `Vec<T>`.
    pub fn from_vec(vec: Vec<T>) -> FixedSequence<T> {
        FixedSequence {
            inner: vec.into_boxed_slice(),
        }
    }

    /// Returns an empty sequence. Does not allocate.
    pub fn empty() -> FixedSequence<T> {
        FixedSequence {
            inner: Vec::new().into_boxed_slice(),
        }
    }

    /// Deep-copies this sequence through a fallible reservation.
    ///
    /// Equivalent to [`Clone::clone`], except that an allocation failure is
    /// reported as an error instead of aborting the process.
    pub fn try_clone(&self) -> Result<FixedSequence<T>>
    where
        T: Clone,
    {
        FixedSequence::from_slice(&self.inner)
    }

    /// Overwrites this sequence with a deep copy of `source` and returns
    /// `&mut self`, so assignments can be chained.
    ///
    /// When the lengths match, elements are cloned into the existing buffer;
    /// otherwise the storage is replaced. Assigning a sequence to itself is
    /// rejected at compile time, since the exclusive borrow of the destination
    /// rules out a simultaneous shared borrow of the same value:
    ///
    /// ```compile_fail
    /// # use seira_sequence::fixed_sequence::FixedSequence;
    /// let mut seq = FixedSequence::from_vec(vec![1, 2, 3]);
    /// seq.assign(&seq);
    /// ```
    pub fn assign(&mut self, source: &FixedSequence<T>) -> &mut FixedSequence<T>
    where
        T: Clone,
    {
        if self.inner.len() == source.inner.len() {
            self.inner.clone_from_slice(&source.inner);
        } else {
            self.inner = source.inner.clone();
        }
        self
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.inner.get_mut(index)
    }

    /// Returns a reference to the element at the given index, panics if out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> &T {
        &self.inner[index]
    }

    /// Returns a mutable reference to the element at the given index, panics if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self.inner[index]
    }

    /// Returns all elements as one contiguous slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns all elements as one contiguous mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns an iterator over the elements that allows mutating them.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    /// Converts to a `Vec<T>` by cloning the data.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.to_vec()
    }

    /// Consumes the sequence and returns the underlying storage.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.inner
    }

    /// Consumes the sequence and converts it into a `Vec<T>`.
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }
}

impl<T> Sequence for FixedSequence<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.inner
    }
}

impl<T: Clone> Clone for FixedSequence<T> {
    fn clone(&self) -> FixedSequence<T> {
        FixedSequence {
            inner: self.inner.clone(),
        }
    }

    fn clone_from(&mut self, source: &FixedSequence<T>) {
        self.assign(source);
    }
}

impl<T> Deref for FixedSequence<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for FixedSequence<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for FixedSequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.at(index)
    }
}

impl<T> IndexMut<usize> for FixedSequence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index)
    }
}

impl<T> AsRef<[T]> for FixedSequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for FixedSequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for FixedSequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedSequence")
            .field(&self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for FixedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for FixedSequence<T> {}

impl<T: PartialOrd> PartialOrd for FixedSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord> Ord for FixedSequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for FixedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Default for FixedSequence<T> {
    fn default() -> Self {
        FixedSequence::empty()
    }
}

impl<'a, T> IntoIterator for &'a FixedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FixedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for FixedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_vec().into_iter()
    }
}

impl<T> From<Vec<T>> for FixedSequence<T> {
    fn from(vec: Vec<T>) -> Self {
        FixedSequence::from_vec(vec)
    }
}

impl<T> From<Box<[T]>> for FixedSequence<T> {
    fn from(slice: Box<[T]>) -> Self {
        FixedSequence { inner: slice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seira_common::error::ErrorKind;
    use seira_testkit::tracked::Tracked;

    #[test]
    fn with_len_default_initializes_elements() {
        let seq = FixedSequence::<u64>::with_len(5).unwrap();
        assert_eq!(seq.len(), 5);
        assert!(seq.iter().all(|&v| v == 0));
    }

    #[test]
    fn with_len_zero_is_empty() {
        let seq = FixedSequence::<u64>::with_len(0).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.iter().next().is_none());
    }

    #[test]
    fn with_len_reports_impossible_reservations() {
        let err = FixedSequence::<u64>::with_len(usize::MAX).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::Allocation { len, .. } if *len == usize::MAX
        ));
    }

    #[test]
    fn empty_and_default() {
        let empty = FixedSequence::<i32>::empty();
        assert!(empty.is_empty());
        assert_eq!(empty, FixedSequence::default());
    }

    #[test]
    fn indexed_access() {
        let mut seq = FixedSequence::from_vec(vec![1, 2, 3]);
        assert_eq!(seq[0], 1);
        assert_eq!(*seq.at(2), 3);
        assert_eq!(seq.get(1), Some(&2));
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.get_mut(3), None);
        *seq.at_mut(1) = 20;
        seq[2] = 30;
        assert_eq!(seq.as_slice(), &[1, 20, 30]);
    }

    #[test]
    #[should_panic]
    fn at_out_of_bounds_panics() {
        let seq = FixedSequence::from_vec(vec![1, 2, 3]);
        let _ = seq.at(3);
    }

    #[test]
    fn cloned_sequence_is_independent() {
        let mut original = FixedSequence::from_vec(vec![1, 2, 3, 4]);
        let copy = original.try_clone().unwrap();
        original.iter_mut().for_each(|v| *v += 10);
        assert_eq!(copy.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(original.as_slice(), &[11, 12, 13, 14]);
    }

    #[test]
    fn assign_replaces_contents_and_chains() {
        let mut dst = FixedSequence::from_vec(vec![0u32; 2]);
        let a = FixedSequence::from_vec(vec![1, 2, 3]);
        let b = FixedSequence::from_vec(vec![9, 9]);
        assert_eq!(dst.assign(&a).len(), 3);
        assert_eq!(dst, a);
        dst.assign(&b).assign(&a);
        assert_eq!(dst, a);
    }

    #[test]
    fn assign_with_matching_length_reuses_storage() {
        let mut dst = FixedSequence::from_vec(vec![0u64; 8]);
        let src = FixedSequence::from_vec(vec![7u64; 8]);
        let ptr = dst.as_slice().as_ptr();
        dst.assign(&src);
        assert_eq!(dst.as_slice().as_ptr(), ptr);
        assert_eq!(dst, src);
    }

    #[test]
    fn assign_with_different_length_replaces_storage() {
        let mut dst = FixedSequence::from_vec(vec![0u64; 2]);
        let src = FixedSequence::from_vec(vec![5u64; 6]);
        dst.assign(&src);
        assert_eq!(dst.len(), 6);
        assert_eq!(dst, src);
    }

    #[test]
    fn clone_from_matches_assign() {
        let mut dst = FixedSequence::from_vec(vec![1, 2, 3]);
        let src = FixedSequence::from_vec(vec![4, 5, 6]);
        dst.clone_from(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn iteration_forms() {
        let mut seq = FixedSequence::from_vec(vec![1, 2, 3]);
        let sum: i32 = seq.iter().sum();
        assert_eq!(sum, 6);
        for v in &mut seq {
            *v *= 2;
        }
        let collected: Vec<i32> = (&seq).into_iter().copied().collect();
        assert_eq!(collected, vec![2, 4, 6]);
        let owned: Vec<i32> = seq.into_iter().collect();
        assert_eq!(owned, vec![2, 4, 6]);
    }

    #[test]
    fn conversions_round_trip() {
        let seq = FixedSequence::from_slice(&[1, 2, 3]).unwrap();
        let vec = seq.into_vec();
        assert_eq!(vec, vec![1, 2, 3]);
        let seq: FixedSequence<i32> = vec.into();
        let boxed = seq.into_boxed_slice();
        let seq = FixedSequence::from(boxed);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn debug_output_shows_elements() {
        let seq = FixedSequence::from_vec(vec![1, 2, 3]);
        assert_eq!(format!("{seq:?}"), "FixedSequence([1, 2, 3])");
    }

    #[test]
    fn elements_are_constructed_and_dropped_in_pairs() {
        Tracked::reset();
        {
            let seq = FixedSequence::<Tracked>::with_len(8).unwrap();
            assert_eq!(Tracked::created(), 8);
            assert_eq!(Tracked::live(), 8);
            let copy = seq.try_clone().unwrap();
            assert_eq!(Tracked::created(), 16);
            drop(seq);
            assert_eq!(Tracked::dropped(), 8);
            assert_eq!(copy.len(), 8);
        }
        assert_eq!(Tracked::created(), Tracked::dropped());
        assert_eq!(Tracked::live(), 0);
    }

    #[test]
    fn assign_keeps_element_accounting_balanced() {
        Tracked::reset();
        {
            let mut dst = FixedSequence::<Tracked>::with_len(4).unwrap();
            let src = FixedSequence::<Tracked>::with_len(4).unwrap();
            dst.assign(&src);
            assert_eq!(Tracked::live(), 8);
            let shorter = FixedSequence::<Tracked>::with_len(2).unwrap();
            dst.assign(&shorter);
            assert_eq!(Tracked::live(), 8);
        }
        assert_eq!(Tracked::live(), 0);
        assert_eq!(Tracked::created(), Tracked::dropped());
    }

    #[test]
    fn randomized_clone_and_assign_preserve_values() {
        for _ in 0..32 {
            let len = fastrand::usize(0..48);
            let values: Vec<u32> = (0..len).map(|_| fastrand::u32(..)).collect();
            let seq = FixedSequence::from_slice(&values).unwrap();
            assert_eq!(seq.as_slice(), values.as_slice());

            let mut dst = FixedSequence::<u32>::with_len(fastrand::usize(0..48)).unwrap();
            dst.assign(&seq);
            assert_eq!(dst, seq);
            assert_eq!(dst.try_clone().unwrap(), seq);
        }
    }
}
