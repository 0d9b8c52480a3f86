//! Owning sequence containers for the Seira project.
//!
//! This crate provides fixed-length sequences that own their elements by
//! value. A sequence couples a heap buffer with the element count established
//! at construction; copies are always explicit and deep, assignment replaces
//! the contents wholesale, and the storage is released exactly once when a
//! sequence goes out of scope.
//!
//! # Main Components
//!
//! ## [`crate::sequence::Sequence`] Trait
//!
//! The core abstraction representing a fixed-length sequence of typed
//! elements, exposing the length and the elements as one contiguous slice.
//!
//! ## [`crate::fixed_sequence::FixedSequence`]
//!
//! The generic owning container. Sized construction
//! ([`with_len`](crate::fixed_sequence::FixedSequence::with_len)) acquires its
//! storage fallibly, so allocation failures surface as errors rather than
//! aborts. Deep copies ([`try_clone`](crate::fixed_sequence::FixedSequence::try_clone))
//! and whole-value assignment ([`assign`](crate::fixed_sequence::FixedSequence::assign))
//! keep the value semantics explicit.
//!
//! ## [`crate::byte_sequence::ByteSequence`]
//!
//! A byte sequence constructed from NUL-terminated sources such as `&CStr`.
//! The terminator is consumed at the construction boundary and never stored.
//!
//! ## [`crate::printer`]
//!
//! Separator-joined textual rendering of sequences into `io::Write` sinks.

pub mod byte_sequence;
pub mod fixed_sequence;
pub mod printer;
pub mod sequence;
