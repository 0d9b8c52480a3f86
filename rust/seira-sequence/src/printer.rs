//! Utilities for printing sequences to textual sinks.
//!
//! Provides the [`RenderElement`] trait, which gives each element type its
//! textual form, and [`render`], which writes the elements of a sequence
//! joined by a separator. Intended for diagnostics, demos and tests rather
//! than precision-critical formatting.

use std::io::{self, Write};

use seira_common::Result;

use crate::sequence::Sequence;

/// Render a single element into a textual sink.
pub trait RenderElement {
    /// Write the textual form of `self` into `out`.
    fn render_element(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Bytes render as themselves, so a byte sequence holding `Hello` renders as
/// `Hello` rather than as a list of numbers.
impl RenderElement for u8 {
    fn render_element(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(std::slice::from_ref(self))
    }
}

macro_rules! impl_render_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl RenderElement for $t {
                fn render_element(&self, out: &mut dyn Write) -> io::Result<()> {
                    write!(out, "{self}")
                }
            }
        )*
    };
}

impl_render_element!(
    bool, char, i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64, &str, String,
);

/// Writes the elements of `sequence` to `out`, joined by `separator`.
///
/// The separator appears strictly between elements: not before the first and
/// not after the last. An empty sequence produces no output. Sink failures
/// surface as [`ErrorKind::Io`] errors.
///
/// [`ErrorKind::Io`]: seira_common::error::ErrorKind::Io
pub fn render<S, W>(out: &mut W, sequence: &S, separator: &str) -> Result<()>
where
    S: Sequence,
    S::Item: RenderElement,
    W: Write,
{
    for (i, element) in sequence.as_slice().iter().enumerate() {
        if i > 0 {
            out.write_all(separator.as_bytes())?;
        }
        element.render_element(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_sequence::ByteSequence;
    use crate::fixed_sequence::FixedSequence;

    #[test]
    fn renders_bytes_verbatim() {
        let seq = ByteSequence::from_c_str(c"Hello world").unwrap();
        let mut out = Vec::new();
        render(&mut out, &seq, "").unwrap();
        assert_eq!(out, b"Hello world");
    }

    #[test]
    fn separator_appears_only_between_elements() {
        let seq = FixedSequence::from_vec(vec![1, 2, 3]);
        let mut out = Vec::new();
        render(&mut out, &seq, ", ").unwrap();
        assert_eq!(out, b"1, 2, 3");

        let mut out = Vec::new();
        render(&mut out, &seq, ",").unwrap();
        assert_eq!(out, b"1,2,3");

        let seq = FixedSequence::from_vec(vec![7]);
        let mut out = Vec::new();
        render(&mut out, &seq, ", ").unwrap();
        assert_eq!(out, b"7");
    }

    #[test]
    fn empty_sequence_renders_nothing() {
        let seq = FixedSequence::<u32>::empty();
        let mut out = Vec::new();
        render(&mut out, &seq, ", ").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn bytes_with_separator() {
        let seq = ByteSequence::from_c_str(c"abc").unwrap();
        let mut out = Vec::new();
        render(&mut out, &seq, "-").unwrap();
        assert_eq!(out, b"a-b-c");
    }

    #[test]
    fn scalar_and_text_elements() {
        let mut out = Vec::new();
        render(&mut out, &FixedSequence::from_vec(vec![1.5f64, 2.0]), "; ").unwrap();
        assert_eq!(out, b"1.5; 2");

        let mut out = Vec::new();
        render(&mut out, &FixedSequence::from_vec(vec![true, false]), " ").unwrap();
        assert_eq!(out, b"true false");

        let mut out = Vec::new();
        let words = FixedSequence::from_vec(vec!["one".to_string(), "two".to_string()]);
        render(&mut out, &words, ",").unwrap();
        assert_eq!(out, b"one,two");
    }

    #[test]
    fn sink_failures_surface_as_io_errors() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let seq = FixedSequence::from_vec(vec![1, 2, 3]);
        let err = render(&mut FailingSink, &seq, ",").unwrap_err();
        assert!(matches!(
            err.kind(),
            seira_common::error::ErrorKind::Io { .. }
        ));
    }
}
