//! Percent-decoding of relative paths.

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::iter::FusedIterator;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, returning `None` if either byte is not hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> Option<u8> {
    let (hi, lo) = (OCTET_TABLE_HI[hi as usize], OCTET_TABLE_LO[lo as usize]);
    (hi != 0xff && lo != 0xff).then_some(hi | lo)
}

/// An iterator used to decode an [`AbfsPath`].
///
/// This struct is created by [`AbfsPath::decode`]. Normally you'll use the methods below
/// instead of iterating over a `Decode` manually.
///
/// The grammar accepts a `%` that does not start a valid octet, since the
/// input is taken as already encoded without checking. Such a `%` is
/// yielded verbatim as part of an unencoded chunk.
///
/// [`AbfsPath`]: crate::AbfsPath
/// [`AbfsPath::decode`]: crate::AbfsPath::decode
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Decode<'a> {
    source: &'a str,
}

/// An item returned by the [`Decode`] iterator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a str),
    /// A percent-encoded octet, decoded (for example, `"%20"` decoded as `0x20`).
    PctDecoded(u8),
}

impl<'a> Decode<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Decodes the path to bytes.
    ///
    /// This method allocates only when the path contains a `%`.
    #[must_use]
    pub fn to_bytes(self) -> Cow<'a, [u8]> {
        if !self.source.contains('%') {
            return Cow::Borrowed(self.source.as_bytes());
        }

        let mut buf = Vec::with_capacity(self.source.len());
        for chunk in self {
            match chunk {
                DecodedChunk::Unencoded(s) => buf.extend_from_slice(s.as_bytes()),
                DecodedChunk::PctDecoded(x) => buf.push(x),
            }
        }
        Cow::Owned(buf)
    }

    /// Attempts to decode the path to a string.
    ///
    /// This method allocates only when the path contains a `%`.
    ///
    /// # Errors
    ///
    /// Returns `Err` containing the decoded bytes if they are not valid UTF-8.
    pub fn to_string(self) -> Result<Cow<'a, str>, Vec<u8>> {
        let source = self.source;
        match self.to_bytes() {
            Cow::Borrowed(_) => Ok(Cow::Borrowed(source)),
            Cow::Owned(buf) => String::from_utf8(buf)
                .map(Cow::Owned)
                .map_err(|e| e.into_bytes()),
        }
    }

    /// Decodes the path to a string, replacing any invalid UTF-8 sequences
    /// with [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
    ///
    /// This method allocates only when the path contains a `%`.
    ///
    /// [U+FFFD]: char::REPLACEMENT_CHARACTER
    #[must_use]
    pub fn to_string_lossy(self) -> Cow<'a, str> {
        match self.to_string() {
            Ok(s) => s,
            Err(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = DecodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();
        if bytes.is_empty() {
            return None;
        }

        if let [b'%', hi, lo, ..] = *bytes {
            if let Some(x) = decode_octet(hi, lo) {
                self.source = &self.source[3..];
                return Some(DecodedChunk::PctDecoded(x));
            }
        }

        // Everything up to the next `%`, which may begin with a malformed `%`.
        let i = bytes[1..]
            .iter()
            .position(|&x| x == b'%')
            .map_or(bytes.len(), |i| i + 1);
        let s;
        (s, self.source) = self.source.split_at(i);
        Some(DecodedChunk::Unencoded(s))
    }
}

impl FusedIterator for Decode<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks() {
        let chunks: Vec<_> = Decode::new("/a%20b%zz%4").collect();
        assert_eq!(
            chunks,
            [
                DecodedChunk::Unencoded("/a"),
                DecodedChunk::PctDecoded(b' '),
                DecodedChunk::Unencoded("b"),
                DecodedChunk::Unencoded("%zz"),
                DecodedChunk::Unencoded("%4"),
            ]
        );
    }

    #[test]
    fn borrow_when_unencoded() {
        assert!(matches!(Decode::new("/dir/file").to_bytes(), Cow::Borrowed(_)));
        assert!(matches!(Decode::new("/dir/file").to_string_lossy(), Cow::Borrowed(_)));
        assert!(matches!(Decode::new("").to_string(), Ok(Cow::Borrowed(""))));
    }

    #[test]
    fn invalid_utf8() {
        assert_eq!(Decode::new("/%FF").to_string(), Err(b"/\xff".to_vec()));
        assert_eq!(Decode::new("/%FF").to_string_lossy(), "/\u{fffd}");
        assert_eq!(Decode::new("/%E6%B5%8B").to_string_lossy(), "/测");
    }
}
