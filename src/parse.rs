use crate::{
    component::Scheme,
    table::{Table, NAME, SEGMENT},
};

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// The input starts with neither `abfs` nor `http`, ignoring case.
    ///
    /// The error index is always `0`.
    UnsupportedScheme,
    /// Unexpected character or end of input.
    ///
    /// The error index points to the first byte of the character or the end of input.
    UnexpectedCharOrEnd,
    /// The file system name is missing.
    ///
    /// The error index points to where the file system name should begin.
    EmptyFileSystem,
    /// The account name is missing.
    ///
    /// The error index points to where the account name should begin.
    EmptyAccountName,
    /// The host does not end with `.dfs.core.windows.net`.
    ///
    /// The error index points to the dot following the account name.
    UnknownEndpoint,
}

/// An error occurred when parsing an ADLS Gen2 URI.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index at which the error occurred.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Checks whether the input had a recognized scheme prefix
    /// but did not match the grammar of that scheme.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.kind != ParseErrorKind::UnsupportedScheme
    }
}

#[cfg(feature = "impl-error")]
impl core::error::Error for ParseError {}

type Result<T> = core::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            kind: ParseErrorKind::$kind,
        })
    };
}

/// Byte ranges of the components of a parsed URI.
///
/// Should be identical to parser output with the stored value as input.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Meta {
    pub scheme: Scheme,
    pub file_system: (usize, usize),
    pub account_name: (usize, usize),
    // The path always runs to the end of input.
    pub path_start: usize,
}

pub(crate) const ENDPOINT_SUFFIX: &str = ".dfs.core.windows.net";

pub(crate) fn parse(bytes: &[u8]) -> Result<Meta> {
    let mut parser = Parser {
        reader: Reader::new(bytes),
    };
    if parser.peek_str_ignore_case("abfs") {
        parser.parse_client_form()
    } else if parser.peek_str_ignore_case("http") {
        parser.parse_rest_form()
    } else if starts_with_folded(bytes, "abfs") || starts_with_folded(bytes, "http") {
        // A non-ASCII letter folds into the prefix, e.g. U+017F in "abfſ".
        // Neither grammar can match it.
        let i = bytes.iter().position(|x| !x.is_ascii()).unwrap_or(0);
        err!(i, UnexpectedCharOrEnd);
    } else {
        err!(0, UnsupportedScheme);
    }
}

/// Checks whether the input starts with an ASCII `prefix`, comparing
/// characters by their simple (single-character) case mappings.
fn starts_with_folded(bytes: &[u8], prefix: &str) -> bool {
    // Each character of the prefix matches at most 4 bytes.
    let head = &bytes[..bytes.len().min(prefix.len() * 4)];
    let head = match core::str::from_utf8(head) {
        Ok(s) => s,
        Err(e) => core::str::from_utf8(&head[..e.valid_up_to()]).unwrap_or_default(),
    };
    let mut chars = head.chars();
    prefix
        .bytes()
        .all(|x| chars.next().is_some_and(|c| fold_eq(c, x)))
}

fn fold_eq(c: char, x: u8) -> bool {
    fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
        match (it.next(), it.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    let upper = single(c.to_uppercase()).unwrap_or(c);
    upper == char::from(x.to_ascii_uppercase())
        || single(upper.to_lowercase()).unwrap_or(upper) == char::from(x.to_ascii_lowercase())
}

/// Checks whether the bytes match either grammar.
pub(crate) fn matches(bytes: &[u8]) -> bool {
    parse(bytes).is_ok()
}

/// ADLS Gen2 URI parser.
///
/// # Invariants
///
/// `pos <= len`, `pos` is non-decreasing and on the boundary of a UTF-8 code point.
///
/// # Guarantees
///
/// When parsing succeeds, all output ranges are within bounds, non-empty
/// (except for the path), on the boundary of a UTF-8 code point, and
/// the whole input has been consumed.
struct Parser<'a> {
    reader: Reader<'a>,
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> core::ops::Deref for Parser<'a> {
    type Target = Reader<'a>;

    fn deref(&self) -> &Self::Target {
        &self.reader
    }
}

impl core::ops::DerefMut for Parser<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.reader
    }
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes.get(self.pos + i).copied()
    }

    // Any call to this method must keep the invariants.
    fn skip(&mut self, n: usize) {
        // INVARIANT: `pos` is non-decreasing.
        self.pos += n;
        debug_assert!(self.pos <= self.len());
    }

    // Only ASCII bytes are ever stopped at, so `pos` stays on a code point boundary.
    // Returns `true` iff any byte is read.
    fn read(&mut self, table: Table) -> bool {
        let start = self.pos;
        let mut i = self.pos;
        while i < self.len() && table.allows(self.bytes[i]) {
            i += 1;
        }
        // INVARIANT: `i` is non-decreasing.
        self.pos = i;
        self.pos > start
    }

    fn peek_str_ignore_case(&self, s: &str) -> bool {
        self.bytes[self.pos..]
            .get(..s.len())
            .is_some_and(|b| b.eq_ignore_ascii_case(s.as_bytes()))
    }

    fn read_str_ignore_case(&mut self, s: &str) -> bool {
        if self.peek_str_ignore_case(s) {
            // INVARIANT: The remaining bytes start with `s` (ignoring case) so it's fine to skip `s.len()`.
            self.skip(s.len());
            true
        } else {
            false
        }
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.bytes[self.pos..].starts_with(s.as_bytes()) {
            // INVARIANT: The remaining bytes start with `s` so it's fine to skip `s.len()`.
            self.skip(s.len());
            true
        } else {
            false
        }
    }
}

impl Parser<'_> {
    // abfs[s]://{fileSystem}@{accountName}.dfs.core.windows.net{relativePath}
    fn parse_client_form(&mut self) -> Result<Meta> {
        // INVARIANT: Skipping "abfs" is fine.
        self.skip(4);
        let scheme = if self.read_str_ignore_case("s") {
            Scheme::Abfss
        } else {
            Scheme::Abfs
        };
        self.read_separator()?;

        // `[^/.\s]+@[^/.\s]+` where `@` itself is a name character:
        // the file system greedily takes everything up to the last `@`
        // that still leaves a non-empty account name.
        let start = self.pos;
        self.read(NAME);
        let end = self.pos;

        let label = &self.bytes[start..end];
        // Only an `@` with bytes on both sides can separate the names.
        let inner = label.get(1..label.len().saturating_sub(1));
        let at = match inner.and_then(|s| s.iter().rposition(|&x| x == b'@')) {
            Some(i) => start + 1 + i,
            None if !label.contains(&b'@') => err!(end, UnexpectedCharOrEnd),
            None if label[0] == b'@' => err!(start, EmptyFileSystem),
            None => err!(end, EmptyAccountName),
        };

        self.read_endpoint()?;
        let path_start = self.read_path()?;

        Ok(Meta {
            scheme,
            file_system: (start, at),
            account_name: (at + 1, end),
            path_start,
        })
    }

    // http[s]://{accountName}.dfs.core.windows.net/{fileSystem}{relativePath}
    fn parse_rest_form(&mut self) -> Result<Meta> {
        // INVARIANT: Skipping "http" is fine.
        self.skip(4);
        let scheme = if self.read_str_ignore_case("s") {
            Scheme::Https
        } else {
            Scheme::Http
        };
        self.read_separator()?;

        let account_start = self.pos;
        if !self.read(NAME) {
            err!(account_start, EmptyAccountName);
        }
        let account_end = self.pos;

        self.read_endpoint()?;

        if !self.read_str("/") {
            if self.has_remaining() {
                err!(self.pos, UnexpectedCharOrEnd);
            }
            err!(self.pos, EmptyFileSystem);
        }

        let fs_start = self.pos;
        if !self.read(NAME) {
            err!(fs_start, EmptyFileSystem);
        }
        let fs_end = self.pos;

        let path_start = self.read_path()?;

        Ok(Meta {
            scheme,
            file_system: (fs_start, fs_end),
            account_name: (account_start, account_end),
            path_start,
        })
    }

    fn read_separator(&mut self) -> Result<()> {
        if !self.read_str("://") {
            err!(self.pos, UnexpectedCharOrEnd);
        }
        Ok(())
    }

    fn read_endpoint(&mut self) -> Result<()> {
        if self.peek(0) != Some(b'.') {
            err!(self.pos, UnexpectedCharOrEnd);
        }
        if !self.read_str_ignore_case(ENDPOINT_SUFFIX) {
            err!(self.pos, UnknownEndpoint);
        }
        Ok(())
    }

    // (/[-a-zA-Z0-9.~_@:!$'()*+,;=%]+)*/?
    // Returns the start of the path, which runs to the end of input.
    fn read_path(&mut self) -> Result<usize> {
        let path_start = self.pos;
        while self.has_remaining() {
            if !self.read_str("/") {
                err!(self.pos, UnexpectedCharOrEnd);
            }
            if !self.read(SEGMENT) && self.has_remaining() {
                // Empty segment not at the end, e.g. "//".
                err!(self.pos, UnexpectedCharOrEnd);
            }
        }
        Ok(path_start)
    }
}
