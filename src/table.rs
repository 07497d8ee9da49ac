//! Byte pattern tables for the ADLS Gen2 grammars.
//!
//! The tables are built in `const` context, so matching never compiles
//! anything at run time.

/// A table specifying the bytes allowed in a string.
///
/// ASCII bytes are looked up in a 128-bit set. Bytes `0x80` and above,
/// i.e. the bytes of non-ASCII UTF-8 sequences, are either all allowed
/// or all rejected.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Table {
    lo: u64,
    hi: u64,
    non_ascii: bool,
}

impl Table {
    /// Creates a table that only allows the given ASCII bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII.
    pub(crate) const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0u128;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot allow non-ASCII byte");
            table |= 1u128 << *cur;
            bytes = rem;
        }
        Self {
            lo: table as u64,
            hi: (table >> 64) as u64,
            non_ascii: false,
        }
    }

    /// Combines two tables into one.
    pub(crate) const fn or(self, other: Self) -> Self {
        Self {
            lo: self.lo | other.lo,
            hi: self.hi | other.hi,
            non_ascii: self.non_ascii | other.non_ascii,
        }
    }

    /// Returns a table allowing exactly the bytes this table rejects,
    /// non-ASCII bytes included.
    pub(crate) const fn not(self) -> Self {
        Self {
            lo: !self.lo,
            hi: !self.hi,
            non_ascii: !self.non_ascii,
        }
    }

    #[inline]
    pub(crate) const fn allows(self, x: u8) -> bool {
        if x < 64 {
            self.lo & (1 << x) != 0
        } else if x < 128 {
            self.hi & (1 << (x - 64)) != 0
        } else {
            self.non_ascii
        }
    }

    /// Validates the given string with the table.
    pub(crate) const fn validate(self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            if !self.allows(s[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `\s` as understood by the grammars: `[ \t\n\x0B\f\r]`.
///
/// Note that `u8::is_ascii_whitespace` does not include `\x0B`.
pub(crate) const WHITESPACE: Table = new(b" \t\n\x0b\x0c\r");

/// `[^/.\s]`, the characters of a file system or an account name.
pub(crate) const NAME: Table = new(b"/.").or(WHITESPACE).not();

/// `ALPHA = %x41-5A / %x61-7A`
pub(crate) const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub(crate) const DIGIT: Table = new(b"0123456789");

/// `[-a-zA-Z0-9.~_@:!$'()*+,;=%]`, the characters of a path segment.
///
/// A lone `%` is allowed here: the input is taken as already encoded
/// and octets are not checked.
pub(crate) const SEGMENT: Table = ALPHA.or(DIGIT).or(new(b"-.~_@:!$'()*+,;=%"));
