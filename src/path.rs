//! The relative path of an ADLS Gen2 URI.

use crate::{pct_enc::Decode, table::SEGMENT};
use core::{cmp::Ordering, hash, iter::FusedIterator, str::Split};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// The relative path of an ADLS Gen2 URI.
///
/// A relative path is either empty, or starts with `'/'` and consists of
/// non-empty segments, optionally followed by a trailing `'/'`.
/// Percent-encoded octets are kept as-is; use [`decode`](Self::decode)
/// to decode them.
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct AbfsPath {
    inner: str,
}

impl AbfsPath {
    #[ref_cast_custom]
    pub(crate) const fn new_validated(path: &str) -> &AbfsPath;

    /// An empty path.
    pub const EMPTY: &'static AbfsPath = AbfsPath::new_validated("");

    /// Converts a string slice to `&AbfsPath`, returning `None` if it is
    /// not a valid relative path.
    ///
    /// ```
    /// use adls_uri::AbfsPath;
    ///
    /// assert!(AbfsPath::new("/dir/file.csv").is_some());
    /// assert!(AbfsPath::new("").is_some());
    /// assert!(AbfsPath::new("dir").is_none());
    /// assert!(AbfsPath::new("/a//b").is_none());
    /// ```
    #[must_use]
    pub fn new(s: &str) -> Option<&AbfsPath> {
        let valid = match s.strip_prefix('/') {
            None => s.is_empty(),
            Some(rest) => {
                let rest = rest.strip_suffix('/').unwrap_or(rest);
                rest.is_empty()
                    || rest
                        .split('/')
                        .all(|seg| !seg.is_empty() && SEGMENT.validate(seg.as_bytes()))
            }
        };
        valid.then(|| AbfsPath::new_validated(s))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Checks whether the path denotes the root of the file system,
    /// i.e. is empty or exactly `"/"`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(&self.inner, "" | "/")
    }

    /// Checks whether the path denotes a directory, i.e. is empty or ends with `'/'`.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.inner.is_empty() || self.inner.ends_with('/')
    }

    /// Returns an iterator over the path segments.
    ///
    /// Neither the empty string before the leading `'/'` nor the one after
    /// a trailing `'/'` is a segment.
    ///
    /// ```
    /// use adls_uri::AbfsUri;
    ///
    /// let uri = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/a/b%20c/")?;
    /// assert!(uri.path().segments().eq(["a", "b%20c"]));
    ///
    /// let uri = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/")?;
    /// assert_eq!(uri.path().segments().count(), 0);
    /// # Ok::<_, adls_uri::ParseError>(())
    /// ```
    pub fn segments(&self) -> Segments<'_> {
        let s = self.inner.strip_prefix('/').unwrap_or(&self.inner);
        let s = s.strip_suffix('/').unwrap_or(s);
        Segments {
            inner: (!s.is_empty()).then(|| s.split('/')),
        }
    }

    /// Returns the last segment unless the path denotes a directory.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        if self.is_dir() {
            None
        } else {
            self.segments().next_back()
        }
    }

    /// Returns the path as a bare directory argument for listing APIs.
    ///
    /// This is `"/"` when the path [is the root](Self::is_root), and the path
    /// with its leading `'/'` removed otherwise.
    ///
    /// ```
    /// use adls_uri::AbfsPath;
    ///
    /// let path = |s: &'static str| AbfsPath::new(s).unwrap();
    /// assert_eq!(path("").directory_param(), "/");
    /// assert_eq!(path("/").directory_param(), "/");
    /// assert_eq!(path("/a/b").directory_param(), "a/b");
    /// assert_eq!(path("/a/b/").directory_param(), "a/b/");
    /// ```
    #[must_use]
    pub fn directory_param(&self) -> &str {
        if self.is_root() {
            "/"
        } else {
            &self.inner[1..]
        }
    }

    /// Returns an iterator used to percent-decode the path.
    ///
    /// ```
    /// use adls_uri::AbfsUri;
    ///
    /// let uri = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/my%20dir/%E6%B5%8B")?;
    /// assert_eq!(uri.path().decode().to_string_lossy(), "/my dir/测");
    /// # Ok::<_, adls_uri::ParseError>(())
    /// ```
    pub fn decode(&self) -> Decode<'_> {
        Decode::new(&self.inner)
    }
}

impl AsRef<str> for AbfsPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for AbfsPath {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<str> for AbfsPath {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<AbfsPath> for str {
    fn eq(&self, other: &AbfsPath) -> bool {
        self == &other.inner
    }
}

impl Eq for AbfsPath {}

impl hash::Hash for AbfsPath {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl PartialOrd for AbfsPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AbfsPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl Default for &AbfsPath {
    /// Creates an empty path.
    fn default() -> Self {
        AbfsPath::EMPTY
    }
}

/// An iterator over the segments of an [`AbfsPath`].
///
/// This struct is created by [`AbfsPath::segments`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Segments<'a> {
    inner: Option<Split<'a, char>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.as_mut()?.next()
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate() {
        for s in ["", "/", "/a", "/a/", "/a/b%20c", "/.."] {
            assert_eq!(AbfsPath::new(s).map(AbfsPath::as_str), Some(s), "{s:?}");
        }
        for s in ["a", "//", "/a//b", "/a b", "/é", "/a?b"] {
            assert!(AbfsPath::new(s).is_none(), "{s:?}");
        }
    }

    #[test]
    fn segments_both_ends() {
        let path = AbfsPath::new("/a/b/c/").unwrap();
        assert!(path.segments().rev().eq(["c", "b", "a"]));
        assert_eq!(path.file_name(), None);
        assert_eq!(AbfsPath::new("/a/b").unwrap().file_name(), Some("b"));
        assert_eq!(<&AbfsPath>::default().segments().next(), None);
    }
}
