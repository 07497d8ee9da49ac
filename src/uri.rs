use crate::{
    component::Scheme,
    parse::{self, Meta, ParseError},
    path::AbfsPath,
};
use alloc::{borrow::ToOwned, string::String};
use borrow_or_share::{BorrowOrShare, Bos};
use core::{cmp::Ordering, fmt, hash, str::FromStr};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub trait Parse {
    type Val;
    type Err;

    fn parse(self) -> Result<AbfsUri<Self::Val>, Self::Err>;
}

impl<'a> Parse for &'a str {
    type Val = &'a str;
    type Err = ParseError;

    fn parse(self) -> Result<AbfsUri<&'a str>, ParseError> {
        parse::parse(self.as_bytes()).map(|meta| AbfsUri::new(self, meta))
    }
}

impl Parse for String {
    type Val = Self;
    type Err = (ParseError, Self);

    fn parse(self) -> Result<AbfsUri<String>, Self::Err> {
        match parse::parse(self.as_bytes()) {
            Ok(meta) => Ok(AbfsUri::new(self, meta)),
            Err(e) => Err((e, self)),
        }
    }
}

/// An [ADLS Gen2] URI, in either the native client form or the REST form.
///
/// ```text
/// abfs[s]://{file_system}@{account_name}.dfs.core.windows.net{path}
/// http[s]://{account_name}.dfs.core.windows.net/{file_system}{path}
/// ```
///
/// Both forms parse to the same file system, account name and path,
/// and can be rendered back into either form with
/// [`to_client_uri`](Self::to_client_uri) and [`to_rest_url`](Self::to_rest_url).
///
/// [ADLS Gen2]: https://learn.microsoft.com/azure/storage/blobs/data-lake-storage-introduction
///
/// # Variants
///
/// Two variants of `AbfsUri` are available: `AbfsUri<&str>` (borrowed)
/// and `AbfsUri<String>` (owned).
///
/// `AbfsUri<&'a str>` outputs references with lifetime `'a` where possible
/// (thanks to [`borrow-or-share`](borrow_or_share)):
///
/// ```
/// use adls_uri::AbfsUri;
///
/// // Keep a reference to the file system after dropping the `AbfsUri`.
/// let fs = AbfsUri::parse("abfs://logs@acct.dfs.core.windows.net/2024")?.file_system();
/// assert_eq!(fs, "logs");
/// # Ok::<_, adls_uri::ParseError>(())
/// ```
///
/// # Comparison
///
/// `AbfsUri`s are compared by file system, account name and path, in this
/// order, regardless of the scheme and of the form they were parsed from.
/// Nothing is decoded prior to comparison.
///
/// ```
/// use adls_uri::AbfsUri;
/// use std::collections::HashSet;
///
/// let client = AbfsUri::parse("abfss://fs@acct.dfs.core.windows.net/dir")?;
/// let rest = AbfsUri::parse("https://acct.dfs.core.windows.net/fs/dir")?;
/// assert_eq!(client, rest);
///
/// let set: HashSet<_> = [client, rest].into_iter().collect();
/// assert_eq!(set.len(), 1);
/// # Ok::<_, adls_uri::ParseError>(())
/// ```
///
/// # Examples
///
/// Parse and extract components:
///
/// ```
/// use adls_uri::{AbfsUri, Scheme};
///
/// let uri = AbfsUri::parse("abfss://container@storageacct.dfs.core.windows.net/dir/file.csv")?;
/// assert_eq!(uri.scheme(), Scheme::Abfss);
/// assert_eq!(uri.file_system(), "container");
/// assert_eq!(uri.account_name(), "storageacct");
/// assert_eq!(uri.path(), "/dir/file.csv");
/// assert_eq!(uri.directory_param(), "dir/file.csv");
/// # Ok::<_, adls_uri::ParseError>(())
/// ```
///
/// Parse into and convert between `AbfsUri<&str>` and `AbfsUri<String>`:
///
/// ```
/// use adls_uri::AbfsUri;
///
/// let s = "https://acct.dfs.core.windows.net/fs/";
///
/// // Parse into an `AbfsUri<&str>` from a string slice.
/// let uri: AbfsUri<&str> = AbfsUri::parse(s)?;
///
/// // Parse into an `AbfsUri<String>` from an owned string.
/// let uri_owned: AbfsUri<String> = AbfsUri::parse(s.to_owned()).map_err(|e| e.0)?;
///
/// // Convert an `AbfsUri<&str>` to `AbfsUri<String>`.
/// let uri_owned: AbfsUri<String> = uri.to_owned();
///
/// // Borrow an `AbfsUri<String>` as `AbfsUri<&str>`.
/// let uri: AbfsUri<&str> = uri_owned.borrow();
/// # Ok::<_, adls_uri::ParseError>(())
/// ```
#[derive(Clone, Copy)]
pub struct AbfsUri<T> {
    /// Value of the URI, as given to the parser.
    val: T,
    /// Metadata of the URI.
    /// Should be identical to parser output with `val` as input.
    meta: Meta,
}

impl<T> AbfsUri<T> {
    fn new(val: T, meta: Meta) -> Self {
        Self { val, meta }
    }

    /// Parses an ADLS Gen2 URI from a string into an `AbfsUri`.
    ///
    /// The return type is
    ///
    /// - `Result<AbfsUri<&str>, ParseError>` for `I = &str`;
    /// - `Result<AbfsUri<String>, (ParseError, String)>` for `I = String`.
    ///
    /// The input is taken as already percent-encoded:
    /// nothing is encoded or decoded.
    ///
    /// # Errors
    ///
    /// Returns `Err` with [`ParseErrorKind::UnsupportedScheme`] if the input
    /// starts with neither `abfs` nor `http` (ignoring case), or with another
    /// kind if it does but does not match the grammar of its form.
    ///
    /// [`ParseErrorKind::UnsupportedScheme`]: crate::ParseErrorKind::UnsupportedScheme
    pub fn parse<I>(input: I) -> Result<Self, I::Err>
    where
        I: Parse<Val = T>,
    {
        input.parse()
    }

    /// Returns the scheme the URI was parsed with.
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.meta.scheme
    }
}

impl AbfsUri<String> {
    /// Borrows this `AbfsUri<String>` as `AbfsUri<&str>`.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    #[must_use]
    pub fn borrow(&self) -> AbfsUri<&str> {
        AbfsUri {
            val: &self.val,
            meta: self.meta,
        }
    }

    /// Consumes this `AbfsUri<String>` and yields the underlying [`String`].
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.val
    }
}

impl AbfsUri<&str> {
    /// Creates a new `AbfsUri<String>` by cloning the contents of this `AbfsUri<&str>`.
    #[inline]
    #[must_use]
    pub fn to_owned(&self) -> AbfsUri<String> {
        AbfsUri {
            val: self.val.to_owned(),
            meta: self.meta,
        }
    }
}

impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> AbfsUri<T> {
    /// Returns the URI as a string slice, exactly as it was parsed.
    #[must_use]
    pub fn as_str(&'i self) -> &'o str {
        self.val.borrow_or_share()
    }

    /// Returns the file system (container) name.
    #[must_use]
    pub fn file_system(&'i self) -> &'o str {
        let (start, end) = self.meta.file_system;
        &self.as_str()[start..end]
    }

    /// Returns the storage account name.
    #[must_use]
    pub fn account_name(&'i self) -> &'o str {
        let (start, end) = self.meta.account_name;
        &self.as_str()[start..end]
    }

    /// Returns the relative path within the file system.
    ///
    /// The path is either empty or starts with `'/'`.
    #[must_use]
    pub fn path(&'i self) -> &'o AbfsPath {
        AbfsPath::new_validated(&self.as_str()[self.meta.path_start..])
    }

    /// Returns the path as a bare directory argument for listing APIs.
    ///
    /// See [`AbfsPath::directory_param`].
    ///
    /// ```
    /// use adls_uri::AbfsUri;
    ///
    /// let uri = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net")?;
    /// assert_eq!(uri.directory_param(), "/");
    /// let uri = AbfsUri::parse("abfs://fs@acct.dfs.core.windows.net/a/b")?;
    /// assert_eq!(uri.directory_param(), "a/b");
    /// # Ok::<_, adls_uri::ParseError>(())
    /// ```
    #[must_use]
    pub fn directory_param(&'i self) -> &'o str {
        self.path().directory_param()
    }
}

impl<T: Bos<str>> AbfsUri<T> {
    fn key(&self) -> (&str, &str, &str) {
        (
            self.file_system(),
            self.account_name(),
            self.path().as_str(),
        )
    }
}

impl<T: Bos<str>, U: Bos<str>> PartialEq<AbfsUri<U>> for AbfsUri<T> {
    fn eq(&self, other: &AbfsUri<U>) -> bool {
        self.key() == other.key()
    }
}

impl<T: Bos<str>> Eq for AbfsUri<T> {}

impl<T: Bos<str>> hash::Hash for AbfsUri<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<T: Bos<str>> PartialOrd for AbfsUri<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Bos<str>> Ord for AbfsUri<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T: Bos<str>> AsRef<str> for AbfsUri<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'a> TryFrom<&'a str> for AbfsUri<&'a str> {
    type Error = ParseError;

    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        AbfsUri::parse(value)
    }
}

impl TryFrom<String> for AbfsUri<String> {
    type Error = (ParseError, String);

    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        AbfsUri::parse(value)
    }
}

impl<'a> From<AbfsUri<&'a str>> for &'a str {
    /// Equivalent to [`as_str`](AbfsUri::as_str).
    #[inline]
    fn from(value: AbfsUri<&'a str>) -> &'a str {
        value.val
    }
}

impl From<AbfsUri<String>> for String {
    /// Equivalent to [`into_string`](AbfsUri::into_string).
    #[inline]
    fn from(value: AbfsUri<String>) -> String {
        value.val
    }
}

impl From<AbfsUri<&str>> for AbfsUri<String> {
    /// Equivalent to [`to_owned`](AbfsUri::to_owned).
    #[inline]
    fn from(value: AbfsUri<&str>) -> Self {
        value.to_owned()
    }
}

impl FromStr for AbfsUri<String> {
    type Err = ParseError;

    /// Equivalent to `AbfsUri::parse(s).map(|r| r.to_owned())`.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbfsUri::parse(s).map(|r| r.to_owned())
    }
}

impl<T: Bos<str>> fmt::Debug for AbfsUri<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbfsUri")
            .field("scheme", &self.scheme())
            .field("file_system", &self.file_system())
            .field("account_name", &self.account_name())
            .field("path", &self.path())
            .finish()
    }
}

impl<T: Bos<str>> fmt::Display for AbfsUri<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

#[cfg(feature = "serde")]
impl<T: Bos<str>> Serialize for AbfsUri<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AbfsUri<&'de str> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <&str>::deserialize(deserializer)?;
        AbfsUri::parse(s).map_err(|e| {
            de::Error::custom(format_args!("failed to parse {s:?} as ADLS Gen2 URI: {e}"))
        })
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AbfsUri<String> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AbfsUri::parse(s).map_err(|(e, s)| {
            de::Error::custom(format_args!("failed to parse {s:?} as ADLS Gen2 URI: {e}"))
        })
    }
}
