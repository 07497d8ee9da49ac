//! ADLS Gen2 URI components.

/// The scheme of an ADLS Gen2 URI.
///
/// Schemes are matched case-insensitively when parsing and are always
/// output in lowercase.
///
/// # Examples
///
/// ```
/// use adls_uri::{AbfsUri, Scheme};
///
/// let uri = AbfsUri::parse("ABFSS://fs@acct.dfs.core.windows.net/")?;
/// assert_eq!(uri.scheme(), Scheme::Abfss);
/// assert_eq!(uri.scheme().as_str(), "abfss");
/// # Ok::<_, adls_uri::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Scheme {
    /// `abfs`, the native client scheme.
    Abfs,
    /// `abfss`, the native client scheme over TLS.
    Abfss,
    /// `http`, the REST scheme.
    Http,
    /// `https`, the REST scheme over TLS.
    Https,
}

impl Scheme {
    /// Looks up a scheme by name, ignoring ASCII case.
    ///
    /// Returns `None` if the name is not one of the four ADLS Gen2 schemes.
    ///
    /// ```
    /// use adls_uri::Scheme;
    ///
    /// assert_eq!(Scheme::from_name("HTTPS"), Some(Scheme::Https));
    /// assert_eq!(Scheme::from_name("wasbs"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Scheme> {
        [Scheme::Abfs, Scheme::Abfss, Scheme::Http, Scheme::Https]
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns the scheme name in lowercase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scheme::Abfs => "abfs",
            Scheme::Abfss => "abfss",
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Checks whether the scheme is `abfss` or `https`.
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(self, Scheme::Abfss | Scheme::Https)
    }

    /// Checks whether the scheme is `http` or `https`, i.e. the URI was given in REST form.
    #[must_use]
    pub const fn is_rest(self) -> bool {
        matches!(self, Scheme::Http | Scheme::Https)
    }
}
