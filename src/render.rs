use crate::{
    parse::{self, ParseError, ENDPOINT_SUFFIX},
    AbfsUri,
};
use alloc::string::String;
use borrow_or_share::Bos;

/// An error occurred when rendering a REST URL.
///
/// Values produced by [`AbfsUri::parse`] always render to a valid URL,
/// so this error indicates a broken invariant rather than bad input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UrlEncodingError {
    pub(crate) cause: ParseError,
}

impl UrlEncodingError {
    /// Returns the error found when checking the rendered URL.
    #[must_use]
    pub fn cause(&self) -> ParseError {
        self.cause
    }
}

#[cfg(feature = "impl-error")]
impl core::error::Error for UrlEncodingError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Pieces of an ADLS Gen2 URI, joined in either form.
struct Parts<'a> {
    file_system: &'a str,
    account_name: &'a str,
    path: &'a str,
}

impl Parts<'_> {
    fn client_uri(&self) -> String {
        let mut buf = String::with_capacity(self.len() + "abfs://@".len());
        buf.push_str("abfs://");
        buf.push_str(self.file_system);
        buf.push('@');
        buf.push_str(self.account_name);
        buf.push_str(ENDPOINT_SUFFIX);
        buf.push_str(self.path);
        buf
    }

    fn rest_url(&self) -> String {
        let mut buf = String::with_capacity(self.len() + "https:///".len());
        buf.push_str("https://");
        buf.push_str(self.account_name);
        buf.push_str(ENDPOINT_SUFFIX);
        buf.push('/');
        buf.push_str(self.file_system);
        buf.push_str(self.path);
        buf
    }

    fn len(&self) -> usize {
        self.file_system.len() + self.account_name.len() + ENDPOINT_SUFFIX.len() + self.path.len()
    }
}

impl<T: Bos<str>> AbfsUri<T> {
    fn parts(&self) -> Parts<'_> {
        Parts {
            file_system: self.file_system(),
            account_name: self.account_name(),
            path: self.path().as_str(),
        }
    }

    /// Renders the URI in the native client form
    /// `abfs://{file_system}@{account_name}.dfs.core.windows.net{path}`.
    ///
    /// The scheme is always `abfs`, whatever the URI was parsed with.
    ///
    /// ```
    /// use adls_uri::AbfsUri;
    ///
    /// let uri = AbfsUri::parse("HTTPS://acct.DFS.core.windows.net/fs/a/b")?;
    /// assert_eq!(uri.to_client_uri(), "abfs://fs@acct.dfs.core.windows.net/a/b");
    /// # Ok::<_, adls_uri::ParseError>(())
    /// ```
    ///
    /// # Ambiguity
    ///
    /// `@` is a valid name character, and the client form splits its host
    /// label at the *last* `@`. An account name containing `@` therefore
    /// does not survive a round trip through this form: the part before
    /// its last `@` is read back as part of the file system.
    /// [`to_rest_url`](Self::to_rest_url) has no such ambiguity.
    ///
    /// ```
    /// use adls_uri::AbfsUri;
    ///
    /// let uri = AbfsUri::parse("https://x@y.dfs.core.windows.net/fs/a")?;
    /// let client = uri.to_client_uri();
    /// assert_eq!(client, "abfs://fs@x@y.dfs.core.windows.net/a");
    ///
    /// let reparsed = AbfsUri::parse(client.as_str())?;
    /// assert_eq!(reparsed.file_system(), "fs@x");
    /// assert_eq!(reparsed.account_name(), "y");
    /// assert_ne!(reparsed, uri);
    /// # Ok::<_, adls_uri::ParseError>(())
    /// ```
    #[must_use]
    pub fn to_client_uri(&self) -> String {
        let uri = self.parts().client_uri();
        debug_assert!(parse::matches(uri.as_bytes()));
        uri
    }

    /// Renders the URI in the REST form
    /// `https://{account_name}.dfs.core.windows.net/{file_system}{path}`.
    ///
    /// The scheme is always `https`, whatever the URI was parsed with.
    ///
    /// ```
    /// use adls_uri::AbfsUri;
    ///
    /// let uri = AbfsUri::parse("abfss://container@storageacct.dfs.core.windows.net/dir/file.csv")?;
    /// assert_eq!(
    ///     uri.to_rest_url().unwrap(),
    ///     "https://storageacct.dfs.core.windows.net/container/dir/file.csv"
    /// );
    /// # Ok::<_, adls_uri::ParseError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Err` if the rendered string does not match the REST grammar.
    /// This cannot happen for a URI obtained from [`parse`](Self::parse).
    pub fn to_rest_url(&self) -> Result<String, UrlEncodingError> {
        let url = self.parts().rest_url();
        match parse::parse(url.as_bytes()) {
            Ok(_) => Ok(url),
            Err(cause) => Err(UrlEncodingError { cause }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_url_check_rejects_bad_parts() {
        let parts = Parts {
            file_system: "fs",
            account_name: "my acct",
            path: "/a",
        };
        let url = parts.rest_url();
        let cause = parse::parse(url.as_bytes()).unwrap_err();
        assert!(cause.is_malformed());

        let parts = Parts {
            file_system: "fs",
            account_name: "acct",
            path: "/a b",
        };
        assert!(!parse::matches(parts.rest_url().as_bytes()));
    }

    #[test]
    fn parts_join() {
        let parts = Parts {
            file_system: "fs",
            account_name: "acct",
            path: "",
        };
        assert_eq!(parts.client_uri(), "abfs://fs@acct.dfs.core.windows.net");
        assert_eq!(parts.rest_url(), "https://acct.dfs.core.windows.net/fs");
    }
}
