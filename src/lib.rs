#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A parser for [Azure Data Lake Storage Gen2][ADLS Gen2] URIs.
//!
//! An ADLS Gen2 resource can be addressed in two forms:
//!
//! - the native client form, as used by Hadoop's ABFS driver:
//!   `abfs[s]://{file_system}@{account_name}.dfs.core.windows.net{path}`;
//! - the REST form, as used by the Data Lake Storage REST API:
//!   `http[s]://{account_name}.dfs.core.windows.net/{file_system}{path}`.
//!
//! [`AbfsUri`] parses either form into the same file system, account name
//! and relative path, and renders them back into either form.
//! Two `AbfsUri`s denoting the same resource compare equal and hash alike
//! no matter which form they were parsed from.
//!
//! ```
//! use adls_uri::AbfsUri;
//!
//! let uri = AbfsUri::parse("abfss://container@storageacct.dfs.core.windows.net/dir/file.csv")?;
//! assert_eq!(uri.file_system(), "container");
//! assert_eq!(uri.account_name(), "storageacct");
//! assert_eq!(uri.path(), "/dir/file.csv");
//!
//! let url = uri.to_rest_url().unwrap();
//! assert_eq!(url, "https://storageacct.dfs.core.windows.net/container/dir/file.csv");
//! assert_eq!(AbfsUri::parse(url.as_str())?, uri);
//! # Ok::<_, adls_uri::ParseError>(())
//! ```
//!
//! Input is taken as already percent-encoded; nothing is encoded or
//! decoded while parsing. Use [`AbfsPath::decode`] to decode the path.
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support. This includes [`Error`] implementations.
//! - `impl-error`: Implements [`Error`] for the error types without requiring `std`.
//! - `serde`: Enables [`serde`] support. [`AbfsUri`] is serialized as its string
//!   and deserialized by parsing.
//!
//! [ADLS Gen2]: https://learn.microsoft.com/azure/storage/blobs/data-lake-storage-introduction
//! [`Error`]: core::error::Error
//! [`serde`]: https://docs.rs/serde

extern crate alloc;

mod component;
mod fmt;
mod parse;
mod path;
mod render;
mod table;
mod uri;

/// Utilities for percent-decoding.
pub mod pct_enc;

pub use component::Scheme;
pub use parse::{ParseError, ParseErrorKind};
pub use path::{AbfsPath, Segments};
pub use render::UrlEncodingError;
pub use uri::AbfsUri;

/// Checks whether a candidate string is an ADLS Gen2 URI in either form.
///
/// Unlike a cheap prefix check, the whole grammar is matched.
/// Returns `false` for `None`.
///
/// ```
/// use adls_uri::is_adls_uri;
///
/// assert!(is_adls_uri(Some("abfs://fs@acct.dfs.core.windows.net/a")));
/// assert!(is_adls_uri(Some("https://acct.dfs.core.windows.net/fs")));
/// assert!(!is_adls_uri(Some("https://acct.blob.core.windows.net/fs")));
/// assert!(!is_adls_uri(Some("not a uri")));
/// assert!(!is_adls_uri(None));
/// ```
#[must_use]
pub fn is_adls_uri(candidate: Option<&str>) -> bool {
    candidate.is_some_and(|s| parse::matches(s.as_bytes()))
}
