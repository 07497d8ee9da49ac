use crate::{
    component::Scheme,
    parse::{ParseError, ParseErrorKind},
    path::AbfsPath,
    render::UrlEncodingError,
};
use core::fmt;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::UnsupportedScheme => return f.write_str("unsupported ADLS Gen2 URI scheme"),
            ParseErrorKind::UnexpectedCharOrEnd => "unexpected character or end of input",
            ParseErrorKind::EmptyFileSystem => "empty file system",
            ParseErrorKind::EmptyAccountName => "empty account name",
            ParseErrorKind::UnknownEndpoint => "unknown endpoint",
        };
        write!(f, "{} at index {}", msg, self.index)
    }
}

impl fmt::Display for UrlEncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rendered URL is invalid: {}", self.cause)
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AbfsPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for AbfsPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
