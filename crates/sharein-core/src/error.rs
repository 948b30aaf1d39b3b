//! Error taxonomy shared by the resolver, materializer and bridge.

use std::fmt;

/// Coarse failure class, as reported across the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No locator was supplied.
    InvalidArgument,
    /// The stream could not be opened, or copying it failed.
    ReadError,
    /// The locator's scheme is not handled; its raw form was passed through.
    UnresolvedScheme,
}

impl ErrorKind {
    /// Wire code used in bridge error results.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::ReadError => "READ_ERROR",
            ErrorKind::UnresolvedScheme => "UNRESOLVED_SCHEME",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
