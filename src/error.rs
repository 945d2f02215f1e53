//! Error types for acl-searcher.

use thiserror::Error;

/// Error type for acl-searcher operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A host or network field of an ACL line is not a usable IPv4 literal
    #[error("invalid address '{token}': {reason}")]
    AddressFormat { token: String, reason: String },

    /// A target address supplied by the caller could not be parsed
    #[error("invalid target address: {0}")]
    InvalidTarget(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn address(token: &str, reason: impl Into<String>) -> Self {
        Error::AddressFormat {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error only invalidates a single line.
    pub fn is_line_error(&self) -> bool {
        matches!(self, Error::AddressFormat { .. })
    }
}

/// Result type alias for acl-searcher operations.
pub type Result<T> = std::result::Result<T, Error>;
