//! Error and result types for geometry construction and decoding.

use std::fmt::{self, Display};
use std::io;
use thiserror::Error;

/// Coarse classification of a [`GeometryError`].
///
/// Callers that only need to distinguish bad input from bad stored data
/// match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor or WKT parser rejected its input.
    InvalidArgument,
    /// A binary payload could not be decoded.
    DecodingError,
    /// A caller-supplied writer failed.
    Io,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            ErrorKind::DecodingError => write!(f, "Decoding error"),
            ErrorKind::Io => write!(f, "IO error"),
        }
    }
}

/// Errors raised while building, parsing or decoding geometries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("IO error: {0}")]
    Io(io::Error),
}

impl GeometryError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        GeometryError::InvalidArgument(message.into())
    }

    pub(crate) fn decoding(message: impl Into<String>) -> Self {
        GeometryError::Decoding(message.into())
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeometryError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            GeometryError::Decoding(_) => ErrorKind::DecodingError,
            GeometryError::Io(_) => ErrorKind::Io,
        }
    }

    /// Re-labels a validation failure as a decoding failure.
    ///
    /// Values read off the wire go through the same constructors as values
    /// built by hand; a rejected decoded value is corrupt data, not a caller bug.
    pub(crate) fn into_decoding(self) -> Self {
        match self {
            GeometryError::InvalidArgument(msg) => GeometryError::Decoding(msg),
            other => other,
        }
    }
}

// Running out of bytes mid-value is corrupt input, not an I/O failure.
impl From<io::Error> for GeometryError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => {
                GeometryError::Decoding(format!("buffer underflow: {}", err))
            }
            _ => GeometryError::Io(err),
        }
    }
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
