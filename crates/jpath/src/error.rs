use core::fmt;
use std::{
    error, io,
    path::{Path, PathBuf},
};

/// Errors that can occur while loading a document or resolving a path inside it.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The source file could not be inspected or read.
    Io { path: PathBuf, source: io::Error },
    /// The input is not valid JSON after the configured pre-processing.
    Decode(serde_json::Error),
    /// The path does not contain any segments.
    PathNull,
    /// A path segment does not name a key of the current object.
    KeyNotFound { key: String },
    /// The value at the given key (or full path) has a type that cannot be used there.
    KeyTypeInvalid { key: String },
    /// The document was queried before anything was parsed into it.
    Empty,
}

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Error {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
    pub(crate) fn key_not_found(key: impl Into<String>) -> Error {
        Error::KeyNotFound { key: key.into() }
    }
    pub(crate) fn key_type_invalid(key: impl Into<String>) -> Error {
        Error::KeyTypeInvalid { key: key.into() }
    }

    /// Returns `true` if this error was caused by a missing key.
    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }

    /// Returns `true` if this error was caused by a value of an unsupported type.
    #[must_use]
    pub fn is_key_type_invalid(&self) -> bool {
        matches!(self, Error::KeyTypeInvalid { .. })
    }

    /// The key (or full path) this error refers to, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::KeyNotFound { key } | Error::KeyTypeInvalid { key } => Some(key),
            Error::Io { .. } | Error::Decode(_) | Error::PathNull | Error::Empty => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
            Error::Decode(error) => write!(f, "Invalid JSON: {error}"),
            Error::PathNull => f.write_str("Path is null"),
            Error::KeyNotFound { key } => write!(f, "Key ({key}) is not found"),
            Error::KeyTypeInvalid { key } => write!(f, "Key ({key}) type is invalid"),
            Error::Empty => f.write_str("Document is empty"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Decode(error) => Some(error),
            Error::PathNull
            | Error::KeyNotFound { .. }
            | Error::KeyTypeInvalid { .. }
            | Error::Empty => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Decode(error)
    }
}
