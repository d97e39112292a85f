//! Error types for reading a loose-object repository.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::hash::ObjectHash;
use crate::objects::Kind;

/// Errors that can occur while locating, decoding or walking objects.
#[derive(Debug, Error)]
pub enum Error {
    /// An object, ref or HEAD file does not exist.
    #[error("not found: {}", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// Any other I/O failure while reading a repository file.
    #[error("failed to read {}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The object file is not a complete zlib stream.
    #[error("corrupt or truncated zlib stream in {}: {reason}", path.display())]
    Decompression {
        /// The object file.
        path: PathBuf,
        /// What went wrong in the inflater.
        reason: String,
    },

    /// The `<type> <size>\0` header could not be split.
    #[error("malformed object header: {0}")]
    MalformedHeader(String),

    /// The header type word is not `blob`, `tree` or `commit`.
    #[error("unknown object type: '{0}'")]
    UnknownObjectType(String),

    /// A tree body stopped making sense at `offset`.
    #[error("malformed tree entry at byte {offset}: {reason}")]
    MalformedTreeEntry { offset: usize, reason: &'static str },

    /// An author or committer line is missing one of its parts.
    #[error("malformed person line: '{0}'")]
    MalformedPersonLine(String),

    /// A commit lacks a required header line.
    #[error("commit is missing its '{0}' line")]
    MissingField(&'static str),

    /// The object exists but is of the wrong kind for the operation.
    #[error("expected {expected} {hash}, found {found}")]
    TypeMismatch {
        hash: ObjectHash,
        expected: Kind,
        found: Kind,
    },

    /// Text that should have been a 40 character hex hash.
    #[error("invalid object hash: '{0}'")]
    InvalidHash(String),
}

impl Error {
    /// Map an I/O error on `path`, keeping "file missing" distinct.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound { path }
        } else {
            Error::Io { path, source }
        }
    }
}

/// Shorthand used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
