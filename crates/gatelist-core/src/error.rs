//! Error types for the gatelist core library.

use std::path::{Path, PathBuf};

use crate::types::ParseIdentityError;

/// Errors that can occur while bootstrapping, loading, or configuring a whitelist.
///
/// Malformed or duplicate lines inside the whitelist file are never errors;
/// they are skipped during parsing. Only failures that leave the engine unable
/// to produce a membership set are reported here.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error against the whitelist file or configuration file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path of the file being read or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A value supplied by a caller is not a valid identity.
    #[error("Invalid identity: {0}")]
    InvalidIdentity(#[from] ParseIdentityError),
}

/// Convenience `Result` type alias for gatelist operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an I/O error tagged with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether retrying the failed operation may succeed.
    ///
    /// I/O failures (permissions, full disk, a file mid-rewrite by an editor)
    /// can clear up on their own; bad configuration and bad input cannot.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Io { .. } => true,
            Error::Config { .. } => false,
            Error::InvalidIdentity(_) => false,
        }
    }
}
