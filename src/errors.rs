// src/errors.rs

//! The crate's error type.

use crate::system::executor::ExecutionError;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure surfaced by the public `get` / `set` / `unset` operations.
///
/// Callers should branch on the variant rather than on the emptiness of a
/// returned value: a missing key is always `KeyNotFound`, never `Ok("")`.
#[derive(Error, Debug)]
pub enum EnvError {
    /// A registry target other than `""`, `"user"` or `"system"`.
    #[error("Invalid target '{0}': expected \"\", \"user\" or \"system\".")]
    InvalidTarget(String),
    /// An empty name, or one containing `=`, whitespace or NUL.
    #[error("Invalid variable name '{0}'.")]
    InvalidKey(String),
    /// `~` could not be expanded.
    #[error("Could not determine the home directory of the current user.")]
    HomeDirNotFound,
    /// The profile holds no definition of the key.
    #[error("key '{0}' not found")]
    KeyNotFound(String),
    /// A value or tool output could not be decoded as UTF-8.
    #[error("The value of '{what}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// The key, or the tool whose output failed to decode.
        what: String,
        /// Where decoding stopped.
        #[source]
        source: std::str::Utf8Error,
    },
    /// `reg query` output did not have the expected shape.
    #[error("Failed to parse the registry query response.")]
    MalformedResponse,
    /// Reading or writing a profile failed.
    #[error("Filesystem error on '{path}': {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Text containing NUL cannot be quoted for the shell.
    #[error("Cannot pass this text to the shell: {0}")]
    Quote(#[from] shlex::QuoteError),
    /// Running an external tool failed.
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl EnvError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
