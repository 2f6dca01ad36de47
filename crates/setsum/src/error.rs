//! Error types for the shell.

use setsum_core::DecodeError;
use thiserror::Error;

/// Errors that can stop a shell session.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A `merge` or `subtract` argument was not a valid digest (strict mode only).
    #[error("invalid digest on line {line}: {source}")]
    InvalidDigest {
        line: u64,
        #[source]
        source: DecodeError,
    },
}

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;
