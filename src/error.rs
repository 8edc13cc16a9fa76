//! Error types for the light decoder.
//!
//! The decoder itself never fails: malformed stream content is logged,
//! counted and dropped, and decoding continues with whatever follows (see
//! [`AnomalyCounters`](crate::AnomalyCounters) for the tally). `DecodeError`
//! covers the fallible edges instead: configuration validation and the
//! export writers' I/O. [`DecodeError::is_retryable`] separates errors that
//! may clear on a later attempt from caller bugs. Callers that want
//! strictness about stream anomalies must promote the logged counters to
//! failures themselves.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for decoder operations.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Errors from the fallible edges of the decoder.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("invalid protocol timing: tick_rate {tick_rate}, rotor_rps {rotor_rps} (both must be non-zero)")]
    InvalidProtocol { tick_rate: u32, rotor_rps: u32 },

    #[error("failed writing {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DecodeError {
    /// Returns whether this error is potentially recoverable through retry.
    ///
    /// Configuration errors are caller bugs and never clear on their own;
    /// export I/O can succeed on a later attempt once the environment is
    /// fixed (disk space freed, permissions granted).
    pub fn is_retryable(&self) -> bool {
        match self {
            DecodeError::InvalidProtocol { .. } => false,
            DecodeError::File { .. } => true,
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        DecodeError::File { path, source }
    }
}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        DecodeError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
