//! Error types for session storage and geometry input.

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Errors raised at the session boundary. The solver and policies are
/// infallible once a session has been loaded.
#[derive(Debug, Error)]
pub enum Error {
    /// A filesystem operation on a session failed.
    #[error("io error at {path}: {source}")]
    Io {
        /// The session file involved.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// Stored session text could not be parsed.
    #[error("malformed session data on line {line}: {message}")]
    Malformed {
        /// 1-based line number within the session text.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The store holds no session with this id.
    #[error("unknown session: {0}")]
    UnknownSession(String),

    /// Caller-supplied geometry does not describe a rectangle.
    #[error("invalid geometry: {0}")]
    Geometry(String),
}

impl Error {
    /// Build a parse failure for the given 1-based line.
    pub fn malformed<M: Into<String>>(line: usize, message: M) -> Self {
        Self::Malformed {
            line,
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it concerns.
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for session and geometry boundary operations.
pub type Result<T> = StdResult<T, Error>;
