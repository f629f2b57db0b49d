//! Error handling for the intelitile binary.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for intelitile commands.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running a session step.
#[derive(Debug, Error)]
pub enum Error {
    /// Session storage, parsing or geometry failures.
    #[error(transparent)]
    Core(#[from] intelitile_core::Error),
    /// Failed to write directives to stdout.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
