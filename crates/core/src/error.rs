//! Shared error type

use thiserror::Error;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Speech backend failed to render or accept output
    #[error("speech synthesis failed: {0}")]
    Speech(String),

    /// Speech input backend failed to deliver a transcript
    #[error("speech recognition failed: {0}")]
    Recognition(String),

    /// I/O error from a collaborator boundary
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
