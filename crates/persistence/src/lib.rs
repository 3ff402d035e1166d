//! Profile persistence for the Sahayak assistant
//!
//! One JSON file per user id. The store never surfaces a failed turn to
//! its caller: unreadable or malformed profiles are replaced with
//! defaults, and write failures leave the in-memory state authoritative
//! until the next successful write.

mod profile_store;

pub use profile_store::ProfileStore;

use thiserror::Error;

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
