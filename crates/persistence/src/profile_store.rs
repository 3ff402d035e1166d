//! File-backed profile store
//!
//! Writes go through a temp file in the same directory followed by an
//! atomic rename, so a crash mid-write can never leave a half-written
//! profile on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::Result;
use sahayak_core::UserProfile;

/// Store keeping one `{user_id}.json` per user under a base directory
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Base directory holding the profile files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the profile for `user_id`
    ///
    /// A missing file creates, persists, and returns a default profile.
    /// An unreadable or malformed file is replaced by a default without
    /// surfacing an error; the caller always gets a usable profile.
    pub fn load(&self, user_id: &str) -> UserProfile {
        let path = self.path_for(user_id);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let profile = UserProfile::default();
                if let Err(e) = self.save(user_id, &profile) {
                    tracing::warn!(user_id, error = %e, "Could not persist initial profile");
                }
                return profile;
            },
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Profile unreadable, using default");
                return UserProfile::default();
            },
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Malformed profile, replacing with default");
                UserProfile::default()
            },
        }
    }

    /// Persist the profile for `user_id`
    pub fn save(&self, user_id: &str, profile: &UserProfile) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let mut file = NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut file, profile)?;
        file.flush()?;
        file.persist(self.path_for(user_id)).map_err(|e| e.error)?;

        tracing::debug!(user_id, "Persisted profile");
        Ok(())
    }

    fn path_for(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize(user_id)))
    }
}

/// Restrict user ids to filesystem-safe filename characters
fn sanitize(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
