//! Persistent bearer-token store
//!
//! This module keeps the single persisted credential of the client in a
//! file, so a login survives process restarts. An absent file means logged
//! out.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// File-backed store for the bearer token.
///
/// Clones share the same file, which is the single source of truth for the
/// credential.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a token store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted token, if any.
    ///
    /// Empty or whitespace-only content counts as absent.
    pub fn load(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    /// Persist a token, replacing any previous one.
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, token)?;
        info!("Persisted session token to {}", self.path.display());
        Ok(())
    }

    /// Remove the persisted token. Removing an absent token is a no-op.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared session token at {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}
