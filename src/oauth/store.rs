use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::FeedFilterError;
use crate::oauth::token::TokenPair;

/// The single persisted token record for this installation.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted pair. A missing, unreadable or malformed record is
    /// reported as `None`; a missing one is the normal first-run state.
    pub fn load(&self) -> Option<TokenPair> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no stored token");
                return None;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "cannot read token record: {e}");
                return None;
            }
        };

        match serde_json::from_str::<TokenPair>(&data) {
            Ok(pair) if pair.is_valid() => Some(pair),
            Ok(_) => {
                tracing::warn!(path = %self.path.display(), "ignoring token record with an empty field");
                None
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring malformed token record: {e}");
                None
            }
        }
    }

    /// Replace the record with `pair`. The new content is written to a
    /// sibling temp file and renamed over the record, so readers see either
    /// the old pair or the new one.
    pub fn save(&self, pair: &TokenPair) -> Result<(), FeedFilterError> {
        if !pair.is_valid() {
            return Err(FeedFilterError::OAuthError(
                "Refusing to store a token pair with an empty field".into(),
            ));
        }

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let data = serde_json::to_string_pretty(pair).map_err(|e| {
            FeedFilterError::OAuthError(format!("Failed to serialize token: {e}"))
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        restrict_permissions(tmp.as_file())?;
        tmp.write_all(data.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| FeedFilterError::IoError(e.error))?;

        tracing::info!(path = %self.path.display(), "stored token pair");
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}
