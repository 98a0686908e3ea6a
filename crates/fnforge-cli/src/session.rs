//! File-backed session store for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use fnforge_core::{AccessToken, BaseUrl, RefreshToken, Session, SessionStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
}

/// A [`SessionStore`] backed by a JSON file in the platform data
/// directory, so sessions survive between invocations.
///
/// The store trait is infallible; I/O failures are logged and degrade to
/// an anonymous session against the default backend.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store at the default platform location.
    pub fn open() -> Result<Self> {
        let dirs =
            ProjectDirs::from("", "", "fnforge").context("Could not determine config directory")?;

        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;

        Ok(Self {
            path: data_dir.join("session.json"),
        })
    }

    /// Open a store at an explicit path.
    #[allow(dead_code)]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Option<StoredSession> {
        if !self.path.exists() {
            return None;
        }
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to read session file");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(stored) => Some(stored),
            Err(e) => {
                warn!(error = %e, "invalid session file");
                None
            }
        }
    }

    fn write(&self, stored: &StoredSession) {
        let json = match serde_json::to_string_pretty(stored) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize session");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, &json) {
            warn!(error = %e, "failed to write session file");
            return;
        }

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        if let Ok(metadata) = fs::metadata(&self.path) {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(e) = fs::set_permissions(&self.path, perms) {
                warn!(error = %e, "failed to restrict session file permissions");
            }
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self) -> Session {
        let Some(stored) = self.read() else {
            return Session::anonymous(BaseUrl::default());
        };

        let base_url = stored
            .base_url
            .as_deref()
            .and_then(|url| match BaseUrl::new(url) {
                Ok(base) => Some(base),
                Err(e) => {
                    warn!(error = %e, "invalid base URL in session file");
                    None
                }
            })
            .unwrap_or_default();

        Session {
            access_token: stored.access_token.map(AccessToken::new),
            refresh_token: stored.refresh_token.map(RefreshToken::new),
            base_url,
        }
    }

    fn set(&self, session: Session) {
        self.write(&StoredSession {
            access_token: session.access_token.map(|t| t.as_str().to_string()),
            refresh_token: session.refresh_token.map(|t| t.as_str().to_string()),
            base_url: Some(session.base_url.as_str().to_string()),
        });
    }

    fn clear(&self) {
        // Tokens go; the configured base URL survives.
        let base_url = self.read().and_then(|stored| stored.base_url);
        self.write(&StoredSession {
            access_token: None,
            refresh_token: None,
            base_url,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::at(dir.path().join("session.json"))
    }

    #[test]
    fn missing_file_yields_anonymous_default_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let session = store.get();
        assert!(!session.is_authenticated());
        assert_eq!(session.base_url, BaseUrl::default());
    }

    #[test]
    fn session_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(Session::with_tokens(
            BaseUrl::new("http://localhost:9000").unwrap(),
            AccessToken::new("access-1"),
            Some(RefreshToken::new("refresh-1")),
        ));

        let session = store.get();
        assert_eq!(session.access_token.unwrap().as_str(), "access-1");
        assert_eq!(session.refresh_token.unwrap().as_str(), "refresh-1");
        assert_eq!(session.base_url.host(), Some("localhost"));
    }

    #[test]
    fn clear_keeps_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(Session::with_tokens(
            BaseUrl::new("http://localhost:9000").unwrap(),
            AccessToken::new("access-1"),
            Some(RefreshToken::new("refresh-1")),
        ));

        store.clear();

        let session = store.get();
        assert!(session.access_token.is_none());
        assert!(session.refresh_token.is_none());
        assert_eq!(session.base_url.as_str(), "http://localhost:9000/");
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(Session::anonymous(BaseUrl::default()));

        let mode = fs::metadata(dir.path().join("session.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
