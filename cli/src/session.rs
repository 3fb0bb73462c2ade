//! Durable client-side session storage
//!
//! The session is an explicit value with a defined lifecycle: written at
//! login, removed at logout, loaded at startup. It is never held as
//! ambient global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use workout_tracker_shared::types::UserSummary;

/// A logged-in session: the bearer token plus the user it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserSummary,
}

/// File-backed session store
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default session file location under the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("workout-tracker").join("session.json"))
    }

    /// Load the stored session
    ///
    /// A missing or unreadable file means "not logged in"; a stale file
    /// is overwritten by the next login.
    pub fn load(&self) -> Option<Session> {
        let contents = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Persist a session (login)
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Remove the stored session (logout)
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> SessionStore {
        let path = std::env::temp_dir()
            .join(format!("wt-session-test-{}", Uuid::new_v4()))
            .join("session.json");
        SessionStore::new(path)
    }

    fn sample_session() -> Session {
        Session {
            token: "a.b.c".to_string(),
            user: UserSummary {
                id: Uuid::new_v4(),
                username: "lifter".to_string(),
                email: "lifter@example.com".to_string(),
            },
        }
    }

    #[test]
    fn load_returns_none_when_missing() {
        let store = temp_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store();
        let session = sample_session();

        store.save(&session).unwrap();
        let loaded = store.load().expect("session should load");

        assert_eq!(loaded.token, session.token);
        assert_eq!(loaded.user.id, session.user.id);
        assert_eq!(loaded.user.username, session.user.username);

        store.clear().unwrap();
    }

    #[test]
    fn clear_removes_session_and_is_idempotent() {
        let store = temp_store();
        store.save(&sample_session()).unwrap();

        store.clear().unwrap();
        assert!(store.load().is_none());

        // Clearing an already-cleared store is not an error
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_reads_as_logged_out() {
        let store = temp_store();
        store.save(&sample_session()).unwrap();
        fs::write(&store.path, "not json").unwrap();

        assert!(store.load().is_none());
        store.clear().unwrap();
    }
}
