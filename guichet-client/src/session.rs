//! Persisted session store
//!
//! The token and the last-known user record survive process restarts. Both
//! logical entries live in a single `session.json` document written through a
//! temp-file rename, so `save` and `clear` are transactional: a crash can
//! never leave a token without its matching user or vice versa.

use guichet_core::{ErrorContext, GuichetError, GuichetResult, Session, User};
use std::path::{Path, PathBuf};
use tracing::warn;

const SESSION_FILE: &str = "session.json";

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open (and create if needed) the store under the given directory
    pub fn open(dir: impl AsRef<Path>) -> GuichetResult<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| GuichetError::Storage {
            message: format!("Failed to create session directory {}: {}", dir.display(), e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("session_store")
                .with_operation("open")
                .with_suggestion("Check that the storage directory is writable"),
        })?;

        Ok(Self {
            path: dir.join(SESSION_FILE),
        })
    }

    /// Persist token and user together
    pub fn save(&self, token: &str, user: &User) -> GuichetResult<()> {
        let session = Session {
            token: Some(token.to_string()),
            user: Some(user.clone()),
        };
        let content = serde_json::to_vec_pretty(&session)?;

        // Write-then-rename keeps the previous session intact on failure.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &content).map_err(|e| self.storage_error("write", e))?;
        std::fs::rename(&tmp, &self.path)
            .map_err(|e| self.storage_error("rename", e))?;

        Ok(())
    }

    /// Load the persisted session
    ///
    /// A missing file is an empty session; a corrupt file is treated as empty
    /// after logging, since the only recovery is to sign in again.
    pub fn load(&self) -> GuichetResult<Session> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Session::default()),
            Err(e) => return Err(self.storage_error("read", e)),
        };

        match serde_json::from_str(&content) {
            Ok(session) => Ok(session),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt session file, treating as empty");
                Ok(Session::default())
            }
        }
    }

    /// Remove the persisted session entirely
    pub fn clear(&self) -> GuichetResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error("clear", e)),
        }
    }

    fn storage_error(&self, operation: &str, e: std::io::Error) -> GuichetError {
        GuichetError::Storage {
            message: format!("Session file {}: {}", self.path.display(), e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("session_store").with_operation(operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Amine".to_string(),
            email: "amine@example.com".to_string(),
            role: "Admin".to_string(),
            permissions: vec!["gerer_user".to_string(), "voir_caisse".to_string()],
        }
    }

    #[test]
    fn load_on_fresh_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_reload_preserves_the_permission_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        store.save("abc", &sample_user()).unwrap();

        // Simulated process restart: a fresh store over the same directory.
        let reopened = SessionStore::open(dir.path()).unwrap();
        let session = reopened.load().unwrap();
        assert_eq!(session.token.as_deref(), Some("abc"));
        assert_eq!(
            session.user.unwrap().permissions,
            vec!["gerer_user", "voir_caisse"]
        );
    }

    #[test]
    fn clear_removes_both_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        store.save("abc", &sample_user()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());

        // Clearing an already empty store is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), b"not json{{").unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
