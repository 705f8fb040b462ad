//! Session Persistence
//!
//! The session (token + user identity) is the only durable client-side
//! state. `SessionStore` is the single writer: views read copies through
//! the `current_session` command, and every mutation goes through
//! `set`/`clear`, which persist before updating the in-memory copy.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub username: String,
}

pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Open the store, loading any session left by a previous run.
    /// An unreadable or corrupt file just means "logged out".
    pub fn new(path: PathBuf) -> Self {
        let current = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self {
            path,
            current: RwLock::new(current),
        }
    }

    pub async fn get(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Bearer token of the active session.
    pub async fn token(&self) -> Result<String> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or(AppError::NotLoggedIn)
    }

    pub async fn set(&self, session: Session) -> Result<()> {
        let raw = serde_json::to_string_pretty(&session).map_err(|e| AppError::Io(e.to_string()))?;
        std::fs::write(&self.path, raw)?;
        *self.current.write().await = Some(session);
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        *self.current.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            token: "tok-123".to_string(),
            user_id: "u-1".to_string(),
            username: "dana".to_string(),
        }
    }

    #[tokio::test]
    async fn test_set_persists_and_reloads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionStore::new(path.clone());
        assert!(store.get().await.is_none());
        store.set(sample()).await.expect("set");

        // A fresh store sees the persisted session
        let reopened = SessionStore::new(path);
        assert_eq!(reopened.get().await, Some(sample()));
        assert_eq!(reopened.token().await.unwrap(), "tok-123");
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionStore::new(path.clone());
        store.set(sample()).await.expect("set");
        store.clear().await.expect("clear");

        assert!(!path.exists());
        assert!(matches!(store.token().await, Err(AppError::NotLoggedIn)));
    }

    #[tokio::test]
    async fn test_corrupt_file_means_logged_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").expect("write");

        let store = SessionStore::new(path);
        assert!(store.get().await.is_none());
    }
}
