//! Admin session lifecycle
//!
//! One explicit session object instead of loose storage flags: `login`
//! creates and persists it, `logout` deletes it, `load` rehydrates it
//! at startup. Stored as JSON in the platform data directory.

use anyhow::Result;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// An authenticated admin session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub is_admin: bool,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(email: impl Into<String>, token: impl Into<String>, is_admin: bool) -> Self {
        Self {
            token: token.into(),
            is_admin,
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

/// Persists the session between runs
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: Option<PathBuf>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            path: ProjectDirs::from("bg", "labyrinth", "labyrinth-tui")
                .map(|dirs| dirs.data_dir().join("session.json")),
        }
    }

    /// Store backed by an explicit file (used by tests)
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Rehydrate the persisted session, if any
    pub fn load(&self) -> Result<Option<Session>> {
        if let Some(path) = &self.path {
            if path.exists() {
                let content = fs::read_to_string(path)?;
                let session: Session = serde_json::from_str(&content)?;
                return Ok(Some(session));
            }
        }
        Ok(None)
    }

    /// Persist a freshly created session
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(session)?;
            fs::write(path, content)?;
        }
        Ok(())
    }

    /// Destroy the persisted session (logout)
    pub fn clear(&self) -> Result<()> {
        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
