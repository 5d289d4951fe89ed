use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::session_storage;
use crate::error::BloglistError;

/// Authenticated user context returned by the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: String,
    pub name: String,
}

/// Holds the one active session, mirrored to local storage
pub struct SessionState {
    current: Option<Session>,
    /// Where the session is persisted; `None` keeps it in memory only
    storage_path: Option<PathBuf>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_storage_path(session_storage::session_path())
    }

    pub fn with_storage_path(path: PathBuf) -> Self {
        Self {
            current: None,
            storage_path: Some(path),
        }
    }

    pub fn new_without_persistence() -> Self {
        Self {
            current: None,
            storage_path: None,
        }
    }

    /// Load a previously persisted session from the default location
    pub fn restore() -> Self {
        Self::restore_from(session_storage::session_path())
    }

    /// Load a previously persisted session, if any. A corrupt file is
    /// treated as no session.
    pub fn restore_from(path: PathBuf) -> Self {
        let current = match session_storage::load_session_from_path(&path) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Ignoring stored session {:?}: {}", path, e);
                None
            }
        };

        #[cfg(debug_assertions)]
        if let Some(session) = &current {
            log::debug!("Restored session for {}", session.username);
        }

        Self {
            current,
            storage_path: Some(path),
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    /// Make `session` the active session and persist it.
    ///
    /// The in-memory session is set even if persisting fails; the error is
    /// returned so the caller can report it.
    pub fn login(&mut self, session: Session) -> Result<(), BloglistError> {
        let result = match &self.storage_path {
            Some(path) => session_storage::save_session_to_path(&session, path),
            None => Ok(()),
        };
        self.current = Some(session);
        result
    }

    /// Clear the active session and its stored copy, returning it
    pub fn logout(&mut self) -> Option<Session> {
        let session = self.current.take()?;
        if let Some(path) = &self.storage_path
            && let Err(e) = session_storage::remove_session_at_path(path)
        {
            log::warn!("Failed to remove stored session: {}", e);
        }
        Some(session)
    }
}

#[cfg(test)]
#[path = "session_state_tests.rs"]
mod session_state_tests;
