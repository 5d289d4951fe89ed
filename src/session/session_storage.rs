use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::session_state::Session;
use crate::config;
use crate::error::BloglistError;

const SESSION_FILE: &str = "session.json";

pub fn session_path() -> PathBuf {
    config::config_dir().join(SESSION_FILE)
}

/// Read a session file. A missing file is `Ok(None)`.
pub fn load_session_from_path(path: &Path) -> Result<Option<Session>, BloglistError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Some(serde_json::from_str(&contents)?))
}

pub fn save_session_to_path(session: &Session, path: &Path) -> Result<(), BloglistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string(session)?;
    fs::write(path, content)?;
    restrict_permissions(path)?;

    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

pub fn remove_session() -> Result<(), BloglistError> {
    remove_session_at_path(&session_path())
}

/// Delete the session file. Removing a missing file is not an error.
pub fn remove_session_at_path(path: &Path) -> Result<(), BloglistError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "session_storage_tests.rs"]
mod session_storage_tests;
