//! # Session Persistence
//!
//! Remembers who is signed in between runs, in `<store>/session.json`.
//! The splash screen reads it to decide between Home and Login.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use crate::library::CurrentUser;

/// Path of the session file inside a store directory.
pub fn session_path(store_dir: &Path) -> PathBuf {
    store_dir.join("session.json")
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn save_session(path: &Path, user: &CurrentUser) -> io::Result<()> {
    atomic_write_json(path, user)?;
    debug!("Session saved for {}", user.id);
    Ok(())
}

/// Load the remembered user. A missing or unreadable file means signed out.
pub fn load_session(path: &Path) -> Option<CurrentUser> {
    let json = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Ignoring corrupt session file {}: {}", path.display(), e);
            None
        }
    }
}

pub fn clear_session(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("shelf-session-{}", uuid::Uuid::new_v4()))
            .join("session.json")
    }

    fn user() -> CurrentUser {
        CurrentUser {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            display_name: "ada".to_string(),
        }
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path();
        save_session(&path, &user()).unwrap();
        assert_eq!(load_session(&path), Some(user()));
    }

    #[test]
    fn test_missing_file_is_signed_out() {
        assert_eq!(load_session(&temp_path()), None);
    }

    #[test]
    fn test_corrupt_file_is_signed_out() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_session(&path), None);
    }

    #[test]
    fn test_clear_twice_is_ok() {
        let path = temp_path();
        save_session(&path, &user()).unwrap();
        clear_session(&path).unwrap();
        clear_session(&path).unwrap();
        assert_eq!(load_session(&path), None);
    }
}
