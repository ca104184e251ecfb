//! Persistence of the signed-in user record.
//!
//! The record is the JSON object handed over by the backend at login
//! (`{"id", "name", "email", "type"}`).
//! - Web: `localStorage["abm.session.user"]`.
//! - Native: `<data dir>/session.json`, or the file named by `ABM_SESSION_FILE`.
//!
//! The login flow writes the record; this module restores and clears it. A
//! missing record is not an error: it means nobody is signed in.

use dioxus::logger::tracing::{debug, warn};
use thiserror::Error;

use super::role::User;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage access failed: {0}")]
    Storage(String),
    #[error("could not access session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn parse_user(raw: &str) -> Result<User, SessionError> {
    Ok(serde_json::from_str(raw)?)
}

/// Restore the signed-in user, treating any storage problem as signed out.
pub fn current_user() -> Option<User> {
    match load_user() {
        Ok(Some(user)) => {
            debug!("[session] restored user id={} type={}", user.id, user.role_code);
            Some(user)
        }
        Ok(None) => None,
        Err(err) => {
            warn!("[session] could not restore user ({err}); continuing signed out");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{clear, load_user, session_path, SESSION_FILE_ENV};

#[cfg(target_arch = "wasm32")]
pub use web::{clear, load_user};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{parse_user, SessionError, User};

    /// Overrides the session file location.
    pub const SESSION_FILE_ENV: &str = "ABM_SESSION_FILE";

    pub fn session_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SESSION_FILE_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("org", "abm", "abm-admin")
            .map(|dirs| dirs.data_dir().join("session.json"))
    }

    pub fn load_user() -> Result<Option<User>, SessionError> {
        let path = session_path().ok_or(SessionError::Unavailable)?;
        load_user_from(&path)
    }

    pub fn clear() -> Result<(), SessionError> {
        let path = session_path().ok_or(SessionError::Unavailable)?;
        clear_at(&path)
    }

    pub(super) fn load_user_from(path: &Path) -> Result<Option<User>, SessionError> {
        match fs::read_to_string(path) {
            Ok(raw) => parse_user(&raw).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub(super) fn clear_at(path: &Path) -> Result<(), SessionError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;
    use web_sys::Storage;

    use super::{parse_user, SessionError, User};

    const STORAGE_KEY: &str = "abm.session.user";

    fn js_error(err: JsValue) -> SessionError {
        SessionError::Storage(format!("{err:?}"))
    }

    fn local_storage() -> Result<Storage, SessionError> {
        let window = web_sys::window().ok_or(SessionError::Unavailable)?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or(SessionError::Unavailable)
    }

    pub fn load_user() -> Result<Option<User>, SessionError> {
        local_storage()?
            .get_item(STORAGE_KEY)
            .map_err(js_error)?
            .map(|raw| parse_user(&raw))
            .transpose()
    }

    pub fn clear() -> Result<(), SessionError> {
        local_storage()?.remove_item(STORAGE_KEY).map_err(js_error)
    }
}
