//! State persistence.
//!
//! The whole application state lives in one JSON document,
//! `modulo.json`, under the user's config directory. A load yields
//! either a fully valid state or nothing: decode failures collapse to
//! absence so a half-written or hand-mangled file can never be partially
//! applied. The caller decides what "absent" means (usually: run init).

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::state::ModuloState;

const STATE_FILE: &str = "modulo.json";

/// Returns `~/.config/modulo[-dev]/` based on MODULO_ENV.
///
/// Set MODULO_ENV=dev to use the development data directory, or
/// MODULO_DATA_DIR to override the location outright (tests, CI).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = if let Ok(dir) = std::env::var("MODULO_DATA_DIR") {
        PathBuf::from(dir)
    } else {
        let base_dir = dirs::home_dir()
            .ok_or(StorageError::NoConfigDir)?
            .join(".config");
        let env = std::env::var("MODULO_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("modulo-dev")
        } else {
            base_dir.join("modulo")
        }
    };
    std::fs::create_dir_all(&dir).map_err(|source| StorageError::Write {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

pub fn state_path() -> Result<PathBuf, StorageError> {
    Ok(data_dir()?.join(STATE_FILE))
}

/// Load the persisted state, `None` when absent or undecodable.
pub fn load() -> Result<Option<ModuloState>, StorageError> {
    load_from(&state_path()?)
}

pub fn load_from(path: &Path) -> Result<Option<ModuloState>, StorageError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let state: ModuloState = match serde_json::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "state file failed to decode, treating as uninitialized"
            );
            return Ok(None);
        }
    };
    if let Err(err) = state.validate() {
        tracing::warn!(
            path = %path.display(),
            error = %err,
            "state file violates field limits, treating as uninitialized"
        );
        return Ok(None);
    }
    Ok(Some(state))
}

/// Persist the state, creating the parent directory on demand.
pub fn save(state: &ModuloState) -> Result<(), StorageError> {
    save_to(state, &state_path()?)
}

pub fn save_to(state: &ModuloState, path: &Path) -> Result<(), StorageError> {
    let content = serde_json::to_string_pretty(state)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}
