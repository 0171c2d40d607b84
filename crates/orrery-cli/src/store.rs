//! State Store
//!
//! Reads and writes the session state snapshot as a JSON file. A missing
//! snapshot on load is recoverable and yields the default state; every
//! other failure is surfaced to the caller untouched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use orrery_state::SessionState;

/// JSON-file persistence for one session's state.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Creates a store backed by the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored state, or the default state when no snapshot
    /// exists yet.
    pub fn load(&self) -> Result<SessionState, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(SessionState::from_json(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot found, using defaults");
                Ok(SessionState::default())
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Writes the state as pretty JSON, creating parent directories as
    /// needed.
    pub fn save(&self, state: &SessionState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, state.to_json_pretty()?)?;
        Ok(())
    }

    /// Deletes the snapshot. Returns whether a file was actually removed;
    /// an already-absent file is not an error.
    pub fn delete(&self) -> Result<bool, StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

/// Errors that can occur during store operations.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error (file operations)
    Io(std::io::Error),
    /// JSON serialization error
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {}", e),
            StoreError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));

        let state = store.load().unwrap();
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = StateStore::new(dir.path().join("nested").join("state.json"));

        let mut state = SessionState::default();
        state.energy = 37.0;
        state.trustmap.insert("a/b/c".to_string(), 1.9);
        state
            .regret_lattice
            .push(("a/b/c".to_string(), "Insufficient energy".to_string()));
        state.cycle_count = 12;

        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json at all").unwrap();

        let store = StateStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));

        assert!(!store.delete().unwrap());
        store.save(&SessionState::default()).unwrap();
        assert!(store.delete().unwrap());
        assert!(!store.path().exists());
    }
}
