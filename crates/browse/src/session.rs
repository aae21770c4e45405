//! File-backed persistence for per-session UI state.
//!
//! Two last-write-wins scalars survive view remounts: the last-viewed
//! page number and the dark-mode preference. Both are stored as strings,
//! mirroring the browser-storage layout they replace, and parsed
//! tolerantly; absent or unparsable values fall back to defaults.
//! Concurrent sessions against the same file may diverge; that is
//! accepted behavior, not a defect.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors from reading or writing the session file.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parsed session state with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Last-viewed page, 1-based. Defaults to 1.
    pub last_page: u32,
    /// Dark-mode preference. Defaults to false.
    pub dark_mode: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            last_page: 1,
            dark_mode: false,
        }
    }
}

/// On-disk layout: both scalars stored as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    last_page: Option<String>,
    #[serde(default)]
    dark_mode: Option<String>,
}

/// File-backed store for [`SessionState`].
pub struct SessionStore {
    /// Session file path: `{dir}/session.json`.
    file_path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at `dir`. The directory is created lazily
    /// on first save.
    pub fn new(dir: &Path) -> Self {
        Self {
            file_path: dir.join("session.json"),
        }
    }

    /// Load the session state, applying defaults for anything absent,
    /// unparsable, or out of range. A missing or corrupt file yields
    /// the default state.
    pub fn load(&self) -> SessionState {
        let file = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => serde_json::from_str::<SessionFile>(&content).unwrap_or_default(),
            Err(_) => SessionFile::default(),
        };

        SessionState {
            last_page: file
                .last_page
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|p| *p >= 1)
                .unwrap_or(1),
            dark_mode: file.dark_mode.as_deref() == Some("true"),
        }
    }

    /// Persist the last-viewed page (read-modify-write, last write wins).
    pub fn save_last_page(&self, page: u32) -> Result<(), SessionError> {
        self.update(|file| file.last_page = Some(page.to_string()))
    }

    /// Persist the dark-mode preference.
    pub fn save_dark_mode(&self, on: bool) -> Result<(), SessionError> {
        self.update(|file| file.dark_mode = Some(on.to_string()))
    }

    // ---- private helpers ----

    fn update(&self, mutate: impl FnOnce(&mut SessionFile)) -> Result<(), SessionError> {
        let mut file = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => serde_json::from_str::<SessionFile>(&content).unwrap_or_default(),
            Err(_) => SessionFile::default(),
        };

        mutate(&mut file);

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.file_path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        assert_eq!(store.load(), SessionState::default());
    }

    #[test]
    fn round_trips_page_and_dark_mode() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.save_last_page(4).unwrap();
        store.save_dark_mode(true).unwrap();

        let state = store.load();
        assert_eq!(state.last_page, 4);
        assert!(state.dark_mode);
    }

    #[test]
    fn saving_one_scalar_preserves_the_other() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.save_last_page(7).unwrap();
        store.save_dark_mode(true).unwrap();
        store.save_last_page(2).unwrap();

        let state = store.load();
        assert_eq!(state.last_page, 2);
        assert!(state.dark_mode);
    }

    #[test]
    fn unparsable_page_falls_back_to_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"last_page": "not-a-number", "dark_mode": "true"}"#).unwrap();

        let store = SessionStore::new(dir.path());
        let state = store.load();
        assert_eq!(state.last_page, 1);
        assert!(state.dark_mode);
    }

    #[test]
    fn zero_page_falls_back_to_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"last_page": "0"}"#).unwrap();

        let store = SessionStore::new(dir.path());
        assert_eq!(store.load().last_page, 1);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{{{not json").unwrap();

        let store = SessionStore::new(dir.path());
        assert_eq!(store.load(), SessionState::default());
    }
}
