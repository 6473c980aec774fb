//! Settings storage backends.

use super::AppState;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const STATE_FILE_NAME: &str = "phiddle.appstate.json";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Could not determine the settings directory")]
    NoDirectory,

    #[error("Failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save of the settings blob.
pub trait StateStore {
    /// Stored settings, or defaults when nothing usable is stored.
    fn load(&mut self) -> AppState;

    fn save(&mut self, state: &AppState) -> Result<(), StateError>;
}

/// Settings kept as JSON in the user's config directory.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    /// Store at `<config_dir>/phiddle/phiddle.appstate.json`.
    pub fn for_app() -> Result<Self, StateError> {
        let dir = dirs::config_dir().ok_or(StateError::NoDirectory)?;
        Ok(Self::at(dir.join("phiddle").join(STATE_FILE_NAME)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonStateStore {
    fn load(&mut self) -> AppState {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved settings at {}", self.path.display());
                return AppState::default();
            }
            Err(err) => {
                warn!(
                    "Failed to read settings from {}: {}; using defaults",
                    self.path.display(),
                    err
                );
                return AppState::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(state) => {
                info!("Restored settings from {}", self.path.display());
                state
            }
            Err(err) => {
                warn!(
                    "Ignoring corrupt settings in {}: {}",
                    self.path.display(),
                    err
                );
                AppState::default()
            }
        }
    }

    fn save(&mut self, state: &AppState) -> Result<(), StateError> {
        let json = serde_json::to_string_pretty(state)?;
        let write = |path: &Path| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)
        };
        write(&self.path).map_err(|source| StateError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and `--ephemeral` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    state: Option<AppState>,
    saves: usize,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Some(state),
            saves: 0,
        }
    }

    pub fn state(&self) -> Option<&AppState> {
        self.state.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StateStore for MemoryStateStore {
    fn load(&mut self) -> AppState {
        self.state.clone().unwrap_or_default()
    }

    fn save(&mut self, state: &AppState) -> Result<(), StateError> {
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{LabelLocation, MarkCategory, MarkSet, ToolKind};

    fn create_test_state() -> AppState {
        AppState {
            active_tool: ToolKind::Oval,
            label_location: LabelLocation::AboveMouse,
            help_lines_visible: true,
            marks_visible: MarkSet::from([MarkCategory::Third]),
            locked: true,
            ..AppState::default()
        }
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStateStore::at(dir.path().join("none.json"));
        assert_eq!(store.load(), AppState::default());
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phiddle").join(STATE_FILE_NAME);
        let mut store = JsonStateStore::at(&path);

        store.save(&create_test_state()).unwrap();
        assert!(path.exists());
        assert_eq!(store.load(), create_test_state());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(JsonStateStore::at(&path).load(), AppState::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);
        fs::write(&path, r#"{ "active_tool": "rectangle", "wide_lines": true }"#).unwrap();

        let state = JsonStateStore::at(&path).load();
        assert_eq!(state.active_tool, ToolKind::Rectangle);
        assert!(state.wide_lines);
        assert!(state.zoom_window_visible);
        assert_eq!(state.marks_visible, AppState::default().marks_visible);
    }

    #[test]
    fn save_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let mut store = JsonStateStore::at(blocker.join("state.json"));
        let err = store.save(&AppState::default()).unwrap_err();
        assert!(matches!(err, StateError::Write { .. }));
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStateStore::new();
        assert_eq!(store.load(), AppState::default());
        store.save(&create_test_state()).unwrap();
        store.save(&create_test_state()).unwrap();
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.load(), create_test_state());
    }
}
