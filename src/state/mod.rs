//! Persistent user settings between runs.
//!
//! The app snapshots an [`AppState`] on exit and restores it on startup.
//! Stores never fail a load: missing or unreadable data yields defaults.

pub mod store;

pub use store::{JsonStateStore, MemoryStateStore, StateError, StateStore};

use crate::measure::{LabelLocation, MarkSet, ToolKind, default_visible_marks};
use serde::{Deserialize, Serialize};

/// Settings restored on the next run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub active_tool: ToolKind,
    pub label_location: LabelLocation,
    pub help_lines_visible: bool,
    pub zoom_window_visible: bool,
    pub info_window_visible: bool,
    pub marks_visible: MarkSet,
    pub wide_lines: bool,
    pub locked: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tool: ToolKind::default(),
            label_location: LabelLocation::default(),
            help_lines_visible: false,
            zoom_window_visible: true,
            info_window_visible: true,
            marks_visible: default_visible_marks(),
            wide_lines: false,
            locked: false,
        }
    }
}
