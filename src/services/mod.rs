//! Interfaces to the platform collaborators the app drives.

pub mod screen;

pub use screen::{CursorHint, ScreenError, ScreenService};
