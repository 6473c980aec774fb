//! The orchestrator: routes mouse, keyboard and timer events to the tools
//! and overlays, and asks the screen for cursor shapes and repaints.
//!
//! Everything runs on one thread. Backends feed input and the zoom tick
//! through the same event loop, so a tick never interleaves with a drag.

mod actions;
mod core;
pub mod events;
mod mouse;
mod render;
mod tick;
#[cfg(test)]
mod tests;

pub use self::core::App;
pub use events::{Key, Modifiers};
