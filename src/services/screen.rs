//! Screen access: geometry, pixel capture, cursor and repaint requests.

use crate::draw::Image;
use crate::util::{PixelRect, Point};
use thiserror::Error;

/// Cursor shape the app asks for while hovering or dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Normal,
    /// Over a handle or inside a movable tool
    CanGrip,
    Moving,
    Resizing,
    /// Input is ignored here
    Blocked,
}

/// Errors from screen capture.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Capture region {0:?} is outside the screen")]
    OutOfBounds(PixelRect),

    #[error("Screen capture is not available: {0}")]
    Unavailable(String),

    #[error("Failed to load background image: {0}")]
    Background(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Screen the overlay is drawn on.
///
/// All calls happen on the logic thread. A backend with asynchronous capture
/// must hand its result back before `capture` returns.
pub trait ScreenService {
    /// Full screen bounds in pixels.
    fn dimensions(&self) -> PixelRect;

    /// Copies the pixels under `rect`.
    fn capture(&mut self, rect: PixelRect) -> Result<Image, ScreenError>;

    fn cursor_position(&self) -> Point;

    fn set_cursor_hint(&mut self, hint: CursorHint);

    /// Requests a repaint of whatever surface contains `p`.
    fn invalidate(&mut self, p: Point);
}
