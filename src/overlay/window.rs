//! Shared chrome of the overlay windows.

use super::WindowStyle;
use crate::draw::{Canvas, Paint};
use crate::util::{Point, Rect, rect_contains};

/// Bounds and visibility of one overlay window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    bounds: Rect,
    visible: bool,
}

impl WindowFrame {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            visible: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Flips visibility and returns the new state.
    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn contains(&self, p: Point) -> bool {
        rect_contains(&self.bounds, p)
    }

    /// A point inside the window, for repaint requests.
    pub fn anchor(&self) -> Point {
        self.bounds.center()
    }

    pub fn draw_background(&self, canvas: &mut dyn Canvas, style: &WindowStyle) {
        canvas.draw_rect(self.bounds, &Paint::fill(style.background));
    }

    pub fn draw_border(&self, canvas: &mut dyn Canvas, style: &WindowStyle) {
        canvas.draw_rect(self.bounds, &style.border);
    }
}
