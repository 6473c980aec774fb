//! Auxiliary overlays: the info panel, the zoom loupe and the cursor help lines.
//!
//! Both windows are squares parked in the bottom-right corner of the screen,
//! zoom at the bottom and info stacked directly above it. All of them share
//! one [`WindowStyle`] built from the `[windows]` config section.

pub mod help_lines;
pub mod info;
pub mod window;
pub mod zoom;

pub use help_lines::HelpLines;
pub use info::InfoWindow;
pub use window::WindowFrame;
pub use zoom::ZoomWindow;

use crate::draw::{Color, Paint, TextStyle};
use crate::util::{Point, Rect};
use std::time::Duration;

/// Appearance and placement shared by the overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowStyle {
    pub background: Color,
    pub border: Paint,
    pub text: TextStyle,
    /// Offset of the value column in the info window
    pub text_margin: f64,
    /// Gap to the screen edge and between the windows
    pub margin: f64,
    pub size_divisor: f64,
    pub zoom_factor: f64,
    pub crosshair: Paint,
    pub crosshair_size: f64,
    pub help_line: Paint,
    /// Period of the zoom refresh tick
    pub refresh_interval: Duration,
}

/// Window bounds for a given screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLayout {
    pub info: Rect,
    pub zoom: Rect,
}

impl WindowLayout {
    pub fn for_screen(screen: Rect, style: &WindowStyle) -> Self {
        let side = (screen.height() / style.size_divisor).floor();
        let right = screen.right - style.margin;
        let bottom = screen.bottom - style.margin;

        let zoom = Rect::new(right - side, bottom - side, right, bottom);
        let info = zoom.offset(Point::new(0.0, -(side + style.margin)));
        Self { info, zoom }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Style;

    #[test]
    fn windows_stack_in_bottom_right_corner() {
        let style = Style::default().window;
        let layout = WindowLayout::for_screen(Rect::new(0.0, 0.0, 1920.0, 1080.0), &style);

        assert_eq!(layout.zoom, Rect::new(1700.0, 860.0, 1916.0, 1076.0));
        assert_eq!(layout.info, Rect::new(1700.0, 640.0, 1916.0, 856.0));
        assert_eq!(layout.zoom.width(), layout.zoom.height());
    }
}
