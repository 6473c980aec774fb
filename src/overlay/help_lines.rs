//! Full-screen crosshair lines through the cursor.

use super::WindowStyle;
use crate::draw::Canvas;
use crate::util::{Point, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct HelpLines {
    pos: Point,
    screen: Rect,
    visible: bool,
}

impl HelpLines {
    pub fn new(screen: Rect) -> Self {
        Self {
            pos: Point::ZERO,
            screen,
            visible: false,
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, style: &WindowStyle) {
        if !self.visible {
            return;
        }
        canvas.draw_line(
            Point::new(self.screen.left, self.pos.y),
            Point::new(self.screen.right, self.pos.y),
            &style.help_line,
        );
        canvas.draw_line(
            Point::new(self.pos.x, self.screen.top),
            Point::new(self.pos.x, self.screen.bottom),
            &style.help_line,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Style;
    use crate::draw::RecordingCanvas;

    #[test]
    fn lines_span_the_screen_through_cursor() {
        let style = Style::default().window;
        let mut lines = HelpLines::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        lines.set_pos(Point::new(120.0, 45.0));

        let mut canvas = RecordingCanvas::new();
        lines.draw(&mut canvas, &style);
        assert!(canvas.is_empty());

        assert!(lines.toggle_visible());
        lines.draw(&mut canvas, &style);
        let drawn = canvas.lines();
        assert_eq!(drawn.len(), 2);
        assert_eq!((drawn[0].0, drawn[0].1), (Point::new(0.0, 45.0), Point::new(800.0, 45.0)));
        assert_eq!((drawn[1].0, drawn[1].1), (Point::new(120.0, 0.0), Point::new(120.0, 600.0)));
    }
}
