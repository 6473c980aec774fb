//! Draggable corner handles.

use crate::draw::{Canvas, Paint, PaintStyle};
use crate::util::{Point, Rect, distance};

/// Gap between the diamond and its corner ticks.
const TICK_MARGIN: f64 = 4.0;

/// The four corners of a tool's quad.
///
/// `P0`/`P1` are the two independent points the user places; `P2`/`P3`
/// complete the axis-aligned quad for rectangle-like tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left
    P0,
    /// Bottom-right
    P1,
    /// Bottom-left
    P2,
    /// Top-right
    P3,
}

impl Corner {
    /// All corners in focus priority order.
    pub const ALL: [Corner; 4] = [Corner::P0, Corner::P1, Corner::P2, Corner::P3];

    pub fn index(self) -> usize {
        match self {
            Corner::P0 => 0,
            Corner::P1 => 1,
            Corner::P2 => 2,
            Corner::P3 => 3,
        }
    }

    /// The corner across the quad, which stays put while this one is dragged.
    pub fn diagonal(self) -> Corner {
        match self {
            Corner::P0 => Corner::P1,
            Corner::P1 => Corner::P0,
            Corner::P2 => Corner::P3,
            Corner::P3 => Corner::P2,
        }
    }

    /// Neighbors that follow this corner when it moves.
    ///
    /// Returns `(shares_x, shares_y)`: the first takes this corner's x, the
    /// second takes its y.
    pub fn neighbors(self) -> (Corner, Corner) {
        match self {
            Corner::P0 => (Corner::P2, Corner::P3),
            Corner::P1 => (Corner::P3, Corner::P2),
            Corner::P2 => (Corner::P0, Corner::P1),
            Corner::P3 => (Corner::P1, Corner::P0),
        }
    }
}

/// A grip point with hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub pos: Point,
    pub visible: bool,
    pub focused: bool,
    /// Hit-test radius and drawn diamond size
    pub size: f64,
}

impl Endpoint {
    pub fn new(pos: Point, size: f64) -> Self {
        Self {
            pos,
            visible: false,
            focused: false,
            size,
        }
    }

    /// Focused when visible and the cursor is within `size` of the handle.
    pub fn check_focus(&mut self, cursor: Point) {
        self.focused = self.visible && distance(self.pos, cursor) <= self.size;
    }

    pub fn move_to(&mut self, pos: Point) {
        if self.pos != pos {
            self.pos = pos;
        }
    }

    /// Draws a diamond with an L-shaped tick outside each of its vertices.
    pub fn draw(&self, canvas: &mut dyn Canvas, paint: &Paint) {
        if !self.visible {
            return;
        }

        let paint = if self.focused {
            paint.with_style(PaintStyle::StrokeAndFill)
        } else {
            paint.with_style(PaintStyle::Stroke)
        };

        let half = self.size / 2.0;
        let square = Rect::new(
            self.pos.x - half,
            self.pos.y - half,
            self.pos.x + half,
            self.pos.y + half,
        );
        canvas.draw_rotated_rect(square, 45.0, &paint);

        let arm = self.size / 3.0;
        let corner = self.pos + Point::new(-half - TICK_MARGIN, -half - TICK_MARGIN);
        for i in 0..4 {
            let degrees = 45.0 + 90.0 * i as f64;
            let c = corner.rotate_around(self.pos, degrees);
            let a = (corner + Point::new(arm, 0.0)).rotate_around(self.pos, degrees);
            let b = (corner + Point::new(0.0, arm)).rotate_around(self.pos, degrees);
            canvas.draw_line(c, a, &paint);
            canvas.draw_line(c, b, &paint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawOp, RED, RecordingCanvas};

    #[test]
    fn focus_requires_visibility_and_distance() {
        let mut ep = Endpoint::new(Point::new(10.0, 10.0), 12.0);
        ep.check_focus(Point::new(10.0, 10.0));
        assert!(!ep.focused);

        ep.visible = true;
        ep.check_focus(Point::new(22.0, 10.0));
        assert!(ep.focused);
        ep.check_focus(Point::new(22.1, 10.0));
        assert!(!ep.focused);
    }

    #[test]
    fn neighbors_never_include_diagonal() {
        for corner in Corner::ALL {
            let (a, b) = corner.neighbors();
            assert_ne!(a, corner.diagonal());
            assert_ne!(b, corner.diagonal());
            assert_ne!(a, b);
            assert_eq!(corner.diagonal().diagonal(), corner);
        }
    }

    #[test]
    fn draw_fills_when_focused() {
        let mut ep = Endpoint::new(Point::new(50.0, 50.0), 12.0);
        let mut canvas = RecordingCanvas::new();
        ep.draw(&mut canvas, &Paint::stroke(RED, 1.0));
        assert!(canvas.is_empty());

        ep.visible = true;
        ep.focused = true;
        ep.draw(&mut canvas, &Paint::stroke(RED, 1.0));
        match &canvas.ops[0] {
            DrawOp::RotatedRect { degrees, paint, .. } => {
                assert_eq!(*degrees, 45.0);
                assert_eq!(paint.style, PaintStyle::StrokeAndFill);
            }
            other => panic!("unexpected op {:?}", other),
        }
        assert_eq!(canvas.lines().len(), 8);
    }
}
