//! Canvas that records operations instead of painting.

use super::{Canvas, Image, Paint, TextStyle};
use crate::util::{Point, Rect};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    ClipOval(Rect),
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
    Rect {
        rect: Rect,
        paint: Paint,
    },
    Oval {
        bounds: Rect,
        paint: Paint,
    },
    RotatedRect {
        rect: Rect,
        degrees: f64,
        paint: Paint,
    },
    Text {
        origin: Point,
        text: String,
        style: TextStyle,
    },
    Image {
        dest: Point,
        width: i32,
        height: i32,
        scale: f64,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Point, Point, &Paint)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, paint } => Some((*from, *to, paint)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn clip_oval(&mut self, bounds: Rect) {
        self.ops.push(DrawOp::ClipOval(bounds));
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            paint: paint.clone(),
        });
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.ops.push(DrawOp::Rect {
            rect,
            paint: paint.clone(),
        });
    }

    fn draw_oval(&mut self, bounds: Rect, paint: &Paint) {
        self.ops.push(DrawOp::Oval {
            bounds,
            paint: paint.clone(),
        });
    }

    fn draw_rotated_rect(&mut self, rect: Rect, degrees: f64, paint: &Paint) {
        self.ops.push(DrawOp::RotatedRect {
            rect,
            degrees,
            paint: paint.clone(),
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, image: &Image, dest: Point, scale: f64) {
        self.ops.push(DrawOp::Image {
            dest,
            width: image.width(),
            height: image.height(),
            scale,
        });
    }
}
