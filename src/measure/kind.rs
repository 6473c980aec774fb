//! Per-kind behavior: measurement, label text, lock projection and drawing.

use super::{Corner, Mark, MarkCategory, Measurement, Measurements};
use crate::draw::{Canvas, Paint};
use crate::util::{PHI_INV, Point, Rect, project_xy};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Inset of the oval clip used for marks, so ticks stay inside the outline.
const OVAL_CLIP_INSET: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    Oval,
}

impl ToolKind {
    /// All kinds in tool set order.
    pub const ALL: [ToolKind; 3] = [ToolKind::Line, ToolKind::Rectangle, ToolKind::Oval];

    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Oval => "Oval",
        }
    }

    /// Mark categories this kind owns.
    pub fn supported_marks(self) -> &'static [MarkCategory] {
        match self {
            ToolKind::Line => &MarkCategory::ALL,
            ToolKind::Rectangle | ToolKind::Oval => &[
                MarkCategory::GoldenRatio,
                MarkCategory::Middle,
                MarkCategory::Third,
            ],
        }
    }

    /// Corners the user can grab.
    pub fn grip_corners(self) -> &'static [Corner] {
        match self {
            ToolKind::Line => &[Corner::P0, Corner::P1],
            ToolKind::Rectangle | ToolKind::Oval => &Corner::ALL,
        }
    }

    /// Measurements for a quad spanned by `p0` and `p1`.
    pub fn measure(self, p0: Point, p1: Point) -> Measurements {
        let v = p1 - p0;
        let mut m = Measurements::new();
        match self {
            ToolKind::Line => {
                m.insert(Measurement::Length, v.length());
            }
            ToolKind::Rectangle => {
                let (w, h) = (v.x.abs(), v.y.abs());
                m.insert(Measurement::Width, w);
                m.insert(Measurement::Height, h);
                m.insert(Measurement::Area, w * h);
                m.insert(Measurement::Circumference, 2.0 * (w + h));
            }
            ToolKind::Oval => {
                // Width and height are the half extents; the radii halve them again.
                let (w, h) = (v.x.abs() / 2.0, v.y.abs() / 2.0);
                let (a, b) = (w / 2.0, h / 2.0);
                m.insert(Measurement::Width, w);
                m.insert(Measurement::Height, h);
                m.insert(Measurement::Area, PI * a * b);
                m.insert(Measurement::Circumference, ellipse_circumference(a, b));
            }
        }
        m
    }

    /// Label text for already computed measurements; empty when there are none.
    pub fn label_text(self, m: &Measurements) -> String {
        if m.is_empty() {
            return String::new();
        }
        let get = |key: Measurement| m.get(&key).copied().unwrap_or_default();
        match self {
            ToolKind::Line => format!("L = {:.2}", get(Measurement::Length)),
            ToolKind::Rectangle | ToolKind::Oval => format!(
                "W x H = {:.0} x {:.0}, C = {:.0}, A = {:.0}",
                get(Measurement::Width),
                get(Measurement::Height),
                get(Measurement::Circumference),
                get(Measurement::Area)
            ),
        }
    }

    /// Snaps `p` while a locked resize pulls away from `anchor`.
    ///
    /// Line snaps to horizontal or vertical, rectangle to a golden rectangle
    /// and oval to a circle.
    pub fn locked_position(self, anchor: Point, p: Point) -> Point {
        match self {
            ToolKind::Line => {
                let v = p - anchor;
                let dx = if v.x.abs() < v.y.abs() { 1.0 } else { 0.0 };
                let dy = 1.0 - dx;
                p - Point::new(dx * v.x, dy * v.y)
            }
            ToolKind::Rectangle => {
                let (closest, normal) = project_xy(anchor, p);
                anchor + closest + normal + normal * PHI_INV
            }
            ToolKind::Oval => {
                let (closest, normal) = project_xy(anchor, p);
                anchor + closest + normal
            }
        }
    }

    /// Draws the outline and the visible marks.
    pub(crate) fn draw_shape(
        self,
        canvas: &mut dyn Canvas,
        p0: Point,
        p1: Point,
        frame: Rect,
        marks: &[(&Mark, Paint)],
        line: &Paint,
    ) {
        match self {
            ToolKind::Line => {
                canvas.draw_line(p0, p1, line);
                draw_line_marks(canvas, p0, p1, marks);
            }
            ToolKind::Rectangle => {
                draw_quad_marks(canvas, p0, p1, marks, None);
                canvas.draw_rect(Rect::new(p0.x, p0.y, p1.x, p1.y), line);
            }
            ToolKind::Oval => {
                let clip = frame.inflate(-OVAL_CLIP_INSET, -OVAL_CLIP_INSET);
                draw_quad_marks(canvas, p0, p1, marks, Some(clip));
                canvas.draw_oval(Rect::new(p0.x, p0.y, p1.x, p1.y), line);
            }
        }
    }
}

/// Ramanujan's first approximation of an ellipse perimeter.
pub fn ellipse_circumference(a: f64, b: f64) -> f64 {
    PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
}

/// Ticks across the line, centred on it.
fn draw_line_marks(canvas: &mut dyn Canvas, p0: Point, p1: Point, marks: &[(&Mark, Paint)]) {
    let v = p1 - p0;
    let Some(n) = v.rotate_steps(1).normalize() else {
        return;
    };

    for (mark, paint) in marks {
        let m0 = n * (mark.size / 2.0);
        let m1 = m0.rotate_steps(2);
        for &m in mark.positions() {
            let pos = p0 + v * m;
            canvas.draw_line(pos + m0, pos + m1, paint);
        }
    }
}

/// A vertical and a horizontal line through the quad at each fraction.
fn draw_quad_marks(
    canvas: &mut dyn Canvas,
    p0: Point,
    p1: Point,
    marks: &[(&Mark, Paint)],
    clip: Option<Rect>,
) {
    let top_right = Point::new(p1.x, p0.y);
    let bottom_left = Point::new(p0.x, p1.y);
    let horizontal = Point::new(p1.x - p0.x, 0.0);
    let vertical = Point::new(0.0, p1.y - p0.y);

    for (mark, paint) in marks {
        // Endpoint marks trace the bounding box and are never clipped.
        let clip = clip.filter(|_| mark.category != MarkCategory::Endpoint);
        if let Some(bounds) = clip {
            canvas.save();
            canvas.clip_oval(bounds);
        }

        for &m in mark.positions() {
            canvas.draw_line(p0 + horizontal * m, bottom_left + horizontal * m, paint);
            canvas.draw_line(p0 + vertical * m, top_right + vertical * m, paint);
        }

        if clip.is_some() {
            canvas.restore();
        }
    }
}
