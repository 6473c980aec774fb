//! Geometry helpers and color lookups shared by tools and overlays.
//!
//! This module provides:
//! - `Point`, `Size` and `Rect` value types in screen coordinates
//! - Vector math used by the resize and mark placement code
//! - Axis projection used for locked resizing
//! - Color name lookup for the configuration system

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Inverse of the golden ratio, `2 / (1 + sqrt(5))`.
pub const PHI_INV: f64 = 0.618_033_988_749_894_9;

// ============================================================================
// Points and Vectors
// ============================================================================

/// A point or vector in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length when treated as a vector.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the unit vector, or `None` for a zero-length vector.
    pub fn normalize(self) -> Option<Point> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            None
        } else {
            Some(Point::new(self.x / len, self.y / len))
        }
    }

    pub fn scale(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }

    /// Rotates by a multiple of 90 degrees.
    ///
    /// Negative steps rotate the other way, so `rotate_steps(-1)` equals
    /// `rotate_steps(3)`.
    pub fn rotate_steps(self, steps: i32) -> Point {
        match steps.rem_euclid(4) {
            0 => self,
            1 => Point::new(-self.y, self.x),
            2 => Point::new(-self.x, -self.y),
            _ => Point::new(self.y, -self.x),
        }
    }

    /// Rotates around the origin by an arbitrary angle in degrees.
    pub fn rotate_degrees(self, degrees: f64) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates this point around `pivot` by an angle in degrees.
    pub fn rotate_around(self, pivot: Point, degrees: f64) -> Point {
        pivot + (self - pivot).rotate_degrees(degrees)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        self.scale(rhs)
    }
}

/// Distance between two points.
pub fn distance(p0: Point, p1: Point) -> f64 {
    (p0 - p1).length()
}

/// Sign function that maps zero to zero (unlike `f64::signum`).
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Splits `p - origin` into the component along its shorter axis and a
/// perpendicular vector of the same length.
///
/// Returns `(closest, normal)`. `closest` keeps only the axis with the smaller
/// absolute component. `normal` points along the other axis, carries that
/// axis' sign, and has the magnitude of `closest`. Adding both to `origin`
/// yields the corner of a square anchored at `origin`.
pub fn project_xy(origin: Point, p: Point) -> (Point, Point) {
    let v = p - origin;
    let xs = if v.x.abs() < v.y.abs() { 1.0 } else { 0.0 };
    let ys = 1.0 - xs;

    let closest = Point::new(xs * v.x, ys * v.y);
    let len = closest.length();
    let normal = Point::new(sign(ys * v.x) * len, sign(xs * v.y) * len);
    (closest, normal)
}

// ============================================================================
// Rectangles
// ============================================================================

/// Width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle given by its edges.
///
/// Edges are stored as given, so `left > right` is possible while a drag is
/// tracking direction. Use [`Rect::normalized`] before comparing extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_pos_size(pos: Point, size: Size) -> Self {
        Self::new(pos.x, pos.y, pos.x + size.width, pos.y + size.height)
    }

    /// Smallest normalized rect covering all points. Empty input gives a zero rect.
    pub fn bounding(points: impl IntoIterator<Item = Point>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Rect::default();
        };
        iter.fold(Rect::new(first.x, first.y, first.x, first.y), |r, p| {
            Rect::new(
                r.left.min(p.x),
                r.top.min(p.y),
                r.right.max(p.x),
                r.bottom.max(p.y),
            )
        })
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Copy with `left <= right` and `top <= bottom`.
    pub fn normalized(&self) -> Rect {
        Rect::new(
            self.left.min(self.right),
            self.top.min(self.bottom),
            self.left.max(self.right),
            self.top.max(self.bottom),
        )
    }

    /// True when left/right or top/bottom are swapped.
    pub fn is_inverted(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Grows each edge outwards by `dx`/`dy`. Negative values shrink.
    pub fn inflate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.left - dx,
            self.top - dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    pub fn offset(&self, delta: Point) -> Rect {
        Rect::new(
            self.left + delta.x,
            self.top + delta.y,
            self.right + delta.x,
            self.bottom + delta.y,
        )
    }
}

/// Inclusive containment test, robust to swapped edges.
pub fn rect_contains(rect: &Rect, p: Point) -> bool {
    let r = rect.normalized();
    p.x >= r.left && p.x <= r.right && p.y >= r.top && p.y <= r.bottom
}

/// Axis-aligned pixel rectangle used for screen capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Rounds a float rect outwards to whole pixels.
    pub fn from_rect(rect: &Rect) -> Option<Self> {
        let r = rect.normalized();
        let x = r.left.floor() as i32;
        let y = r.top.floor() as i32;
        let right = r.right.ceil() as i32;
        let bottom = r.bottom.ceil() as i32;
        Self::new(x, y, right - x, bottom - y)
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            (self.x + self.width) as f64,
            (self.y + self.height) as f64,
        )
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "white", "black"
/// - "gold", "palegoldenrod", "whitesmoke", "slategray"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().replace(['-', '_', ' '], "").as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gold" => Some(GOLD),
        "palegoldenrod" => Some(PALE_GOLDENROD),
        "whitesmoke" => Some(WHITE_SMOKE),
        "slategray" | "slategrey" => Some(SLATE_GRAY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn rotate_four_steps_is_identity() {
        let v = Point::new(3.0, -7.5);
        assert_eq!(v.rotate_steps(4), v);
        assert_eq!(v.rotate_steps(0), v);
        assert_eq!(v.rotate_steps(-4), v);
    }

    #[test]
    fn rotate_one_then_three_is_identity() {
        let v = Point::new(2.0, 5.0);
        assert_eq!(v.rotate_steps(1), Point::new(-5.0, 2.0));
        assert_eq!(v.rotate_steps(1).rotate_steps(3), v);
        assert_eq!(v.rotate_steps(-1), v.rotate_steps(3));
    }

    #[test]
    fn rotate_degrees_matches_quarter_steps() {
        let v = Point::new(1.0, 2.0);
        assert!(close(v.rotate_degrees(90.0), v.rotate_steps(1)));
        assert!(close(v.rotate_degrees(180.0), v.rotate_steps(2)));
        let pivot = Point::new(10.0, 10.0);
        assert!(close(
            Point::new(11.0, 10.0).rotate_around(pivot, 90.0),
            Point::new(10.0, 11.0)
        ));
    }

    #[test]
    fn normalize_guards_zero_vector() {
        assert!(Point::ZERO.normalize().is_none());
        let n = Point::new(3.0, 4.0).normalize().unwrap();
        assert!(close(n, Point::new(0.6, 0.8)));
    }

    #[test]
    fn distance_of_three_four_five() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn project_xy_keeps_shorter_axis() {
        let (closest, normal) = project_xy(Point::ZERO, Point::new(3.0, 10.0));
        assert_eq!(closest, Point::new(3.0, 0.0));
        assert_eq!(normal, Point::new(0.0, 3.0));

        let (closest, normal) = project_xy(Point::new(10.0, 10.0), Point::new(0.0, 8.0));
        assert_eq!(closest, Point::new(0.0, -2.0));
        assert_eq!(normal, Point::new(-2.0, 0.0));
    }

    #[test]
    fn project_xy_on_axis_yields_zero_normal() {
        let (closest, normal) = project_xy(Point::ZERO, Point::new(5.0, 0.0));
        assert_eq!(closest, Point::new(0.0, 0.0));
        assert_eq!(normal, Point::new(0.0, 0.0));
    }

    #[test]
    fn rect_contains_is_inclusive_and_normalizes() {
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(rect_contains(&rect, Point::new(0.0, 0.0)));
        assert!(rect_contains(&rect, Point::new(10.0, 10.0)));
        assert!(rect_contains(&rect, Point::new(5.0, 5.0)));
        assert!(!rect_contains(&rect, Point::new(10.5, 5.0)));
    }

    #[test]
    fn bounding_and_inflate() {
        let r = Rect::bounding([Point::new(4.0, 1.0), Point::new(-2.0, 6.0)]);
        assert_eq!(r, Rect::new(-2.0, 1.0, 4.0, 6.0));
        assert_eq!(r.inflate(1.0, 2.0), Rect::new(-3.0, -1.0, 5.0, 8.0));
        assert!(r.inflate(-4.0, 0.0).is_inverted());
    }

    #[test]
    fn pixel_rect_rounds_outwards() {
        let px = PixelRect::from_rect(&Rect::new(0.5, 1.2, 10.1, 5.0)).unwrap();
        assert_eq!(px, PixelRect::new(0, 1, 11, 4).unwrap());
        assert!(PixelRect::from_rect(&Rect::new(1.0, 1.0, 1.0, 4.0)).is_none());
    }

    #[test]
    fn color_names_resolve() {
        assert_eq!(name_to_color("Gold").unwrap(), GOLD);
        assert_eq!(name_to_color("pale-goldenrod").unwrap(), PALE_GOLDENROD);
        assert!(name_to_color("chartreuse").is_none());
    }
}
