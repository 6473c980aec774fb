//! Drawing surface abstraction.
//!
//! Tools and overlay windows decide *what* to draw and hand fully resolved
//! geometry to a [`Canvas`]. [`CairoCanvas`](super::CairoCanvas) paints with
//! cairo, [`RecordingCanvas`](super::RecordingCanvas) keeps a list for tests.

use super::{Image, Paint, TextStyle};
use crate::util::{Point, Rect};

pub trait Canvas {
    /// Pushes the clip state.
    fn save(&mut self);

    /// Pops the clip state pushed by the matching [`Canvas::save`].
    fn restore(&mut self);

    /// Intersects the clip with the ellipse inscribed in `bounds`.
    fn clip_oval(&mut self, bounds: Rect);

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);

    /// Draws `rect`; swapped edges are normalized.
    fn draw_rect(&mut self, rect: Rect, paint: &Paint);

    /// Draws the ellipse inscribed in `bounds`.
    fn draw_oval(&mut self, bounds: Rect, paint: &Paint);

    /// Draws `rect` rotated by `degrees` around its centre.
    fn draw_rotated_rect(&mut self, rect: Rect, degrees: f64, paint: &Paint);

    /// Draws a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle);

    /// Blits `image` with its top-left corner at `dest`, magnified by `scale`.
    fn draw_image(&mut self, image: &Image, dest: Point, scale: f64);
}
