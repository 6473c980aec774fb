//! Magnified view of the screen around a point.

use super::{WindowFrame, WindowStyle};
use crate::draw::{Canvas, Image};
use crate::util::{PixelRect, Point, Rect};

#[derive(Debug, Clone)]
pub struct ZoomWindow {
    frame: WindowFrame,
    image: Image,
    zoom_factor: f64,
    crosshair_visible: bool,
}

impl ZoomWindow {
    pub fn new(bounds: Rect, zoom_factor: f64) -> Self {
        Self {
            frame: WindowFrame::new(bounds),
            image: Image::empty(),
            zoom_factor: zoom_factor.max(1.0),
            crosshair_visible: true,
        }
    }

    pub fn frame(&self) -> &WindowFrame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut WindowFrame {
        &mut self.frame
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn crosshair_visible(&self) -> bool {
        self.crosshair_visible
    }

    pub fn set_crosshair_visible(&mut self, visible: bool) {
        self.crosshair_visible = visible;
    }

    /// Screen area that fills the window when magnified, centred on `center`.
    pub fn capture_rect(&self, center: Point) -> Option<PixelRect> {
        let bounds = self.frame.bounds();
        let width = (bounds.width() / self.zoom_factor).round() as i32;
        let height = (bounds.height() / self.zoom_factor).round() as i32;
        PixelRect::new(
            (center.x - width as f64 / 2.0).round() as i32,
            (center.y - height as f64 / 2.0).round() as i32,
            width,
            height,
        )
    }

    /// Replaces the magnified content. An empty image clears it.
    pub fn update(&mut self, image: Image) {
        self.image = image;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, style: &WindowStyle) {
        if !self.frame.is_visible() {
            return;
        }
        let bounds = self.frame.bounds();
        self.frame.draw_background(canvas, style);

        if !self.image.is_empty() {
            canvas.draw_image(&self.image, bounds.top_left(), self.zoom_factor);

            if self.crosshair_visible {
                let c = bounds.center();
                let half = style.crosshair_size / 2.0;
                canvas.draw_line(
                    Point::new(c.x - half, c.y),
                    Point::new(c.x + half, c.y),
                    &style.crosshair,
                );
                canvas.draw_line(
                    Point::new(c.x, c.y - half),
                    Point::new(c.x, c.y + half),
                    &style.crosshair,
                );
            }
        }

        self.frame.draw_border(canvas, style);
    }
}
