//! Off-screen backend: a fixed-size screen backed by an in-memory image.
//!
//! Stands in for the compositor when replaying scripted input. The screen
//! content is an optional background picture; the cursor is whatever the
//! driver last set.

use crate::app::App;
use crate::draw::{Canvas, CairoCanvas, Image, TRANSPARENT, fill_background, image_from_surface};
use crate::services::{CursorHint, ScreenError, ScreenService};
use crate::util::{PixelRect, Point};
use anyhow::{Context, Result};
use log::debug;
use std::cell::RefCell;
use std::fs::File;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug)]
struct HeadlessInner {
    background: Image,
    cursor: Point,
    hint: CursorHint,
    invalidations: usize,
}

/// Cloning yields another handle to the same screen, so a driver can keep
/// one after giving the other to the [`App`].
#[derive(Debug, Clone)]
pub struct HeadlessScreen {
    inner: Rc<RefCell<HeadlessInner>>,
}

impl HeadlessScreen {
    /// Transparent screen of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_background(Image::new(width, height))
    }

    pub fn with_background(background: Image) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HeadlessInner {
                background,
                cursor: Point::ZERO,
                hint: CursorHint::default(),
                invalidations: 0,
            })),
        }
    }

    /// Screen showing a PNG picture at its native size.
    pub fn from_png(path: &Path) -> Result<Self, ScreenError> {
        let mut file = File::open(path)?;
        let png = cairo::ImageSurface::create_from_png(&mut file)
            .map_err(|e| ScreenError::Background(format!("{}: {}", path.display(), e)))?;

        // PNGs without alpha load as RGB24; repaint into ARGB32.
        let width = png.width();
        let height = png.height();
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
            .map_err(|e| ScreenError::Background(e.to_string()))?;
        {
            let ctx = cairo::Context::new(&surface)
                .map_err(|e| ScreenError::Background(e.to_string()))?;
            ctx.set_source_surface(&png, 0.0, 0.0)
                .map_err(|e| ScreenError::Background(e.to_string()))?;
            ctx.paint()
                .map_err(|e| ScreenError::Background(e.to_string()))?;
        }

        let image = image_from_surface(&mut surface)
            .ok_or_else(|| ScreenError::Background("unreadable pixel data".to_string()))?;
        debug!("Loaded {}x{} background from {}", width, height, path.display());
        Ok(Self::with_background(image))
    }

    pub fn set_cursor(&self, p: Point) {
        self.inner.borrow_mut().cursor = p;
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.inner.borrow().hint
    }

    pub fn invalidations(&self) -> usize {
        self.inner.borrow().invalidations
    }

    /// Paints the background and the app's current frame.
    pub fn render(&self, app: &App) -> Result<cairo::ImageSurface> {
        let inner = self.inner.borrow();
        let (width, height) = (inner.background.width(), inner.background.height());
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
            .context("Failed to create frame surface")?;
        {
            let ctx = cairo::Context::new(&surface).context("Failed to create cairo context")?;
            fill_background(&ctx, width, height, TRANSPARENT);
            let mut canvas = CairoCanvas::new(&ctx);
            canvas.draw_image(&inner.background, Point::ZERO, 1.0);
            app.draw(&mut canvas);
        }
        surface.flush();
        Ok(surface)
    }

    /// Renders the current frame and writes it as PNG.
    pub fn write_png(&self, app: &App, path: &Path) -> Result<()> {
        let surface = self.render(app)?;
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        surface
            .write_to_png(&mut file)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
        Ok(())
    }
}

impl ScreenService for HeadlessScreen {
    fn dimensions(&self) -> PixelRect {
        let inner = self.inner.borrow();
        PixelRect {
            x: 0,
            y: 0,
            width: inner.background.width(),
            height: inner.background.height(),
        }
    }

    fn capture(&mut self, rect: PixelRect) -> Result<Image, ScreenError> {
        let screen = self.dimensions();
        let outside = rect.x >= screen.width
            || rect.y >= screen.height
            || rect.x + rect.width <= 0
            || rect.y + rect.height <= 0;
        if outside {
            return Err(ScreenError::OutOfBounds(rect));
        }
        Ok(self.inner.borrow().background.crop(rect))
    }

    fn cursor_position(&self) -> Point {
        self.inner.borrow().cursor
    }

    fn set_cursor_hint(&mut self, hint: CursorHint) {
        self.inner.borrow_mut().hint = hint;
    }

    fn invalidate(&mut self, _p: Point) {
        self.inner.borrow_mut().invalidations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, image::pack_argb};

    #[test]
    fn capture_crops_background_and_pads_edges() {
        let mut screen = HeadlessScreen::with_background(Image::filled(50, 40, RED));
        let image = screen.capture(PixelRect::new(-5, 0, 10, 10).unwrap()).unwrap();
        assert_eq!(image.width(), 10);
        assert_eq!(image.pixel(0, 0), Some(0));
        assert_eq!(image.pixel(5, 0), Some(pack_argb(RED)));
    }

    #[test]
    fn capture_outside_screen_fails() {
        let mut screen = HeadlessScreen::new(50, 40);
        let err = screen.capture(PixelRect::new(60, 0, 10, 10).unwrap()).unwrap_err();
        assert!(matches!(err, ScreenError::OutOfBounds(_)));
    }

    #[test]
    fn clones_share_cursor_and_hint() {
        let screen = HeadlessScreen::new(50, 40);
        let mut other = screen.clone();
        screen.set_cursor(Point::new(3.0, 4.0));
        assert_eq!(other.cursor_position(), Point::new(3.0, 4.0));
        other.set_cursor_hint(CursorHint::Moving);
        assert_eq!(screen.cursor_hint(), CursorHint::Moving);
    }

    #[test]
    fn missing_png_is_io_error() {
        let err = HeadlessScreen::from_png(Path::new("/nonexistent/bg.png")).unwrap_err();
        assert!(matches!(err, ScreenError::Io(_)));
    }
}
