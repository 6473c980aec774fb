//! Cairo implementation of [`Canvas`], text metrics and pixel buffer conversions.

use super::{Canvas, Color, Image, Paint, PaintStyle, TextStyle};
use crate::util::{Point, Rect, Size};
use pango::prelude::FontMapExt;
use std::f64::consts::PI;

thread_local! {
    /// Pango context on the default cairo font map, shared by all measurements.
    static MEASURE_CONTEXT: pango::Context = pangocairo::FontMap::default().create_context();
}

fn text_layout(ctx: &pango::Context, text: &str, style: &TextStyle) -> pango::Layout {
    let layout = pango::Layout::new(ctx);
    let font_desc = pango::FontDescription::from_string(&style.font.to_pango_string(style.size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);
    layout
}

/// Logical size of `text` as [`CairoCanvas::draw_text`] lays it out.
pub fn text_size(text: &str, style: &TextStyle) -> Size {
    let (width, height) =
        MEASURE_CONTEXT.with(|ctx| text_layout(ctx, text, style).pixel_size());
    Size::new(width as f64, height as f64)
}

/// Paints onto a borrowed cairo context.
pub struct CairoCanvas<'a> {
    ctx: &'a cairo::Context,
}

impl<'a> CairoCanvas<'a> {
    pub fn new(ctx: &'a cairo::Context) -> Self {
        Self { ctx }
    }

    fn apply_paint(&self, paint: &Paint) {
        let Color { r, g, b, a } = paint.color;
        self.ctx.set_source_rgba(r, g, b, a);
        self.ctx.set_line_width(paint.width);
        match paint.dash {
            Some(pattern) => self.ctx.set_dash(&pattern, 0.0),
            None => self.ctx.set_dash(&[], 0.0),
        }
    }

    /// Consumes the current path with the paint's style.
    fn finish(&self, paint: &Paint) {
        self.apply_paint(paint);
        match paint.style {
            PaintStyle::Stroke => {
                let _ = self.ctx.stroke();
            }
            PaintStyle::Fill => {
                let _ = self.ctx.fill();
            }
            PaintStyle::StrokeAndFill => {
                let _ = self.ctx.fill_preserve();
                let _ = self.ctx.stroke();
            }
        }
    }

    /// Adds an ellipse path; returns false for a flat ellipse cairo cannot scale to.
    fn oval_path(&self, bounds: Rect) -> bool {
        let r = bounds.normalized();
        let rx = r.width() / 2.0;
        let ry = r.height() / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let c = r.center();

        self.ctx.save().ok();
        self.ctx.translate(c.x, c.y);
        self.ctx.scale(rx, ry);
        self.ctx.new_sub_path();
        self.ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
        self.ctx.restore().ok();
        true
    }
}

impl Canvas for CairoCanvas<'_> {
    fn save(&mut self) {
        self.ctx.save().ok();
    }

    fn restore(&mut self) {
        self.ctx.restore().ok();
    }

    fn clip_oval(&mut self, bounds: Rect) {
        self.ctx.new_path();
        if !self.oval_path(bounds) {
            self.ctx.rectangle(0.0, 0.0, 0.0, 0.0);
        }
        self.ctx.clip();
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.ctx.new_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.apply_paint(paint);
        let _ = self.ctx.stroke();
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        let r = rect.normalized();
        self.ctx.new_path();
        self.ctx.rectangle(r.left, r.top, r.width(), r.height());
        self.finish(paint);
    }

    fn draw_oval(&mut self, bounds: Rect, paint: &Paint) {
        self.ctx.new_path();
        if self.oval_path(bounds) {
            self.finish(paint);
        }
    }

    fn draw_rotated_rect(&mut self, rect: Rect, degrees: f64, paint: &Paint) {
        let r = rect.normalized();
        let c = r.center();

        self.ctx.new_path();
        self.ctx.save().ok();
        self.ctx.translate(c.x, c.y);
        self.ctx.rotate(degrees.to_radians());
        self.ctx
            .rectangle(-r.width() / 2.0, -r.height() / 2.0, r.width(), r.height());
        self.ctx.restore().ok();

        // Stroke after restore so the line width is not rotated.
        self.finish(paint);
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle) {
        self.ctx.save().ok();
        self.ctx.set_antialias(cairo::Antialias::Best);

        let layout = text_layout(&pangocairo::functions::create_context(self.ctx), text, style);

        let Color { r, g, b, a } = style.color;
        self.ctx.set_source_rgba(r, g, b, a);
        self.ctx.move_to(origin.x, origin.y);
        pangocairo::functions::show_layout(self.ctx, &layout);

        self.ctx.restore().ok();
    }

    fn draw_image(&mut self, image: &Image, dest: Point, scale: f64) {
        if image.is_empty() || scale <= 0.0 {
            return;
        }
        let surface = match surface_from_image(image) {
            Ok(surface) => surface,
            Err(err) => {
                log::warn!("Failed to wrap image for blitting: {}", err);
                return;
            }
        };

        self.ctx.save().ok();
        self.ctx.translate(dest.x, dest.y);
        self.ctx.scale(scale, scale);
        if self.ctx.set_source_surface(&surface, 0.0, 0.0).is_ok() {
            // Magnified pixels should stay crisp.
            self.ctx.source().set_filter(cairo::Filter::Nearest);
            self.ctx
                .rectangle(0.0, 0.0, image.width() as f64, image.height() as f64);
            let _ = self.ctx.fill();
        }
        self.ctx.restore().ok();
    }
}

/// Copies an [`Image`] into a new cairo surface.
pub fn surface_from_image(image: &Image) -> Result<cairo::ImageSurface, cairo::Error> {
    cairo::ImageSurface::create_for_data(
        image.data().to_vec(),
        cairo::Format::ARgb32,
        image.width(),
        image.height(),
        image.stride(),
    )
}

/// Copies the pixels of an ARGB32 cairo surface into an [`Image`].
pub fn image_from_surface(surface: &mut cairo::ImageSurface) -> Option<Image> {
    surface.flush();
    let width = surface.width();
    let height = surface.height();
    let stride = surface.stride();
    let data = surface.data().ok()?.to_vec();
    Image::from_argb32(width, height, stride, data)
}

/// Paints the whole target with `color`, replacing what was there.
pub fn fill_background(ctx: &cairo::Context, width: i32, height: i32, color: Color) {
    ctx.save().ok();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_operator(cairo::Operator::Source);
    ctx.rectangle(0.0, 0.0, width as f64, height as f64);
    let _ = ctx.fill();
    ctx.restore().ok();
}
