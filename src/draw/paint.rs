//! Stroke/fill descriptions handed to a [`Canvas`](super::Canvas).

use super::{Color, FontDescriptor};

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
    StrokeAndFill,
}

/// Color, width and dash pattern for one primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    pub style: PaintStyle,
    /// On/off dash lengths; `None` for solid lines
    pub dash: Option<[f64; 2]>,
}

impl Paint {
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: PaintStyle::Stroke,
            dash: None,
        }
    }

    pub fn fill(color: Color) -> Self {
        Self {
            color,
            width: 1.0,
            style: PaintStyle::Fill,
            dash: None,
        }
    }

    pub fn dashed(mut self, on: f64, off: f64) -> Self {
        self.dash = Some([on, off]);
        self
    }

    pub fn with_width(&self, width: f64) -> Self {
        Self {
            width,
            ..self.clone()
        }
    }

    pub fn with_style(&self, style: PaintStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }
}

/// Font, size and color for a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontDescriptor,
    /// Font size in points
    pub size: f64,
    pub color: Color,
}
