//! Measurement label attached to a tool.

use crate::draw::{Canvas, Color, Paint, TextStyle, text_size};
use crate::util::{Point, Rect, Size};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where a tool's label is drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LabelLocation {
    /// Not drawn
    #[default]
    Off,
    /// Centred on the shape
    CenterTool,
    /// Just above the `P1` corner
    AboveMouse,
}

impl LabelLocation {
    pub const ALL: [LabelLocation; 3] = [
        LabelLocation::Off,
        LabelLocation::CenterTool,
        LabelLocation::AboveMouse,
    ];

    /// The following placement, wrapping around.
    pub fn next(self) -> LabelLocation {
        let index = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LabelLocation::Off => "Off",
            LabelLocation::CenterTool => "Center",
            LabelLocation::AboveMouse => "Above mouse",
        }
    }
}

/// Appearance of labels; built once from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub text: TextStyle,
    pub background: Color,
    /// Space between the text and the box edge
    pub padding: f64,
}

impl LabelStyle {
    /// Box size for `text`: its pango extents plus padding on every side.
    pub fn measure(&self, text: &str) -> Size {
        let extents = text_size(text, &self.text);
        Size::new(
            extents.width + 2.0 * self.padding,
            extents.height + 2.0 * self.padding,
        )
    }
}

/// Text in a filled box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    pos: Point,
    size: Size,
    text: String,
}

impl Label {
    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text and resizes the box to fit it.
    pub fn set_text(&mut self, text: String, style: &LabelStyle) {
        self.size = style.measure(&text);
        self.text = text;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, style: &LabelStyle) {
        if self.text.is_empty() {
            return;
        }
        canvas.draw_rect(self.bounds(), &Paint::fill(style.background));
        let origin = self.pos + Point::new(style.padding, style.padding);
        canvas.draw_text(origin, &self.text, &style.text);
    }
}
