//! Measuring tools: geometry, interaction state machine and decorations.
//!
//! A [`Tool`] is a quad of four [`Endpoint`]s driven by mouse input. Its
//! [`ToolKind`] decides what the quad means (a line between two corners, a
//! rectangle, or the oval inscribed in it), how it is measured and how a
//! locked resize snaps. [`ToolSet`] owns one tool per kind and broadcasts the
//! shared settings to all of them.

pub mod endpoint;
pub mod kind;
pub mod label;
pub mod mark;
pub mod style;
pub mod tool;
pub mod toolset;


pub use endpoint::{Corner, Endpoint};
pub use kind::ToolKind;
pub use label::{Label, LabelLocation, LabelStyle};
pub use mark::{Mark, MarkCategory, MarkSet, default_visible_marks};
pub use style::ToolStyle;
pub use tool::{Tool, ToolMode};
pub use toolset::ToolSet;

use std::collections::BTreeMap;

/// Quantities a tool can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Measurement {
    Length,
    Width,
    Height,
    Area,
    Circumference,
}

impl Measurement {
    pub fn display_name(self) -> &'static str {
        match self {
            Measurement::Length => "Length",
            Measurement::Width => "Width",
            Measurement::Height => "Height",
            Measurement::Area => "Area",
            Measurement::Circumference => "Circumference",
        }
    }
}

/// Measurements keyed and ordered by [`Measurement`]. Empty for hidden or
/// degenerate tools.
pub type Measurements = BTreeMap<Measurement, f64>;
