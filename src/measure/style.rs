//! Immutable appearance settings shared by all tools.

use super::LabelStyle;
use crate::draw::Paint;

#[derive(Debug, Clone, PartialEq)]
pub struct ToolStyle {
    /// Shape outline and the non-golden marks
    pub line: Paint,
    /// Multiplier applied to line widths while wide lines are on
    pub wide_line_factor: f64,
    /// Golden ratio marks
    pub golden_ratio: Paint,
    /// Dashed frame shown while the tool can be moved
    pub frame: Paint,
    pub endpoint: Paint,
    pub endpoint_size: f64,
    pub mark_size: f64,
    /// Gap between the corners and the frame
    pub bounds_padding: f64,
    pub label: LabelStyle,
}
