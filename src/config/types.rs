//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Measuring tool appearance.
///
/// Sizes are in pixels. Colors apply to all three tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    /// Outline width (valid range: 0.5 - 10.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Width multiplier while wide lines are toggled on (valid range: 1.0 - 10.0)
    #[serde(default = "default_wide_line_factor")]
    pub wide_line_factor: f64,

    /// Corner handle size and grab radius (valid range: 4.0 - 48.0)
    #[serde(default = "default_endpoint_size")]
    pub endpoint_size: f64,

    /// Length of mark ticks (valid range: 2.0 - 40.0)
    #[serde(default = "default_mark_size")]
    pub mark_size: f64,

    /// Space between the corners and the dashed move frame (valid range: 0.0 - 32.0)
    #[serde(default = "default_bounds_padding")]
    pub bounds_padding: f64,

    /// Outline and mark color
    #[serde(default = "default_tool_color")]
    pub color: ColorSpec,

    /// Golden ratio mark color
    #[serde(default = "default_golden_ratio_color")]
    pub golden_ratio_color: ColorSpec,

    /// Move frame color
    #[serde(default = "default_frame_color")]
    pub frame_color: ColorSpec,

    /// Corner handle color
    #[serde(default = "default_frame_color")]
    pub endpoint_color: ColorSpec,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            wide_line_factor: default_wide_line_factor(),
            endpoint_size: default_endpoint_size(),
            mark_size: default_mark_size(),
            bounds_padding: default_bounds_padding(),
            color: default_tool_color(),
            golden_ratio_color: default_golden_ratio_color(),
            frame_color: default_frame_color(),
            endpoint_color: default_frame_color(),
        }
    }
}

/// Measurement label appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LabelConfig {
    /// Font family name; a fixed-width face keeps numbers aligned
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font size in points (valid range: 6.0 - 48.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Space around the text inside the label box (valid range: 0.0 - 20.0)
    #[serde(default = "default_label_padding")]
    pub padding: f64,

    #[serde(default = "default_text_color")]
    pub text_color: ColorSpec,

    #[serde(default = "default_panel_background")]
    pub background_color: ColorSpec,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_size: default_font_size(),
            padding: default_label_padding(),
            text_color: default_text_color(),
            background_color: default_panel_background(),
        }
    }
}

/// Info and zoom window settings.
///
/// Both windows are squares whose side is the screen height divided by
/// `size_divisor`. They sit in the bottom-right corner, info above zoom.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WindowsConfig {
    /// Screen height divided by this gives the window side (valid range: 2.0 - 20.0)
    #[serde(default = "default_size_divisor")]
    pub size_divisor: f64,

    /// Magnification of the zoom window (valid range: 1.0 - 20.0)
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,

    /// Zoom refresh period in milliseconds (valid range: 10 - 1000)
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Gap between the windows and the screen edge
    #[serde(default = "default_window_margin")]
    pub margin: f64,

    /// Left column width of the info window, where values start
    #[serde(default = "default_text_margin")]
    pub text_margin: f64,

    /// Crosshair length in the zoom window
    #[serde(default = "default_crosshair_size")]
    pub crosshair_size: f64,

    #[serde(default = "default_crosshair_color")]
    pub crosshair_color: ColorSpec,

    #[serde(default = "default_crosshair_color")]
    pub help_line_color: ColorSpec,

    #[serde(default = "default_tool_color")]
    pub border_color: ColorSpec,

    #[serde(default = "default_panel_background")]
    pub background_color: ColorSpec,

    #[serde(default = "default_text_color")]
    pub text_color: ColorSpec,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            size_divisor: default_size_divisor(),
            zoom_factor: default_zoom_factor(),
            refresh_interval_ms: default_refresh_interval_ms(),
            margin: default_window_margin(),
            text_margin: default_text_margin(),
            crosshair_size: default_crosshair_size(),
            crosshair_color: default_crosshair_color(),
            help_line_color: default_crosshair_color(),
            border_color: default_tool_color(),
            background_color: default_panel_background(),
            text_color: default_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_line_width() -> f64 {
    1.0
}

fn default_wide_line_factor() -> f64 {
    3.0
}

fn default_endpoint_size() -> f64 {
    12.0
}

fn default_mark_size() -> f64 {
    10.0
}

fn default_bounds_padding() -> f64 {
    4.0
}

fn default_tool_color() -> ColorSpec {
    ColorSpec::name("red")
}

fn default_golden_ratio_color() -> ColorSpec {
    ColorSpec::name("gold")
}

fn default_frame_color() -> ColorSpec {
    ColorSpec::name("palegoldenrod")
}

fn default_font_family() -> String {
    "Monospace".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    12.0
}

fn default_label_padding() -> f64 {
    4.0
}

fn default_text_color() -> ColorSpec {
    ColorSpec::name("whitesmoke")
}

fn default_panel_background() -> ColorSpec {
    ColorSpec::Rgba([0x70, 0x80, 0x90, 0xA0])
}

fn default_size_divisor() -> f64 {
    5.0
}

fn default_zoom_factor() -> f64 {
    5.0
}

fn default_refresh_interval_ms() -> u64 {
    50
}

fn default_window_margin() -> f64 {
    4.0
}

fn default_text_margin() -> f64 {
    65.0
}

fn default_crosshair_size() -> f64 {
    20.0
}

fn default_crosshair_color() -> ColorSpec {
    ColorSpec::name("gold")
}
