//! Resolves configuration values into the immutable drawing styles handed
//! to tools and windows at construction.

use super::Config;
use crate::draw::{FontDescriptor, Paint, TextStyle};
use crate::measure::{LabelStyle, ToolStyle};
use crate::overlay::WindowStyle;
use std::time::Duration;

/// Frame dash pattern: 10 px on, 5 px off.
const FRAME_DASH: [f64; 2] = [10.0, 5.0];
const CROSSHAIR_WIDTH: f64 = 3.0;

/// Everything the app needs to draw, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub tool: ToolStyle,
    pub window: WindowStyle,
}

impl Style {
    pub fn from_config(config: &Config) -> Self {
        let tools = &config.tools;
        let label = &config.label;
        let windows = &config.windows;

        let text = TextStyle {
            font: FontDescriptor::new(
                label.font_family.clone(),
                label.font_weight.clone(),
                "normal".to_string(),
            ),
            size: label.font_size,
            color: label.text_color.to_color(),
        };

        let tool = ToolStyle {
            line: Paint::stroke(tools.color.to_color(), tools.line_width),
            wide_line_factor: tools.wide_line_factor,
            golden_ratio: Paint::stroke(tools.golden_ratio_color.to_color(), tools.line_width),
            frame: Paint::stroke(tools.frame_color.to_color(), 1.0)
                .dashed(FRAME_DASH[0], FRAME_DASH[1]),
            endpoint: Paint::stroke(tools.endpoint_color.to_color(), 1.0),
            endpoint_size: tools.endpoint_size,
            mark_size: tools.mark_size,
            bounds_padding: tools.bounds_padding,
            label: LabelStyle {
                text: text.clone(),
                background: label.background_color.to_color(),
                padding: label.padding,
            },
        };

        let window = WindowStyle {
            background: windows.background_color.to_color(),
            border: Paint::stroke(windows.border_color.to_color(), 1.0),
            text: TextStyle {
                color: windows.text_color.to_color(),
                ..text
            },
            text_margin: windows.text_margin,
            margin: windows.margin,
            size_divisor: windows.size_divisor,
            zoom_factor: windows.zoom_factor,
            crosshair: Paint::stroke(windows.crosshair_color.to_color(), CROSSHAIR_WIDTH),
            crosshair_size: windows.crosshair_size,
            help_line: Paint::stroke(windows.help_line_color.to_color(), 1.0),
            refresh_interval: Duration::from_millis(windows.refresh_interval_ms),
        };

        Self { tool, window }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{GOLD, PALE_GOLDENROD, RED};

    #[test]
    fn default_style_uses_measuring_palette() {
        let style = Style::default();
        assert_eq!(style.tool.line.color, RED);
        assert_eq!(style.tool.golden_ratio.color, GOLD);
        assert_eq!(style.tool.frame.color, PALE_GOLDENROD);
        assert_eq!(style.tool.frame.dash, Some([10.0, 5.0]));
        assert_eq!(style.tool.endpoint_size, 12.0);
        assert_eq!(style.tool.mark_size, 10.0);
        assert_eq!(style.tool.bounds_padding, 4.0);
        assert_eq!(style.window.zoom_factor, 5.0);
        assert_eq!(style.window.refresh_interval, Duration::from_millis(50));
    }

    #[test]
    fn label_text_follows_label_section() {
        let mut config = Config::default();
        config.label.font_size = 18.0;
        config.label.font_family = "JetBrains Mono".to_string();
        let style = Style::from_config(&config);
        assert_eq!(style.tool.label.text.size, 18.0);
        assert_eq!(style.tool.label.text.font.family, "JetBrains Mono");
        assert_eq!(style.window.text.size, 18.0);
    }
}
