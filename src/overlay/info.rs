//! Text panel listing the active tool, label placement, cursor and measurements.

use super::{WindowFrame, WindowStyle};
use crate::draw::{Canvas, text_size};
use crate::measure::{LabelLocation, Measurements, ToolKind};
use crate::util::{Point, Rect};

/// Left padding of the name column.
const PADDING: f64 = 10.0;
/// Extra space between text lines.
const LINE_GAP: f64 = 10.0;
/// Measurement names are cut to fit the name column.
const NAME_WIDTH: usize = 7;
/// At most this many measurement lines are shown.
const MAX_MEASUREMENTS: usize = 4;

#[derive(Debug, Clone)]
pub struct InfoWindow {
    frame: WindowFrame,
    tool: String,
    label: String,
    mouse: String,
    measurements: Vec<String>,
}

impl InfoWindow {
    pub fn new(bounds: Rect) -> Self {
        Self {
            frame: WindowFrame::new(bounds),
            tool: String::new(),
            label: String::new(),
            mouse: String::new(),
            measurements: Vec::new(),
        }
    }

    pub fn frame(&self) -> &WindowFrame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut WindowFrame {
        &mut self.frame
    }

    pub fn report_selected_tool(&mut self, kind: ToolKind) {
        self.tool = format!("Tool:\t{}", kind.display_name());
    }

    pub fn report_label_placement(&mut self, location: LabelLocation) {
        self.label = format!("Label:\t{}", location.display_name());
    }

    pub fn report_mouse_position(&mut self, p: Point) {
        self.mouse = format!("Mouse:\t{:.1}, {:.1}", p.x, p.y);
    }

    pub fn report_measurements(&mut self, measurements: &Measurements) {
        self.measurements = measurements
            .iter()
            .take(MAX_MEASUREMENTS)
            .map(|(m, value)| format!("{:.width$}:\t{:.2}", m.display_name(), value, width = NAME_WIDTH))
            .collect();
    }

    /// Current text lines, each a name and a value separated by a tab.
    pub fn lines(&self) -> Vec<&str> {
        [&self.tool, &self.label, &self.mouse]
            .into_iter()
            .chain(&self.measurements)
            .map(String::as_str)
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, style: &WindowStyle) {
        if !self.frame.is_visible() {
            return;
        }
        let bounds = self.frame.bounds();
        self.frame.draw_background(canvas, style);

        let separator = bounds.left + style.text_margin;
        canvas.draw_line(
            Point::new(separator, bounds.top),
            Point::new(separator, bounds.bottom),
            &style.border,
        );

        let mut y = bounds.top + PADDING;
        for line in self.lines() {
            let (name, value) = line.split_once('\t').unwrap_or((line, ""));
            canvas.draw_text(Point::new(bounds.left + PADDING, y), name, &style.text);
            if !value.is_empty() {
                canvas.draw_text(Point::new(separator + PADDING, y), value, &style.text);
            }
            y += text_size(line, &style.text).height + LINE_GAP;
        }

        self.frame.draw_border(canvas, style);
    }
}
