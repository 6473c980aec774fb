//! A single measuring tool and its interaction state machine.
//!
//! Clicks drive the mode through `Hidden → Resizing → Passive → {Moving |
//! Resizing} → Passive → Hidden`. Mouse moves never change the mode; while
//! passive they only refresh the `movable`/`resizable` hover flags that the
//! next click interprets.

use super::{
    Corner, Endpoint, Label, LabelLocation, Mark, MarkCategory, MarkSet, Measurements, ToolKind,
    ToolStyle,
};
use crate::draw::{Canvas, Paint};
use crate::util::{Point, Rect, rect_contains};
use log::debug;

/// Interaction mode of a tool. Exactly one applies at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// Not shown; the next click places it
    Hidden,
    /// The focused corner follows the cursor
    Resizing,
    /// The whole tool follows the cursor
    Moving,
    /// Placed and waiting for the next click
    Passive,
}

#[derive(Debug, Clone)]
pub struct Tool {
    kind: ToolKind,
    style: ToolStyle,
    endpoints: [Endpoint; 4],
    marks: Vec<Mark>,
    label: Label,
    label_location: LabelLocation,
    /// Corner bounds inflated by the style's padding
    frame: Rect,
    mode: ToolMode,
    movable: bool,
    resizable: bool,
    locked: bool,
    wide_lines: bool,
}

impl Tool {
    pub fn new(kind: ToolKind, style: ToolStyle, visible_marks: &MarkSet) -> Self {
        let mut endpoints: [Endpoint; 4] =
            std::array::from_fn(|_| Endpoint::new(Point::ZERO, style.endpoint_size));
        for corner in kind.grip_corners() {
            endpoints[corner.index()].visible = true;
        }

        let marks = kind
            .supported_marks()
            .iter()
            .map(|&category| {
                let size = match category {
                    MarkCategory::Endpoint => style.endpoint_size,
                    _ => style.mark_size,
                };
                Mark::new(category, size, visible_marks.contains(&category))
            })
            .collect();

        let mut tool = Self {
            kind,
            style,
            endpoints,
            marks,
            label: Label::default(),
            label_location: LabelLocation::default(),
            frame: Rect::default(),
            mode: ToolMode::Hidden,
            movable: false,
            resizable: false,
            locked: false,
            wide_lines: false,
        };
        tool.update_bounds();
        tool.update_label();
        tool
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn is_visible(&self) -> bool {
        self.mode != ToolMode::Hidden
    }

    pub fn is_resizing(&self) -> bool {
        self.mode == ToolMode::Resizing
    }

    pub fn is_moving(&self) -> bool {
        self.mode == ToolMode::Moving
    }

    /// Cursor was inside the inner frame and off every handle at the last bounds check.
    pub fn is_movable(&self) -> bool {
        self.movable
    }

    /// Cursor was on a corner handle at the last bounds check.
    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn wide_lines(&self) -> bool {
        self.wide_lines
    }

    pub fn set_wide_lines(&mut self, wide: bool) {
        self.wide_lines = wide;
    }

    pub fn endpoint(&self, corner: Corner) -> &Endpoint {
        &self.endpoints[corner.index()]
    }

    pub fn endpoints(&self) -> &[Endpoint; 4] {
        &self.endpoints
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_location(&self) -> LabelLocation {
        self.label_location
    }

    pub fn set_label_location(&mut self, location: LabelLocation) {
        self.label_location = location;
        self.update_label();
    }

    /// First focused corner in `P0..P3` order.
    pub fn active_corner(&self) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .find(|c| self.endpoints[c.index()].focused)
    }

    pub fn active_endpoint(&self) -> Option<&Endpoint> {
        self.active_corner().map(|c| self.endpoint(c))
    }

    /// The corner opposite the focused one, which a resize keeps fixed.
    pub fn diagonal_endpoint(&self) -> Option<&Endpoint> {
        self.active_corner().map(|c| self.endpoint(c.diagonal()))
    }

    /// True when the two placed corners coincide.
    pub fn is_degenerate(&self) -> bool {
        self.endpoint(Corner::P0).pos == self.endpoint(Corner::P1).pos
    }

    // ========================================================================
    // State machine
    // ========================================================================

    /// Refreshes the hover flags for a cursor position.
    pub fn check_bounds(&mut self, cursor: Point) {
        for endpoint in &mut self.endpoints {
            endpoint.check_focus(cursor);
        }
        self.resizable = self.endpoints.iter().any(|e| e.focused);

        // The inset flips on thin tools; rect_contains normalizes it back.
        let grip = self.style.endpoint_size;
        let inner = self.frame.inflate(-2.0 * grip, -2.0 * grip);
        self.movable = !self.resizable && rect_contains(&inner, cursor);
    }

    /// Advances the state machine for a click at `p` and returns the new mode.
    pub fn next_action(&mut self, p: Point) -> ToolMode {
        let previous = self.mode;
        match self.mode {
            ToolMode::Hidden => {
                for endpoint in &mut self.endpoints {
                    endpoint.move_to(p);
                    endpoint.focused = false;
                }
                self.endpoints[Corner::P1.index()].focused = true;
                self.movable = false;
                self.resizable = false;
                self.mode = ToolMode::Resizing;
                self.update_bounds();
                self.update_label();
            }
            ToolMode::Resizing | ToolMode::Moving => {
                self.mode = ToolMode::Passive;
            }
            ToolMode::Passive if self.movable => {
                self.movable = false;
                self.mode = ToolMode::Moving;
            }
            ToolMode::Passive if self.resizable => {
                self.resizable = false;
                self.mode = ToolMode::Resizing;
            }
            ToolMode::Passive => {
                self.hide();
            }
        }
        debug!(
            "{} tool: {:?} -> {:?} at ({:.1}, {:.1})",
            self.kind.display_name(),
            previous,
            self.mode,
            p.x,
            p.y
        );
        self.mode
    }

    /// Returns the tool to `Hidden` and clears every transient flag.
    pub fn hide(&mut self) {
        self.mode = ToolMode::Hidden;
        self.movable = false;
        self.resizable = false;
        for endpoint in &mut self.endpoints {
            endpoint.focused = false;
        }
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Drags the focused corner to `p`. Does nothing without a focused corner.
    ///
    /// The two neighbors take over the shared coordinate so the quad stays
    /// axis-aligned; the diagonal corner never moves.
    pub fn resize(&mut self, p: Point) {
        let Some(corner) = self.active_corner() else {
            return;
        };

        let p = if self.locked {
            let anchor = self.endpoint(corner.diagonal()).pos;
            self.kind.locked_position(anchor, p)
        } else {
            p
        };

        self.endpoints[corner.index()].move_to(p);
        let (shares_x, shares_y) = corner.neighbors();
        self.endpoints[shares_x.index()].pos.x = p.x;
        self.endpoints[shares_y.index()].pos.y = p.y;

        self.update_bounds();
        self.update_label();
    }

    /// Translates the whole tool. The label text stays as it is.
    pub fn move_by(&mut self, delta: Point) {
        for endpoint in &mut self.endpoints {
            endpoint.move_to(endpoint.pos + delta);
        }
        self.frame = self.frame.offset(delta);
        let pos = self.label_position();
        self.label.set_pos(pos);
    }

    /// Measurements of the current shape; empty when hidden or degenerate.
    pub fn measure(&self) -> Measurements {
        if !self.is_visible() || self.is_degenerate() {
            return Measurements::new();
        }
        self.kind.measure(
            self.endpoint(Corner::P0).pos,
            self.endpoint(Corner::P1).pos,
        )
    }

    fn update_bounds(&mut self) {
        let pad = self.style.bounds_padding;
        self.frame = Rect::bounding(self.endpoints.iter().map(|e| e.pos)).inflate(pad, pad);
    }

    fn update_label(&mut self) {
        let text = self.kind.label_text(&self.measure());
        self.label.set_text(text, &self.style.label);
        let pos = self.label_position();
        self.label.set_pos(pos);
    }

    fn label_position(&self) -> Point {
        let p0 = self.endpoint(Corner::P0).pos;
        let p1 = self.endpoint(Corner::P1).pos;
        let size = self.label.size();
        match self.label_location {
            LabelLocation::AboveMouse => p1 + Point::new(0.0, -size.height),
            LabelLocation::CenterTool | LabelLocation::Off => {
                let center = p0 + (p1 - p0) * 0.5;
                center - Point::new(size.width / 2.0, size.height / 2.0)
            }
        }
    }

    // ========================================================================
    // Marks
    // ========================================================================

    /// Visibility of a category, or `None` if this tool does not own it.
    pub fn mark_visible(&self, category: MarkCategory) -> Option<bool> {
        self.marks
            .iter()
            .find(|m| m.category == category)
            .map(|m| m.visible)
    }

    /// Flips a category. Returns false when this tool does not own it.
    pub fn toggle_mark(&mut self, category: MarkCategory) -> bool {
        match self.marks.iter_mut().find(|m| m.category == category) {
            Some(mark) => {
                mark.visible = !mark.visible;
                true
            }
            None => false,
        }
    }

    /// Shows exactly the owned categories contained in `visible`.
    pub fn set_marks_visible(&mut self, visible: &MarkSet) {
        for mark in &mut self.marks {
            mark.visible = visible.contains(&mark.category);
        }
    }

    pub fn visible_marks(&self) -> MarkSet {
        self.marks
            .iter()
            .filter(|m| m.visible)
            .map(|m| m.category)
            .collect()
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    fn line_paint(&self) -> Paint {
        let width = if self.wide_lines {
            self.style.line.width * self.style.wide_line_factor
        } else {
            self.style.line.width
        };
        self.style.line.with_width(width)
    }

    /// Draws marks, outline, handles, frame and label, in that order.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.is_visible() || self.is_degenerate() {
            return;
        }

        let line = self.line_paint();
        let marks: Vec<(&Mark, Paint)> = self
            .marks
            .iter()
            .filter(|m| m.visible)
            .map(|m| {
                let paint = match m.category {
                    MarkCategory::GoldenRatio => self.style.golden_ratio.with_width(line.width),
                    _ => line.clone(),
                };
                (m, paint)
            })
            .collect();

        self.kind.draw_shape(
            canvas,
            self.endpoint(Corner::P0).pos,
            self.endpoint(Corner::P1).pos,
            self.frame,
            &marks,
            &line,
        );

        if self.resizable && !self.is_resizing() {
            for endpoint in &self.endpoints {
                endpoint.draw(canvas, &self.style.endpoint);
            }
        }

        if self.movable {
            canvas.draw_rect(self.frame, &self.style.frame);
        }

        if self.label_location != LabelLocation::Off {
            self.label.draw(canvas, &self.style.label);
        }
    }
}
