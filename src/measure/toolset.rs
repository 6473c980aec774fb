//! The collection of tools and the settings they share.

use super::{LabelLocation, MarkCategory, MarkSet, Tool, ToolKind, ToolStyle};
use log::debug;

/// One tool per [`ToolKind`], with one of them active.
#[derive(Debug, Clone)]
pub struct ToolSet {
    tools: Vec<Tool>,
    active: usize,
    label_location: LabelLocation,
}

impl ToolSet {
    /// Builds a line, a rectangle and an oval tool sharing `style`.
    pub fn new(style: &ToolStyle, visible_marks: &MarkSet) -> Self {
        let tools = ToolKind::ALL
            .iter()
            .map(|&kind| Tool::new(kind, style.clone(), visible_marks))
            .collect();
        Self {
            tools,
            active: 0,
            label_location: LabelLocation::default(),
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn active(&self) -> &Tool {
        &self.tools[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Tool {
        &mut self.tools[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Activates the next tool, wrapping around, and returns its kind.
    ///
    /// The lock flag follows to the new tool so a held modifier keeps working.
    pub fn select_next(&mut self) -> ToolKind {
        let locked = self.active().is_locked();
        self.active = (self.active + 1) % self.tools.len();
        self.active_mut().set_locked(locked);
        debug!("Selected tool {}", self.active().kind().display_name());
        self.active().kind()
    }

    /// Activates the tool of `kind`.
    pub fn select(&mut self, kind: ToolKind) {
        if let Some(index) = self.tools.iter().position(|t| t.kind() == kind) {
            self.active = index;
        }
    }

    pub fn label_location(&self) -> LabelLocation {
        self.label_location
    }

    pub fn set_label_location(&mut self, location: LabelLocation) {
        self.label_location = location;
        for tool in &mut self.tools {
            tool.set_label_location(location);
        }
    }

    /// Advances the shared label placement and pushes it to every tool.
    pub fn toggle_label_placement(&mut self) -> LabelLocation {
        let next = self.label_location.next();
        self.set_label_location(next);
        debug!("Label placement: {}", next.display_name());
        next
    }

    /// Flips `category` on every tool that owns it.
    pub fn toggle_mark_category(&mut self, category: MarkCategory) {
        for tool in &mut self.tools {
            tool.toggle_mark(category);
        }
    }

    pub fn set_marks_visible(&mut self, visible: &MarkSet) {
        for tool in &mut self.tools {
            tool.set_marks_visible(visible);
        }
    }

    /// Categories shown on the first tool that owns each one.
    pub fn visible_marks(&self) -> MarkSet {
        MarkCategory::ALL
            .into_iter()
            .filter(|&category| {
                self.tools
                    .iter()
                    .find_map(|t| t.mark_visible(category))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn wide_lines(&self) -> bool {
        self.active().wide_lines()
    }

    pub fn set_wide_lines(&mut self, wide: bool) {
        for tool in &mut self.tools {
            tool.set_wide_lines(wide);
        }
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.active_mut().set_locked(locked);
    }
}
