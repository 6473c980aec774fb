//! App state and construction.

use super::events::Modifiers;
use crate::config::{Action, KeyBinding, Style};
use crate::measure::ToolSet;
use crate::overlay::{HelpLines, InfoWindow, WindowLayout, ZoomWindow};
use crate::services::ScreenService;
use crate::state::AppState;
use crate::util::{Point, Rect};
use log::info;
use std::collections::HashMap;

/// Owns the tools and overlays and the screen they are shown on.
pub struct App {
    pub(super) screen: Box<dyn ScreenService>,
    pub(super) style: Style,
    pub(super) tools: ToolSet,
    pub(super) info: InfoWindow,
    pub(super) zoom: ZoomWindow,
    pub(super) help_lines: HelpLines,
    pub(super) screen_bounds: Rect,
    /// Cursor position of the previous mouse event, for move deltas
    pub(super) last_pos: Point,
    pub modifiers: Modifiers,
    pub(super) action_map: HashMap<KeyBinding, Action>,
    pub(super) should_exit: bool,
    pub(super) needs_redraw: bool,
}

impl App {
    /// Builds the tools and windows for `screen` and restores `state`.
    pub fn new(
        screen: Box<dyn ScreenService>,
        style: Style,
        action_map: HashMap<KeyBinding, Action>,
        state: &AppState,
    ) -> Self {
        let screen_bounds = screen.dimensions().to_rect();
        let layout = WindowLayout::for_screen(screen_bounds, &style.window);

        let mut tools = ToolSet::new(&style.tool, &state.marks_visible);
        tools.select(state.active_tool);
        tools.set_label_location(state.label_location);
        tools.set_wide_lines(state.wide_lines);
        tools.set_locked(state.locked);

        let mut info = InfoWindow::new(layout.info);
        info.frame_mut().set_visible(state.info_window_visible);

        let mut zoom = ZoomWindow::new(layout.zoom, style.window.zoom_factor);
        zoom.frame_mut().set_visible(state.zoom_window_visible);
        zoom.set_crosshair_visible(!state.help_lines_visible);

        let mut help_lines = HelpLines::new(screen_bounds);
        help_lines.set_visible(state.help_lines_visible);

        let last_pos = screen.cursor_position();
        help_lines.set_pos(last_pos);

        info.report_selected_tool(tools.active().kind());
        info.report_label_placement(tools.label_location());
        info.report_mouse_position(last_pos);
        info.report_measurements(&tools.active().measure());

        info!(
            "Screen {}x{}, active tool {}",
            screen_bounds.width(),
            screen_bounds.height(),
            tools.active().kind().display_name()
        );

        Self {
            screen,
            style,
            tools,
            info,
            zoom,
            help_lines,
            screen_bounds,
            last_pos,
            modifiers: Modifiers::default(),
            action_map,
            should_exit: false,
            needs_redraw: true,
        }
    }

    /// Settings to persist for the next run.
    pub fn app_state(&self) -> AppState {
        AppState {
            active_tool: self.tools.active().kind(),
            label_location: self.tools.label_location(),
            help_lines_visible: self.help_lines.is_visible(),
            zoom_window_visible: self.zoom.frame().is_visible(),
            info_window_visible: self.info.frame().is_visible(),
            marks_visible: self.tools.visible_marks(),
            wide_lines: self.tools.wide_lines(),
            locked: self.tools.active().is_locked(),
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn tools(&self) -> &ToolSet {
        &self.tools
    }

    pub fn info(&self) -> &InfoWindow {
        &self.info
    }

    pub fn zoom(&self) -> &ZoomWindow {
        &self.zoom
    }

    pub fn help_lines(&self) -> &HelpLines {
        &self.help_lines
    }

    pub fn screen_bounds(&self) -> Rect {
        self.screen_bounds
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Returns whether a repaint was requested since the last call, and clears it.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Looks up the action bound to `key` under the current modifiers.
    pub(super) fn find_action(&self, key: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }

    /// Pushes the active tool's measurements to the info window.
    pub(super) fn report_measurements(&mut self) {
        let measurements = self.tools.active().measure();
        self.info.report_measurements(&measurements);
    }
}
