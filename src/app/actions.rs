use crate::config::Action;
use crate::measure::MarkCategory;
use log::{debug, info};

use super::App;
use super::events::Key;

impl App {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state; Shift additionally locks
    /// the active tool. Everything else is looked up in the keybindings.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                self.tools.set_locked(true);
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event. Releasing Shift unlocks the active tool.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = false;
                self.tools.set_locked(false);
            }
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Handle an action triggered by a keybinding.
    pub fn handle_action(&mut self, action: Action) {
        debug!("Action: {}", action.description());
        match action {
            Action::Exit => {
                info!("Exit requested");
                self.should_exit = true;
            }
            Action::SelectNextTool => {
                let kind = self.tools.select_next();
                self.info.report_selected_tool(kind);
                self.report_measurements();
            }
            Action::ToggleLabelPlacement => {
                let location = self.tools.toggle_label_placement();
                self.info.report_label_placement(location);
            }
            Action::ToggleLineThickness => {
                let wide = !self.tools.wide_lines();
                self.tools.set_wide_lines(wide);
            }
            Action::ToggleMarksGoldenRatio => {
                self.tools.toggle_mark_category(MarkCategory::GoldenRatio);
            }
            Action::ToggleMarksEndpoint => {
                self.tools.toggle_mark_category(MarkCategory::Endpoint);
            }
            Action::ToggleMarksMiddle => {
                self.tools.toggle_mark_category(MarkCategory::Middle);
            }
            Action::ToggleMarksThird => {
                self.tools.toggle_mark_category(MarkCategory::Third);
            }
            Action::ToggleZoomWindow => {
                self.zoom.frame_mut().toggle_visible();
                self.screen.invalidate(self.zoom.frame().anchor());
            }
            Action::ToggleInfoWindow => {
                self.info.frame_mut().toggle_visible();
                self.screen.invalidate(self.info.frame().anchor());
            }
            Action::ToggleHelpLines => {
                let visible = self.help_lines.toggle_visible();
                self.zoom.set_crosshair_visible(!visible);
            }
        }
        self.needs_redraw = true;
    }
}
