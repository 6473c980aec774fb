use crate::measure::ToolMode;
use crate::services::CursorHint;
use crate::util::Point;

use super::App;

fn hint_for(mode: ToolMode, grippable: bool) -> CursorHint {
    match mode {
        ToolMode::Resizing => CursorHint::Resizing,
        ToolMode::Moving => CursorHint::Moving,
        ToolMode::Hidden | ToolMode::Passive if grippable => CursorHint::CanGrip,
        ToolMode::Hidden | ToolMode::Passive => CursorHint::Normal,
    }
}

impl App {
    /// Processes mouse motion.
    ///
    /// # Behavior
    /// - Help lines and the mouse readout always follow the cursor
    /// - A resizing tool drags its focused corner, a moving tool follows the delta
    /// - Otherwise the hover flags are refreshed and the cursor hint updated
    pub fn on_mouse_move(&mut self, pos: Point) {
        let delta = pos - self.last_pos;
        self.last_pos = pos;

        self.help_lines.set_pos(pos);
        self.info.report_mouse_position(pos);
        self.needs_redraw = true;

        let tool = self.tools.active_mut();
        if !tool.is_visible() {
            return;
        }

        match tool.mode() {
            ToolMode::Resizing => tool.resize(pos),
            ToolMode::Moving => tool.move_by(delta),
            ToolMode::Hidden | ToolMode::Passive => tool.check_bounds(pos),
        }
        let hint = hint_for(tool.mode(), tool.is_movable() || tool.is_resizable());
        self.screen.set_cursor_hint(hint);
        self.report_measurements();
    }

    /// Processes a click: advances the active tool's state machine.
    pub fn on_mouse_click(&mut self, pos: Point) {
        self.last_pos = pos;

        let tool = self.tools.active_mut();
        let mode = tool.next_action(pos);
        let grippable = tool.is_movable() || tool.is_resizable();
        self.screen.set_cursor_hint(hint_for(mode, grippable));

        self.report_measurements();
        self.needs_redraw = true;
    }
}
