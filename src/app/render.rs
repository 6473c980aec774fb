use crate::draw::Canvas;

use super::App;

impl App {
    /// Draws one frame: help lines, the active tool, then the info and zoom windows.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let style = &self.style.window;
        self.help_lines.draw(canvas, style);
        self.tools.active().draw(canvas);
        self.info.draw(canvas, style);
        self.zoom.draw(canvas, style);
    }
}
