use crate::draw::Image;
use log::warn;

use super::App;

impl App {
    /// Periodic zoom refresh.
    ///
    /// Captures around the cursor, or around the focused corner during a
    /// locked resize so the loupe shows the snapped point.
    pub fn tick(&mut self) {
        if !self.zoom.frame().is_visible() {
            return;
        }

        let tool = self.tools.active();
        let locked_corner = if tool.is_resizing() && tool.is_locked() {
            tool.active_endpoint().map(|e| e.pos)
        } else {
            None
        };
        let center = locked_corner.unwrap_or_else(|| self.screen.cursor_position());

        let Some(rect) = self.zoom.capture_rect(center) else {
            return;
        };
        let image = match self.screen.capture(rect) {
            Ok(image) => image,
            Err(e) => {
                warn!("Zoom capture failed: {}", e);
                Image::empty()
            }
        };
        self.zoom.update(image);
        self.screen.invalidate(self.zoom.frame().anchor());
        self.needs_redraw = true;
    }
}
