pub mod register;
pub mod routes;
pub mod runtime;

use crate::core::confirm::Confirm;
use crate::error::Result;
use crate::terminal::{KeyEvent, TerminalSize};
use crate::ui::frame::Frame;
use crate::ui::frame_json::frame_to_json;

pub use register::RegisterApp;
pub use routes::RoutesApp;
pub use runtime::run;

/// A screen driven by the runtime loop.
pub trait App {
    fn handle_key(&mut self, key_event: KeyEvent);

    /// Drains ready events. Returns true when something changed and the
    /// screen should be redrawn.
    fn tick(&mut self, confirm: &mut dyn Confirm) -> bool;

    fn frame(&self, size: TerminalSize) -> Frame;

    fn should_exit(&self) -> bool;
}

/// Renders a single frame without touching the terminal, as plain text or
/// as pretty-printed JSON.
pub fn render_once(app: &dyn App, size: TerminalSize, json: bool) -> Result<String> {
    let frame = app.frame(size);
    if json {
        Ok(serde_json::to_string_pretty(&frame_to_json(&frame, size))?)
    } else {
        Ok(frame.to_plain_text())
    }
}
