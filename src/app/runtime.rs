use crate::app::App;
use crate::terminal::{Terminal, TerminalEvent};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Drives `app` on the alternate screen until it asks to exit. The terminal
/// is restored on both the success and the error path.
pub fn run(app: &mut dyn App, terminal: &mut Terminal) -> io::Result<()> {
    terminal.enter()?;
    let result = event_loop(app, terminal);
    let restored = terminal.exit();
    result.and(restored)
}

fn event_loop(app: &mut dyn App, terminal: &mut Terminal) -> io::Result<()> {
    let mut render_requested = true;

    loop {
        match terminal.poll_event(POLL_INTERVAL)? {
            TerminalEvent::Key(key_event) => {
                app.handle_key(key_event);
                render_requested = true;
            }
            TerminalEvent::Resize(size) => {
                tracing::debug!(width = size.width, height = size.height, "terminal resized");
                render_requested = true;
            }
            TerminalEvent::Tick => {}
        }

        if app.tick(terminal) {
            render_requested = true;
        }

        if app.should_exit() {
            break;
        }

        if render_requested {
            let frame = app.frame(terminal.size());
            terminal.render_frame(&frame)?;
            render_requested = false;
        }
    }

    Ok(())
}
