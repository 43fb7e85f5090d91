use crate::core::confirm::Confirm;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, TerminalEvent};
use crate::ui::frame::{Frame, Line};
use crate::ui::style::Color;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent,
    KeyEventKind, KeyModifiers as CrosstermKeyModifiers,
};
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

pub struct Terminal {
    stdout: Stdout,
    size: TerminalSize,
    scroll_offset: usize,
    entered: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            size: TerminalSize { width, height },
            scroll_offset: 0,
            entered: false,
        })
    }

    pub fn enter(&mut self) -> io::Result<()> {
        self.refresh_size()?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, Hide)?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen, Show)?;
        self.stdout.flush()
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    pub fn refresh_size(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.size = TerminalSize { width, height };
        Ok(())
    }

    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<TerminalEvent> {
        if !event::poll(timeout)? {
            return Ok(TerminalEvent::Tick);
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(TerminalEvent::Key(map_key_event(key)))
            }
            CrosstermEvent::Resize(width, height) => {
                self.size = TerminalSize { width, height };
                Ok(TerminalEvent::Resize(self.size))
            }
            _ => Ok(TerminalEvent::Tick),
        }
    }

    pub fn render_frame(&mut self, frame: &Frame) -> io::Result<()> {
        let height = self.size.height as usize;
        let width = self.size.width;

        if height == 0 || width == 0 {
            return Ok(());
        }

        self.scroll_offset = viewport_offset(frame, height, self.scroll_offset);
        let scroll_offset = self.scroll_offset;

        queue!(
            self.stdout,
            BeginSynchronizedUpdate,
            MoveTo(0, 0),
            Clear(ClearType::All)
        )?;

        for row_idx in 0..height {
            let Some(line) = frame.lines().get(scroll_offset + row_idx) else {
                break;
            };
            queue!(self.stdout, MoveTo(0, row_idx as u16))?;
            self.write_line(line, width)?;
        }

        match frame.cursor() {
            Some(cur) if (cur.row as usize) >= scroll_offset => {
                let screen_row = cur.row as usize - scroll_offset;
                if screen_row < height {
                    let col = cur.col.min(width.saturating_sub(1));
                    queue!(self.stdout, MoveTo(col, screen_row as u16), Show)?;
                } else {
                    queue!(self.stdout, Hide)?;
                }
            }
            _ => queue!(self.stdout, Hide)?,
        }

        queue!(self.stdout, EndSynchronizedUpdate)?;
        self.stdout.flush()
    }

    fn write_line(&mut self, line: &Line, width: u16) -> io::Result<()> {
        let render_width = width.saturating_sub(1).max(1) as usize;
        let mut used = 0usize;
        for span in line.spans() {
            if used >= render_width {
                break;
            }
            let clipped = clip_to_width(&span.text, render_width - used);
            if clipped.is_empty() {
                continue;
            }
            if let Some(color) = span.style.color {
                queue!(self.stdout, SetForegroundColor(map_color(color)))?;
            }
            if let Some(background) = span.style.background {
                queue!(self.stdout, SetBackgroundColor(map_color(background)))?;
            }
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if span.style.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }
            if span.style.underline {
                queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
            }
            queue!(self.stdout, Print(clipped.as_str()))?;
            if !span.style.is_plain() {
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
            used = used.saturating_add(UnicodeWidthStr::width(clipped.as_str()));
        }
        Ok(())
    }

    fn draw_prompt(&mut self, message: &str) -> io::Result<()> {
        let row = self.size.height.saturating_sub(1);
        let text = format!(" ? {message} [y/n] ");
        let clipped = clip_to_width(&text, self.size.width as usize);
        queue!(
            self.stdout,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            SetBackgroundColor(CrosstermColor::DarkRed),
            SetForegroundColor(CrosstermColor::White),
            SetAttribute(Attribute::Bold),
            Print(clipped),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Hide
        )?;
        self.stdout.flush()
    }

    fn read_answer(&mut self, message: &str) -> io::Result<bool> {
        self.draw_prompt(message)?;
        loop {
            match self.poll_event(Duration::from_millis(250))? {
                TerminalEvent::Key(key) => match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return Ok(true),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(false),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(false);
                    }
                    _ => {}
                },
                TerminalEvent::Resize(_) => self.draw_prompt(message)?,
                TerminalEvent::Tick => {}
            }
        }
    }
}

impl Confirm for Terminal {
    fn confirm(&mut self, message: &str) -> bool {
        match self.read_answer(message) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "confirmation prompt failed, treating as declined");
                false
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// First frame row to draw. Keeps the previous offset while the focus row
/// stays visible, otherwise scrolls just enough to reveal it. Frames with
/// no focus are pinned to their bottom.
pub(crate) fn viewport_offset(frame: &Frame, height: usize, previous: usize) -> usize {
    let max_offset = frame.lines().len().saturating_sub(height);
    let Some(row) = frame.focus_row() else {
        return max_offset;
    };
    let row = row as usize;
    let offset = previous.min(max_offset);
    if row < offset {
        row
    } else if row >= offset + height {
        (row + 1).saturating_sub(height).min(max_offset)
    } else {
        offset
    }
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::Reset => CrosstermColor::Reset,
        Color::Black => CrosstermColor::Black,
        Color::DarkGrey => CrosstermColor::DarkGrey,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Yellow => CrosstermColor::DarkYellow,
        Color::Blue => CrosstermColor::DarkBlue,
        Color::Magenta => CrosstermColor::DarkMagenta,
        Color::Cyan => CrosstermColor::DarkCyan,
        Color::White => CrosstermColor::White,
    }
}

fn map_key_event(key: CrosstermKeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(key.code),
        modifiers: map_key_modifiers(key.modifiers),
    }
}

fn map_key_code(code: CrosstermKeyCode) -> KeyCode {
    match code {
        CrosstermKeyCode::Char(ch) => KeyCode::Char(ch),
        CrosstermKeyCode::Enter => KeyCode::Enter,
        CrosstermKeyCode::Tab => KeyCode::Tab,
        CrosstermKeyCode::BackTab => KeyCode::BackTab,
        CrosstermKeyCode::Esc => KeyCode::Esc,
        CrosstermKeyCode::Backspace => KeyCode::Backspace,
        CrosstermKeyCode::Delete => KeyCode::Delete,
        CrosstermKeyCode::Home => KeyCode::Home,
        CrosstermKeyCode::End => KeyCode::End,
        CrosstermKeyCode::Left => KeyCode::Left,
        CrosstermKeyCode::Right => KeyCode::Right,
        CrosstermKeyCode::Up => KeyCode::Up,
        CrosstermKeyCode::Down => KeyCode::Down,
        _ => KeyCode::Unknown,
    }
}

fn map_key_modifiers(modifiers: CrosstermKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if modifiers.contains(CrosstermKeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(CrosstermKeyModifiers::CONTROL) {
        out |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(CrosstermKeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    out
}

fn clip_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars().filter(|ch| !matches!(ch, '\n' | '\r')) {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > max_width {
            break;
        }
        out.push(ch);
        used = used.saturating_add(ch_width);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{clip_to_width, viewport_offset};
    use crate::ui::frame::Frame;
    use crate::ui::span::Span;

    fn frame_with_focus(lines: usize, focus: Option<usize>) -> Frame {
        let mut frame = Frame::new();
        for idx in 0..lines {
            if focus == Some(idx) {
                frame.set_focus_on_next_line();
            }
            frame.push_spans([Span::new(format!("line {idx}"))]);
        }
        frame
    }

    #[test]
    fn viewport_follows_focus_row() {
        let top = frame_with_focus(40, Some(3));
        assert_eq!(viewport_offset(&top, 10, 0), 0);
        assert_eq!(viewport_offset(&top, 10, 25), 3);

        let bottom = frame_with_focus(40, Some(35));
        assert_eq!(viewport_offset(&bottom, 10, 0), 26);

        let middle = frame_with_focus(40, Some(12));
        assert_eq!(viewport_offset(&middle, 10, 5), 5);
    }

    #[test]
    fn viewport_without_focus_pins_to_bottom() {
        assert_eq!(viewport_offset(&frame_with_focus(40, None), 10, 0), 30);
        assert_eq!(viewport_offset(&frame_with_focus(4, None), 10, 0), 0);
    }

    #[test]
    fn clip_respects_wide_chars() {
        assert_eq!(clip_to_width("héllo", 3), "hél");
        assert_eq!(clip_to_width("日本語", 5), "日本");
        assert_eq!(clip_to_width("abc", 0), "");
    }
}
