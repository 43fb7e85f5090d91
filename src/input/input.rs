use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputCaps {
    pub capture_ctrl_backspace: bool,
    pub capture_ctrl_delete: bool,
    pub capture_ctrl_left: bool,
    pub capture_ctrl_right: bool,
    pub capture_chars: bool,
}

impl InputCaps {
    /// Whether the focused input wants this key before global bindings see it.
    pub fn captures_key(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Backspace if ctrl => self.capture_ctrl_backspace,
            KeyCode::Delete if ctrl => self.capture_ctrl_delete,
            KeyCode::Left if ctrl => self.capture_ctrl_left,
            KeyCode::Right if ctrl => self.capture_ctrl_right,
            KeyCode::Char(_) if !ctrl && !modifiers.contains(KeyModifiers::ALT) => {
                self.capture_chars
            }
            _ => false,
        }
    }
}

pub trait Input: Send {
    fn base(&self) -> &InputBase;
    fn base_mut(&mut self) -> &mut InputBase;

    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn render_content(&self, theme: &Theme) -> Vec<Span>;

    fn cursor_offset_in_content(&self) -> usize {
        0
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps::default()
    }

    fn shows_cursor(&self) -> bool {
        false
    }

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}

    fn id(&self) -> &str {
        &self.base().id
    }

    fn label(&self) -> &str {
        &self.base().label
    }

    fn placeholder(&self) -> Option<&str> {
        self.base().placeholder.as_deref()
    }

    fn is_focused(&self) -> bool {
        self.base().focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base_mut().focused = focused;
    }

    fn min_width(&self) -> usize {
        self.base().min_width
    }
}

pub struct InputBase {
    pub id: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub focused: bool,
    pub min_width: usize,
}

impl InputBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placeholder: None,
            focused: false,
            min_width: 1,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
