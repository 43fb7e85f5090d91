use crate::input::{Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;

/// Focusable push button. Enter or Space activates it.
pub struct ButtonInput {
    base: InputBase,
    text: String,
    style: Option<Style>,
}

impl ButtonInput {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            base: InputBase::new(id, text.clone()),
            text,
            style: None,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

impl Input for ButtonInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        String::new()
    }

    fn set_value(&mut self, _value: String) {}

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let base = self.style.unwrap_or_default();
        let style = if self.base.focused {
            base.merge(theme.focused).underline()
        } else {
            base
        };
        vec![Span::styled(format!("[ {} ]", self.text), style)]
    }
}
