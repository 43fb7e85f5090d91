use crate::input::{Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Option whose label and value are the same text.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text)
    }
}

pub struct SelectInput {
    base: InputBase,
    options: Vec<SelectOption>,
    selected: usize,
}

impl SelectInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            base: InputBase::new(id, label),
            options,
            selected: 0,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.base = self.base.with_min_width(width);
        self
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    fn current_option(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }

    fn step(&mut self, delta: isize) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len() as isize;
        self.selected = ((self.selected as isize + delta).rem_euclid(len)) as usize;
    }

    /// Jumps to the next option whose label starts with `ch`.
    fn jump_to(&mut self, ch: char) -> bool {
        let needle = ch.to_lowercase().to_string();
        let len = self.options.len();
        let current = self.selected;
        let found = (1..=len)
            .map(|offset| (current + offset) % len)
            .find(|idx| self.options[*idx].label.to_lowercase().starts_with(&needle));
        match found {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }
}

impl Input for SelectInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        self.current_option()
            .map(|opt| opt.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, value: String) {
        if let Some(pos) = self.options.iter().position(|opt| opt.value == value) {
            self.selected = pos;
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Left => {
                self.step(-1);
                KeyResult::Handled
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                self.step(1);
                KeyResult::Handled
            }
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if self.jump_to(ch) {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let Some(option) = self.current_option() else {
            return vec![];
        };
        let style = if option.value.is_empty() {
            theme.placeholder
        } else {
            Default::default()
        };
        if self.base.focused {
            vec![
                Span::styled("< ", theme.hint),
                Span::styled(option.label.clone(), style),
                Span::styled(" >", theme.hint),
            ]
        } else {
            vec![Span::styled(option.label.clone(), style)]
        }
    }
}
