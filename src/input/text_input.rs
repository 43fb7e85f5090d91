use crate::input::{Input, InputBase, InputCaps, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthChar;

pub struct TextInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.base = self.base.with_min_width(width);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.base = self.base.with_placeholder(placeholder);
        self
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn handle_char(&mut self, ch: char) {
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = self.byte_index(self.cursor_pos - 1);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
    }

    fn handle_delete(&mut self) {
        if self.cursor_pos >= self.char_count() {
            return;
        }
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.remove(byte_pos);
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn word_start_before(chars: &[char], mut pos: usize) -> usize {
        while pos > 0 && Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    fn word_end_after(chars: &[char], mut pos: usize) -> usize {
        while pos < chars.len() && Self::is_separator(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !Self::is_separator(chars[pos]) {
            pos += 1;
        }
        pos
    }

    fn move_word_left(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        self.cursor_pos = Self::word_start_before(&chars, self.cursor_pos);
    }

    fn move_word_right(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        self.cursor_pos = Self::word_end_after(&chars, self.cursor_pos);
    }
}

impl Input for TextInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor_pos = value.chars().count();
        self.value = value;
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_ctrl_backspace: true,
            capture_ctrl_delete: true,
            capture_ctrl_left: true,
            capture_ctrl_right: true,
            capture_chars: true,
        }
    }

    fn shows_cursor(&self) -> bool {
        true
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char(ch) if !ctrl => {
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace if ctrl => {
                self.delete_word();
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                KeyResult::Handled
            }
            KeyCode::Delete if ctrl => {
                self.delete_word_forward();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.handle_delete();
                KeyResult::Handled
            }
            KeyCode::Left if ctrl => {
                self.move_word_left();
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                KeyResult::Handled
            }
            KeyCode::Right if ctrl => {
                self.move_word_right();
                KeyResult::Handled
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(self.char_count());
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.char_count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, _theme: &Theme) -> Vec<Span> {
        vec![Span::new(self.value.clone())]
    }

    fn cursor_offset_in_content(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum()
    }

    fn delete_word(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let start = Self::word_start_before(&chars, self.cursor_pos);
        self.value = chars[..start].iter().chain(&chars[self.cursor_pos..]).collect();
        self.cursor_pos = start;
    }

    fn delete_word_forward(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let end = Self::word_end_after(&chars, self.cursor_pos);
        self.value = chars[..self.cursor_pos].iter().chain(&chars[end..]).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;
    use crate::input::{Input, KeyResult};
    use crate::terminal::{KeyCode, KeyModifiers};

    fn type_text(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_and_editing_in_the_middle() {
        let mut input = TextInput::new("name", "Name");
        type_text(&mut input, "Ana Le");
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        type_text(&mut input, "x");
        assert_eq!(input.value(), "Ana xLe");
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "Ana Le");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "na Le");
        input.handle_key(KeyCode::End, KeyModifiers::NONE);
        type_text(&mut input, "e");
        assert_eq!(input.value(), "na Lee");
    }

    #[test]
    fn word_deletion_stops_at_separators() {
        let mut input = TextInput::new("email", "Email");
        input.set_value("ana@example.com".to_string());
        input.delete_word();
        assert_eq!(input.value(), "ana@example.");
        input.delete_word();
        assert_eq!(input.value(), "ana@");

        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.delete_word_forward();
        assert_eq!(input.value(), "@");
    }

    #[test]
    fn ctrl_chars_are_not_inserted() {
        let mut input = TextInput::new("name", "Name");
        let result = input.handle_key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(result, KeyResult::NotHandled);
        assert_eq!(input.value(), "");
        assert!(input.capabilities().captures_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!input.capabilities().captures_key(KeyCode::Char('s'), KeyModifiers::CONTROL));
    }

    #[test]
    fn cursor_offset_uses_display_width() {
        let mut input = TextInput::new("name", "Name");
        type_text(&mut input, "日本");
        assert_eq!(input.cursor_offset_in_content(), 4);
        assert_eq!(input.handle_key(KeyCode::Enter, KeyModifiers::NONE), KeyResult::Submit);
    }
}
