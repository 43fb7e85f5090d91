use crate::input::Input;
use crate::ui::layout::pad_right;
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

/// One rendered form row plus the column the terminal cursor belongs at.
pub struct FieldRow {
    pub spans: Vec<Span>,
    pub cursor_col: Option<usize>,
}

/// Renders `label *  [content]`. Text inputs always draw brackets, padded
/// to the input's minimum width; the select draws its own arrows.
pub fn render_field(
    input: &dyn Input,
    label_width: usize,
    required: bool,
    has_error: bool,
    theme: &Theme,
) -> FieldRow {
    let mut label = input.label().to_string();
    if required {
        label.push_str(" *");
    }
    let label_style = if input.is_focused() {
        theme.label.merge(theme.focused)
    } else {
        theme.label
    };

    let mut spans = vec![
        Span::styled(pad_right(&label, label_width), label_style),
        Span::new("  "),
    ];
    let prefix_width = label_width.max(label.width()) + 2;

    let content = content_spans(input, has_error, theme);
    let content_width: usize = content.iter().map(Span::width).sum();
    let use_brackets = input.shows_cursor();
    let bracket_style = if input.is_focused() {
        theme.focused
    } else if has_error {
        theme.error
    } else {
        theme.hint
    };

    if use_brackets {
        spans.push(Span::styled("[", bracket_style));
    }
    spans.extend(content);
    if use_brackets {
        if content_width < input.min_width() {
            spans.push(Span::new(" ".repeat(input.min_width() - content_width)));
        }
        spans.push(Span::styled("]", bracket_style));
    }

    let cursor_col = (input.is_focused() && input.shows_cursor())
        .then(|| prefix_width + 1 + input.cursor_offset_in_content());

    FieldRow { spans, cursor_col }
}

fn content_spans(input: &dyn Input, has_error: bool, theme: &Theme) -> Vec<Span> {
    let mut spans = input.render_content(theme);
    if input.value().is_empty() && spans.iter().all(|span| span.text.is_empty()) {
        if let Some(placeholder) = input.placeholder() {
            spans = vec![Span::styled(placeholder, theme.placeholder)];
        }
    }
    if has_error {
        spans = spans
            .into_iter()
            .map(|span| {
                let merged = span.style.merge(theme.error);
                span.with_style(merged)
            })
            .collect();
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::render_field;
    use crate::input::{Input, TextInput};
    use crate::terminal::{KeyCode, KeyModifiers};
    use crate::ui::theme::Theme;

    fn row_text(spans: &[crate::ui::span::Span]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn empty_input_shows_placeholder_in_brackets() {
        let input = TextInput::new("name", "Full Name")
            .with_placeholder("Your full name")
            .with_min_width(16);
        let row = render_field(&input, 12, true, false, &Theme::default());
        assert_eq!(row_text(&row.spans), "Full Name *   [Your full name  ]");
        assert_eq!(row.cursor_col, None);
        let placeholder = row
            .spans
            .iter()
            .find(|span| span.text == "Your full name")
            .expect("placeholder span");
        assert!(placeholder.style.dim);
    }

    #[test]
    fn focused_input_reports_cursor_column() {
        let mut input = TextInput::new("name", "Name").with_min_width(4);
        input.set_focused(true);
        input.handle_key(KeyCode::Char('a'), KeyModifiers::NONE);
        input.handle_key(KeyCode::Char('b'), KeyModifiers::NONE);
        let row = render_field(&input, 6, false, false, &Theme::default());
        assert_eq!(row_text(&row.spans), "Name    [ab  ]");
        assert_eq!(row.cursor_col, Some(11));
    }
}
