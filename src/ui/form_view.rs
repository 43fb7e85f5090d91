use crate::core::form_engine::FocusTarget;
use crate::core::registration::Field;
use crate::core::state::AppState;
use crate::input::Input;
use crate::terminal::TerminalSize;
use crate::ui::field::render_field;
use crate::ui::frame::Frame;
use crate::ui::layout::wrap_text;
use crate::ui::span::Span;
use crate::ui::table::EntryTable;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "Student Registration";
pub const SUBTITLE: &str = "Complete the form below to register a student";
pub const FORM_HEADING: &str = "Registration Form";

const INDENT: &str = "  ";
const KEY_HINTS: &str =
    "Tab/Shift+Tab move  Ctrl+S register  d delete row  c clear all  Esc quit";

/// Full registration screen: header, form, status line, entry table.
pub fn render_registration(state: &AppState, theme: &Theme, size: TerminalSize) -> Frame {
    let mut frame = Frame::new();
    let width = (size.width as usize).saturating_sub(INDENT.len()).max(1);

    frame.push_spans([Span::new(INDENT), Span::styled(TITLE, theme.title)]);
    for line in wrap_text(SUBTITLE, width) {
        frame.push_spans([Span::new(INDENT), Span::styled(line, theme.subtitle)]);
    }
    frame.blank();

    frame.push_spans([Span::new(INDENT), Span::styled(FORM_HEADING, theme.header)]);
    frame.extend(render_form(state, theme));
    frame.blank();

    match &state.status {
        Some(status) => frame.push_spans([Span::new(INDENT), Span::styled(status.clone(), theme.badge)]),
        None => frame.blank(),
    }
    frame.blank();

    let table_focused = state.engine.is_focused(FocusTarget::Table);
    let table = EntryTable::new(state.registration.entries())
        .with_selected(table_focused.then_some(state.selected_row))
        .with_clear_button(state.inputs.clear.render_content(theme))
        .render(theme);
    if state.inputs.clear.is_focused() {
        frame.set_focus_on_next_line();
    }
    frame.extend(table.indented(INDENT.len()));
    frame.blank();

    for line in wrap_text(KEY_HINTS, width) {
        frame.push_spans([Span::new(INDENT), Span::styled(line, theme.hint)]);
    }
    frame
}

fn render_form(state: &AppState, theme: &Theme) -> Frame {
    let mut frame = Frame::new();
    let errors = state.registration.errors();
    let label_width = Field::ALL
        .iter()
        .map(|field| field.label().width() + 2)
        .max()
        .unwrap_or(0);

    for field in Field::ALL {
        let input = state.inputs.field(field);
        let error = errors.get(field);
        let row = render_field(input, label_width, true, error.is_some(), theme);
        if input.is_focused() {
            frame.set_focus_on_next_line();
        }
        if let Some(col) = row.cursor_col {
            frame.set_cursor_on_next_line(INDENT.len() + col);
        }
        let mut spans = vec![Span::new(INDENT)];
        spans.extend(row.spans);
        frame.push_spans(spans);

        if let Some(message) = error {
            let pad = " ".repeat(INDENT.len() + label_width + 2);
            frame.push_spans([
                Span::new(pad),
                Span::styled(format!("✗ {message}"), theme.error),
            ]);
        }
    }

    frame.blank();
    if state.inputs.submit.is_focused() {
        frame.set_focus_on_next_line();
    }
    let mut button = vec![Span::new(INDENT)];
    button.extend(state.inputs.submit.render_content(theme));
    frame.push_spans(button);
    frame
}

#[cfg(test)]
mod tests {
    use super::{TITLE, render_registration};
    use crate::core::confirm::FixedAnswer;
    use crate::core::event::Action;
    use crate::core::form_engine::FocusTarget;
    use crate::core::reducer::Reducer;
    use crate::core::registration::Field;
    use crate::core::state::AppState;
    use crate::core::validation::{EMAIL_MALFORMED, NAME_REQUIRED};
    use crate::terminal::terminal::viewport_offset;
    use crate::terminal::{KeyCode, KeyEvent, TerminalSize};
    use crate::ui::frame::Frame;
    use crate::ui::theme::Theme;

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            Reducer::reduce(
                state,
                Action::InputKey(KeyEvent::plain(KeyCode::Char(ch))),
                &mut FixedAnswer(false),
            );
        }
    }

    #[test]
    fn initial_screen_shows_form_and_empty_state() {
        let state = AppState::with_default_courses();
        let frame = render_registration(&state, &Theme::default(), TerminalSize::default());
        assert!(frame.contains_text(TITLE));
        assert!(frame.contains_text("Full Name *"));
        assert!(frame.contains_text("Your full name"));
        assert!(frame.contains_text("Select a course"));
        assert!(frame.contains_text("[ Register Student ]"));
        assert!(frame.contains_text("No Registered Students Yet"));

        let cursor = frame.cursor().expect("name field owns the cursor");
        let row = frame.lines()[cursor.row as usize].text();
        assert!(row.contains("Full Name *"));
    }

    #[test]
    fn rejected_submit_renders_inline_errors() {
        let mut state = AppState::with_default_courses();
        state.engine.focus(FocusTarget::Input(Field::Email));
        state.sync_focus();
        type_text(&mut state, "nope");
        Reducer::reduce(&mut state, Action::Submit, &mut FixedAnswer(false));

        let frame = render_registration(&state, &Theme::default(), TerminalSize::default());
        assert!(frame.contains_text(&format!("✗ {NAME_REQUIRED}")));
        assert!(frame.contains_text(&format!("✗ {EMAIL_MALFORMED}")));
        assert!(frame.contains_text("[nope"));
    }

    #[test]
    fn accepted_submit_fills_table() {
        let mut state = AppState::with_default_courses();
        let no = &mut FixedAnswer(false);
        type_text(&mut state, "Ana Lee");
        Reducer::reduce(&mut state, Action::NextFocus, no);
        type_text(&mut state, "ana@example.com");
        Reducer::reduce(&mut state, Action::NextFocus, no);
        Reducer::reduce(&mut state, Action::InputKey(KeyEvent::plain(KeyCode::Right)), no);
        assert_eq!(state.registration.form().course, "Computer Science");
        Reducer::reduce(&mut state, Action::Submit, no);

        let frame = render_registration(&state, &Theme::default(), TerminalSize::default());
        assert!(frame.contains_text("Registered Students (1)"));
        assert!(frame.contains_text("[ Clear All ]"));
        assert!(frame.contains_text("ana@example.com"));
        assert!(!frame.contains_text("No Registered Students Yet"));
    }

    fn with_entries(count: usize) -> AppState {
        let mut state = AppState::with_default_courses();
        for idx in 0..count {
            let registration = &mut state.registration;
            registration.edit_field(Field::Name, format!("Student {idx}"));
            registration.edit_field(Field::Email, format!("s{idx}@example.com"));
            registration.edit_field(Field::Course, "Civil Engineering");
            assert!(registration.submit().is_accepted());
        }
        state.sync_focus();
        state
    }

    fn focused_line(state: &AppState) -> (Frame, String) {
        let frame = render_registration(state, &Theme::default(), TerminalSize::default());
        let row = frame.focus_row().expect("something is focused") as usize;
        let text = frame.lines()[row].text();
        let height = TerminalSize::default().height as usize;
        let offset = viewport_offset(&frame, height, 0);
        assert!(frame.lines().len() > height);
        assert!(offset <= row && row < offset + height, "row {row} outside {offset}..+{height}");
        (frame, text)
    }

    #[test]
    fn cursorless_widgets_stay_in_view_with_long_table() {
        let mut state = with_entries(20);

        state.engine.focus(FocusTarget::Input(Field::Course));
        state.sync_focus();
        let (frame, line) = focused_line(&state);
        assert_eq!(frame.cursor(), None);
        assert!(line.contains("Course *"));

        state.engine.focus(FocusTarget::SubmitButton);
        state.sync_focus();
        let (_, line) = focused_line(&state);
        assert!(line.contains("[ Register Student ]"));

        state.engine.focus(FocusTarget::ClearButton);
        state.sync_focus();
        let (_, line) = focused_line(&state);
        assert!(line.contains("Registered Students (20)"));
    }

    #[test]
    fn selected_table_row_is_the_focus_row() {
        let mut state = with_entries(20);
        state.engine.focus(FocusTarget::Table);
        state.sync_focus();
        state.selected_row = 19;
        let (_, line) = focused_line(&state);
        assert!(line.contains("Student 19"));

        state.selected_row = 2;
        let (_, line) = focused_line(&state);
        assert!(line.contains("Student 2 "));
    }
}
