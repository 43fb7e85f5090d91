use crate::core::registration::{Entry, Field};
use crate::ui::frame::Frame;
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_TITLE: &str = "No Registered Students Yet";
pub const EMPTY_HINT: &str = "Complete the form above to add a student to the table";

const HEADERS: [&str; 5] = ["#", "Name", "Email", "Course", "Actions"];
const DELETE_LABEL: &str = "Delete";

/// Entry list presenter. `selected` is the highlighted row while the table
/// owns focus.
pub struct EntryTable<'a> {
    entries: &'a [Entry],
    selected: Option<usize>,
    clear_button: Vec<Span>,
}

impl<'a> EntryTable<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self {
            entries,
            selected: None,
            clear_button: Vec::new(),
        }
    }

    pub fn with_selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Spans drawn next to the header, usually the clear-all button.
    pub fn with_clear_button(mut self, spans: Vec<Span>) -> Self {
        self.clear_button = spans;
        self
    }

    pub fn header_text(&self) -> String {
        format!("Registered Students ({})", self.entries.len())
    }

    pub fn render(&self, theme: &Theme) -> Frame {
        let mut frame = Frame::new();
        if self.entries.is_empty() {
            frame.push_spans([Span::styled(EMPTY_TITLE, theme.header)]);
            frame.push_spans([Span::styled(EMPTY_HINT, theme.hint)]);
            return frame;
        }

        let mut header = vec![Span::styled(self.header_text(), theme.header)];
        if !self.clear_button.is_empty() {
            header.push(Span::new("  "));
            header.extend(self.clear_button.iter().cloned());
        }
        frame.push_spans(header);

        let rows = self.rows();
        let widths = col_widths(&rows);
        let border = theme.hint;

        frame.push_spans(border_line('┌', '┬', '┐', &widths, border));
        frame.push_spans(grid_row(
            HEADERS
                .iter()
                .map(|h| Span::styled(*h, theme.label))
                .collect(),
            &widths,
            border,
        ));
        frame.push_spans(border_line('├', '┼', '┤', &widths, border));
        for (idx, row) in rows.iter().enumerate() {
            let selected = self.selected == Some(idx);
            if selected {
                frame.set_focus_on_next_line();
            }
            let cells = row
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let style = match (selected, col) {
                        (true, _) => theme.selected,
                        (false, 4) => theme.danger,
                        (false, 0) => theme.badge,
                        _ => Style::default(),
                    };
                    Span::styled(cell.clone(), style)
                })
                .collect();
            frame.push_spans(grid_row(cells, &widths, border));
        }
        frame.push_spans(border_line('└', '┴', '┘', &widths, border));
        frame
    }

    fn rows(&self) -> Vec<[String; 5]> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let [name, email, course] = Field::ALL.map(|field| entry.field(field).to_string());
                [(idx + 1).to_string(), name, email, course, DELETE_LABEL.to_string()]
            })
            .collect()
    }
}

fn col_widths(rows: &[[String; 5]]) -> Vec<usize> {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.width());
        }
    }
    widths
}

fn border_line(left: char, sep: char, right: char, widths: &[usize], style: Style) -> Vec<Span> {
    let mut text = String::new();
    text.push(left);
    for (idx, width) in widths.iter().enumerate() {
        text.push_str(&"─".repeat(*width + 2));
        if idx + 1 < widths.len() {
            text.push(sep);
        }
    }
    text.push(right);
    vec![Span::styled(text, style)]
}

fn grid_row(cells: Vec<Span>, widths: &[usize], border: Style) -> Vec<Span> {
    let mut line = vec![Span::styled("│", border)];
    for (idx, width) in widths.iter().enumerate() {
        line.push(Span::new(" "));
        let used = match cells.get(idx) {
            Some(cell) => {
                line.push(cell.clone());
                cell.width()
            }
            None => 0,
        };
        if *width > used {
            line.push(Span::new(" ".repeat(*width - used)));
        }
        line.push(Span::new(" "));
        line.push(Span::styled("│", border));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{EMPTY_HINT, EMPTY_TITLE, EntryTable};
    use crate::core::registration::{Field, Registration};
    use crate::ui::theme::Theme;

    fn register(registration: &mut Registration, name: &str, email: &str) {
        registration.edit_field(Field::Name, name);
        registration.edit_field(Field::Email, email);
        registration.edit_field(Field::Course, "Civil Engineering");
        assert!(registration.submit().is_accepted());
    }

    #[test]
    fn empty_list_renders_empty_state() {
        let registration = Registration::new();
        let frame = EntryTable::new(registration.entries()).render(&Theme::default());
        assert!(frame.contains_text(EMPTY_TITLE));
        assert!(frame.contains_text(EMPTY_HINT));
        assert!(!frame.contains_text("Registered Students ("));
    }

    #[test]
    fn header_counts_entries_and_rows_are_numbered() {
        let mut registration = Registration::new();
        register(&mut registration, "Ana Lee", "ana@example.com");
        register(&mut registration, "Bo", "bo@example.com");

        let frame = EntryTable::new(registration.entries()).render(&Theme::default());
        let text = frame.to_plain_text();
        assert!(text.contains("Registered Students (2)"));
        assert!(text.contains("│ 1 │ Ana Lee │ ana@example.com │ Civil Engineering │ Delete  │"));
        assert!(text.contains("│ 2 │ Bo      │ bo@example.com  │ Civil Engineering │ Delete  │"));
        assert!(!text.contains(EMPTY_TITLE));
        assert_eq!(frame.focus_row(), None);

        let selected = EntryTable::new(registration.entries())
            .with_selected(Some(1))
            .render(&Theme::default());
        let row = selected.focus_row().expect("selected row is focused") as usize;
        assert!(selected.lines()[row].text().contains("│ 2 │ Bo "));
    }

    #[test]
    fn numbering_stays_dense_after_delete() {
        let mut registration = Registration::new();
        register(&mut registration, "Ana Lee", "ana@example.com");
        register(&mut registration, "Bo", "bo@example.com");
        let first = registration.entries()[0].id();
        assert!(registration.delete(first));

        let frame = EntryTable::new(registration.entries()).render(&Theme::default());
        let text = frame.to_plain_text();
        assert!(text.contains("Registered Students (1)"));
        assert!(text.contains("│ 1 │ Bo "));
    }
}
