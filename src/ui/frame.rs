use crate::ui::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        let mut line = Self::new();
        for span in spans {
            line.push(span);
        }
        line
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
    cursor: Option<CursorPos>,
    focus_row: Option<u16>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn cursor(&self) -> Option<CursorPos> {
        self.cursor
    }

    pub fn push_spans(&mut self, spans: impl IntoIterator<Item = Span>) {
        self.lines.push(Line::from_spans(spans));
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::new());
    }

    /// Row of the focused widget. Falls back to the cursor row.
    pub fn focus_row(&self) -> Option<u16> {
        self.focus_row.or(self.cursor.map(|c| c.row))
    }

    pub fn extend(&mut self, other: Frame) {
        let offset = self.lines.len() as u16;
        if self.cursor.is_none() {
            self.cursor = other.cursor.map(|c| CursorPos {
                col: c.col,
                row: c.row.saturating_add(offset),
            });
        }
        if self.focus_row().is_none() {
            self.focus_row = other.focus_row.map(|row| row.saturating_add(offset));
        }
        self.lines.extend(other.lines);
    }

    /// Prefixes every line with `indent` spaces, shifting the cursor with it.
    pub fn indented(mut self, indent: usize) -> Frame {
        let pad = " ".repeat(indent);
        for line in &mut self.lines {
            if !line.is_empty() {
                line.spans.insert(0, Span::new(pad.clone()));
            }
        }
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.col = cursor.col.saturating_add(indent.min(u16::MAX as usize) as u16);
        }
        self
    }

    /// Places the cursor on the line that will be pushed next.
    pub fn set_cursor_on_next_line(&mut self, col: usize) {
        self.cursor = Some(CursorPos {
            col: col.min(u16::MAX as usize) as u16,
            row: self.lines.len().min(u16::MAX as usize) as u16,
        });
    }

    /// Marks the line that will be pushed next as the focused one, for
    /// widgets that draw no cursor.
    pub fn set_focus_on_next_line(&mut self) {
        self.set_focus_row(self.lines.len());
    }

    pub fn set_focus_row(&mut self, row: usize) {
        self.focus_row = Some(row.min(u16::MAX as usize) as u16);
    }

    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, Line};
    use crate::ui::span::Span;

    #[test]
    fn empty_spans_are_dropped() {
        let line = Line::from_spans([Span::new(""), Span::new("ab"), Span::new("")]);
        assert_eq!(line.spans().len(), 1);
        assert_eq!(line.width(), 2);
    }

    #[test]
    fn extend_offsets_cursor_rows() {
        let mut head = Frame::new();
        head.push_spans([Span::new("title")]);
        head.blank();

        let mut body = Frame::new();
        body.push_spans([Span::new("x")]);
        body.set_cursor_on_next_line(4);
        body.push_spans([Span::new("field")]);

        head.extend(body);
        let cursor = head.cursor().expect("cursor carried over");
        assert_eq!(cursor.row, 3);
        assert_eq!(cursor.col, 4);
        assert_eq!(head.focus_row(), Some(3));
        assert_eq!(head.to_plain_text(), "title\n\nx\nfield");
    }

    #[test]
    fn focus_row_without_cursor_survives_extend_and_indent() {
        let mut body = Frame::new();
        body.push_spans([Span::new("name")]);
        body.set_focus_on_next_line();
        body.push_spans([Span::new("< course >")]);
        assert_eq!(body.cursor(), None);

        let mut head = Frame::new();
        head.push_spans([Span::new("title")]);
        head.blank();
        head.extend(body.indented(2));
        assert_eq!(head.focus_row(), Some(3));
        assert_eq!(head.to_plain_text(), "title\n\n  name\n  < course >");
    }
}
