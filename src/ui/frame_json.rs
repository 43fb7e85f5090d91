use crate::terminal::TerminalSize;
use crate::ui::frame::Frame;
use crate::ui::style::Color;

pub fn frame_to_json(frame: &Frame, size: TerminalSize) -> serde_json::Value {
    let cursor = frame.cursor().map(|c| {
        serde_json::json!({
            "row": c.row,
            "col": c.col,
        })
    });

    let lines = frame
        .lines()
        .iter()
        .map(|line| {
            serde_json::Value::Array(
                line.spans()
                    .iter()
                    .map(|span| {
                        serde_json::json!({
                            "text": span.text,
                            "style": {
                                "color": span.style.color.map(color_to_json),
                                "background": span.style.background.map(color_to_json),
                                "bold": span.style.bold,
                                "dim": span.style.dim,
                                "underline": span.style.underline,
                            }
                        })
                    })
                    .collect(),
            )
        })
        .collect::<Vec<_>>();

    serde_json::json!({
        "terminal": {
            "width": size.width,
            "height": size.height,
        },
        "cursor": cursor,
        "lines": lines,
    })
}

fn color_to_json(color: Color) -> serde_json::Value {
    let name = match color {
        Color::Reset => "reset",
        Color::Black => "black",
        Color::DarkGrey => "dark_grey",
        Color::Red => "red",
        Color::Green => "green",
        Color::Yellow => "yellow",
        Color::Blue => "blue",
        Color::Magenta => "magenta",
        Color::Cyan => "cyan",
        Color::White => "white",
    };
    serde_json::json!(name)
}
