//! Test helper utilities

#![allow(dead_code)]

use ghdash::context::ProgramContext;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

/// Context with a known size, user and no repository.
pub fn context(width: u16, height: u16) -> ProgramContext {
    ProgramContext::builder()
        .size(width, height)
        .user("alice")
        .build()
}

/// Text of a line without styling.
pub fn plain(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Render a widget and return its rows as text.
pub fn render_rows<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buffer_rows(&buf)
}

/// Rows of a buffer as text.
pub fn buffer_rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect()
        })
        .collect()
}

/// Rows joined with newlines, trailing blanks removed from each row.
pub fn trimmed_text(rows: &[String]) -> String {
    rows.iter()
        .map(|row| row.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
