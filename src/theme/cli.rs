//! ANSI rendering for CLI output
//!
//! Converts styled ratatui lines into escape-coded strings so one-shot
//! commands can print the same chrome the TUI draws.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI foreground escape code.
pub fn color_to_ansi(color: Color) -> String {
    match color {
        Color::Black => "\x1b[30m".to_string(),
        Color::Red => "\x1b[31m".to_string(),
        Color::Green => "\x1b[32m".to_string(),
        Color::Yellow => "\x1b[33m".to_string(),
        Color::Blue => "\x1b[34m".to_string(),
        Color::Magenta => "\x1b[35m".to_string(),
        Color::Cyan => "\x1b[36m".to_string(),
        Color::Gray => "\x1b[37m".to_string(),
        Color::DarkGray => "\x1b[90m".to_string(),
        Color::LightRed => "\x1b[91m".to_string(),
        Color::LightGreen => "\x1b[92m".to_string(),
        Color::LightYellow => "\x1b[93m".to_string(),
        Color::LightBlue => "\x1b[94m".to_string(),
        Color::LightMagenta => "\x1b[95m".to_string(),
        Color::LightCyan => "\x1b[96m".to_string(),
        Color::White => "\x1b[97m".to_string(),
        Color::Rgb(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Indexed(i) => format!("\x1b[38;5;{}m", i),
        Color::Reset => String::new(),
    }
}

/// Convert a ratatui Color to an ANSI background escape code.
pub fn background_to_ansi(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("\x1b[48;2;{};{};{}m", r, g, b),
        Color::Indexed(i) => format!("\x1b[48;5;{}m", i),
        Color::Reset => String::new(),
        named => {
            // Named background codes sit 10 above their foreground codes.
            let fg = color_to_ansi(named);
            let code: u8 = fg
                .trim_start_matches("\x1b[")
                .trim_end_matches('m')
                .parse()
                .unwrap_or(39);
            format!("\x1b[{}m", code + 10)
        }
    }
}

fn style_prefix(style: Style) -> String {
    let mut out = String::new();
    if style.add_modifier.contains(Modifier::BOLD) {
        out.push_str("\x1b[1m");
    }
    if style.add_modifier.contains(Modifier::REVERSED) {
        out.push_str("\x1b[7m");
    }
    if let Some(fg) = style.fg {
        out.push_str(&color_to_ansi(fg));
    }
    if let Some(bg) = style.bg {
        out.push_str(&background_to_ansi(bg));
    }
    out
}

/// Render a styled line as an ANSI string.
///
/// The line's own style is the base for every span, mirroring how ratatui
/// paints a `Line` into a buffer.
pub fn line_to_ansi(line: &Line<'_>) -> String {
    let mut out = String::new();
    for span in &line.spans {
        let style = line.style.patch(span.style);
        let prefix = style_prefix(style);
        if prefix.is_empty() {
            out.push_str(&span.content);
        } else {
            out.push_str(&prefix);
            out.push_str(&span.content);
            out.push_str(ANSI_RESET);
        }
    }
    out
}
