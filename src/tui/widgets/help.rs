//! Expanded key-binding help
//!
//! Renders each help group as a column of `key description` rows. Columns
//! are laid out left to right and stop (with an ellipsis) once the next one
//! would not fit in the available width.

use ratatui::text::{Line, Span};

use crate::keys::KeyBinding;
use crate::layout::measure_width;
use crate::theme::Styles;

const COLUMN_SEPARATOR: &str = "    ";
const ELLIPSIS: &str = "…";

/// Render the full help block for `groups`.
///
/// A `width` of 0 means unlimited.
pub fn full_help_lines(
    groups: &[&[KeyBinding]],
    width: usize,
    styles: &Styles,
) -> Vec<Line<'static>> {
    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut total_width = 0;

    for group in groups {
        let bindings: Vec<&KeyBinding> = group.iter().filter(|b| b.enabled).collect();
        if bindings.is_empty() {
            continue;
        }

        let separator = if total_width > 0 { COLUMN_SEPARATOR } else { "" };
        let key_width = bindings
            .iter()
            .map(|b| measure_width(b.help_key))
            .max()
            .unwrap_or(0);
        let desc_width = bindings
            .iter()
            .map(|b| measure_width(b.help_desc))
            .max()
            .unwrap_or(0);
        let column_width = measure_width(separator) + key_width + 1 + desc_width;

        if width > 0 && total_width + column_width > width {
            let tail = format!(" {}", ELLIPSIS);
            if total_width + measure_width(&tail) < width {
                ensure_rows(&mut rows, 1, total_width);
                rows[0].push(Span::styled(tail, styles.help_separator));
            }
            break;
        }

        ensure_rows(&mut rows, bindings.len(), total_width);
        for (i, row) in rows.iter_mut().enumerate() {
            match bindings.get(i) {
                Some(binding) => {
                    row.push(Span::raw(separator));
                    row.push(Span::styled(
                        pad(binding.help_key, key_width),
                        styles.help_key,
                    ));
                    row.push(Span::raw(" "));
                    row.push(Span::styled(
                        pad(binding.help_desc, desc_width),
                        styles.help_desc,
                    ));
                }
                None => row.push(Span::raw(" ".repeat(column_width))),
            }
        }
        total_width += column_width;
    }

    rows.into_iter().map(Line::from).collect()
}

// New rows start below earlier, shorter columns and need their width in blanks.
fn ensure_rows(rows: &mut Vec<Vec<Span<'static>>>, count: usize, indent: usize) {
    while rows.len() < count {
        let mut row = Vec::new();
        if indent > 0 {
            row.push(Span::raw(" ".repeat(indent)));
        }
        rows.push(row);
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(measure_width(text));
    format!("{}{}", text, " ".repeat(fill))
}
