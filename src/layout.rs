//! Status-line composition
//!
//! Assembles a single terminal line from pre-rendered, variable-width
//! segments: left content flush left, right content flush right, and
//! background-styled padding in between. Widths are measured in terminal
//! display columns, so wide glyphs and combining marks are accounted for.

use std::fmt;

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use tracing::trace;
use unicode_width::UnicodeWidthStr;

/// Errors raised when a width crosses into the layout layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Width must not be negative (got {0})")]
    NegativeWidth(i64),
}

/// Display width of a string in terminal columns.
pub fn measure_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Validate a signed width coming from outside the layout layer.
///
/// Negative widths are a caller bug and are rejected rather than clamped.
pub fn checked_width(width: i64) -> Result<usize, LayoutError> {
    if width < 0 {
        return Err(LayoutError::NegativeWidth(width));
    }
    usize::try_from(width).map_err(|_| LayoutError::NegativeWidth(width))
}

/// A pre-rendered piece of a line together with its measured width.
///
/// A segment may carry several styled spans (e.g. the view switcher), but it
/// is placed as one unit. Zero-width segments count as empty. The width is
/// measured over the joined text, so a sequence split across spans (an emoji
/// followed by its variation selector) is measured as the terminal draws it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    spans: Vec<Span<'static>>,
    width: usize,
}

impl Segment {
    /// Unstyled text.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::from_spans(vec![Span::raw(text.into())])
    }

    /// Text rendered with a single style.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::from_spans(vec![Span::styled(text.into(), style)])
    }

    pub fn from_spans(spans: Vec<Span<'static>>) -> Self {
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        Self {
            width: measure_width(&text),
            spans,
        }
    }

    /// Concatenate segments into one, keeping every span's own style.
    pub fn concat(parts: impl IntoIterator<Item = Segment>) -> Self {
        let spans = parts.into_iter().flat_map(|part| part.spans).collect();
        Self::from_spans(spans)
    }

    /// Apply a base style underneath every span (span styles win).
    pub fn with_base_style(mut self, base: Style) -> Self {
        for span in &mut self.spans {
            span.style = base.patch(span.style);
        }
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    pub fn spans(&self) -> &[Span<'static>] {
        &self.spans
    }

    /// The segment's text without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_ref()).collect()
    }
}

/// Join the non-empty segments, inserting `separator` between neighbours.
///
/// Empty segments are skipped entirely, so they never cause a separator to
/// appear on their own.
pub fn join_nonempty<'a>(
    segments: impl IntoIterator<Item = &'a Segment>,
    separator: Option<&Segment>,
) -> Segment {
    let mut parts = Vec::new();
    for segment in segments.into_iter().filter(|s| !s.is_empty()) {
        if !parts.is_empty() {
            if let Some(sep) = separator {
                parts.push(sep.clone());
            }
        }
        parts.push(segment.clone());
    }
    Segment::concat(parts)
}

/// Result of a composition: the styled spans and the resulting geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedLine {
    spans: Vec<Span<'static>>,
    width: usize,
    padding: usize,
}

impl ComposedLine {
    pub fn width(&self) -> usize {
        self.width
    }

    /// Columns of padding inserted between left and right content.
    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn spans(&self) -> &[Span<'static>] {
        &self.spans
    }

    /// Convert into a ratatui line carrying `style` as its base style.
    pub fn into_line(self, style: Style) -> Line<'static> {
        Line::from(self.spans).style(style)
    }
}

impl fmt::Display for ComposedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.content)?;
        }
        Ok(())
    }
}

/// Builder for a status line: left group, right group, optional right-group
/// separator, padding style and target width.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    left: Vec<Segment>,
    right: Vec<Segment>,
    separator: Option<Segment>,
    padding_style: Style,
    width: usize,
}

impl StatusLine {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn left(mut self, segment: Segment) -> Self {
        self.left.push(segment);
        self
    }

    pub fn right(mut self, segment: Segment) -> Self {
        self.right.push(segment);
        self
    }

    /// Separator placed between non-empty right-group segments.
    pub fn separator(mut self, separator: Segment) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Style of the padding run (usually only a background color).
    pub fn padding_style(mut self, style: Style) -> Self {
        self.padding_style = style;
        self
    }

    pub fn compose(&self) -> ComposedLine {
        compose_styled(
            &self.left,
            &self.right,
            self.separator.as_ref(),
            self.width,
            self.padding_style,
        )
    }
}

/// Compose a line of `total_width` columns with unstyled padding.
///
/// Content wider than `total_width` is emitted unpadded and untruncated.
pub fn compose(
    left: &[Segment],
    right: &[Segment],
    separator: Option<&Segment>,
    total_width: usize,
) -> ComposedLine {
    compose_styled(left, right, separator, total_width, Style::default())
}

fn compose_styled(
    left: &[Segment],
    right: &[Segment],
    separator: Option<&Segment>,
    total_width: usize,
    padding_style: Style,
) -> ComposedLine {
    let left = join_nonempty(left, None);
    let right = join_nonempty(right, separator);

    let content_width = left.width() + right.width();
    let padding = total_width.saturating_sub(content_width);
    if content_width > total_width {
        trace!(content_width, total_width, "status line overflows target width");
    }

    let mut spans = left.spans;
    if padding > 0 {
        spans.push(Span::styled(" ".repeat(padding), padding_style));
    }
    spans.extend(right.spans);

    ComposedLine {
        spans,
        width: content_width + padding,
        padding,
    }
}
