//! Search bar
//!
//! A prompt (e.g. ` is:pr `) followed by a single-line text input. Editing
//! is delegated to `tui-textarea`; this type only owns focus, sizing and
//! styling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use tracing::debug;
use tui_textarea::{CursorMove, TextArea};

use crate::context::ProgramContext;
use crate::layout::measure_width;
use crate::theme::{StyleRole, Styles};

/// Rows taken by the bar: the input plus one blank row above and below.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

// Borders (2), padding (2), cursor (1) and the gap after the prompt (1).
const INPUT_CHROME: usize = 6;
const MIN_INPUT_WIDTH: usize = 2;

/// Construction options for a [`SearchBar`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Shown inside the prompt, e.g. `is:pr`
    pub prefix: String,
    pub initial_value: String,
    pub placeholder: String,
}

pub struct SearchBar {
    prompt: String,
    placeholder: String,
    applied_value: String,
    input: TextArea<'static>,
    focused: bool,
    input_width: usize,
    styles: Styles,
}

impl SearchBar {
    /// Create a blurred search bar holding `opts.initial_value`.
    pub fn new(ctx: &ProgramContext, opts: SearchOptions) -> Self {
        let prompt = format!(" {} ", opts.prefix);
        let input_width = input_width(ctx, &prompt);
        let mut bar = Self {
            prompt,
            placeholder: opts.placeholder,
            applied_value: opts.initial_value.clone(),
            input: TextArea::default(),
            focused: false,
            input_width,
            styles: ctx.styles().clone(),
        };
        bar.replace_input(&opts.initial_value);
        bar.input.move_cursor(CursorMove::Head);
        bar
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn value(&self) -> String {
        self.input.lines().first().cloned().unwrap_or_default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    /// Replace the current text, keeping focus state and styles.
    pub fn set_value(&mut self, value: &str) {
        self.replace_input(value);
        if self.focused {
            self.input.move_cursor(CursorMove::End);
        }
    }

    /// Remember the current text as applied and return it.
    pub fn apply(&mut self) -> String {
        self.applied_value = self.value();
        self.applied_value.clone()
    }

    /// The last applied text.
    pub fn applied_value(&self) -> &str {
        &self.applied_value
    }

    /// Throw away edits and go back to the last applied text.
    pub fn reset(&mut self) {
        let applied = self.applied_value.clone();
        self.set_value(&applied);
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.input.move_cursor(CursorMove::End);
        self.apply_styles();
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.input.move_cursor(CursorMove::Head);
        self.apply_styles();
    }

    /// Forward a key to the text input. Returns whether the text changed.
    ///
    /// Keys the text area would turn into a line break (Enter, Ctrl+M, raw
    /// CR/LF) are ignored so the input stays single-line.
    pub fn update(&mut self, ctx: &ProgramContext, key: KeyEvent) -> bool {
        self.input_width = input_width(ctx, &self.prompt);
        if !self.focused || is_newline(&key) {
            return false;
        }
        self.input.input(key)
    }

    pub fn update_program_context(&mut self, ctx: &ProgramContext) {
        self.styles = ctx.styles().clone();
        let old_width = self.input_width;
        self.input_width = input_width(ctx, &self.prompt);
        if self.input_width != old_width {
            debug!(old_width, new_width = self.input_width, "search input resized");
            self.input.move_cursor(CursorMove::End);
        }
        self.apply_styles();
    }

    pub fn widget<'a>(&'a self, ctx: &'a ProgramContext) -> SearchBarWidget<'a> {
        SearchBarWidget { bar: self, ctx }
    }

    fn replace_input(&mut self, value: &str) {
        self.input = TextArea::new(vec![value.to_string()]);
        self.apply_styles();
    }

    fn apply_styles(&mut self) {
        let focused = self.focused;
        let styles = &self.styles;
        self.input.set_style(styles.for_role(StyleRole::SearchText, focused));
        self.input.set_cursor_style(styles.for_role(StyleRole::SearchCursor, focused));
        self.input
            .set_cursor_line_style(styles.for_role(StyleRole::SearchText, focused));
    }

    /// Placeholder with the cursor drawn over its first character.
    ///
    /// The text area would put its cursor cell in front of the placeholder
    /// instead, shifting it one column right.
    fn placeholder_line(&self) -> Line<'static> {
        let placeholder_style = self
            .styles
            .for_role(StyleRole::SearchPlaceholder, self.focused);
        let Some(first) = self.placeholder.chars().next() else {
            return Line::default();
        };
        let (head, tail) = self.placeholder.split_at(first.len_utf8());
        let head_style = if self.focused {
            self.styles.for_role(StyleRole::SearchCursor, true)
        } else {
            placeholder_style
        };
        Line::from(vec![
            Span::styled(head.to_string(), head_style),
            Span::styled(tail.to_string(), placeholder_style),
        ])
    }
}

fn is_newline(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('\n' | '\r') => true,
        KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Input width for `prompt` in `ctx`, never below two columns (one
/// character plus the cursor).
pub fn input_width(ctx: &ProgramContext, prompt: &str) -> usize {
    ctx.main_content_width()
        .saturating_sub(measure_width(prompt) + INPUT_CHROME)
        .max(MIN_INPUT_WIDTH)
}

/// Renders a [`SearchBar`] against a context snapshot.
pub struct SearchBarWidget<'a> {
    bar: &'a SearchBar,
    ctx: &'a ProgramContext,
}

impl Widget for SearchBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let content_width = self.ctx.main_content_width().saturating_sub(4);
        let width = area
            .width
            .min(u16::try_from(content_width).unwrap_or(u16::MAX));
        let y = if area.height >= SEARCH_BAR_HEIGHT {
            area.y + 1
        } else {
            area.y
        };

        let prompt_style = self
            .ctx
            .styles()
            .for_role(StyleRole::SearchPrompt, self.bar.focused);
        let prompt_width = u16::try_from(measure_width(&self.bar.prompt))
            .unwrap_or(u16::MAX)
            .min(width);
        Span::styled(self.bar.prompt.as_str(), prompt_style)
            .render(Rect::new(area.x, y, prompt_width, 1), buf);

        let remaining = width - prompt_width;
        let input_width =
            remaining.min(u16::try_from(self.bar.input_width).unwrap_or(u16::MAX));
        if input_width > 0 {
            let input_area = Rect::new(area.x + prompt_width, y, input_width, 1);
            if self.bar.value().is_empty() && !self.bar.placeholder.is_empty() {
                self.bar.placeholder_line().render(input_area, buf);
            } else {
                Widget::render(&self.bar.input, input_area, buf);
            }
        }
    }
}
