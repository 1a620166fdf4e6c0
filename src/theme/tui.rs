//! Ratatui Style helpers for Theme
//!
//! All `ratatui::style::Style` values used by the widgets are derived here,
//! once per theme, so rendering code never mutates styles on the fly.

use ratatui::style::{Modifier, Style};

use super::Theme;

/// Visual role of a piece of chrome, used with [`Styles::for_role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    /// Repository / user info on the right of the footer
    RepoInfo,
    /// A view button in the view switcher (`focused` = current view)
    ViewButton,
    SearchPrompt,
    SearchText,
    SearchCursor,
    SearchPlaceholder,
}

/// Concrete styles derived from a [`Theme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// Base style of the whole footer row
    pub footer: Style,
    pub switcher_root: Style,
    pub active_view: Style,
    pub inactive_view: Style,
    pub tab_separator: Style,
    pub help_key: Style,
    pub help_desc: Style,
    pub help_separator: Style,
    gray: Style,
    primary: Style,
    secondary: Style,
    faint: Style,
}

impl Styles {
    pub fn new(theme: &Theme) -> Self {
        let footer = Style::default().bg(theme.footer_background);
        let mut inactive_view = Style::default();
        if let Some(fg) = theme.inactive_view {
            inactive_view = inactive_view.fg(fg);
        }

        Self {
            footer,
            switcher_root: footer,
            active_view: Style::default()
                .fg(theme.primary_text)
                .add_modifier(Modifier::BOLD),
            inactive_view,
            tab_separator: Style::default().fg(theme.faint_border),
            help_key: Style::default().fg(theme.secondary_text),
            help_desc: Style::default().fg(theme.faint_text),
            help_separator: Style::default().fg(theme.faint_border),
            gray: Style::default().fg(theme.gray()),
            primary: Style::default().fg(theme.primary_text),
            secondary: Style::default().fg(theme.secondary_text),
            faint: Style::default().fg(theme.faint_text),
        }
    }

    /// Style for `role` given the focus state of the owning component.
    ///
    /// Blurred search parts all share the gray style so the bar reads as
    /// inactive; the cursor only becomes visible when focused.
    pub fn for_role(&self, role: StyleRole, focused: bool) -> Style {
        match (role, focused) {
            (StyleRole::RepoInfo, _) => self.footer.patch(self.gray),
            (StyleRole::ViewButton, true) => self.active_view,
            (StyleRole::ViewButton, false) => self.inactive_view,
            (StyleRole::SearchPlaceholder, _) => self.faint,
            (StyleRole::SearchPrompt | StyleRole::SearchText | StyleRole::SearchCursor, false) => {
                self.gray
            }
            (StyleRole::SearchPrompt, true) => self.secondary,
            (StyleRole::SearchText, true) => self.primary,
            (StyleRole::SearchCursor, true) => self.primary.add_modifier(Modifier::REVERSED),
        }
    }
}
