//! Dashboard footer
//!
//! The footer is one status line (view switcher and a left section on the
//! left, repository/user info and a right section on the right) optionally
//! followed by the expanded key-binding help.

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use super::help::full_help_lines;
use crate::context::{ProgramContext, ViewType};
use crate::keys::key_map_for_view;
use crate::layout::{join_nonempty, Segment, StatusLine};
use crate::theme::StyleRole;

/// Shown in place of the status line while a quit is pending.
pub const CONFIRM_QUIT_PROMPT: &str =
    "Really quit? (Press y/enter to confirm, any other key to cancel)";

const INFO_SEPARATOR: &str = " • ";

/// Footer state. Rendering reads everything else from the [`ProgramContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footer {
    left_section: String,
    right_section: String,
    show_all: bool,
    show_confirm_quit: bool,
    help_width: usize,
}

impl Footer {
    pub fn new(ctx: &ProgramContext) -> Self {
        Self {
            help_width: usize::from(ctx.screen_width()),
            ..Self::default()
        }
    }

    pub fn set_left_section(&mut self, text: impl Into<String>) {
        self.left_section = text.into();
    }

    pub fn set_right_section(&mut self, text: impl Into<String>) {
        self.right_section = text.into();
    }

    pub fn set_show_confirm_quit(&mut self, value: bool) {
        self.show_confirm_quit = value;
    }

    pub fn show_confirm_quit(&self) -> bool {
        self.show_confirm_quit
    }

    pub fn set_show_all(&mut self, value: bool) {
        self.show_all = value;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Width available to the expanded help (0 = unlimited).
    pub fn set_width(&mut self, width: usize) {
        self.help_width = width;
    }

    pub fn update_program_context(&mut self, ctx: &ProgramContext) {
        self.set_width(usize::from(ctx.screen_width()));
    }

    /// The single status line.
    pub fn status_line(&self, ctx: &ProgramContext) -> Line<'static> {
        if self.show_confirm_quit {
            return Line::raw(CONFIRM_QUIT_PROMPT);
        }

        let styles = ctx.styles();
        let info_style = styles.for_role(StyleRole::RepoInfo, false);
        StatusLine::new(usize::from(ctx.screen_width()))
            .left(view_switcher(ctx))
            .left(Segment::raw(self.left_section.clone()))
            .right(repo_info(ctx))
            .right(Segment::raw(self.right_section.clone()))
            .separator(Segment::styled(INFO_SEPARATOR, info_style))
            .padding_style(styles.footer)
            .compose()
            .into_line(styles.footer)
    }

    /// Status line first, then the expanded help when enabled.
    pub fn lines(&self, ctx: &ProgramContext) -> Vec<Line<'static>> {
        let mut lines = vec![self.status_line(ctx)];
        if self.show_all {
            let key_map = key_map_for_view(ctx.view());
            lines.extend(full_help_lines(
                &key_map.full_help(),
                self.help_width,
                ctx.styles(),
            ));
        }
        lines
    }

    pub fn height(&self, ctx: &ProgramContext) -> u16 {
        u16::try_from(self.lines(ctx).len()).unwrap_or(u16::MAX)
    }

    pub fn widget<'a>(&'a self, ctx: &'a ProgramContext) -> FooterWidget<'a> {
        FooterWidget { footer: self, ctx }
    }
}

/// Renders a [`Footer`] against a context snapshot.
pub struct FooterWidget<'a> {
    footer: &'a Footer,
    ctx: &'a ProgramContext,
}

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, line) in (0..area.height).zip(self.footer.lines(self.ctx)) {
            let row_area = Rect::new(area.x, area.y + row, area.width, 1);
            line.render(row_area, buf);
        }
    }
}

fn view_button(ctx: &ProgramContext, view: ViewType) -> Segment {
    let style = ctx
        .styles()
        .for_role(StyleRole::ViewButton, ctx.view() == view);
    Segment::styled(format!(" {}", view.label()), style)
}

/// `  PRs |  Issues ` with the current view highlighted.
pub fn view_switcher(ctx: &ProgramContext) -> Segment {
    let styles = ctx.styles();
    Segment::concat([
        Segment::raw(" "),
        view_button(ctx, ViewType::Prs),
        Segment::raw(" "),
        Segment::styled("|", styles.tab_separator),
        Segment::raw(" "),
        view_button(ctx, ViewType::Issues),
        Segment::raw(" "),
    ])
    .with_base_style(styles.switcher_root)
}

/// Repository and user info, e.g. `  owner/repo • @login`.
///
/// Empty when neither a repository nor a user is known.
pub fn repo_info(ctx: &ProgramContext) -> Segment {
    let gray = ctx.styles().for_role(StyleRole::RepoInfo, false);
    let repo = ctx
        .repo_name()
        .map(|name| Segment::styled(format!(" {}", name), gray))
        .unwrap_or_default();
    let user = ctx
        .user()
        .map(|login| Segment::styled(format!("@{}", login), gray))
        .unwrap_or_default();

    if repo.is_empty() && user.is_empty() {
        return Segment::default();
    }
    let separator = Segment::styled(INFO_SEPARATOR, gray);
    Segment::concat([
        Segment::raw(" "),
        join_nonempty([&repo, &user], Some(&separator)),
    ])
}
