//! Dashboard shell
//!
//! Ties the search bar and footer to key handling and a frame layout. The
//! state machine is kept apart from the terminal so it can be driven in
//! tests.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use tracing::{debug, info};

use super::app::Tui;
use super::event::Event;
use super::widgets::{Footer, SearchBar, SearchOptions, SEARCH_BAR_HEIGHT};
use crate::config::Config;
use crate::context::{ProgramContext, ViewType};
use crate::keys::{key_map_for_view, Action};

const RIGHT_SECTION_HINT: &str = "? help";

/// Input modes of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Browsing; single-key commands are active
    #[default]
    Normal,
    /// The search bar has focus
    Search,
    /// Waiting for quit confirmation
    ConfirmQuit,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Dashboard state, independent of the terminal.
pub struct DashboardState {
    ctx: ProgramContext,
    footer: Footer,
    prs_search: SearchBar,
    issues_search: SearchBar,
    mode: Mode,
}

impl DashboardState {
    pub fn new(ctx: ProgramContext, config: &Config) -> Self {
        let search_for = |view: ViewType| {
            SearchBar::new(
                &ctx,
                SearchOptions {
                    prefix: view.search_prefix().to_string(),
                    initial_value: config.search.filter_for(view).to_string(),
                    placeholder: format!("Filter {}", view.label()),
                },
            )
        };
        let prs_search = search_for(ViewType::Prs);
        let issues_search = search_for(ViewType::Issues);

        let mut footer = Footer::new(&ctx);
        footer.set_right_section(RIGHT_SECTION_HINT);
        footer.set_show_all(config.defaults.show_full_help);

        Self {
            ctx,
            footer,
            prs_search,
            issues_search,
            mode: Mode::Normal,
        }
    }

    pub fn ctx(&self) -> &ProgramContext {
        &self.ctx
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Search bar of the current view.
    pub fn search(&self) -> &SearchBar {
        match self.ctx.view() {
            ViewType::Prs => &self.prs_search,
            ViewType::Issues => &self.issues_search,
        }
    }

    fn search_mut(&mut self) -> &mut SearchBar {
        match self.ctx.view() {
            ViewType::Prs => &mut self.prs_search,
            ViewType::Issues => &mut self.issues_search,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        debug!(?key, mode = ?self.mode, "key");
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::ConfirmQuit => self.handle_confirm_quit_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Outcome {
        match key_map_for_view(self.ctx.view()).normal_action(&key) {
            Some(Action::SwitchView) => {
                let view = self.ctx.view().toggle();
                self.set_context(self.ctx.with_view(view));
                self.footer.set_left_section("");
            }
            Some(Action::Search) => {
                self.mode = Mode::Search;
                self.search_mut().focus();
            }
            Some(Action::ToggleHelp) => self.footer.toggle_show_all(),
            Some(Action::Quit) => {
                self.mode = Mode::ConfirmQuit;
                self.footer.set_show_confirm_quit(true);
            }
            Some(Action::ForceQuit) => return Outcome::Quit,
            Some(Action::ApplySearch | Action::CancelSearch) | None => {}
        }
        Outcome::Continue
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Outcome {
        match key_map_for_view(self.ctx.view()).search_action(&key) {
            Some(Action::ApplySearch) => {
                let search = self.search_mut();
                let value = search.apply();
                search.blur();
                info!(filter = %value, "search applied");
                self.footer.set_left_section(" filter applied");
                self.mode = Mode::Normal;
            }
            Some(Action::CancelSearch) => {
                let search = self.search_mut();
                search.reset();
                search.blur();
                self.mode = Mode::Normal;
            }
            Some(Action::ForceQuit) => return Outcome::Quit,
            _ => {
                let ctx = &self.ctx;
                let search = match ctx.view() {
                    ViewType::Prs => &mut self.prs_search,
                    ViewType::Issues => &mut self.issues_search,
                };
                search.update(ctx, key);
            }
        }
        Outcome::Continue
    }

    fn handle_confirm_quit_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Outcome::Quit,
            _ => {
                self.footer.set_show_confirm_quit(false);
                self.mode = Mode::Normal;
                Outcome::Continue
            }
        }
    }

    /// Rebuild the context for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.set_context(self.ctx.with_size(width, height));
    }

    fn set_context(&mut self, ctx: ProgramContext) {
        self.ctx = ctx;
        self.footer.update_program_context(&self.ctx);
        self.prs_search.update_program_context(&self.ctx);
        self.issues_search.update_program_context(&self.ctx);
    }

    /// Draw search bar, main pane and footer into `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let footer_height = self.footer.height(&self.ctx);
        let [search_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        self.search().widget(&self.ctx).render(search_area, buf);
        self.main_pane().render(main_area, buf);
        self.footer.widget(&self.ctx).render(footer_area, buf);
    }

    fn main_pane(&self) -> Paragraph<'static> {
        let theme = self.ctx.theme();
        let filter = self.search().applied_value().to_string();
        let lines = vec![
            Line::from(Span::styled(
                format!(" {}", self.ctx.view().label()),
                Style::default()
                    .fg(theme.primary_text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" filter: {}", filter),
                Style::default().fg(theme.secondary_text),
            )),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }
}

/// Run the interactive dashboard until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(ctx: ProgramContext, config: &Config) -> Result<()> {
    let mut tui = Tui::new(Duration::from_millis(250))?;
    let (width, height) = tui.size()?;
    let mut state = DashboardState::new(ctx.with_size(width, height), config);
    info!(width, height, view = %state.ctx().view(), "dashboard started");

    loop {
        tui.draw(|frame| {
            let area = frame.area();
            state.render(area, frame.buffer_mut());
        })?;

        match tui.next_event()? {
            Event::Key(key) => {
                if state.handle_key(key) == Outcome::Quit {
                    break;
                }
            }
            Event::Resize(width, height) => state.resize(width, height),
            Event::Tick => {}
        }
    }

    info!("dashboard closed");
    Ok(())
}
