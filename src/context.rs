//! Program context snapshot
//!
//! Everything a render pass needs to know about the outside world (screen
//! size, theme, current view, repository and user) travels in one immutable
//! value. State changes produce a new snapshot instead of mutating a shared one.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::git;
use crate::theme::{Styles, Theme};

/// Which list the dashboard shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Prs,
    Issues,
}

impl ViewType {
    pub fn toggle(self) -> Self {
        match self {
            ViewType::Prs => ViewType::Issues,
            ViewType::Issues => ViewType::Prs,
        }
    }

    /// Label used on the view switcher buttons.
    pub fn label(self) -> &'static str {
        match self {
            ViewType::Prs => "PRs",
            ViewType::Issues => "Issues",
        }
    }

    /// Prefix shown in the search prompt.
    pub fn search_prefix(self) -> &'static str {
        match self {
            ViewType::Prs => "is:pr",
            ViewType::Issues => "is:issue",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable snapshot passed into every render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramContext {
    screen_width: u16,
    screen_height: u16,
    view: ViewType,
    repo_path: Option<PathBuf>,
    repo_url: Option<String>,
    repo_label: Option<String>,
    user: Option<String>,
    theme: Theme,
    styles: Styles,
}

impl ProgramContext {
    pub fn builder() -> ProgramContextBuilder {
        ProgramContextBuilder::default()
    }

    pub fn screen_width(&self) -> u16 {
        self.screen_width
    }

    pub fn screen_height(&self) -> u16 {
        self.screen_height
    }

    /// Width available to the main content column.
    pub fn main_content_width(&self) -> usize {
        usize::from(self.screen_width)
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    pub fn repo_url(&self) -> Option<&str> {
        self.repo_url.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Name shown for the current repository, if any.
    ///
    /// An explicit label wins. Otherwise prefers `owner/repo` from the
    /// remote URL and falls back to the directory name of the checkout.
    pub fn repo_name(&self) -> Option<String> {
        if let Some(label) = &self.repo_label {
            return Some(label.clone());
        }
        let path = self.repo_path.as_ref()?;
        if let Some(short) = self.repo_url.as_deref().and_then(git::repo_short_name) {
            return Some(short);
        }
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
    }

    /// Snapshot for a resized terminal.
    pub fn with_size(&self, width: u16, height: u16) -> Self {
        debug!(width, height, "context resized");
        Self {
            screen_width: width,
            screen_height: height,
            ..self.clone()
        }
    }

    /// Snapshot with a different current view.
    pub fn with_view(&self, view: ViewType) -> Self {
        debug!(%view, "context view changed");
        Self {
            view,
            ..self.clone()
        }
    }
}

/// Builder for [`ProgramContext`].
#[derive(Debug, Clone, Default)]
pub struct ProgramContextBuilder {
    screen_width: u16,
    screen_height: u16,
    view: ViewType,
    repo_path: Option<PathBuf>,
    repo_url: Option<String>,
    repo_label: Option<String>,
    user: Option<String>,
    theme: Option<Theme>,
}

impl ProgramContextBuilder {
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn view(mut self, view: ViewType) -> Self {
        self.view = view;
        self
    }

    pub fn repo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.repo_path = Some(path.into());
        self
    }

    pub fn repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// Display name for the repository, overriding path and URL.
    pub fn repo_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.repo_label = (!name.is_empty()).then_some(name);
        self
    }

    /// Apply a discovered repository (path and optional origin URL).
    pub fn repo(mut self, repo: git::RepoInfo) -> Self {
        self.repo_path = Some(repo.path);
        self.repo_url = repo.origin_url;
        self
    }

    /// GitHub login; empty strings are treated as absent.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        let user = user.into();
        self.user = (!user.is_empty()).then_some(user);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn build(self) -> ProgramContext {
        let theme = self.theme.unwrap_or_default();
        let styles = theme.styles();
        ProgramContext {
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            view: self.view,
            repo_path: self.repo_path,
            repo_url: self.repo_url,
            repo_label: self.repo_label,
            user: self.user,
            theme,
            styles,
        }
    }
}
