//! Key bindings and per-view key maps
//!
//! A binding pairs the keys that trigger it with the text shown in the help
//! panel. Key maps group bindings into help columns.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::context::ViewType;

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SwitchView,
    Search,
    ToggleHelp,
    Quit,
    ForceQuit,
    ApplySearch,
    CancelSearch,
}

/// A set of keys bound to one action, plus its help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    keys: Vec<(KeyCode, KeyModifiers)>,
    pub action: Action,
    pub help_key: &'static str,
    pub help_desc: &'static str,
    pub enabled: bool,
}

impl KeyBinding {
    pub fn new(action: Action, help_key: &'static str, help_desc: &'static str) -> Self {
        Self {
            keys: Vec::new(),
            action,
            help_key,
            help_desc,
            enabled: true,
        }
    }

    /// Bind a plain key.
    pub fn key(self, code: KeyCode) -> Self {
        self.key_with(code, KeyModifiers::NONE)
    }

    /// Bind a key with modifiers.
    pub fn key_with(mut self, code: KeyCode, modifiers: KeyModifiers) -> Self {
        self.keys.push((code, modifiers));
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        let modifiers = normalize_modifiers(event.code, event.modifiers);
        self.keys
            .iter()
            .any(|(code, mods)| *code == event.code && *mods == modifiers)
    }
}

// Terminals report SHIFT for shifted characters like '?' or 'G'; the
// character itself already encodes it.
fn normalize_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) => modifiers - KeyModifiers::SHIFT,
        _ => modifiers,
    }
}

/// Bindings for one view, grouped into help columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub navigation: Vec<KeyBinding>,
    pub app: Vec<KeyBinding>,
    pub search: Vec<KeyBinding>,
}

impl KeyMap {
    /// Columns shown by the expanded help panel, in display order.
    pub fn full_help(&self) -> Vec<&[KeyBinding]> {
        vec![
            self.navigation.as_slice(),
            self.app.as_slice(),
            self.search.as_slice(),
        ]
    }

    /// Action for a key pressed while browsing.
    pub fn normal_action(&self, event: &KeyEvent) -> Option<Action> {
        self.navigation
            .iter()
            .chain(&self.app)
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Action for a key pressed while the search bar has focus.
    pub fn search_action(&self, event: &KeyEvent) -> Option<Action> {
        self.search
            .iter()
            .chain(self.app.iter().filter(|b| b.action == Action::ForceQuit))
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }
}

/// Build the key map for `view`.
pub fn key_map_for_view(view: ViewType) -> KeyMap {
    let (switch_desc, search_desc) = match view {
        ViewType::Prs => ("switch to issues", "search PRs"),
        ViewType::Issues => ("switch to PRs", "search issues"),
    };

    KeyMap {
        navigation: vec![
            KeyBinding::new(Action::SwitchView, "s", switch_desc).key(KeyCode::Char('s')),
            KeyBinding::new(Action::Search, "/", search_desc).key(KeyCode::Char('/')),
        ],
        app: vec![
            KeyBinding::new(Action::ToggleHelp, "?", "toggle help").key(KeyCode::Char('?')),
            KeyBinding::new(Action::Quit, "q", "quit").key(KeyCode::Char('q')),
            KeyBinding::new(Action::ForceQuit, "ctrl+c", "force quit")
                .key_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ],
        search: vec![
            KeyBinding::new(Action::ApplySearch, "enter", "apply search").key(KeyCode::Enter),
            KeyBinding::new(Action::CancelSearch, "esc", "cancel search").key(KeyCode::Esc),
        ],
    }
}
