//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::context::ViewType;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Startup defaults for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// View shown on startup
    #[serde(default)]
    pub view: ViewType,
    /// Show the expanded key-binding help under the footer
    #[serde(default)]
    pub show_full_help: bool,
}

/// Initial search filters, one per view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_prs_filter")]
    pub prs_filter: String,
    #[serde(default = "default_issues_filter")]
    pub issues_filter: String,
}

pub fn default_prs_filter() -> String {
    "is:open author:@me".to_string()
}

pub fn default_issues_filter() -> String {
    "is:open assignee:@me".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prs_filter: default_prs_filter(),
            issues_filter: default_issues_filter(),
        }
    }
}

impl SearchConfig {
    pub fn filter_for(&self, view: ViewType) -> &str {
        match view {
            ViewType::Prs => &self.prs_filter,
            ViewType::Issues => &self.issues_filter,
        }
    }
}

/// GitHub user shown in the footer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
}

/// Theme selection and color overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// One of: default, classic, ocean
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default)]
    pub colors: ThemeColors,
}

pub fn default_preset() -> String {
    "default".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            colors: ThemeColors::default(),
        }
    }
}

/// Optional per-color overrides (names like "blue", hex like "#39386b",
/// or ANSI indexes like "62").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faint_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faint_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_view: Option<String>,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when GHDASH_LOG is unset (e.g. "warn", "ghdash=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
