//! Configuration management for ghdash

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

impl Config {
    /// Get the config file path (~/.config/ghdash/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ghdash)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Load from `path` when given, otherwise from the default location
    pub fn load_or_default_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        io::to_toml(self)
    }

    /// Build the configured theme.
    ///
    /// Loading already validated the theme, so this only fails for configs
    /// constructed in code.
    pub fn theme(&self) -> Result<Theme> {
        Theme::from_config(&self.theme).map_err(anyhow::Error::from)
    }
}
