//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use ghdash::Config;

/// Print the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the path the configuration is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(override_path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(override_path)?.display());
    Ok(())
}

pub(crate) fn resolve_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}
