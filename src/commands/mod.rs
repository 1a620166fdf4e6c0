//! Command handlers for the ghdash CLI.
//!
//! Each submodule handles one subcommand; dispatch lives in main.rs.

pub mod completions;
pub mod config;
pub mod dash;
pub mod footer;

use anyhow::{Context, Result};
use tracing::debug;

use ghdash::context::ProgramContextBuilder;
use ghdash::{git, Config, ProgramContext, ViewType};

use crate::cli::ContextArgs;

/// Start a context from CLI flags layered over the config file.
///
/// Flags win over config values. The repository is discovered from
/// `--repo` or the current directory; an explicit `--repo` outside a git
/// checkout is still shown by its directory name.
pub fn context_builder(args: &ContextArgs, config: &Config) -> Result<ProgramContextBuilder> {
    let view = args.view.map(ViewType::from).unwrap_or(config.defaults.view);
    let mut builder = ProgramContext::builder()
        .view(view)
        .theme(config.theme()?);

    let start = match &args.repo {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    match git::discover(&start) {
        Some(repo) => {
            debug!(path = %repo.path.display(), "repository discovered");
            builder = builder.repo(repo);
        }
        None if args.repo.is_some() => builder = builder.repo_path(start),
        None => debug!(start = %start.display(), "no repository found"),
    }

    if let Some(login) = args.user.clone().or_else(|| config.user.login.clone()) {
        builder = builder.user(login);
    }
    Ok(builder)
}
