//! ghdash - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands, ConfigCommands};
use ghdash::logging::{self, LogTarget};
use ghdash::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default_path(cli.config.as_deref())?;

    // The dashboard owns the terminal, so its logs go to a file
    let target = match cli.command {
        Commands::Dash(_) => logging::default_log_file()
            .map(LogTarget::File)
            .unwrap_or(LogTarget::Stderr),
        _ => LogTarget::Stderr,
    };
    let _log_guard = match logging::init(target, &config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };
    // The subscriber needs the config, so the load is reported afterwards
    if let Ok(path) = commands::config::resolve_path(cli.config.as_deref()) {
        info!(path = %path.display(), found = path.exists(), "configuration loaded");
    }

    match cli.command {
        Commands::Dash(args) => commands::dash::handle(&args, &config),
        Commands::Footer(args) => commands::footer::handle(&args, &config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
