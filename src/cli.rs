//! CLI definitions for ghdash
//!
//! The clap structure lives apart from main.rs so tests can build the
//! command without running it.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use ghdash::ViewType;

/// Build clap styles matching the dashboard palette.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ghdash")]
#[command(about = "Terminal dashboard for GitHub pull requests and issues")]
#[command(long_about = "ghdash - a terminal dashboard for GitHub pull requests and issues.

QUICK START:
    ghdash dash                    Open the dashboard on the PRs view
    ghdash dash --view issues      Open the dashboard on the Issues view
    ghdash footer --width 60       Print the footer status line
    ghdash config show             Show the effective configuration")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this configuration file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard
    #[command(long_about = "Open the interactive dashboard.

KEYS:
    /          Edit the search filter
    enter      Apply the filter
    esc        Cancel editing
    s          Switch between PRs and Issues
    ?          Toggle the full help
    q          Quit (asks for confirmation)
    ctrl+c     Quit immediately")]
    Dash(DashArgs),

    /// Print the footer for a given width
    #[command(long_about = "Compose the dashboard footer and print it.

The status line is exactly --width columns wide unless its content is
wider. Colors are emitted as ANSI escapes unless --plain is given.

EXAMPLES:
    ghdash footer --width 80 --user alice
    ghdash footer --width 60 --left ' 3 PRs' --right '? help' --plain
    ghdash footer --show-all")]
    Footer(FooterArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

/// Options shared by commands that build a program context.
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Initial view
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,
    /// Repository directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,
    /// GitHub login shown in the footer
    #[arg(long)]
    pub user: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DashArgs {
    #[command(flatten)]
    pub context: ContextArgs,
}

#[derive(Args, Debug, Clone)]
pub struct FooterArgs {
    #[command(flatten)]
    pub context: ContextArgs,
    /// Total width in columns (defaults to the terminal width)
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,
    /// Text after the view switcher
    #[arg(long, default_value = "")]
    pub left: String,
    /// Text after the repository info
    #[arg(long, default_value = "")]
    pub right: String,
    /// Override the repository name
    #[arg(long, value_name = "NAME")]
    pub repo_name: Option<String>,
    /// Append the full key help
    #[arg(long)]
    pub show_all: bool,
    /// Print the quit confirmation instead of the status line
    #[arg(long)]
    pub confirm_quit: bool,
    /// Print without ANSI colors
    #[arg(long)]
    pub plain: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewArg {
    Prs,
    Issues,
}

impl From<ViewArg> for ViewType {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Prs => ViewType::Prs,
            ViewArg::Issues => ViewType::Issues,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}
