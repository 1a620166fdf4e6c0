//! Dash command handler

use anyhow::Result;

use ghdash::tui::dashboard;
use ghdash::Config;

use crate::cli::DashArgs;

/// Open the interactive dashboard.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &DashArgs, config: &Config) -> Result<()> {
    let ctx = super::context_builder(&args.context, config)?.build();
    dashboard::run(ctx, config)
}
