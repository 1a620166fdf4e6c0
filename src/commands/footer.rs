//! Footer command handler

use anyhow::{Context, Result};
use terminal_size::{terminal_size, Width};

use ghdash::layout::checked_width;
use ghdash::theme::line_to_ansi;
use ghdash::tui::widgets::Footer;
use ghdash::Config;

use crate::cli::FooterArgs;

const FALLBACK_WIDTH: usize = 80;

/// Print the composed footer to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &FooterArgs, config: &Config) -> Result<()> {
    let default_width = terminal_size()
        .map(|(Width(w), _)| usize::from(w))
        .unwrap_or(FALLBACK_WIDTH);
    print!("{}", render(args, config, default_width)?);
    Ok(())
}

/// Render the footer as text, one line per row, each ending in a newline.
pub(crate) fn render(args: &FooterArgs, config: &Config, default_width: usize) -> Result<String> {
    let width = match args.width {
        Some(width) => checked_width(width)?,
        None => default_width,
    };
    let screen_width =
        u16::try_from(width).with_context(|| format!("Width {} is too large", width))?;

    let mut builder = super::context_builder(&args.context, config)?.size(screen_width, 1);
    if let Some(name) = &args.repo_name {
        builder = builder.repo_name(name.clone());
    }
    let ctx = builder.build();

    let mut footer = Footer::new(&ctx);
    footer.set_left_section(args.left.clone());
    footer.set_right_section(args.right.clone());
    footer.set_show_all(args.show_all);
    footer.set_show_confirm_quit(args.confirm_quit);

    let mut out = String::new();
    for line in footer.lines(&ctx) {
        if args.plain {
            out.extend(line.spans.iter().map(|span| span.content.as_ref()));
        } else {
            out.push_str(&line_to_ansi(&line));
        }
        out.push('\n');
    }
    Ok(out)
}
