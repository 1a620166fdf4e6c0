//! Footer status line and help rendering

use ghdash::context::{ProgramContext, ViewType};
use ghdash::measure_width;
use ghdash::tui::widgets::{Footer, CONFIRM_QUIT_PROMPT};
use ratatui::style::Modifier;

use super::helpers::{context, plain, render_rows};

#[test]
fn status_line_is_exactly_screen_width() {
    for width in [40u16, 80, 133] {
        let ctx = context(width, 24);
        let footer = Footer::new(&ctx);
        let line = footer.status_line(&ctx);
        assert_eq!(measure_width(&plain(&line)), usize::from(width));
    }
}

#[test]
fn right_section_joins_repo_info_with_bullet() {
    let ctx = ProgramContext::builder()
        .size(80, 24)
        .repo_path("/work/gh-dash")
        .repo_url("https://github.com/dlvhdr/gh-dash.git")
        .user("alice")
        .build();
    let mut footer = Footer::new(&ctx);
    footer.set_right_section("? help");

    let text = plain(&footer.status_line(&ctx));
    assert!(text.ends_with("  dlvhdr/gh-dash • @alice • ? help"));
}

#[test]
fn empty_sections_leave_only_switcher_and_padding() {
    let ctx = ProgramContext::builder().size(30, 24).build();
    let footer = Footer::new(&ctx);
    let text = plain(&footer.status_line(&ctx));
    assert_eq!(text, format!("  PRs |  Issues {}", " ".repeat(14)));
}

#[test]
fn active_view_is_bold() {
    let ctx = context(80, 24).with_view(ViewType::Issues);
    let footer = Footer::new(&ctx);
    let line = footer.status_line(&ctx);
    let issues = line
        .spans
        .iter()
        .find(|s| s.content == " Issues")
        .unwrap();
    let prs = line.spans.iter().find(|s| s.content == " PRs").unwrap();
    assert!(issues.style.add_modifier.contains(Modifier::BOLD));
    assert!(!prs.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn confirm_quit_replaces_status_line() {
    let ctx = context(80, 24);
    let mut footer = Footer::new(&ctx);
    footer.set_show_confirm_quit(true);
    footer.set_show_all(true);
    let lines = footer.lines(&ctx);
    assert_eq!(plain(&lines[0]), CONFIRM_QUIT_PROMPT);
}

#[test]
fn overflowing_status_line_is_not_truncated() {
    let ctx = context(20, 24);
    let mut footer = Footer::new(&ctx);
    footer.set_left_section(" a long status message");
    let text = plain(&footer.status_line(&ctx));
    assert!(measure_width(&text) > 20);
    assert!(text.ends_with(" @alice"));
}

#[test]
fn widget_renders_status_line_then_help() {
    let ctx = context(80, 24);
    let mut footer = Footer::new(&ctx);
    footer.toggle_show_all();
    let height = footer.height(&ctx);
    assert_eq!(height, 4);

    let rows = render_rows(footer.widget(&ctx), 80, height);
    assert!(rows[0].starts_with("  PRs |  Issues "));
    assert!(rows[1].starts_with("s switch to issues"));
    assert!(rows[2].starts_with("/ search PRs"));
}

#[test]
fn narrow_help_ends_with_ellipsis() {
    let ctx = context(45, 24);
    let mut footer = Footer::new(&ctx);
    footer.set_show_all(true);
    let lines = footer.lines(&ctx);
    assert!(plain(&lines[1]).ends_with(" …"));
}
