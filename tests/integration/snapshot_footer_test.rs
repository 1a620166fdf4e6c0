//! Visual snapshot tests for the footer
//!
//! Rows have trailing blanks trimmed before comparison.

use ghdash::tui::widgets::Footer;

use super::helpers::{context, render_rows, trimmed_text};

#[test]
fn snapshot_footer_with_full_help() {
    let ctx = context(80, 24);
    let mut footer = Footer::new(&ctx);
    footer.set_right_section("? help");
    footer.set_show_all(true);

    let rows = render_rows(footer.widget(&ctx), 80, footer.height(&ctx));
    insta::assert_snapshot!(trimmed_text(&rows), @r"
  PRs |  Issues                                                  @alice • ? help
s switch to issues    ?      toggle help    enter apply search
/ search PRs          q      quit           esc   cancel search
                      ctrl+c force quit
");
}

#[test]
fn snapshot_issues_view_help() {
    let ctx = context(80, 24).with_view(ghdash::ViewType::Issues);
    let mut footer = Footer::new(&ctx);
    footer.set_show_all(true);

    let lines = footer.lines(&ctx);
    let help: Vec<String> = lines[1..].iter().map(super::helpers::plain).collect();
    insta::assert_snapshot!(trimmed_text(&help), @r"
s switch to PRs    ?      toggle help    enter apply search
/ search issues    q      quit           esc   cancel search
                   ctrl+c force quit
");
}
