//! Search bar behavior through the public API

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ghdash::theme::StyleRole;
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget};
use ghdash::tui::widgets::{SearchBar, SearchOptions, SEARCH_BAR_HEIGHT};

use super::helpers::{context, render_rows};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn options() -> SearchOptions {
    SearchOptions {
        prefix: "is:issue".to_string(),
        initial_value: "is:open".to_string(),
        placeholder: "Search issues".to_string(),
    }
}

#[test]
fn prompt_wraps_prefix_in_spaces() {
    let bar = SearchBar::new(&context(80, 24), options());
    assert_eq!(bar.prompt(), " is:issue ");
    // 80 - 10 - 6
    assert_eq!(bar.input_width(), 64);
}

#[test]
fn typing_and_deleting() {
    let ctx = context(80, 24);
    let mut bar = SearchBar::new(&ctx, options());
    bar.focus();
    for c in " label:bug".chars() {
        bar.update(&ctx, key(KeyCode::Char(c)));
    }
    assert_eq!(bar.value(), "is:open label:bug");
    bar.update(&ctx, key(KeyCode::Backspace));
    assert_eq!(bar.value(), "is:open label:bu");
}

#[test]
fn set_value_replaces_text() {
    let ctx = context(80, 24);
    let mut bar = SearchBar::new(&ctx, options());
    bar.set_value("is:closed");
    assert_eq!(bar.value(), "is:closed");
    assert_eq!(bar.applied_value(), "is:open");
}

#[test]
fn empty_value_renders_placeholder() {
    let ctx = context(60, 24);
    let mut bar = SearchBar::new(&ctx, options());
    bar.set_value("");
    let rows = render_rows(bar.widget(&ctx), 60, SEARCH_BAR_HEIGHT);
    assert!(rows[1].starts_with(" is:issue Search issues"));
}

#[test]
fn focused_empty_value_puts_cursor_on_placeholder() {
    let ctx = context(60, 24);
    let mut bar = SearchBar::new(&ctx, options());
    bar.set_value("");
    bar.focus();
    let area = Rect::new(0, 0, 60, SEARCH_BAR_HEIGHT);
    let mut buf = Buffer::empty(area);
    bar.widget(&ctx).render(area, &mut buf);

    // " is:issue " is 10 columns wide
    assert_eq!(buf[(10, 1)].symbol(), "S");
    assert!(buf[(10, 1)].modifier.contains(Modifier::REVERSED));
    assert_eq!(buf[(11, 1)].symbol(), "e");
    assert!(!buf[(11, 1)].modifier.contains(Modifier::REVERSED));
    let row: String = (0..60).map(|x| buf[(x, 1)].symbol()).collect();
    assert!(row.starts_with(" is:issue Search issues"));
}

#[test]
fn ctrl_m_does_not_split_the_query() {
    let ctx = context(80, 24);
    let mut bar = SearchBar::new(&ctx, options());
    bar.focus();
    let ctrl_m = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL);
    assert!(!bar.update(&ctx, ctrl_m));
    bar.update(&ctx, key(KeyCode::Char('!')));
    assert_eq!(bar.value(), "is:open!");

    let rows = render_rows(bar.widget(&ctx), 80, SEARCH_BAR_HEIGHT);
    assert!(rows[1].starts_with(" is:issue is:open!"));
}

#[test]
fn focus_changes_prompt_style() {
    let ctx = context(60, 24);
    let styles = ctx.styles();
    assert_ne!(
        styles.for_role(StyleRole::SearchPrompt, true),
        styles.for_role(StyleRole::SearchPrompt, false)
    );
}

#[test]
fn tiny_screen_keeps_minimum_input() {
    let bar = SearchBar::new(&context(5, 24), options());
    assert_eq!(bar.input_width(), 2);
}
