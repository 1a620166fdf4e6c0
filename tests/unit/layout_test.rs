//! Unit tests for status-line composition

use ghdash::layout::{checked_width, compose, join_nonempty, LayoutError, Segment, StatusLine};
use ghdash::measure_width;
use ratatui::style::{Color, Style};

#[test]
fn padding_fills_gap_between_left_and_right() {
    let line = compose(&[Segment::raw("ab")], &[Segment::raw("cd")], None, 10);
    assert_eq!(line.to_string(), "ab      cd");
    assert_eq!(line.width(), 10);
    assert_eq!(line.padding(), 6);
}

#[test]
fn empty_right_segments_do_not_produce_separators() {
    let sep = Segment::raw(" • ");
    let right = [Segment::raw("x"), Segment::default(), Segment::raw("y")];
    let line = compose(&[], &right, Some(&sep), 12);
    assert_eq!(line.to_string(), "       x • y");
}

#[test]
fn all_empty_right_segments_leave_only_padding() {
    let sep = Segment::raw(" • ");
    let line = compose(
        &[Segment::raw("left")],
        &[Segment::default(), Segment::default()],
        Some(&sep),
        8,
    );
    assert_eq!(line.to_string(), "left    ");
}

#[test]
fn overflow_is_emitted_untruncated() {
    let line = compose(&[Segment::raw("abcdef")], &[Segment::raw("ghij")], None, 5);
    assert_eq!(line.to_string(), "abcdefghij");
    assert_eq!(line.padding(), 0);
    assert_eq!(line.width(), 10);
}

#[test]
fn exact_fit_has_no_padding() {
    let line = compose(&[Segment::raw("abc")], &[Segment::raw("de")], None, 5);
    assert_eq!(line.to_string(), "abcde");
    assert_eq!(line.padding(), 0);
}

#[test]
fn wide_glyphs_count_as_two_columns() {
    assert_eq!(measure_width("日本"), 4);
    let line = compose(&[Segment::raw("日本")], &[Segment::raw("x")], None, 8);
    assert_eq!(line.padding(), 3);
    assert_eq!(measure_width(&line.to_string()), 8);
}

#[test]
fn emoji_with_variation_selector_split_across_spans() {
    let heart = format!("{}{}", '\u{2764}', '\u{FE0F}');
    let whole = Segment::raw(heart.clone());
    let split = Segment::concat([Segment::raw("\u{2764}"), Segment::raw("\u{FE0F}")]);
    assert_eq!(split.width(), whole.width());
    assert_eq!(split.width(), measure_width(&heart));

    let line = compose(&[split], &[Segment::raw("x")], None, 8);
    assert_eq!(line.padding(), 8 - measure_width(&heart) - 1);
    assert_eq!(measure_width(&line.to_string()), 8);
}

#[test]
fn join_skips_empty_segments() {
    let sep = Segment::raw("|");
    let a = Segment::raw("a");
    let empty = Segment::default();
    let b = Segment::raw("b");
    let joined = join_nonempty([&empty, &a, &empty, &b, &empty], Some(&sep));
    assert_eq!(joined.plain(), "a|b");
    assert_eq!(joined.width(), 3);
}

#[test]
fn builder_styles_padding() {
    let bg = Style::default().bg(Color::Blue);
    let line = StatusLine::new(6)
        .left(Segment::raw("a"))
        .right(Segment::raw("b"))
        .padding_style(bg)
        .compose();
    let padding = &line.spans()[1];
    assert_eq!(padding.content, "    ");
    assert_eq!(padding.style, bg);
}

#[test]
fn negative_width_is_an_error() {
    assert_eq!(checked_width(-3), Err(LayoutError::NegativeWidth(-3)));
    assert_eq!(checked_width(0), Ok(0));
    assert_eq!(checked_width(120), Ok(120));
}

#[test]
fn zero_width_with_content_is_overflow() {
    let line = compose(&[Segment::raw("a")], &[], None, 0);
    assert_eq!(line.to_string(), "a");
    assert_eq!(line.padding(), 0);
}

#[test]
fn identical_inputs_give_identical_output() {
    let sep = Segment::raw(" • ");
    let left = [Segment::raw("[PRs]")];
    let right = [Segment::raw("myrepo"), Segment::raw("alice")];
    let a = compose(&left, &right, Some(&sep), 20);
    let b = compose(&left, &right, Some(&sep), 20);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "[PRs] myrepo • alice");
}
