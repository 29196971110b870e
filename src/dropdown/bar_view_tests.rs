//! Tests for bar_view

use super::*;
use crate::options::SelectOption;
use crate::selection::{ClickModifiers, next_selection};
use insta::assert_snapshot;

fn abc() -> OptionList {
    OptionList::new(vec![
        SelectOption::new("A", 1),
        SelectOption::new("B", 2),
        SelectOption::new("C", 3),
    ])
}

#[test]
fn test_summary_ctrl_click_first_and_last() {
    let options = abc();
    let first = next_selection(
        &Selection::empty(),
        0,
        &options,
        ClickModifiers::CTRL,
        SelectMode::Multiple,
    );
    let both = next_selection(&first, 2, &options, ClickModifiers::CTRL, SelectMode::Multiple);

    assert_snapshot!(summary_text(&both, &options, "Select an item..."), @"A, C");
}

#[test]
fn test_summary_index_order_not_click_order() {
    let options = abc();
    let last = Selection::single(2, &options);
    let both = next_selection(&last, 0, &options, ClickModifiers::CTRL, SelectMode::Multiple);

    assert_eq!(summary_text(&both, &options, ""), "A, C");
}

#[test]
fn test_summary_empty_uses_placeholder() {
    let options = abc();
    assert_snapshot!(
        summary_text(&Selection::empty(), &options, "Select an item..."),
        @"Select an item..."
    );
}

#[test]
fn test_summary_single_label() {
    let options = abc();
    assert_eq!(
        summary_text(&Selection::single(1, &options), &options, "-"),
        "B"
    );
}

#[test]
fn test_bar_view_closed_has_no_toggle_all() {
    let options = abc();
    let view = bar_view(
        &Selection::empty(),
        &options,
        "pick",
        false,
        SelectMode::Multiple,
    );

    assert_eq!(view.toggle_all, None);
    assert_eq!(view.arrow, Arrow::Closed);
    assert!(view.is_placeholder);
    assert_eq!(view.text, "pick");
}

#[test]
fn test_bar_view_single_mode_never_has_toggle_all() {
    let options = abc();
    let view = bar_view(
        &Selection::empty(),
        &options,
        "pick",
        true,
        SelectMode::Single,
    );

    assert_eq!(view.toggle_all, None);
    assert_eq!(view.arrow, Arrow::Open);
}

#[test]
fn test_bar_view_open_multi_shows_next_action() {
    let options = abc();

    let partial = bar_view(
        &Selection::single(0, &options),
        &options,
        "",
        true,
        SelectMode::Multiple,
    );
    assert_eq!(partial.toggle_all, Some(ToggleAll::SelectAll));
    assert!(!partial.is_placeholder);

    let full = bar_view(
        &Selection::all(&options),
        &options,
        "",
        true,
        SelectMode::Multiple,
    );
    assert_eq!(full.toggle_all, Some(ToggleAll::ClearAll));
    assert_eq!(full.text, "A, B, C");
}

#[test]
fn test_arrow_symbols() {
    assert_eq!(Arrow::Open.symbol(), "▲");
    assert_eq!(Arrow::Closed.symbol(), "▼");
}
