//! Tests for DropdownRegions struct

use ratatui::layout::Rect;

use super::layout_regions::DropdownRegions;

#[test]
fn test_new_creates_empty_regions() {
    let regions = DropdownRegions::new();

    assert!(regions.bar.is_none());
    assert!(regions.label.is_none());
    assert!(regions.toggle_all.is_none());
    assert!(regions.arrow.is_none());
    assert!(regions.panel.is_none());
    assert!(regions.rows.is_empty());
    assert!(regions.root().is_none());
}

#[test]
fn test_clear_resets_all_regions() {
    let mut regions = DropdownRegions::new();

    regions.bar = Some(Rect::new(0, 0, 30, 3));
    regions.panel = Some(Rect::new(0, 3, 30, 10));
    regions.rows.push((0, Rect::new(1, 4, 28, 1)));

    regions.clear();

    assert_eq!(regions, DropdownRegions::default());
}

#[test]
fn test_root_closed_is_bar() {
    let mut regions = DropdownRegions::new();
    regions.bar = Some(Rect::new(2, 4, 30, 3));

    assert_eq!(regions.root(), Some(Rect::new(2, 4, 30, 3)));
}

#[test]
fn test_root_open_covers_bar_and_panel() {
    let mut regions = DropdownRegions::new();
    regions.bar = Some(Rect::new(2, 4, 30, 3));
    regions.panel = Some(Rect::new(2, 7, 30, 12));

    assert_eq!(regions.root(), Some(Rect::new(2, 4, 30, 15)));
}
