//! Layout regions tracking for dropdown parts
//!
//! Tracks where each part of a dropdown is rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

/// Identifies a part of a rendered dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    // Bar
    Bar,
    Label,
    ToggleAll,
    Arrow,

    // Option panel
    Panel,
    Option(usize),
}

/// Tracks rendered areas of one dropdown
///
/// Updated during each render pass. Regions are `None` when the part is not visible.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DropdownRegions {
    // Bar
    pub bar: Option<Rect>,
    pub label: Option<Rect>,
    pub toggle_all: Option<Rect>,
    pub arrow: Option<Rect>,

    // Option panel (only populated when open)
    pub panel: Option<Rect>,
    /// Visible option rows as (option index, row area)
    pub rows: Vec<(usize, Rect)>,
}

impl DropdownRegions {
    /// Create a new empty DropdownRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Smallest rect covering the bar and, when open, the panel
    pub fn root(&self) -> Option<Rect> {
        match (self.bar, self.panel) {
            (Some(bar), Some(panel)) => Some(bar.union(panel)),
            (Some(bar), None) => Some(bar),
            (None, Some(panel)) => Some(panel),
            (None, None) => None,
        }
    }
}
