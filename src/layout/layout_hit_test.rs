//! Hit testing for dropdown regions
//!
//! Determines which part of a dropdown is at a given screen position.

use ratatui::layout::{Position, Rect};

use super::layout_regions::{DropdownRegions, Region};

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    rect.contains(Position::new(x, y))
}

/// Returns the topmost region containing the given point
///
/// The panel is drawn over whatever lies below the bar, so option rows and the
/// panel are checked first, then the bar's icons, then the label and bar border.
/// Returns `None` if the point is outside the dropdown.
pub fn region_at(regions: &DropdownRegions, x: u16, y: u16) -> Option<Region> {
    if let Some(rect) = &regions.panel
        && contains(rect, x, y)
    {
        let row = regions
            .rows
            .iter()
            .find(|(_, row)| contains(row, x, y))
            .map(|(index, _)| Region::Option(*index));
        return Some(row.unwrap_or(Region::Panel));
    }

    if let Some(rect) = &regions.toggle_all
        && contains(rect, x, y)
    {
        return Some(Region::ToggleAll);
    }

    if let Some(rect) = &regions.arrow
        && contains(rect, x, y)
    {
        return Some(Region::Arrow);
    }

    if let Some(rect) = &regions.label
        && contains(rect, x, y)
    {
        return Some(Region::Label);
    }

    if let Some(rect) = &regions.bar
        && contains(rect, x, y)
    {
        return Some(Region::Bar);
    }

    None
}
