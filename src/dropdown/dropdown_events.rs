//! Dropdown mouse handling
//!
//! Routes clicks and wheel scrolls to the part of the dropdown under the cursor,
//! using the regions recorded by the last render.

use super::dropdown_state::Dropdown;
use crate::layout::{Region, region_at};
use crate::selection::ClickModifiers;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

const PANEL_SCROLL_ROWS: usize = 1;

impl Dropdown {
    /// Handle a left click at the given position
    ///
    /// Returns `true` when the click landed on the dropdown, whether or not it
    /// changed anything.
    pub fn handle_click(&mut self, column: u16, row: u16, modifiers: ClickModifiers) -> bool {
        let Some(region) = region_at(&self.regions, column, row) else {
            return false;
        };

        match region {
            Region::Label | Region::Arrow => self.toggle_open(),
            Region::ToggleAll if self.is_open() => self.toggle_all(),
            Region::Option(index) if self.is_open() && index < self.options().len() => {
                self.click_option(index, modifiers)
            }
            // Borders, and regions left over from a render before the panel closed
            _ => {}
        }

        true
    }

    /// Scroll the open panel when the wheel turns over it
    pub fn handle_scroll(&mut self, direction: ScrollDirection, column: u16, row: u16) -> bool {
        if !self.is_open() {
            return false;
        }

        match region_at(&self.regions, column, row) {
            Some(Region::Panel) | Some(Region::Option(_)) => {
                match direction {
                    ScrollDirection::Up => self.scroll.scroll_up(PANEL_SCROLL_ROWS),
                    ScrollDirection::Down => self.scroll.scroll_down(PANEL_SCROLL_ROWS),
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "dropdown_events_tests.rs"]
mod dropdown_events_tests;
