use std::cell::Cell;
use std::rc::Rc;

use ratatui::crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};

/// Open/closed state of a dropdown's option panel
///
/// Clones share state, so a clone captured by a global listener can close the
/// panel its widget renders. The root area is the widget's full footprint from the
/// last render (bar plus panel while open) and decides what counts as an outside click.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    open: Rc<Cell<bool>>,
    root: Rc<Cell<Option<Rect>>>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.set(!self.open.get());
    }


    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn set_root(&self, area: Rect) {
        self.root.set(Some(area));
    }

    /// Forget the root area, e.g. when there was no room to draw the widget
    pub fn clear_root(&self) {
        self.root.set(None);
    }

    pub fn root(&self) -> Option<Rect> {
        self.root.get()
    }

    /// Whether the point lies inside the last rendered root area
    ///
    /// Nothing is inside a widget that has not been rendered yet.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.root
            .get()
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Close on a click outside the root area
    pub fn on_global_click(&self, column: u16, row: u16) {
        if self.is_open() && !self.contains(column, row) {
            #[cfg(debug_assertions)]
            log::debug!("Outside click at ({}, {}) closes panel", column, row);
            self.close();
        }
    }

    /// Close when Escape is released
    pub fn on_global_key_up(&self, code: KeyCode) {
        if code == KeyCode::Esc {
            self.close();
        }
    }

}

#[cfg(test)]
#[path = "panel_state_tests.rs"]
mod panel_state_tests;
