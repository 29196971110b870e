//! Mouse event dispatcher
//!
//! Routes a mouse event to the topmost dropdown under the pointer, then
//! broadcasts left presses to every mounted dropdown as a global click.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::app_state::App;
use crate::dropdown::ScrollDirection;
use crate::listeners::GlobalEvent;
use crate::selection::ClickModifiers;

/// Handle mouse events by routing to the dropdown under the pointer
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);
    let target = target_at(app, column, row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = target {
                app.dropdowns[index].dropdown.handle_click(
                    column,
                    row,
                    ClickModifiers::from(mouse.modifiers),
                );
            }
            app.registry.dispatch(&GlobalEvent::Click { column, row });
        }
        MouseEventKind::ScrollDown => {
            if let Some(index) = target {
                app.dropdowns[index]
                    .dropdown
                    .handle_scroll(ScrollDirection::Down, column, row);
            }
        }
        MouseEventKind::ScrollUp => {
            if let Some(index) = target {
                app.dropdowns[index]
                    .dropdown
                    .handle_scroll(ScrollDirection::Up, column, row);
            }
        }
        _ => {}
    }
}

/// Index of the topmost dropdown drawn at a position
///
/// Panels are drawn after every bar, so an open panel wins over any bar it covers.
pub fn target_at(app: &App, column: u16, row: u16) -> Option<usize> {
    let point = Position::new(column, row);
    let dropdowns = &app.dropdowns;

    dropdowns
        .iter()
        .rposition(|demo| {
            demo.dropdown
                .regions
                .panel
                .is_some_and(|panel| panel.contains(point))
        })
        .or_else(|| {
            dropdowns.iter().rposition(|demo| {
                demo.dropdown
                    .regions
                    .bar
                    .is_some_and(|bar| bar.contains(point))
            })
        })
}
