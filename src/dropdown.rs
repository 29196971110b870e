//! Dropdown widget module
//!
//! A select widget with single and multiple selection, modifier-driven clicks,
//! outside-click dismissal and Escape-to-close.

mod bar_view;
pub mod dropdown_events;
pub mod dropdown_render;
mod dropdown_state;

pub use bar_view::{Arrow, BarView, bar_view, summary_text};
pub use dropdown_events::ScrollDirection;
pub use dropdown_render::{BAR_HEIGHT, render_bar, render_dropdown, render_panel};
pub use dropdown_state::{ChangeCallback, DEFAULT_PANEL_HEIGHT, Dropdown, DropdownProps};
