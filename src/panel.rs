//! Panel open/close module
//!
//! Owns whether a dropdown's option panel is expanded and the dismissal rules.

mod panel_state;

pub use panel_state::PanelState;
