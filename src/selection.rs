//! Selection module
//!
//! Holds the selection value and the pure transition rules that drive it.

mod selection_state;

pub use selection_state::{
    ClickModifiers, SelectMode, Selection, ToggleAll, next_selection, toggle_all,
    toggle_all_action,
};
