//! dropsel library - Terminal dropdown select widget
//!
//! A ratatui dropdown with single and multiple selection, plus the demo host
//! the `dropsel` binary runs.

pub mod app;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod layout;
pub mod listeners;
pub mod options;
pub mod panel;
pub mod scroll;
pub mod selection;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, OutputMode};
pub use config::Config;
pub use dropdown::{Dropdown, DropdownProps};
pub use error::DropselError;
pub use listeners::{GlobalEvent, ListenerRegistry};
pub use options::{OptionList, SelectOption};
pub use selection::{ClickModifiers, Selection};
