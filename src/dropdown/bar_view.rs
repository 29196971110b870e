//! Summary bar view
//!
//! Pure mapping from selection state to what the bar shows.

use crate::options::OptionList;
use crate::selection::{SelectMode, Selection, ToggleAll, toggle_all_action};

/// Direction of the bar's arrow icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Open,
    Closed,
}

impl Arrow {
    pub fn symbol(self) -> &'static str {
        match self {
            Arrow::Open => "▲",
            Arrow::Closed => "▼",
        }
    }
}

/// Everything the bar renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarView {
    pub text: String,
    pub is_placeholder: bool,
    /// Select-all/clear-all icon, present only for an open multi-select
    pub toggle_all: Option<ToggleAll>,
    pub arrow: Arrow,
}

/// Selected labels joined with `", "` in index order, or the placeholder when empty
pub fn summary_text(selection: &Selection, options: &OptionList, placeholder: &str) -> String {
    if selection.is_empty() {
        return placeholder.to_string();
    }

    selection
        .indices()
        .filter_map(|index| options.get(index))
        .map(|option| option.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn bar_view(
    selection: &Selection,
    options: &OptionList,
    placeholder: &str,
    open: bool,
    mode: SelectMode,
) -> BarView {
    let toggle_all = (mode.is_multiple() && open).then(|| toggle_all_action(selection, options));

    BarView {
        text: summary_text(selection, options, placeholder),
        is_placeholder: selection.is_empty(),
        toggle_all,
        arrow: if open { Arrow::Open } else { Arrow::Closed },
    }
}

#[cfg(test)]
#[path = "bar_view_tests.rs"]
mod bar_view_tests;
