use std::collections::BTreeMap;

use ratatui::crossterm::event::KeyModifiers;
use serde::Serialize;
use serde_json::Value;

use crate::options::{OptionList, SelectOption};

/// Whether a dropdown allows more than one selected option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    #[default]
    Single,
    Multiple,
}

impl SelectMode {
    pub fn is_multiple(self) -> bool {
        self == SelectMode::Multiple
    }
}

impl From<bool> for SelectMode {
    fn from(select_multiple: bool) -> Self {
        if select_multiple {
            SelectMode::Multiple
        } else {
            SelectMode::Single
        }
    }
}

/// Modifier keys held during a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickModifiers {
    /// Toggle the clicked option
    pub ctrl: bool,
    /// Select all, or clear when everything is already selected
    pub alt: bool,
}

impl ClickModifiers {
    pub const NONE: ClickModifiers = ClickModifiers {
        ctrl: false,
        alt: false,
    };
    pub const CTRL: ClickModifiers = ClickModifiers {
        ctrl: true,
        alt: false,
    };
    pub const ALT: ClickModifiers = ClickModifiers {
        ctrl: false,
        alt: true,
    };
}

impl From<KeyModifiers> for ClickModifiers {
    fn from(modifiers: KeyModifiers) -> Self {
        Self {
            ctrl: modifiers.contains(KeyModifiers::CONTROL),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

/// What the select-all affordance would do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAll {
    SelectAll,
    ClearAll,
}

/// Selected options keyed by their index in the option list
///
/// A value type: transitions build a new selection instead of editing one in place.
/// Iteration is in ascending index order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Selection {
    entries: BTreeMap<usize, SelectOption>,
}

impl Selection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(index: usize, options: &OptionList) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(index, options[index].clone());
        Self { entries }
    }

    pub fn all(options: &OptionList) -> Self {
        Self {
            entries: options.iter().cloned().enumerate().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.entries.get(&index)
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &SelectOption)> {
        self.entries.iter().map(|(index, option)| (*index, option))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|option| option.label.as_str())
    }

    /// Index-keyed JSON object, e.g. `{"0": {"label": "A", "value": 1}}`
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn with_toggled(&self, index: usize, options: &OptionList) -> Self {
        let mut entries = self.entries.clone();
        if entries.remove(&index).is_none() {
            entries.insert(index, options[index].clone());
        }
        Self { entries }
    }
}

/// Next selection after clicking option `clicked`
///
/// Rules, first match wins:
/// 1. single mode: the clicked option alone, modifiers ignored
/// 2. alt: select every option, or clear if all are already selected
/// 3. ctrl: toggle the clicked option, keep the rest
/// 4. plain click: the clicked option alone
///
/// # Panics
/// Panics if `clicked` is not a valid index into `options`.
pub fn next_selection(
    current: &Selection,
    clicked: usize,
    options: &OptionList,
    modifiers: ClickModifiers,
    mode: SelectMode,
) -> Selection {
    assert!(
        clicked < options.len(),
        "clicked option {} out of range for {} options",
        clicked,
        options.len()
    );

    match mode {
        SelectMode::Single => Selection::single(clicked, options),
        SelectMode::Multiple if modifiers.alt => toggle_all(current, options),
        SelectMode::Multiple if modifiers.ctrl => current.with_toggled(clicked, options),
        SelectMode::Multiple => Selection::single(clicked, options),
    }
}

/// Select everything unless everything is already selected, in which case clear
pub fn toggle_all(current: &Selection, options: &OptionList) -> Selection {
    match toggle_all_action(current, options) {
        ToggleAll::SelectAll => Selection::all(options),
        ToggleAll::ClearAll => Selection::empty(),
    }
}

pub fn toggle_all_action(current: &Selection, options: &OptionList) -> ToggleAll {
    if current.len() < options.len() {
        ToggleAll::SelectAll
    } else {
        ToggleAll::ClearAll
    }
}

#[cfg(test)]
#[path = "selection_state_tests.rs"]
mod selection_state_tests;
