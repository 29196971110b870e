// Configuration type definitions

use serde::Deserialize;

use crate::dropdown::DEFAULT_PANEL_HEIGHT;

pub const DEFAULT_PLACEHOLDER: &str = "Select an item...";
pub const DEFAULT_ITEM_COUNT: usize = 100;

/// Dropdown appearance section
#[derive(Debug, Clone, Deserialize)]
pub struct DropdownConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Option rows shown before the panel scrolls
    #[serde(default = "default_panel_height")]
    pub panel_height: u16,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_panel_height() -> u16 {
    DEFAULT_PANEL_HEIGHT
}

impl Default for DropdownConfig {
    fn default() -> Self {
        DropdownConfig {
            placeholder: default_placeholder(),
            panel_height: default_panel_height(),
        }
    }
}

/// Demo host section
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Number of generated options when no options file is given
    #[serde(default = "default_item_count")]
    pub item_count: usize,
}

fn default_item_count() -> usize {
    DEFAULT_ITEM_COUNT
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            item_count: default_item_count(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dropdown: DropdownConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
