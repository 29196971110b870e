//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Semantic colors
    pub const WARNING: Color = Color::Rgb(255, 217, 61);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Dropdown bar and option panel styles
pub mod dropdown {
    use super::*;

    // Bar
    pub const BORDER_CLOSED: Color = palette::TEXT_DIM;
    pub const BORDER_OPEN: Color = palette::CYAN;
    pub const SUMMARY: Style = Style::new().fg(palette::TEXT);
    pub const PLACEHOLDER: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC);
    pub const TOGGLE_ALL: Style = Style::new().fg(palette::PINK).add_modifier(Modifier::BOLD);
    pub const ARROW: Style = Style::new().fg(palette::PURPLE);

    // Option panel
    pub const PANEL_BORDER: Color = palette::CYAN;
    pub const PANEL_BG: Color = palette::BG_SURFACE;
    pub const OPTION: Style = Style::new().fg(palette::TEXT);
    pub const OPTION_SELECTED: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    pub const SELECTED_MARKER: Color = palette::GREEN;
    pub const SCROLLBAR: Color = palette::TEXT_DIM;
}

/// Demo host styles
pub mod demo {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const INTRO: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const HEADING: Style = Style::new().fg(palette::PURPLE).add_modifier(Modifier::BOLD);
    pub const CHANGE_LOG: Style = Style::new().fg(palette::TEXT_DIM);
    pub const WARNING: Style = Style::new().fg(palette::WARNING);
    pub const KEY_HINT: Style = Style::new().fg(palette::TEXT_MUTED);
}
