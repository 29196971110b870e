//! Dropdown rendering
//!
//! Draws the summary bar and, when open, the option panel below it. Every pass
//! records the drawn regions for hit testing and refreshes the root area that
//! decides what counts as an outside click.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::bar_view::Arrow;
use super::dropdown_state::Dropdown;
use crate::selection::ToggleAll;
use crate::theme;
use crate::widgets::{popup, scrollbar};

/// Rows taken by the bar, borders included
pub const BAR_HEIGHT: u16 = 3;

/// Columns taken by each bar icon, padding included
const ICON_WIDTH: u16 = 3;

/// Narrowest bar that still fits a border, both icons and one label column
const MIN_BAR_WIDTH: u16 = 2 + 2 * ICON_WIDTH + 1;

/// Render the bar and, when open, the option panel
pub fn render_dropdown(frame: &mut Frame, area: Rect, dropdown: &mut Dropdown) {
    render_bar(frame, area, dropdown);
    render_panel(frame, dropdown);
}

/// Render the summary bar in the top rows of `area`
///
/// Resets the recorded regions; call [`render_panel`] afterwards for an open dropdown.
pub fn render_bar(frame: &mut Frame, area: Rect, dropdown: &mut Dropdown) {
    dropdown.regions.clear();

    let bar_area = Rect {
        height: area.height.min(BAR_HEIGHT),
        ..area
    };
    if bar_area.height < BAR_HEIGHT || bar_area.width < MIN_BAR_WIDTH {
        dropdown.panel().clear_root();
        return;
    }

    let view = dropdown.bar_view();
    let border_color = match view.arrow {
        Arrow::Open => theme::dropdown::BORDER_OPEN,
        Arrow::Closed => theme::dropdown::BORDER_CLOSED,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(bar_area);
    frame.render_widget(block, bar_area);

    // Icons are laid out right to left: arrow, then the select-all toggle
    let arrow_x = inner.right().saturating_sub(ICON_WIDTH);
    let arrow_text = Rect::new(arrow_x, inner.y, ICON_WIDTH, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", view.arrow.symbol()),
            theme::dropdown::ARROW,
        ))),
        arrow_text,
    );
    let arrow_region = Rect::new(
        arrow_x,
        bar_area.y,
        bar_area.right() - arrow_x,
        bar_area.height,
    );

    let mut label_right = arrow_x;
    if let Some(action) = view.toggle_all {
        let toggle_x = arrow_x - ICON_WIDTH;
        let symbol = match action {
            ToggleAll::SelectAll => "+",
            ToggleAll::ClearAll => "-",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {} ", symbol),
                theme::dropdown::TOGGLE_ALL,
            ))),
            Rect::new(toggle_x, inner.y, ICON_WIDTH, 1),
        );
        dropdown.regions.toggle_all =
            Some(Rect::new(toggle_x, bar_area.y, ICON_WIDTH, bar_area.height));
        label_right = toggle_x;
    }

    let label_style = if view.is_placeholder {
        theme::dropdown::PLACEHOLDER
    } else {
        theme::dropdown::SUMMARY
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", view.text),
            label_style,
        ))),
        Rect::new(inner.x, inner.y, label_right - inner.x, 1),
    );

    dropdown.regions.bar = Some(bar_area);
    dropdown.regions.label = Some(Rect::new(
        bar_area.x,
        bar_area.y,
        label_right - bar_area.x,
        bar_area.height,
    ));
    dropdown.regions.arrow = Some(arrow_region);
    dropdown.panel().set_root(bar_area);
}

/// Render the option panel below the bar drawn by [`render_bar`]
///
/// Draws nothing when the dropdown is closed or there is no room below the bar.
pub fn render_panel(frame: &mut Frame, dropdown: &mut Dropdown) {
    dropdown.regions.panel = None;
    dropdown.regions.rows.clear();

    let Some(bar) = dropdown.regions.bar else {
        return;
    };
    if !dropdown.is_open() {
        return;
    }

    let total = dropdown.options().len();
    let wanted_rows = total.min(dropdown.panel_height() as usize) as u16;
    let panel_area = popup::popup_below_anchor(bar, wanted_rows.saturating_add(2), frame.area());
    if panel_area.height < 2 {
        return;
    }

    popup::clear_area(frame, panel_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::dropdown::PANEL_BORDER))
        .style(Style::default().bg(theme::dropdown::PANEL_BG));
    let inner = block.inner(panel_area);

    dropdown.scroll.update_bounds(total, inner.height as usize);
    let visible = dropdown.scroll.visible_range(total);

    let mut lines = Vec::with_capacity(visible.len());
    let mut rows = Vec::with_capacity(visible.len());
    for (row, index) in visible.enumerate() {
        let option = &dropdown.options()[index];
        let selected = dropdown.selection().contains(index);

        let (marker, style) = if selected {
            ("✓ ", theme::dropdown::OPTION_SELECTED)
        } else {
            ("  ", theme::dropdown::OPTION)
        };
        lines.push(
            Line::from(vec![
                Span::styled(
                    format!(" {}", marker),
                    style.fg(theme::dropdown::SELECTED_MARKER),
                ),
                Span::styled(option.label.clone(), style),
            ])
            .style(style),
        );
        rows.push((index, Rect::new(inner.x, inner.y + row as u16, inner.width, 1)));
    }

    frame.render_widget(Paragraph::new(lines).block(block), panel_area);
    scrollbar::render_vertical_scrollbar_styled(
        frame,
        panel_area,
        total,
        inner.height as usize,
        dropdown.scroll.offset,
        theme::dropdown::SCROLLBAR,
    );

    dropdown.regions.panel = Some(panel_area);
    dropdown.regions.rows = rows;
    dropdown.panel().set_root(bar.union(panel_area));
}

#[cfg(test)]
#[path = "dropdown_render_tests.rs"]
mod dropdown_render_tests;
