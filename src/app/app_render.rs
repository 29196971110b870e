use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::app_state::App;
use crate::dropdown::{BAR_HEIGHT, render_bar, render_panel};
use crate::theme;

/// Widest a dropdown bar is drawn, whatever the terminal width
const MAX_BAR_WIDTH: u16 = 48;

/// Rows per hosted dropdown: heading, bar, change log and a blank spacer
const SECTION_HEIGHT: u16 = 1 + BAR_HEIGHT + 1 + 1;

const INTRO: [&str; 2] = [
    "Click an item to select it. Ctrl+click toggles one item, Alt+click selects or clears all.",
    "Esc or a click anywhere else closes an open list.",
];

const KEY_HINTS: &str = " q quit | Enter print selections | Esc close list";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::demo::BACKGROUND)),
            frame.area(),
        );

        let mut constraints = vec![Constraint::Length(INTRO.len() as u16 + 1)];
        constraints.extend(self.dropdowns.iter().map(|_| Constraint::Length(SECTION_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));

        let content = frame.area().inner(Margin::new(2, 1));
        let layout = Layout::vertical(constraints).split(content);

        render_intro(frame, layout[0]);

        for (demo, &section) in self.dropdowns.iter_mut().zip(&layout[1..]) {
            let [heading_area, bar_area, change_area, _] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(BAR_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(section);

            frame.render_widget(
                Paragraph::new(Span::styled(demo.heading.as_str(), theme::demo::HEADING)),
                heading_area,
            );

            let bar_area = Rect {
                width: bar_area.width.min(MAX_BAR_WIDTH),
                ..bar_area
            };
            render_bar(frame, bar_area, &mut demo.dropdown);

            let change = format!("onChange: {}", demo.last_change.borrow());
            frame.render_widget(
                Paragraph::new(Span::styled(change, theme::demo::CHANGE_LOG)),
                change_area,
            );
        }

        // Footer spans the full width below the margin
        let footer_area = Rect {
            y: frame.area().bottom().saturating_sub(1),
            height: 1,
            ..frame.area()
        };
        self.render_footer(frame, footer_area);

        // Panels go last so an open list covers everything below its bar
        for demo in &mut self.dropdowns {
            render_panel(frame, &mut demo.dropdown);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.warning {
            Some(warning) => Line::from(Span::styled(format!(" {}", warning), theme::demo::WARNING)),
            None => Line::from(Span::styled(KEY_HINTS, theme::demo::KEY_HINT)),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = INTRO
        .iter()
        .map(|text| Line::from(Span::styled(*text, theme::demo::INTRO)))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
