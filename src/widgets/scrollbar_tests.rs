use ratatui::{Terminal, backend::TestBackend, layout::Rect, style::Color};

use super::render_vertical_scrollbar_styled;

fn right_column(total: usize, viewport: usize, offset: usize, height: u16) -> Vec<String> {
    let backend = TestBackend::new(5, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = Rect::new(0, 0, 5, height);
            render_vertical_scrollbar_styled(frame, area, total, viewport, offset, Color::White);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| buffer[(4, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_scrollbar_not_rendered_when_content_fits() {
    let column = right_column(5, 10, 0, 10);
    assert!(column.iter().all(|cell| cell == " "));
}

#[test]
fn test_scrollbar_not_rendered_for_empty_viewport() {
    let column = right_column(50, 0, 0, 10);
    assert!(column.iter().all(|cell| cell == " "));
}

#[test]
fn test_scrollbar_rendered_when_content_overflows() {
    let column = right_column(100, 10, 0, 10);
    assert!(column.iter().any(|cell| cell != " "));
}
