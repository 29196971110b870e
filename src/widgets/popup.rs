use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, same width, at most `height` rows and never past `bounds`
pub fn popup_below_anchor(anchor: Rect, height: u16, bounds: Rect) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let available = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_below_anchor_basic() {
        let anchor = Rect {
            x: 4,
            y: 2,
            width: 30,
            height: 3,
        };
        let bounds = Rect::new(0, 0, 80, 24);

        let popup = popup_below_anchor(anchor, 10, bounds);

        assert_eq!(popup.x, 4);
        assert_eq!(popup.y, 5);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 10);
    }

    #[test]
    fn test_popup_below_anchor_clamped_to_bounds() {
        let anchor = Rect::new(0, 18, 30, 3);
        let bounds = Rect::new(0, 0, 80, 24);

        let popup = popup_below_anchor(anchor, 10, bounds);

        assert_eq!(popup.y, 21);
        assert_eq!(popup.height, 3);
    }

    #[test]
    fn test_popup_below_anchor_no_room() {
        let anchor = Rect::new(0, 21, 30, 3);
        let bounds = Rect::new(0, 0, 80, 24);

        let popup = popup_below_anchor(anchor, 10, bounds);

        assert_eq!(popup.height, 0);
    }
}
