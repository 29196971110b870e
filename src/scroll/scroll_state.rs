/// Vertical scroll position of the option panel, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_rows: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        self.max_offset = content_rows.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Range of content rows currently visible
    pub fn visible_range(&self, content_rows: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(content_rows);
        let end = start.saturating_add(self.viewport_height).min(content_rows);
        start..end
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
