//! Product table view state - scroll position and viewport bounds.
//!
//! Shared by the handler layer (scroll commands) and the TUI layer, which
//! records the row count and viewport height on every render.

/// State for product table scrolling
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableViewState {
    /// Index of the first visible row
    pub offset: usize,
    /// Total number of rows in the projection (set during render)
    pub total_rows: usize,
    /// Number of rows that fit in the viewport (set during render)
    pub visible_rows: usize,
}

impl TableViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current row count and viewport height, clamping the offset
    pub fn update_bounds(&mut self, total_rows: usize, visible_rows: usize) {
        self.total_rows = total_rows;
        self.visible_rows = visible_rows;
        self.offset = self.offset.min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }

    /// Scroll up by n rows
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n rows
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Page up (scroll by visible rows minus one, at least one)
    pub fn page_up(&mut self) {
        let page = self.visible_rows.saturating_sub(1).max(1);
        self.scroll_up(page);
    }

    /// Page down (scroll by visible rows minus one, at least one)
    pub fn page_down(&mut self) {
        let page = self.visible_rows.saturating_sub(1).max(1);
        self.scroll_down(page);
    }

    /// Whether there are rows below the viewport
    pub fn has_more_below(&self) -> bool {
        self.offset < self.max_offset()
    }
}
