//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Search bar: borders + text field row + checkbox row
pub const SEARCH_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and key hints
    pub header: Rect,

    /// Text field and stock checkbox
    pub search: Rect,

    /// Grouped product table (remaining space)
    pub table: Rect,
}

/// Split the screen into header, search bar and product table
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(3),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        table: chunks[2],
    }
}
