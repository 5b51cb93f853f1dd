//! Application state (Model in TEA pattern)

use shelf_core::{project, Catalog, FilterState, ProjectionSummary, Row};

use crate::config::Settings;
use crate::table_view_state::TableViewState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which filter control receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Text input for the name filter
    #[default]
    SearchField,
    /// "Only show products in stock" checkbox
    StockToggle,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::SearchField => Focus::StockToggle,
            Focus::StockToggle => Focus::SearchField,
        }
    }

    /// With two controls the cycle is symmetric
    pub fn previous(self) -> Self {
        self.next()
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current lifecycle phase
    pub phase: AppPhase,

    /// Products to filter; fixed for the lifetime of the state
    catalog: Catalog,

    /// The two user-controlled filter inputs
    filter: FilterState,

    /// Focused filter control
    pub focus: Focus,

    /// Scroll position of the product table
    pub table_view_state: TableViewState,

    /// Settings loaded from `.shelf/config.toml`
    pub settings: Settings,

    /// File name of the loaded catalog, `None` for the built-in sample
    pub source: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State over the built-in sample catalog with default settings
    pub fn new() -> Self {
        Self::with_catalog(Catalog::sample(), Settings::default())
    }

    /// Initial state: empty filter text, checkbox unchecked
    pub fn with_catalog(catalog: Catalog, settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            catalog,
            filter: FilterState::default(),
            focus: Focus::default(),
            table_view_state: TableViewState::new(),
            settings,
            source: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Replace the filter text, leaving the stock flag untouched
    pub fn set_filter_text(&mut self, text: String) {
        self.filter.filter_text = text;
        self.table_view_state.scroll_to_top();
    }

    /// Replace the stock flag, leaving the filter text untouched
    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.filter.in_stock_only = in_stock_only;
        self.table_view_state.scroll_to_top();
    }

    /// Visible rows for the current filter, recomputed on every call
    pub fn rows(&self) -> Vec<Row<'_>> {
        project(&self.catalog, &self.filter)
    }

    /// Visible rows together with the table view state they scroll through.
    ///
    /// Render needs both at once; the rows borrow the catalog while the view
    /// state records the bounds of this frame.
    pub fn rows_with_view_state(&mut self) -> (Vec<Row<'_>>, &mut TableViewState) {
        (
            project(&self.catalog, &self.filter),
            &mut self.table_view_state,
        )
    }

    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary::from_rows(&self.rows(), self.catalog.len())
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.filter(), &FilterState::default());
        assert_eq!(state.focus, Focus::SearchField);
        assert_eq!(state.phase, AppPhase::Running);
        assert!(!state.should_quit());
        assert_eq!(state.catalog().len(), 6);
    }

    #[test]
    fn test_set_filter_text_keeps_stock_flag() {
        let mut state = AppState::new();
        state.set_in_stock_only(true);
        state.set_filter_text("pea".to_string());

        assert_eq!(state.filter(), &FilterState::new("pea", true));
    }

    #[test]
    fn test_set_in_stock_only_keeps_text() {
        let mut state = AppState::new();
        state.set_filter_text("fruit".to_string());
        state.set_in_stock_only(true);
        state.set_in_stock_only(false);

        assert_eq!(state.filter(), &FilterState::new("fruit", false));
    }

    #[test]
    fn test_filter_change_resets_scroll() {
        let mut state = AppState::new();
        state.table_view_state.update_bounds(8, 2);
        state.table_view_state.scroll_down(3);
        assert_eq!(state.table_view_state.offset, 3);

        state.set_filter_text("a".to_string());
        assert_eq!(state.table_view_state.offset, 0);
    }

    #[test]
    fn test_rows_follow_filter() {
        let mut state = AppState::new();
        assert_eq!(state.rows().len(), 8);

        state.set_filter_text("kiwi".to_string());
        assert!(state.rows().is_empty());
        assert_eq!(state.summary().hidden, 6);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::SearchField.next(), Focus::StockToggle);
        assert_eq!(Focus::StockToggle.next(), Focus::SearchField);
        assert_eq!(Focus::SearchField.previous(), Focus::StockToggle);
    }
}
