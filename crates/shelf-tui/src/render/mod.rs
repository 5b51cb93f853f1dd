//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use shelf_app::AppState;
use shelf_core::ProjectionSummary;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// The projection is recomputed from scratch on every call. The only state
/// written is the table's scroll bounds for this frame.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let mut header = widgets::MainHeader::new(icons);
    if let Some(source) = state.source.as_deref() {
        header = header.with_source(source);
    }
    frame.render_widget(header, areas.header);

    frame.render_widget(
        widgets::SearchBar::new(state.filter(), state.focus, icons),
        areas.search,
    );

    let show_summary = state.settings.ui.show_summary;
    let catalog_len = state.catalog().len();
    let (rows, table_view_state) = state.rows_with_view_state();

    let mut table = widgets::ProductTable::new(&rows);
    if show_summary {
        table = table.summary(ProjectionSummary::from_rows(&rows, catalog_len));
    }
    frame.render_stateful_widget(table, areas.table, table_view_state);
}
