//! Product table widget
//!
//! Renders the grouped projection: a bold Name/Price column header, one
//! full-width row per category header and one name/price row per product.
//! Out-of-stock product names are red.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use shelf_app::TableViewState;
use shelf_core::{ProjectionSummary, Row};

use crate::theme::{palette, styles};

const NAME_HEADER: &str = "Name";
const PRICE_HEADER: &str = "Price";

/// Spaces between the name and price columns
const COLUMN_GAP: u16 = 2;

/// Indent of product rows under their category
const PRODUCT_INDENT: u16 = 2;

pub struct ProductTable<'a> {
    rows: &'a [Row<'a>],
    summary: Option<ProjectionSummary>,
}

impl<'a> ProductTable<'a> {
    pub fn new(rows: &'a [Row<'a>]) -> Self {
        Self {
            rows,
            summary: None,
        }
    }

    /// Show visible/hidden counts in the bottom border
    pub fn summary(mut self, summary: ProjectionSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Width of the name column: the widest visible name plus indent,
    /// capped so the price column keeps its room inside `available`
    fn name_column_width(&self, available: u16) -> u16 {
        let indent = usize::from(PRODUCT_INDENT);
        let widest = self
            .rows
            .iter()
            .filter_map(Row::product)
            .map(|p| p.name.width().saturating_add(indent))
            .max()
            .unwrap_or(0)
            .max(NAME_HEADER.width() + indent);

        let price_width = self
            .rows
            .iter()
            .filter_map(Row::product)
            .map(|p| p.price.width())
            .max()
            .unwrap_or(0)
            .max(PRICE_HEADER.width());

        let room = usize::from(available)
            .saturating_sub(price_width.saturating_add(usize::from(COLUMN_GAP)));
        // room <= available, so the conversion cannot fail
        u16::try_from(widest.min(room)).unwrap_or(available)
    }
}

fn summary_title(summary: &ProjectionSummary) -> String {
    format!(
        " {} products \u{b7} {} categories \u{b7} {} hidden ",
        summary.products, summary.categories, summary.hidden
    )
}

impl StatefulWidget for ProductTable<'_> {
    type State = TableViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut block = styles::glass_block(false)
            .title(" Products ")
            .style(Style::default().bg(palette::CARD_BG));
        if let Some(summary) = &self.summary {
            block =
                block.title_bottom(Line::styled(summary_title(summary), styles::text_muted()));
        }
        let inner = block.inner(area);

        // Column header takes the first inner row
        let body_height = inner.height.saturating_sub(1) as usize;
        state.update_bounds(self.rows.len(), body_height);
        if state.has_more_below() {
            block = block.title_bottom(
                Line::styled(" \u{2193} more ", styles::text_muted()).right_aligned(),
            );
        }
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let name_width = self.name_column_width(inner.width);
        let price_x = inner.x.saturating_add(name_width).saturating_add(COLUMN_GAP);
        let price_width = (inner.x + inner.width).saturating_sub(price_x);

        buf.set_stringn(
            inner.x,
            inner.y,
            NAME_HEADER,
            name_width as usize,
            styles::column_header(),
        );
        if price_width > 0 {
            buf.set_stringn(
                price_x,
                inner.y,
                PRICE_HEADER,
                price_width as usize,
                styles::column_header(),
            );
        }

        for (i, row) in self
            .rows
            .iter()
            .skip(state.offset)
            .take(body_height)
            .enumerate()
        {
            let y = inner.y + 1 + i as u16;
            match row {
                Row::Category(name) => {
                    buf.set_stringn(inner.x, y, name, inner.width as usize, styles::category_row());
                }
                Row::Product(product) => {
                    if name_width > PRODUCT_INDENT {
                        buf.set_stringn(
                            inner.x + PRODUCT_INDENT,
                            y,
                            &product.name,
                            (name_width - PRODUCT_INDENT) as usize,
                            styles::product_name(product.stocked),
                        );
                    }
                    if price_width > 0 {
                        buf.set_stringn(
                            price_x,
                            y,
                            &product.price,
                            price_width as usize,
                            styles::text_secondary(),
                        );
                    }
                }
            }
        }
    }
}
