//! Search bar widget: the text field and the stock checkbox
//!
//! Purely presentational. The values come from the `FilterState` passed in;
//! editing happens through `shelf_app::SearchBar`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use shelf_app::search_bar::{PLACEHOLDER, STOCK_LABEL};
use shelf_app::Focus;
use shelf_core::FilterState;

use crate::theme::{icons::IconSet, palette, styles};

pub struct SearchBar<'a> {
    filter: &'a FilterState,
    focus: Focus,
    icons: IconSet,
}

impl<'a> SearchBar<'a> {
    pub fn new(filter: &'a FilterState, focus: Focus, icons: IconSet) -> Self {
        Self {
            filter,
            focus,
            icons,
        }
    }

    fn text_line(&self) -> Line<'a> {
        let focused = self.focus == Focus::SearchField;
        let prompt_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.icons.search(), prompt_style),
            Span::raw(" "),
        ];

        if self.filter.filter_text.is_empty() && !focused {
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(
                self.filter.filter_text.as_str(),
                styles::text_primary(),
            ));
        }

        if focused {
            spans.push(Span::styled("_", styles::keybinding()));
            if self.filter.filter_text.is_empty() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
            }
        }

        Line::from(spans)
    }

    fn checkbox_line(&self) -> Line<'a> {
        let focused = self.focus == Focus::StockToggle;
        let checked = self.filter.in_stock_only;
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.checkbox(checked), styles::checkbox(checked)),
            Span::raw(" "),
            Span::styled(STOCK_LABEL, label_style),
        ])
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Filter ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.text_line(), inner.width);
        if inner.height >= 2 {
            buf.set_line(inner.x, inner.y + 1, &self.checkbox_line(), inner.width);
        }
    }
}
