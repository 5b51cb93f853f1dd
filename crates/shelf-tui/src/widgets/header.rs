//! Header bar widget
//!
//! Provides the main header with the app title and keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

/// Main header showing app title, catalog source and keybindings
pub struct MainHeader<'a> {
    source: Option<&'a str>,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(icons: IconSet) -> Self {
        Self {
            source: None,
            icons,
        }
    }

    /// Name of the loaded catalog, shown after the title
    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled(self.icons.dot(), styles::accent()),
            Span::raw(" "),
            Span::styled("Shelf", styles::accent_bold()),
        ];
        if let Some(source) = self.source {
            left_spans.push(Span::raw(" "));
            left_spans.push(Span::styled("/", styles::text_muted()));
            left_spans.push(Span::raw(" "));
            left_spans.push(Span::styled(source, styles::text_secondary()));
        }
        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;

        let shortcuts_line = Line::from(shortcut_spans());
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the shortcuts when they fit beside the title
        if left_width + shortcuts_width + 3 <= inner.width {
            let shortcuts_x = inner.x + inner.width - shortcuts_width - 1;
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);
        }
    }
}

fn shortcut_spans() -> Vec<Span<'static>> {
    let hints = [("Tab", "Focus"), ("Space", "Toggle"), ("↑↓", "Scroll"), ("Esc", "Quit")];
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.into_iter().enumerate() {
        let sep = if i == 0 { "[" } else { "  [" };
        spans.push(Span::styled(sep, styles::text_muted()));
        spans.push(Span::styled(key, styles::keybinding()));
        spans.push(Span::styled(format!("] {label}"), styles::text_muted()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestScreen;
    use shelf_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_header_renders_title() {
        let mut screen = TestScreen::new(80, 3);
        screen.render(MainHeader::new(icons()));

        assert!(screen.contains("Shelf"), "Header should contain app title");
    }

    #[test]
    fn test_header_renders_shortcuts() {
        let mut screen = TestScreen::new(80, 3);
        screen.render(MainHeader::new(icons()));

        assert!(screen.contains("[Tab] Focus"));
        assert!(screen.contains("[Esc] Quit"));
    }

    #[test]
    fn test_header_renders_source() {
        let mut screen = TestScreen::new(80, 3);
        screen.render(MainHeader::new(icons()).with_source("products.toml"));

        assert!(screen.contains("products.toml"));
    }

    #[test]
    fn test_header_narrow_drops_shortcuts() {
        let mut screen = TestScreen::new(20, 3);
        screen.render(MainHeader::new(icons()));

        assert!(screen.contains("Shelf"));
        assert!(!screen.contains("Quit"));
    }
}
