//! Headless screen for widget and `view` tests
//!
//! Wraps a `TestBackend` terminal and answers the questions the shelf tests
//! ask of a rendered frame: which row holds a product or category, and at
//! which column a piece of text starts.

use ratatui::backend::TestBackend;
use ratatui::buffer::Cell;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

pub struct TestScreen {
    terminal: Terminal<TestBackend>,
}

impl TestScreen {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
        Self { terminal }
    }

    /// 80x24
    pub fn standard() -> Self {
        Self::new(80, 24)
    }

    /// 40x12: enough for the header, search bar and two table rows
    pub fn compact() -> Self {
        Self::new(40, 12)
    }

    pub fn area(&self) -> Rect {
        let area = self.terminal.backend().buffer().area;
        Rect::new(0, 0, area.width, area.height)
    }

    /// Render a widget over the whole screen
    pub fn render<W: Widget>(&mut self, widget: W) {
        let area = self.area();
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw widget");
    }

    /// Render a stateful widget (the product table) over the whole screen
    pub fn render_stateful<W, S>(&mut self, widget: W, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        let area = self.area();
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("draw stateful widget");
    }

    pub fn draw(&mut self, f: impl FnOnce(&mut Frame)) {
        self.terminal.draw(f).expect("draw frame");
    }

    pub fn cell(&self, x: u16, y: u16) -> &Cell {
        &self.terminal.backend().buffer()[(x, y)]
    }

    /// Text of one screen row, one symbol per cell
    pub fn row_text(&self, y: u16) -> String {
        (0..self.area().width)
            .map(|x| self.cell(x, y).symbol())
            .collect()
    }

    pub fn row_contains(&self, y: u16, text: &str) -> bool {
        self.row_text(y).contains(text)
    }

    pub fn contains(&self, text: &str) -> bool {
        (0..self.area().height).any(|y| self.row_contains(y, text))
    }

    /// First row containing `text`
    pub fn row_of(&self, text: &str) -> Option<u16> {
        (0..self.area().height).find(|&y| self.row_contains(y, text))
    }

    /// Screen column where `text` starts on row `y`
    pub fn column_of(&self, y: u16, text: &str) -> Option<u16> {
        let mut line = String::new();
        let mut starts = Vec::new();
        for x in 0..self.area().width {
            starts.push((line.len(), x));
            line.push_str(self.cell(x, y).symbol());
        }
        let byte = line.find(text)?;
        starts
            .iter()
            .rev()
            .find(|(offset, _)| *offset <= byte)
            .map(|&(_, x)| x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_row_and_column_lookup() {
        let mut screen = TestScreen::new(20, 3);
        screen.render(Paragraph::new("\n  Peas  $3"));

        assert_eq!(screen.row_of("Peas"), Some(1));
        assert_eq!(screen.column_of(1, "Peas"), Some(2));
        assert_eq!(screen.column_of(1, "$3"), Some(8));
        assert_eq!(screen.column_of(0, "Peas"), None);
        assert!(!screen.contains("Apple"));
    }

    #[test]
    fn test_column_of_counts_wide_glyphs_as_two() {
        let mut screen = TestScreen::new(20, 1);
        screen.render(Paragraph::new("蜜柑 $2"));

        assert_eq!(screen.column_of(0, "$2"), Some(5));
    }
}
