//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Terminal was resized; the next draw picks up the new size
    Resize,

    /// Quit the application (Esc, Ctrl+C, signal handler, headless EOF)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Filter Messages
    // ─────────────────────────────────────────────────────────
    /// The search field's text was replaced with this value
    FilterTextChanged(String),
    /// The "in stock only" checkbox was set to this value
    InStockOnlyChanged(bool),

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next filter control
    FocusNext,
    /// Move focus to the previous filter control
    FocusPrevious,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the product table up one row
    ScrollUp,
    /// Scroll the product table down one row
    ScrollDown,
    /// Scroll to the first row
    ScrollToTop,
    /// Scroll to the last row
    ScrollToBottom,
    /// Page up in the product table
    PageUp,
    /// Page down in the product table
    PageDown,
}

impl Message {
    /// Whether handling this message can change what the projection shows
    pub fn changes_filter(&self) -> bool {
        matches!(
            self,
            Message::FilterTextChanged(_) | Message::InStockOnlyChanged(_)
        )
    }
}
