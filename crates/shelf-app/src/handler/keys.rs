//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::search_bar::SearchBar;
use crate::state::{AppState, Focus};

/// Convert key events to messages
///
/// Navigation and quit keys are handled here; everything else goes to the
/// search bar for the focused control.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        // 'q' is text while typing in the search field
        InputKey::Char('q') if state.focus == Focus::StockToggle => Some(Message::Quit),

        // Focus
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),

        // ─────────────────────────────────────────────────────────
        // Table Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),

        key => SearchBar::new(
            state.filter(),
            Message::FilterTextChanged,
            Message::InStockOnlyChanged,
        )
        .handle_key(state.focus, &key),
    }
}
