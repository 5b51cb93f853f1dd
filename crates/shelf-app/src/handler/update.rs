//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use tracing::debug;

use super::{keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick | Message::Resize => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Filter Messages
        // ─────────────────────────────────────────────────────────
        Message::FilterTextChanged(text) => {
            debug!("Filter text changed: {:?}", text);
            state.set_filter_text(text);
            UpdateResult::none()
        }

        Message::InStockOnlyChanged(in_stock_only) => {
            debug!("In-stock-only changed: {}", in_stock_only);
            state.set_in_stock_only(in_stock_only);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
    }
}
