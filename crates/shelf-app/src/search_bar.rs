//! Search bar input handling (the filter control)
//!
//! The search bar never stores the values it shows. It is built from the
//! current [`FilterState`] plus two change callbacks, turns a key into the
//! complete replacement value, and hands that value to the callback. The
//! callback decides what message the new value becomes; the usual wiring is
//! the `Message` variant constructors themselves:
//!
//! ```
//! use shelf_app::{Focus, InputKey, Message, SearchBar};
//! use shelf_core::FilterState;
//!
//! let filter = FilterState::new("pe", false);
//! let bar = SearchBar::new(
//!     &filter,
//!     Message::FilterTextChanged,
//!     Message::InStockOnlyChanged,
//! );
//! assert_eq!(
//!     bar.handle_key(Focus::SearchField, &InputKey::Char('a')),
//!     Some(Message::FilterTextChanged("pea".to_string()))
//! );
//! ```

use shelf_core::FilterState;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::Focus;

/// Label shown next to the stock checkbox
pub const STOCK_LABEL: &str = "Only show products in stock";

/// Placeholder shown in the empty search field
pub const PLACEHOLDER: &str = "Search...";

/// Controlled filter input: values in, change notifications out.
pub struct SearchBar<'a, T, S>
where
    T: Fn(String) -> Message,
    S: Fn(bool) -> Message,
{
    filter_text: &'a str,
    in_stock_only: bool,
    on_filter_text_change: T,
    on_in_stock_only_change: S,
}

impl<'a, T, S> SearchBar<'a, T, S>
where
    T: Fn(String) -> Message,
    S: Fn(bool) -> Message,
{
    pub fn new(
        filter: &'a FilterState,
        on_filter_text_change: T,
        on_in_stock_only_change: S,
    ) -> Self {
        Self {
            filter_text: &filter.filter_text,
            in_stock_only: filter.in_stock_only,
            on_filter_text_change,
            on_in_stock_only_change,
        }
    }

    /// Translate a key aimed at the focused control into a change message.
    ///
    /// Returns `None` when the key does not edit that control or the edit
    /// would not change its value.
    pub fn handle_key(&self, focus: Focus, key: &InputKey) -> Option<Message> {
        match focus {
            Focus::SearchField => self.handle_text_key(key),
            Focus::StockToggle => self.handle_toggle_key(key),
        }
    }

    fn handle_text_key(&self, key: &InputKey) -> Option<Message> {
        match key {
            InputKey::Char(c) => {
                let mut text = self.filter_text.to_string();
                text.push(*c);
                Some((self.on_filter_text_change)(text))
            }
            InputKey::Backspace if !self.filter_text.is_empty() => {
                let mut text = self.filter_text.to_string();
                text.pop();
                Some((self.on_filter_text_change)(text))
            }
            InputKey::CharCtrl('u') if !self.filter_text.is_empty() => {
                Some((self.on_filter_text_change)(String::new()))
            }
            _ => None,
        }
    }

    fn handle_toggle_key(&self, key: &InputKey) -> Option<Message> {
        match key {
            InputKey::Char(' ') | InputKey::Enter => {
                Some((self.on_in_stock_only_change)(!self.in_stock_only))
            }
            _ => None,
        }
    }
}
