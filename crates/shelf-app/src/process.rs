//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function. Both
//! the TUI runner and headless mode feed every event through here and then
//! redraw explicitly.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Returns `true` when the filter changed, i.e. when a caller that only
/// re-emits on filter changes (headless mode) has new rows to report.
pub fn process_message(state: &mut AppState, message: Message) -> bool {
    let mut filter_changed = false;

    let mut msg = Some(message);
    while let Some(m) = msg {
        filter_changed |= m.changes_filter();
        msg = handler::update(state, m).message;
    }

    filter_changed
}
