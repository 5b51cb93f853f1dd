//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::state::{AppPhase, AppState, Focus};
use shelf_core::{FilterState, Row};

fn dispatch(state: &mut AppState, message: Message) {
    crate::process::process_message(state, message);
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        dispatch(state, Message::Key(InputKey::Char(c)));
    }
}

fn visible_names(state: &AppState) -> Vec<String> {
    state
        .rows()
        .iter()
        .filter_map(Row::product)
        .map(|p| p.name.clone())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter messages
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_filter_text_changed_replaces_text() {
    let mut state = AppState::new();
    update(&mut state, Message::FilterTextChanged("spin".into()));
    assert_eq!(state.filter(), &FilterState::new("spin", false));

    update(&mut state, Message::FilterTextChanged("pea".into()));
    assert_eq!(state.filter().filter_text, "pea");
}

#[test]
fn test_in_stock_only_changed_keeps_text() {
    let mut state = AppState::new();
    update(&mut state, Message::FilterTextChanged("fruit".into()));
    update(&mut state, Message::InStockOnlyChanged(true));

    assert_eq!(state.filter(), &FilterState::new("fruit", true));
}

#[test]
fn test_update_is_synchronous() {
    let mut state = AppState::new();
    update(&mut state, Message::InStockOnlyChanged(true));

    // The very next projection reflects the change
    assert!(!visible_names(&state).contains(&"Pumpkin".to_string()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_typing_produces_full_text_messages() {
    let mut state = AppState::new();
    state.set_filter_text("pe".into());

    assert_eq!(
        handle_key(&state, InputKey::Char('a')),
        Some(Message::FilterTextChanged("pea".into()))
    );
}

#[test]
fn test_typing_filters_rows() {
    let mut state = AppState::new();
    type_text(&mut state, "APP");

    assert_eq!(state.filter().filter_text, "APP");
    assert_eq!(visible_names(&state), vec!["Apple"]);
}

#[test]
fn test_backspace_widens_filter() {
    let mut state = AppState::new();
    type_text(&mut state, "appx");
    assert!(visible_names(&state).is_empty());

    dispatch(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(visible_names(&state), vec!["Apple"]);
}

#[test]
fn test_tab_then_space_toggles_stock() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focus, Focus::StockToggle);

    dispatch(&mut state, Message::Key(InputKey::Char(' ')));
    assert!(state.filter().in_stock_only);

    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert!(!state.filter().in_stock_only);
}

#[test]
fn test_backtab_cycles_focus() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.focus, Focus::StockToggle);
    dispatch(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.focus, Focus::SearchField);
}

#[test]
fn test_q_is_text_in_search_field() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Char('q')));

    assert!(!state.should_quit());
    assert_eq!(state.filter().filter_text, "q");
}

#[test]
fn test_q_quits_from_stock_toggle() {
    let mut state = AppState::new();
    state.focus = Focus::StockToggle;
    dispatch(&mut state, Message::Key(InputKey::Char('q')));
    assert_eq!(state.phase, AppPhase::Quitting);
}

#[test]
fn test_esc_and_ctrl_c_quit() {
    for key in [InputKey::Esc, InputKey::CharCtrl('c')] {
        let mut state = AppState::new();
        dispatch(&mut state, Message::Key(key));
        assert!(state.should_quit());
    }
}

#[test]
fn test_combined_scenario_through_keys() {
    let mut state = AppState::new();
    type_text(&mut state, "p");
    dispatch(&mut state, Message::Key(InputKey::Tab));
    dispatch(&mut state, Message::Key(InputKey::Char(' ')));

    assert_eq!(state.filter(), &FilterState::new("p", true));
    assert_eq!(visible_names(&state), vec!["Apple", "Spinach", "Peas"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_arrow_keys_scroll_table() {
    let mut state = AppState::new();
    state.table_view_state.update_bounds(8, 3);

    dispatch(&mut state, Message::Key(InputKey::Down));
    dispatch(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.table_view_state.offset, 2);

    dispatch(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.table_view_state.offset, 1);

    dispatch(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.table_view_state.offset, 5);

    dispatch(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.table_view_state.offset, 0);
}

#[test]
fn test_page_keys_scroll_table() {
    let mut state = AppState::new();
    state.table_view_state.update_bounds(8, 3);

    dispatch(&mut state, Message::Key(InputKey::PageDown));
    assert_eq!(state.table_view_state.offset, 2);
    dispatch(&mut state, Message::Key(InputKey::PageUp));
    assert_eq!(state.table_view_state.offset, 0);
}

#[test]
fn test_tick_changes_nothing() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Tick);
    assert_eq!(result, UpdateResult::none());
    assert_eq!(state.filter(), &FilterState::default());
}
