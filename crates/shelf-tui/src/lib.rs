//! shelf-tui - Terminal UI for Shelf
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! `AppState` from shelf-app with crossterm key events and renders the
//! search bar and grouped product table.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
