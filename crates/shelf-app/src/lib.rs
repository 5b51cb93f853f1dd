//! shelf-app - Application state and orchestration for Shelf
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`AppState`] model, the [`Message`] vocabulary, the
//! `update()` function, the filter control contract, and configuration
//! loading. It has no terminal dependencies.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod search_bar;
pub mod shutdown;
pub mod state;
pub mod table_view_state;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use search_bar::SearchBar;
pub use state::{AppPhase, AppState, Focus};
pub use table_view_state::TableViewState;
