//! Configuration file parsing for Shelf
//!
//! Supports:
//! - `.shelf/config.toml` - Catalog location and UI settings

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings};
pub use types::*;
