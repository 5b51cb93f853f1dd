//! Theme for the Shelf TUI.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions
//! - `icons`: glyphs resolved from the configured `IconMode`

pub mod icons;
pub mod palette;
pub mod styles;
