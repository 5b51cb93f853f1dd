//! Configuration types for Shelf
//!
//! Defines:
//! - `Settings` - Application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (.shelf/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the product catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Catalog file (TOML or JSON). Relative paths resolve against the
    /// directory holding `.shelf/`. `None` uses the built-in sample.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode for the checkbox glyphs
    #[serde(default)]
    pub icons: IconMode,

    /// Show the visible/hidden counts under the table
    #[serde(default = "default_true")]
    pub show_summary: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_summary: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode.
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs - requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.catalog.path, None);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.ui.show_summary);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_icon_mode_serde() {
        let ui: UiSettings = toml::from_str(r#"icons = "nerd_fonts""#).unwrap();
        assert_eq!(ui.icons, IconMode::NerdFonts);
        assert!(ui.show_summary);
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }
}
