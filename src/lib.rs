//! Shelf Library
//!
//! A filterable product table for the terminal. The workspace crates hold
//! the domain (`shelf_core`), the TEA state machine (`shelf_app`) and the
//! ratatui front end (`shelf_tui`); this crate adds the headless NDJSON
//! front end and catalog resolution used by the binary.

pub mod headless;

use std::path::{Path, PathBuf};

use shelf_app::config::Settings;
use shelf_core::prelude::*;
use shelf_core::{load_catalog, Catalog};

// Re-export main entry points
pub use headless::runner::run_headless;
pub use shelf_tui::run;

/// A catalog together with a display name for where it came from
#[derive(Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// File name for file catalogs, `None` for the built-in sample
    pub source: Option<String>,
}

/// Pick the catalog to show: `--catalog`, then `catalog.path` from
/// settings, then the built-in sample.
pub fn resolve_catalog(cli_path: Option<&Path>, settings: &Settings) -> Result<LoadedCatalog> {
    let path: Option<PathBuf> = cli_path
        .map(Path::to_path_buf)
        .or_else(|| settings.catalog.path.clone());

    match path {
        Some(path) => {
            let catalog = load_catalog(&path)?;
            let source = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            Ok(LoadedCatalog { catalog, source })
        }
        None => {
            debug!("No catalog configured, using the sample catalog");
            Ok(LoadedCatalog {
                catalog: Catalog::sample(),
                source: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CATALOG: &str = r#"
[[products]]
category = "Bakery"
price = "$3"
stocked = true
name = "Bagel"
"#;

    #[test]
    fn test_resolve_defaults_to_sample() {
        let loaded = resolve_catalog(None, &Settings::default()).unwrap();
        assert_eq!(loaded.catalog.len(), 6);
        assert!(loaded.source.is_none());
    }

    #[test]
    fn test_resolve_uses_settings_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bakery.toml");
        std::fs::write(&path, CATALOG).unwrap();

        let mut settings = Settings::default();
        settings.catalog.path = Some(path);

        let loaded = resolve_catalog(None, &settings).unwrap();
        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.source.as_deref(), Some("bakery.toml"));
    }

    #[test]
    fn test_cli_path_wins_over_settings() {
        let temp = tempdir().unwrap();
        let cli = temp.path().join("cli.toml");
        std::fs::write(&cli, CATALOG).unwrap();

        let mut settings = Settings::default();
        settings.catalog.path = Some(temp.path().join("missing.toml"));

        let loaded = resolve_catalog(Some(&cli), &settings).unwrap();
        assert_eq!(loaded.source.as_deref(), Some("cli.toml"));
    }

    #[test]
    fn test_missing_catalog_is_fatal() {
        let temp = tempdir().unwrap();
        let err = resolve_catalog(Some(&temp.path().join("nope.json")), &Settings::default())
            .unwrap_err();
        assert!(err.is_fatal());
    }
}
