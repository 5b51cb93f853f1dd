//! Settings parser for .shelf/config.toml

use super::types::Settings;
use shelf_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const SHELF_DIR: &str = ".shelf";

/// Location of the settings file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(SHELF_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.shelf/config.toml`
///
/// A missing file is normal and yields defaults. An unreadable or malformed
/// file is logged and also yields defaults: settings never stop startup.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let mut settings: Settings = match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                return Settings::default();
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            return Settings::default();
        }
    };

    if let Some(path) = settings.catalog.path.take() {
        settings.catalog.path = Some(resolve_relative(project_path, path));
    }

    settings
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
