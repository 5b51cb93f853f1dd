//! Catalog file loading
//!
//! Supports:
//! - TOML files with one `[[products]]` table per product
//! - JSON files holding an array of product objects
//!
//! The format is picked from the file extension (`.json` is JSON, anything
//! else is read as TOML).

use std::path::Path;

use serde::Deserialize;

use crate::prelude::*;
use crate::product::{Catalog, Product};

/// On-disk catalog encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    products: Vec<Product>,
}

/// Parse catalog text in the given format.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Catalog> {
    let products: Vec<Product> = match format {
        CatalogFormat::Toml => toml::from_str::<TomlCatalog>(content)?.products,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };
    Catalog::new(products)
}

/// Load a catalog from `path`.
///
/// Order of products in the file is preserved; it decides category grouping.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::catalog_not_found(path));
    }

    let format = CatalogFormat::from_path(path);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;

    let catalog = parse_catalog(&content, format)?;
    if catalog.is_empty() {
        warn!("Catalog {} contains no products", path.display());
    }
    info!(
        "Loaded {} products from {} ({:?})",
        catalog.len(),
        path.display(),
        format
    );
    Ok(catalog)
}
