//! # shelf-core - Core Domain Types
//!
//! Foundation crate for Shelf. Provides the product catalog, the filter
//! predicate, the grouped projection that drives the result table, catalog
//! file loading, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Product`] - A single catalog record (category, price, stock flag, name)
//! - [`Catalog`] - Ordered, immutable list of products
//! - [`FilterState`] - Filter text plus "in stock only" flag
//!
//! ### Projection (`projection`)
//! - [`project()`] - Derive the visible, adjacency-grouped rows
//! - [`Row`] - A category header or a product row
//! - [`ProjectionSummary`] - Counts derived from a projection
//!
//! ### Catalog Files (`catalog`)
//! - [`load_catalog()`] - Read a catalog from a TOML or JSON file
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use shelf_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod logging;
pub mod product;
pub mod projection;

/// Prelude for common imports used throughout all Shelf crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{load_catalog, CatalogFormat};
pub use error::{Error, Result, ResultExt};
pub use filter::FilterState;
pub use product::{Catalog, Product};
pub use projection::{project, ProjectionSummary, Row};
