//! Grouped projection of the catalog into table rows
//!
//! The projection is a single pass over the catalog in its given order.
//! Products failing the filter are skipped; a category header is emitted
//! whenever a surviving product's category differs from the previous
//! survivor's. Grouping is by adjacency only: a catalog whose categories are
//! not contiguous yields repeated headers for the same category name.

use crate::filter::FilterState;
use crate::product::{Catalog, Product};

/// One row of the result table, borrowing from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    /// Full-width category header
    Category(&'a str),
    /// Name/price row for a visible product
    Product(&'a Product),
}

impl<'a> Row<'a> {
    pub fn is_category(&self) -> bool {
        matches!(self, Row::Category(_))
    }

    pub fn product(&self) -> Option<&'a Product> {
        match self {
            Row::Product(product) => Some(product),
            Row::Category(_) => None,
        }
    }
}

/// Derive the visible rows for `catalog` under `filter`.
///
/// Pure and deterministic: the same inputs always yield the same rows.
pub fn project<'a>(catalog: &'a Catalog, filter: &FilterState) -> Vec<Row<'a>> {
    let mut rows = Vec::with_capacity(catalog.len() * 2);
    let mut last_category: Option<&str> = None;

    for product in catalog.iter().filter(|p| filter.matches(p)) {
        if last_category != Some(product.category.as_str()) {
            rows.push(Row::Category(&product.category));
        }
        rows.push(Row::Product(product));
        last_category = Some(product.category.as_str());
    }

    rows
}

/// Counts derived from a projection, shown in the table footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionSummary {
    /// Visible product rows
    pub products: usize,
    /// Category header rows
    pub categories: usize,
    /// Catalog products filtered out
    pub hidden: usize,
}

impl ProjectionSummary {
    pub fn from_rows(rows: &[Row<'_>], catalog_len: usize) -> Self {
        let categories = rows.iter().filter(|row| row.is_category()).count();
        let products = rows.len() - categories;
        Self {
            products,
            categories,
            hidden: catalog_len.saturating_sub(products),
        }
    }
}
