//! Filter state and the visibility predicate

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The two user-controlled filter inputs.
///
/// Owned by the application state; every update replaces one whole field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterState {
    pub filter_text: String,
    pub in_stock_only: bool,
}

impl FilterState {
    pub fn new(filter_text: impl Into<String>, in_stock_only: bool) -> Self {
        Self {
            filter_text: filter_text.into(),
            in_stock_only,
        }
    }

    /// Whether `product` is visible under this filter.
    ///
    /// Case-insensitive substring match on the name only (an empty filter
    /// matches everything), AND the stock gate when `in_stock_only` is set.
    pub fn matches(&self, product: &Product) -> bool {
        if self.in_stock_only && !product.stocked {
            return false;
        }
        self.matches_text(&product.name)
    }

    fn matches_text(&self, name: &str) -> bool {
        if self.filter_text.is_empty() {
            return true;
        }
        name.to_lowercase()
            .contains(self.filter_text.to_lowercase().as_str())
    }

    /// True when neither input narrows the catalog.
    pub fn is_identity(&self) -> bool {
        self.filter_text.is_empty() && !self.in_stock_only
    }
}
