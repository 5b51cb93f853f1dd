//! Product records and the ordered catalog they live in

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single catalog record.
///
/// `price` is kept pre-formatted ("$1") and is never parsed. `name` is the
/// display identity of the row and must be unique within a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub category: String,
    pub price: String,
    pub stocked: bool,
    pub name: String,
}

impl Product {
    pub fn new(
        category: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
        name: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            price: price.into(),
            stocked,
            name: name.into(),
        }
    }
}

/// Ordered, immutable list of products.
///
/// Order is significant: category headers are derived from runs of adjacent
/// products sharing a category, so the catalog is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate product names.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(Error::catalog_invalid(format!(
                    "product #{} has an empty name",
                    index + 1
                )));
            }
            if !seen.insert(product.name.as_str()) {
                return Err(Error::duplicate_product(&product.name));
            }
        }
        Ok(Self { products })
    }

    /// The six built-in sample products, pre-sorted by category.
    pub fn sample() -> Self {
        Self {
            products: vec![
                Product::new("Fruits", "$1", true, "Apple"),
                Product::new("Fruits", "$1", true, "Dragonfruit"),
                Product::new("Fruits", "$2", false, "Passionfruit"),
                Product::new("Vegetables", "$2", true, "Spinach"),
                Product::new("Vegetables", "$4", false, "Pumpkin"),
                Product::new("Vegetables", "$1", true, "Peas"),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
