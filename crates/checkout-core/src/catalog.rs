//! # Catalog Module
//!
//! Product codes, products, and the catalog they live in.
//!
//! A catalog is supplied once as part of a [`PricingConfig`](crate::PricingConfig)
//! and never mutated afterwards. Lookup is by exact product code; the catalog
//! preserves the order products were listed in, which is also the order codes
//! are enumerated in diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product Code
// =============================================================================

/// Business identifier for a catalog entry (e.g., `R01`).
///
/// Opaque to the engine: codes are compared for exact equality only and must
/// be unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// The code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductCode {
    fn from(code: String) -> Self {
        ProductCode(code)
    }
}

impl From<&str> for ProductCode {
    fn from(code: &str) -> Self {
        ProductCode(code.to_string())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable once configured; the unit price is the base charge before any
/// multi-buy offer applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Business identifier, unique within the catalog.
    pub code: ProductCode,

    /// Display name shown to the customer.
    pub name: String,

    /// Base unit price.
    pub price: Money,
}

impl Product {
    /// Creates a product record.
    pub fn new(code: impl Into<ProductCode>, name: impl Into<String>, price: Money) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The set of products that can be added to a basket.
///
/// Backed by an ordered list: catalogs are small and supplied up front, and
/// listing order is preserved for code enumeration in error messages.
/// Code uniqueness is the caller's responsibility; on a duplicate, lookup
/// returns the earliest entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an ordered product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Looks up a product by exact code.
    pub fn get(&self, code: &ProductCode) -> Option<&Product> {
        self.products.iter().find(|product| &product.code == code)
    }

    /// Whether the catalog contains the given code.
    pub fn contains(&self, code: &ProductCode) -> bool {
        self.get(code).is_some()
    }

    /// All product codes, in listing order.
    pub fn codes(&self) -> Vec<ProductCode> {
        self.products.iter().map(|p| p.code.clone()).collect()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("R01", "Red Widget", Money::from_major_minor(32, 95)),
            Product::new("G01", "Green Widget", Money::from_major_minor(24, 95)),
            Product::new("B01", "Blue Widget", Money::from_major_minor(7, 95)),
        ])
    }

    #[test]
    fn test_lookup_by_exact_code() {
        let catalog = widget_catalog();

        let green = catalog.get(&ProductCode::from("G01")).unwrap();
        assert_eq!(green.name, "Green Widget");
        assert_eq!(green.price, Money::from_major_minor(24, 95));

        assert!(catalog.get(&ProductCode::from("X99")).is_none());
        assert!(!catalog.contains(&ProductCode::from("r01"))); // case sensitive
    }

    #[test]
    fn test_codes_preserve_listing_order() {
        let codes = widget_catalog().codes();
        let listed: Vec<&str> = codes.iter().map(ProductCode::as_str).collect();
        assert_eq!(listed, ["R01", "G01", "B01"]);
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(widget_catalog().len(), 3);
        assert!(Catalog::new(Vec::new()).is_empty());
    }
}
