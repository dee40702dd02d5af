//! # Catalog Query
//!
//! Filtering and sorting of the product list, as done on the products page.
//!
//! ```text
//! all products
//!      │
//!      ▼
//! category == selected?        (skipped when category is None = "all")
//!      │
//!      ▼
//! name / description / brand contains search term (case-insensitive)
//!      │
//!      ▼
//! sort: name │ price-low │ price-high
//! ```

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Category, Product};

/// Sort order of the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Alphabetical by name.
    #[default]
    Name,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
}

impl SortOrder {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::Name => compare_names(&a.name, &b.name),
            SortOrder::PriceLow => a.price_cents.cmp(&b.price_cents),
            SortOrder::PriceHigh => b.price_cents.cmp(&a.price_cents),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortOrder::Name),
            "price-low" => Ok(SortOrder::PriceLow),
            "price-high" => Ok(SortOrder::PriceHigh),
            _ => Err(ValidationError::NotAllowed {
                field: "sort".to_string(),
                allowed: vec![
                    "name".to_string(),
                    "price-low".to_string(),
                    "price-high".to_string(),
                ],
            }),
        }
    }
}

// Case-insensitive first, byte order as a tiebreak so the sort is total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Filter and sort settings for the product grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// `None` shows all categories.
    pub category: Option<Category>,
    /// Free-text term; empty or `None` matches everything.
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl CatalogQuery {
    pub fn new() -> Self {
        CatalogQuery::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a single product passes the category and search filters.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }

        match self.search_term() {
            None => true,
            Some(term) => [&product.name, &product.description, &product.brand]
                .iter()
                .any(|field| field.to_lowercase().contains(&term)),
        }
    }

    /// Filters and sorts a product list. The sort is stable, so products
    /// that compare equal keep their catalog order.
    ///
    /// ## Example
    /// ```rust
    /// use paintshop_core::catalog::{CatalogQuery, SortOrder};
    ///
    /// let query = CatalogQuery::new().sorted_by(SortOrder::PriceHigh);
    /// assert!(query.apply(&[]).is_empty());
    /// ```
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut selected: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        selected.sort_by(|a, b| self.sort.compare(a, b));
        selected
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }
}

// =============================================================================
// Inventory Summary
// =============================================================================

/// A product running low, as listed on the admin overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    pub product_id: String,
    pub name: String,
    pub stock: i64,
}

/// Admin overview figures for the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_products: usize,
    /// Σ price × stock
    pub inventory_value_cents: i64,
    /// Products with stock below `LOW_STOCK_THRESHOLD`, in catalog order.
    pub low_stock: Vec<LowStockItem>,
}

impl InventorySummary {
    pub fn from_products(products: &[Product]) -> Self {
        InventorySummary {
            total_products: products.len(),
            inventory_value_cents: products
                .iter()
                .map(Product::inventory_value)
                .sum::<Money>()
                .cents(),
            low_stock: products
                .iter()
                .filter(|p| p.is_low_stock())
                .map(|p| LowStockItem {
                    product_id: p.id.clone(),
                    name: p.name.clone(),
                    stock: p.stock,
                })
                .collect(),
        }
    }

    #[inline]
    pub fn low_stock_count(&self) -> usize {
        self.low_stock.len()
    }
}
