//! # Catalog Commands
//!
//! Product grid, product page and the admin product screens.
//!
//! ## Products Page Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category tabs ──┐                                                      │
//! │  Search box ─────┼──► CatalogQuery ──► list_products ──► Vec<Product>   │
//! │  Sort select ────┘                                                      │
//! │                                                                         │
//! │  1. validate the search term (length)                                   │
//! │  2. copy the catalog out of the repository                              │
//! │  3. filter by category and term, then stable sort                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use paintshop_core::validation::{
    validate_new_product, validate_product_patch, validate_search_query,
};
use paintshop_core::{
    CatalogQuery, Category, InventorySummary, NewProduct, Product, ProductPatch,
};

use crate::commands::account::require_admin;
use crate::error::ApiError;
use crate::state::DataState;

/// A category tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub slug: &'static str,
    pub name: &'static str,
}

pub fn list_categories() -> Vec<CategoryDto> {
    Category::ALL
        .iter()
        .map(|c| CategoryDto {
            slug: c.slug(),
            name: c.display_name(),
        })
        .collect()
}

/// Products matching the grid filters.
pub fn list_products(data: &DataState, mut query: CatalogQuery) -> Result<Vec<Product>, ApiError> {
    if let Some(term) = query.search.take() {
        query.search = Some(validate_search_query(&term)?);
    }
    debug!(?query, "list_products command");

    let products = data.catalog().list()?;
    Ok(query.apply(&products))
}

pub fn get_product(data: &DataState, id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %id, "get_product command");
    data.catalog()
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Adds a product from the admin form.
pub fn create_product(
    data: &DataState,
    user_id: &str,
    product: NewProduct,
) -> Result<Product, ApiError> {
    require_admin(data, user_id)?;
    validate_new_product(&product)?;

    let created = data.catalog().insert(product)?;
    info!(product_id = %created.id, name = %created.name, "Product created");
    Ok(created)
}

/// Saves the admin edit form; only the fields set in `patch` change.
pub fn update_product(
    data: &DataState,
    user_id: &str,
    id: &str,
    patch: ProductPatch,
) -> Result<Product, ApiError> {
    require_admin(data, user_id)?;
    validate_product_patch(&patch)?;

    let updated = data
        .catalog()
        .update(id, patch)?
        .ok_or_else(|| ApiError::not_found("Product", id))?;
    info!(product_id = %id, "Product updated");
    Ok(updated)
}

pub fn delete_product(data: &DataState, user_id: &str, id: &str) -> Result<(), ApiError> {
    require_admin(data, user_id)?;

    if !data.catalog().delete(id)? {
        return Err(ApiError::not_found("Product", id));
    }
    info!(product_id = %id, "Product deleted");
    Ok(())
}

/// Product count, stock value and low-stock list for the admin overview.
pub fn inventory_summary(data: &DataState, user_id: &str) -> Result<InventorySummary, ApiError> {
    require_admin(data, user_id)?;
    let summary = InventorySummary::from_products(&data.catalog().list()?);
    debug!(
        total_products = summary.total_products,
        low_stock = summary.low_stock_count(),
        "inventory_summary command"
    );
    Ok(summary)
}
