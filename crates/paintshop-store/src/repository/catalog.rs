//! # Catalog Repository
//!
//! Product CRUD. The admin screens write through it, the catalog and
//! cart commands read through it.

use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use paintshop_core::{NewProduct, Product, ProductPatch};

/// Product storage.
///
/// All methods hand out owned copies. Mutating a returned [`Product`]
/// never changes the catalog.
pub trait CatalogRepository: Send + Sync {
    /// All products in catalog order.
    fn list(&self) -> StoreResult<Vec<Product>>;

    /// Product by id, `Ok(None)` when absent.
    fn get(&self, id: &str) -> StoreResult<Option<Product>>;

    /// Stores a new product under a freshly generated id.
    fn insert(&self, product: NewProduct) -> StoreResult<Product>;

    /// Applies a patch; `Ok(None)` when the id is unknown.
    fn update(&self, id: &str, patch: ProductPatch) -> StoreResult<Option<Product>>;

    /// Removes a product; `Ok(false)` when the id is unknown.
    fn delete(&self, id: &str) -> StoreResult<bool>;
}

/// Catalog kept in process memory.
///
/// ## Usage
/// ```rust
/// use paintshop_store::{CatalogRepository, InMemoryCatalog};
///
/// let catalog = InMemoryCatalog::new();
/// assert!(catalog.get("1").unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        InMemoryCatalog::default()
    }

    /// Creates a catalog holding `products`, in the given order.
    ///
    /// ## Errors
    /// [`StoreError::Duplicate`] if two products share an id.
    pub fn with_products(products: Vec<Product>) -> StoreResult<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(StoreError::duplicate("product id", product.id.clone()));
            }
        }

        Ok(InMemoryCatalog {
            products: RwLock::new(products),
        })
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn list(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.read()?.clone())
    }

    fn get(&self, id: &str) -> StoreResult<Option<Product>> {
        let products = self.products.read()?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    fn insert(&self, product: NewProduct) -> StoreResult<Product> {
        let product = product.with_id(Uuid::new_v4().to_string());

        self.products.write()?.push(product.clone());

        debug!(id = %product.id, name = %product.name, "Product inserted");
        Ok(product)
    }

    fn update(&self, id: &str, patch: ProductPatch) -> StoreResult<Option<Product>> {
        let mut products = self.products.write()?;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            debug!(id = %id, "Update skipped, product not found");
            return Ok(None);
        };

        patch.apply_to(product);
        debug!(id = %id, "Product updated");
        Ok(Some(product.clone()))
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut products = self.products.write()?;
        let before = products.len();
        products.retain(|p| p.id != id);

        let deleted = products.len() != before;
        debug!(id = %id, deleted, "Product delete");
        Ok(deleted)
    }
}
