//! # Data State
//!
//! The repositories the storefront talks to, behind their traits.
//!
//! Commands never see a concrete storage type, so the in-memory
//! repositories used here can be swapped for a hosted backend without
//! touching them.

use std::sync::Arc;

use tracing::info;

use paintshop_core::UserProfile;
use paintshop_store::{
    seed, CatalogRepository, InMemoryCatalog, InMemoryOrders, InMemoryUsers, OrderRepository,
    StoreResult, UserRepository,
};

/// Catalog, order and user repositories.
#[derive(Clone)]
pub struct DataState {
    catalog: Arc<dyn CatalogRepository>,
    orders: Arc<dyn OrderRepository>,
    users: Arc<dyn UserRepository>,
}

impl DataState {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        orders: Arc<dyn OrderRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        DataState {
            catalog,
            orders,
            users,
        }
    }

    /// In-memory repositories with the seed catalog and the given users.
    pub fn seeded(users: Vec<UserProfile>) -> StoreResult<Self> {
        let catalog = InMemoryCatalog::with_products(seed::paint_catalog())?;
        let user_repo = InMemoryUsers::new();
        for user in users {
            user_repo.upsert(user)?;
        }

        info!(products = catalog.list()?.len(), "Seed catalog loaded");

        Ok(DataState::new(
            Arc::new(catalog),
            Arc::new(InMemoryOrders::new()),
            Arc::new(user_repo),
        ))
    }

    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.catalog.as_ref()
    }

    pub fn orders(&self) -> &dyn OrderRepository {
        self.orders.as_ref()
    }

    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }
}

impl std::fmt::Debug for DataState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataState").finish_non_exhaustive()
    }
}
