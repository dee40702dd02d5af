//! # paintshop-store: Repository Layer
//!
//! Data access for the storefront. The hosted data service of the real
//! deployment sits behind the same traits; this crate ships the in-memory
//! implementations used in development, tests and the CLI.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront command (list_products, place_order, ...)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                paintshop-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   trait CatalogRepository ◄── InMemoryCatalog                   │   │
//! │  │   trait OrderRepository   ◄── InMemoryOrders                    │   │
//! │  │   trait UserRepository    ◄── InMemoryUsers                     │   │
//! │  │                                                                 │   │
//! │  │   Every read returns an owned copy; storage is never borrowed   │   │
//! │  │   out of the repository.                                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use paintshop_store::{seed, CatalogRepository, InMemoryCatalog};
//!
//! let catalog = InMemoryCatalog::with_products(seed::paint_catalog()).unwrap();
//! assert_eq!(catalog.list().unwrap().len(), 6);
//! ```

pub mod error;
pub mod repository;
pub mod seed;

pub use error::{StoreError, StoreResult};
pub use repository::catalog::{CatalogRepository, InMemoryCatalog};
pub use repository::order::{InMemoryOrders, NewOrder, OrderRepository};
pub use repository::user::{InMemoryUsers, UserRepository};
