//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront command                                                     │
//! │       │   state.catalog.list()                                          │
//! │       ▼                                                                 │
//! │  dyn CatalogRepository                                                  │
//! │  ├── list(&self)            → Vec<Product>   (copies)                   │
//! │  ├── get(&self, id)         → Option<Product>                           │
//! │  ├── insert(&self, new)     → Product                                   │
//! │  ├── update(&self, id, p)   → Option<Product>                           │
//! │  └── delete(&self, id)      → bool                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryCatalog (RwLock<Vec<Product>>)  or a hosted-service adapter   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The traits are synchronous and `Send + Sync` so one instance can be
//! shared behind an `Arc` by every command of the composition root.

pub mod catalog;
pub mod order;
pub mod user;
