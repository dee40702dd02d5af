//! # State Module
//!
//! Session state for the storefront, held by one explicit composition
//! root instead of ambient globals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │                          AppState                                       │
//! │          ┌──────────────┬─────┴────────┬──────────────────┐             │
//! │          ▼              ▼              ▼                  ▼             │
//! │  ┌──────────────┐ ┌────────────┐ ┌─────────────┐ ┌─────────────────┐    │
//! │  │  CartStore   │ │ DataState  │ │ StoreConfig │ │ ImageNormalizer │    │
//! │  │              │ │            │ │             │ │                 │    │
//! │  │  Arc<Mutex<  │ │  catalog   │ │  VAT,       │ │  800 × 800,     │    │
//! │  │   CartState  │ │  orders    │ │  shipping,  │ │  q 0.8          │    │
//! │  │  >>          │ │  users     │ │  images     │ │                 │    │
//! │  └──────────────┘ └────────────┘ └─────────────┘ └─────────────────┘    │
//! │                                                                         │
//! │  Commands take only the parts they need.                                │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: one action at a time under its Mutex                     │
//! │  • DataState: repositories lock internally                             │
//! │  • StoreConfig: read-only after initialization                         │
//! │  • ImageNormalizer: each call owns its own decode handle               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod data;

pub use cart::CartStore;
pub use config::{ConfigError, StoreConfig};
pub use data::DataState;

use paintshop_core::UserProfile;
use paintshop_media::ImageNormalizer;

use crate::error::ApiError;

/// Everything a storefront session needs.
#[derive(Debug, Clone)]
pub struct AppState {
    pub cart: CartStore,
    pub data: DataState,
    pub config: StoreConfig,
    pub images: ImageNormalizer,
}

impl AppState {
    pub fn new(data: DataState, config: StoreConfig) -> Self {
        let images = ImageNormalizer::new(config.normalize_options());
        AppState {
            cart: CartStore::new(),
            data,
            config,
            images,
        }
    }

    /// Seeded in-memory repositories with the given configuration.
    pub fn seeded(config: StoreConfig, users: Vec<UserProfile>) -> Result<Self, ApiError> {
        Ok(AppState::new(DataState::seeded(users)?, config))
    }
}
