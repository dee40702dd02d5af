//! # paintshop-core: Pure Business Logic for the Paintshop Storefront
//!
//! Everything the storefront decides on its own lives here as pure,
//! deterministic code: the cart state machine, catalog filtering and
//! sorting, the checkout quote and form validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Paintshop Storefront                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Web frontend (catalog, cart, admin)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (composition root)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ paintshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ │   │
//! │  │   │  money  │ │  cart   │ │ catalog │ │ checkout │ │validate │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO REPOSITORIES • NO LOGGING • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Order, UserProfile)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart state and the action reducer
//! - [`catalog`] - Product filter/sort query
//! - [`checkout`] - Shipping and VAT quote for a cart
//! - [`validation`] - Admin form and query validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use paintshop_core::cart::{CartAction, CartState};
//! use paintshop_core::types::{Category, Product};
//!
//! let primer = Product {
//!     id: "6".to_string(),
//!     name: "Universal primer".to_string(),
//!     description: String::new(),
//!     price_cents: 99_900,
//!     category: Category::Primer,
//!     image: String::new(),
//!     stock: 2,
//!     brand: "BaseCoat".to_string(),
//!     size: "400ml".to_string(),
//! };
//!
//! let mut cart = CartState::new();
//! cart.apply(CartAction::AddItem { product: primer.clone() });
//! cart.apply(CartAction::AddItem { product: primer });
//! assert_eq!(cart.total_cents(), 199_800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLine, CartOutcome, CartState};
pub use catalog::{CatalogQuery, InventorySummary, LowStockItem, SortOrder};
pub use checkout::{CheckoutPolicy, CheckoutQuote};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// VAT applied at checkout, in basis points (2000 = 20%).
pub const DEFAULT_VAT_RATE_BPS: u32 = 2000;

/// Subtotal from which shipping is free (3000.00).
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 300_000;

/// Flat shipping fee below the free-shipping threshold (299.00).
pub const SHIPPING_FEE_CENTS: i64 = 29_900;

/// Most units of one product a cart line may hold, whatever the stock.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest unit price a cart accepts (10 000 000.00).
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// Products with fewer units than this are flagged as running low.
pub const LOW_STOCK_THRESHOLD: i64 = 10;
