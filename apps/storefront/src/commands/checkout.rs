//! # Checkout Commands
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checkout page                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  quote()        subtotal, shipping (free ≥ 3000.00), VAT 20%, total     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  place_order()                                                          │
//! │       ├── signed in?             no  → UNAUTHORIZED                     │
//! │       ├── cart empty?            yes → CART_ERROR                       │
//! │       └── under the cart lock:                                          │
//! │             OrderRepository::submit (status: pending), then CLEAR_CART  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use paintshop_core::checkout::order_items;
use paintshop_core::{CheckoutQuote, Order};
use paintshop_store::NewOrder;

use crate::commands::account::require_user;
use crate::error::ApiError;
use crate::state::{CartStore, DataState, StoreConfig};

/// Order summary box contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub quote: CheckoutQuote,
    pub free_shipping: bool,
    /// e.g. "3838.80₽"
    pub total_display: String,
}

/// Prices the current cart.
pub fn quote(cart: &CartStore, config: &StoreConfig) -> Result<CheckoutSummary, ApiError> {
    let state = cart.state()?;
    let quote = config.checkout_policy().quote(&state)?;
    debug!(total_cents = quote.total_cents, "quote command");

    Ok(CheckoutSummary {
        free_shipping: quote.has_free_shipping(),
        total_display: config.format_currency(quote.total_cents),
        quote,
    })
}

/// Submits the cart as an order and empties the cart.
pub fn place_order(
    data: &DataState,
    cart: &CartStore,
    config: &StoreConfig,
    user_id: &str,
) -> Result<Order, ApiError> {
    let user = require_user(data, user_id)?;

    let order = cart.drain_with(|state| {
        let quote = config.checkout_policy().quote(state)?;
        Ok(data.orders().submit(NewOrder {
            user_id: user.id,
            items: order_items(state),
            quote,
        })?)
    })?;

    info!(
        order_id = %order.id,
        total = %config.format_currency(order.total_cents),
        "Order placed"
    );
    Ok(order)
}
