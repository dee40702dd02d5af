//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │        │
//! │  │  Cart    │     │          │     │  page    │     │  placed  │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │                        │                                 │              │
//! │                   add_to_cart                      place_order          │
//! │                   update_cart_item                 (checkout.rs)        │
//! │                   remove_from_cart                       │              │
//! │                        │                                 ▼              │
//! │                   clear_cart ─────────────────────► (back to empty)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `dispatch` takes any action as sent by the frontend; the other
//! commands are typed shortcuts for the same reducer.

use serde::Serialize;
use tracing::debug;

use paintshop_core::{CartAction, CartOutcome, CartState, CoreError};

use crate::error::ApiError;
use crate::state::{CartStore, DataState};

/// Cart after a command, with what the last action did.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub cart: CartState,
    /// `None` for plain reads.
    pub outcome: Option<CartOutcome>,
}

impl CartResponse {
    fn applied((outcome, cart): (CartOutcome, CartState)) -> Self {
        CartResponse {
            cart,
            outcome: Some(outcome),
        }
    }
}

pub fn get_cart(cart: &CartStore) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    Ok(CartResponse {
        cart: cart.state()?,
        outcome: None,
    })
}

/// Applies an action exactly as dispatched by the frontend.
///
/// No-op outcomes (`at_stock_limit`, `not_purchasable`, `not_in_cart`) are
/// not errors here.
pub fn dispatch(cart: &CartStore, action: CartAction) -> Result<CartResponse, ApiError> {
    debug!(action = action.kind(), "dispatch command");
    Ok(CartResponse::applied(cart.dispatch(action)?))
}

/// Adds one unit of a catalog product.
///
/// ## Behavior
/// - Product fetched fresh from the catalog; its price is frozen on the line
/// - Already in cart: quantity + 1, up to stock
/// - No price or no stock: `CART_ERROR`, cart unchanged
pub fn add_to_cart(
    data: &DataState,
    cart: &CartStore,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = data
        .catalog()
        .get(product_id)?
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    let (outcome, state) = cart.dispatch(CartAction::AddItem { product })?;
    if outcome == CartOutcome::NotPurchasable {
        return Err(CoreError::NotPurchasable {
            product_id: product_id.to_string(),
        }
        .into());
    }

    Ok(CartResponse::applied((outcome, state)))
}

/// Sets the quantity of a line; 0 or less removes it, above stock clamps.
pub fn update_cart_item(
    cart: &CartStore,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity, "update_cart_item command");
    Ok(CartResponse::applied(cart.dispatch(
        CartAction::UpdateQuantity {
            product_id: product_id.to_string(),
            quantity,
        },
    )?))
}

pub fn remove_from_cart(cart: &CartStore, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");
    Ok(CartResponse::applied(cart.dispatch(
        CartAction::RemoveItem {
            product_id: product_id.to_string(),
        },
    )?))
}

pub fn clear_cart(cart: &CartStore) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");
    Ok(CartResponse::applied(cart.dispatch(CartAction::ClearCart)?))
}
