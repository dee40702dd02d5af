//! # Cart Store
//!
//! Owns the session's cart and serializes every mutation through one
//! reducer call.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read or modify the cart
//! 2. Only one action may be applied at a time
//! 3. Commands can run concurrently
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend Action        CartAction            Result                    │
//! │  ───────────────        ──────────            ──────                    │
//! │                                                                         │
//! │  "В корзину" ─────────► ADD_ITEM ───────────► Added / Incremented /     │
//! │                                               AtStockLimit              │
//! │  − / + buttons ───────► UPDATE_QUANTITY ────► QuantityChanged /         │
//! │                                               QuantityClamped / Removed │
//! │  Trash icon ──────────► REMOVE_ITEM ────────► Removed / NotInCart       │
//! │  Order placed ────────► CLEAR_CART ─────────► Cleared                   │
//! │                                                                         │
//! │  Every dispatch: lock → apply → snapshot → unlock                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use paintshop_core::{CartAction, CartOutcome, CartState};

use crate::error::ApiError;

/// Shared handle to the session cart.
///
/// Cloning shares the same cart.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<CartState>>,
}

impl CartStore {
    /// Creates a store with an empty cart.
    pub fn new() -> Self {
        CartStore::default()
    }

    /// Applies one action and returns the outcome with the resulting cart.
    pub fn dispatch(&self, action: CartAction) -> Result<(CartOutcome, CartState), ApiError> {
        let kind = action.kind();
        let mut cart = self.lock()?;
        let outcome = cart.apply(action);

        debug!(
            action = kind,
            ?outcome,
            lines = cart.item_count(),
            total_cents = cart.total_cents(),
            "Cart action applied"
        );

        Ok((outcome, cart.clone()))
    }

    /// Snapshot of the current cart.
    pub fn state(&self) -> Result<CartState, ApiError> {
        Ok(self.lock()?.clone())
    }

    /// Runs a read-only closure against the cart.
    pub fn with_cart<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&CartState) -> R,
    {
        let cart = self.lock()?;
        Ok(f(&cart))
    }

    /// Runs `f` on the cart and empties the cart if `f` succeeds, all under
    /// one lock. Actions dispatched meanwhile wait and land in the new,
    /// empty cart. On error the cart is left as it was.
    pub fn drain_with<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&CartState) -> Result<R, ApiError>,
    {
        let mut cart = self.lock()?;
        let result = f(&cart)?;
        cart.apply(CartAction::ClearCart);
        debug!("Cart drained");
        Ok(result)
    }

    fn lock(&self) -> Result<MutexGuard<'_, CartState>, ApiError> {
        self.cart
            .lock()
            .map_err(|_| ApiError::internal("Cart state is unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintshop_core::{Category, Product};

    fn primer(stock: i64) -> Product {
        Product {
            id: "3".to_string(),
            name: "Грунтовка универсальная".to_string(),
            description: String::new(),
            price_cents: 89_900,
            category: Category::Primer,
            image: String::new(),
            stock,
            brand: "Tikkurila".to_string(),
            size: "1л".to_string(),
        }
    }

    #[test]
    fn test_dispatch_returns_snapshot() {
        let store = CartStore::new();
        let (outcome, cart) = store
            .dispatch(CartAction::AddItem { product: primer(5) })
            .unwrap();

        assert_eq!(outcome, CartOutcome::Added);
        assert_eq!(cart.total_cents(), 89_900);
        assert_eq!(store.state().unwrap(), cart);
    }

    #[test]
    fn test_clones_share_cart() {
        let store = CartStore::new();
        let other = store.clone();

        other
            .dispatch(CartAction::AddItem { product: primer(5) })
            .unwrap();
        assert_eq!(store.with_cart(|c| c.total_quantity()).unwrap(), 1);
    }

    #[test]
    fn test_stock_cap_through_store() {
        let store = CartStore::new();
        let product = primer(3);

        let outcomes: Vec<CartOutcome> = (0..4)
            .map(|_| {
                store
                    .dispatch(CartAction::AddItem {
                        product: product.clone(),
                    })
                    .unwrap()
                    .0
            })
            .collect();

        assert_eq!(outcomes.last(), Some(&CartOutcome::AtStockLimit));
        let cart = store.state().unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_drain_clears_only_on_success() {
        let store = CartStore::new();
        store
            .dispatch(CartAction::AddItem { product: primer(5) })
            .unwrap();

        let err = store
            .drain_with(|_| Err::<(), _>(ApiError::internal("submit failed")))
            .unwrap_err();
        assert_eq!(err.message, "submit failed");
        assert_eq!(store.state().unwrap().total_quantity(), 1);

        let drained = store.drain_with(|cart| Ok(cart.clone())).unwrap();
        assert_eq!(drained.total_quantity(), 1);
        assert!(store.state().unwrap().is_empty());
    }

    #[test]
    fn test_add_during_drain_is_kept() {
        let store = CartStore::new();
        store
            .dispatch(CartAction::AddItem { product: primer(5) })
            .unwrap();

        let mut late = primer(5);
        late.id = "4".to_string();

        let (drained, adder) = store
            .drain_with(|cart| {
                let other = store.clone();
                let adder = std::thread::spawn(move || {
                    other.dispatch(CartAction::AddItem { product: late }).unwrap()
                });
                std::thread::sleep(std::time::Duration::from_millis(50));
                assert!(!adder.is_finished());
                Ok((cart.clone(), adder))
            })
            .unwrap();
        adder.join().unwrap();

        assert_eq!(drained.lines()[0].product_id, "3");
        let cart = store.state().unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.lines()[0].product_id, "4");
    }
}
