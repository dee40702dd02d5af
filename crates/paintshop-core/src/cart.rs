//! # Cart
//!
//! The shopping cart as a state machine: one [`CartState`], mutated only
//! by [`CartAction`]s through [`CartState::apply`].
//!
//! ## Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Actions                                         │
//! │                                                                         │
//! │  Frontend Action        CartAction                 Effect on lines      │
//! │  ───────────────        ──────────                 ───────────────      │
//! │                                                                         │
//! │  "В корзину" ─────────► ADD_ITEM { product } ────► qty + 1 (≤ stock)    │
//! │                                                    or push new line     │
//! │                                                                         │
//! │  − / + buttons ───────► UPDATE_QUANTITY ─────────► qty = n (≤ stock)    │
//! │                         { productId, quantity }    n ≤ 0 → remove       │
//! │                                                                         │
//! │  Trash icon ──────────► REMOVE_ITEM { productId } ► retain others       │
//! │                                                                         │
//! │  Order placed ────────► CLEAR_CART ──────────────► lines = []           │
//! │                                                                         │
//! │  After EVERY action:  total = Σ unit_price × quantity                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per `product_id`, in insertion order
//! - `1 <= quantity <= stock_limit <= MAX_ITEM_QUANTITY` for every line
//! - `total_cents` is derived, never set directly
//!
//! No action fails. Unknown products and unsellable products leave the
//! state untouched; the returned [`CartOutcome`] says what happened.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the cart.
///
/// Name, price and stock are frozen from the product at the time it was
/// first added, so later catalog edits do not change an open cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    /// Stock at the time of adding, capped at [`MAX_ITEM_QUANTITY`];
    /// upper bound for `quantity`.
    pub stock_limit: i64,
}

impl CartLine {
    /// Creates a line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
            stock_limit: product.stock.min(MAX_ITEM_QUANTITY),
        }
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// unit price × quantity
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// The closed set of cart mutations.
///
/// On the wire the action is tagged by `type`, matching what the frontend
/// dispatches:
/// ```json
/// { "type": "UPDATE_QUANTITY", "productId": "2", "quantity": 3 }
/// ```
/// An unknown `type` fails deserialization; it never reaches the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    AddItem {
        product: Product,
    },
    RemoveItem {
        #[serde(rename = "productId")]
        product_id: String,
    },
    UpdateQuantity {
        #[serde(rename = "productId")]
        product_id: String,
        quantity: i64,
    },
    ClearCart,
}

impl CartAction {
    /// Action name as dispatched by the frontend, for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem { .. } => "ADD_ITEM",
            CartAction::RemoveItem { .. } => "REMOVE_ITEM",
            CartAction::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            CartAction::ClearCart => "CLEAR_CART",
        }
    }
}

/// What an action did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CartOutcome {
    /// New line appended.
    Added,
    /// Existing line quantity increased by one.
    Incremented,
    /// ADD_ITEM on a line already at its stock limit.
    AtStockLimit,
    /// Product has no price or no stock; nothing added.
    NotPurchasable,
    /// Line quantity replaced.
    QuantityChanged,
    /// UPDATE_QUANTITY above stock; quantity set to the stock limit.
    QuantityClamped,
    Removed,
    /// The referenced product has no line in the cart.
    NotInCart,
    Cleared,
}

impl CartOutcome {
    /// Whether the lines changed.
    pub const fn changed(&self) -> bool {
        !matches!(
            self,
            CartOutcome::AtStockLimit | CartOutcome::NotPurchasable | CartOutcome::NotInCart
        )
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart: ordered lines plus the derived total.
///
/// Fields are private so the total can only move through [`apply`].
///
/// [`apply`]: CartState::apply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    lines: Vec<CartLine>,
    total_cents: i64,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    #[inline]
    pub fn total_cents(&self) -> i64 {
        self.total_cents
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities, shown on the cart badge.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Applies one action and recomputes the total.
    ///
    /// ## Examples
    /// ```rust
    /// use paintshop_core::cart::{CartAction, CartOutcome, CartState};
    ///
    /// let mut cart = CartState::new();
    /// let outcome = cart.apply(CartAction::RemoveItem { product_id: "42".into() });
    /// assert_eq!(outcome, CartOutcome::NotInCart);
    /// assert_eq!(cart, CartState::new());
    /// ```
    pub fn apply(&mut self, action: CartAction) -> CartOutcome {
        let outcome = match action {
            CartAction::AddItem { product } => self.add_item(&product),
            CartAction::RemoveItem { product_id } => self.remove_item(&product_id),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => self.update_quantity(&product_id, quantity),
            CartAction::ClearCart => {
                self.lines.clear();
                CartOutcome::Cleared
            }
        };

        self.recompute_total();
        outcome
    }

    /// Reducer form of [`apply`](CartState::apply): consumes the state
    /// and returns the next one.
    pub fn reduce(mut self, action: CartAction) -> CartState {
        self.apply(action);
        self
    }

    fn add_item(&mut self, product: &Product) -> CartOutcome {
        if !product.is_purchasable() {
            return CartOutcome::NotPurchasable;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            if line.quantity >= line.stock_limit {
                return CartOutcome::AtStockLimit;
            }
            line.quantity += 1;
            return CartOutcome::Incremented;
        }

        self.lines.push(CartLine::from_product(product));
        CartOutcome::Added
    }

    fn remove_item(&mut self, product_id: &str) -> CartOutcome {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);

        if self.lines.len() == before {
            CartOutcome::NotInCart
        } else {
            CartOutcome::Removed
        }
    }

    fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CartOutcome {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) else {
            return CartOutcome::NotInCart;
        };

        if quantity > line.stock_limit {
            line.quantity = line.stock_limit;
            CartOutcome::QuantityClamped
        } else {
            line.quantity = quantity;
            CartOutcome::QuantityChanged
        }
    }

    fn recompute_total(&mut self) {
        self.total_cents = self.lines.iter().map(CartLine::line_total).sum::<Money>().cents();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn paint(id: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Spray paint {}", id),
            description: String::new(),
            price_cents,
            category: Category::SprayPaint,
            image: String::new(),
            stock,
            brand: "KrasMax".to_string(),
            size: "400ml".to_string(),
        }
    }

    fn add(product: &Product) -> CartAction {
        CartAction::AddItem {
            product: product.clone(),
        }
    }

    fn expected_total(cart: &CartState) -> i64 {
        cart.lines()
            .iter()
            .map(|l| l.unit_price_cents * l.quantity)
            .sum()
    }

    #[test]
    fn test_add_item_appends_line() {
        let mut cart = CartState::new();
        let red = paint("1", 89_900, 50);

        assert_eq!(cart.apply(add(&red)), CartOutcome::Added);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.total_cents(), 89_900);
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = CartState::new();
        let red = paint("1", 89_900, 50);

        cart.apply(add(&red));
        assert_eq!(cart.apply(add(&red)), CartOutcome::Incremented);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_cents(), 179_800);
    }

    #[test]
    fn test_add_is_capped_at_stock() {
        let mut cart = CartState::new();
        let scarce = paint("7", 1_000, 3);

        for _ in 0..3 {
            cart.apply(add(&scarce));
        }
        assert_eq!(cart.apply(add(&scarce)), CartOutcome::AtStockLimit);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.total_cents(), 3_000);
    }

    #[test]
    fn test_add_unpurchasable_is_ignored() {
        let mut cart = CartState::new();

        assert_eq!(
            cart.apply(add(&paint("1", 89_900, 0))),
            CartOutcome::NotPurchasable
        );
        assert_eq!(cart.apply(add(&paint("2", 0, 5))), CartOutcome::NotPurchasable);
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartState::new();
        for id in ["3", "1", "2"] {
            cart.apply(add(&paint(id, 100, 5)));
        }
        cart.apply(add(&paint("1", 100, 5)));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = CartState::new();
        cart.apply(add(&paint("1", 89_900, 50)));
        let before = cart.clone();

        let outcome = cart.apply(CartAction::RemoveItem {
            product_id: "missing".to_string(),
        });

        assert_eq!(outcome, CartOutcome::NotInCart);
        assert!(!outcome.changed());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_existing() {
        let mut cart = CartState::new();
        cart.apply(add(&paint("1", 89_900, 50)));
        cart.apply(add(&paint("2", 109_900, 35)));

        cart.apply(CartAction::RemoveItem {
            product_id: "1".to_string(),
        });

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_cents(), 109_900);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        for quantity in [0, -5] {
            let mut cart = CartState::new();
            cart.apply(add(&paint("1", 89_900, 50)));

            let outcome = cart.apply(CartAction::UpdateQuantity {
                product_id: "1".to_string(),
                quantity,
            });

            assert_eq!(outcome, CartOutcome::Removed);
            assert!(cart.is_empty());
            assert_eq!(cart.total_cents(), 0);
        }
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = CartState::new();
        cart.apply(add(&paint("1", 89_900, 50)));

        let outcome = cart.apply(CartAction::UpdateQuantity {
            product_id: "1".to_string(),
            quantity: 4,
        });

        assert_eq!(outcome, CartOutcome::QuantityChanged);
        assert_eq!(cart.lines()[0].quantity, 4);
        assert_eq!(cart.total_cents(), 359_600);
    }

    #[test]
    fn test_update_above_stock_clamps() {
        let mut cart = CartState::new();
        cart.apply(add(&paint("1", 1_000, 3)));

        let outcome = cart.apply(CartAction::UpdateQuantity {
            product_id: "1".to_string(),
            quantity: 10,
        });

        assert_eq!(outcome, CartOutcome::QuantityClamped);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.total_cents(), 3_000);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut cart = CartState::new();
        cart.apply(add(&paint("1", 1_000, 3)));
        let before = cart.clone();

        let outcome = cart.apply(CartAction::UpdateQuantity {
            product_id: "9".to_string(),
            quantity: 2,
        });

        assert_eq!(outcome, CartOutcome::NotInCart);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_resets() {
        let mut cart = CartState::new();
        cart.apply(add(&paint("1", 89_900, 50)));
        cart.apply(add(&paint("2", 109_900, 35)));

        assert_eq!(cart.apply(CartAction::ClearCart), CartOutcome::Cleared);
        assert_eq!(cart, CartState::new());
        assert!(cart.lines().is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_total_invariant_over_action_sequence() {
        let red = paint("1", 89_900, 2);
        let black = paint("2", 109_900, 35);
        let primer = paint("6", 99_900, 60);

        let actions = vec![
            add(&red),
            add(&black),
            add(&red),
            add(&red),
            CartAction::UpdateQuantity {
                product_id: "2".to_string(),
                quantity: 7,
            },
            add(&primer),
            CartAction::RemoveItem {
                product_id: "1".to_string(),
            },
            CartAction::UpdateQuantity {
                product_id: "6".to_string(),
                quantity: 100,
            },
            add(&red),
            CartAction::UpdateQuantity {
                product_id: "2".to_string(),
                quantity: -1,
            },
            CartAction::ClearCart,
            add(&primer),
        ];

        let mut cart = CartState::new();
        for action in actions {
            cart.apply(action);
            assert_eq!(cart.total_cents(), expected_total(&cart));
            assert!(cart
                .lines()
                .iter()
                .all(|l| l.quantity >= 1 && l.quantity <= l.stock_limit));
        }
        assert_eq!(cart.total_cents(), 99_900);
    }

    #[test]
    fn test_huge_stock_is_capped_per_line() {
        let mut cart = CartState::new();
        cart.apply(add(&paint("1", 89_900, i64::MAX)));

        let outcome = cart.apply(CartAction::UpdateQuantity {
            product_id: "1".to_string(),
            quantity: 1_000_000_000_000_000,
        });

        assert_eq!(outcome, CartOutcome::QuantityClamped);
        assert_eq!(cart.lines()[0].quantity, MAX_ITEM_QUANTITY);
        assert_eq!(cart.total_cents(), 89_900 * MAX_ITEM_QUANTITY);
        assert_eq!(cart.total_cents(), expected_total(&cart));
    }

    #[test]
    fn test_overpriced_product_is_not_added() {
        let mut cart = CartState::new();
        let outcome = cart.apply(add(&paint("1", i64::MAX, 5)));

        assert_eq!(outcome, CartOutcome::NotPurchasable);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_reduce_returns_next_state() {
        let cart = CartState::new()
            .reduce(add(&paint("1", 500, 5)))
            .reduce(add(&paint("1", 500, 5)));
        assert_eq!(cart.total_cents(), 1_000);
    }

    #[test]
    fn test_action_wire_format() {
        let json = r#"{"type":"UPDATE_QUANTITY","productId":"2","quantity":3}"#;
        let action: CartAction = serde_json::from_str(json).unwrap();
        assert_eq!(
            action,
            CartAction::UpdateQuantity {
                product_id: "2".to_string(),
                quantity: 3,
            }
        );

        let clear: CartAction = serde_json::from_str(r#"{"type":"CLEAR_CART"}"#).unwrap();
        assert_eq!(clear.kind(), "CLEAR_CART");
    }

    #[test]
    fn test_unknown_action_is_rejected_at_the_edge() {
        let result = serde_json::from_str::<CartAction>(r#"{"type":"APPLY_COUPON"}"#);
        assert!(result.is_err());
    }
}
