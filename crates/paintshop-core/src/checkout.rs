//! # Checkout Quote
//!
//! Turns a cart into the amounts shown on the checkout page.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Subtotal            = cart total                                       │
//! │  Shipping            = 0       if subtotal ≥ 3000.00                    │
//! │                        299.00  otherwise                                │
//! │  VAT (20%)           = subtotal × 20%   (shipping is not taxed)         │
//! │  ─────────────────────────────────────────────                          │
//! │  Total               = subtotal + shipping + VAT                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartState;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{OrderItem, TaxRate};
use crate::{DEFAULT_VAT_RATE_BPS, FREE_SHIPPING_THRESHOLD_CENTS, SHIPPING_FEE_CENTS};

/// Shipping and tax parameters of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPolicy {
    pub free_shipping_threshold_cents: i64,
    pub shipping_fee_cents: i64,
    pub vat_rate: TaxRate,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        CheckoutPolicy {
            free_shipping_threshold_cents: FREE_SHIPPING_THRESHOLD_CENTS,
            shipping_fee_cents: SHIPPING_FEE_CENTS,
            vat_rate: TaxRate::from_bps(DEFAULT_VAT_RATE_BPS),
        }
    }
}

/// Amounts for the order summary box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub vat_cents: i64,
    pub total_cents: i64,
}

impl CheckoutQuote {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping_cents == 0
    }
}

impl CheckoutPolicy {
    /// Quotes a cart.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when the cart has no lines.
    ///
    /// ## Example
    /// ```rust
    /// use paintshop_core::cart::CartState;
    /// use paintshop_core::checkout::CheckoutPolicy;
    ///
    /// let policy = CheckoutPolicy::default();
    /// assert!(policy.quote(&CartState::new()).is_err());
    /// ```
    pub fn quote(&self, cart: &CartState) -> CoreResult<CheckoutQuote> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let subtotal = cart.total();
        let shipping = if subtotal.cents() >= self.free_shipping_threshold_cents {
            Money::zero()
        } else {
            Money::from_cents(self.shipping_fee_cents)
        };
        let vat = subtotal.calculate_tax(self.vat_rate);

        Ok(CheckoutQuote {
            subtotal_cents: subtotal.cents(),
            shipping_cents: shipping.cents(),
            vat_cents: vat.cents(),
            total_cents: (subtotal + shipping + vat).cents(),
        })
    }
}

/// Snapshot of the cart lines as order items.
pub fn order_items(cart: &CartState) -> Vec<OrderItem> {
    cart.lines()
        .iter()
        .map(|line| OrderItem {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            unit_price_cents: line.unit_price_cents,
            quantity: line.quantity,
            line_total_cents: line.line_total().cents(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartAction;
    use crate::types::{Category, Product};

    fn cart_with(price_cents: i64, quantity: i64) -> CartState {
        let product = Product {
            id: "1".to_string(),
            name: "Red spray".to_string(),
            description: String::new(),
            price_cents,
            category: Category::SprayPaint,
            image: String::new(),
            stock: 100,
            brand: "KrasMax".to_string(),
            size: "400ml".to_string(),
        };
        let mut cart = CartState::new();
        cart.apply(CartAction::AddItem { product });
        cart.apply(CartAction::UpdateQuantity {
            product_id: "1".to_string(),
            quantity,
        });
        cart
    }

    #[test]
    fn test_empty_cart_cannot_be_quoted() {
        let result = CheckoutPolicy::default().quote(&CartState::new());
        assert!(matches!(result, Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_small_order_pays_shipping() {
        // 2 × 899.00 = 1798.00
        let quote = CheckoutPolicy::default().quote(&cart_with(89_900, 2)).unwrap();

        assert_eq!(quote.subtotal_cents, 179_800);
        assert_eq!(quote.shipping_cents, 29_900);
        assert_eq!(quote.vat_cents, 35_960);
        assert_eq!(quote.total_cents, 179_800 + 29_900 + 35_960);
        assert!(!quote.has_free_shipping());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let quote = CheckoutPolicy::default().quote(&cart_with(100_000, 3)).unwrap();

        assert_eq!(quote.subtotal_cents, 300_000);
        assert!(quote.has_free_shipping());
        assert_eq!(quote.total_cents, 360_000);
    }

    #[test]
    fn test_order_items_snapshot_lines() {
        let items = order_items(&cart_with(89_900, 3));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(items[0].line_total_cents, 269_700);
    }
}
