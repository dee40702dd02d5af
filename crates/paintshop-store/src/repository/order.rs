//! # Order Repository
//!
//! Accepts a cart snapshot at checkout and hands back the confirmation.
//!
//! ## Checkout Flow
//! ```text
//! CartState ──► order_items() + CheckoutQuote ──► NewOrder
//!                                                    │
//!                                                    ▼
//!                                        OrderRepository::submit
//!                                                    │
//!                                                    ▼
//!                                   Order { id, status: pending, ... }
//! ```

use std::sync::RwLock;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use paintshop_core::{CheckoutQuote, Order, OrderItem, OrderStatus};

/// Everything needed to record an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub quote: CheckoutQuote,
}

/// Order storage.
pub trait OrderRepository: Send + Sync {
    /// Records an order with status `pending` and returns it.
    fn submit(&self, order: NewOrder) -> StoreResult<Order>;

    fn get(&self, id: &str) -> StoreResult<Option<Order>>;

    /// Orders placed by one user, oldest first (account page).
    fn list_for_user(&self, user_id: &str) -> StoreResult<Vec<Order>>;

    /// Moves an order to a new fulfilment status.
    fn update_status(&self, id: &str, status: OrderStatus) -> StoreResult<Order>;
}

/// Orders kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryOrders {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        InMemoryOrders::default()
    }
}

impl OrderRepository for InMemoryOrders {
    fn submit(&self, order: NewOrder) -> StoreResult<Order> {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id: order.user_id,
            items: order.items,
            subtotal_cents: order.quote.subtotal_cents,
            shipping_cents: order.quote.shipping_cents,
            vat_cents: order.quote.vat_cents,
            total_cents: order.quote.total_cents,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        self.orders.write()?.push(order.clone());

        info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total_cents = order.total_cents,
            "Order submitted"
        );
        Ok(order)
    }

    fn get(&self, id: &str) -> StoreResult<Option<Order>> {
        let orders = self.orders.read()?;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    fn list_for_user(&self, user_id: &str) -> StoreResult<Vec<Order>> {
        let orders = self.orders.read()?;
        Ok(orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    fn update_status(&self, id: &str, status: OrderStatus) -> StoreResult<Order> {
        let mut orders = self.orders.write()?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Order", id))?;

        debug!(order_id = %id, from = ?order.status, to = ?status, "Order status change");
        order.status = status;
        Ok(order.clone())
    }
}
