//! # Domain Types
//!
//! Core domain types shared by the storefront crates.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Order      │   │  UserProfile    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (UUID)      │   │  id             │       │
//! │  │  name, brand    │   │  user_id        │   │  email          │       │
//! │  │  price_cents    │   │  items          │   │  name           │       │
//! │  │  category       │   │  total_cents    │   │  is_admin       │       │
//! │  │  stock, size    │   │  status         │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │  OrderStatus    │   │    TaxRate      │       │
//! │  │  SprayPaint     │   │  Pending        │   │  bps (u32)      │       │
//! │  │  Varnish        │   │  Processing     │   │  2000 = 20%     │       │
//! │  │  Primer         │   │  Shipped        │   └─────────────────┘       │
//! │  └─────────────────┘   │  Delivered      │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{LOW_STOCK_THRESHOLD, MAX_PRICE_CENTS};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 2000 bps = 20% VAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate(crate::DEFAULT_VAT_RATE_BPS)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category. Serialized the way the frontend routes use it
/// (`/products?category=spray-paint`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SprayPaint,
    Varnish,
    Primer,
}

impl Category {
    /// All categories in catalog display order.
    pub const ALL: [Category; 3] = [Category::SprayPaint, Category::Varnish, Category::Primer];

    /// Machine name, as used in URLs.
    pub const fn slug(&self) -> &'static str {
        match self {
            Category::SprayPaint => "spray-paint",
            Category::Varnish => "varnish",
            Category::Primer => "primer",
        }
    }

    /// Name shown on category badges.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Category::SprayPaint => "Краска-спрей",
            Category::Varnish => "Лак",
            Category::Primer => "Грунтовка",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s.trim())
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.slug().to_string()).collect(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier (opaque to the cart).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Long description shown on the product page.
    pub description: String,

    /// Price in minor units.
    pub price_cents: i64,

    pub category: Category,

    /// Image reference: a URL or an inline data URI produced by the
    /// image normalizer.
    pub image: String,

    /// Units in stock; caps the quantity a cart may hold.
    pub stock: i64,

    pub brand: String,

    /// Package size as printed on the label ("400мл", "1л").
    pub size: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// A product can go into a cart only with a price in
    /// `1..=MAX_PRICE_CENTS` and at least one unit in stock.
    pub fn is_purchasable(&self) -> bool {
        (1..=MAX_PRICE_CENTS).contains(&self.price_cents) && self.stock >= 1
    }

    /// Stock below [`LOW_STOCK_THRESHOLD`], sold out included.
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// price × stock, the shelf value of this product.
    pub fn inventory_value(&self) -> Money {
        self.price().multiply_quantity(self.stock.max(0))
    }
}

/// Fields for a product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: Category,
    pub image: String,
    pub stock: i64,
    pub brand: String,
    pub size: String,
}

impl NewProduct {
    /// Attaches an id, producing a catalog product.
    pub fn with_id(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            category: self.category,
            image: self.image,
            stock: self.stock,
            brand: self.brand,
            size: self.size,
        }
    }
}

/// Partial update for a product; `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub category: Option<Category>,
    pub image: Option<String>,
    pub stock: Option<i64>,
    pub brand: Option<String>,
    pub size: Option<String>,
}

impl ProductPatch {
    /// Applies the set fields onto `product`. The id never changes.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price_cents) = self.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(brand) = self.brand {
            product.brand = brand;
        }
        if let Some(size) = self.size {
            product.size = size;
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Submitted, not yet picked up by the warehouse.
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

/// A line of a submitted order.
/// Snapshot of the cart line at the moment of checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
}

/// A submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub vat_cents: i64,
    pub total_cents: i64,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// User
// =============================================================================

/// Identity handed over by the authentication provider, plus the profile
/// fields the storefront keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Grants access to the admin catalog screens.
    pub is_admin: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
