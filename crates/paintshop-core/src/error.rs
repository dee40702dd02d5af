//! # Error Types
//!
//! Domain-specific error types for paintshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  paintshop-core (this file)                                            │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  paintshop-store      StoreError    - Repository failures              │
//! │  paintshop-media      MediaError    - Upload / decode failures         │
//! │  apps/storefront      ApiError      - What the frontend sees           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart reducer itself never fails: absent products and unsellable
//! products are no-ops. Errors here come from checkout and admin forms.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout and catalog rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout was requested for a cart with no lines.
    ///
    /// ## User Workflow
    /// ```text
    /// Checkout page
    ///      │
    ///      ▼
    /// cart.lines == []  →  EmptyCart  →  "Your cart is empty"
    /// ```
    #[error("Cart is empty")]
    EmptyCart,

    /// Product cannot be put in a cart (zero price or out of stock).
    #[error("Product {product_id} is not available for purchase")]
    NotPurchasable { product_id: String },

    /// A form or query field was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level rejections, each naming the offending field.
///
/// Raised by the admin product form, the account form and catalog queries
/// before anything reaches a repository.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Blank after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Longer than the form allows, in characters.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Prices must be above zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g. malformed e-mail).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Not one of the accepted slugs.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result of a core operation.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
