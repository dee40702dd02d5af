//! # Validation Module
//!
//! Input validation for the admin product form, the account form and
//! catalog search.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Frontend form      required attributes, input types           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command                                           │
//! │           └── THIS MODULE: business rules (price > 0, stock ≥ 0, ...)  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repository         id uniqueness                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{NewProduct, ProductPatch, UserProfile};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_SHORT_FIELD_LEN: usize = 50;
const MAX_SEARCH_LEN: usize = 100;

// =============================================================================
// Field Validators
// =============================================================================

/// Checks that a text field is non-blank and at most `max` characters.
pub fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a price in minor units. Free products are not sold.
///
/// ## Example
/// ```rust
/// use paintshop_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(89_900).is_ok());
/// assert!(validate_price_cents(0).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Stock may be zero (sold out) but never negative.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        });
    }
    Ok(())
}

/// Validates a search query and returns it trimmed.
/// Empty is allowed and means "no filter".
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

/// Minimal e-mail shape check: `local@domain.tld`.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected name@domain.tld".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the admin "add product" form.
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_text("name", &product.name, MAX_NAME_LEN)?;
    validate_text("brand", &product.brand, MAX_SHORT_FIELD_LEN)?;
    validate_text("size", &product.size, MAX_SHORT_FIELD_LEN)?;
    validate_price_cents(product.price_cents)?;
    validate_stock(product.stock)?;
    Ok(())
}

/// Validates only the fields a patch actually sets.
pub fn validate_product_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_text("name", name, MAX_NAME_LEN)?;
    }
    if let Some(brand) = &patch.brand {
        validate_text("brand", brand, MAX_SHORT_FIELD_LEN)?;
    }
    if let Some(size) = &patch.size {
        validate_text("size", size, MAX_SHORT_FIELD_LEN)?;
    }
    if let Some(price) = patch.price_cents {
        validate_price_cents(price)?;
    }
    if let Some(stock) = patch.stock {
        validate_stock(stock)?;
    }
    Ok(())
}

/// Validates the account profile form.
pub fn validate_user_profile(user: &UserProfile) -> ValidationResult<()> {
    validate_text("id", &user.id, MAX_SHORT_FIELD_LEN)?;
    validate_email(&user.email)?;
    validate_text("name", &user.name, MAX_NAME_LEN)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Oak wood stain".to_string(),
            description: String::new(),
            price_cents: 169_900,
            category: Category::Varnish,
            image: String::new(),
            stock: 20,
            brand: "WoodCraft".to_string(),
            size: "1l".to_string(),
        }
    }

    #[test]
    fn test_validate_text() {
        assert!(validate_text("name", "Primer", 10).is_ok());
        assert!(validate_text("name", "   ", 10).is_err());
        assert_eq!(
            validate_text("name", &"Ж".repeat(11), 10),
            Err(ValidationError::TooLong {
                field: "name".to_string(),
                max: 10
            })
        );
    }

    #[test]
    fn test_validate_price_and_stock() {
        assert!(validate_price_cents(1).is_ok());
        assert!(validate_price_cents(-100).is_err());
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_new_product() {
        assert!(validate_new_product(&new_product()).is_ok());

        let mut missing_brand = new_product();
        missing_brand.brand.clear();
        assert_eq!(
            validate_new_product(&missing_brand),
            Err(ValidationError::Required {
                field: "brand".to_string()
            })
        );
    }

    #[test]
    fn test_validate_patch_checks_only_set_fields() {
        assert!(validate_product_patch(&ProductPatch::default()).is_ok());

        let patch = ProductPatch {
            stock: Some(-3),
            ..ProductPatch::default()
        };
        assert!(validate_product_patch(&patch).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("admin@paintstore.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("admin").is_err());
        assert!(validate_email("@paintstore.com").is_err());
        assert!(validate_email("admin@localhost").is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  lak ").unwrap(), "lak");
        assert!(validate_search_query(&"x".repeat(101)).is_err());
    }
}
