//! # Storefront Commands
//!
//! Every operation the web frontend can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── account.rs   ◄─── Profile, order history, role checks
//! ├── catalog.rs   ◄─── Product grid, product page, admin CRUD
//! ├── cart.rs      ◄─── Cart actions
//! ├── checkout.rs  ◄─── Order summary and submission
//! └── media.rs     ◄─── Product image upload
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs repositories
//! fn list_products(data: &DataState, query: CatalogQuery)
//!
//! // Only needs cart
//! fn get_cart(cart: &CartStore)
//!
//! // Needs both
//! fn add_to_cart(data: &DataState, cart: &CartStore, product_id: &str)
//! ```
//!
//! Identity comes from the authentication provider as a user id; the
//! commands look the profile up and check the admin flag themselves.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod media;

#[cfg(test)]
pub(crate) mod test_support {
    use paintshop_core::UserProfile;

    use crate::state::{AppState, StoreConfig};

    pub const ADMIN_ID: &str = "admin-1";
    pub const SHOPPER_ID: &str = "user-1";

    pub fn app() -> AppState {
        let users = vec![
            UserProfile {
                id: ADMIN_ID.to_string(),
                email: "admin@paintshop.ru".to_string(),
                name: "Администратор".to_string(),
                is_admin: true,
            },
            UserProfile {
                id: SHOPPER_ID.to_string(),
                email: "ivan@example.com".to_string(),
                name: "Иван Иванов".to_string(),
                is_admin: false,
            },
        ];
        AppState::seeded(StoreConfig::default(), users).unwrap()
    }
}
