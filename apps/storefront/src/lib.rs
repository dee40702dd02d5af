//! # Paintshop Storefront
//!
//! Composition root for the paint shop: builds the session state and
//! exposes the commands the web frontend calls.
//!
//! ## Module Organization
//! ```text
//! paintshop_storefront/
//! ├── lib.rs          ◄─── You are here (tracing setup)
//! ├── cli.rs          ◄─── clap subcommands for local runs
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState composition root
//! │   ├── cart.rs     ◄─── CartStore (dispatch)
//! │   ├── data.rs     ◄─── Repositories behind traits
//! │   └── config.rs   ◄─── StoreConfig (PAINTSHOP_* overrides)
//! ├── commands/
//! │   ├── account.rs  ◄─── Profile, orders, role checks
//! │   ├── catalog.rs  ◄─── Product grid and admin CRUD
//! │   ├── cart.rs     ◄─── Cart actions
//! │   ├── checkout.rs ◄─── Quote and order submission
//! │   └── media.rs    ◄─── Image uploads
//! └── error.rs        ◄─── ApiError for commands
//! ```
//!
//! ## Explicit State
//! Nothing is looked up from ambient context. A command receives the
//! exact pieces of [`state::AppState`] it works on:
//!
//! ```rust
//! use paintshop_storefront::commands::cart;
//! use paintshop_storefront::state::{AppState, StoreConfig};
//!
//! let app = AppState::seeded(StoreConfig::default(), Vec::new()).unwrap();
//! let response = cart::add_to_cart(&app.data, &app.cart, "1").unwrap();
//! assert_eq!(response.cart.total_quantity(), 1);
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=paintshop_media=trace` - Trace the image pipeline only
/// - Default: INFO, DEBUG for the paintshop crates
///
/// Logs go to stderr so command output on stdout stays valid JSON.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,paintshop=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
