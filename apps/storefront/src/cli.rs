//! # Command Line Interface
//!
//! Runs storefront commands against a seeded in-memory store, for local
//! checks of catalog queries, cart replays and image uploads.
//!
//! ```text
//! storefront catalog   [--category primer] [--search краска] [--sort price-low]
//! storefront cart      actions.json
//! storefront normalize photo.png [--max-width 800] [--max-height 800] [--quality 0.8]
//! storefront inline    photo.png
//! ```
//!
//! Every subcommand prints pretty JSON on success.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use paintshop_core::{CartAction, CartState, CatalogQuery, Category, SortOrder};
use paintshop_media::{ImageNormalizer, MediaError, NormalizeOptions, RawImageInput};

use crate::commands::{cart, catalog, checkout, media};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Paint shop storefront core: catalog, cart and product images")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products, filtered and sorted like the products page
    Catalog {
        /// spray-paint, varnish or primer
        #[arg(long)]
        category: Option<Category>,

        /// Matches name, description and brand, case-insensitive
        #[arg(long)]
        search: Option<String>,

        /// name, price-low or price-high
        #[arg(long, default_value = "name")]
        sort: SortOrder,
    },
    /// Replay a JSON array of cart actions and print the cart and quote
    Cart {
        /// File with `[{"type": "ADD_ITEM", ...}, ...]`
        actions: PathBuf,
    },
    /// Validate and normalize an image into a JPEG data URI
    Normalize {
        file: PathBuf,

        #[arg(long)]
        max_width: Option<u32>,

        #[arg(long)]
        max_height: Option<u32>,

        /// JPEG quality, 0.0 to 1.0
        #[arg(long)]
        quality: Option<f32>,
    },
    /// Validate an image and inline it unchanged as a data URI
    Inline { file: PathBuf },
}

/// Cart replay result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CartReport {
    cart: CartState,
    total_display: String,
    /// Absent for an empty cart.
    checkout: Option<checkout::CheckoutSummary>,
}

/// Runs one subcommand and returns its JSON output.
pub async fn run(command: Command, app: &AppState) -> Result<String, ApiError> {
    match command {
        Command::Catalog {
            category,
            search,
            sort,
        } => {
            let query = CatalogQuery {
                category,
                search,
                sort,
            };
            let products = catalog::list_products(&app.data, query)?;
            info!(count = products.len(), "Catalog listed");
            to_json(&products)
        }
        Command::Cart { actions } => {
            let raw = tokio::fs::read_to_string(&actions)
                .await
                .map_err(|e| ApiError::validation(format!("{}: {}", actions.display(), e)))?;
            let actions: Vec<CartAction> = serde_json::from_str(&raw)
                .map_err(|e| ApiError::validation(format!("Invalid cart actions: {}", e)))?;

            for action in actions {
                cart::dispatch(&app.cart, action)?;
            }

            let state = app.cart.state()?;
            let checkout = if state.is_empty() {
                None
            } else {
                Some(checkout::quote(&app.cart, &app.config)?)
            };
            to_json(&CartReport {
                total_display: app.config.format_currency(state.total_cents()),
                cart: state,
                checkout,
            })
        }
        Command::Normalize {
            file,
            max_width,
            max_height,
            quality,
        } => {
            let defaults = app.images.options();
            let options = NormalizeOptions {
                max_width: max_width.unwrap_or(defaults.max_width),
                max_height: max_height.unwrap_or(defaults.max_height),
                quality: quality.unwrap_or(defaults.quality),
            };
            let input = read_upload(&file).await?;
            let images = ImageNormalizer::new(options);
            let image = media::prepare_upload(&app.config, &images, &input).await?;
            to_json(&image)
        }
        Command::Inline { file } => {
            let input = read_upload(&file).await?;
            let uri = media::inline_upload(&app.config, &app.images, &input).await?;
            to_json(&uri)
        }
    }
}

async fn read_upload(path: &Path) -> Result<RawImageInput, ApiError> {
    RawImageInput::from_path(path)
        .await
        .map_err(|e| ApiError::from(MediaError::Io(e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::internal(format!("Failed to serialize output: {}", e)))
}
