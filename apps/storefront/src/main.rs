//! # Storefront CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (defaults + `PAINTSHOP_*`)
//! 3. Build the seeded in-memory state
//! 4. Run the subcommand and print its JSON

use clap::Parser;
use tracing::{error, info};

use paintshop_storefront::cli::{self, Cli};
use paintshop_storefront::error::ApiError;
use paintshop_storefront::init_tracing;
use paintshop_storefront::state::{AppState, StoreConfig};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = ?err.code, "{}", err.message);
            eprintln!("{}", err);
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, ApiError> {
    let config = StoreConfig::from_env()?;
    info!(store = %config.store_name, "Starting storefront");

    let app = AppState::seeded(config, Vec::new())?;
    cli::run(cli.command, &app).await
}
