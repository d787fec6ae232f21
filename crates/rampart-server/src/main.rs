//! Rampart server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `rampart-config.yaml` (or the path given as
//!    the first argument), falling back to defaults
//! 2. Initialize structured logging (tracing)
//! 3. Construct the game state store
//! 4. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use rampart_api::AppState;
use rampart_core::{GameState, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "rampart-config.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run().await?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = ServiceConfig::load_or_default(&config_path)?;

    // RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        config_path = %config_path.display(),
        config_file_found = config_path.exists(),
        host = %config.server.host,
        port = config.server.port,
        "rampart-server starting"
    );

    let game = Arc::new(GameState::new());
    let state = Arc::new(AppState::new(game));

    rampart_api::start_server(&config.server, state).await?;

    info!("rampart-server shut down cleanly");
    Ok(())
}
