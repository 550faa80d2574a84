//! Space Empire terminal client binary.
//!
//! # Examples
//!
//! ```bash
//! # Interactive game
//! cargo run -p space-empire-client
//!
//! # Let the bot play a reproducible game
//! GAME_SEED=7 AUTOPLAY=true cargo run -p space-empire-client
//! ```

use anyhow::Result;
use runtime::Runtime;
use space_empire_client::{ClientConfig, app, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(&config)?;
    tracing::info!("Starting Space Empire client");
    tracing::info!("Seed: {:?}", config.seed);
    tracing::info!("Autoplay: {}", config.autoplay);

    // 3. Build Runtime
    let mut builder = Runtime::builder().config(config.runtime_config()?);
    if let Some(catalog) = config.load_catalog()? {
        tracing::info!("Using catalog from {:?}", config.catalog_path);
        builder = builder.catalog(catalog);
    }
    let runtime = builder.build()?;

    // 4. Play
    app::run(&runtime, &config).await?;

    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    Ok(())
}
