//! GreenPulse Emission Dashboard - Main Entry Point

use api::{init_logging, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== GreenPulse v{} ===", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::load()?;
    info!(
        hours = config.hours,
        bind_addr = %config.bind_addr,
        "Configuration loaded"
    );

    run_server(config).await?;

    Ok(())
}
