// ============================================================================
// calc-server
// HTTP entry point: HTML form at / and JSON API at /api/calc
// ============================================================================

use anyhow::Context;
use clap::Parser;
use decimal_calculator::logging;
use decimal_calculator::server::{self, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    logging::init(&config.log_level).context("failed to initialise logging")?;

    server::serve(config).await.context("calculator server failed")?;

    Ok(())
}
