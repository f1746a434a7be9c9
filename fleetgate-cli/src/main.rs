//! fleetgate - HTTP admission gateway for the vehicle management API
//!
//! Binds the listener, enforces the origin allow-list, validates JSON
//! bodies, and dispatches admitted requests to the mounted API groups.
//! Until real services are attached the groups answer 501, which keeps the
//! admission path observable end to end.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fleetgate_core::GatewayConfig;
use fleetgate_server::{serve, HandlerGroups};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fleetgate",
    author,
    version,
    about = "HTTP admission gateway for the vehicle management API",
    long_about = "Terminates HTTP for the vehicle management backend: requests are \
                  admitted against a fixed origin allow-list, JSON bodies are \
                  validated, and admitted traffic is dispatched by path prefix to \
                  the mounted API groups."
)]
struct Cli {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// Address to bind (default: 0.0.0.0)
    #[arg(long)]
    host: Option<String>,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing().ok();
    let cli = Cli::parse();

    let mut config = GatewayConfig::from_env().context("invalid gateway configuration")?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }

    info!(port = config.port, "starting fleetgate");
    serve(config, HandlerGroups::stubs())
        .await
        .context("gateway exited with an error")?;

    Ok(())
}
