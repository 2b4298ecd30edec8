use clap::Parser;
use std::path::PathBuf;

use venue_gateway::config::resolve_config;
use venue_gateway::lifecycle::startup;
use venue_gateway::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "venue-gateway", version)]
#[command(about = "HTTP gateway for the city search, venue listing and email APIs", long_about = None)]
struct Cli {
    /// TOML configuration file. Environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port, overriding both file and PORT.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = resolve_config(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.listener.port = port;
    }

    init_logging(&config.observability);

    tracing::info!("venue-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
