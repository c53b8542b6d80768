use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkpress::api::run_server;
use inkpress::config::{load_config, Config};
use inkpress::Error;

/// Mock content-publishing backend
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to inkpress.toml (searched upward from cwd when omitted)
    #[arg(long, env = "INKPRESS_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkpress=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => inkpress::config::load_config_from_path(path)?,
        None => match load_config() {
            Ok(config) => config,
            Err(Error::ConfigNotFound) => {
                tracing::warn!("no inkpress.toml found, using defaults");
                Config::default()
            }
            Err(e) => return Err(e.into()),
        },
    };

    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);

    run_server(config, &host, port).await?;
    Ok(())
}
