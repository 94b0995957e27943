use anyhow::Result;
use clap::Parser;
use pipesite::Config;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Landing page server for the CI/CD pipeline project
#[derive(Debug, Parser)]
#[command(name = "pipesite", version)]
struct Cli {
    /// Port to listen on (overrides PORT and the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Directory to serve the static site from
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(Some(&cli.config))?;
    config.apply_cli(cli.port, cli.public_dir);

    info!("Serving static site from {}", config.public_dir.display());

    let handle = pipesite::run_server(&config).await?;

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received");
    handle.shutdown();

    Ok(())
}
