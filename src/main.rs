use clap::Parser;
use tracing_subscriber::EnvFilter;

use flux_versions::config::{Config, MISSING_TOKEN_MESSAGE};
use flux_versions::error::ConfigError;

#[derive(Parser)]
#[command(name = "flux-versions")]
#[command(version, about = "Updates the Flux versions bundled with each InfluxDB release")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flux_versions=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::MissingToken(_)) => {
            eprintln!("{}", MISSING_TOKEN_MESSAGE);
            return Ok(());
        }
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(flux_versions::run(&config))?;

    Ok(())
}
