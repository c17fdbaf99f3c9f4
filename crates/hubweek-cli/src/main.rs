//! Hubweek CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hubweek_cli::cli::Cli;
use hubweek_cli::commands;
use hubweek_core::Config;

#[tokio::main]
async fn main() {
    // Load .env.local if present, then .env.
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // All configuration is resolved up front, before any network call.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::execute(cli.command, &config, &cli.hub).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
