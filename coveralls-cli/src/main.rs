//! Coveralls CLI
//!
//! Command-line interface for managing repositories through the Coveralls API.

mod commands;
mod config;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "coveralls")]
#[command(about = "Coveralls repository management CLI", long_about = None)]
struct Cli {
    /// Coveralls API token
    #[arg(long, env = "COVERALLS_TOKEN", hide_env_values = true)]
    token: String,

    /// Coveralls server URL
    #[arg(long, env = "COVERALLS_URL", default_value = coveralls_client::DEFAULT_BASE_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, env = "COVERALLS_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coveralls=info,coveralls_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_token: cli.token,
        base_url: cli.url,
        timeout: Duration::from_secs(cli.timeout),
    };
    config.validate()?;

    // Dropping the command future on Ctrl-C aborts the in-flight request
    tokio::select! {
        result = handle_command(cli.command, &config) => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, request cancelled");
            anyhow::bail!("interrupted")
        }
    }
}
