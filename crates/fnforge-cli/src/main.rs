//! fnforge - CLI for the FnForge backend-function platform.
//!
//! This is a thin wrapper over the `fnforge-api` library, intended for
//! scripting and debugging against a FnForge backend.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Auth(cmd) => commands::auth::handle(cmd).await,
        Commands::Functions(cmd) => commands::functions::handle(cmd).await,
        Commands::Tokens(cmd) => commands::tokens::handle(cmd).await,
        Commands::Config(cmd) => commands::config::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
