//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::config::ConfigCommand;
use crate::commands::functions::FunctionsCommand;
use crate::commands::tokens::TokensCommand;

/// CLI for the FnForge backend-function platform.
#[derive(Parser, Debug)]
#[command(name = "fnforge")]
#[command(author, version = env!("FNFORGE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Session and account operations
    Auth(AuthCommand),

    /// Backend function operations
    Functions(FunctionsCommand),

    /// API token operations
    Tokens(TokensCommand),

    /// Local configuration
    Config(ConfigCommand),
}
