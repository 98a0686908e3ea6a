//! API token subcommand implementations.

mod create;
mod list;
mod revoke;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct TokensCommand {
    #[command(subcommand)]
    pub command: TokensSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TokensSubcommand {
    /// List a function's API tokens
    List(list::ListArgs),

    /// Generate a new API token
    Create(create::CreateArgs),

    /// Revoke an API token
    Revoke(revoke::RevokeArgs),
}

pub async fn handle(cmd: TokensCommand) -> Result<()> {
    match cmd.command {
        TokensSubcommand::List(args) => list::run(args).await,
        TokensSubcommand::Create(args) => create::run(args).await,
        TokensSubcommand::Revoke(args) => revoke::run(args).await,
    }
}
