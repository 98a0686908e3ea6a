//! Revoke token command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fnforge_api::TokenManager;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct RevokeArgs {
    /// Function id that owns the token
    #[arg(long)]
    pub function_id: String,

    /// Token id to revoke
    #[arg(long)]
    pub token_id: String,
}

pub async fn run(args: RevokeArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    let manager = TokenManager::new(client, &args.function_id);
    manager
        .revoke(&args.token_id)
        .await
        .context("Failed to revoke token")?;

    output::success("Token revoked");
    Ok(())
}
