//! Create token command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fnforge_api::{CreatedToken, TokenManager};

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Function id the token is scoped to
    #[arg(long)]
    pub function_id: String,

    /// Token name
    #[arg(long)]
    pub name: String,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    let manager = TokenManager::new(client, &args.function_id);
    let created = manager
        .create(&args.name)
        .await
        .context("Failed to generate token")?;

    match created {
        CreatedToken::Secret { secret, token } => {
            output::success("Token generated");
            output::warning("This token is shown once and cannot be retrieved again.");
            println!();
            println!("{}", secret);
            println!();
            output::field("ID", &token.id);
            output::field("Prefix", &token.prefix);
        }
        CreatedToken::GenerationLink(link) => {
            output::success("Token generation started");
            output::field("Complete issuance at", &link);
        }
    }

    Ok(())
}
