//! List tokens command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use fnforge_api::TokenManager;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Function id that owns the tokens
    #[arg(long)]
    pub function_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    let manager = TokenManager::new(client, &args.function_id);
    let tokens = manager.list().await;

    if args.json {
        return output::json_pretty(&tokens);
    }

    if tokens.is_empty() {
        println!("No tokens.");
        return Ok(());
    }

    for token in tokens {
        let marker = if token.is_active {
            "active".green()
        } else {
            "revoked".dimmed()
        };
        println!(
            "{} {} [{}] {}",
            token.prefix.bold(),
            token.name,
            marker,
            token.id.dimmed()
        );
        if let Some(created_at) = token.created_at {
            println!("  created {}", created_at.to_rfc3339().dimmed());
        }
    }

    Ok(())
}
