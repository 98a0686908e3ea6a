//! List functions command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use fnforge_api::FunctionsApi;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    let functions = FunctionsApi::new(client)
        .list()
        .await
        .context("Failed to list functions")?;

    if args.json {
        return output::json_pretty(&functions);
    }

    if functions.is_empty() {
        println!("No functions yet.");
        return Ok(());
    }

    for function in functions {
        let marker = if function.is_active {
            "active".green()
        } else {
            "inactive".dimmed()
        };
        println!(
            "{} [{}] {}",
            function.name.bold(),
            marker,
            function.id.dimmed()
        );
        if !function.description.is_empty() {
            println!("  {}", function.description.dimmed());
        }
    }

    Ok(())
}
