//! Refresh command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct RefreshArgs {}

pub async fn run(_args: RefreshArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    eprintln!("{}", "Refreshing session...".dimmed());

    client
        .refresh_session()
        .await
        .context("Failed to refresh session")?;

    output::success("Session refreshed successfully");
    Ok(())
}
